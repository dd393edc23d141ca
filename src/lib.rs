//! # sigcraft
//!
//! Email signature settings model with a table-based HTML encoder and a
//! best-effort importer.
//!
//! ## Features
//! - Serializable settings (personal data, style, template, image overlay) in YAML or JSON
//! - Email-client-safe output: nested tables, inline styles, escaped content
//! - Marker attributes for exact re-import, with style heuristics for older exports
//! - Signature dark variant, preview dark transform and WCAG contrast checks
//! - Plain-text rendition for `text/plain` mail parts
//!
//! ## Example
//! ```ignore
//! use sigcraft::{decode, encode, Settings};
//!
//! let settings = Settings::from_yaml_str(r#"
//! data:
//!   fullName: Paul Atreides
//!   jobTitle: Duke
//!   email: muaddib@arrakis.dune
//! style:
//!   primaryColor: "#B45309"
//! "#).expect("Failed to load settings");
//!
//! let html = encode(&settings);
//! let imported = decode(&html).expect("Generated HTML should import");
//! assert_eq!(imported.data.full_name, "Paul Atreides");
//! ```

pub mod color;
pub mod css;
pub mod data;
pub mod dom;
pub mod error;
pub mod escape;
pub mod generator;
pub mod icons;
pub mod image;
pub mod markers;
pub mod parser;
pub mod settings;
pub mod style;
pub mod template;
pub mod text;
pub mod validator;

// --- Core types ---
pub use data::{SignatureData, SocialLink, SocialPlatform};
pub use error::{SignatureError, SignatureResult};
pub use image::{ImageSettings, ImageShape};
pub use settings::Settings;
pub use style::{ImageFit, SignatureStyle};
pub use template::{FieldDescriptor, FieldType, SignatureTemplate};

// --- Codec ---
pub use color::{check_contrast, ColorMode, ContrastWarning};
pub use generator::{encode, encode_with, RenderOptions};
pub use parser::decode;
pub use text::to_plain_text;
pub use validator::validate_settings;
