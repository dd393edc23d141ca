use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";
pub const DEFAULT_SECONDARY_COLOR: &str = "#4b5563";

/// Visual style of a signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureStyle {
    /// CSS font stack, e.g. `Arial, sans-serif`
    pub font_family: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub image_fit: ImageFit,
}

impl Default for SignatureStyle {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            image_fit: ImageFit::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

impl ImageFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
            ImageFit::Fill => "fill",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim() {
            "cover" => Some(ImageFit::Cover),
            "contain" => Some(ImageFit::Contain),
            "fill" => Some(ImageFit::Fill),
            _ => None,
        }
    }
}
