use serde::{Deserialize, Serialize};

use crate::style::ImageFit;

/// Optional photo treatment layered over the template's image style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSettings {
    pub shape: ImageShape,
    /// Used only when `shape` is `Rounded`
    pub corner_radius: u32,
    /// Overrides `SignatureStyle::image_fit` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ImageFit>,
    pub shadow: bool,
    pub shadow_color: String,
    pub shadow_opacity: f64,
    pub shadow_blur: u32,
    pub shadow_offset_x: i32,
    pub shadow_offset_y: i32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            shape: ImageShape::default(),
            corner_radius: 12,
            object_fit: None,
            shadow: false,
            shadow_color: "#000000".to_string(),
            shadow_opacity: 0.2,
            shadow_blur: 8,
            shadow_offset_x: 0,
            shadow_offset_y: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageShape {
    #[default]
    Circle,
    Rounded,
    Square,
}
