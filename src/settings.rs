use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::SignatureData;
use crate::error::SignatureResult;
use crate::image::ImageSettings;
use crate::style::SignatureStyle;
use crate::template::SignatureTemplate;

/// Everything that determines a rendered signature.
///
/// A plain value: editors replace the whole thing on every change and the
/// codec only ever reads one or builds a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: SignatureData,
    pub style: SignatureStyle,
    pub template: SignatureTemplate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSettings>,
}

impl Settings {
    pub fn new(data: SignatureData, style: SignatureStyle, template: SignatureTemplate) -> Self {
        Self {
            data,
            style,
            template,
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageSettings) -> Self {
        self.image = Some(image);
        self
    }

    pub fn from_yaml_str(yaml: &str) -> SignatureResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> SignatureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml_string(&self) -> SignatureResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> SignatureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a settings file. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> SignatureResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "loading settings");
        if is_json_path(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Save a snapshot of the settings, format chosen like [`Settings::load`].
    pub fn save(&self, path: impl AsRef<Path>) -> SignatureResult<()> {
        let path = path.as_ref();
        let content = if is_json_path(path) {
            self.to_json_string()?
        } else {
            self.to_yaml_string()?
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
