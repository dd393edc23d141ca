//! Editing-boundary checks for [`Settings`].
//!
//! The generator accepts anything; these rules are what an editor enforces
//! before it hands settings to the codec.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{SignatureError, SignatureResult};
use crate::image::ImageSettings;
use crate::settings::Settings;
use crate::template::{FieldType, SignatureTemplate};

/// Validate a complete settings value, stopping at the first problem.
pub fn validate_settings(settings: &Settings) -> SignatureResult<()> {
    if settings.data.full_name.trim().is_empty() {
        return Err(SignatureError::MissingFullName);
    }
    validate_color(&settings.style.primary_color, "primaryColor")?;
    validate_color(&settings.style.secondary_color, "secondaryColor")?;
    validate_template(&settings.template)?;
    if let Some(image) = &settings.image {
        validate_image(image)?;
    }
    Ok(())
}

pub fn validate_template(template: &SignatureTemplate) -> SignatureResult<()> {
    validate_image_scale(template.image_scale)?;
    validate_field_order(template)
}

pub fn validate_image_scale(scale: f64) -> SignatureResult<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(SignatureError::InvalidImageScale { value: scale })
    }
}

/// No duplicate types, and `required` set on fullName and nothing else
fn validate_field_order(template: &SignatureTemplate) -> SignatureResult<()> {
    let mut seen = HashSet::new();
    for field in &template.field_order {
        if !seen.insert(field.field_type) {
            return Err(SignatureError::DuplicateField {
                field: field.field_type.as_str().to_string(),
            });
        }
        if field.required && field.field_type != FieldType::FullName {
            return Err(SignatureError::UnexpectedRequiredField {
                field: field.field_type.as_str().to_string(),
            });
        }
    }

    let name_ok = template
        .field_order
        .iter()
        .any(|f| f.field_type == FieldType::FullName && f.required);
    if !name_ok {
        return Err(SignatureError::MissingRequiredField {
            field: FieldType::FullName.as_str().to_string(),
        });
    }
    Ok(())
}

fn validate_image(image: &ImageSettings) -> SignatureResult<()> {
    validate_range(image.shadow_opacity, 0.0, 1.0, "shadowOpacity")?;
    validate_color(&image.shadow_color, "shadowColor")
}

pub fn validate_color(color: &str, property: &str) -> SignatureResult<()> {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

    if hex_regex.is_match(color) {
        Ok(())
    } else {
        Err(SignatureError::InvalidColor {
            property: property.to_string(),
            value: color.to_string(),
        })
    }
}

fn validate_range(value: f64, min: f64, max: f64, property: &str) -> SignatureResult<()> {
    if !(min..=max).contains(&value) {
        Err(SignatureError::ValueOutOfRange {
            property: property.to_string(),
            value: value.to_string(),
            range: format!("{} to {}", min, max),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SignatureData;
    use crate::template::FieldDescriptor;

    fn valid() -> Settings {
        Settings {
            data: SignatureData {
                full_name: "Paul Atreides".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid()).is_ok());
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#ff0000", "primaryColor").is_ok());
        assert!(validate_color("#B45309", "primaryColor").is_ok());
        assert!(validate_color("#fff", "primaryColor").is_err());
        assert!(validate_color("red", "primaryColor").is_err());
        assert!(validate_color("#gg0000", "primaryColor").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(0.0, 0.0, 1.0, "shadowOpacity").is_ok());
        assert!(validate_range(1.0, 0.0, 1.0, "shadowOpacity").is_ok());
        assert!(validate_range(1.1, 0.0, 1.0, "shadowOpacity").is_err());
        assert!(validate_range(f64::NAN, 0.0, 1.0, "shadowOpacity").is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut settings = valid();
        settings.data.full_name = "   ".to_string();
        assert!(matches!(
            validate_settings(&settings),
            Err(SignatureError::MissingFullName)
        ));
    }

    #[test]
    fn test_bad_color_names_property() {
        let mut settings = valid();
        settings.style.secondary_color = "blue".to_string();
        match validate_settings(&settings) {
            Err(SignatureError::InvalidColor { property, value }) => {
                assert_eq!(property, "secondaryColor");
                assert_eq!(value, "blue");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_scale_must_be_positive() {
        assert!(validate_image_scale(0.5).is_ok());
        assert!(validate_image_scale(0.0).is_err());
        assert!(validate_image_scale(-1.0).is_err());
        assert!(validate_image_scale(f64::INFINITY).is_err());
    }

    #[test]
    fn test_duplicate_descriptor_rejected() {
        let mut settings = valid();
        settings
            .template
            .field_order
            .push(FieldDescriptor::new(FieldType::Email, 4));
        assert!(matches!(
            validate_settings(&settings),
            Err(SignatureError::DuplicateField { field }) if field == "email"
        ));
    }

    #[test]
    fn test_full_name_must_stay_required() {
        let mut settings = valid();
        settings
            .template
            .field_order
            .retain(|f| f.field_type != FieldType::FullName);
        assert!(matches!(
            validate_settings(&settings),
            Err(SignatureError::MissingRequiredField { .. })
        ));

        let mut settings = valid();
        for f in settings.template.field_order.iter_mut() {
            f.required = false;
        }
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_only_full_name_may_be_required() {
        let mut settings = valid();
        for f in settings.template.field_order.iter_mut() {
            if f.field_type == FieldType::Email {
                f.visible = false;
                f.required = true;
            }
        }
        assert!(matches!(
            validate_settings(&settings),
            Err(SignatureError::UnexpectedRequiredField { field }) if field == "email"
        ));
    }

    #[test]
    fn test_overlay_checked() {
        let settings = valid().with_image(ImageSettings {
            shadow_opacity: 1.5,
            ..Default::default()
        });
        assert!(matches!(
            validate_settings(&settings),
            Err(SignatureError::ValueOutOfRange { .. })
        ));

        let settings = valid().with_image(ImageSettings {
            shadow_color: "black".to_string(),
            ..Default::default()
        });
        assert!(validate_settings(&settings).is_err());
    }
}
