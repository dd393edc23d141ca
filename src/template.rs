use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Layout and per-field configuration of a signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureTemplate {
    pub layout: Layout,
    pub image_style: ImageStyle,
    pub content_style: ContentStyle,
    pub cta_layout: RowLayout,
    pub title_layout: RowLayout,
    pub show_icons: bool,
    pub icon_style: IconStyle,
    pub image_alignment: ImageAlignment,
    /// Multiplier over the 100px base photo size
    pub image_scale: f64,
    pub padding: Padding,
    pub field_order: Vec<FieldDescriptor>,
}

impl Default for SignatureTemplate {
    fn default() -> Self {
        let content_style = ContentStyle::default();
        Self {
            layout: Layout::default(),
            image_style: ImageStyle::default(),
            content_style,
            cta_layout: RowLayout::Stacked,
            title_layout: RowLayout::Stacked,
            show_icons: false,
            icon_style: IconStyle::default(),
            image_alignment: ImageAlignment::default(),
            image_scale: 1.0,
            padding: Padding::default(),
            field_order: default_field_order(content_style),
        }
    }
}

impl SignatureTemplate {
    /// The field order the generator renders with.
    ///
    /// Later duplicates are dropped, only fullName keeps `required` and it is
    /// inserted (after a leading photo) when missing. `field_order` itself is
    /// left untouched.
    pub fn effective_field_order(&self) -> Vec<FieldDescriptor> {
        let mut seen = HashSet::new();
        let mut order: Vec<FieldDescriptor> = self
            .field_order
            .iter()
            .filter(|f| seen.insert(f.field_type))
            .cloned()
            .map(|mut f| {
                f.required = f.field_type == FieldType::FullName;
                f
            })
            .collect();

        match order
            .iter_mut()
            .find(|f| f.field_type == FieldType::FullName)
        {
            Some(name) => name.required = true,
            None => {
                let at = usize::from(
                    order
                        .first()
                        .is_some_and(|f| f.field_type == FieldType::Photo),
                );
                order.insert(
                    at,
                    FieldDescriptor::new(FieldType::FullName, self.content_style.field_spacing()),
                );
            }
        }
        order
    }

    /// Descriptor for `field_type` in the effective order, if any.
    pub fn descriptor(&self, field_type: FieldType) -> Option<FieldDescriptor> {
        self.effective_field_order()
            .into_iter()
            .find(|f| f.field_type == field_type)
    }

    /// Rendered photo edge length in pixels: `round(100 * image_scale)`.
    pub fn image_size(&self) -> u32 {
        let size = (BASE_IMAGE_SIZE * self.image_scale).round();
        if size.is_finite() && size > 0.0 {
            size as u32
        } else {
            0
        }
    }
}

/// Base unit of the photo size in pixels
pub const BASE_IMAGE_SIZE: f64 = 100.0;

/// Default field order for a content density, every field visible.
pub fn default_field_order(content_style: ContentStyle) -> Vec<FieldDescriptor> {
    let spacing = content_style.field_spacing();
    FieldType::ALL
        .into_iter()
        .map(|t| FieldDescriptor::new(t, spacing))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Rounded,
    Square,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStyle {
    #[default]
    Compact,
    Spacious,
}

impl ContentStyle {
    /// Default trailing spacing for a field
    pub fn field_spacing(self) -> u32 {
        match self {
            ContentStyle::Compact => 4,
            ContentStyle::Spacious => 16,
        }
    }

    /// Gap between the photo and the content block
    pub fn image_gap(self) -> u32 {
        match self {
            ContentStyle::Compact => 12,
            ContentStyle::Spacious => 20,
        }
    }

    pub fn name_size(self) -> u32 {
        match self {
            ContentStyle::Compact => 16,
            ContentStyle::Spacious => 18,
        }
    }
}

/// Stacked rows or a single inline row with separators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLayout {
    #[default]
    Stacked,
    Inline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Outline,
    Solid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlignment {
    Start,
    #[default]
    Center,
    End,
}

/// Outer padding of the main cell, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 16,
            right: 24,
            bottom: 16,
            left: 24,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Photo,
    FullName,
    JobTitle,
    Company,
    Email,
    Phone,
    Website,
    Address,
    SocialLinks,
    Cta,
    AdditionalCta,
}

impl FieldType {
    pub const ALL: [FieldType; 11] = [
        FieldType::Photo,
        FieldType::FullName,
        FieldType::JobTitle,
        FieldType::Company,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Website,
        FieldType::Address,
        FieldType::SocialLinks,
        FieldType::Cta,
        FieldType::AdditionalCta,
    ];

    /// camelCase name, identical to the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Photo => "photo",
            FieldType::FullName => "fullName",
            FieldType::JobTitle => "jobTitle",
            FieldType::Company => "company",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Website => "website",
            FieldType::Address => "address",
            FieldType::SocialLinks => "socialLinks",
            FieldType::Cta => "cta",
            FieldType::AdditionalCta => "additionalCta",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// One entry of the field order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub required: bool,
    /// Pixels appended after the field
    #[serde(default)]
    pub spacing: u32,
}

fn default_true() -> bool {
    true
}

impl FieldDescriptor {
    pub fn new(field_type: FieldType, spacing: u32) -> Self {
        Self {
            field_type,
            visible: true,
            required: field_type == FieldType::FullName,
            spacing,
        }
    }

    /// Only fullName renders while marked invisible; `required` means
    /// nothing on any other field.
    pub fn renders(&self) -> bool {
        self.visible || self.field_type == FieldType::FullName
    }
}
