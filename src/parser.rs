//! Best-effort HTML → [`Settings`] importer.
//!
//! Markup carrying `data-sig-version` on its outer table is read marker-first:
//! template attributes come from the table markers and every field comes from
//! its `data-sig` element. Markup without markers (older exports, hand edited
//! copies) goes through style heuristics keyed on the generator's inline
//! styles. A template marker that is missing or unreadable falls back to the
//! heuristic for that value only.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::color::to_hex;
use crate::css::{
    contains_literal, declaration, has_declaration, padding_side, padding_values, px, Side,
};
use crate::data::{SignatureData, SocialLink, SocialPlatform};
use crate::dom::{Dom, DomError};
use crate::generator::TITLE_COLOR;
use crate::icons::{is_svg_data_uri, svg_markup};
use crate::image::{ImageSettings, ImageShape};
use crate::markers;
use crate::settings::Settings;
use crate::style::{
    ImageFit, SignatureStyle, DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR,
    DEFAULT_SECONDARY_COLOR,
};
use crate::template::{
    default_field_order, ContentStyle, FieldDescriptor, FieldType, IconStyle, ImageAlignment,
    ImageStyle, Layout, Padding, RowLayout, SignatureTemplate, BASE_IMAGE_SIZE,
};

/// Why a document could not be read as a signature
#[derive(Debug, Error)]
enum DecodeError {
    #[error("no <table> element")]
    NoTable,
    #[error("table has no cells")]
    EmptyTable,
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Recover settings from signature HTML.
///
/// Returns `None` on any structural mismatch; there is no partial result.
/// Values the markup does not reveal come back as defaults.
pub fn decode(html: &str) -> Option<Settings> {
    match try_decode(html) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::debug!(%err, "signature import failed");
            None
        }
    }
}

fn try_decode(html: &str) -> Result<Settings, DecodeError> {
    let dom = Dom::parse(html)?;
    let table = dom.first("table").ok_or(DecodeError::NoTable)?;
    let main = dom
        .marked(markers::MAIN_CELL)
        .filter(|&i| dom.is_descendant_of(i, table))
        .or_else(|| {
            dom.iter()
                .find(|(i, e)| e.is("td") && dom.is_descendant_of(*i, table))
                .map(|(i, _)| i)
        })
        .ok_or(DecodeError::EmptyTable)?;

    let reader = Reader {
        dom: &dom,
        table,
        main,
        markers: dom.get(table).attr(markers::ATTR_VERSION).is_some(),
    };
    tracing::trace!(markers = reader.markers, "decoding signature");
    Ok(reader.settings())
}

struct Reader<'d> {
    dom: &'d Dom,
    table: usize,
    main: usize,
    /// Outer table carries `data-sig-version`
    markers: bool,
}

impl Reader<'_> {
    fn settings(&self) -> Settings {
        let photo = self.photo();
        let template = self.template(photo);
        Settings {
            data: self.data(photo),
            style: self.style(photo),
            image: photo.and_then(|p| self.image_overlay(p, template.image_style)),
            template,
        }
    }

    /// Template-level marker on the outer table
    fn table_marker(&self, attr: &str) -> Option<&str> {
        if !self.markers {
            return None;
        }
        self.dom.get(self.table).attr(attr)
    }

    /// Element marked for `field`, only in marker mode
    fn marked(&self, field: FieldType) -> Option<usize> {
        if !self.markers {
            return None;
        }
        self.dom.marked(field.as_str())
    }

    /// With markers the `data-sig` element is authoritative, so an absent
    /// field stays empty instead of being guessed from its neighbours.
    fn locate(&self, field: FieldType, heuristic: impl FnOnce() -> Option<usize>) -> Option<usize> {
        if self.markers {
            self.dom.marked(field.as_str())
        } else {
            heuristic()
        }
    }

    fn anchor_with_scheme(&self, scheme: &str) -> Option<usize> {
        self.dom.find(|e| {
            e.is("a")
                && e
                    .attr("href")
                    .is_some_and(|h| h.trim().to_ascii_lowercase().starts_with(scheme))
        })
    }

    fn photo(&self) -> Option<usize> {
        self.locate(FieldType::Photo, || {
            self.dom.find(|e| {
                e.is("img") && e.attr("src").is_some_and(|src| !is_svg_data_uri(src))
            })
        })
    }

    fn full_name(&self) -> Option<usize> {
        self.locate(FieldType::FullName, || {
            self.dom
                .find(|e| has_declaration(e.style(), "font-weight", "bold"))
        })
    }

    fn job_title(&self) -> Option<usize> {
        self.locate(FieldType::JobTitle, || {
            self.dom.find(|e| contains_literal(e.style(), TITLE_COLOR))
        })
    }

    fn company(&self) -> Option<usize> {
        self.locate(FieldType::Company, || {
            self.dom
                .find(|e| has_declaration(e.style(), "font-weight", "600"))
        })
    }

    /// Marked field elements keep their text as written; anything found by
    /// heuristics is trimmed.
    fn text(&self, index: Option<usize>) -> String {
        index
            .map(|i| self.dom.get(i))
            .map(|e| {
                if self.markers && e.attr(markers::ATTR_FIELD).is_some() {
                    e.raw_text.clone()
                } else {
                    e.text.clone()
                }
            })
            .unwrap_or_default()
    }

    fn attr(&self, index: Option<usize>, name: &str) -> String {
        index
            .and_then(|i| self.dom.get(i).attr(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn color_of(&self, index: usize) -> Option<String> {
        declaration(self.dom.get(index).style(), "color")
    }

    fn data(&self, photo: Option<usize>) -> SignatureData {
        let email = self.locate(FieldType::Email, || self.anchor_with_scheme("mailto:"));
        let phone = self.locate(FieldType::Phone, || self.anchor_with_scheme("tel:"));
        let website = self.locate(FieldType::Website, || {
            self.dom.find(|e| {
                e.is("a")
                    && e.attr("href").is_some_and(|h| {
                        let h = h.trim().to_ascii_lowercase();
                        !h.is_empty() && !h.starts_with("mailto:") && !h.starts_with("tel:")
                    })
            })
        });
        let cta = self.marked(FieldType::Cta);
        let additional_cta = self.marked(FieldType::AdditionalCta);

        SignatureData {
            photo: self.attr(photo, "src"),
            full_name: self.text(self.full_name()),
            job_title: self.text(self.job_title()),
            company: self.text(self.company()),
            phone: self.text(phone),
            email: self.text(email),
            website: self.attr(website, "href"),
            address: self.text(self.marked(FieldType::Address)),
            social_links: self.social_links(),
            cta_text: self.text(cta),
            cta_link: self.attr(cta, "href"),
            additional_cta_text: self.text(additional_cta),
            additional_cta_link: self.attr(additional_cta, "href"),
        }
    }

    fn social_links(&self) -> Vec<SocialLink> {
        let Some(group) = self.marked(FieldType::SocialLinks) else {
            return Vec::new();
        };
        self.dom
            .iter()
            .filter(|(i, e)| e.is("a") && self.dom.is_descendant_of(*i, group))
            .filter_map(|(_, e)| {
                let url = e.attr("href").map(str::trim).filter(|u| !u.is_empty())?;
                let platform = e
                    .attr(markers::ATTR_PLATFORM)
                    .and_then(SocialPlatform::from_key)
                    .unwrap_or(SocialPlatform::Other);
                Some(SocialLink {
                    platform,
                    url: url.to_string(),
                })
            })
            .collect()
    }

    fn style(&self, photo: Option<usize>) -> SignatureStyle {
        let font_family = declaration(self.dom.get(self.table).style(), "font-family")
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
        let primary_color = self
            .full_name()
            .and_then(|i| self.color_of(i))
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string());
        let secondary_color = self
            .secondary_source()
            .and_then(|i| self.color_of(i))
            .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string());
        let image_fit = photo
            .and_then(|p| declaration(self.dom.get(p).style(), "object-fit"))
            .and_then(|v| ImageFit::from_css(&v.to_ascii_lowercase()))
            .unwrap_or_default();

        SignatureStyle {
            font_family,
            primary_color,
            secondary_color,
            image_fit,
        }
    }

    /// Element painted with the secondary color
    fn secondary_source(&self) -> Option<usize> {
        if !self.markers {
            return self.dom.first("a");
        }
        let is_contact = |field: FieldType| {
            matches!(
                field,
                FieldType::Email | FieldType::Phone | FieldType::Website | FieldType::Address
            )
        };
        self.dom
            .find(|e| {
                e.is("a")
                    && (e.attr(markers::ATTR_PLATFORM).is_some()
                        || e
                            .attr(markers::ATTR_FIELD)
                            .and_then(FieldType::parse)
                            .is_some_and(is_contact))
            })
            .or_else(|| self.dom.marked(FieldType::Company.as_str()))
    }

    fn template(&self, photo: Option<usize>) -> SignatureTemplate {
        let main_style = self.dom.get(self.main).style();

        let layout = self
            .table_marker(markers::ATTR_LAYOUT)
            .and_then(markers::parse_layout)
            .unwrap_or_else(|| {
                if has_declaration(main_style, "text-align", "center") {
                    Layout::Vertical
                } else {
                    Layout::Horizontal
                }
            });

        let content_style = self
            .table_marker(markers::ATTR_CONTENT)
            .and_then(markers::parse_content)
            .unwrap_or_else(|| self.content_style_from_spacing());

        let (show_icons, icon_style) = match self
            .table_marker(markers::ATTR_ICONS)
            .and_then(markers::parse_icons)
        {
            Some(Some(style)) => (true, style),
            Some(None) => (false, IconStyle::default()),
            None => self.icons_from_images(),
        };

        let image_alignment = self
            .table_marker(markers::ATTR_ALIGN)
            .and_then(markers::parse_align)
            .or_else(|| photo.map(|p| self.alignment_from_wrappers(p, layout)))
            .unwrap_or_default();

        let image_scale = self
            .table_marker(markers::ATTR_SCALE)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|s| valid_scale(*s))
            .or_else(|| {
                photo
                    .and_then(|p| self.dom.get(p).attr("width"))
                    .and_then(|w| w.trim().parse::<f64>().ok())
                    .map(|w| w / BASE_IMAGE_SIZE)
                    .filter(|s| valid_scale(*s))
            })
            .unwrap_or(1.0);

        let title_layout = self
            .table_marker(markers::ATTR_TITLE_LAYOUT)
            .and_then(markers::parse_row_layout)
            .unwrap_or_else(|| self.title_layout_from_cells());
        let cta_layout = self
            .table_marker(markers::ATTR_CTA_LAYOUT)
            .and_then(markers::parse_row_layout)
            .unwrap_or_default();

        SignatureTemplate {
            layout,
            image_style: photo
                .map(|p| self.image_style(p))
                .unwrap_or_default(),
            content_style,
            cta_layout,
            title_layout,
            show_icons,
            icon_style,
            image_alignment,
            image_scale,
            padding: Padding {
                top: padding_side(main_style, Side::Top),
                right: padding_side(main_style, Side::Right),
                bottom: padding_side(main_style, Side::Bottom),
                left: padding_side(main_style, Side::Left),
            },
            field_order: self.field_order(content_style),
        }
    }

    /// Any cell padding of at least the spacious field spacing anywhere in
    /// the document. The main cell's own padding counts too.
    fn content_style_from_spacing(&self) -> ContentStyle {
        let threshold = ContentStyle::Spacious.field_spacing();
        let spacious = self.dom.iter().any(|(_, e)| {
            e.is("td") && padding_values(e.style()).iter().any(|&v| v >= threshold)
        });
        if spacious {
            ContentStyle::Spacious
        } else {
            ContentStyle::Compact
        }
    }

    fn icons_from_images(&self) -> (bool, IconStyle) {
        let icon = self
            .dom
            .iter()
            .find_map(|(_, e)| e.attr("src").filter(|s| e.is("img") && is_svg_data_uri(s)));
        match icon {
            Some(src) if svg_markup(src).contains(r#"fill="none""#) => (true, IconStyle::Outline),
            Some(_) => (true, IconStyle::Solid),
            None => (false, IconStyle::default()),
        }
    }

    fn alignment_from_wrappers(&self, photo: usize, layout: Layout) -> ImageAlignment {
        match layout {
            Layout::Vertical => {
                if self.dom.ancestors(photo).any(|i| self.dom.get(i).is("center")) {
                    ImageAlignment::Center
                } else {
                    ImageAlignment::Start
                }
            }
            Layout::Horizontal => self
                .dom
                .ancestors(photo)
                .find_map(|i| declaration(self.dom.get(i).style(), "vertical-align"))
                .map(|v| match v.to_ascii_lowercase().as_str() {
                    "top" => ImageAlignment::Start,
                    "bottom" => ImageAlignment::End,
                    _ => ImageAlignment::Center,
                })
                .unwrap_or_default(),
        }
    }

    /// Job title and company sharing one cell
    fn title_layout_from_cells(&self) -> RowLayout {
        let cell = |i: Option<usize>| i.and_then(|i| self.dom.closest(i, "td"));
        match (cell(self.job_title()), cell(self.company())) {
            (Some(a), Some(b)) if a == b => RowLayout::Inline,
            _ => RowLayout::Stacked,
        }
    }

    fn image_style(&self, photo: usize) -> ImageStyle {
        let e = self.dom.get(photo);
        let round = has_declaration(e.style(), "border-radius", "50%")
            || e.attr("class").is_some_and(|c| c.contains("rounded-full"));
        if round {
            ImageStyle::Rounded
        } else {
            ImageStyle::Square
        }
    }

    /// Photo treatment the template alone cannot express: a pixel corner
    /// radius other than the square default, or a drop shadow.
    fn image_overlay(&self, photo: usize, image_style: ImageStyle) -> Option<ImageSettings> {
        let style = self.dom.get(photo).style();
        let radius = declaration(style, "border-radius")
            .and_then(|r| px(&r))
            .filter(|&r| r != SQUARE_RADIUS_PX);
        let shadow = declaration(style, "box-shadow").and_then(|s| parse_shadow(&s));
        if radius.is_none() && shadow.is_none() {
            return None;
        }

        let mut image = shadow.unwrap_or_default();
        match radius {
            Some(r) => {
                image.shape = ImageShape::Rounded;
                image.corner_radius = r;
            }
            None if image_style == ImageStyle::Rounded => image.shape = ImageShape::Circle,
            None => image.shape = ImageShape::Square,
        }
        Some(image)
    }

    fn field_order(&self, content_style: ContentStyle) -> Vec<FieldDescriptor> {
        if !self.markers {
            return default_field_order(content_style);
        }
        let default_spacing = content_style.field_spacing();

        let mut order: Vec<FieldDescriptor> = Vec::new();
        for (i, e) in self.dom.iter() {
            let Some(field) = e.attr(markers::ATTR_FIELD).and_then(FieldType::parse) else {
                continue;
            };
            if order.iter().any(|f| f.field_type == field) {
                continue;
            }
            // the photo cell's padding is the image gap, not a field spacing
            let spacing = match field {
                FieldType::Photo => None,
                _ => self
                    .dom
                    .closest(i, "td")
                    .and_then(|td| declaration(self.dom.get(td).style(), "padding-bottom"))
                    .and_then(|v| px(&v)),
            };
            order.push(FieldDescriptor::new(
                field,
                spacing.unwrap_or(default_spacing),
            ));
        }

        // fields absent from the markup are empty; keep them visible so
        // filling them in later shows them
        for field in FieldType::ALL {
            if !order.iter().any(|f| f.field_type == field) {
                order.push(FieldDescriptor::new(field, default_spacing));
            }
        }
        order
    }
}

/// Pixel radius the generator uses for square photos
const SQUARE_RADIUS_PX: u32 = 8;

fn valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

fn shadow_regex() -> &'static Regex {
    static SHADOW_REGEX: OnceLock<Regex> = OnceLock::new();
    SHADOW_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(-?\d+)(?:px)?\s+(-?\d+)(?:px)?\s+(\d+)(?:px)?\s+rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)",
        )
        .unwrap()
    })
}

/// `"Xpx Ypx Bpx rgba(r,g,b,o)"` into the shadow part of an overlay
fn parse_shadow(value: &str) -> Option<ImageSettings> {
    let caps = shadow_regex().captures(value)?;
    let group = |i: usize| caps.get(i).map(|m| m.as_str());
    let channel = |i: usize| -> Option<u8> { group(i)?.parse().ok() };

    Some(ImageSettings {
        shadow: true,
        shadow_offset_x: group(1)?.parse().ok()?,
        shadow_offset_y: group(2)?.parse().ok()?,
        shadow_blur: group(3)?.parse().ok()?,
        shadow_color: to_hex(channel(4)?, channel(5)?, channel(6)?),
        shadow_opacity: group(7)?.parse().ok()?,
        ..Default::default()
    })
}
