//! Settings → email-client-safe HTML.
//!
//! The output is one outer `<table>` with inline styles only: mail clients
//! strip `<style>` blocks and most modern layout CSS but honor table cells and
//! their attributes. Rendering is total and deterministic; empty fields are
//! skipped rather than rendered as empty tags.

use std::fmt::Write;

use crate::color::{rgba_from_hex, signature_dark_color, ColorMode};
use crate::css::InlineStyle;
use crate::data::SignatureData;
use crate::escape::{escape_html, safe_href};
use crate::icons::{icon_data_uri, ICON_SIZE};
use crate::image::{ImageSettings, ImageShape};
use crate::markers;
use crate::settings::Settings;
use crate::template::{
    FieldDescriptor, FieldType, ImageAlignment, ImageStyle, Layout, RowLayout, SignatureTemplate,
};

/// Job title color; the importer also keys on this literal
pub const TITLE_COLOR: &str = "#666666";
const TEXT_COLOR: &str = "#333333";
const DARK_TEXT_COLOR: &str = "#e5e7eb";
const SEPARATOR_COLOR: &str = "#999999";
const CTA_TEXT_COLOR: &str = "#ffffff";
/// Corner radius of a square photo
const SQUARE_RADIUS: &str = "8px";
const MAPS_SEARCH_URL: &str = "https://maps.google.com/?q=";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: ColorMode,
}

impl RenderOptions {
    pub fn dark() -> Self {
        Self {
            mode: ColorMode::Dark,
        }
    }
}

/// Render `settings` as a light-mode HTML signature.
pub fn encode(settings: &Settings) -> String {
    encode_with(settings, &RenderOptions::default())
}

/// Render `settings` as an HTML signature fragment.
pub fn encode_with(settings: &Settings, options: &RenderOptions) -> String {
    let order = settings.template.effective_field_order();
    let _span = tracing::trace_span!(
        "encode",
        layout = markers::layout_name(settings.template.layout),
        fields = order.len(),
        mode = ?options.mode
    )
    .entered();

    let renderer = Renderer {
        data: &settings.data,
        template: &settings.template,
        image: settings.image.as_ref(),
        palette: Palette::resolve(settings, options.mode),
        font_family: &settings.style.font_family,
        object_fit: settings
            .image
            .as_ref()
            .and_then(|i| i.object_fit)
            .unwrap_or(settings.style.image_fit)
            .as_css(),
        order,
    };

    let mut html = String::new();
    if let Err(err) = renderer.write_signature(&mut html) {
        // Writing into a String cannot fail; keep whatever was produced.
        tracing::error!(%err, "signature rendering interrupted");
    }
    html
}

/// Colors after the render mode is applied
struct Palette {
    primary: String,
    secondary: String,
    text: &'static str,
    title: String,
}

impl Palette {
    fn resolve(settings: &Settings, mode: ColorMode) -> Self {
        let style = &settings.style;
        match mode {
            ColorMode::Light => Self {
                primary: style.primary_color.clone(),
                secondary: style.secondary_color.clone(),
                text: TEXT_COLOR,
                title: TITLE_COLOR.to_string(),
            },
            ColorMode::Dark => Self {
                primary: signature_dark_color(&style.primary_color),
                secondary: signature_dark_color(&style.secondary_color),
                text: DARK_TEXT_COLOR,
                title: signature_dark_color(TITLE_COLOR),
            },
        }
    }
}

struct Renderer<'a> {
    data: &'a SignatureData,
    template: &'a SignatureTemplate,
    image: Option<&'a ImageSettings>,
    palette: Palette,
    font_family: &'a str,
    object_fit: &'static str,
    order: Vec<FieldDescriptor>,
}

/// A unit of the content column: one field, or a title/CTA pair on one row
enum Row<'o> {
    Field(&'o FieldDescriptor),
    Pair {
        first: FieldType,
        second: FieldType,
        spacing: u32,
        kind: PairKind,
    },
}

#[derive(Clone, Copy)]
enum PairKind {
    Title,
    Cta,
}

fn table_open(out: &mut String, extra: &str, style: &str) -> std::fmt::Result {
    write!(
        out,
        r#"<table cellpadding="0" cellspacing="0" border="0" role="presentation"{} style="{}">"#,
        extra,
        escape_html(style)
    )
}

impl<'a> Renderer<'a> {
    fn write_signature(&self, out: &mut String) -> std::fmt::Result {
        let t = self.template;
        let markers_attrs = format!(
            r#" {}="{}" {}="{}" {}="{}" {}="{}" {}="{}" {}="{}" {}="{}" {}="{}""#,
            markers::ATTR_VERSION,
            markers::VERSION,
            markers::ATTR_LAYOUT,
            markers::layout_name(t.layout),
            markers::ATTR_CONTENT,
            markers::content_name(t.content_style),
            markers::ATTR_ALIGN,
            markers::align_name(t.image_alignment),
            markers::ATTR_ICONS,
            markers::icons_name(t.show_icons, t.icon_style),
            markers::ATTR_TITLE_LAYOUT,
            markers::row_layout_name(t.title_layout),
            markers::ATTR_CTA_LAYOUT,
            markers::row_layout_name(t.cta_layout),
            markers::ATTR_SCALE,
            t.image_scale,
        );
        let outer_style = InlineStyle::new()
            .push("border-collapse", "collapse")
            .push("font-family", self.font_family)
            .push_px("font-size", 14)
            .push("line-height", "1.4")
            .push("color", self.palette.text);
        table_open(out, &markers_attrs, outer_style.as_str())?;

        let text_align = match t.layout {
            Layout::Vertical => "center",
            Layout::Horizontal => "left",
        };
        let main_style = InlineStyle::new()
            .push_px("padding-top", t.padding.top)
            .push_px("padding-right", t.padding.right)
            .push_px("padding-bottom", t.padding.bottom)
            .push_px("padding-left", t.padding.left)
            .push("text-align", text_align);
        write!(
            out,
            r#"<tr><td {}="{}" style="{}">"#,
            markers::ATTR_FIELD,
            markers::MAIN_CELL,
            escape_html(main_style.as_str())
        )?;

        match t.layout {
            Layout::Horizontal => self.write_horizontal(out)?,
            Layout::Vertical => self.write_vertical(out)?,
        }

        write!(out, "</td></tr></table>")
    }

    fn write_horizontal(&self, out: &mut String) -> std::fmt::Result {
        table_open(out, "", "border-collapse: collapse;")?;
        write!(out, "<tr>")?;
        if self.shows_photo() {
            let valign = match self.template.image_alignment {
                ImageAlignment::Start => "top",
                ImageAlignment::Center => "middle",
                ImageAlignment::End => "bottom",
            };
            let cell_style = InlineStyle::new()
                .push("vertical-align", valign)
                .push_px("padding-right", self.template.content_style.image_gap());
            write!(
                out,
                r#"<td valign="{}" style="{}">"#,
                valign,
                escape_html(cell_style.as_str())
            )?;
            self.write_photo(out, None)?;
            write!(out, "</td>")?;
        }
        write!(out, r#"<td valign="top" style="vertical-align: top;">"#)?;
        self.write_content(out)?;
        write!(out, "</td></tr></table>")
    }

    fn write_vertical(&self, out: &mut String) -> std::fmt::Result {
        table_open(out, "", "border-collapse: collapse; width: 100%;")?;
        if self.shows_photo() {
            let align = self.template.image_alignment;
            let (attr, css) = match align {
                ImageAlignment::Start => ("left", "left"),
                ImageAlignment::Center => ("center", "center"),
                ImageAlignment::End => ("right", "right"),
            };
            let cell_style = InlineStyle::new()
                .push_px("padding-bottom", self.template.content_style.image_gap())
                .push("text-align", css);
            write!(
                out,
                r#"<tr><td align="{}" style="{}">"#,
                attr,
                escape_html(cell_style.as_str())
            )?;
            if align == ImageAlignment::Center {
                write!(out, "<center>")?;
                self.write_photo(out, Some(align))?;
                write!(out, "</center>")?;
            } else {
                self.write_photo(out, Some(align))?;
            }
            write!(out, "</td></tr>")?;
        }
        write!(out, r#"<tr><td align="center" style="text-align: center;">"#)?;
        self.write_content(out)?;
        write!(out, "</td></tr></table>")
    }

    fn shows_photo(&self) -> bool {
        !self.data.photo.is_empty()
            && self
                .order
                .iter()
                .any(|f| f.field_type == FieldType::Photo && f.renders())
    }

    fn border_radius(&self) -> String {
        match self.image {
            Some(img) if img.shape == ImageShape::Rounded => format!("{}px", img.corner_radius),
            _ => match self.template.image_style {
                ImageStyle::Rounded => "50%".to_string(),
                ImageStyle::Square => SQUARE_RADIUS.to_string(),
            },
        }
    }

    fn box_shadow(&self) -> Option<String> {
        let img = self.image.filter(|i| i.shadow)?;
        Some(format!(
            "{}px {}px {}px {}",
            img.shadow_offset_x,
            img.shadow_offset_y,
            img.shadow_blur,
            rgba_from_hex(&img.shadow_color, img.shadow_opacity)
        ))
    }

    /// `vertical` carries the alignment when the photo sits in its own row.
    fn write_photo(&self, out: &mut String, vertical: Option<ImageAlignment>) -> std::fmt::Result {
        let size = self.template.image_size();
        let margin = match vertical {
            Some(ImageAlignment::Center) => Some("0 auto"),
            Some(ImageAlignment::End) => Some("0 0 0 auto"),
            _ => None,
        };
        let mut style = InlineStyle::new()
            .push("display", "block")
            .push_px("width", size)
            .push_px("height", size)
            .push("object-fit", self.object_fit)
            .push("border-radius", self.border_radius())
            .push("border", "0");
        if let Some(m) = margin {
            style = style.push("margin", m);
        }
        if let Some(shadow) = self.box_shadow() {
            style = style.push("box-shadow", shadow);
        }
        write!(
            out,
            r#"<img {}="{}" src="{}" alt="{}" width="{}" height="{}" style="{}" />"#,
            markers::ATTR_FIELD,
            FieldType::Photo.as_str(),
            escape_html(&self.data.photo),
            escape_html(&self.data.full_name),
            size,
            size,
            escape_html(style.as_str())
        )
    }

    fn has_content(&self, field: FieldType) -> bool {
        let d = self.data;
        match field {
            FieldType::Photo => false,
            FieldType::FullName => !d.full_name.is_empty(),
            FieldType::JobTitle => !d.job_title.is_empty(),
            FieldType::Company => !d.company.is_empty(),
            FieldType::Email => !d.email.is_empty(),
            FieldType::Phone => !d.phone.is_empty(),
            FieldType::Website => !d.website.is_empty(),
            FieldType::Address => !d.address.is_empty(),
            FieldType::SocialLinks => d.present_social_links().next().is_some(),
            FieldType::Cta => d.has_cta(),
            FieldType::AdditionalCta => d.has_additional_cta(),
        }
    }

    /// Fields that render, grouped into rows according to the title and CTA layouts.
    fn rows(&self) -> Vec<Row<'_>> {
        let shown: Vec<&FieldDescriptor> = self
            .order
            .iter()
            .filter(|f| f.renders() && self.has_content(f.field_type))
            .collect();

        let pair_of = |field: FieldType| match field {
            FieldType::JobTitle if self.template.title_layout == RowLayout::Inline => {
                Some((FieldType::Company, PairKind::Title))
            }
            FieldType::Company if self.template.title_layout == RowLayout::Inline => {
                Some((FieldType::JobTitle, PairKind::Title))
            }
            FieldType::Cta if self.template.cta_layout == RowLayout::Inline => {
                Some((FieldType::AdditionalCta, PairKind::Cta))
            }
            FieldType::AdditionalCta if self.template.cta_layout == RowLayout::Inline => {
                Some((FieldType::Cta, PairKind::Cta))
            }
            _ => None,
        };

        let mut rows = Vec::with_capacity(shown.len());
        let mut consumed: Vec<FieldType> = Vec::new();
        for (i, field) in shown.iter().enumerate() {
            if consumed.contains(&field.field_type) {
                continue;
            }
            let partner = pair_of(field.field_type).and_then(|(other, kind)| {
                shown[i + 1..]
                    .iter()
                    .find(|f| f.field_type == other)
                    .map(|f| (*f, kind))
            });
            match partner {
                Some((second, kind)) => {
                    consumed.push(second.field_type);
                    rows.push(Row::Pair {
                        first: field.field_type,
                        second: second.field_type,
                        spacing: second.spacing,
                        kind,
                    });
                }
                None => rows.push(Row::Field(*field)),
            }
        }
        rows
    }

    fn write_content(&self, out: &mut String) -> std::fmt::Result {
        let rows = self.rows();
        if rows.is_empty() {
            return Ok(());
        }
        let align = match self.template.layout {
            Layout::Vertical => r#" align="center""#,
            Layout::Horizontal => "",
        };
        table_open(out, align, "border-collapse: collapse;")?;
        for row in &rows {
            let spacing = match row {
                Row::Field(f) => f.spacing,
                Row::Pair { spacing, .. } => *spacing,
            };
            let cell_style = InlineStyle::new()
                .push_px("padding-bottom", spacing)
                .push_if(self.template.layout == Layout::Vertical, "text-align", "center");
            write!(out, r#"<tr><td style="{}">"#, escape_html(cell_style.as_str()))?;
            match row {
                Row::Field(f) => self.write_field(out, f.field_type)?,
                Row::Pair {
                    first,
                    second,
                    kind,
                    ..
                } => {
                    self.write_field(out, *first)?;
                    match kind {
                        PairKind::Title => write!(
                            out,
                            r#"<span style="color: {};">&nbsp;&bull;&nbsp;</span>"#,
                            SEPARATOR_COLOR
                        )?,
                        PairKind::Cta => write!(out, "&nbsp;&nbsp;")?,
                    }
                    self.write_field(out, *second)?;
                }
            }
            write!(out, "</td></tr>")?;
        }
        write!(out, "</table>")
    }

    fn write_field(&self, out: &mut String, field: FieldType) -> std::fmt::Result {
        let d = self.data;
        let p = &self.palette;
        let marker = format!(r#"{}="{}""#, markers::ATTR_FIELD, field.as_str());
        match field {
            FieldType::Photo => Ok(()),
            FieldType::FullName => {
                let style = InlineStyle::new()
                    .push_px("font-size", self.template.content_style.name_size())
                    .push("font-weight", "bold")
                    .push("color", &p.primary);
                write!(
                    out,
                    r#"<span {} style="{}">{}</span>"#,
                    marker,
                    escape_html(style.as_str()),
                    escape_html(&d.full_name)
                )
            }
            FieldType::JobTitle => {
                let style = InlineStyle::new()
                    .push("color", &p.title)
                    .push_px("font-size", 13);
                write!(
                    out,
                    r#"<span {} style="{}">{}</span>"#,
                    marker,
                    escape_html(style.as_str()),
                    escape_html(&d.job_title)
                )
            }
            FieldType::Company => {
                let style = InlineStyle::new()
                    .push("font-weight", "600")
                    .push("color", &p.secondary);
                write!(
                    out,
                    r#"<span {} style="{}">{}</span>"#,
                    marker,
                    escape_html(style.as_str()),
                    escape_html(&d.company)
                )
            }
            FieldType::Email => {
                self.write_icon(out, field)?;
                self.write_link(out, &marker, &format!("mailto:{}", d.email), &d.email)
            }
            FieldType::Phone => {
                self.write_icon(out, field)?;
                let dial: String = d.phone.chars().filter(|c| !c.is_whitespace()).collect();
                self.write_link(out, &marker, &format!("tel:{}", dial), &d.phone)
            }
            FieldType::Website => {
                self.write_icon(out, field)?;
                self.write_link(out, &marker, &d.website, display_url(&d.website))
            }
            FieldType::Address => {
                self.write_icon(out, field)?;
                let href = format!("{}{}", MAPS_SEARCH_URL, urlencoding::encode(&d.address));
                self.write_link(out, &marker, &href, &d.address)
            }
            FieldType::SocialLinks => self.write_social_links(out),
            FieldType::Cta => self.write_cta(out, &marker, &d.cta_text, &d.cta_link, true),
            FieldType::AdditionalCta => self.write_cta(
                out,
                &marker,
                &d.additional_cta_text,
                &d.additional_cta_link,
                false,
            ),
        }
    }

    fn link_style(&self) -> InlineStyle {
        InlineStyle::new()
            .push("color", &self.palette.secondary)
            .push("text-decoration", "none")
    }

    fn write_link(&self, out: &mut String, marker: &str, href: &str, text: &str) -> std::fmt::Result {
        write!(
            out,
            r#"<a {} href="{}" style="{}">{}</a>"#,
            marker,
            escape_html(&safe_href(href)),
            escape_html(self.link_style().as_str()),
            escape_html(text)
        )
    }

    fn write_icon(&self, out: &mut String, field: FieldType) -> std::fmt::Result {
        if !self.template.show_icons {
            return Ok(());
        }
        let Some(src) = icon_data_uri(field, self.template.icon_style, &self.palette.secondary)
        else {
            return Ok(());
        };
        let style = InlineStyle::new()
            .push("display", "inline-block")
            .push("vertical-align", "middle")
            .push_px("margin-right", 6)
            .push("border", "0");
        write!(
            out,
            r#"<img src="{}" alt="" width="{}" height="{}" style="{}" />"#,
            escape_html(&src),
            ICON_SIZE,
            ICON_SIZE,
            escape_html(style.as_str())
        )
    }

    fn write_social_links(&self, out: &mut String) -> std::fmt::Result {
        write!(
            out,
            r#"<span {}="{}">"#,
            markers::ATTR_FIELD,
            FieldType::SocialLinks.as_str()
        )?;
        for (i, link) in self.data.present_social_links().enumerate() {
            if i > 0 {
                write!(
                    out,
                    r#"<span style="color: {};">&nbsp;|&nbsp;</span>"#,
                    SEPARATOR_COLOR
                )?;
            }
            write!(
                out,
                r#"<a {}="{}" href="{}" style="{}">{}</a>"#,
                markers::ATTR_PLATFORM,
                link.platform.key(),
                escape_html(&safe_href(&link.url)),
                escape_html(self.link_style().as_str()),
                escape_html(link.platform.label())
            )?;
        }
        write!(out, "</span>")
    }

    fn write_cta(
        &self,
        out: &mut String,
        marker: &str,
        text: &str,
        link: &str,
        filled: bool,
    ) -> std::fmt::Result {
        let p = &self.palette;
        let style = InlineStyle::new()
            .push("display", "inline-block")
            .push("padding", "6px 14px")
            .push("border", format!("1px solid {}", p.primary))
            .push("border-radius", "4px")
            .push(
                "background-color",
                if filled { p.primary.as_str() } else { "transparent" },
            )
            .push("color", if filled { CTA_TEXT_COLOR } else { p.primary.as_str() })
            .push("font-weight", "500")
            .push("text-decoration", "none");
        write!(
            out,
            r#"<a {} href="{}" style="{}">{}</a>"#,
            marker,
            escape_html(&safe_href(link)),
            escape_html(style.as_str()),
            escape_html(text)
        )
    }
}

/// Website text without a leading `http://` or `https://`.
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SocialLink, SocialPlatform};
    use crate::style::SignatureStyle;
    use crate::template::ContentStyle;

    fn paul() -> Settings {
        Settings::new(
            SignatureData {
                full_name: "Paul Atreides".to_string(),
                job_title: "Duke".to_string(),
                company: "Arrakis Spice Operations".to_string(),
                email: "muaddib@arrakis.dune".to_string(),
                phone: "+1 555 0100".to_string(),
                website: "https://arrakis.dune".to_string(),
                photo: "https://arrakis.dune/paul.png".to_string(),
                ..Default::default()
            },
            SignatureStyle {
                primary_color: "#B45309".to_string(),
                ..Default::default()
            },
            SignatureTemplate::default(),
        )
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://arrakis.dune"), "arrakis.dune");
        assert_eq!(display_url("http://arrakis.dune/x"), "arrakis.dune/x");
        assert_eq!(display_url("arrakis.dune"), "arrakis.dune");
    }

    #[test]
    fn test_single_outer_table() {
        let html = encode(&paul());
        assert!(html.starts_with("<table "));
        assert!(html.ends_with("</table>"));
        assert!(!html.contains("<style"));
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_contact_links() {
        let html = encode(&paul());
        assert!(html.contains(r#"href="mailto:muaddib@arrakis.dune""#));
        assert!(html.contains(r#"href="tel:+15550100""#));
        assert!(html.contains(">+1 555 0100</a>"));
        assert!(html.contains(r#"href="https://arrakis.dune""#));
        assert!(html.contains(">arrakis.dune</a>"));
    }

    #[test]
    fn test_border_radius_priority() {
        let mut settings = paul();
        assert!(encode(&settings).contains("border-radius: 50%;"));

        settings.template.image_style = ImageStyle::Square;
        assert!(encode(&settings).contains("border-radius: 8px;"));

        settings = settings.with_image(ImageSettings {
            shape: ImageShape::Rounded,
            corner_radius: 14,
            ..Default::default()
        });
        assert!(encode(&settings).contains("border-radius: 14px;"));

        settings.image = Some(ImageSettings {
            shape: ImageShape::Circle,
            ..Default::default()
        });
        assert!(encode(&settings).contains("border-radius: 8px;"));
    }

    #[test]
    fn test_shadow_only_when_enabled() {
        let mut settings = paul();
        assert!(!encode(&settings).contains("box-shadow"));

        settings.image = Some(ImageSettings::default());
        assert!(!encode(&settings).contains("box-shadow"));

        settings.image = Some(ImageSettings {
            shadow: true,
            shadow_color: "#102030".to_string(),
            shadow_opacity: 0.4,
            shadow_blur: 10,
            shadow_offset_x: 1,
            shadow_offset_y: 3,
            ..Default::default()
        });
        assert!(encode(&settings).contains("box-shadow: 1px 3px 10px rgba(16,32,48,0.4);"));
    }

    #[test]
    fn test_object_fit_override() {
        let mut settings = paul();
        assert!(encode(&settings).contains("object-fit: cover;"));
        settings.image = Some(ImageSettings {
            object_fit: Some(crate::style::ImageFit::Contain),
            ..Default::default()
        });
        assert!(encode(&settings).contains("object-fit: contain;"));
    }

    #[test]
    fn test_inline_title_separator() {
        let mut settings = paul();
        settings.template.title_layout = RowLayout::Inline;
        let html = encode(&settings);
        assert!(html.contains("&bull;"));
        assert!(html.contains(
            r#"Duke</span><span style="color: #999999;">&nbsp;&bull;&nbsp;</span><span data-sig="company""#
        ));

        settings.data.company.clear();
        assert!(!encode(&settings).contains("&bull;"));
    }

    #[test]
    fn test_stacked_title_uses_separate_rows() {
        let html = encode(&paul());
        assert!(!html.contains("&bull;"));
        assert!(html.contains(r#"Duke</span></td></tr><tr>"#));
    }

    #[test]
    fn test_inline_ctas_share_a_row() {
        let mut settings = paul();
        settings.data.cta_text = "Book a call".to_string();
        settings.data.cta_link = "https://cal.arrakis.dune".to_string();
        settings.data.additional_cta_text = "Spice rates".to_string();
        settings.data.additional_cta_link = "https://arrakis.dune/rates".to_string();

        settings.template.cta_layout = RowLayout::Inline;
        let html = encode(&settings);
        assert!(html.contains("Book a call</a>&nbsp;&nbsp;<a data-sig=\"additionalCta\""));

        settings.template.cta_layout = RowLayout::Stacked;
        let html = encode(&settings);
        assert!(html.contains("Book a call</a></td></tr>"));
    }

    #[test]
    fn test_spacing_comes_from_descriptor() {
        let mut settings = paul();
        for f in settings.template.field_order.iter_mut() {
            if f.field_type == FieldType::Email {
                f.spacing = 27;
            }
        }
        let html = encode(&settings);
        assert!(html.contains(r#"<td style="padding-bottom: 27px;"><a data-sig="email""#));
    }

    #[test]
    fn test_vertical_centered_photo_uses_center_tag() {
        let mut settings = paul();
        settings.template.layout = Layout::Vertical;
        let html = encode(&settings);
        assert!(html.contains("<center><img "));
        assert!(html.contains("text-align: center;"));

        settings.template.image_alignment = ImageAlignment::Start;
        assert!(!encode(&settings).contains("<center>"));
    }

    #[test]
    fn test_horizontal_alignment_sets_vertical_align() {
        let mut settings = paul();
        settings.template.image_alignment = ImageAlignment::End;
        let html = encode(&settings);
        assert!(html.contains(r#"<td valign="bottom" style="vertical-align: bottom;"#));
    }

    #[test]
    fn test_icons_rendered_before_contacts() {
        let mut settings = paul();
        settings.template.show_icons = true;
        let html = encode(&settings);
        assert_eq!(html.matches("data:image/svg+xml").count(), 3);
        settings.template.show_icons = false;
        assert!(!encode(&settings).contains("data:image/svg+xml"));
    }

    #[test]
    fn test_social_links_skip_empty_urls() {
        let mut settings = paul();
        settings.data.social_links = vec![
            SocialLink {
                platform: SocialPlatform::Github,
                url: "https://github.com/atreides".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Linkedin,
                url: String::new(),
            },
        ];
        let html = encode(&settings);
        assert!(html.contains(r#"data-sig-platform="github""#));
        assert!(!html.contains("LinkedIn"));
        assert!(!html.contains("&nbsp;|&nbsp;"));
    }

    #[test]
    fn test_dark_mode_lightens_user_colors() {
        let settings = paul();
        let html = encode_with(&settings, &RenderOptions::dark());
        assert!(html.contains(&format!("color: {};", signature_dark_color("#B45309"))));
        assert!(!html.contains("#B45309"));
        assert!(html.contains(DARK_TEXT_COLOR));
    }

    #[test]
    fn test_escapes_user_content() {
        let mut settings = paul();
        settings.data.full_name = "<b>Paul</b> & \"Usul\"".to_string();
        settings.style.font_family = "\"Helvetica Neue\", Arial".to_string();
        let html = encode(&settings);
        assert!(html.contains("&lt;b&gt;Paul&lt;/b&gt; &amp; &quot;Usul&quot;"));
        assert!(html.contains("font-family: &quot;Helvetica Neue&quot;, Arial;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_javascript_links_neutralized() {
        let mut settings = paul();
        settings.data.website = "javascript:alert(1)".to_string();
        let html = encode(&settings);
        assert!(!html.contains(r#"href="javascript:"#));
    }

    #[test]
    fn test_empty_settings_render_minimal_table() {
        let html = encode(&Settings::default());
        assert!(html.starts_with("<table "));
        assert!(!html.contains("<a "));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_spacious_name_is_larger() {
        let mut settings = paul();
        settings.template.content_style = ContentStyle::Spacious;
        assert!(encode(&settings).contains("font-size: 18px; font-weight: bold;"));
    }
}
