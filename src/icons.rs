//! Contact-row icons as `data:image/svg+xml` URIs.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::template::{FieldType, IconStyle};

pub const ICON_SIZE: u32 = 14;

/// Prefix shared by every generated icon `src`
pub const SVG_DATA_PREFIX: &str = "data:image/svg+xml";

fn icon_path(field: FieldType) -> Option<&'static str> {
    match field {
        FieldType::Email => Some("M4 4h16v16H4z M4 6l8 7 8-7"),
        FieldType::Phone => Some(
            "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z",
        ),
        FieldType::Website => Some(
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z M2 12h20 M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20z",
        ),
        FieldType::Address => Some(
            "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
        ),
        _ => None,
    }
}

/// SVG markup for a contact icon. Outline icons are stroked with
/// `fill="none"`, solid icons are filled.
pub fn icon_svg(field: FieldType, style: IconStyle, color: &str) -> Option<String> {
    let path = icon_path(field)?;
    let paint = match style {
        IconStyle::Outline => format!(
            r#"fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#,
            color
        ),
        IconStyle::Solid => format!(r#"fill="{}" stroke="none""#, color),
    };
    Some(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" {paint}><path d="{path}"/></svg>"#,
        size = ICON_SIZE,
        paint = paint,
        path = path
    ))
}

/// Icon as a url-encoded data URI, ready for an `<img src>`.
pub fn icon_data_uri(field: FieldType, style: IconStyle, color: &str) -> Option<String> {
    icon_svg(field, style, color).map(|svg| {
        format!(
            "{};charset=utf-8,{}",
            SVG_DATA_PREFIX,
            urlencoding::encode(&svg)
        )
    })
}

/// Whether an `<img src>` is an inline SVG (decorative icon, never the photo).
pub fn is_svg_data_uri(src: &str) -> bool {
    src.trim_start()
        .get(..SVG_DATA_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(SVG_DATA_PREFIX))
}

/// Decoded SVG markup of a data URI, for inspecting `fill="none"`.
///
/// Handles both `;base64,` and url-encoded payloads. A payload that fails to
/// decode is returned as is.
pub fn svg_markup(src: &str) -> String {
    let Some((header, payload)) = src.split_once(',') else {
        return src.to_string();
    };
    if header.trim_end().to_ascii_lowercase().ends_with(";base64") {
        let compact: String = payload.split_whitespace().collect();
        return match BASE64.decode(compact) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => payload.to_string(),
        };
    }
    match urlencoding::decode(payload) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => payload.to_string(),
    }
}
