//! Color helpers shared by the generator and the preview.
//!
//! Two dark-mode transforms live here and are intentionally separate:
//! [`signature_dark_color`] is what exported dark signatures use (flat channel
//! offset), [`preview_dark_color`] is the hue-preserving variant for the live
//! preview. Only the preview path is checked for contrast.

use serde::{Deserialize, Serialize};

use crate::style::SignatureStyle;

/// Added to every RGB channel by the exported dark variant
pub const DARK_CHANNEL_OFFSET: u8 = 60;

/// Preview colors darker than this HSL lightness are raised to it
pub const PREVIEW_MIN_LIGHTNESS: f64 = 0.65;

/// WCAG AA threshold for normal text
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

pub const PREVIEW_LIGHT_BACKGROUND: &str = "#ffffff";
pub const PREVIEW_DARK_BACKGROUND: &str = "#1f2937";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional) into RGB channels.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let expand = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
            Some((expand(0).ok()?, expand(1).ok()?, expand(2).ok()?))
        }
        _ => None,
    }
}

pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Converts hex color + opacity to an `rgba()` string. Unparseable colors become black.
pub fn rgba_from_hex(hex: &str, opacity: f64) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("rgba({},{},{},{})", r, g, b, opacity),
        None => format!("rgba(0,0,0,{})", opacity),
    }
}

/// Dark variant used in exported signature code: every channel is raised by
/// [`DARK_CHANNEL_OFFSET`] and clamped to 255. Unparseable input is returned as is.
pub fn signature_dark_color(hex: &str) -> String {
    lighten_channels(hex, DARK_CHANNEL_OFFSET)
}

/// Raise every channel by `offset`, saturating at 255.
pub fn lighten_channels(hex: &str, offset: u8) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => to_hex(
            r.saturating_add(offset),
            g.saturating_add(offset),
            b.saturating_add(offset),
        ),
        None => hex.to_string(),
    }
}

/// Hue in degrees, saturation and lightness in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Hsl { h: h * 60.0, s, l }
}

pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        let v = to_channel(l);
        return (v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;
    (
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Live-preview dark variant: keeps hue and saturation and raises the
/// lightness to at least [`PREVIEW_MIN_LIGHTNESS`].
pub fn preview_dark_color(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let mut hsl = rgb_to_hsl(r, g, b);
    if hsl.l < PREVIEW_MIN_LIGHTNESS {
        hsl.l = PREVIEW_MIN_LIGHTNESS;
    }
    let (r, g, b) = hsl_to_rgb(hsl);
    to_hex(r, g, b)
}

/// WCAG 2.x relative luminance.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(hex)?;
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b))
}

/// WCAG contrast ratio between two colors, from 1.0 to 21.0.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((hi + 0.05) / (lo + 0.05))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
}

impl ColorRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
        }
    }
}

/// A color that reads poorly against the preview background
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastWarning {
    pub role: ColorRole,
    /// Color as it appears in the preview (after the preview transform in dark mode)
    pub color: String,
    pub background: String,
    pub ratio: f64,
}

/// Flag style colors whose contrast against the preview background is below
/// [`MIN_CONTRAST_RATIO`]. Nothing is corrected; unparseable colors are skipped.
pub fn check_contrast(style: &SignatureStyle, mode: ColorMode) -> Vec<ContrastWarning> {
    let background = match mode {
        ColorMode::Light => PREVIEW_LIGHT_BACKGROUND,
        ColorMode::Dark => PREVIEW_DARK_BACKGROUND,
    };
    [
        (ColorRole::Primary, &style.primary_color),
        (ColorRole::Secondary, &style.secondary_color),
    ]
    .into_iter()
    .filter_map(|(role, color)| {
        let shown = match mode {
            ColorMode::Light => color.clone(),
            ColorMode::Dark => preview_dark_color(color),
        };
        let ratio = contrast_ratio(&shown, background)?;
        (ratio < MIN_CONTRAST_RATIO).then(|| ContrastWarning {
            role,
            color: shown,
            background: background.to_string(),
            ratio,
        })
    })
    .collect()
}
