//! Inline `style="..."` writing and reading.

use regex::Regex;
use std::fmt::Display;
use std::sync::OnceLock;

/// Builds an inline style string as `prop: value; prop: value`.
#[derive(Debug, Default, Clone)]
pub struct InlineStyle {
    css: String,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, property: &str, value: impl Display) -> Self {
        if !self.css.is_empty() {
            self.css.push(' ');
        }
        self.css.push_str(&format!("{}: {};", property, value));
        self
    }

    pub fn push_px(self, property: &str, value: impl Display) -> Self {
        self.push(property, format!("{}px", value))
    }

    pub fn push_if(self, cond: bool, property: &str, value: impl Display) -> Self {
        if cond {
            self.push(property, value)
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }
}

/// First value declared for `property`, trimmed. Matching is exact on the
/// property name, so `color` never matches `background-color`.
pub fn declaration(style: &str, property: &str) -> Option<String> {
    style.split(';').find_map(|entry| {
        let (key, value) = entry.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(property)
            .then(|| value.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Whether `property` is declared with `value` (case-insensitive, whitespace tolerant).
pub fn has_declaration(style: &str, property: &str, value: &str) -> bool {
    style.split(';').any(|entry| {
        entry.split_once(':').is_some_and(|(k, v)| {
            k.trim().eq_ignore_ascii_case(property) && v.trim().eq_ignore_ascii_case(value)
        })
    })
}

/// Case-insensitive substring search, used for literal color markers like `#666666`.
pub fn contains_literal(style: &str, needle: &str) -> bool {
    style.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }
}

/// Appended to a style before searching so a side that is never declared
/// resolves to these values.
const PADDING_FALLBACK: &str =
    "padding-top: 16px; padding-right: 24px; padding-bottom: 16px; padding-left: 24px;";

fn side_regexes() -> &'static [Regex; 4] {
    static SIDE_REGEXES: OnceLock<[Regex; 4]> = OnceLock::new();
    SIDE_REGEXES.get_or_init(|| {
        ["top", "right", "bottom", "left"].map(|side| {
            Regex::new(&format!(r"(?i)padding-{}\s*:\s*(\d+(?:\.\d+)?)(?:px)?", side)).unwrap()
        })
    })
}

fn shorthand_regex() -> &'static Regex {
    static SHORTHAND_REGEX: OnceLock<Regex> = OnceLock::new();
    SHORTHAND_REGEX.get_or_init(|| Regex::new(r"(?i)(?:^|;)\s*padding\s*:\s*([^;]+)").unwrap())
}

fn px_value_regex() -> &'static Regex {
    static PX_VALUE_REGEX: OnceLock<Regex> = OnceLock::new();
    PX_VALUE_REGEX.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)(?:px)?").unwrap())
}

fn padding_scan_regex() -> &'static Regex {
    static PADDING_SCAN_REGEX: OnceLock<Regex> = OnceLock::new();
    PADDING_SCAN_REGEX
        .get_or_init(|| Regex::new(r"(?i)padding(?:-bottom)?\s*:\s*([^;]*)").unwrap())
}

fn to_px(raw: &str) -> Option<u32> {
    raw.parse::<f64>().ok().map(|v| v.round().max(0.0) as u32)
}

/// `16px` or `16` as whole pixels
pub fn px(value: &str) -> Option<u32> {
    to_px(value.trim().trim_end_matches("px").trim())
}

fn capture_px(re: &Regex, haystack: &str) -> Option<u32> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .and_then(|m| to_px(m.as_str()))
}

/// `padding: a [b [c [d]]]` expanded to top/right/bottom/left
fn shorthand_padding(style: &str) -> Option<[u32; 4]> {
    let value = shorthand_regex().captures(style)?.get(1)?.as_str();
    let parts: Vec<u32> = value
        .split_whitespace()
        .filter_map(|p| capture_px(px_value_regex(), p))
        .collect();
    match parts.as_slice() {
        [a] => Some([*a, *a, *a, *a]),
        [v, h] => Some([*v, *h, *v, *h]),
        [t, h, b] => Some([*t, *h, *b, *h]),
        [t, r, b, l, ..] => Some([*t, *r, *b, *l]),
        [] => None,
    }
}

/// Padding for one side of a cell style.
///
/// An explicit `padding-{side}` wins, then a `padding:` shorthand, then the
/// fallback declarations appended to the searched string (16px top/bottom,
/// 24px right/left).
pub fn padding_side(style: &str, side: Side) -> u32 {
    let re = &side_regexes()[side.index()];
    if let Some(px) = capture_px(re, style) {
        return px;
    }
    if let Some(values) = shorthand_padding(style) {
        return values[side.index()];
    }
    let searched = format!("{};{}", style, PADDING_FALLBACK);
    capture_px(re, &searched).unwrap_or_default()
}

/// Every numeric value of `padding` / `padding-bottom` declarations in a style.
pub fn padding_values(style: &str) -> Vec<u32> {
    padding_scan_regex()
        .captures_iter(style)
        .filter_map(|c| c.get(1))
        .flat_map(|m| {
            px_value_regex()
                .captures_iter(m.as_str())
                .filter_map(|c| c.get(1).and_then(|v| to_px(v.as_str())))
                .collect::<Vec<_>>()
        })
        .collect()
}
