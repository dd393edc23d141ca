//! Marker attributes shared by the generator and the parser.
//!
//! Markers never affect rendering. HTML without them (older exports, hand
//! edited copies) is still decoded through the style heuristics.

use crate::template::{ContentStyle, IconStyle, ImageAlignment, Layout, RowLayout};

/// Current marker vocabulary version
pub const VERSION: &str = "1";

/// On the outer table; its presence enables marker-first decoding
pub const ATTR_VERSION: &str = "data-sig-version";
pub const ATTR_LAYOUT: &str = "data-sig-layout";
pub const ATTR_CONTENT: &str = "data-sig-content";
pub const ATTR_ALIGN: &str = "data-sig-align";
/// `outline`, `solid` or `none`
pub const ATTR_ICONS: &str = "data-sig-icons";
pub const ATTR_TITLE_LAYOUT: &str = "data-sig-title-layout";
pub const ATTR_CTA_LAYOUT: &str = "data-sig-cta-layout";
pub const ATTR_SCALE: &str = "data-sig-scale";

/// Field type name on field elements, `main` on the main cell
pub const ATTR_FIELD: &str = "data-sig";
/// Social platform key on social anchors
pub const ATTR_PLATFORM: &str = "data-sig-platform";

pub const MAIN_CELL: &str = "main";
pub const ICONS_NONE: &str = "none";

pub fn layout_name(layout: Layout) -> &'static str {
    match layout {
        Layout::Horizontal => "horizontal",
        Layout::Vertical => "vertical",
    }
}

pub fn parse_layout(value: &str) -> Option<Layout> {
    match value {
        "horizontal" => Some(Layout::Horizontal),
        "vertical" => Some(Layout::Vertical),
        _ => None,
    }
}

pub fn content_name(style: ContentStyle) -> &'static str {
    match style {
        ContentStyle::Compact => "compact",
        ContentStyle::Spacious => "spacious",
    }
}

pub fn parse_content(value: &str) -> Option<ContentStyle> {
    match value {
        "compact" => Some(ContentStyle::Compact),
        "spacious" => Some(ContentStyle::Spacious),
        _ => None,
    }
}

pub fn align_name(align: ImageAlignment) -> &'static str {
    match align {
        ImageAlignment::Start => "start",
        ImageAlignment::Center => "center",
        ImageAlignment::End => "end",
    }
}

pub fn parse_align(value: &str) -> Option<ImageAlignment> {
    match value {
        "start" => Some(ImageAlignment::Start),
        "center" => Some(ImageAlignment::Center),
        "end" => Some(ImageAlignment::End),
        _ => None,
    }
}

pub fn icons_name(show: bool, style: IconStyle) -> &'static str {
    match (show, style) {
        (false, _) => ICONS_NONE,
        (true, IconStyle::Outline) => "outline",
        (true, IconStyle::Solid) => "solid",
    }
}

/// `None` for an unknown value, `Some(None)` when icons are off
pub fn parse_icons(value: &str) -> Option<Option<IconStyle>> {
    match value {
        ICONS_NONE => Some(None),
        "outline" => Some(Some(IconStyle::Outline)),
        "solid" => Some(Some(IconStyle::Solid)),
        _ => None,
    }
}

pub fn row_layout_name(layout: RowLayout) -> &'static str {
    match layout {
        RowLayout::Stacked => "stacked",
        RowLayout::Inline => "inline",
    }
}

pub fn parse_row_layout(value: &str) -> Option<RowLayout> {
    match value {
        "stacked" => Some(RowLayout::Stacked),
        "inline" => Some(RowLayout::Inline),
        _ => None,
    }
}
