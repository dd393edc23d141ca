//! Owned, flattened view of an HTML document parsed with `tl`.
//!
//! Elements are stored in document order with a parent index, which is all
//! the importer needs: "first element such that ..." and ancestor walks.

use thiserror::Error;

use crate::escape::unescape_html;

/// Deeper documents are rejected rather than walked
pub const MAX_NESTING_DEPTH: usize = 64;

/// Attributes copied out of the parsed tree
const KEPT_ATTRIBUTES: &[&str] = &[
    "style",
    "class",
    "href",
    "src",
    "width",
    "height",
    "valign",
    "align",
    crate::markers::ATTR_VERSION,
    crate::markers::ATTR_LAYOUT,
    crate::markers::ATTR_CONTENT,
    crate::markers::ATTR_ALIGN,
    crate::markers::ATTR_ICONS,
    crate::markers::ATTR_TITLE_LAYOUT,
    crate::markers::ATTR_CTA_LAYOUT,
    crate::markers::ATTR_SCALE,
    crate::markers::ATTR_FIELD,
    crate::markers::ATTR_PLATFORM,
];

#[derive(Debug, Error)]
pub enum DomError {
    #[error("unparseable markup: {0}")]
    Parse(String),
    #[error("markup nested deeper than {} levels", MAX_NESTING_DEPTH)]
    TooDeep,
}

#[derive(Debug, Clone)]
pub struct Element {
    /// Lowercase tag name
    pub name: String,
    pub parent: Option<usize>,
    attributes: Vec<(&'static str, String)>,
    /// Entity-decoded, trimmed text content
    pub text: String,
    /// Entity-decoded text content, whitespace as written
    pub raw_text: String,
}

impl Element {
    /// Entity-decoded attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Inline style, empty when absent
    pub fn style(&self) -> &str {
        self.attr("style").unwrap_or("")
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

#[derive(Debug, Default)]
pub struct Dom {
    elements: Vec<Element>,
}

impl Dom {
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let vdom = tl::parse(html, tl::ParserOptions::default())
            .map_err(|e| DomError::Parse(format!("{:?}", e)))?;
        let parser = vdom.parser();

        let mut elements = Vec::new();
        // (handle, parent element index, depth), reversed so pops follow document order
        let mut stack: Vec<(tl::NodeHandle, Option<usize>, usize)> = vdom
            .children()
            .iter()
            .rev()
            .map(|h| (*h, None, 0))
            .collect();

        while let Some((handle, parent, depth)) = stack.pop() {
            if depth > MAX_NESTING_DEPTH {
                return Err(DomError::TooDeep);
            }
            let Some(tag) = handle.get(parser).and_then(|n| n.as_tag()) else {
                continue;
            };

            let attributes = KEPT_ATTRIBUTES
                .iter()
                .filter_map(|&key| {
                    let value = tag.attributes().get(key).flatten()?;
                    Some((key, unescape_html(&value.as_utf8_str())))
                })
                .collect();

            let raw_text = unescape_html(&tag.inner_text(parser));
            let index = elements.len();
            elements.push(Element {
                name: tag.name().as_utf8_str().to_ascii_lowercase(),
                parent,
                attributes,
                text: raw_text.replace('\u{a0}', " ").trim().to_string(),
                raw_text,
            });

            let children: Vec<tl::NodeHandle> = tag.children().top().iter().cloned().collect();
            for child in children.into_iter().rev() {
                stack.push((child, Some(index), depth + 1));
            }
        }

        Ok(Self { elements })
    }

    pub fn get(&self, index: usize) -> &Element {
        &self.elements[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.elements.iter().enumerate()
    }

    /// First element in document order matching `pred`
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<usize> {
        self.elements.iter().position(pred)
    }

    pub fn first(&self, name: &str) -> Option<usize> {
        self.find(|e| e.is(name))
    }

    /// Element carrying `data-sig="<field>"`
    pub fn marked(&self, field: &str) -> Option<usize> {
        self.find(|e| e.attr(crate::markers::ATTR_FIELD) == Some(field))
    }

    /// Ancestors from the parent outwards
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.elements[index].parent, move |&i| {
            self.elements[i].parent
        })
    }

    /// Nearest ancestor (or self) with the given tag name
    pub fn closest(&self, index: usize, name: &str) -> Option<usize> {
        std::iter::once(index)
            .chain(self.ancestors(index))
            .find(|&i| self.elements[i].is(name))
    }

    pub fn is_descendant_of(&self, index: usize, ancestor: usize) -> bool {
        self.ancestors(index).any(|i| i == ancestor)
    }
}
