//! Plain-text rendition of signature HTML, for `text/plain` mail parts.

use crate::dom::MAX_NESTING_DEPTH;
use crate::escape::unescape_html;

/// Elements that end a line
const BLOCK_TAGS: &[&str] = &[
    "table", "tr", "p", "div", "br", "li", "ul", "ol", "center", "h1", "h2", "h3", "h4", "h5",
    "h6",
];

/// Elements whose content never reaches the text
const SKIPPED_TAGS: &[&str] = &["img", "style", "script", "head", "title"];

enum Step {
    Visit(tl::NodeHandle, usize),
    LineBreak,
}

/// Text content of `html`, one visual line per output line.
///
/// Whitespace runs collapse to one space and empty lines are dropped.
/// Unparseable input yields an empty string.
pub fn to_plain_text(html: &str) -> String {
    let vdom = match tl::parse(html, tl::ParserOptions::default()) {
        Ok(vdom) => vdom,
        Err(err) => {
            tracing::debug!(error = ?err, "plain-text derivation failed");
            return String::new();
        }
    };
    let parser = vdom.parser();

    let mut raw = String::new();
    let mut stack: Vec<Step> = vdom
        .children()
        .iter()
        .rev()
        .map(|h| Step::Visit(*h, 0))
        .collect();

    while let Some(step) = stack.pop() {
        let (handle, depth) = match step {
            Step::LineBreak => {
                raw.push('\n');
                continue;
            }
            Step::Visit(handle, depth) => (handle, depth),
        };
        match handle.get(parser) {
            Some(tl::Node::Raw(bytes)) => raw.push_str(&bytes.as_utf8_str()),
            Some(tl::Node::Tag(tag)) => {
                let name = tag.name().as_utf8_str().to_ascii_lowercase();
                if depth >= MAX_NESTING_DEPTH || SKIPPED_TAGS.contains(&name.as_str()) {
                    continue;
                }
                if BLOCK_TAGS.contains(&name.as_str()) {
                    raw.push('\n');
                    stack.push(Step::LineBreak);
                } else if name == "td" {
                    raw.push(' ');
                }
                let children: Vec<tl::NodeHandle> =
                    tag.children().top().iter().cloned().collect();
                for child in children.into_iter().rev() {
                    stack.push(Step::Visit(child, depth + 1));
                }
            }
            _ => {}
        }
    }

    unescape_html(&raw)
        .replace('\u{a0}', " ")
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
