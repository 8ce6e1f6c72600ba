//! Simple CSS selectors.
//!
//! Only compound selectors are supported: an optional tag (or `*`), at most
//! one `#id`, and any number of `.class` parts. Combinators, attribute
//! selectors and pseudo-classes are rejected.

use crate::element::Node;
use crate::error::DomError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = || DomError::InvalidSelector(input.to_string());
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector::default();

        let tag_end = trimmed.find(['#', '.']).unwrap_or(trimmed.len());
        let tag = &trimmed[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !is_identifier(tag) {
                return Err(invalid());
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &trimmed[tag_end..];
        while let Some(marker) = rest.chars().next() {
            // marker is always '#' or '.', both one byte
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if !is_identifier(name) {
                return Err(invalid());
            }

            if marker == '#' {
                if selector.id.is_some() {
                    return Err(invalid());
                }
                selector.id = Some(name.to_string());
            } else {
                selector.classes.push(name.to_string());
            }
            rest = &body[end..];
        }

        Ok(selector)
    }

    /// Whether the node satisfies every part of the selector. Text nodes never match.
    pub fn matches(&self, node: &Node) -> bool {
        let Some(tag) = node.tag() else {
            return false;
        };

        if self.tag.as_deref().is_some_and(|expected| expected != tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if node.get_attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
