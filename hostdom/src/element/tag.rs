use std::fmt;

use crate::error::DomError;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A validated, lower-cased element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    /// Parse a tag name.
    ///
    /// The first character must be an ASCII letter; the rest may be ASCII
    /// alphanumerics or one of `-`, `_`, `.`, `:`. Custom element names such
    /// as `my-widget` are accepted.
    pub fn parse(name: &str) -> Result<Self, DomError> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
            }
            _ => false,
        };

        if !valid {
            return Err(DomError::invalid_node_kind(name));
        }

        Ok(Self(name.to_ascii_lowercase()))
    }

    /// Names known at compile time; skips validation.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the element never has content (`<br>`, `<img>`, ...).
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.0.as_str())
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that `name` can be written as an attribute name.
pub fn validate_attribute_name(name: &str) -> Result<(), DomError> {
    let invalid = name.is_empty()
        || name.chars().any(|c| {
            c.is_ascii_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        });

    if invalid {
        Err(DomError::invalid_attribute_name(name))
    } else {
        Ok(())
    }
}
