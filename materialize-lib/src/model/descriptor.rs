//! ElementDescriptor

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::AttrValue;
use super::descriptor_json::RawDescriptor;
use crate::render::RESERVED_CHILDREN_KEY;

/// Attribute name → value. Ordered so attribute assignment is deterministic.
pub type Props = BTreeMap<String, AttrValue>;

/// A plain description of one element: its tag, its attributes, and its
/// text content.
///
/// Descriptors are only read by [`materialize`](crate::materialize); the
/// produced node keeps no reference back to the descriptor.
///
/// # Example
///
/// ```
/// use materialize_lib::ElementDescriptor;
///
/// let link = ElementDescriptor::new("a")
///     .prop("href", "https://example.com")
///     .prop("target", "_blank")
///     .children("visit");
///
/// assert_eq!(link.kind(), "a");
/// assert_eq!(link.attributes().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub struct ElementDescriptor {
    #[serde(rename = "type")]
    kind: String,
    props: Props,
    children: String,
}

impl ElementDescriptor {
    /// Creates a descriptor with no props and empty content.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Props::new(),
            children: String::new(),
        }
    }

    /// Sets a prop, replacing any previous value for the same key.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Sets several props at once.
    pub fn props<K, V>(mut self, props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.props
            .extend(props.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the text content.
    pub fn children(mut self, text: impl Into<String>) -> Self {
        self.children = text.into();
        self
    }

    /// The tag name of the element to create.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Every prop, including the reserved `children` key if present.
    pub fn prop_map(&self) -> &Props {
        &self.props
    }

    /// The text content.
    pub fn content(&self) -> &str {
        &self.children
    }

    /// Props that become attributes: everything except the reserved
    /// `children` key.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.props
            .iter()
            .filter(|(name, _)| name.as_str() != RESERVED_CHILDREN_KEY)
            .map(|(name, value)| (name.as_str(), value))
    }
}
