//! JSON loading for ElementDescriptor

use serde::Deserialize;

use super::{AttrValue, ElementDescriptor};
use crate::error::MaterializeError;
use crate::render::RESERVED_CHILDREN_KEY;

/// Wire shape before prop values are checked against [`AttrValue`].
///
/// Unknown top-level keys (`key`, `ref`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDescriptor {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    props: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    children: Option<String>,
}

impl TryFrom<RawDescriptor> for ElementDescriptor {
    type Error = MaterializeError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let mut descriptor =
            ElementDescriptor::new(raw.kind).children(raw.children.unwrap_or_default());

        for (name, value) in raw.props.unwrap_or_default() {
            match AttrValue::from_json(&name, &value) {
                Ok(value) => descriptor = descriptor.prop(name, value),
                // Never written as an attribute, so its shape does not matter
                Err(_) if name == RESERVED_CHILDREN_KEY => {
                    log::debug!("[materialize] dropping structured '{}' prop", name);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(descriptor)
    }
}

impl TryFrom<serde_json::Value> for ElementDescriptor {
    type Error = MaterializeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let raw: RawDescriptor = serde_json::from_value(value)?;
        raw.try_into()
    }
}

impl ElementDescriptor {
    /// Parse a descriptor from JSON.
    ///
    /// ```json
    /// { "type": "a", "props": { "href": "https://example.com" }, "children": "visit" }
    /// ```
    ///
    /// `props` and `children` may be omitted. Prop values must be strings,
    /// numbers or booleans; anything else fails with
    /// [`MaterializeError::InvalidAttributeValue`].
    pub fn from_json(source: &str) -> Result<Self, MaterializeError> {
        let raw: RawDescriptor = serde_json::from_str(source)?;
        raw.try_into()
    }

    /// Serialize to the same JSON shape [`from_json`](Self::from_json) accepts.
    ///
    /// # Errors
    ///
    /// [`MaterializeError::InvalidAttributeValue`] if a prop is NaN or
    /// infinite. JSON has no such numbers, so the output would not reload.
    pub fn to_json(&self) -> Result<String, MaterializeError> {
        for (name, value) in self.prop_map() {
            if value.to_attribute_value().is_none() {
                return Err(MaterializeError::invalid_attribute_value(
                    name,
                    value.to_string(),
                ));
            }
        }
        Ok(serde_json::to_string(self)?)
    }
}
