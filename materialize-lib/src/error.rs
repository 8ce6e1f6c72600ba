//! Error types

use hostdom::DomError;

/// Errors that can occur while loading or materializing a descriptor.
///
/// Nothing here is retried: materialization does no I/O, so every failure is
/// permanent for the given input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MaterializeError {
    /// The descriptor's `type` does not name a constructible element.
    #[error("Cannot create element '{tag}': not a valid node kind")]
    InvalidNodeKind { tag: String },

    /// The container is absent, stale, a text node, or not attached to the document.
    #[error("Container missing: {reason}")]
    MissingContainer { reason: String },

    /// A prop value has no attribute representation.
    #[error("Attribute '{name}' has unsupported value {found}")]
    InvalidAttributeValue { name: String, found: String },

    /// A prop key cannot be used as an attribute name.
    #[error("'{name}' is not a valid attribute name")]
    InvalidAttributeName { name: String },

    /// The descriptor source is malformed or has the wrong shape.
    #[error("Invalid descriptor: {0}")]
    Descriptor(String),

    /// Any other failure reported by the document.
    #[error(transparent)]
    Dom(DomError),
}

impl MaterializeError {
    /// Creates a new missing container error.
    pub fn missing_container(reason: impl Into<String>) -> Self {
        Self::MissingContainer {
            reason: reason.into(),
        }
    }

    /// Creates a new invalid attribute value error.
    pub fn invalid_attribute_value(name: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidAttributeValue {
            name: name.into(),
            found: found.into(),
        }
    }

    /// Creates a new descriptor error.
    pub fn descriptor(message: impl Into<String>) -> Self {
        Self::Descriptor(message.into())
    }
}

impl From<DomError> for MaterializeError {
    fn from(err: DomError) -> Self {
        match err {
            DomError::InvalidNodeKind { tag } => Self::InvalidNodeKind { tag },
            DomError::InvalidAttributeName { name } => Self::InvalidAttributeName { name },
            other => Self::Dom(other),
        }
    }
}

impl From<serde_json::Error> for MaterializeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Descriptor(err.to_string())
    }
}
