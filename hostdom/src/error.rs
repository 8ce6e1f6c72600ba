//! Errors raised by the document tree.

use crate::document::NodeId;

/// Errors that can occur while building or querying a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The tag name does not name a constructible element.
    #[error("'{tag}' is not a valid element name")]
    InvalidNodeKind { tag: String },

    /// The attribute name contains characters that cannot appear in markup.
    #[error("'{name}' is not a valid attribute name")]
    InvalidAttributeName { name: String },

    /// The handle is stale or never belonged to this document.
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    /// The operation needs an element but the node is a text node.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// The node is already inserted somewhere else.
    #[error("node {0} already has a parent")]
    AlreadyHasParent(NodeId),

    /// The insertion would make a node its own ancestor, or move the document root.
    #[error("cannot insert node {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// The node is not a direct child of the given parent.
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The selector uses syntax outside the supported subset.
    #[error("unsupported selector '{0}'")]
    InvalidSelector(String),
}

impl DomError {
    /// Creates an invalid node kind error.
    pub fn invalid_node_kind(tag: impl Into<String>) -> Self {
        Self::InvalidNodeKind { tag: tag.into() }
    }

    /// Creates an invalid attribute name error.
    pub fn invalid_attribute_name(name: impl Into<String>) -> Self {
        Self::InvalidAttributeName { name: name.into() }
    }
}
