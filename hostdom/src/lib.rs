pub mod document;
pub mod element;
pub mod error;
pub mod selector;
pub mod serialize;

pub use document::{Document, NodeId};
pub use element::{validate_attribute_name, Attribute, Node, NodeData, TagName};
pub use error::DomError;
pub use selector::Selector;
