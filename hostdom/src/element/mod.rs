mod node;
mod tag;

pub use node::{Attribute, Node, NodeData};
pub use tag::{validate_attribute_name, TagName};
