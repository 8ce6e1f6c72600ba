//! Descriptor data model

mod descriptor;
mod descriptor_json;
mod value;

pub use descriptor::{ElementDescriptor, Props};
pub use value::AttrValue;
