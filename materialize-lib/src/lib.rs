//! Element materializer
//!
//! Turns plain element descriptors (`{ type, props, children }`) into real
//! nodes of a [`hostdom::Document`], one node per call, with no diffing and
//! no update path.

pub mod config;
pub mod error;
pub mod model;

mod render;

pub use config::RenderConfig;
pub use error::MaterializeError;
pub use model::{AttrValue, ElementDescriptor, Props};
pub use render::{RESERVED_CHILDREN_KEY, materialize, render_into};
