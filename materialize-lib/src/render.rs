use hostdom::{Document, NodeId};

use crate::config::RenderConfig;
use crate::error::MaterializeError;
use crate::model::ElementDescriptor;

/// Prop key that is never written as an attribute.
pub const RESERVED_CHILDREN_KEY: &str = "children";

/// Create one element from `descriptor` and append it as the last child of
/// `container`.
///
/// The node is built detached and only appended once its content and every
/// attribute are in place. On failure it is discarded, so the document is
/// left exactly as it was. Each call creates a new node; calling twice with
/// the same arguments produces two siblings.
///
/// # Errors
///
/// - [`MaterializeError::MissingContainer`] if `container` is stale, a text
///   node, or not attached to the document.
/// - [`MaterializeError::InvalidNodeKind`] if the descriptor's type is not a
///   valid element name.
/// - [`MaterializeError::InvalidAttributeValue`] if a prop has no attribute
///   representation.
/// - [`MaterializeError::InvalidAttributeName`] if a prop key cannot be an
///   attribute name.
pub fn materialize(
    descriptor: &ElementDescriptor,
    document: &mut Document,
    container: NodeId,
) -> Result<NodeId, MaterializeError> {
    check_container(document, container)?;

    let node = document.create_element(descriptor.kind())?;
    log::debug!("[materialize] created <{}> as {}", descriptor.kind(), node);

    let result = populate(descriptor, document, node).and_then(|()| {
        document
            .append_child(container, node)
            .map_err(MaterializeError::from)
    });

    if let Err(err) = result {
        if let Err(discard_err) = document.discard(node) {
            log::warn!("[materialize] failed to discard {}: {}", node, discard_err);
        }
        log::debug!("[materialize] <{}> rejected: {}", descriptor.kind(), err);
        return Err(err);
    }

    log::debug!("[materialize] appended {} to {}", node, container);
    Ok(node)
}

/// Locate the container with the configured selector and materialize into it.
///
/// When nothing matches, the failure is logged and no node is created.
pub fn render_into(
    descriptor: &ElementDescriptor,
    document: &mut Document,
    config: &RenderConfig,
) -> Result<NodeId, MaterializeError> {
    let selector = config.container_selector();
    let Some(container) = document.query_selector(selector)? else {
        log::error!("[bootstrap] Root container not found: nothing matches '{}'", selector);
        return Err(MaterializeError::missing_container(format!(
            "no element matches '{selector}'"
        )));
    };

    log::info!("[bootstrap] rendering <{}> into '{}'", descriptor.kind(), selector);
    materialize(descriptor, document, container)
}

fn check_container(document: &Document, container: NodeId) -> Result<(), MaterializeError> {
    let node = document.node(container).map_err(|_| {
        MaterializeError::missing_container(format!("node {container} does not exist"))
    })?;

    if !node.is_element() {
        return Err(MaterializeError::missing_container(format!(
            "node {container} is a text node"
        )));
    }
    if !document.is_attached(container) {
        return Err(MaterializeError::missing_container(format!(
            "node {container} is not attached to the document"
        )));
    }
    Ok(())
}

fn populate(
    descriptor: &ElementDescriptor,
    document: &mut Document,
    node: NodeId,
) -> Result<(), MaterializeError> {
    document.set_text_content(node, descriptor.content())?;

    if descriptor.prop_map().contains_key(RESERVED_CHILDREN_KEY) {
        log::trace!("[materialize] skipping reserved '{}' prop", RESERVED_CHILDREN_KEY);
    }

    for (name, value) in descriptor.attributes() {
        let text = value
            .to_attribute_value()
            .ok_or_else(|| MaterializeError::invalid_attribute_value(name, value.to_string()))?;
        log::trace!("[materialize] {} {}={:?}", node, name, text);
        document.set_attribute(node, name, &text)?;
    }

    Ok(())
}
