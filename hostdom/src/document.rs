//! The document tree: an arena of element and text nodes.

use std::fmt;

use crate::element::{validate_attribute_name, Node, NodeData, TagName};
use crate::error::DomError;
use crate::selector::Selector;

/// Handle to a node in a [`Document`].
///
/// Handles are cheap to copy. Once a node is discarded its handle goes stale
/// and every lookup through it fails with [`DomError::NodeNotFound`], even if
/// the slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A tree of nodes rooted at a `<body>` element.
///
/// Nodes are created detached and become part of the rendered tree once
/// appended below the root.
#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only an empty `<body>`.
    pub fn new() -> Self {
        let mut document = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        document.root = document.insert(Node::element(TagName::from_static("body")));
        document
    }

    /// Create a document whose body holds a single `<div id="{id}">`, the
    /// usual mount point for rendered content.
    pub fn with_root_container(id: &str) -> Self {
        let mut document = Self::new();
        let mut container = Node::element(TagName::from_static("div"));
        container.set_attribute("id", id);
        container.parent = Some(document.root);

        let container = document.insert(container);
        if let Some(root) = document.get_mut(document.root) {
            root.children.push(container);
        }
        document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.get_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn insert(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.node = Some(node);
                return NodeId {
                    index,
                    generation: slot.generation,
                };
            }
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        let tag = TagName::parse(tag)?;
        let id = self.insert(Node::element(tag));
        log::trace!("[dom] created element {}", id);
        Ok(id)
    }

    /// Create a detached text node.
    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(Node::text(text))
    }

    /// Remove a node and its whole subtree from the document.
    ///
    /// The node is detached from its parent first. Handles to any removed
    /// node become stale.
    pub fn discard(&mut self, id: NodeId) -> Result<(), DomError> {
        if id == self.root {
            return Err(DomError::HierarchyRequest {
                parent: id,
                child: id,
            });
        }

        let parent = self.node(id)?.parent;
        if let Some(parent) = parent {
            self.remove_child(parent, id)?;
        }

        let mut removed = self.descendants(id);
        removed.push(id);
        for node in &removed {
            if let Some(slot) = self.slots.get_mut(node.index) {
                slot.node = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(node.index);
            }
        }

        log::trace!("[dom] discarded {} ({} nodes)", id, removed.len());
        Ok(())
    }

    // ========================================================================
    // Attributes and content
    // ========================================================================

    /// Set an attribute, replacing the value if the name is already present.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        validate_attribute_name(name)?;
        if self.node_mut(id)?.set_attribute(name, value) {
            Ok(())
        } else {
            Err(DomError::NotAnElement(id))
        }
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        let node = self.node_mut(id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(id));
        }
        Ok(node.remove_attribute(name))
    }

    /// Convenience lookup. `None` for missing nodes, text nodes and absent attributes.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|node| node.get_attribute(name))
    }

    /// Replace the content of a node with a string.
    ///
    /// For an element every existing child is discarded and, unless `text`
    /// is empty, a single text node takes their place. For a text node the
    /// data is replaced.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        let node = self.node_mut(id)?;
        if let NodeData::Text(data) = &mut node.data {
            *data = text.to_string();
            return Ok(());
        }

        let old_children = std::mem::take(&mut node.children);
        for child in old_children {
            if let Some(child_node) = self.get_mut(child) {
                child_node.parent = None;
            }
            self.discard(child)?;
        }

        if !text.is_empty() {
            let text_node = self.create_text_node(text);
            self.append_child(id, text_node)?;
        }
        Ok(())
    }

    /// Concatenated text of the node and all its descendants.
    pub fn text_content(&self, id: NodeId) -> Result<String, DomError> {
        if let NodeData::Text(text) = &self.node(id)?.data {
            return Ok(text.clone());
        }

        let mut content = String::new();
        for descendant in self.descendants(id) {
            if let Some(Node {
                data: NodeData::Text(text),
                ..
            }) = self.get(descendant)
            {
                content.push_str(text);
            }
        }
        Ok(content)
    }

    // ========================================================================
    // Tree structure
    // ========================================================================

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.node(parent)?.is_element() {
            return Err(DomError::NotAnElement(parent));
        }
        if self.node(child)?.parent.is_some() {
            return Err(DomError::AlreadyHasParent(child));
        }
        if child == self.root || self.is_ancestor_or_self(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        log::trace!("[dom] appended {} to {}", child, parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays alive and can be re-inserted.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_node = self.node_mut(parent)?;
        let position = parent_node
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(DomError::NotAChild { parent, child })?;
        parent_node.children.remove(position);

        self.node_mut(child)?.parent = None;
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        Ok(self.node(id)?.children())
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.children.last().copied())
    }

    /// Whether the node is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.get(current).and_then(|node| node.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return result,
        };

        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(node) = self.get(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        result
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Attached nodes in document order, starting with the root.
    fn attached_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.root).chain(self.descendants(self.root))
    }

    /// First attached element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached_nodes()
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    /// First attached element matching a simple selector (`tag`, `#id`,
    /// `.class` or a compound such as `div#root.app`).
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .attached_nodes()
            .find(|&node| self.get(node).is_some_and(|n| selector.matches(n))))
    }

    /// Every attached element matching the selector, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .attached_nodes()
            .filter(|&node| self.get(node).is_some_and(|n| selector.matches(n)))
            .collect())
    }
}
