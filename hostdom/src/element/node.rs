use super::TagName;
use crate::document::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Element {
        tag: TagName,
        /// In assignment order. Names are unique.
        attributes: Vec<Attribute>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn element(tag: TagName) -> Self {
        Self {
            data: NodeData::Element {
                tag,
                attributes: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            data: NodeData::Text(text.into()),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Tag name, or `None` for text nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            NodeData::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match &self.data {
            NodeData::Element { attributes, .. } => attributes,
            NodeData::Text(_) => &[],
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Replace or append. Returns `false` for text nodes.
    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let NodeData::Element { attributes, .. } = &mut self.data else {
            return false;
        };

        match attributes.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => attributes.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        true
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) -> bool {
        let NodeData::Element { attributes, .. } = &mut self.data else {
            return false;
        };

        let before = attributes.len();
        attributes.retain(|attr| attr.name != name);
        attributes.len() != before
    }
}
