//! HTML serialization.

use crate::document::{Document, NodeId};
use crate::element::NodeData;
use crate::error::DomError;

/// Escapes a string for use as element text.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Markup for the node itself and its subtree.
pub fn outer_html(document: &Document, id: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    write_node(document, id, &mut out)?;
    Ok(out)
}

/// Markup for the node's children only.
pub fn inner_html(document: &Document, id: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    for &child in document.children(id)? {
        write_node(document, child, &mut out)?;
    }
    Ok(out)
}

fn write_node(document: &Document, id: NodeId, out: &mut String) -> Result<(), DomError> {
    let node = document.node(id)?;
    match node.data() {
        NodeData::Text(text) => out.push_str(&escape_text(text)),
        NodeData::Element { tag, attributes } => {
            out.push('<');
            out.push_str(tag.as_str());
            for attr in attributes {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(&attr.value));
                out.push('"');
            }
            out.push('>');

            if tag.is_void() {
                return Ok(());
            }

            for &child in node.children() {
                write_node(document, child, out)?;
            }
            out.push_str("</");
            out.push_str(tag.as_str());
            out.push('>');
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute(r#"a "quoted" value"#), "a &quot;quoted&quot; value");
        assert_eq!(escape_attribute("?a=1&b=2"), "?a=1&amp;b=2");
    }
}
