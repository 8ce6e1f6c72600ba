use hostdom::serialize::outer_html;
use hostdom::{Document, DomError, NodeId};
use materialize_lib::{
    AttrValue, ElementDescriptor, MaterializeError, RenderConfig, materialize, render_into,
};

fn document_with_root() -> (Document, NodeId) {
    let doc = Document::with_root_container("root");
    let root = doc.get_element_by_id("root").expect("root container");
    (doc, root)
}

fn link() -> ElementDescriptor {
    ElementDescriptor::new("a")
        .prop("href", "https://example.com")
        .prop("target", "_blank")
        .children("visit")
}

// ============================================================================
// Successful materialization
// ============================================================================

#[test]
fn test_link_scenario() {
    let (mut doc, root) = document_with_root();

    let node = materialize(&link(), &mut doc, root).unwrap();

    assert_eq!(doc.children(root).unwrap(), &[node]);
    let el = doc.node(node).unwrap();
    assert_eq!(el.tag(), Some("a"));
    assert_eq!(el.get_attribute("href"), Some("https://example.com"));
    assert_eq!(el.get_attribute("target"), Some("_blank"));
    assert_eq!(el.attributes().len(), 2);
    assert_eq!(doc.text_content(node).unwrap(), "visit");
    assert!(doc.is_attached(node));
}

#[test]
fn test_adds_exactly_one_last_child() {
    let (mut doc, root) = document_with_root();
    let existing = doc.create_element("header").unwrap();
    doc.append_child(root, existing).unwrap();
    let before = doc.children(root).unwrap().len();

    let node = materialize(&link(), &mut doc, root).unwrap();

    assert_eq!(doc.children(root).unwrap().len(), before + 1);
    assert_eq!(doc.last_child(root), Some(node));
    assert_eq!(doc.children(root).unwrap()[0], existing);
}

#[test]
fn test_empty_props_produce_no_attributes() {
    let (mut doc, root) = document_with_root();
    let descriptor = ElementDescriptor::new("div").children("plain");

    let node = materialize(&descriptor, &mut doc, root).unwrap();

    assert!(doc.node(node).unwrap().attributes().is_empty());
    assert_eq!(doc.text_content(node).unwrap(), "plain");
}

#[test]
fn test_empty_children_produce_empty_node() {
    let (mut doc, root) = document_with_root();

    let node = materialize(&ElementDescriptor::new("span"), &mut doc, root).unwrap();

    assert!(doc.children(node).unwrap().is_empty());
    assert_eq!(outer_html(&doc, node).unwrap(), "<span></span>");
}

#[test]
fn test_reserved_children_prop_is_not_an_attribute() {
    let (mut doc, root) = document_with_root();
    let descriptor = ElementDescriptor::new("p")
        .prop("children", "ignored")
        .prop("class", "lead")
        .children("content");

    let node = materialize(&descriptor, &mut doc, root).unwrap();

    let el = doc.node(node).unwrap();
    assert_eq!(el.get_attribute("children"), None);
    assert_eq!(el.get_attribute("class"), Some("lead"));
    assert_eq!(el.attributes().len(), 1);
    assert_eq!(doc.text_content(node).unwrap(), "content");
}

#[test]
fn test_typed_prop_values() {
    let (mut doc, root) = document_with_root();
    let descriptor = ElementDescriptor::new("input")
        .prop("maxlength", 12)
        .prop("step", 0.5)
        .prop("disabled", true)
        .prop("name", "amount");

    let node = materialize(&descriptor, &mut doc, root).unwrap();

    assert_eq!(doc.attribute(node, "maxlength"), Some("12"));
    assert_eq!(doc.attribute(node, "step"), Some("0.5"));
    assert_eq!(doc.attribute(node, "disabled"), Some("true"));
    assert_eq!(doc.attribute(node, "name"), Some("amount"));
}

#[test]
fn test_content_is_text_not_markup() {
    let (mut doc, root) = document_with_root();
    let descriptor = ElementDescriptor::new("div").children("<b>hi</b>");

    let node = materialize(&descriptor, &mut doc, root).unwrap();

    assert_eq!(doc.children(node).unwrap().len(), 1);
    assert_eq!(doc.text_content(node).unwrap(), "<b>hi</b>");
    assert_eq!(
        outer_html(&doc, node).unwrap(),
        "<div>&lt;b&gt;hi&lt;/b&gt;</div>"
    );
}

#[test]
fn test_repeated_calls_create_duplicate_siblings() {
    let (mut doc, root) = document_with_root();
    let descriptor = link();

    let first = materialize(&descriptor, &mut doc, root).unwrap();
    let second = materialize(&descriptor, &mut doc, root).unwrap();

    assert_ne!(first, second);
    assert_eq!(doc.children(root).unwrap(), &[first, second]);
    assert_eq!(
        outer_html(&doc, first).unwrap(),
        outer_html(&doc, second).unwrap()
    );
}

#[test]
fn test_descriptor_is_not_consumed() {
    let (mut doc, root) = document_with_root();
    let descriptor = link();
    let snapshot = descriptor.clone();

    materialize(&descriptor, &mut doc, root).unwrap();

    assert_eq!(descriptor, snapshot);
}

#[test]
fn test_nested_container() {
    let (mut doc, root) = document_with_root();
    let nav = materialize(&ElementDescriptor::new("nav"), &mut doc, root).unwrap();

    let node = materialize(&link(), &mut doc, nav).unwrap();

    assert_eq!(doc.parent(node), Some(nav));
    assert_eq!(
        outer_html(&doc, root).unwrap(),
        r#"<div id="root"><nav><a href="https://example.com" target="_blank">visit</a></nav></div>"#
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_stale_container() {
    let (mut doc, root) = document_with_root();
    doc.discard(root).unwrap();
    let count = doc.node_count();

    let err = materialize(&link(), &mut doc, root).unwrap_err();

    assert!(matches!(err, MaterializeError::MissingContainer { .. }));
    assert_eq!(doc.node_count(), count);
}

#[test]
fn test_detached_container() {
    let mut doc = Document::new();
    let detached = doc.create_element("div").unwrap();
    let count = doc.node_count();

    let err = materialize(&link(), &mut doc, detached).unwrap_err();

    assert!(matches!(err, MaterializeError::MissingContainer { .. }));
    assert!(doc.children(detached).unwrap().is_empty());
    assert_eq!(doc.node_count(), count);
}

#[test]
fn test_text_node_container() {
    let (mut doc, root) = document_with_root();
    let text = doc.create_text_node("x");
    doc.append_child(root, text).unwrap();

    let err = materialize(&link(), &mut doc, text).unwrap_err();

    assert!(matches!(err, MaterializeError::MissingContainer { .. }));
}

#[test]
fn test_invalid_node_kind() {
    let (mut doc, root) = document_with_root();
    let count = doc.node_count();

    let err = materialize(&ElementDescriptor::new("not valid"), &mut doc, root).unwrap_err();

    assert_eq!(
        err,
        MaterializeError::InvalidNodeKind {
            tag: "not valid".to_string()
        }
    );
    assert!(doc.children(root).unwrap().is_empty());
    assert_eq!(doc.node_count(), count);
}

#[test]
fn test_empty_node_kind() {
    let (mut doc, root) = document_with_root();

    let err = materialize(&ElementDescriptor::new(""), &mut doc, root).unwrap_err();

    assert!(matches!(err, MaterializeError::InvalidNodeKind { .. }));
}

#[test]
fn test_invalid_attribute_value_leaves_tree_unchanged() {
    let (mut doc, root) = document_with_root();
    let count = doc.node_count();
    let descriptor = ElementDescriptor::new("meter")
        .prop("low", 1)
        .prop("value", f64::NAN)
        .children("meter text");

    let err = materialize(&descriptor, &mut doc, root).unwrap_err();

    assert_eq!(
        err,
        MaterializeError::InvalidAttributeValue {
            name: "value".to_string(),
            found: AttrValue::from(f64::NAN).to_string(),
        }
    );
    assert!(doc.children(root).unwrap().is_empty());
    assert_eq!(doc.node_count(), count, "detached node and its text are discarded");
}

#[test]
fn test_invalid_attribute_name_leaves_tree_unchanged() {
    let (mut doc, root) = document_with_root();
    let count = doc.node_count();
    let descriptor = ElementDescriptor::new("a").prop("bad name", "x").children("visit");

    let err = materialize(&descriptor, &mut doc, root).unwrap_err();

    assert_eq!(
        err,
        MaterializeError::InvalidAttributeName {
            name: "bad name".to_string()
        }
    );
    assert!(doc.children(root).unwrap().is_empty());
    assert_eq!(doc.node_count(), count);
}

// ============================================================================
// Bootstrap
// ============================================================================

#[test]
fn test_render_into_default_root() {
    let (mut doc, root) = document_with_root();

    let node = render_into(&link(), &mut doc, &RenderConfig::default()).unwrap();

    assert_eq!(doc.parent(node), Some(root));
}

#[test]
fn test_render_into_custom_selector() {
    let mut doc = Document::new();
    let main = doc.create_element("main").unwrap();
    doc.set_attribute(main, "class", "app").unwrap();
    doc.append_child(doc.root(), main).unwrap();
    let config = RenderConfig::new().with_container_selector("main.app");

    let node = render_into(&link(), &mut doc, &config).unwrap();

    assert_eq!(doc.parent(node), Some(main));
}

#[test]
fn test_render_into_missing_root() {
    let mut doc = Document::new();
    let count = doc.node_count();

    let err = render_into(&link(), &mut doc, &RenderConfig::default()).unwrap_err();

    assert!(matches!(err, MaterializeError::MissingContainer { .. }));
    assert_eq!(doc.node_count(), count);
    assert!(doc.children(doc.root()).unwrap().is_empty());
}

#[test]
fn test_render_into_invalid_selector() {
    let (mut doc, _) = document_with_root();
    let config = RenderConfig::new().with_container_selector("div > a");

    let err = render_into(&link(), &mut doc, &config).unwrap_err();

    assert_eq!(
        err,
        MaterializeError::Dom(DomError::InvalidSelector("div > a".to_string()))
    );
}
