use hostdom::serialize::{inner_html, outer_html};
use hostdom::Document;

#[test]
fn test_outer_html_element_with_attributes() {
    let mut doc = Document::new();
    let link = doc.create_element("a").unwrap();
    doc.set_attribute(link, "href", "https://example.com").unwrap();
    doc.set_attribute(link, "target", "_blank").unwrap();
    doc.set_text_content(link, "visit").unwrap();

    assert_eq!(
        outer_html(&doc, link).unwrap(),
        r#"<a href="https://example.com" target="_blank">visit</a>"#
    );
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let mut doc = Document::new();
    let el = doc.create_element("p").unwrap();
    doc.set_attribute(el, "title", r#"say "hi" & <bye>"#).unwrap();
    doc.set_text_content(el, "<b>not bold</b> & more").unwrap();

    assert_eq!(
        outer_html(&doc, el).unwrap(),
        r#"<p title="say &quot;hi&quot; &amp; &lt;bye&gt;">&lt;b&gt;not bold&lt;/b&gt; &amp; more</p>"#
    );
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let mut doc = Document::new();
    let img = doc.create_element("img").unwrap();
    doc.set_attribute(img, "src", "logo.png").unwrap();

    assert_eq!(outer_html(&doc, img).unwrap(), r#"<img src="logo.png">"#);
}

#[test]
fn test_inner_html_of_root() {
    let mut doc = Document::with_root_container("root");
    let container = doc.get_element_by_id("root").unwrap();
    let el = doc.create_element("span").unwrap();
    doc.append_child(container, el).unwrap();

    assert_eq!(
        inner_html(&doc, doc.root()).unwrap(),
        r#"<div id="root"><span></span></div>"#
    );
    assert_eq!(
        outer_html(&doc, doc.root()).unwrap(),
        r#"<body><div id="root"><span></span></div></body>"#
    );
}

#[test]
fn test_serialize_stale_handle() {
    let mut doc = Document::new();
    let el = doc.create_element("div").unwrap();
    doc.discard(el).unwrap();

    assert!(outer_html(&doc, el).is_err());
}
