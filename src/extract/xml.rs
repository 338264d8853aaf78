//! Small query helpers over the roxmltree DOM.
//!
//! The documentation corpus mixes the DocBook and phpdoc namespaces;
//! element local names are unambiguous across them, so lookups here match
//! on local name only.

use roxmltree::Node;

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// The `xml:id` attribute, when present.
pub fn xml_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((XML_NS, "id"))
}

/// First direct child element with the given local name.
pub fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

/// Direct child elements with the given local name.
pub fn children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

/// Descendant elements (document order) with the given local name.
pub fn descendants<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

/// Concatenated direct text content of a node, excluding text inside
/// child elements.
pub fn text(node: Node) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

/// Whether the node has any element children.
pub fn has_element_children(node: Node) -> bool {
    node.children().any(|c| c.is_element())
}

/// Serialize a node's content back to a markup string, keeping element
/// tags (without attributes) so the comment normalizer can turn
/// `<function>`/`<parameter>` pairs into `{@link}` markers before it
/// strips the rest.
pub fn inner_markup(node: Node) -> String {
    let mut out = String::new();
    for child in node.children() {
        append_markup(child, &mut out);
    }
    out
}

fn append_markup(node: Node, out: &mut String) {
    if node.is_text() {
        if let Some(text) = node.text() {
            out.push_str(text);
        }
    } else if node.is_element() {
        let name = node.tag_name().name();
        out.push('<');
        out.push_str(name);
        out.push('>');
        for child in node.children() {
            append_markup(child, out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}
