//! Mutable XML document builder.
//!
//! Request builders construct one [`Document`] per render call: allocate
//! detached elements, link them top-down, serialize once, drop the document.
//! The builder owns no domain knowledge; element sets and ordering belong to
//! the callers.

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
    attached: bool,
}

/// An XML document under construction.
///
/// Elements are arena-allocated and addressed by [`NodeId`]. A node may be
/// attached at most once, as a child or as a root; the at-most-one-parent
/// rule keeps every tree reachable from a root acyclic, so serialization
/// cannot loop.
///
/// Serialized output carries no XML declaration and no indentation. Element
/// text escapes `&`, `<`, `>`; attribute values additionally escape `"`.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
    roots: Vec<NodeId>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a detached element.
    pub fn new_element(&mut self, name: &'static str) -> NodeId {
        self.alloc(name, None)
    }

    /// Allocates a detached element holding a single text child.
    pub fn new_element_with_text(&mut self, name: &'static str, text: impl Into<String>) -> NodeId {
        self.alloc(name, Some(text.into()))
    }

    fn alloc(&mut self, name: &'static str, text: Option<String>) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(Element {
            name,
            attributes: Vec::new(),
            text,
            children: Vec::new(),
            attached: false,
        });
        id
    }

    /// Adds an attribute to `node`.
    pub fn append_attribute(&mut self, node: NodeId, name: &'static str, value: impl Into<String>) {
        self.elements[node.0].attributes.push((name, value.into()));
    }

    /// Links `child` under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` is `parent` itself or is already attached
    /// elsewhere. Every node has at most one parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(parent != child, "cannot append a node under itself");
        self.attach(child);
        self.elements[parent.0].children.push(child);
    }

    /// Attaches `node` as a document root.
    ///
    /// # Panics
    ///
    /// Panics if `node` is already attached.
    pub fn append_root(&mut self, node: NodeId) {
        self.attach(node);
        self.roots.push(node);
    }

    fn attach(&mut self, node: NodeId) {
        let element = &mut self.elements[node.0];
        assert!(!element.attached, "node <{}> is already attached", element.name);
        element.attached = true;
    }

    /// Renders the document, depth-first in document order.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.write_node(root, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let element = &self.elements[id.0];
        out.push('<');
        out.push_str(element.name);
        for (name, value) in &element.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr(out, value);
            out.push('"');
        }
        if element.text.is_none() && element.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &element.text {
            escape_text(out, text);
        }
        for &child in &element.children {
            self.write_node(child, out);
        }
        out.push_str("</");
        out.push_str(element.name);
        out.push('>');
    }
}

fn escape_text(out: &mut String, src: &str) {
    let bytes = src.as_bytes();
    let mut last = 0;
    for i in memchr::memchr3_iter(b'&', b'<', b'>', bytes) {
        out.push_str(&src[last..i]);
        out.push_str(match bytes[i] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            _ => "&gt;",
        });
        last = i + 1;
    }
    out.push_str(&src[last..]);
}

fn escape_attr(out: &mut String, src: &str) {
    // The delimiting quote must be escaped on top of the text set.
    let mut parts = src.split('"');
    if let Some(first) = parts.next() {
        escape_text(out, first);
    }
    for part in parts {
        out.push_str("&quot;");
        escape_text(out, part);
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn nested_elements_in_document_order() {
        let mut doc = Document::new();
        let root = doc.new_element("Root");
        doc.append_root(root);
        let first = doc.new_element_with_text("First", "1");
        doc.append_child(root, first);
        let second = doc.new_element("Second");
        let inner = doc.new_element_with_text("Inner", "2");
        doc.append_child(second, inner);
        doc.append_child(root, second);

        assert_eq!(
            doc.serialize(),
            "<Root><First>1</First><Second><Inner>2</Inner></Second></Root>"
        );
    }

    #[test]
    fn childless_element_is_self_closing() {
        let mut doc = Document::new();
        let root = doc.new_element("Empty");
        doc.append_root(root);
        assert_eq!(doc.serialize(), "<Empty/>");
    }

    #[test]
    fn empty_text_keeps_close_tag() {
        let mut doc = Document::new();
        let root = doc.new_element_with_text("Blank", "");
        doc.append_root(root);
        assert_eq!(doc.serialize(), "<Blank></Blank>");
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = Document::new();
        let root = doc.new_element_with_text("Expr", "a < b && c > d");
        doc.append_root(root);
        assert_eq!(doc.serialize(), "<Expr>a &lt; b &amp;&amp; c &gt; d</Expr>");
    }

    #[test]
    fn quotes_stay_raw_in_text() {
        let mut doc = Document::new();
        let root = doc.new_element_with_text("QuoteCharacter", "\"");
        doc.append_root(root);
        assert_eq!(doc.serialize(), "<QuoteCharacter>\"</QuoteCharacter>");
    }

    #[test]
    fn attributes_are_escaped() {
        let mut doc = Document::new();
        let root = doc.new_element("Grantee");
        doc.append_attribute(root, "xsi:type", "a\"b&c");
        doc.append_root(root);
        assert_eq!(doc.serialize(), "<Grantee xsi:type=\"a&quot;b&amp;c\"/>");
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn double_attach_panics() {
        let mut doc = Document::new();
        let root = doc.new_element("Root");
        doc.append_root(root);
        let child = doc.new_element("Child");
        doc.append_child(root, child);
        doc.append_child(root, child);
    }

    #[test]
    #[should_panic(expected = "under itself")]
    fn self_attach_panics() {
        let mut doc = Document::new();
        let node = doc.new_element("Node");
        doc.append_child(node, node);
    }
}
