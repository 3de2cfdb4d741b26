//! A small markup tree the renderers build instead of splicing strings.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends `node` only when it is `Some`.
    pub fn optional_child(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "meta"];

impl Node {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, out),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attributes {
                    let _ = write!(out, " {name}=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.render_into(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

/// Renders a sequence of sibling nodes back to back.
pub fn render_all(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.render_into(&mut out);
    }
    out
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// A rendering target: an element id and the markup currently inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    id: String,
    inner_html: String,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn is_empty(&self) -> bool {
        self.inner_html.is_empty()
    }

    /// Drops whatever was rendered before and renders `nodes` in order.
    pub fn replace_with(&mut self, nodes: &[Node]) {
        self.inner_html = render_all(nodes);
    }

    pub fn append(&mut self, node: &Node) {
        node.render_into(&mut self.inner_html);
    }

    /// The container element itself, content included.
    pub fn outer_html(&self) -> String {
        format!(
            "<div id=\"{}\">{}</div>",
            escape(&self.id),
            self.inner_html
        )
    }
}
