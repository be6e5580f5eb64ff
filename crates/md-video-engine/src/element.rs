//! Minimal HTML element tree used as the output of block processors.

use std::fmt::Write;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
    /// Pre-rendered HTML, written out unchanged.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Elements that never carry content and serialize as `<tag ... />`.
const VOID_TAGS: &[&str] = &["source", "track", "img", "br", "hr"];

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A root with no tag of its own; only its children are serialized.
    pub fn fragment() -> Self {
        Self::new("")
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a child element and returns it for further building.
    pub fn sub_element(&mut self, tag: &str) -> &mut Element {
        self.children.push(Node::Element(Element::new(tag)));
        match self.children.last_mut() {
            Some(Node::Element(e)) => e,
            _ => unreachable!("just pushed an element"),
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn push_raw(&mut self, html: impl Into<String>) {
        self.children.push(Node::Raw(html.into()));
    }

    /// Child elements with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter_map(move |child| match child {
            Node::Element(e) if e.tag == tag => Some(e),
            _ => None,
        })
    }

    pub fn is_fragment(&self) -> bool {
        self.tag.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        if self.is_fragment() {
            self.write_children(out);
            return;
        }

        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(
                out,
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            );
        }

        if VOID_TAGS.contains(&self.tag.as_str()) && self.children.is_empty() {
            out.push_str(" />");
            return;
        }

        out.push('>');
        self.write_children(out);
        let _ = write!(out, "</{}>", self.tag);
    }

    fn write_children(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
                Node::Raw(html) => out.push_str(html),
            }
        }
    }
}
