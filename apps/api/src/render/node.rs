//! The document tree.
//!
//! Templates build a tree of [`Node`]s with inline styles; the tree is then
//! serialized once to HTML. Both the preview and the print surfaces embed
//! the same serialized tree, and the headless measurer walks the same nodes.

use std::fmt::Write;

use crate::style::Style;

const VOID_TAGS: &[&str] = &["img", "br", "hr"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub style: Style,
    pub children: Vec<Node>,
}

/// Starts an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attrs: Vec::new(),
        style: Style::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Applies `style` on top of whatever is already set.
    pub fn style(mut self, style: &Style) -> Self {
        self.style = std::mem::take(&mut self.style).merge(style);
        self
    }

    pub fn css(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.insert(property, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape(value)),
            Node::Element(e) => {
                let _ = write!(out, "<{}", e.tag);
                if !e.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape(&e.classes.join(" ")));
                }
                for (name, value) in &e.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape(value));
                }
                if !e.style.is_empty() {
                    let _ = write!(out, " style=\"{}\"", escape(&e.style.to_css()));
                }
                out.push('>');
                if VOID_TAGS.contains(&e.tag) {
                    return;
                }
                for child in &e.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }

    /// Concatenated text of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(value),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Every element in the subtree, depth first.
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(&mut found);
        found
    }

    fn collect_elements<'a>(&'a self, found: &mut Vec<&'a Element>) {
        if let Node::Element(e) = self {
            found.push(e);
            e.children.iter().for_each(|c| c.collect_elements(found));
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }
}

/// Escapes text for both element content and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_classes_attrs_and_style() {
        let node: Node = el("div")
            .class("resume-entry")
            .attr("data-id", "x1")
            .css("color", "red")
            .text("Hi")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="resume-entry" data-id="x1" style="color: red;">Hi</div>"#
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = el("p")
            .attr("title", "a\"b")
            .text("<script>&")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<p title="a&quot;b">&lt;script&gt;&amp;</p>"#
        );
    }

    #[test]
    fn test_void_tags_have_no_closing_tag() {
        let node: Node = el("div").child(el("br")).child(el("img").attr("src", "a.png")).into();
        assert_eq!(node.to_html(), r#"<div><br><img src="a.png"></div>"#);
    }

    #[test]
    fn test_text_content_and_find_by_class() {
        let node: Node = el("ul")
            .child(el("li").class("item").text("one"))
            .child(el("li").class("item").text("two"))
            .into();
        assert_eq!(node.text_content(), "onetwo");
        assert_eq!(node.find_by_class("item").len(), 2);
    }
}
