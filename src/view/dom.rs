//! Minimal element tree for the markup the views produce.
//!
//! DESIGN
//! ======
//! Views mutate an owned tree rather than a live browser document, so the
//! same render code runs in tests, the CLI, and server-side templates.
//! Serialization escapes text and attribute values; labels and names come
//! straight from the backend and are never trusted as markup.

use std::fmt::Write as _;

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_string(), attributes: Vec::new(), children: Vec::new() }
    }

    /// Builder form of [`Element::set_attribute`].
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of appending a text node.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set `name` to `value`, replacing an existing value in place.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self, &mut Selection::None);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(el, out),
        }
    }
}

// =============================================================================
// SELECT
// =============================================================================

/// A `<select>` container plus its current selected value.
///
/// The selected value is kept as set, whether or not an option with that
/// value exists. Serialization marks the first matching option `selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectElement {
    element: Element,
    value: Option<String>,
}

impl SelectElement {
    #[must_use]
    pub fn new() -> Self {
        Self { element: Element::new("select"), value: None }
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element.set_attribute(name, value);
        self
    }

    /// Remove every child and unset the selected value.
    pub fn empty(&mut self) {
        self.element.clear_children();
        self.value = None;
    }

    pub fn append_child(&mut self, child: Element) {
        self.element.append_child(child);
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn option_groups(&self) -> impl Iterator<Item = &Element> {
        self.element.child_elements().filter(|el| el.tag() == "optgroup")
    }

    /// First option, in document order, whose value equals the selected value.
    #[must_use]
    pub fn selected_option(&self) -> Option<&Element> {
        let value = self.value.as_deref()?;
        find_option(&self.element, value)
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let mut selection = match self.value.as_deref() {
            Some(v) => Selection::Pending(v),
            None => Selection::None,
        };
        write_element(&mut out, &self.element, &mut selection);
        out
    }
}

impl Default for SelectElement {
    fn default() -> Self {
        Self::new()
    }
}

fn find_option<'a>(element: &'a Element, value: &str) -> Option<&'a Element> {
    for child in element.child_elements() {
        if child.tag() == "option" && child.attribute("value") == Some(value) {
            return Some(child);
        }
        if let Some(found) = find_option(child, value) {
            return Some(found);
        }
    }
    None
}

// =============================================================================
// SERIALIZATION
// =============================================================================

enum Selection<'a> {
    None,
    Pending(&'a str),
    Done,
}

fn write_element(out: &mut String, element: &Element, selection: &mut Selection<'_>) {
    let _ = write!(out, "<{}", element.tag);
    for (name, value) in &element.attributes {
        let _ = write!(out, " {name}=\"{}\"", escape_html(value));
    }
    if element.tag == "option" {
        if let Selection::Pending(wanted) = selection {
            if element.attribute("value") == Some(*wanted) {
                out.push_str(" selected");
                *selection = Selection::Done;
            }
        }
    }
    out.push('>');
    for node in &element.children {
        match node {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => write_element(out, el, selection),
        }
    }
    let _ = write!(out, "</{}>", element.tag);
}

/// Escape `&`, `<`, `>`, `"` and `'` for text and double-quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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
#[path = "dom_test.rs"]
mod tests;
