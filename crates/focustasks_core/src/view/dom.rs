//! Minimal element tree standing in for the host document.
//!
//! # Responsibility
//! - Build page structure from typed nodes instead of markup strings.
//! - Serialize the tree to HTML with text and attribute escaping.
//! - Resolve event targets by child-index path and walk to ancestors.
//!
//! # Invariants
//! - Text reaches HTML output only through `escape_html`.
//! - Void elements never carry children in serialized output.

use std::borrow::Cow;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text or attribute values.
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// One node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(value) => out.push_str(&escape_html(value)),
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Self::Element(element) => element
                .children
                .iter()
                .for_each(|child| child.write_text(out)),
            Self::Text(value) => out.push_str(value),
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

/// Child-index path from a root element down to a descendant element.
///
/// This is how event targets are addressed: the host reports the path of the
/// node the user interacted with, relative to the element that owns the
/// listener.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        self.set_text_content(value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(existing, _)| existing != name);
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|name| name == class))
    }

    /// Equivalent of a `tag.class` selector match.
    pub fn matches(&self, tag: &str, class: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag) && self.has_class(class)
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Moves all fragment nodes to the end of this element.
    pub fn append_fragment(&mut self, fragment: Fragment) {
        self.children.extend(fragment.nodes);
    }

    /// Removes every child.
    pub fn replace_children(&mut self) {
        self.children.clear();
    }

    pub fn set_text_content(&mut self, value: impl Into<String>) {
        self.children.clear();
        self.children.push(Node::Text(value.into()));
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children
            .iter()
            .for_each(|child| child.write_text(&mut out));
        out
    }

    /// First element in depth-first order (self included) matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(predicate))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|element| element.get_attribute("id") == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.get_attribute("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Path to the first descendant (self excluded) matching `predicate`.
    pub fn find_path(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Option<NodePath> {
        let mut indices = Vec::new();
        if self.collect_path(predicate, &mut indices) {
            Some(NodePath(indices))
        } else {
            None
        }
    }

    fn collect_path(
        &self,
        predicate: impl Fn(&Element) -> bool + Copy,
        indices: &mut Vec<usize>,
    ) -> bool {
        for (index, child) in self.children.iter().enumerate() {
            let Node::Element(element) = child else {
                continue;
            };
            indices.push(index);
            if predicate(element) || element.collect_path(predicate, indices) {
                return true;
            }
            indices.pop();
        }
        false
    }

    /// Resolves `path` to the chain of elements from `self` to the target.
    ///
    /// The last entry is the target; earlier entries are its ancestors.
    /// Returns `None` when the path leaves the tree or lands on text.
    pub fn resolve(&self, path: &NodePath) -> Option<Vec<&Element>> {
        let mut chain = vec![self];
        let mut current = self;
        for index in path.indices() {
            current = current.children.get(*index)?.as_element()?;
            chain.push(current);
        }
        Some(chain)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        self.children.iter().for_each(|child| child.write_html(out));
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Detached list of nodes, built up front and moved into a parent at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.nodes.push(child.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<Element> for Fragment {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        iter.into_iter().fold(Fragment::new(), |mut fragment, node| {
            fragment.append_child(node);
            fragment
        })
    }
}
