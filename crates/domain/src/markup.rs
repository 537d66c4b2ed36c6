//! In-memory tree of the provider's configuration markup.

/// A node below a [`MarkupElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(MarkupElement),
    Comment(String),
    Text(String),
}

/// Element with its attributes in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

impl MarkupElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: MarkupElement) -> Self {
        self.push_element(child);
        self
    }

    /// Sets an attribute, replacing the value in place if the name exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push_element(&mut self, child: MarkupElement) {
        self.children.push(MarkupNode::Element(child));
    }

    pub fn push(&mut self, node: MarkupNode) {
        self.children.push(node);
    }

    /// Child elements, skipping comments and text.
    pub fn elements(&self) -> impl Iterator<Item = &MarkupElement> {
        self.children.iter().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn first_element(&self) -> Option<&MarkupElement> {
        self.elements().next()
    }
}

/// Names that survive a decode unchanged: ASCII lower-case letter or `_`
/// first, then lower-case letters, digits, `-`, `_`, `.` or `:`.
///
/// The lenient decoder lower-cases every tag and attribute name and drops
/// names it cannot read, so anything written outside this set would not
/// come back as written.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.' | ':')
    })
}
