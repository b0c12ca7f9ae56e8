//! Capability traits describing what the typed accessors need from a DOM.
//!
//! [`XmlNode`] covers reading: tag name, attributes, text and element
//! children. [`XmlNodeMut`] covers the two writes setters perform. The read
//! side is implemented for `roxmltree::Node` and for `&Element`; the write
//! side for [`Element`] only, since roxmltree trees are immutable.

use roxmltree::Node;

use super::dom::{Content, Element};

/// Read access to an element of an XML tree.
///
/// Implementors are cheap `Copy` handles whose borrowed data lives for `'a`.
pub trait XmlNode<'a>: Copy {
    /// Tag name without namespace prefix.
    fn local_name(self) -> &'a str;

    /// Value of the attribute `name`, if present.
    fn attribute_value(self, name: &str) -> Option<&'a str>;

    /// First text child of the element, or `""` when there is none.
    fn text_content(self) -> &'a str;

    /// Direct element children in document order.
    fn child_elements(self) -> impl Iterator<Item = Self> + 'a;
}

/// Write access needed by the setters.
pub trait XmlNodeMut {
    /// Overwrite the text of the first direct child named `tag`.
    ///
    /// Returns `false` (and changes nothing) when no such child exists.
    fn set_child_text(&mut self, tag: &str, text: &str) -> bool;

    /// Append a new child element `tag` holding `text`.
    fn append_child_text(&mut self, tag: &str, text: &str);
}

impl<'a, 'input: 'a> XmlNode<'a> for Node<'a, 'input> {
    fn local_name(self) -> &'a str {
        Node::tag_name(&self).name()
    }

    fn attribute_value(self, name: &str) -> Option<&'a str> {
        Node::attribute(&self, name)
    }

    fn text_content(self) -> &'a str {
        Node::text(&self).unwrap_or_default()
    }

    fn child_elements(self) -> impl Iterator<Item = Self> + 'a {
        self.children().filter(|child| child.is_element())
    }
}

impl<'a> XmlNode<'a> for &'a Element {
    fn local_name(self) -> &'a str {
        Element::local_name(self)
    }

    fn attribute_value(self, name: &str) -> Option<&'a str> {
        self.attribute(name)
    }

    fn text_content(self) -> &'a str {
        self.text().unwrap_or_default()
    }

    fn child_elements(self) -> impl Iterator<Item = Self> + 'a {
        self.children.iter().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            _ => None,
        })
    }
}

impl XmlNodeMut for Element {
    fn set_child_text(&mut self, tag: &str, text: &str) -> bool {
        match self.child_mut(tag) {
            Some(child) => {
                child.set_text(text);
                true
            }
            None => false,
        }
    }

    fn append_child_text(&mut self, tag: &str, text: &str) {
        let mut child = Element::new(tag);
        child.set_text(text);
        self.append_child(child);
    }
}
