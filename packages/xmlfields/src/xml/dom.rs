//! Owned, mutable XML element tree.
//!
//! Parsing is delegated to `roxmltree`; the borrowed tree it produces is
//! copied into [`Element`]s so that setters can modify it. Serialization goes
//! through `quick-xml`'s writer, which takes care of escaping.
//!
//! Comments, processing instructions and namespace prefixes survive a
//! parse/serialize cycle, so editing a settings file in place only changes
//! the fields that were written.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;
use roxmltree::Node;

use crate::config::INDENT_WIDTH;
use crate::error::Result;

/// A piece of element content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(String),
    Comment(String),
    /// Target and data of a processing instruction, separated by a space.
    ProcessingInstruction(String),
}

/// An XML element with attributes and ordered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, including a namespace prefix if the source had one.
    pub name: String,
    /// Attributes in document order, namespace declarations first.
    pub attributes: Vec<(String, String)>,
    /// Child elements, text, comments and processing instructions, in document order.
    pub children: Vec<Content>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style variant of [`Element::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style variant of [`Element::set_text`].
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Tag name without namespace prefix.
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value with the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// First text child, if any.
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match child {
            Content::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replace all text content with `text`, keeping every other kind of child.
    ///
    /// An empty `text` leaves the element without text.
    pub fn set_text(&mut self, text: &str) {
        self.children
            .retain(|child| !matches!(child, Content::Text(_)));
        if !text.is_empty() {
            self.children.insert(0, Content::Text(text.to_string()));
        }
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(Content::Element(child));
    }

    /// First direct child element whose local name is `tag`.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Content::Element(element) if element.local_name() == tag => Some(element),
            _ => None,
        })
    }

    /// Mutable access to the first direct child element whose local name is `tag`.
    pub fn child_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| match child {
            Content::Element(element) if element.local_name() == tag => Some(element),
            _ => None,
        })
    }

    /// Follow a slash-separated path of tag names (e.g., `"video/player"`).
    ///
    /// An empty path or `"."` resolves to `self`.
    pub fn find_by_path_mut(&mut self, path: &str) -> Option<&mut Element> {
        let mut current = self;
        for part in path.split('/').filter(|p| !p.is_empty() && *p != ".") {
            current = current.child_mut(part)?;
        }
        Some(current)
    }

    /// Copy a roxmltree element (and its subtree) into an owned element.
    ///
    /// Whitespace-only text is dropped from elements that contain anything
    /// other than text, since the serializer re-indents those.
    pub fn from_node(node: Node<'_, '_>) -> Self {
        let tag = node.tag_name();
        let mut element = Element::new(qualified_name(node, tag.namespace(), tag.name()));
        element.attributes = namespace_declarations(node);
        for attribute in node.attributes() {
            element.attributes.push((
                qualified_name(node, attribute.namespace(), attribute.name()),
                attribute.value().to_string(),
            ));
        }

        let mixed = node.children().any(|child| !child.is_text());
        for child in node.children() {
            if child.is_element() {
                element.append_child(Element::from_node(child));
            } else if child.is_text() {
                let text = child.text().unwrap_or_default();
                if mixed && text.trim().is_empty() {
                    continue;
                }
                element.children.push(Content::Text(text.to_string()));
            } else if let Some(misc) = misc_from_node(child) {
                element.children.push(misc);
            }
        }
        element
    }
}

/// Rebuild `prefix:local` from a resolved namespace URI.
fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// `xmlns` attributes for namespaces first declared on `node`.
fn namespace_declarations(node: Node<'_, '_>) -> Vec<(String, String)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| {
            let name = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            (name, ns.uri().to_string())
        })
        .collect()
}

/// Comments and processing instructions; `None` for any other node.
fn misc_from_node(node: Node<'_, '_>) -> Option<Content> {
    if node.is_comment() {
        return node.text().map(|text| Content::Comment(text.to_string()));
    }
    node.pi().map(|pi| {
        Content::ProcessingInstruction(match pi.value {
            Some(value) => format!("{} {}", pi.target, value),
            None => pi.target.to_string(),
        })
    })
}

/// An owned XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Comments and processing instructions before the root element.
    prolog: Vec<Content>,
    root: Element,
    /// Comments and processing instructions after the root element.
    epilog: Vec<Content>,
}

impl Document {
    /// Create a document around a root element.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }

    /// Parse XML text into an owned document.
    ///
    /// # Examples
    /// ```
    /// use xmlfields::xml::Document;
    ///
    /// let doc = Document::parse("<root><node>1</node></root>").unwrap();
    /// assert_eq!(doc.root().child("node").and_then(|n| n.text()), Some("1"));
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let root = doc.root_element();

        let mut document = Self::new(Element::from_node(root));
        let mut seen_root = false;
        for node in doc.root().children() {
            if node == root {
                seen_root = true;
            } else if let Some(misc) = misc_from_node(node) {
                if seen_root {
                    document.epilog.push(misc);
                } else {
                    document.prolog.push(misc);
                }
            }
        }
        Ok(document)
    }

    /// Read and parse an XML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading XML document");
        let xml = fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// Serialize and write the document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Saving XML document");
        fs::write(path, self.to_xml_string()?)?;
        Ok(())
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serialize to an indented XML string with an XML declaration.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        for misc in &self.prolog {
            write_content(&mut writer, misc)?;
        }
        write_element(&mut writer, &self.root)?;
        for misc in &self.epilog {
            write_content(&mut writer, misc)?;
        }

        let mut xml = String::from_utf8(writer.into_inner())?;
        xml.push('\n');
        Ok(xml)
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_content(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn write_content(writer: &mut Writer<Vec<u8>>, content: &Content) -> Result<()> {
    match content {
        Content::Element(element) => write_element(writer, element)?,
        Content::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        Content::Comment(text) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
        }
        Content::ProcessingInstruction(content) => {
            writer.write_event(Event::PI(BytesPI::new(content.as_str())))?;
        }
    }
    Ok(())
}
