//! XML utility functions for navigating and extracting data from element trees.
//!
//! Every helper is generic over [`XmlNode`], so the same lookups work on a
//! borrowed `roxmltree` tree and on an owned [`Element`](super::Element).

use super::node::XmlNode;

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlfields::xml::find_child;
///
/// let xml = r#"<root><child1/><child2/></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "child1").is_some());
/// assert!(find_child(root, "missing").is_none());
/// ```
pub fn find_child<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<N> {
    node.child_elements().find(|child| child.local_name() == tag)
}

/// Find all child elements with the given tag name, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlfields::xml::find_children;
///
/// let xml = r#"<root><item>1</item><item>2</item><other/></root>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_children(doc.root_element(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 't, N>(
    node: N,
    tag: &'t str,
) -> impl Iterator<Item = N> + use<'a, 't, N>
where
    N: XmlNode<'a>,
{
    node.child_elements()
        .filter(move |child| child.local_name() == tag)
}

/// Find a descendant element matching a path of tag names.
///
/// # Arguments
/// * `node` - Starting node
/// * `path` - Slash-separated path of tag names (e.g., "video/player");
///   an empty path or `"."` resolves to `node` itself
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlfields::xml::find_by_path;
///
/// let xml = r#"<settings><video><player>1</player></video></settings>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let player = find_by_path(doc.root_element(), "video/player");
/// assert_eq!(player.and_then(|n| n.text()), Some("1"));
/// ```
pub fn find_by_path<'a, N: XmlNode<'a>>(node: N, path: &str) -> Option<N> {
    let mut current = node;
    for part in path.split('/').filter(|p| !p.is_empty() && *p != ".") {
        current = find_child(current, part)?;
    }
    Some(current)
}

/// Get an attribute value from a node.
pub fn get_attribute<'a, N: XmlNode<'a>>(node: N, name: &str) -> Option<&'a str> {
    node.attribute_value(name)
}

/// Check whether a node has a direct child element with the given tag name.
pub fn has_child<'a, N: XmlNode<'a>>(node: N, tag: &str) -> bool {
    find_child(node, tag).is_some()
}
