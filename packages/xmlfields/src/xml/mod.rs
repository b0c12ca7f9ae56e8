//! XML tree access: capability traits, an owned element tree and lookup helpers.

mod dom;
mod node;
mod utils;

pub use dom::{Content, Document, Element};
pub use node::{XmlNode, XmlNodeMut};
pub use utils::{find_by_path, find_child, find_children, get_attribute, has_child};
