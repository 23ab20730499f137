//! Node types: `Element`, `Text`, `Node` and `Document`.
//!
//! The tree is deliberately plain: there is no phase or family machinery,
//! every element carries its attributes, its children and the `StableId`
//! assigned by the [`Indexer`](crate::index::Indexer).

mod document;
mod element;
mod text;

pub use document::{Document, ElementIterator, Stats};
pub use element::Element;
pub use text::Text;

use smallvec::SmallVec;

/// Node in a VDOM tree - either Element or Text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    // Generates for each variant (element -> Element, text -> Text):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(element, text);
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;
