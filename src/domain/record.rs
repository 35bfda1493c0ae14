//! Record contract consumed by the forest.

use std::fmt;

/// Identity of a record within one flat collection.
pub type NodeId = i64;

/// A flat record that can be linked into a forest.
///
/// Implementors only supply identity and the identity of their parent.
/// The linkage itself (parent reference, ordered children) lives in the
/// [`Forest`](crate::domain::Forest) slot that owns the record.
pub trait TreeRecord {
    /// Identity of this record.
    fn id(&self) -> NodeId;

    /// Identity of the parent record, `None` for roots.
    fn parent_id(&self) -> Option<NodeId>;
}

/// `(id, parent_id)` pairs are the smallest possible record.
impl TreeRecord for (NodeId, Option<NodeId>) {
    fn id(&self) -> NodeId {
        self.0
    }

    fn parent_id(&self) -> Option<NodeId> {
        self.1
    }
}

impl<R: TreeRecord + ?Sized> TreeRecord for Box<R> {
    fn id(&self) -> NodeId {
        (**self).id()
    }

    fn parent_id(&self) -> Option<NodeId> {
        (**self).parent_id()
    }
}

/// Position of a node within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Node without parent
    Root,
    /// Node with a parent and children
    Internal,
    /// Node with a parent and no children
    Leaf,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Root => "root",
            NodeType::Internal => "internal",
            NodeType::Leaf => "leaf",
        };
        f.write_str(name)
    }
}
