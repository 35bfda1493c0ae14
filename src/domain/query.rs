//! Structural properties derived from the parent chain.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::Forest;
use crate::domain::record::{NodeType, TreeRecord};

impl<T: TreeRecord> Forest<T> {
    /// Number of parent hops up to the root; a root has depth 0.
    ///
    /// Does not terminate on an ancestor cycle, check
    /// [`Forest::has_ancestor_loop`] first when the forest was relinked by hand.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, node: Index) -> usize {
        self.ensure_populated(node, "node");
        self.climb_to_root(node).skip(1).count()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn node_type(&self, node: Index) -> NodeType {
        self.ensure_populated(node, "node");
        if self.parent(node).is_none() {
            NodeType::Root
        } else if self.children(node).is_empty() {
            NodeType::Leaf
        } else {
            NodeType::Internal
        }
    }

    /// Whether the parent chain of `node` leads back to `node`'s id.
    ///
    /// Starts at the parent, so only loops through `node` itself are found.
    /// A loop further up the chain that never revisits `node` keeps this
    /// walking forever.
    #[instrument(level = "debug", skip(self))]
    pub fn has_ancestor_loop(&self, node: Index) -> bool {
        self.ensure_populated(node, "node");
        let Some(start) = self.get(node) else {
            return false;
        };
        let id = start.id();

        let mut current = start.parent();
        while let Some(idx) = current {
            let Some(ancestor) = self.get(idx) else {
                break;
            };
            if ancestor.id() == id {
                return true;
            }
            current = ancestor.parent();
        }
        false
    }

    /// Top of `node`'s parent chain; `node` itself for roots.
    #[instrument(level = "debug", skip(self))]
    pub fn root_of(&self, node: Index) -> Index {
        self.ensure_populated(node, "node");
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }
}
