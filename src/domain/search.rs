//! Identity lookup built on depth-first traversal.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::Forest;
use crate::domain::record::{NodeId, TreeRecord};

impl<T: TreeRecord> Forest<T> {
    /// First node with `id` in the subtree at `node`, `node` included.
    #[instrument(level = "debug", skip(self))]
    pub fn find_descendant(&self, node: Index, id: NodeId) -> Option<Index> {
        self.ensure_populated(node, "node");
        self.depth_first(node)
            .find(|(_, candidate)| candidate.id() == id)
            .map(|(idx, _)| idx)
    }

    /// First node with `id` across all trees, in root order.
    ///
    /// Orphans are not part of any tree and are never found.
    #[instrument(level = "debug", skip(self))]
    pub fn find_in_forest(&self, id: NodeId) -> Option<Index> {
        find_in_roots(self, &self.roots, id)
    }
}

/// Searches the trees under `roots`, checking each root before its descendants.
pub fn find_in_roots<T: TreeRecord>(forest: &Forest<T>, roots: &[Index], id: NodeId) -> Option<Index> {
    for &root in roots {
        if forest.id_of(root) == Some(id) {
            return Some(root);
        }
        if let Some(found) = forest.find_descendant(root, id) {
            return Some(found);
        }
    }
    None
}
