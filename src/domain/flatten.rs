//! Flattening a forest back into depth-first ordered records.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::Forest;
use crate::domain::record::TreeRecord;

impl<T: TreeRecord> Forest<T> {
    /// Records of all trees in depth-first order, roots in insertion order.
    ///
    /// Orphans are not reachable from any root and are left out.
    #[instrument(level = "debug", skip(self))]
    pub fn flatten(&self) -> Vec<&T> {
        self.depth_first_forest().map(|(_, node)| &node.data).collect()
    }

    pub fn flatten_indices(&self) -> Vec<Index> {
        self.depth_first_forest().map(|(idx, _)| idx).collect()
    }

    /// Consumes the forest, returning the linked records in depth-first order.
    pub fn into_records(mut self) -> Vec<T> {
        self.flatten_indices()
            .into_iter()
            .filter_map(|idx| self.arena.remove(idx))
            .map(|node| node.data)
            .collect()
    }
}
