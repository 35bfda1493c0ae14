//! Forest builder: links flat parent-id records into trees.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::Forest;
use crate::domain::record::{NodeId, TreeRecord};

/// Constructs forests from flat record collections.
pub struct ForestBuilder {
    by_id: HashMap<NodeId, Index>,
}

impl Default for ForestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
        }
    }

    /// Moves `records` into a new forest and links it.
    pub fn build<T, I>(&mut self, records: I) -> Forest<T>
    where
        T: TreeRecord,
        I: IntoIterator<Item = T>,
    {
        let mut forest = Forest::new();
        for record in records {
            forest.insert(record);
        }
        self.link(&mut forest);
        forest
    }

    /// Links every slot of `forest` from scratch.
    ///
    /// Pass 1 indexes records by id (last write wins on duplicates) and
    /// resets every slot to an empty child list. Pass 2 walks the records in
    /// insertion order: records without parent id become roots, records whose
    /// parent id resolves are appended to that parent's children. Records
    /// whose parent id does not resolve are orphans and are left unlinked;
    /// they end up neither in the root list nor in any child list.
    #[instrument(level = "debug", skip_all, fields(records = forest.order.len()))]
    pub fn link<T: TreeRecord>(&mut self, forest: &mut Forest<T>) {
        self.by_id.clear();

        for &idx in &forest.order {
            if let Some(node) = forest.arena.get_mut(idx) {
                if let Some(previous) = self.by_id.insert(node.data.id(), idx) {
                    debug!(id = node.data.id(), ?previous, "duplicate id, last record wins");
                }
                node.parent = None;
                node.children = Some(Vec::new());
            }
        }

        let mut roots = Vec::new();
        let mut orphans = 0usize;
        for &idx in &forest.order {
            let parent_id = match forest.arena.get(idx) {
                Some(node) => node.data.parent_id(),
                None => continue,
            };

            let Some(parent_id) = parent_id else {
                roots.push(idx);
                continue;
            };

            let Some(&parent_idx) = self.by_id.get(&parent_id) else {
                orphans += 1;
                debug!(parent_id, "parent not found, skipping orphan record");
                continue;
            };

            if let Some(node) = forest.arena.get_mut(idx) {
                node.parent = Some(parent_idx);
            }
            if let Some(parent) = forest.arena.get_mut(parent_idx) {
                parent.children.get_or_insert_with(Vec::new).push(idx);
            }
        }

        debug!(roots = roots.len(), orphans, "forest linked");
        forest.roots = roots;
    }
}

/// Builds a forest from flat records with a fresh [`ForestBuilder`].
pub fn build_forest<T, I>(records: I) -> Forest<T>
where
    T: TreeRecord,
    I: IntoIterator<Item = T>,
{
    ForestBuilder::new().build(records)
}

impl<T: TreeRecord> Forest<T> {
    /// Relinks the whole forest, populating slots added with [`Forest::insert`].
    ///
    /// Manual [`Forest::reparent`] changes are discarded.
    pub fn link(&mut self) {
        ForestBuilder::new().link(self);
    }
}
