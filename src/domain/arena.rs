use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{ForestError, ForestResult};
use crate::domain::record::{NodeId, TreeRecord};

/// Arena slot holding one record and its linkage.
#[derive(Debug, Clone)]
pub struct ForestNode<T> {
    /// The record itself
    pub data: T,
    /// Index of the parent slot, None for roots and unlinked records
    pub(crate) parent: Option<Index>,
    /// Indices of child slots in insertion order, None until the forest is linked
    pub(crate) children: Option<Vec<Index>>,
}

impl<T> ForestNode<T> {
    fn unlinked(data: T) -> Self {
        Self {
            data,
            parent: None,
            children: None,
        }
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// Child indices; empty for leaves and for slots never linked.
    pub fn children(&self) -> &[Index] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_populated(&self) -> bool {
        self.children.is_some()
    }
}

impl<T: TreeRecord> ForestNode<T> {
    pub fn id(&self) -> NodeId {
        self.data.id()
    }
}

/// Arena-backed forest of records.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Parent links are plain indices, so no ownership cycle exists between a
/// parent and its children. Records keep their insertion order, which is
/// also the order roots and children are linked in.
///
/// Iterators borrow the forest immutably; relinking while a traversal is
/// alive is rejected by the borrow checker.
#[derive(Debug, Clone)]
pub struct Forest<T> {
    /// Arena storage for all record slots
    pub(crate) arena: Arena<ForestNode<T>>,
    /// Slot indices in insertion order
    pub(crate) order: Vec<Index>,
    /// Root slots in insertion order
    pub(crate) roots: Vec<Index>,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            order: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Adds a record without linking it.
    ///
    /// The slot stays unpopulated until [`Forest::link`] runs.
    pub fn insert(&mut self, data: T) -> Index {
        let idx = self.arena.insert(ForestNode::unlinked(data));
        self.order.push(idx);
        idx
    }

    pub fn get(&self, idx: Index) -> Option<&ForestNode<T>> {
        self.arena.get(idx)
    }

    pub fn record(&self, idx: Index) -> Option<&T> {
        self.arena.get(idx).map(|node| &node.data)
    }

    /// Mutable access to a record. Changing its identity does not relink.
    pub fn record_mut(&mut self, idx: Index) -> Option<&mut T> {
        self.arena.get_mut(idx).map(|node| &mut node.data)
    }

    pub fn contains(&self, idx: Index) -> bool {
        self.arena.contains(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// All slots in insertion order, including orphans.
    pub fn indices(&self) -> &[Index] {
        &self.order
    }

    pub fn parent(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.parent)
    }

    pub fn children(&self, idx: Index) -> &[Index] {
        self.arena.get(idx).map(ForestNode::children).unwrap_or(&[])
    }
}

impl<T: TreeRecord> Forest<T> {
    /// Identity of the record at `idx`.
    pub fn id_of(&self, idx: Index) -> Option<NodeId> {
        self.arena.get(idx).map(ForestNode::id)
    }

    /// Moves `child` under `new_parent`, or to the root list for `None`.
    ///
    /// Parent and children stay mutually consistent. No cycle check is made,
    /// so this can produce ancestor loops.
    #[instrument(level = "debug", skip(self))]
    pub fn reparent(&mut self, child: Index, new_parent: Option<Index>) -> ForestResult<()> {
        self.check_node(child)?;
        if let Some(parent) = new_parent {
            self.check_node(parent)?;
        }

        let old_parent = self.parent(child);
        match old_parent {
            Some(old) => {
                if let Some(children) = self.arena.get_mut(old).and_then(|n| n.children.as_mut()) {
                    children.retain(|&c| c != child);
                }
            }
            None => self.roots.retain(|&r| r != child),
        }

        match new_parent {
            Some(parent) => {
                let node = self
                    .arena
                    .get_mut(parent)
                    .ok_or(ForestError::NullNode(parent))?;
                node.children.get_or_insert_with(Vec::new).push(child);
            }
            None => self.roots.push(child),
        }

        let node = self
            .arena
            .get_mut(child)
            .ok_or(ForestError::NullNode(child))?;
        node.parent = new_parent;
        Ok(())
    }
}
