//! Lazy traversals over a linked forest.
//!
//! Every iterator reads the live linkage as it is pulled and holds no cached
//! state beyond its own cursor, so calling the traversal again restarts it
//! against the current structure. Stopping early is just dropping the
//! iterator.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{Forest, ForestNode};
use crate::domain::record::{NodeId, TreeRecord};

/// Pre-order depth-first iterator over one subtree.
pub struct DepthFirst<'a, T> {
    forest: &'a Forest<T>,
    stack: Vec<Index>,
}

impl<'a, T> DepthFirst<'a, T> {
    fn new(forest: &'a Forest<T>, start: Index) -> Self {
        Self {
            forest,
            stack: vec![start],
        }
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = (Index, &'a ForestNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.forest.get(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children().iter().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

/// Depth-first iterator over every tree of a forest, in root order.
pub struct ForestDepthFirst<'a, T: TreeRecord> {
    forest: &'a Forest<T>,
    roots: std::slice::Iter<'a, Index>,
    current: Option<DepthFirst<'a, T>>,
}

impl<'a, T: TreeRecord> Iterator for ForestDepthFirst<'a, T> {
    type Item = (Index, &'a ForestNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let &root = self.roots.next()?;
            self.current = Some(self.forest.depth_first(root));
        }
    }
}

enum Step {
    Visit(Index),
    Expand(Index),
}

/// Breadth-first iterator: a node's whole child list, then each child's
/// descendants in child order.
///
/// This is not a level-order walk. For `1 -> [2, 3]`, `2 -> [4]`,
/// `3 -> [5]`, `4 -> [6]` it yields `1, 2, 3, 4, 6, 5`.
pub struct BreadthFirst<'a, T> {
    forest: &'a Forest<T>,
    stack: Vec<Step>,
}

impl<'a, T> BreadthFirst<'a, T> {
    fn new(forest: &'a Forest<T>, start: Index, include_start: bool) -> Self {
        let mut stack = vec![Step::Expand(start)];
        if include_start {
            stack.push(Step::Visit(start));
        }
        Self { forest, stack }
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = (Index, &'a ForestNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Visit(idx) => {
                    if let Some(node) = self.forest.get(idx) {
                        return Some((idx, node));
                    }
                }
                Step::Expand(idx) => {
                    if let Some(node) = self.forest.get(idx) {
                        let children = node.children();
                        // Expansions sit below the visits of the same child list
                        self.stack
                            .extend(children.iter().rev().map(|&c| Step::Expand(c)));
                        self.stack
                            .extend(children.iter().rev().map(|&c| Step::Visit(c)));
                    }
                }
            }
        }
        None
    }
}

/// Iterator from a node up through its ancestors.
pub struct ClimbToRoot<'a, T> {
    forest: &'a Forest<T>,
    next: Option<Index>,
}

impl<'a, T> Iterator for ClimbToRoot<'a, T> {
    type Item = (Index, &'a ForestNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next.take()?;
        let node = self.forest.get(idx)?;
        self.next = node.parent();
        Some((idx, node))
    }
}

/// Iterator over the children of a node's parent.
pub struct Siblings<'a, T> {
    forest: &'a Forest<T>,
    single: Option<Index>,
    candidates: std::slice::Iter<'a, Index>,
    skip: Option<NodeId>,
}

impl<'a, T: TreeRecord> Iterator for Siblings<'a, T> {
    type Item = (Index, &'a ForestNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(idx) = self.single.take() {
            return self.forest.get(idx).map(|node| (idx, node));
        }
        for &idx in self.candidates.by_ref() {
            let Some(node) = self.forest.get(idx) else {
                continue;
            };
            if self.skip == Some(node.id()) {
                continue;
            }
            return Some((idx, node));
        }
        None
    }
}

impl<T: TreeRecord> Forest<T> {
    /// Pre-order walk of the subtree at `start`, `start` first.
    #[instrument(level = "trace", skip(self))]
    pub fn depth_first(&self, start: Index) -> DepthFirst<'_, T> {
        self.ensure_populated(start, "start");
        DepthFirst::new(self, start)
    }

    /// Depth-first walk of every tree, roots in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn depth_first_forest(&self) -> ForestDepthFirst<'_, T> {
        ForestDepthFirst {
            forest: self,
            roots: self.roots.iter(),
            current: None,
        }
    }

    /// Child list first, then each child's breadth-first walk.
    ///
    /// `start` itself is yielded first only when `include_start` is set.
    #[instrument(level = "trace", skip(self))]
    pub fn breadth_first(&self, start: Index, include_start: bool) -> BreadthFirst<'_, T> {
        self.ensure_populated(start, "start");
        BreadthFirst::new(self, start, include_start)
    }

    /// `start`, then each successive parent. Never ends on an ancestor cycle.
    #[instrument(level = "trace", skip(self))]
    pub fn climb_to_root(&self, start: Index) -> ClimbToRoot<'_, T> {
        self.ensure_populated(start, "start");
        ClimbToRoot {
            forest: self,
            next: Some(start),
        }
    }

    /// Ancestor chain from the root down to `node`, both inclusive.
    #[instrument(level = "trace", skip(self))]
    pub fn path_from_root(&self, node: Index) -> Vec<Index> {
        self.ensure_populated(node, "node");
        let mut path: Vec<Index> = self.climb_to_root(node).map(|(idx, _)| idx).collect();
        path.reverse();
        path
    }

    /// Children of `node`'s parent.
    ///
    /// With `include_given` unset, entries sharing `node`'s id are skipped.
    /// A root has no siblings: it yields only itself when `include_given`
    /// is set and nothing otherwise.
    #[instrument(level = "trace", skip(self))]
    pub fn siblings(&self, node: Index, include_given: bool) -> Siblings<'_, T> {
        self.ensure_populated(node, "node");
        let parent = self.parent(node).and_then(|p| self.get(p));
        match parent {
            Some(parent) => Siblings {
                forest: self,
                single: None,
                candidates: parent.children().iter(),
                skip: if include_given { None } else { self.id_of(node) },
            },
            None => Siblings {
                forest: self,
                single: (include_given && self.contains(node)).then_some(node),
                candidates: (&[] as &[Index]).iter(),
                skip: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_forest;

    fn collect<'a, T: TreeRecord + 'a>(
        iter: impl Iterator<Item = (Index, &'a ForestNode<T>)>,
    ) -> Vec<NodeId> {
        iter.map(|(_, node)| node.id()).collect()
    }

    #[test]
    fn test_breadth_first_is_not_level_order() {
        let forest = build_forest(vec![
            (1, None),
            (2, Some(1)),
            (3, Some(1)),
            (4, Some(2)),
            (5, Some(3)),
            (6, Some(4)),
        ]);
        let root = forest.roots()[0];

        assert_eq!(collect(forest.breadth_first(root, true)), vec![1, 2, 3, 4, 6, 5]);
        assert_eq!(collect(forest.breadth_first(root, false)), vec![2, 3, 4, 6, 5]);
    }

    #[test]
    fn test_depth_first_restarts_against_current_links() {
        let mut forest = build_forest(vec![(1, None), (2, Some(1))]);
        let root = forest.roots()[0];
        assert_eq!(collect(forest.depth_first(root)), vec![1, 2]);

        forest.insert((3, Some(1)));
        forest.link();
        assert_eq!(collect(forest.depth_first(root)), vec![1, 2, 3]);
    }
}
