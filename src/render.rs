/*
Conversion of forest trees into termtree structures for display.
Labels are produced by a caller-supplied closure, so the same forest can be
printed by id, by name or both.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Forest, TreeRecord};

pub trait TreeRender<T> {
    fn to_tree_string<F: Fn(&T) -> String>(&self, root: Index, label: &F) -> Tree<String>;

    fn to_tree_strings<F: Fn(&T) -> String>(&self, label: &F) -> Vec<Tree<String>>;
}

impl<T: TreeRecord> TreeRender<T> for Forest<T> {
    #[instrument(level = "debug", skip(self, label))]
    fn to_tree_string<F: Fn(&T) -> String>(&self, root: Index, label: &F) -> Tree<String> {
        self.ensure_populated(root, "root");
        match self.record(root) {
            Some(record) => {
                let mut tree = Tree::new(label(record));
                build_tree(self, root, &mut tree, label);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }

    fn to_tree_strings<F: Fn(&T) -> String>(&self, label: &F) -> Vec<Tree<String>> {
        self.roots()
            .iter()
            .map(|&root| self.to_tree_string(root, label))
            .collect()
    }
}

fn build_tree<T, F>(forest: &Forest<T>, node_idx: Index, parent_tree: &mut Tree<String>, label: &F)
where
    T: TreeRecord,
    F: Fn(&T) -> String,
{
    for &child_idx in forest.children(node_idx) {
        if let Some(child) = forest.record(child_idx) {
            let mut child_tree = Tree::new(label(child));
            build_tree(forest, child_idx, &mut child_tree, label);
            parent_tree.push(child_tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_forest;

    #[test]
    fn test_to_tree_string_renders_nested_children() {
        let forest = build_forest(vec![(1, None), (2, Some(1)), (3, Some(2))]);
        let root = forest.roots()[0];

        let tree = forest.to_tree_string(root, &|r: &(i64, Option<i64>)| r.0.to_string());

        assert_eq!(tree.root, "1");
        assert_eq!(tree.leaves.len(), 1);
        assert_eq!(tree.leaves[0].root, "2");
        assert_eq!(tree.leaves[0].leaves[0].root, "3");
    }
}
