//! Tests for the lazy traversals

use rstest::{fixture, rstest};

use rsforest::domain::{build_forest, Forest, ForestNode, Index, NodeId};

type Rec = (NodeId, Option<NodeId>);

//        1
//      /   \
//     2     3
//    / \     \
//   4   5     6
//   |
//   7
#[fixture]
fn forest() -> Forest<Rec> {
    build_forest(vec![
        (1, None),
        (2, Some(1)),
        (3, Some(1)),
        (4, Some(2)),
        (5, Some(2)),
        (6, Some(3)),
        (7, Some(4)),
    ])
}

fn ids<'a>(iter: impl Iterator<Item = (Index, &'a ForestNode<Rec>)>) -> Vec<NodeId> {
    iter.map(|(_, node)| node.id()).collect()
}

fn at(forest: &Forest<Rec>, id: NodeId) -> Index {
    forest.find_in_forest(id).unwrap()
}

// ============================================================
// Depth-first
// ============================================================

#[rstest]
fn test_depth_first_is_pre_order(forest: Forest<Rec>) {
    assert_eq!(ids(forest.depth_first(at(&forest, 1))), vec![1, 2, 4, 7, 5, 3, 6]);
    assert_eq!(ids(forest.depth_first(at(&forest, 2))), vec![2, 4, 7, 5]);
    assert_eq!(ids(forest.depth_first(at(&forest, 6))), vec![6]);
}

#[rstest]
fn test_depth_first_stops_when_consumer_stops(forest: Forest<Rec>) {
    let first_two: Vec<NodeId> = forest
        .depth_first(at(&forest, 1))
        .take(2)
        .map(|(_, n)| n.id())
        .collect();
    assert_eq!(first_two, vec![1, 2]);
}

#[rstest]
fn test_depth_first_is_restartable(forest: Forest<Rec>) {
    let root = at(&forest, 1);
    let first = ids(forest.depth_first(root));
    let second = ids(forest.depth_first(root));
    assert_eq!(first, second);
}

#[test]
fn test_depth_first_forest_concatenates_roots() {
    let forest = build_forest(vec![(1, None), (10, None), (2, Some(1)), (11, Some(10))]);

    assert_eq!(ids(forest.depth_first_forest()), vec![1, 2, 10, 11]);
}

// ============================================================
// Breadth-first
// ============================================================

#[rstest]
fn test_breadth_first_yields_child_lists_then_descends(forest: Forest<Rec>) {
    // A level-order walk would give 1, 2, 3, 4, 5, 6, 7
    assert_eq!(
        ids(forest.breadth_first(at(&forest, 1), true)),
        vec![1, 2, 3, 4, 5, 7, 6]
    );
}

#[rstest]
#[case::with_start(true, vec![2, 4, 5, 7])]
#[case::without_start(false, vec![4, 5, 7])]
fn test_breadth_first_start_flag(
    forest: Forest<Rec>,
    #[case] include_start: bool,
    #[case] expected: Vec<NodeId>,
) {
    assert_eq!(ids(forest.breadth_first(at(&forest, 2), include_start)), expected);
}

#[rstest]
fn test_breadth_first_of_leaf(forest: Forest<Rec>) {
    assert_eq!(ids(forest.breadth_first(at(&forest, 7), true)), vec![7]);
    assert!(ids(forest.breadth_first(at(&forest, 7), false)).is_empty());
}

// ============================================================
// Ancestors
// ============================================================

#[rstest]
fn test_climb_to_root_starts_at_node(forest: Forest<Rec>) {
    assert_eq!(ids(forest.climb_to_root(at(&forest, 7))), vec![7, 4, 2, 1]);
    assert_eq!(ids(forest.climb_to_root(at(&forest, 1))), vec![1]);
}

#[rstest]
#[case(7)]
#[case(6)]
#[case(1)]
fn test_path_from_root_is_reversed_climb(forest: Forest<Rec>, #[case] id: NodeId) {
    let node = at(&forest, id);

    let mut climb: Vec<Index> = forest.climb_to_root(node).map(|(idx, _)| idx).collect();
    let path = forest.path_from_root(node);
    climb.reverse();

    assert_eq!(path, climb);
    assert_eq!(path.first(), Some(&forest.root_of(node)));
    assert_eq!(path.last(), Some(&node));
}

// ============================================================
// Siblings
// ============================================================

#[rstest]
fn test_siblings_of_root(forest: Forest<Rec>) {
    let root = at(&forest, 1);

    assert!(ids(forest.siblings(root, false)).is_empty());
    assert_eq!(ids(forest.siblings(root, true)), vec![1]);
}

#[rstest]
fn test_siblings_of_child(forest: Forest<Rec>) {
    let four = at(&forest, 4);

    assert_eq!(ids(forest.siblings(four, true)), vec![4, 5]);
    assert_eq!(ids(forest.siblings(four, false)), vec![5]);
}

#[rstest]
fn test_only_child_has_no_other_siblings(forest: Forest<Rec>) {
    let six = at(&forest, 6);

    assert!(ids(forest.siblings(six, false)).is_empty());
    assert_eq!(ids(forest.siblings(six, true)), vec![6]);
}

#[test]
fn test_siblings_sharing_an_id_are_skipped() {
    let forest = build_forest(vec![(1, None), (2, Some(1)), (2, Some(1)), (3, Some(1))]);
    let root = forest.roots()[0];
    let first_two = forest.children(root)[0];

    assert_eq!(ids(forest.siblings(first_two, false)), vec![3]);
    assert_eq!(ids(forest.siblings(first_two, true)), vec![2, 2, 3]);
}
