//! Forests from flat parent-id records.
//!
//! [`domain::ForestBuilder`] links any [`domain::TreeRecord`] collection into
//! an arena-backed [`domain::Forest`], which then offers lazy depth-first,
//! breadth-first, ancestor and sibling traversals plus structural queries and
//! id search:
//!
//! ```
//! use rsforest::domain::build_forest;
//!
//! let forest = build_forest(vec![(1, None), (2, Some(1)), (3, Some(1)), (4, Some(2))]);
//! let root = forest.roots()[0];
//!
//! let order: Vec<i64> = forest.depth_first(root).map(|(_, node)| node.id()).collect();
//! assert_eq!(order, vec![1, 2, 4, 3]);
//!
//! let four = forest.find_in_forest(4).unwrap();
//! assert_eq!(forest.depth(four), 2);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;
