//! Domain layer: forest construction, traversal and queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod flatten;
pub mod guard;
pub mod query;
pub mod record;
pub mod search;
pub mod traversal;

pub use arena::{Forest, ForestNode};
pub use builder::{build_forest, ForestBuilder};
pub use error::{ForestError, ForestResult};
pub use generational_arena::Index;
pub use guard::GUARD_ENABLED;
pub use record::{NodeId, NodeType, TreeRecord};
pub use search::find_in_roots;
pub use traversal::{BreadthFirst, ClimbToRoot, DepthFirst, ForestDepthFirst, Siblings};
