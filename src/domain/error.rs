//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

use crate::domain::NodeId;

/// Precondition violations on forest nodes.
///
/// Raised by the consistency guard in development builds and by
/// [`Forest::check_node`](crate::domain::Forest::check_node) and
/// [`Forest::reparent`](crate::domain::Forest::reparent) everywhere.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("the given node cannot be null: {0:?} does not exist in this forest")]
    NullNode(Index),

    #[error(
        "the children of node {id} are not populated; build the forest with \
         ForestBuilder::build or Forest::link first"
    )]
    Unpopulated { id: NodeId },
}

/// Result type for forest operations.
pub type ForestResult<T> = Result<T, ForestError>;
