//! Consistency guard run at the entry of every traversal and query.
//!
//! Active in debug builds and with the `strict-guard` feature; in optimized
//! builds without the feature the check folds away entirely.

use generational_arena::Index;

use crate::domain::arena::Forest;
use crate::domain::error::{ForestError, ForestResult};
use crate::domain::record::TreeRecord;

/// Whether the guard is compiled into this build.
pub const GUARD_ENABLED: bool = cfg!(any(debug_assertions, feature = "strict-guard"));

impl<T: TreeRecord> Forest<T> {
    /// Checks that `idx` names a slot whose children were populated.
    ///
    /// Always runs, regardless of build profile.
    pub fn check_node(&self, idx: Index) -> ForestResult<()> {
        let node = self.get(idx).ok_or(ForestError::NullNode(idx))?;
        if !node.is_populated() {
            return Err(ForestError::Unpopulated { id: node.id() });
        }
        Ok(())
    }

    /// Panics on a null or unpopulated node when the guard is enabled.
    #[inline]
    #[track_caller]
    pub(crate) fn ensure_populated(&self, idx: Index, param: &str) {
        if GUARD_ENABLED {
            if let Err(e) = self.check_node(idx) {
                panic!("{param}: {e}");
            }
        }
    }
}
