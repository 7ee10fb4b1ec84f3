use std::time::Duration;

use crate::error::FindError;

/// The output of a completed walk.
///
/// `warnings` is opt-in, disabled by default. Enable it on the builder with
/// `.collect_warnings(true)`. Fatal errors never end up here; they are
/// returned from [`FindBuilder::run`](crate::FindBuilder::run) instead.
#[derive(Debug)]
pub struct Results {
    /// Walk statistics.
    pub stats: WalkStats,

    /// Non-fatal errors encountered during the walk (directories that could
    /// not be opened for lack of permission, entries that vanished before
    /// they could be stat'd, visitor warnings), in the order they occurred.
    pub warnings: Vec<FindError>,
}

/// Counters for a completed walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Number of visitor calls, root included.
    pub visited: usize,

    /// Directories whose contents were enumerated, root included.
    pub dirs_entered: usize,

    /// Entries the visitor answered with [`Visit::Prune`](crate::Visit::Prune).
    pub pruned: usize,

    /// Entries skipped because of a non-fatal error.
    pub skipped: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,
}
