//! # bfind
//!
//! Iterative directory walker for archive builders.
//!
//! bfind walks every entry reachable from a root path and hands each one to a
//! [`Visitor`] together with its metadata and a *member name*: the path it
//! should be recorded under in the archive being built. The visitor decides
//! whether to descend into a directory, prune it, or reject the entry.
//!
//! The walk keeps one open directory handle per level on a heap-allocated
//! stack instead of recursing, so tree depth never grows the call stack.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//! use bfind::{Entry, FindError, Visit};
//!
//! let mut members: Vec<PathBuf> = Vec::new();
//!
//! let results = bfind::find("/home/user/project")
//!     .member_name("project")
//!     .run(&mut |entry: &Entry, member: &Path| -> Result<Visit, FindError> {
//!         if entry.name == "target" && entry.is_dir() {
//!             return Ok(Visit::Prune);
//!         }
//!         members.push(member.to_path_buf());
//!         Ok(Visit::Descend)
//!     })
//!     .unwrap();
//!
//! println!("{} entries in {:.3}s",
//!     results.stats.visited,
//!     results.stats.duration.as_secs_f64()
//! );
//! ```
//!
//! # Errors
//!
//! Visitors reject an entry by returning a [`FindError`]. Its
//! [`Severity`] decides the outcome:
//!
//! ```rust
//! use std::path::Path;
//! use bfind::{Entry, FindError, Visit, Visitor};
//!
//! struct NoSockets;
//!
//! impl Visitor for NoSockets {
//!     fn visit(&mut self, entry: &Entry, _member: &Path) -> Result<Visit, FindError> {
//!         match entry.kind {
//!             // skipped and logged, the walk goes on
//!             bfind::EntryKind::Other => Err(FindError::warning(&entry.path, "unsupported file type")),
//!             _ => Ok(Visit::Descend),
//!         }
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

use std::path::PathBuf;

pub mod member;
pub mod path;

mod builder;
mod dir;
mod engine;
mod entry;
mod error;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::FindBuilder;
pub use entry::{Entry, EntryKind};
pub use error::{FindError, Severity};
pub use results::{Results, WalkStats};
pub use traits::{Visit, Visitor};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`FindBuilder`] that walks `root`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use bfind::{Entry, FindError, Visit};
///
/// let dir = std::env::temp_dir();
/// let mut seen = 0;
///
/// bfind::find(&dir)
///     .run(&mut |_: &Entry, _: &Path| -> Result<Visit, FindError> {
///         seen += 1;
///         Ok(Visit::Prune)
///     })
///     .unwrap();
///
/// assert_eq!(seen, 1);
/// ```
pub fn find(root: impl Into<PathBuf>) -> FindBuilder {
    FindBuilder::new(root)
}
