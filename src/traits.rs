use std::path::Path;

use crate::entry::Entry;
use crate::error::FindError;

/// What the walk should do after a [`Visitor`] has seen an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep going. If the entry is a directory, its contents are walked next.
    Descend,

    /// The entry was seen, but if it is a directory its contents are not
    /// walked. On the root this ends the walk successfully.
    Prune,
}

/// Receives every entry reachable from the walk root.
///
/// The visitor is the caller's context: an archive writer, a manifest
/// collector, or anything else that accumulates output. The engine never
/// looks inside it.
///
/// # Errors
///
/// Returning `Err` rejects the entry. The error's
/// [`severity`](FindError::severity) decides what happens next: a
/// [`Severity::Warn`](crate::Severity::Warn) error skips the entry (it is not
/// descended into) and the walk continues; a fatal one unwinds the whole
/// walk. Any error on the root aborts the walk.
///
/// # Example
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use bfind::{Entry, FindError, Visit, Visitor};
///
/// struct Manifest(Vec<PathBuf>);
///
/// impl Visitor for Manifest {
///     fn visit(&mut self, entry: &Entry, member_name: &Path) -> Result<Visit, FindError> {
///         if entry.name == ".git" {
///             return Ok(Visit::Prune);
///         }
///         self.0.push(member_name.to_path_buf());
///         Ok(Visit::Descend)
///     }
/// }
/// ```
pub trait Visitor {
    /// Called once per entry with its real metadata and the member name it
    /// should be recorded under.
    fn visit(&mut self, entry: &Entry, member_name: &Path) -> Result<Visit, FindError>;
}

impl<F> Visitor for F
where
    F: FnMut(&Entry, &Path) -> Result<Visit, FindError>,
{
    fn visit(&mut self, entry: &Entry, member_name: &Path) -> Result<Visit, FindError> {
        self(entry, member_name)
    }
}
