use std::path::PathBuf;

use crate::engine::{run, WalkOptions};
use crate::error::FindError;
use crate::results::Results;
use crate::traits::Visitor;

// ---------------------------------------------------------------------------
// FindBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a walk.
///
/// Created via [`bfind::find()`](crate::find). Configure with chained
/// builder methods, then call [`run()`](FindBuilder::run) with a visitor.
///
/// # Example
///
/// ```rust,ignore
/// let results = bfind::find("/home/user/project")
///     .member_name("project")
///     .follow_symlinks(false)
///     .collect_warnings(true)
///     .run(&mut archive)?;
/// ```
#[derive(Debug, Clone)]
pub struct FindBuilder {
    root:             PathBuf,
    member_name:      Option<PathBuf>,
    follow_symlinks:  bool,
    collect_warnings: bool,
}

impl FindBuilder {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:             root.into(),
            member_name:      None,
            follow_symlinks:  false,
            collect_warnings: false,
        }
    }

    // ── Naming ────────────────────────────────────────────────────────────

    /// Report the root, and everything under it, as living at `name`.
    ///
    /// Walking `/a/b` with member name `/x` reports `/a/b/c/d` as `/x/c/d`.
    /// Defaults to the root path itself, in which case every entry is
    /// reported under its real path.
    pub fn member_name(mut self, name: impl Into<PathBuf>) -> Self {
        self.member_name = Some(name.into());
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Stat entries through symbolic links instead of reporting the links
    /// themselves. Off by default.
    ///
    /// Following links can revisit a directory forever if a link points at
    /// one of its own ancestors; the visitor must prune such loops itself.
    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.follow_symlinks = yes;
        self
    }

    /// Collect non-fatal errors into [`Results::warnings`].
    ///
    /// Disabled by default. Warnings are always logged either way.
    pub fn collect_warnings(mut self, yes: bool) -> Self {
        self.collect_warnings = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Walk the tree, handing every entry to `visitor`.
    ///
    /// Blocks until the walk completes or the first fatal error.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the root cannot be stat'd or opened, when the
    /// visitor rejects the root, when a subdirectory cannot be opened for a
    /// reason other than missing permission, or when the visitor returns a
    /// fatal error. Every directory opened so far is closed before
    /// returning.
    pub fn run<V: Visitor + ?Sized>(self, visitor: &mut V) -> Result<Results, FindError> {
        let opts = WalkOptions {
            root:             self.root,
            member_name:      self.member_name,
            follow_symlinks:  self.follow_symlinks,
            collect_warnings: self.collect_warnings,
        };

        run(opts, visitor)
    }
}
