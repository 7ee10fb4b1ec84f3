use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, warn};

use crate::dir::{self, DirHandle, ReadOutcome};
use crate::entry::Entry;
use crate::error::FindError;
use crate::member::member_name;
use crate::path::clean;
use crate::results::{Results, WalkStats};
use crate::traits::{Visit, Visitor};

// ---------------------------------------------------------------------------
// WalkOptions
// ---------------------------------------------------------------------------

/// Walk parameters passed from the builder to the engine.
///
/// `pub(crate)`: callers configure these through the builder methods
/// (`.member_name()`, `.follow_symlinks()`, `.collect_warnings()`).
pub(crate) struct WalkOptions {
    pub root:             PathBuf,
    pub member_name:      Option<PathBuf>,
    pub follow_symlinks:  bool,
    pub collect_warnings: bool,
}

// ---------------------------------------------------------------------------
// Walk state
// ---------------------------------------------------------------------------

/// Everything a walk owns between its first stat and its return.
///
/// `dirs` is the path from the root to the directory being enumerated,
/// one open handle per level; the top is the only stream ever read.
struct Walk<'v, V: Visitor + ?Sized> {
    root:             PathBuf,
    logical:          PathBuf,
    follow_symlinks:  bool,
    collect_warnings: bool,
    visitor:          &'v mut V,
    dirs:             Vec<DirHandle>,
    stats:            WalkStats,
    warnings:         Vec<FindError>,
}

impl<V: Visitor + ?Sized> Drop for Walk<'_, V> {
    fn drop(&mut self) {
        // Close from the innermost directory outwards.
        while let Some(handle) = self.dirs.pop() {
            drop(handle);
        }
    }
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk the tree under `opts.root`, calling `visitor` once per entry.
///
/// Called by `FindBuilder::run()`. Any fatal error is returned as soon as it
/// happens; every open directory handle is closed on the way out.
pub(crate) fn run<V: Visitor + ?Sized>(opts: WalkOptions, visitor: &mut V) -> Result<Results, FindError> {
    let start = Instant::now();

    let root = clean(&opts.root);
    let logical = match &opts.member_name {
        Some(name) => clean(name),
        None       => root.clone(),
    };

    debug!("walking {} as {}", root.display(), logical.display());

    let metadata = dir::stat(&root, opts.follow_symlinks).map_err(|source| {
        FindError::RootInaccessible {
            path: root.clone(),
            source,
        }
    })?;
    let root_entry = Entry::new(root.clone(), root_name(&root), 0, metadata);

    let mut walk = Walk {
        root,
        logical,
        follow_symlinks:  opts.follow_symlinks,
        collect_warnings: opts.collect_warnings,
        visitor,
        dirs:             Vec::new(),
        stats:            WalkStats::default(),
        warnings:         Vec::new(),
    };

    walk.stats.visited += 1;
    match walk.visitor.visit(&root_entry, &walk.logical) {
        Ok(Visit::Descend) => {}
        Ok(Visit::Prune) => {
            walk.stats.pruned += 1;
            return Ok(walk.finish(start));
        }
        Err(e) => {
            return Err(FindError::RootVisitRejected {
                path:   root_entry.path,
                source: Box::new(e),
            })
        }
    }

    // A single file is a complete walk on its own.
    if !root_entry.is_dir() {
        return Ok(walk.finish(start));
    }

    let handle = DirHandle::open(&root_entry.path, 0).map_err(|source| {
        FindError::RootInaccessible {
            path: root_entry.path.clone(),
            source,
        }
    })?;
    walk.push(handle)?;

    walk.run_loop()?;
    Ok(walk.finish(start))
}

impl<V: Visitor + ?Sized> Walk<'_, V> {
    fn run_loop(&mut self) -> Result<(), FindError> {
        while let Some(top) = self.dirs.last_mut() {
            let entry = match top.read_next(self.follow_symlinks) {
                ReadOutcome::Entry(entry) => entry,
                ReadOutcome::End => {
                    self.pop();
                    continue;
                }
                ReadOutcome::Unreadable(err) => {
                    self.warn(err);
                    continue;
                }
                ReadOutcome::Broken(err) => {
                    self.warn(err);
                    self.pop();
                    continue;
                }
            };

            if entry.name == "." || entry.name == ".." {
                continue;
            }

            let rewritten = member_name(&self.root, &self.logical, &entry.path);
            let member = rewritten.as_deref().unwrap_or(&entry.path);

            self.stats.visited += 1;
            match self.visitor.visit(&entry, member) {
                Ok(Visit::Descend) => {}
                Ok(Visit::Prune) => {
                    self.stats.pruned += 1;
                    continue;
                }
                Err(err) if err.is_recoverable() => {
                    self.warn(err);
                    continue;
                }
                Err(err) => return Err(err),
            }

            if entry.is_dir() {
                self.descend(&entry.path, entry.depth)?;
            }
        }

        Ok(())
    }

    /// Open `path` and make it the directory being enumerated.
    ///
    /// Permission denied only costs the walk this subtree; any other open
    /// failure is fatal.
    fn descend(&mut self, path: &Path, depth: usize) -> Result<(), FindError> {
        let handle = match DirHandle::open(path, depth) {
            Ok(handle) => handle,
            Err(source) if source.kind() == io::ErrorKind::PermissionDenied => {
                self.warn(FindError::DirectoryOpenDenied {
                    path: path.to_path_buf(),
                    source,
                });
                return Ok(());
            }
            Err(source) => {
                return Err(FindError::DirectoryOpenOther {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        self.push(handle)
    }

    /// Push `handle`, dropping it if the stack cannot grow.
    fn push(&mut self, handle: DirHandle) -> Result<(), FindError> {
        if self.dirs.try_reserve(1).is_err() {
            return Err(FindError::ResourceExhaustion {
                path: handle.path().to_path_buf(),
            });
        }

        debug!("entering {}", handle.path().display());
        self.dirs.push(handle);
        self.stats.dirs_entered += 1;
        Ok(())
    }

    fn pop(&mut self) {
        if let Some(handle) = self.dirs.pop() {
            debug!("leaving {}", handle.path().display());
        }
    }

    fn warn(&mut self, err: FindError) {
        match err.io_error() {
            Some(io_err) => warn!("{err}: {io_err}"),
            None         => warn!("{err}"),
        }

        self.stats.skipped += 1;
        if self.collect_warnings {
            self.warnings.push(err);
        }
    }

    fn finish(&mut self, start: Instant) -> Results {
        let mut stats = std::mem::take(&mut self.stats);
        stats.duration = start.elapsed();

        debug!(
            "walk of {} done: {} visited, {} skipped",
            self.root.display(),
            stats.visited,
            stats.skipped
        );

        Results {
            stats,
            warnings: std::mem::take(&mut self.warnings),
        }
    }
}

/// The bare name reported for the walk root.
fn root_name(root: &Path) -> OsString {
    root.file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| root.as_os_str().to_os_string())
}
