#[cfg(test)]
use std::cell::Cell;
use std::fs::{self, Metadata, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::FindError;

/// Stat `path`, following a final symlink only when asked to.
pub(crate) fn stat(path: &Path, follow_symlinks: bool) -> io::Result<Metadata> {
    if follow_symlinks {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    }
}

// ---------------------------------------------------------------------------
// DirHandle
// ---------------------------------------------------------------------------

#[cfg(test)]
thread_local! {
    /// Handles opened and not yet dropped on this thread.
    pub(crate) static LIVE_HANDLES: Cell<usize> = const { Cell::new(0) };
}

/// One open directory stream plus the path it was opened from.
///
/// Handles are move-only; the stream is closed when the handle is dropped,
/// so popping a handle off the walk stack (or dropping the whole stack on an
/// early return) releases it exactly once.
#[derive(Debug)]
pub(crate) struct DirHandle {
    stream: ReadDir,
    path:   PathBuf,
    depth:  usize,
}

/// Outcome of reading one entry from a [`DirHandle`].
pub(crate) enum ReadOutcome {
    /// A fully stat'd entry.
    Entry(Entry),

    /// The stream is exhausted.
    End,

    /// The entry was listed but could not be stat'd. Enumeration may go on.
    Unreadable(FindError),

    /// The stream itself failed. Nothing more can be read from it.
    Broken(FindError),
}

impl DirHandle {
    /// Open the directory at `path`. Entries read from it are reported at
    /// `depth + 1`.
    pub(crate) fn open(path: &Path, depth: usize) -> io::Result<Self> {
        let stream = fs::read_dir(path)?;
        #[cfg(test)]
        LIVE_HANDLES.with(|n| n.set(n.get() + 1));
        Ok(Self {
            stream,
            path: path.to_path_buf(),
            depth,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next entry in OS order and stat it.
    ///
    /// Entries are resolved to `self.path/name`; when `self.path` is `/`
    /// the result is `/name`.
    pub(crate) fn read_next(&mut self, follow_symlinks: bool) -> ReadOutcome {
        let dent = match self.stream.next() {
            None         => return ReadOutcome::End,
            Some(Ok(d))  => d,
            Some(Err(e)) => {
                return ReadOutcome::Broken(FindError::EntryUnreadable {
                    path:   self.path.clone(),
                    source: e,
                })
            }
        };

        let name = dent.file_name();
        let path = self.path.join(&name);

        match stat(&path, follow_symlinks) {
            Ok(md) => ReadOutcome::Entry(Entry::new(path, name, self.depth + 1, md)),
            Err(e) => ReadOutcome::Unreadable(FindError::EntryUnreadable { path, source: e }),
        }
    }
}

#[cfg(test)]
impl Drop for DirHandle {
    fn drop(&mut self) {
        LIVE_HANDLES.with(|n| n.set(n.get() - 1));
    }
}
