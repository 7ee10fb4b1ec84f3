use std::ffi::OsString;
use std::fs::{FileType, Metadata};
use std::path::PathBuf;

/// A single filesystem entry handed to the [`Visitor`](crate::traits::Visitor).
///
/// Snapshots are transient: the engine builds one per directory entry it
/// reads, passes it to the visitor by reference, and drops it before reading
/// the next one.
#[derive(Debug)]
pub struct Entry {
    /// Full real path to the entry.
    pub path: PathBuf,

    /// The bare name as returned by directory enumeration. For the walk
    /// root this is the final component of the cleaned root path (or the
    /// whole path when it has none, such as `/`).
    pub name: OsString,

    /// What kind of entry this is, derived from `metadata`.
    pub kind: EntryKind,

    /// How deep in the traversal this entry was found. Root = 0.
    pub depth: usize,

    /// Result of `lstat`, or `stat` when symlinks are followed.
    pub metadata: Metadata,
}

impl Entry {
    pub(crate) fn new(path: PathBuf, name: OsString, depth: usize, metadata: Metadata) -> Self {
        Self {
            path,
            name,
            kind: EntryKind::from(metadata.file_type()),
            depth,
            metadata,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a traversed entry.
///
/// With `follow_symlinks(true)` a link is reported as whatever it points at,
/// so `Symlink` only shows up when links are not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl From<FileType> for EntryKind {
    fn from(ft: FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}
