use std::path::{Path, PathBuf};
use thiserror::Error;

/// How far an error reaches.
///
/// `Warn` skips the entry (or subtree) it was raised for and lets the walk
/// carry on. `Fatal` unwinds the whole walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Fatal,
}

#[derive(Error, Debug)]
pub enum FindError {
    // Root
    #[error("unable to access root {}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("root {} rejected by visitor", path.display())]
    RootVisitRejected {
        path: PathBuf,
        #[source]
        source: Box<FindError>,
    },

    // Descent
    #[error("unable to open directory {}", path.display())]
    DirectoryOpenDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to open directory {}", path.display())]
    DirectoryOpenOther {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read entry {}", path.display())]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Visitor
    #[error("{message}: {}", path.display())]
    Visitor {
        path: PathBuf,
        severity: Severity,
        message: String,
    },

    // Runtime
    #[error("unable to grow directory stack at {}", path.display())]
    ResourceExhaustion { path: PathBuf },
}

impl FindError {
    /// A visitor rejection that skips only the entry it was raised for.
    pub fn warning(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Visitor {
            path: path.into(),
            severity: Severity::Warn,
            message: message.into(),
        }
    }

    /// A visitor rejection that aborts the walk.
    pub fn fatal(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Visitor {
            path: path.into(),
            severity: Severity::Fatal,
            message: message.into(),
        }
    }

    /// The path this error occurred at.
    pub fn path(&self) -> &Path {
        match self {
            Self::RootInaccessible { path, .. }
            | Self::RootVisitRejected { path, .. }
            | Self::DirectoryOpenDenied { path, .. }
            | Self::DirectoryOpenOther { path, .. }
            | Self::EntryUnreadable { path, .. }
            | Self::Visitor { path, .. }
            | Self::ResourceExhaustion { path } => path,
        }
    }

    /// Permission problems on a subdirectory and unreadable entries only
    /// ever cost the walk that one entry. Visitor errors carry their own
    /// severity. Everything else is fatal.
    pub fn severity(&self) -> Severity {
        match self {
            Self::DirectoryOpenDenied { .. } | Self::EntryUnreadable { .. } => Severity::Warn,
            Self::Visitor { severity, .. } => *severity,
            _ => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Whether the walk can continue after this error.
    ///
    /// Recoverable errors are logged and, with `.collect_warnings(true)`,
    /// surfaced in [`Results::warnings`](crate::Results::warnings) after the
    /// walk completes.
    pub fn is_recoverable(&self) -> bool {
        !self.is_fatal()
    }

    /// The OS error behind this failure, if there was one.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::RootInaccessible { source, .. }
            | Self::DirectoryOpenDenied { source, .. }
            | Self::DirectoryOpenOther { source, .. }
            | Self::EntryUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
