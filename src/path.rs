//! Lexical path cleanup.

use std::path::{Component, Path, PathBuf};

/// Normalize `path` without touching the filesystem.
///
/// Repeated separators, trailing separators and `.` segments are dropped,
/// and `..` removes the preceding normal segment. A `..` directly under the
/// root is discarded; leading `..` segments of a relative path are kept.
/// The result is never empty: a path that cleans away entirely becomes `.`
/// (or `/` when rooted). Cleaning is idempotent.
pub fn clean(path: impl AsRef<Path>) -> PathBuf {
    let mut prefix: Option<Component> = None;
    let mut rooted = false;
    let mut parts: Vec<Component> = Vec::new();

    for comp in path.as_ref().components() {
        match comp {
            Component::Prefix(_) => prefix = Some(comp),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(comp),
            },
            Component::Normal(_) => parts.push(comp),
        }
    }

    let mut out = PathBuf::new();
    if let Some(p) = prefix {
        out.push(p.as_os_str());
    }
    if rooted {
        out.push(Component::RootDir.as_os_str());
    }
    for part in parts {
        out.push(part.as_os_str());
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
