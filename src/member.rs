//! Translating real paths into archive member names.

use std::path::{Path, PathBuf};

/// The member name `real` should be reported under, or `None` when it
/// should be reported as itself.
///
/// When the walk root's real path and its logical name are identical no
/// rewriting happens. Otherwise exactly the `root_real` prefix of `real` is
/// replaced by `root_logical`: walking `/a/b` as `/x` turns `/a/b/c/d` into
/// `/x/c/d`. Both roots are expected to be cleaned, and `real` to have been
/// built by joining names onto `root_real`.
pub fn member_name(root_real: &Path, root_logical: &Path, real: &Path) -> Option<PathBuf> {
    if root_real.as_os_str() == root_logical.as_os_str() {
        return None;
    }

    let suffix = real.strip_prefix(root_real).ok()?;
    if suffix.as_os_str().is_empty() {
        return Some(root_logical.to_path_buf());
    }
    Some(root_logical.join(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(root: &str, logical: &str, real: &str) -> Option<PathBuf> {
        member_name(Path::new(root), Path::new(logical), Path::new(real))
    }

    #[test]
    fn replaces_root_prefix() {
        assert_eq!(name("/a/b", "/x", "/a/b/c/d"), Some(PathBuf::from("/x/c/d")));
        assert_eq!(name("/a/b", "archive", "/a/b/c"), Some(PathBuf::from("archive/c")));
        assert_eq!(name("src", "pkg/src", "src/lib.rs"), Some(PathBuf::from("pkg/src/lib.rs")));
    }

    #[test]
    fn identical_roots_are_not_rewritten() {
        assert_eq!(name("/a/b", "/a/b", "/a/b/c/d"), None);
    }

    #[test]
    fn root_itself_maps_to_logical_name() {
        assert_eq!(name("/a/b", "/x", "/a/b"), Some(PathBuf::from("/x")));
    }

    #[test]
    fn filesystem_root_on_either_side() {
        assert_eq!(name("/", "/x", "/etc"), Some(PathBuf::from("/x/etc")));
        assert_eq!(name("/a", "/", "/a/b"), Some(PathBuf::from("/b")));
    }

    #[test]
    fn only_strips_whole_components() {
        assert_eq!(name("/a/b", "/x", "/a/bc/d"), None);
    }
}
