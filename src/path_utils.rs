//! Cross-platform path utilities for ontodoc
//!
//! Paths are matched and printed with forward slashes so that glob patterns
//! and user-facing output look the same on every platform.

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes.
///
/// Only Windows separators are rewritten; on unix a backslash is an ordinary
/// file name character.
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("C:\\Users\\file.txt"));
/// assert_eq!(forward, "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    let text = path.to_string_lossy();
    if cfg!(windows) {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

/// Display `path` relative to `base` when it lies below it
pub fn display_relative(path: &Path, base: &Path) -> String {
    to_forward_slashes(path.strip_prefix(base).unwrap_or(path))
}

/// Resolve the project root.
///
/// Uses `dunce` so Windows roots don't get the `\\?\` prefix. A root that
/// cannot be canonicalized (e.g. it does not exist yet) is returned as given.
pub fn resolve_root(root: Option<PathBuf>) -> std::io::Result<PathBuf> {
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    Ok(dunce::canonicalize(&root).unwrap_or(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_forward_slashes_unix() {
        let path = Path::new("/usr/local/bin");
        assert_eq!(to_forward_slashes(path), "/usr/local/bin");
    }

    #[cfg(windows)]
    #[test]
    fn test_to_forward_slashes_windows() {
        let path = Path::new("C:\\Users\\file.txt");
        assert_eq!(to_forward_slashes(path), "C:/Users/file.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_to_forward_slashes_keeps_backslash_in_names() {
        let path = Path::new("modules/my\\onto/0.1/x.ttl");
        assert_eq!(to_forward_slashes(path), "modules/my\\onto/0.1/x.ttl");
    }

    #[test]
    fn test_to_forward_slashes_empty() {
        assert_eq!(to_forward_slashes(Path::new("")), "");
    }

    #[test]
    fn test_display_relative() {
        let base = Path::new("/project");
        assert_eq!(
            display_relative(Path::new("/project/docs/dev/index.html"), base),
            "docs/dev/index.html"
        );
        assert_eq!(
            display_relative(Path::new("/elsewhere/index.html"), base),
            "/elsewhere/index.html"
        );
    }

    #[test]
    fn test_resolve_root_missing_dir_is_kept() {
        let missing = PathBuf::from("/definitely/not/here");
        assert_eq!(resolve_root(Some(missing.clone())).unwrap(), missing);
    }
}
