//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{OntodocError, Result};

/// Copy a directory recursively
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> std::io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Replace `dst` with a recursive copy of `src`.
///
/// An existing `dst` is removed first so stale files do not survive.
pub fn replace_dir(src: &Path, dst: &Path) -> Result<()> {
    let copy_failed = |e: std::io::Error| OntodocError::CopyFailed {
        from: src.display().to_string(),
        to: dst.display().to_string(),
        reason: e.to_string(),
    };

    if dst.exists() {
        fs::remove_dir_all(dst).map_err(copy_failed)?;
    }
    copy_dir_recursive(src, dst).map_err(copy_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_dir_recursive_nested() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("webvowl/data")).unwrap();
        fs::write(src.join("index.html"), "root").unwrap();
        fs::write(src.join("webvowl/data/ontology.json"), "{}").unwrap();

        let dst = temp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.html")).unwrap(), "root");
        assert!(dst.join("webvowl/data/ontology.json").is_file());
    }

    #[test]
    fn test_replace_dir_removes_stale_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("1.0");
        let dst = temp.path().join("latest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("index.html"), "new").unwrap();
        fs::write(dst.join("stale.html"), "old").unwrap();

        replace_dir(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.html")).unwrap(), "new");
        assert!(!dst.join("stale.html").exists());
    }

    #[test]
    fn test_replace_dir_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = replace_dir(&temp.path().join("missing"), &temp.path().join("latest"));
        assert!(matches!(result, Err(OntodocError::CopyFailed { .. })));
    }
}
