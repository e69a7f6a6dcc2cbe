//! `latest` folder materialization
//!
//! For every `<docs>/<category>/<module>/` the highest version directory is
//! copied to `<docs>/<category>/<module>/latest/`. Versions are ordered by
//! their dot-separated integer components, so `0.10` is newer than `0.9`.
//! The index page orders versions by plain string comparison instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::replace_dir;
use crate::error::{OntodocError, Result};

/// Name of the alias directory holding a copy of the newest version
pub const LATEST_DIR: &str = "latest";

/// Category directory under the docs root that is never treated as a category
const SKIPPED_CATEGORY: &str = "dev";

/// One materialized `latest` directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestCopy {
    pub category: String,
    pub module: String,
    pub version: String,
    pub destination: PathBuf,
}

/// Numeric sort key of a version directory name, e.g. `1.10.2` -> `[1, 10, 2]`
pub fn version_key(version: &str) -> Option<Vec<u64>> {
    version
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect()
}

/// Pick the highest version by numeric-tuple order.
///
/// Ties keep the later entry. Any version that is not a dot-separated list of
/// integers is an error.
pub fn select_latest<'a>(module: &str, versions: &'a [String]) -> Result<Option<&'a str>> {
    let mut keyed = Vec::with_capacity(versions.len());
    for version in versions {
        let key = version_key(version).ok_or_else(|| OntodocError::InvalidVersion {
            module: module.to_string(),
            version: version.clone(),
        })?;
        keyed.push((key, version.as_str()));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.last().map(|(_, version)| *version))
}

fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| OntodocError::IoError {
        message: format!("Failed to read {}: {}", dir.display(), e),
    })? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_version_dir_name(name: &str) -> bool {
    name != LATEST_DIR && name.starts_with(|c: char| c.is_ascii_digit())
}

/// Create or refresh the `latest` folder of every module under `docs_dir`.
///
/// A failed copy aborts the whole run; directories already refreshed are left
/// in place.
pub fn create_latest_folders(docs_dir: &Path) -> Result<Vec<LatestCopy>> {
    let mut copies = Vec::new();

    for category_dir in sorted_subdirs(docs_dir)? {
        let category = dir_name(&category_dir);
        if category == SKIPPED_CATEGORY {
            continue;
        }
        tracing::debug!("Processing category: {category}");

        for module_dir in sorted_subdirs(&category_dir)? {
            let module = dir_name(&module_dir);
            let versions: Vec<String> = sorted_subdirs(&module_dir)?
                .iter()
                .map(|p| dir_name(p))
                .filter(|name| is_version_dir_name(name))
                .collect();

            let label = format!("{category}/{module}");
            let Some(version) = select_latest(&label, &versions)? else {
                continue;
            };

            let destination = module_dir.join(LATEST_DIR);
            tracing::info!("Creating latest for {label} from {version}");
            replace_dir(&module_dir.join(version), &destination)?;

            copies.push(LatestCopy {
                category: category.clone(),
                module,
                version: version.to_string(),
                destination,
            });
        }
    }

    Ok(copies)
}
