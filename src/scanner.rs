//! Ontology source discovery
//!
//! Two scans live here:
//! - [`scan_kind`] finds indexable `.ttl` files exactly at
//!   `<kind>/<name>/<version>/<file>` and extracts name and version
//! - [`find_ontology_files`] finds every documentable file (`.owl`, `.ttl`,
//!   `.rdf`) at any depth below `modules/` and `demo/`

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::{SourceEntry, SourceKind};
use crate::error::{OntodocError, Result};
use crate::path_utils;

/// Positional shape of an indexable source below its kind directory
const SOURCE_SHAPE: &str = "*/*/*";

/// Suffix of files that are counted for the index page
pub const INDEX_SUFFIX: &str = ".ttl";

/// Extensions handed to the documentation generator
pub const DOC_EXTENSIONS: &[&str] = &["owl", "ttl", "rdf"];

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// `file_type` describes the link target since the walkers follow links
fn is_indexable(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(INDEX_SUFFIX))
}

/// Extract `(name, version)` from a path relative to a kind directory.
///
/// The path must have the shape `<name>/<version>/<file>`; anything else is a
/// [`OntodocError::MalformedSourcePath`].
pub fn parse_source_path(relative: &str) -> Result<(String, String)> {
    let malformed = || OntodocError::MalformedSourcePath {
        path: relative.to_string(),
    };

    let glob = Glob::new(SOURCE_SHAPE).map_err(|_| malformed())?;
    let candidate = CandidatePath::from(relative);
    let matched = glob.matched(&candidate).ok_or_else(malformed)?;

    match (matched.get(1), matched.get(2)) {
        (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
            Ok((name.to_string(), version.to_string()))
        }
        _ => Err(malformed()),
    }
}

/// Scan `ontology_dir/<kind>` for indexable sources.
///
/// A missing kind directory yields no entries. Entries are returned in
/// file-name order so repeated runs see the same insertion order.
pub fn scan_kind(ontology_dir: &Path, kind: SourceKind) -> Result<Vec<SourceEntry>> {
    let kind_dir = ontology_dir.join(kind.dir_name());
    if !kind_dir.is_dir() {
        tracing::debug!("No {} directory at {}", kind, kind_dir.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    // Hidden names are pruned at every level, so the walk starts at the
    // kind directory and only depth-3 entries are considered.
    let walker = WalkDir::new(&kind_dir)
        .max_depth(3)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.depth() != 3 || !is_indexable(&entry) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&kind_dir)
            .unwrap_or(entry.path());
        let relative = path_utils::to_forward_slashes(relative);
        let (name, version) = parse_source_path(&relative)?;

        entries.push(SourceEntry {
            name,
            version,
            path: entry.path().to_path_buf(),
        });
    }

    Ok(entries)
}

fn is_documentable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext))
}

/// Find every ontology file the documentation generator should process.
///
/// Searches `modules/` and `demo/` recursively and returns the files sorted
/// by path.
pub fn find_ontology_files(ontology_dir: &Path) -> Result<Vec<PathBuf>> {
    if !ontology_dir.exists() {
        return Err(OntodocError::OntologyDirNotFound {
            path: ontology_dir.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for kind in SourceKind::ALL {
        let kind_dir = ontology_dir.join(kind.dir_name());
        if !kind_dir.exists() {
            continue;
        }

        for entry in WalkDir::new(&kind_dir).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && is_documentable(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    Ok(files)
}
