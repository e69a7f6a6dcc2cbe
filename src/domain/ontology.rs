//! Ontology domain types
//!
//! Contains the source kinds found under the ontology directory and the
//! versioned sets the index is built from.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Top-level source directory under the ontology root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Modules,
    Demo,
}

impl SourceKind {
    /// Scan order used when building the index
    pub const ALL: [SourceKind; 2] = [SourceKind::Modules, SourceKind::Demo];

    /// Directory name under the ontology root
    pub fn dir_name(self) -> &'static str {
        match self {
            SourceKind::Modules => "modules",
            SourceKind::Demo => "demo",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// An indexable source file found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Ontology name (first path segment below the kind directory)
    pub name: String,

    /// Version (second path segment below the kind directory)
    pub version: String,

    /// Absolute path to the source file
    pub path: PathBuf,
}

/// A named ontology with all versions found on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OntologySet {
    pub name: String,

    /// Versions, descending by string comparison. Duplicates are kept.
    pub versions: Vec<String>,
}

impl OntologySet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
        }
    }

    /// Append a version and restore descending string order.
    ///
    /// This is plain string order, so "0.2" sorts above "0.10".
    pub fn add_version(&mut self, version: impl Into<String>) {
        self.versions.push(version.into());
        self.versions.sort_by(|a, b| b.cmp(a));
    }
}
