//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{OntodocError, Result};
use crate::path_utils;

/// Project root and its resolved configuration
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: ProjectConfig,
}

impl Project {
    /// Resolve the root (current directory when not given) and load its config
    pub fn load(root: Option<PathBuf>, config: Option<&Path>) -> Result<Self> {
        let root = path_utils::resolve_root(root).map_err(|e| OntodocError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?;
        let config = ProjectConfig::load(&root, config)?;
        tracing::debug!("Project root: {}", root.display());
        Ok(Self { root, config })
    }

    /// Path for display, relative to the project root when possible
    pub fn display(&self, path: &Path) -> String {
        path_utils::display_relative(path, &self.root)
    }
}
