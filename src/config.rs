//! Project configuration (ontodoc.yaml) data structures
//!
//! Every field is optional; a missing file or field falls back to the
//! layout used by the ontology repository (`ontology/`, `docs/`, `tools/`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OntodocError, Result};

/// Config file looked up in the project root when `--config` is not given
pub const CONFIG_FILE: &str = "ontodoc.yaml";

/// WIDOCO release the local build expects under `tools/`
pub const WIDOCO_VERSION: &str = "1.4.25";

/// Project configuration (ontodoc.yaml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding `modules/` and `demo/`
    pub ontology_dir: PathBuf,

    /// Output directory for the local documentation build
    pub docs_dir: PathBuf,

    /// Default output of `ontodoc index`
    pub index_output: PathBuf,

    /// Handlebars template for the index page
    pub template: PathBuf,

    pub widoco: WidocoConfig,

    pub categories: CategoryTables,
}

/// External documentation tool settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WidocoConfig {
    /// Path to the WIDOCO jar
    pub jar: PathBuf,

    /// Java executable used to run the jar
    pub java: String,

    /// Options appended after `-ontFile` and `-outFolder`
    pub options: Vec<String>,

    /// Per-file timeout in seconds
    pub timeout_secs: u64,
}

/// Static name-to-category membership tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryTables {
    pub core: Vec<String>,
    pub actor: Vec<String>,
    pub process: Vec<String>,
    pub resource: Vec<String>,
    pub observation: Vec<String>,
    pub supplementary: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            ontology_dir: PathBuf::from("ontology"),
            docs_dir: PathBuf::from("docs/dev"),
            index_output: PathBuf::from("docs/index.html"),
            template: PathBuf::from("index.hbs"),
            widoco: WidocoConfig::default(),
            categories: CategoryTables::default(),
        }
    }
}

impl Default for WidocoConfig {
    fn default() -> Self {
        Self {
            jar: PathBuf::from(format!("tools/widoco-{WIDOCO_VERSION}.jar")),
            java: "java".to_string(),
            options: names(&[
                "-rewriteAll",
                "-includeImportedOntologies",
                "-webVowl",
                "-licensius",
            ]),
            timeout_secs: 300,
        }
    }
}

impl Default for CategoryTables {
    fn default() -> Self {
        Self {
            core: names(&[
                "actorODP",
                "observation",
                "processODP",
                "product",
                "resourceODP",
                "location",
            ]),
            actor: names(&["actorODP"]),
            process: names(&["processODP"]),
            resource: names(&["resourceODP", "product"]),
            observation: names(&["observation"]),
            supplementary: names(&["location"]),
        }
    }
}

impl ProjectConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for a project root.
    ///
    /// An explicit path must exist and is used as given. Without one,
    /// `<root>/ontodoc.yaml` is read when present and defaults are used
    /// otherwise. Relative paths in the result are resolved against `root`.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(root.join(CONFIG_FILE)).filter(|p| p.is_file()),
        };

        let config = match path {
            Some(path) => {
                let yaml = std::fs::read_to_string(&path).map_err(|e| {
                    OntodocError::ConfigReadFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;
                tracing::debug!("Loaded configuration from {}", path.display());
                Self::from_yaml(&yaml).map_err(|e| match e {
                    OntodocError::ConfigParseFailed { reason, .. } => {
                        OntodocError::ConfigParseFailed {
                            path: path.display().to_string(),
                            reason,
                        }
                    }
                    other => other,
                })?
            }
            None => Self::default(),
        };

        Ok(config.resolved(root))
    }

    /// Resolve every relative path against `root`
    pub fn resolved(mut self, root: &Path) -> Self {
        self.ontology_dir = root.join(&self.ontology_dir);
        self.docs_dir = root.join(&self.docs_dir);
        self.index_output = root.join(&self.index_output);
        self.template = root.join(&self.template);
        self.widoco.jar = root.join(&self.widoco.jar);
        self
    }
}
