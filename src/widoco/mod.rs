//! WIDOCO documentation generation
//!
//! The generator itself is an external Java tool. [`DocGenerator`] is the seam
//! between the build driver and the tool so the driver can be tested with a
//! stub; [`WidocoGenerator`] is the real `java -jar` invocation.

pub mod prereq;
pub mod process;

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::config::WidocoConfig;
use crate::error::{OntodocError, Result};

/// Page WIDOCO writes for the English documentation
pub const GENERATED_INDEX: &str = "index-en.html";

/// Name the generated page is renamed to
pub const INDEX_PAGE: &str = "index.html";

/// Generates documentation for a single ontology file
pub trait DocGenerator {
    /// Write documentation for `ontology_file` into `out_dir`
    fn generate(&self, ontology_file: &Path, out_dir: &Path) -> Result<()>;
}

/// Runs the WIDOCO jar through the Java runtime
#[derive(Debug, Clone)]
pub struct WidocoGenerator {
    java: String,
    jar: PathBuf,
    options: Vec<String>,
    timeout: Duration,
}

impl WidocoGenerator {
    pub fn new(config: &WidocoConfig) -> Self {
        Self {
            java: config.java.clone(),
            jar: config.jar.clone(),
            options: config.options.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Build the command line for one ontology file
    pub fn command(&self, ontology_file: &Path, out_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.java);
        cmd.arg("-jar")
            .arg(&self.jar)
            .arg("-ontFile")
            .arg(ontology_file)
            .arg("-outFolder")
            .arg(out_dir)
            .args(&self.options);
        cmd
    }
}

impl DocGenerator for WidocoGenerator {
    fn generate(&self, ontology_file: &Path, out_dir: &Path) -> Result<()> {
        let output = process::run_with_timeout(self.command(ontology_file, out_dir), self.timeout)?;

        if output.status.success() {
            return Ok(());
        }

        Err(OntodocError::ToolFailed {
            code: output
                .status
                .code()
                .map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Output directory for an ontology file.
///
/// Keeps the file's `<kind>/<name>/<version>` directory below `docs_dir`,
/// e.g. `ontology/modules/core/0.1/core.owl` -> `docs/dev/modules/core/0.1`.
pub fn output_dir_for(ontology_file: &Path, ontology_dir: &Path, docs_dir: &Path) -> Result<PathBuf> {
    let relative = ontology_file
        .strip_prefix(ontology_dir)
        .map_err(|_| OntodocError::MalformedSourcePath {
            path: ontology_file.display().to_string(),
        })?;

    Ok(match relative.parent() {
        Some(parent) => docs_dir.join(parent),
        None => docs_dir.to_path_buf(),
    })
}

/// Generate documentation for one file and normalize its index page name.
///
/// Returns the output directory on success.
pub fn generate_documentation(
    ontology_file: &Path,
    ontology_dir: &Path,
    docs_dir: &Path,
    generator: &dyn DocGenerator,
) -> Result<PathBuf> {
    let out_dir = output_dir_for(ontology_file, ontology_dir, docs_dir)?;
    std::fs::create_dir_all(&out_dir)?;

    tracing::debug!(
        "Generating documentation for {} into {}",
        ontology_file.display(),
        out_dir.display()
    );
    generator.generate(ontology_file, &out_dir)?;

    let generated = out_dir.join(GENERATED_INDEX);
    if generated.exists() {
        std::fs::rename(&generated, out_dir.join(INDEX_PAGE))?;
        tracing::debug!("Renamed {GENERATED_INDEX} to {INDEX_PAGE}");
    }

    Ok(out_dir)
}
