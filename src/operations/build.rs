//! Local documentation build operation
//!
//! Coordinates, strictly one file at a time:
//! - documentation generation for every ontology file
//! - `latest` folder materialization once anything succeeded
//! - the landing page at `<docs>/index.html`
//!
//! A failing file is recorded and the loop moves on. A failing `latest` copy
//! aborts the build. A failing index page is recorded but not fatal.

use std::path::{Path, PathBuf};

use console::Style;

use crate::config::ProjectConfig;
use crate::error::{OntodocError, Result};
use crate::index;
use crate::latest::{self, LatestCopy};
use crate::path_utils::display_relative;
use crate::progress::BuildProgress;
use crate::scanner;
use crate::widoco::{self, DocGenerator, INDEX_PAGE};

/// A file whose documentation could not be generated
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file: PathBuf,
    pub reason: String,
}

/// What happened to the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// No file succeeded, so nothing was indexed
    Skipped,
    Written(PathBuf),
    Failed(String),
}

/// Result of a build run
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<FileFailure>,
    pub latest: Vec<LatestCopy>,
    pub index: IndexOutcome,
}

impl BuildReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Turn recorded per-file failures into the run's error
    pub fn into_result(self) -> Result<Self> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(OntodocError::DocumentationFailed {
                failed: self.failed(),
                total: self.total,
            })
        }
    }
}

/// High-level build operation
pub struct BuildOperation<'a> {
    config: &'a ProjectConfig,
    generator: &'a dyn DocGenerator,
    root: &'a Path,
}

impl<'a> BuildOperation<'a> {
    pub fn new(config: &'a ProjectConfig, generator: &'a dyn DocGenerator, root: &'a Path) -> Self {
        Self {
            config,
            generator,
            root,
        }
    }

    /// Find the files to document; an empty result is an error
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let files = scanner::find_ontology_files(&self.config.ontology_dir)?;
        if files.is_empty() {
            return Err(OntodocError::NoOntologyFiles {
                path: self.config.ontology_dir.display().to_string(),
            });
        }
        Ok(files)
    }

    /// Execute the build over `files`
    pub fn execute(&self, files: &[PathBuf], progress: &BuildProgress) -> Result<BuildReport> {
        let mut report = BuildReport {
            total: files.len(),
            succeeded: 0,
            failures: Vec::new(),
            latest: Vec::new(),
            index: IndexOutcome::Skipped,
        };

        for file in files {
            match self.process_file(file, progress) {
                Ok(()) => report.succeeded += 1,
                Err(e) => report.failures.push(FileFailure {
                    file: file.clone(),
                    reason: e.to_string(),
                }),
            }
            progress.inc_file();
        }
        progress.finish();

        if report.succeeded > 0 {
            report.latest = latest::create_latest_folders(&self.config.docs_dir)?;
            report.index = self.write_index();
        }

        Ok(report)
    }

    fn process_file(&self, file: &Path, progress: &BuildProgress) -> Result<()> {
        let shown = display_relative(file, self.root);
        progress.update_file(&shown);
        progress.println(format!("\nProcessing: {shown}"));

        match widoco::generate_documentation(
            file,
            &self.config.ontology_dir,
            &self.config.docs_dir,
            self.generator,
        ) {
            Ok(out_dir) => {
                progress.println(format!(
                    "  {} Documentation generated in {}",
                    Style::new().green().apply_to("✓"),
                    display_relative(&out_dir, self.root)
                ));
                Ok(())
            }
            Err(e) => {
                progress.println(format!("  {} {}", Style::new().red().apply_to("✗"), e));
                if let OntodocError::ToolFailed { stderr, .. } = &e {
                    if !stderr.is_empty() {
                        progress.println(format!("  Error output: {stderr}"));
                    }
                }
                tracing::warn!("Documentation generation failed for {}: {}", shown, e);
                Err(e)
            }
        }
    }

    fn write_index(&self) -> IndexOutcome {
        let output = self.config.docs_dir.join(INDEX_PAGE);
        match index::create_index_file(self.config, &output) {
            Ok(_) => IndexOutcome::Written(output),
            Err(e) => {
                tracing::warn!("Index file generation failed: {e}");
                IndexOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widoco::GENERATED_INDEX;
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Writes an English index page, failing for file names containing "broken"
    #[derive(Default)]
    struct StubGenerator {
        calls: Cell<usize>,
    }

    impl DocGenerator for StubGenerator {
        fn generate(&self, ontology_file: &Path, out_dir: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if ontology_file.to_string_lossy().contains("broken") {
                return Err(OntodocError::ToolFailed {
                    code: "1".to_string(),
                    stderr: "parse error".to_string(),
                });
            }
            std::fs::write(out_dir.join(GENERATED_INDEX), ontology_file.to_string_lossy().as_bytes())?;
            Ok(())
        }
    }

    fn project(files: &[&str]) -> (TempDir, ProjectConfig) {
        let temp = TempDir::new().unwrap();
        for rel in files {
            let path = temp.path().join("ontology").join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "").unwrap();
        }
        let config = ProjectConfig::default().resolved(temp.path());
        (temp, config)
    }

    #[test]
    fn test_discover_empty_is_error() {
        let (temp, config) = project(&[]);
        std::fs::create_dir_all(temp.path().join("ontology/modules")).unwrap();
        let stub = StubGenerator::default();
        let op = BuildOperation::new(&config, &stub, temp.path());
        assert!(matches!(op.discover(), Err(OntodocError::NoOntologyFiles { .. })));
    }

    #[test]
    fn test_execute_generates_latest_and_index() {
        let (temp, config) = project(&[
            "modules/actorODP/0.9/actorODP.ttl",
            "modules/actorODP/0.10/actorODP.ttl",
            "demo/example/0.1/example.owl",
        ]);
        let stub = StubGenerator::default();
        let op = BuildOperation::new(&config, &stub, temp.path());

        let files = op.discover().unwrap();
        let report = op.execute(&files, &BuildProgress::hidden()).unwrap();

        assert_eq!(stub.calls.get(), 3);
        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.latest.len(), 2);

        let latest_page = config.docs_dir.join("modules/actorODP/latest/index.html");
        assert!(std::fs::read_to_string(latest_page).unwrap().contains("0.10"));
        assert_eq!(
            report.index,
            IndexOutcome::Written(config.docs_dir.join("index.html"))
        );
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_execute_continues_after_failure() {
        let (temp, config) = project(&[
            "modules/broken/0.1/broken.ttl",
            "modules/widgetX/0.1/widgetX.ttl",
        ]);
        let stub = StubGenerator::default();
        let op = BuildOperation::new(&config, &stub, temp.path());

        let files = op.discover().unwrap();
        let report = op.execute(&files, &BuildProgress::hidden()).unwrap();

        assert_eq!(stub.calls.get(), 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed(), 1);
        assert!(report.failures[0].file.ends_with("broken.ttl"));
        assert!(config.docs_dir.join("modules/widgetX/latest/index.html").is_file());
        assert!(matches!(
            report.into_result(),
            Err(OntodocError::DocumentationFailed { failed: 1, total: 2 })
        ));
    }

    #[test]
    fn test_execute_all_failed_skips_latest_and_index() {
        let (temp, config) = project(&["modules/broken/0.1/broken.ttl"]);
        let stub = StubGenerator::default();
        let op = BuildOperation::new(&config, &stub, temp.path());

        let files = op.discover().unwrap();
        let report = op.execute(&files, &BuildProgress::hidden()).unwrap();

        assert_eq!(report.index, IndexOutcome::Skipped);
        assert!(report.latest.is_empty());
        assert!(!config.docs_dir.join("index.html").exists());
    }

    #[test]
    fn test_index_failure_is_not_fatal() {
        let (temp, config) = project(&["modules/widgetX/0.1/widgetX.ttl"]);
        std::fs::write(temp.path().join("index.hbs"), "{{data.missing_bucket}}").unwrap();
        let stub = StubGenerator::default();
        let op = BuildOperation::new(&config, &stub, temp.path());

        let files = op.discover().unwrap();
        let report = op.execute(&files, &BuildProgress::hidden()).unwrap();

        assert!(matches!(report.index, IndexOutcome::Failed(_)));
        assert_eq!(report.succeeded, 1);
        assert!(report.into_result().is_ok());
    }
}
