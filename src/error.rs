//! Error types and handling for ontodoc
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ontodoc operations
#[derive(Error, Diagnostic, Debug)]
pub enum OntodocError {
    // Prerequisite errors
    #[error("Java is not installed or not in PATH: {java}")]
    #[diagnostic(
        code(ontodoc::prereq::java_not_found),
        help("Install Java 17 or higher, or set `widoco.java` in ontodoc.yaml")
    )]
    JavaNotFound { java: String },

    #[error("WIDOCO jar not found: {path}")]
    #[diagnostic(
        code(ontodoc::prereq::widoco_not_found),
        help("Place the WIDOCO jar at this path, or set `widoco.jar` in ontodoc.yaml")
    )]
    WidocoJarNotFound { path: String },

    // Source discovery errors
    #[error("Ontology directory not found: {path}")]
    #[diagnostic(code(ontodoc::source::dir_not_found))]
    OntologyDirNotFound { path: String },

    #[error("No ontology files found in '{path}'")]
    #[diagnostic(
        code(ontodoc::source::no_files),
        help(
            "Add .owl, .ttl or .rdf files as <ontology>/modules/<name>/<version>/<file> \
             or <ontology>/demo/<name>/<version>/<file>"
        )
    )]
    NoOntologyFiles { path: String },

    #[error("Source path does not match <name>/<version>/<file>: {path}")]
    #[diagnostic(code(ontodoc::source::malformed_path))]
    MalformedSourcePath { path: String },

    #[error("Invalid version directory '{version}' in {module}")]
    #[diagnostic(
        code(ontodoc::latest::invalid_version),
        help("Version directories must be dot-separated integers, e.g. 0.1 or 1.0.2")
    )]
    InvalidVersion { module: String, version: String },

    // Template errors
    #[error("Failed to read template: {path}")]
    #[diagnostic(code(ontodoc::template::read_failed))]
    TemplateRead { path: String, reason: String },

    #[error("Failed to render index template: {reason}")]
    #[diagnostic(
        code(ontodoc::template::render_failed),
        help("Templates are rendered in strict mode; check for references to undefined fields")
    )]
    TemplateRender { reason: String },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(ontodoc::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(ontodoc::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(ontodoc::fs::io_error))]
    IoError { message: String },

    // External tool errors
    #[error("WIDOCO failed with return code {code}")]
    #[diagnostic(code(ontodoc::tool::failed))]
    ToolFailed { code: String, stderr: String },

    #[error("WIDOCO timed out after {secs} seconds")]
    #[diagnostic(code(ontodoc::tool::timed_out))]
    ToolTimedOut { secs: f64 },

    #[error("Documentation generation failed for {failed} of {total} file(s)")]
    #[diagnostic(
        code(ontodoc::build::failed),
        help("Check the output above for the failing ontology files")
    )]
    DocumentationFailed { failed: usize, total: usize },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(ontodoc::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(ontodoc::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

impl From<std::io::Error> for OntodocError {
    fn from(err: std::io::Error) -> Self {
        OntodocError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for OntodocError {
    fn from(err: serde_yaml::Error) -> Self {
        OntodocError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for OntodocError {
    fn from(err: serde_json::Error) -> Self {
        OntodocError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<handlebars::RenderError> for OntodocError {
    fn from(err: handlebars::RenderError) -> Self {
        OntodocError::TemplateRender {
            reason: err.to_string(),
        }
    }
}

impl From<handlebars::TemplateError> for OntodocError {
    fn from(err: handlebars::TemplateError) -> Self {
        OntodocError::TemplateRender {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, OntodocError>;
