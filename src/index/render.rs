//! Index page rendering
//!
//! Templates are Handlebars sources rendered in strict mode against
//! `{"data": IndexData}`; referencing a field the context does not have is an
//! error rather than an empty string.

use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use super::{IndexData, build_index_data};
use crate::config::ProjectConfig;
use crate::error::{OntodocError, Result};

/// Template used when the configured template file does not exist
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/index.hbs");

const TEMPLATE_NAME: &str = "index";

/// Render `template` with the index data
pub fn render_index(template: &str, data: &IndexData) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string(TEMPLATE_NAME, template)?;

    let html = handlebars.render(TEMPLATE_NAME, &json!({ "data": data }))?;
    Ok(html)
}

/// Read the template source, falling back to the bundled template
pub fn load_template(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::warn!(
            "Template {} not found, using the bundled index template",
            path.display()
        );
        return Ok(DEFAULT_TEMPLATE.to_string());
    }

    std::fs::read_to_string(path).map_err(|e| OntodocError::TemplateRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write rendered output, creating parent directories as needed
pub fn write_index(path: &Path, html: &str) -> Result<()> {
    let write_failed = |e: std::io::Error| OntodocError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, html).map_err(write_failed)
}

/// Scan the ontology directory, render the index and write it to `output`
pub fn create_index_file(config: &ProjectConfig, output: &Path) -> Result<IndexData> {
    let data = build_index_data(&config.ontology_dir, &config.categories)?;
    let template = load_template(&config.template)?;
    let html = render_index(&template, &data)?;
    write_index(output, &html)?;

    tracing::info!(
        "Index file generated: {} ({} ontologies)",
        output.display(),
        data.total_sets()
    );
    Ok(data)
}
