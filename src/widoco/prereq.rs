//! Prerequisite checks for the local documentation build

use std::path::Path;
use std::process::Command;

use crate::error::{OntodocError, Result};

/// Check that the Java runtime can be started.
///
/// Returns the first line of `java -version`, which Java prints to stderr.
pub fn check_java(java: &str) -> Result<String> {
    let output = Command::new(java)
        .arg("-version")
        .output()
        .map_err(|_| OntodocError::JavaNotFound {
            java: java.to_string(),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_line = stderr
        .lines()
        .chain(stdout.lines())
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    Ok(first_line)
}

/// Check that the WIDOCO jar exists
pub fn check_jar(jar: &Path) -> Result<()> {
    if jar.exists() {
        Ok(())
    } else {
        Err(OntodocError::WidocoJarNotFound {
            path: jar.display().to_string(),
        })
    }
}
