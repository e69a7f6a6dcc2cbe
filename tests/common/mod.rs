//! Common test utilities for ontodoc integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Add `ontology/<kind>/<name>/<version>/<file>`
    pub fn add_ontology(&self, kind: &str, name: &str, version: &str, file: &str) {
        self.write_file(
            &format!("ontology/{kind}/{name}/{version}/{file}"),
            "@prefix : <http://example.org/> .\n",
        );
    }

    /// Create an executable stub for `java` that imitates WIDOCO.
    ///
    /// `-version` succeeds. Otherwise it writes `index-en.html` into the
    /// `-outFolder`, fails for input files containing "broken" and hangs for
    /// input files containing "slow".
    #[cfg(unix)]
    pub fn install_stub_java(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = r#"#!/bin/sh
if [ "$1" = "-version" ]; then
  echo 'openjdk version "17.0.2" 2022-01-18' >&2
  exit 0
fi
out=""
ont=""
while [ $# -gt 0 ]; do
  case "$1" in
    -outFolder) out="$2"; shift ;;
    -ontFile) ont="$2"; shift ;;
  esac
  shift
done
case "$ont" in
  *broken*) echo "Could not parse $ont" >&2; exit 2 ;;
  *slow*) exec sleep 30 ;;
esac
mkdir -p "$out"
echo "<html>$ont</html>" > "$out/index-en.html"
"#;
        let java = self.path.join("bin/java");
        std::fs::create_dir_all(java.parent().expect("stub has a parent"))
            .expect("Failed to create bin directory");
        std::fs::write(&java, script).expect("Failed to write java stub");
        std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make java stub executable");
        java
    }

    /// Configure the project for a local build with the given java binary
    pub fn configure_widoco(&self, java: &Path) {
        self.write_file("tools/widoco.jar", "");
        self.write_file(
            "ontodoc.yaml",
            &format!(
                "widoco:\n  jar: tools/widoco.jar\n  java: {}\n",
                java.display()
            ),
        );
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The real ontodoc binary, run from `root` with a clean environment
pub fn ontodoc_cmd_for_workspace(root: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ontodoc").expect("ontodoc binary is built");
    cmd.current_dir(root)
        .env_remove("ONTODOC_ROOT")
        .env_remove("ONTODOC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
