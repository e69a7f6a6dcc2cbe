//! CLI integration tests using the REAL ontodoc binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    let workspace = common::TestWorkspace::new();
    common::ontodoc_cmd_for_workspace(&workspace.path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("latest"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_output() {
    let workspace = common::TestWorkspace::new();
    common::ontodoc_cmd_for_workspace(&workspace.path)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ontodoc"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("1.4.25"));
}

#[test]
fn test_completions_bash() {
    let workspace = common::TestWorkspace::new();
    common::ontodoc_cmd_for_workspace(&workspace.path)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ontodoc"));
}

#[test]
fn test_completions_unknown_shell() {
    let workspace = common::TestWorkspace::new();
    common::ontodoc_cmd_for_workspace(&workspace.path)
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'tcsh'"));
}

#[test]
fn test_unknown_subcommand() {
    let workspace = common::TestWorkspace::new();
    common::ontodoc_cmd_for_workspace(&workspace.path)
        .arg("publish")
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_is_reported() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("ontodoc.yaml", "categories: [unclosed");

    common::ontodoc_cmd_for_workspace(&workspace.path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_root_option_from_environment() {
    let workspace = common::TestWorkspace::new();
    workspace.add_ontology("modules", "widgetX", "0.1", "widgetX.ttl");
    let elsewhere = common::TestWorkspace::new();

    common::ontodoc_cmd_for_workspace(&elsewhere.path)
        .env("ONTODOC_ROOT", &workspace.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("widgetX"));
}

#[test]
fn test_config_option_is_relative_to_working_directory() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("project/src/onto/modules/widgetX/0.1/widgetX.ttl", "");
    workspace.write_file("alt.yaml", "ontology_dir: src/onto\n");

    common::ontodoc_cmd_for_workspace(&workspace.path)
        .args(["--root", "project", "--config", "alt.yaml", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("widgetX"));
}
