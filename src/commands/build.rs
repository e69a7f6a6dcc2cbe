//! Build command implementation
//!
//! Local stand-in for the CI documentation workflow: checks prerequisites,
//! runs WIDOCO per ontology file, refreshes `latest` folders, renders the
//! index page and prints a summary.

use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;

use crate::cli::BuildArgs;
use crate::commands::helpers::Project;
use crate::error::{OntodocError, Result};
use crate::latest::LATEST_DIR;
use crate::operations::{BuildOperation, BuildReport, IndexOutcome};
use crate::progress::BuildProgress;
use crate::widoco::{INDEX_PAGE, WidocoGenerator, prereq};

fn heading(text: &str) {
    println!("\n{}", Style::new().bold().apply_to(text));
    println!("{}", "-".repeat(60));
}

/// Run build command
pub fn run(project: &Project, args: BuildArgs) -> Result<()> {
    let mut config = project.config.clone();
    if let Some(jar) = args.jar {
        config.widoco.jar = jar;
    }
    if let Some(timeout) = args.timeout {
        config.widoco.timeout_secs = timeout;
    }

    println!("{}", "=".repeat(60));
    println!("Local WIDOCO Documentation Generator");
    println!("{}", "=".repeat(60));

    heading("1. Checking prerequisites...");
    let java_version = prereq::check_java(&config.widoco.java)?;
    println!("{} Java is installed", Style::new().green().apply_to("✓"));
    println!("  {java_version}");

    heading("2. Checking WIDOCO jar...");
    prereq::check_jar(&config.widoco.jar)?;
    println!(
        "{} WIDOCO jar found: {}",
        Style::new().green().apply_to("✓"),
        project.display(&config.widoco.jar)
    );

    let generator = WidocoGenerator::new(&config.widoco);
    let operation = BuildOperation::new(&config, &generator, &project.root);

    heading(&format!(
        "3. Finding ontology files in '{}/'...",
        project.display(&config.ontology_dir)
    ));
    let files = match operation.discover() {
        Ok(files) => files,
        Err(e) => {
            if matches!(e, OntodocError::NoOntologyFiles { .. }) {
                print_expected_layout(project, &config.ontology_dir);
            }
            return Err(e);
        }
    };
    println!(
        "{} Found {} ontology file(s):",
        Style::new().green().apply_to("✓"),
        files.len()
    );
    for file in &files {
        println!("  - {}", project.display(file));
    }

    heading("4. Generating documentation...");
    let progress = BuildProgress::new(files.len() as u64);
    let report = match operation.execute(&files, &progress) {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    print_summary(project, &config.docs_dir, &report);
    report.into_result()?;

    println!(
        "\n{} All documentation generated successfully!",
        Style::new().green().apply_to("✓")
    );
    Ok(())
}

fn print_expected_layout(project: &Project, ontology_dir: &Path) {
    let dir = project.display(ontology_dir);
    println!(
        "{} No ontology files found in '{dir}/'",
        Style::new().red().apply_to("✗")
    );
    println!("\nExpected structure:");
    println!("  {dir}/");
    println!("  ├── modules/");
    println!("  │   └── module-name/");
    println!("  │       └── version/");
    println!("  │           └── module-name.owl (or .ttl, .rdf)");
    println!("  └── demo/");
    println!("      └── demo-name/");
    println!("          └── version/");
    println!("              └── demo-name.owl (or .ttl, .rdf)");
}

fn print_summary(project: &Project, docs_dir: &Path, report: &BuildReport) {
    if !report.latest.is_empty() {
        heading("5. Created 'latest' folders");
        for copy in &report.latest {
            println!(
                "  {}/{} -> {} ({})",
                copy.category,
                copy.module,
                LATEST_DIR,
                copy.version
            );
        }
    }

    match &report.index {
        IndexOutcome::Written(path) => {
            heading("6. Generated index file");
            println!(
                "{} Index file generated: {}",
                Style::new().green().apply_to("✓"),
                project.display(path)
            );
        }
        IndexOutcome::Failed(reason) => {
            heading("6. Generating index file...");
            println!(
                "{} Failed to generate index file: {reason}",
                Style::new().red().apply_to("✗")
            );
            println!("⚠️  Index file generation failed");
        }
        IndexOutcome::Skipped => {}
    }

    println!("\n{}", "=".repeat(60));
    println!("Summary");
    println!("{}", "=".repeat(60));
    println!("Total files processed: {}", report.total);
    println!(
        "{} Successful: {}",
        Style::new().green().apply_to("✓"),
        report.succeeded
    );
    println!("{} Failed: {}", Style::new().red().apply_to("✗"), report.failed());

    if report.succeeded > 0 {
        let docs = project.display(docs_dir);
        println!("\nDocumentation generated in '{docs}/' directory");
        println!("\nStructure:");
        println!("  {docs}/");
        println!("  ├── index.html          (main landing page)");
        println!("  ├── modules/");
        println!("  │   └── module-name/");
        println!("  │       ├── version/");
        println!("  │       └── latest/");
        println!("  └── demo/");
        println!("      └── demo-name/");
        println!("          ├── version/");
        println!("          └── latest/");
        println!("\nTo view the documentation:");
        println!("  1. Open the main index page:");
        println!("     open {docs}/{INDEX_PAGE}");
        if let Some(example) = example_page(docs_dir) {
            println!("\n  2. Or browse individual modules:");
            println!("     open {}", project.display(&example));
        }
    }

    for failure in &report.failures {
        println!(
            "  {} {}: {}",
            Style::new().red().apply_to("✗"),
            project.display(&failure.file),
            failure.reason
        );
    }
    if !report.failures.is_empty() {
        println!("\n⚠️  Some documentation generation failed. Check the output above.");
    }
}

/// A generated module page to suggest, preferring one under `latest/`
fn example_page(docs_dir: &Path) -> Option<PathBuf> {
    let root_index = docs_dir.join(INDEX_PAGE);
    let pages: Vec<PathBuf> = WalkDir::new(docs_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name() == INDEX_PAGE)
        .map(walkdir::DirEntry::into_path)
        .filter(|p| *p != root_index)
        .collect();

    pages
        .iter()
        .find(|p| p.components().any(|c| c.as_os_str() == LATEST_DIR))
        .or_else(|| pages.first())
        .cloned()
}
