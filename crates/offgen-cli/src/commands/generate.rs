//! Generate command implementation.

use anyhow::{Context, Result};
use offgen::{DefinitionTree, GenerationReport, Generator, GeneratorConfig, ResolveError, SnapshotFile};
use owo_colors::OwoColorize;
use tracing::info;

use super::required;

/// Run the full pipeline and print a summary
pub fn run(config: GeneratorConfig) -> Result<()> {
    let definitions = required(
        config.definitions_path.clone(),
        "definitions file",
        "--definitions",
    )?;
    let snapshot = required(config.snapshot_path.clone(), "type snapshot", "--snapshot")?;

    let tree = DefinitionTree::load(&definitions)
        .with_context(|| format!("Failed to load definitions from {}", definitions.display()))?;
    info!(
        "Loaded {} namespaces / {} offsets",
        tree.namespace_count(),
        tree.offset_count()
    );

    let generator = Generator::new(config, SnapshotFile::new(snapshot));
    let report = generator.run(&tree)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    let summary = &report.summary;

    for failure in &report.failures {
        // Offsets of a failed namespace repeat the namespace error
        if matches!(failure, ResolveError::TypeUnavailable { .. }) {
            continue;
        }
        eprintln!("{} {}", "error:".red().bold(), failure);
    }

    let counts = format!(
        "{}/{} offsets resolved",
        summary.offsets_resolved,
        summary.offsets_total()
    );
    if summary.is_complete() {
        eprintln!("{} {}", "Done".green().bold(), counts);
    } else {
        eprintln!(
            "{} {} ({} offsets failed, {} namespaces failed)",
            "Done".yellow().bold(),
            counts,
            summary.offsets_failed,
            summary.namespaces_failed
        );
    }

    eprintln!(
        "Game version: {}",
        report.version.as_deref().unwrap_or("unknown")
    );
    eprintln!("Header written to: {}", report.offsets_path.display());
    if let Some(dump_path) = &report.dump_path {
        eprintln!("Type dump written to: {}", dump_path.display());
    }
}
