//! Validate command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use offgen::{DefinitionTree, MatchMarkers};
use owo_colors::OwoColorize;

use super::required;

/// Load and validate a definitions file, then print its outline
pub fn run(definitions: Option<PathBuf>, markers: &MatchMarkers) -> Result<()> {
    let definitions = required(definitions, "definitions file", "--definitions")?;

    let tree = DefinitionTree::load(&definitions)
        .with_context(|| format!("Failed to load definitions from {}", definitions.display()))?;
    tree.validate(markers)?;

    print!("{}", format_outline(&tree));
    eprintln!(
        "{} {} namespaces, {} offsets",
        "Valid".green().bold(),
        tree.namespace_count(),
        tree.offset_count()
    );

    Ok(())
}

/// One line per namespace, indented by depth, with its lookup rule
pub fn format_outline(tree: &DefinitionTree) -> String {
    let mut out = String::new();

    for flat in tree.flatten() {
        let ns = flat.definition;
        let lookup = match &ns.previous_found_field {
            Some(reference) => format!("<- {}", reference),
            None => format!(
                "{}.{}",
                ns.namespace_name.as_deref().unwrap_or("*"),
                ns.class_name.as_deref().unwrap_or("*")
            ),
        };
        out.push_str(&format!(
            "{}{} ({}) {} offsets\n",
            "  ".repeat(flat.depth),
            ns.name,
            lookup,
            ns.offsets.len()
        ));
    }

    out
}
