use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{CppWriter, LineEnding};
use crate::definition::{
    DefinitionTree, NamespaceDefinition, NamespaceId, OffsetId, Position, TreeVisitor,
};
use crate::error::Result;
use crate::resolve::{NodeState, Resolution};

/// Name of the root scope every namespace is nested in
pub const ROOT_SCOPE: &str = "offsets";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Banner contents emitted once, above the root scope
#[derive(Debug, Clone)]
pub struct Header {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub version: Option<String>,
}

impl Header {
    pub fn new(tool: impl Into<String>, generated_at: DateTime<Local>, version: Option<String>) -> Self {
        Self {
            tool: tool.into(),
            generated_at,
            version,
        }
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub line_ending: LineEnding,
    /// Emit `// <name> = <unresolved>;` for offsets that did not resolve
    /// instead of dropping them
    pub mark_unresolved: bool,
}

struct ScopeRenderer<'r, 'db> {
    writer: &'r mut CppWriter,
    resolution: &'r Resolution<'db>,
    options: &'r RenderOptions,
}

impl<'a> TreeVisitor<'a> for ScopeRenderer<'_, '_> {
    fn enter(&mut self, id: NamespaceId, ns: &'a NamespaceDefinition, position: Position) {
        let indent = position.depth + 1;
        self.writer
            .add_instruction(&format!("namespace {}", ns.name), indent);
        self.writer.add_instruction("{", indent);

        for (index, offset) in ns.offsets.iter().enumerate() {
            let id = OffsetId {
                namespace: id,
                index,
            };
            match self.resolution.offset(id) {
                NodeState::Resolved(field) => self.writer.add_instruction(
                    &format!("{} = 0x{:X};", offset.name, field.offset),
                    indent + 1,
                ),
                _ if self.options.mark_unresolved => self
                    .writer
                    .add_instruction(&format!("// {} = <unresolved>;", offset.name), indent + 1),
                _ => {}
            }
        }
    }

    fn leave(&mut self, _id: NamespaceId, _ns: &'a NamespaceDefinition, position: Position) {
        self.writer.add_instruction("}", position.depth + 1);
        if !position.is_last {
            self.writer.skip_line();
        }
    }
}

fn write_scope(
    writer: &mut CppWriter,
    tree: &DefinitionTree,
    resolution: &Resolution<'_>,
    options: &RenderOptions,
) {
    writer.add_instruction(&format!("namespace {}", ROOT_SCOPE), 0);
    writer.add_instruction("{", 0);
    tree.walk(&mut ScopeRenderer {
        writer: &mut *writer,
        resolution,
        options,
    });
    writer.add_instruction("}", 0);
}

/// Render only the `namespace offsets { ... }` block
pub fn render_scope(
    tree: &DefinitionTree,
    resolution: &Resolution<'_>,
    options: &RenderOptions,
) -> String {
    let mut writer = CppWriter::new(options.line_ending);
    write_scope(&mut writer, tree, resolution, options);
    writer.build()
}

/// Render the complete header file
pub fn render_document(
    tree: &DefinitionTree,
    resolution: &Resolution<'_>,
    header: &Header,
    options: &RenderOptions,
) -> String {
    let mut writer = CppWriter::new(options.line_ending);

    writer.add_instruction("#pragma once", 0);
    writer.add_instruction("#include \"stdafx.h\"", 0);
    writer.skip_line();

    writer.add_banner(header);
    writer.skip_line();

    write_scope(&mut writer, tree, resolution, options);
    writer.build()
}

pub fn save_document<P: AsRef<Path>>(path: P, document: &str) -> Result<()> {
    std::fs::write(&path, document)?;
    info!("Wrote {}", path.as_ref().display());
    Ok(())
}
