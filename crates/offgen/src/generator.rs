//! End-to-end generation pipeline.
//!
//! ```ignore
//! use offgen::{DefinitionTree, Generator, GeneratorConfig, SnapshotFile};
//!
//! let config = GeneratorConfig::builder()
//!     .game_dir("C:/Battlestate Games/EFT")
//!     .output_dir("Output")
//!     .build();
//! let tree = DefinitionTree::load("definitions.json")?;
//! let generator = Generator::new(config, SnapshotFile::new("snapshot.json"));
//! let report = generator.run(&tree)?;
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::GeneratorConfig;
use crate::consistency::ConsistencyInfo;
use crate::definition::DefinitionTree;
use crate::error::{Error, ResolveError, Result};
use crate::render::{Header, render_document, save_document};
use crate::resolve::{ResolutionSummary, Resolver};
use crate::types::{ProcessTarget, TypeDatabase, TypeProvider, save_type_dump};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub version: Option<String>,
    pub offsets_path: PathBuf,
    pub dump_path: Option<PathBuf>,
    pub summary: ResolutionSummary,
    pub failures: Vec<ResolveError>,
    /// Rendered header contents
    pub document: String,
}

pub struct Generator<P: TypeProvider> {
    config: GeneratorConfig,
    provider: P,
}

impl<P: TypeProvider> Generator<P> {
    pub fn new(config: GeneratorConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// Run the pipeline, stamping the header with the current time
    pub fn run(&self, tree: &DefinitionTree) -> Result<GenerationReport> {
        self.run_at(tree, Local::now())
    }

    /// Run the pipeline with a fixed header timestamp.
    ///
    /// Fatal errors (configuration, malformed definitions, unreadable
    /// snapshot) abort before anything is resolved. Per-node failures only
    /// show up in the summary.
    pub fn run_at(
        &self,
        tree: &DefinitionTree,
        generated_at: DateTime<Local>,
    ) -> Result<GenerationReport> {
        let game_dir = self
            .config
            .game_dir
            .as_ref()
            .ok_or_else(|| Error::Configuration("Game directory is not configured".to_string()))?;
        let consistency = ConsistencyInfo::load(game_dir)?;
        let version = consistency.version().map(str::to_string);
        info!(
            "Game version: {}",
            version.as_deref().unwrap_or("unknown")
        );

        tree.validate(&self.config.markers)?;

        fs::create_dir_all(&self.config.output_dir)?;

        let process = ProcessTarget::new(&self.config.process_name);
        let types = self
            .provider
            .produce(&self.config.root_marker, &process)?;
        let db = TypeDatabase::new(types);
        info!("Type database holds {} types", db.len());

        let dump_path = if self.config.write_dump {
            let path = self.config.dump_path();
            save_type_dump(&path, &db)?;
            Some(path)
        } else {
            None
        };

        let resolution = Resolver::new(&db, tree, &self.config.markers).run();
        let summary = resolution.summary();
        let failures = resolution.failures().cloned().collect();

        let header = Header::new(&self.config.tool_name, generated_at, version.clone());
        let document = render_document(tree, &resolution, &header, &self.config.render);
        let offsets_path = self.config.offsets_path();
        save_document(&offsets_path, &document)?;

        Ok(GenerationReport {
            version,
            offsets_path,
            dump_path,
            summary,
            failures,
            document,
        })
    }
}
