//! TOML configuration file.
//!
//! Settings are layered: built-in defaults, then `offgen.toml`, then CLI
//! flags and `OFFGEN_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use offgen::{GeneratorConfig, GeneratorConfigBuilder, MatchMarkers, RenderOptions};
use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::{OutputArgs, PathArgs};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "offgen.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub game_dir: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub definitions: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub process_name: Option<String>,
    pub root_marker: Option<String>,
    pub tool_name: Option<String>,
    pub write_dump: Option<bool>,
    pub markers: Option<MatchMarkers>,
    pub render: Option<RenderOptions>,
}

impl FileConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the explicit config file, or `offgen.toml` if it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn apply(self, mut builder: GeneratorConfigBuilder) -> GeneratorConfigBuilder {
        if let Some(path) = self.game_dir {
            builder = builder.game_dir(path);
        }
        if let Some(path) = self.snapshot {
            builder = builder.snapshot_path(path);
        }
        if let Some(path) = self.definitions {
            builder = builder.definitions_path(path);
        }
        if let Some(path) = self.output_dir {
            builder = builder.output_dir(path);
        }
        if let Some(name) = self.process_name {
            builder = builder.process_name(name);
        }
        if let Some(marker) = self.root_marker {
            builder = builder.root_marker(marker);
        }
        if let Some(name) = self.tool_name {
            builder = builder.tool_name(name);
        }
        if let Some(enabled) = self.write_dump {
            builder = builder.write_dump(enabled);
        }
        if let Some(markers) = self.markers {
            builder = builder.markers(markers);
        }
        if let Some(render) = self.render {
            builder = builder.render(render);
        }
        builder
    }
}

impl PathArgs {
    pub fn apply(&self, mut builder: GeneratorConfigBuilder) -> GeneratorConfigBuilder {
        if let Some(path) = &self.game_dir {
            builder = builder.game_dir(path);
        }
        if let Some(path) = &self.snapshot {
            builder = builder.snapshot_path(path);
        }
        if let Some(path) = &self.definitions {
            builder = builder.definitions_path(path);
        }
        if let Some(path) = &self.output_dir {
            builder = builder.output_dir(path);
        }
        builder
    }
}

impl OutputArgs {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(enabled) = self.mark_unresolved() {
            config.render.mark_unresolved = enabled;
        }
        if let Some(line_ending) = self.line_ending {
            config.render.line_ending = line_ending;
        }
        if let Some(enabled) = self.write_dump() {
            config.write_dump = enabled;
        }
    }
}

/// Defaults, then the config file, then command-line paths
pub fn layered_config(file: FileConfig, paths: &PathArgs) -> GeneratorConfig {
    paths.apply(file.apply(GeneratorConfig::builder())).build()
}
