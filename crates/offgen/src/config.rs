//! Generator configuration.

use std::path::PathBuf;

use crate::definition::MatchMarkers;
use crate::render::RenderOptions;

pub const DEFAULT_OUTPUT_DIR: &str = "Output";
pub const DEFAULT_PROCESS_NAME: &str = "EscapeFromTarkov";
pub const DEFAULT_ROOT_MARKER: &str = "BasicMemory";
pub const DEFAULT_TOOL_NAME: &str = "offgen";

/// Generated header file name
pub const OFFSETS_FILE: &str = "offsets.h";

/// Type dump file name
pub const DUMP_FILE: &str = "dump.txt";

/// Configuration for a generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Game install directory holding `ConsistencyInfo`
    pub game_dir: Option<PathBuf>,
    /// JSON type snapshot produced by the inspector
    pub snapshot_path: Option<PathBuf>,
    /// JSON definitions file
    pub definitions_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub process_name: String,
    /// Type the inspector anchors its snapshot on
    pub root_marker: String,
    /// Tool name written into the header banner
    pub tool_name: String,
    pub markers: MatchMarkers,
    pub render: RenderOptions,
    /// Also write `dump.txt` next to the header
    pub write_dump: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            game_dir: None,
            snapshot_path: None,
            definitions_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            markers: MatchMarkers::default(),
            render: RenderOptions::default(),
            write_dump: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    pub fn offsets_path(&self) -> PathBuf {
        self.output_dir.join(OFFSETS_FILE)
    }

    pub fn dump_path(&self) -> PathBuf {
        self.output_dir.join(DUMP_FILE)
    }
}

/// Builder for GeneratorConfig
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    game_dir: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
    definitions_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    process_name: Option<String>,
    root_marker: Option<String>,
    tool_name: Option<String>,
    markers: Option<MatchMarkers>,
    render: Option<RenderOptions>,
    write_dump: Option<bool>,
}

impl GeneratorConfigBuilder {
    pub fn game_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.game_dir = Some(path.into());
        self
    }

    pub fn snapshot_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn definitions_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.definitions_path = Some(path.into());
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = Some(name.into());
        self
    }

    pub fn root_marker(mut self, marker: impl Into<String>) -> Self {
        self.root_marker = Some(marker.into());
        self
    }

    pub fn tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = Some(name.into());
        self
    }

    pub fn markers(mut self, markers: MatchMarkers) -> Self {
        self.markers = Some(markers);
        self
    }

    pub fn render(mut self, options: RenderOptions) -> Self {
        self.render = Some(options);
        self
    }

    /// Enable or disable writing `dump.txt`
    pub fn write_dump(mut self, enabled: bool) -> Self {
        self.write_dump = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> GeneratorConfig {
        let default = GeneratorConfig::default();
        GeneratorConfig {
            game_dir: self.game_dir.or(default.game_dir),
            snapshot_path: self.snapshot_path.or(default.snapshot_path),
            definitions_path: self.definitions_path.or(default.definitions_path),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            process_name: self.process_name.unwrap_or(default.process_name),
            root_marker: self.root_marker.unwrap_or(default.root_marker),
            tool_name: self.tool_name.unwrap_or(default.tool_name),
            markers: self.markers.unwrap_or(default.markers),
            render: self.render.unwrap_or(default.render),
            write_dump: self.write_dump.unwrap_or(default.write_dump),
        }
    }
}
