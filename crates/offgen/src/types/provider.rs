use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::TypeRecord;
use crate::error::Result;

/// The process whose types are being inspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTarget {
    pub name: String,
}

impl ProcessTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Source of reflected type metadata.
///
/// Called once per run, before resolution starts. The returned records need
/// not be sorted; `TypeDatabase` establishes the order.
pub trait TypeProvider {
    fn produce(&self, root_marker: &str, process: &ProcessTarget) -> Result<Vec<TypeRecord>>;
}

/// On-disk snapshot written by an external inspector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeSnapshot {
    #[serde(default)]
    pub process: String,
    #[serde(default)]
    pub root_marker: String,
    pub types: Vec<TypeRecord>,
}

impl TypeSnapshot {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Provider backed by a JSON snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl TypeProvider for SnapshotFile {
    fn produce(&self, root_marker: &str, process: &ProcessTarget) -> Result<Vec<TypeRecord>> {
        info!("Loading type snapshot from {}", self.path.display());
        let snapshot = TypeSnapshot::load(&self.path)?;

        if !snapshot.process.is_empty() && snapshot.process != process.name {
            warn!(
                "Snapshot was taken from '{}', expected '{}'",
                snapshot.process, process.name
            );
        }
        if !snapshot.root_marker.is_empty() && snapshot.root_marker != root_marker {
            warn!(
                "Snapshot root marker is '{}', expected '{}'",
                snapshot.root_marker, root_marker
            );
        }

        debug!("Snapshot contains {} types", snapshot.types.len());
        Ok(snapshot.types)
    }
}

/// Provider over records already in memory
impl TypeProvider for Vec<TypeRecord> {
    fn produce(&self, _root_marker: &str, _process: &ProcessTarget) -> Result<Vec<TypeRecord>> {
        Ok(self.clone())
    }
}
