//! Game version descriptor.
//!
//! The game ships a `ConsistencyInfo` JSON file in its install directory.
//! Only the version is used; other entries are kept as-is. Any problem
//! reading it is a configuration error and aborts the run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// File name inside the game directory
pub const CONSISTENCY_FILE: &str = "ConsistencyInfo";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsistencyInfo {
    #[serde(rename = "Version", alias = "version", default)]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConsistencyInfo {
    /// Load `<game_dir>/ConsistencyInfo`
    pub fn load<P: AsRef<Path>>(game_dir: P) -> Result<Self> {
        let game_dir = game_dir.as_ref();
        if !game_dir.is_dir() {
            return Err(Error::Configuration(format!(
                "Game directory doesn't exist '{}'",
                game_dir.display()
            )));
        }

        let path = game_dir.join(CONSISTENCY_FILE);
        if !path.is_file() {
            return Err(Error::Configuration(format!(
                "Unable to find consistency info file '{}'",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(Error::Configuration(
                "Invalid consistency info content".to_string(),
            ));
        }

        let info: Self = serde_json::from_str(content).map_err(|e| {
            Error::Configuration(format!("Consistency info couldn't be deserialized: {}", e))
        })?;
        debug!("Consistency info version: {:?}", info.version);
        Ok(info)
    }

    /// Version string, if present and non-blank
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_consistency_info() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONSISTENCY_FILE),
            r#"{"Version":"0.16.0.12345","Entries":[]}"#,
        )
        .unwrap();

        let info = ConsistencyInfo::load(dir.path()).unwrap();
        assert_eq!(info.version(), Some("0.16.0.12345"));
        assert!(info.extra.contains_key("Entries"));
    }

    #[test]
    fn test_lowercase_version_key() {
        let info = ConsistencyInfo::parse(r#"{"version":"1.2.3"}"#).unwrap();
        assert_eq!(info.version(), Some("1.2.3"));
    }

    #[test]
    fn test_missing_version_is_not_fatal() {
        let info = ConsistencyInfo::parse(r#"{"Entries":[]}"#).unwrap();
        assert_eq!(info.version(), None);

        let blank = ConsistencyInfo::parse(r#"{"Version":" "}"#).unwrap();
        assert_eq!(blank.version(), None);
    }

    #[test]
    fn test_missing_directory_is_configuration_error() {
        let err = ConsistencyInfo::load("does/not/exist").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = ConsistencyInfo::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_or_garbage_content_is_configuration_error() {
        assert!(matches!(
            ConsistencyInfo::parse("   "),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            ConsistencyInfo::parse("not json"),
            Err(Error::Configuration(_))
        ));
    }
}
