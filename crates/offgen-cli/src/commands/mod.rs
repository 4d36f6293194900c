//! CLI command implementations.

pub mod dump;
pub mod generate;
pub mod validate;

use std::path::PathBuf;

use offgen::Error;

/// A path the command cannot run without
pub(crate) fn required(path: Option<PathBuf>, what: &str, flag: &str) -> Result<PathBuf, Error> {
    path.ok_or_else(|| Error::Configuration(format!("No {} configured (use {})", what, flag)))
}
