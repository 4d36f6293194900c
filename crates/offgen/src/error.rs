use thiserror::Error;

/// Per-node resolution failure.
///
/// These are recorded in the [`Resolution`](crate::resolve::Resolution) and
/// logged, but never abort the resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no type found for {namespace}: {reason}")]
    TypeNotFound { namespace: String, reason: String },

    #[error("{namespace}: previous found field '{reference}' is unresolved: {reason}")]
    ChainTargetUnresolved {
        namespace: String,
        reference: String,
        reason: String,
    },

    #[error("{namespace}::{offset} was not found: {reason}")]
    FieldNotFound {
        namespace: String,
        offset: String,
        reason: String,
    },

    #[error("{namespace}::{offset} skipped: owning type is unavailable")]
    TypeUnavailable { namespace: String, offset: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_resolve_error_converts() {
        let err: Error = ResolveError::TypeNotFound {
            namespace: "Player".to_string(),
            reason: "no candidates".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Resolve(ResolveError::TypeNotFound { .. })));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_field_not_found_message() {
        let err = ResolveError::FieldNotFound {
            namespace: "Player".to_string(),
            offset: "Profile".to_string(),
            reason: "no candidates left after filtering".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Player::Profile was not found: no candidates left after filtering"
        );
    }
}
