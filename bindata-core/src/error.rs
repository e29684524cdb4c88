//! Error types for bindata-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bindata-core operations.
pub type Result<T> = std::result::Result<T, BindataError>;

/// Errors that can occur while building or emitting a resource table.
#[derive(Error, Debug)]
pub enum BindataError {
    /// Two roots produced the same identifier under the `error` policy.
    #[error("Identifier collision: '{identifier}' from {} and {}", first.display(), second.display())]
    Collision {
        /// The identifier both files map to.
        identifier: String,
        /// Source of the entry already in the table.
        first: PathBuf,
        /// Source of the entry being inserted.
        second: PathBuf,
    },

    /// Namespace cannot be used in the selected target language.
    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace {
        namespace: String,
        reason: &'static str,
    },

    /// Exclude glob failed to compile.
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Unknown target language name.
    #[error("Unknown target: '{0}' (expected cpp or rust)")]
    UnknownTarget(String),

    /// Unknown collision policy name.
    #[error("Unknown collision policy: '{0}' (expected last-wins, first-wins or error)")]
    UnknownPolicy(String),

    /// Failed to write a generated artifact.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error for the manifest.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BindataError::Collision {
            identifier: "icons/logo.png".to_string(),
            first: PathBuf::from("a/icons/logo.png"),
            second: PathBuf::from("b/icons/logo.png"),
        };
        let msg = err.to_string();
        assert!(msg.contains("icons/logo.png"));
        assert!(msg.contains("a/icons/logo.png"));
        assert!(msg.contains("b/icons/logo.png"));

        let err = BindataError::UnknownTarget("go".to_string());
        assert!(err.to_string().contains("'go'"));
    }
}
