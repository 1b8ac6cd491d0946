//! Error types for the export library.

use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller passed a dialect tag outside the supported set.
    #[error("no such dialect: {0}")]
    UnsupportedDialect(String),

    /// A column type has no defined mapping into the requested target.
    ///
    /// Raised when an unclassifiable (passthrough-only) type is rendered
    /// for a dialect other than its own, or as a serialization field.
    #[error("no {target} mapping for {source_dialect} type '{type_name}'")]
    UnsupportedTypeMapping {
        /// Native form of the offending type.
        type_name: String,
        /// Dialect the type was reflected from.
        source_dialect: String,
        /// Requested render target ("mysql", "sqlite", "schema field").
        target: String,
    },

    /// Malformed reflection snapshot (bad foreign key target, non-object row, etc.)
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Create an UnsupportedTypeMapping error.
    pub fn unsupported_mapping(
        type_name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        ExportError::UnsupportedTypeMapping {
            type_name: type_name.into(),
            source_dialect: source.into(),
            target: target.into(),
        }
    }

    /// Format error with full details including error chain.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }

    /// Process exit code for the CLI.
    ///
    /// Caller errors (bad config, bad dialect tag) exit 2; everything else
    /// exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::Config(_) | ExportError::UnsupportedDialect(_) | ExportError::Yaml(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_mapping_message() {
        let err = ExportError::unsupported_mapping("SET('a','b')", "mysql", "sqlite");
        assert_eq!(
            err.to_string(),
            "no sqlite mapping for mysql type 'SET('a','b')'"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExportError::Config("x".into()).exit_code(), 2);
        assert_eq!(ExportError::UnsupportedDialect("oracle".into()).exit_code(), 2);
        assert_eq!(ExportError::Snapshot("x".into()).exit_code(), 1);
    }
}
