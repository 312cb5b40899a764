//! # Configuration Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ConfigError (this module) ← Adds file path and variable context       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  `till` binary prints the message and exits non-zero                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use till_core::CoreError;

/// Errors raised while loading pricing data or settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The pricing document could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The pricing document is not valid JSON or has the wrong shape.
    ///
    /// ## When This Occurs
    /// - Missing `products` array
    /// - Unknown rule `kind`
    /// - Wrong field types (e.g. price as a string)
    #[error("Invalid pricing document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product or rule in the document was rejected by till-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
