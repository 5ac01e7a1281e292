//! Error types for the DevBlog core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for DevBlog.
///
/// Only loading can fail: catalog queries and preference resolution degrade
/// to empty results or defaults instead of returning errors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Catalog document could not be read or parsed.
    #[error("Catalog error in {path}: {message}")]
    Catalog { path: PathBuf, message: String },

    /// Two articles share the same identifier.
    #[error("Duplicate article id: {0}")]
    DuplicateId(String),

    /// Two articles share the same slug.
    #[error("Duplicate article slug: {0}")]
    DuplicateSlug(String),

    /// An article failed load-time validation.
    #[error("Invalid article {id}: {message}")]
    InvalidArticle { id: String, message: String },

    /// Preference storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new catalog error.
    pub fn catalog(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Catalog {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid article error.
    pub fn invalid_article(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArticle {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a new storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
