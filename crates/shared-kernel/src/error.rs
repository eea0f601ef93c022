// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileListError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileListError>,
    },

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl FileListError {
    /// Stable machine-readable code, when the underlying failure carries one.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Context { source, .. } => source.code(),
            Self::Source(err) => Some(err.code()),
            Self::Infrastructure(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileListError>;

/// Stable codes that callers can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidPath,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPath => "ERR_INVALID_PATH",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised while turning handles into entries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The resolved path of the entry at `index` was not a string.
    #[error("Path must be a string (entry {index}, got {value})")]
    InvalidPath { index: usize, value: Value },
}

impl SourceError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPath { .. } => ErrorCode::InvalidPath,
        }
    }

    /// The offending value attached to the failure.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::InvalidPath { value, .. } => value,
        }
    }

    /// Position of the failing handle in the input collection.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::InvalidPath { index, .. } => *index,
        }
    }
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {details}")]
    ManifestParse { details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::ManifestParse { details: err.to_string() }
    }
}

impl From<serde_json::Error> for FileListError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileListError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileListError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileListError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
