//! Error types for folio-vdom.
//!
//! Every failure to obtain the portfolio document collapses into one
//! user-facing kind ("data unavailable"); the variants only exist so the
//! diagnostics log says *why*.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, rendering or configuring a page.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The data file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request itself failed (connection, TLS, body read)
    #[error("request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The body is not a well-formed portfolio document
    #[error("malformed portfolio document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The host page does not declare a required container
    #[error("page template has no element with id `{0}`")]
    MissingContainer(String),

    /// A resolved sink no longer exists in the document
    #[error("sink `{0}` no longer resolves to an element")]
    MissingSink(&'static str),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

impl FolioError {
    /// Create an I/O error bound to the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error from any error type.
    pub fn config(err: impl std::fmt::Display) -> Self {
        Self::Config(err.to_string())
    }

    /// Whether this error means the portfolio document could not be obtained.
    ///
    /// These are the failures surfaced to the visitor as a single alert.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Http(_) | Self::Status { .. } | Self::Malformed(_)
        )
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
