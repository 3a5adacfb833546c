//! Error types for the help-center application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`ContentError`] - Page content file could not be read or parsed
//! - [`SubmissionError`] - Returned by accepted-query sinks. Never escapes a search form:
//!   the controller converts it into a visible field error.
//!
//! # Error Recovery Strategy
//!
//! Validation failures and sink failures are **non-fatal**: they become `QueryState`
//! and are rendered next to the field. Content errors are fatal and propagate to `main`
//! before the terminal is touched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a page content file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("Failed to read content file at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content file is not valid TOML or does not match the content schema.
    #[error("Invalid content in {path}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Failure reported by an accepted-query sink.
///
/// Sinks return this instead of panicking. The search controller logs it and shows
/// the generic retry message; the user's text stays in the field.
///
/// # Examples
///
/// ```
/// use helpcenter::model::error::SubmissionError;
///
/// let err = SubmissionError::Rejected("backend unavailable".to_string());
/// assert!(err.to_string().contains("backend unavailable"));
/// ```
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Writing the accepted query to its destination failed.
    #[error("Failed to record query to {path}: {source}")]
    Io {
        /// Destination that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The query could not be encoded for its destination.
    #[error("Failed to encode query: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink refused the query.
    #[error("Query rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn content_read_error_display_includes_path() {
        let err = ContentError::Read {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.toml"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn content_parse_error_display_includes_reason() {
        let err = ContentError::Parse {
            path: PathBuf::from("content.toml"),
            reason: "missing field `title`".to_string(),
        };
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn submission_io_error_keeps_source() {
        use std::error::Error as _;

        let err = SubmissionError::Io {
            path: PathBuf::from("/read-only/history.jsonl"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/read-only/history.jsonl"));
    }
}
