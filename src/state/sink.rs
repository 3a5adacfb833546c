//! Accepted-query sinks.
//!
//! A sink receives every query that passes validation. It reports failure
//! through its return value; the search controller turns an `Err` into a
//! visible field error instead of propagating it.

use crate::model::{FormId, SubmissionError, SubmissionEvent};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receiver of accepted search queries.
pub trait QuerySink {
    /// Handle one accepted query.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] if the query could not be handled. The
    /// submitting form keeps its text and shows a retry message.
    fn accept(&mut self, event: &SubmissionEvent) -> Result<(), SubmissionError>;
}

impl<F> QuerySink for F
where
    F: FnMut(&SubmissionEvent) -> Result<(), SubmissionError>,
{
    fn accept(&mut self, event: &SubmissionEvent) -> Result<(), SubmissionError> {
        self(event)
    }
}

// ===== NullSink =====

/// Accepts every query and does nothing with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl QuerySink for NullSink {
    fn accept(&mut self, _event: &SubmissionEvent) -> Result<(), SubmissionError> {
        Ok(())
    }
}

// ===== HistorySink =====

/// One line of the search history file.
#[derive(Debug, Serialize)]
struct HistoryRecord<'a> {
    query: &'a str,
    source: FormId,
    accepted_at: DateTime<Utc>,
}

/// Appends accepted queries to a JSON-lines history file.
///
/// The file and its parent directory are created on first use.
#[derive(Debug, Clone)]
pub struct HistorySink {
    path: PathBuf,
}

impl HistorySink {
    /// Sink appending to the JSON Lines file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// History file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SubmissionError {
        SubmissionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl QuerySink for HistorySink {
    fn accept(&mut self, event: &SubmissionEvent) -> Result<(), SubmissionError> {
        let record = HistoryRecord {
            query: &event.normalized_value,
            source: event.form,
            accepted_at: Utc::now(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))
    }
}
