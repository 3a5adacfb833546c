//! Search validation and submission state machine.
//!
//! One `SearchController` backs each search form on the page. It owns the
//! form's [`QueryState`] and is the only thing that changes it:
//!
//! - `on_change` stores the raw text and dismisses any visible error.
//! - `on_submit` validates, hands accepted queries to a [`QuerySink`], and
//!   converts every failure into a field error. It never returns an error.

use super::sink::QuerySink;
use crate::model::{FormId, NormalizedQuery, QueryState, SubmissionEvent, ValidationErrorKind};
use tracing::{debug, info, warn};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The query passed validation and the sink accepted it. The field is now empty.
    Accepted(SubmissionEvent),
    /// The field is now marked invalid with this error. Its text is unchanged.
    Invalid(ValidationErrorKind),
    /// The submit arrived while a previous one was still in flight and was dropped.
    Ignored,
}

impl SubmitOutcome {
    /// The accepted event, if the submit was accepted.
    pub fn accepted(&self) -> Option<&SubmissionEvent> {
        match self {
            SubmitOutcome::Accepted(event) => Some(event),
            _ => None,
        }
    }
}

/// Owns the query state of one search form.
#[derive(Debug, Clone)]
pub struct SearchController {
    form: FormId,
    state: QueryState,
}

impl SearchController {
    /// Controller for `form` with an empty, valid field.
    pub fn new(form: FormId) -> Self {
        Self {
            form,
            state: QueryState::new(),
        }
    }

    /// Form this controller belongs to.
    pub fn form(&self) -> FormId {
        self.form
    }

    /// Current query state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Store `raw` exactly as typed.
    ///
    /// Any error from a previous submit is cleared, whatever the new text is.
    /// No validation happens here.
    pub fn on_change(&mut self, raw: impl Into<String>) -> &QueryState {
        self.state = QueryState::with_value(raw);
        &self.state
    }

    /// Validate the current text and submit it.
    ///
    /// On success the event is handed to `sink` and the field is reset to empty.
    /// Validation failures and sink failures leave the text in place and mark
    /// the field invalid.
    pub fn on_submit(&mut self, sink: &mut dyn QuerySink) -> SubmitOutcome {
        let query = match NormalizedQuery::parse(self.state.value()) {
            Ok(query) => query,
            Err(kind) => {
                debug!(form = self.form.as_str(), error = ?kind, "Search rejected");
                return self.fail(kind);
            }
        };

        let event = SubmissionEvent::new(self.form, query);
        match sink.accept(&event) {
            Ok(()) => {
                info!(
                    form = self.form.as_str(),
                    query = %event.normalized_value,
                    "Search accepted"
                );
                self.state = QueryState::new();
                SubmitOutcome::Accepted(event)
            }
            Err(err) => {
                warn!(form = self.form.as_str(), error = %err, "Query sink failed");
                self.fail(ValidationErrorKind::SubmissionFailed)
            }
        }
    }

    fn fail(&mut self, kind: ValidationErrorKind) -> SubmitOutcome {
        self.state = std::mem::take(&mut self.state).with_error(kind);
        SubmitOutcome::Invalid(kind)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_controller_tests.rs"]
mod tests;
