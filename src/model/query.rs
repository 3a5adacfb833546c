//! Search query types (pure).
//!
//! `QueryState` is the record a search form renders from. `NormalizedQuery`
//! is the only way to obtain a query that passed validation.

use serde::Serialize;
use thiserror::Error;

/// Minimum length (in chars) of a trimmed query.
pub const MIN_QUERY_LENGTH: usize = 4;

/// Message shown when the trimmed query is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";

/// Message shown when the trimmed query is shorter than [`MIN_QUERY_LENGTH`].
pub const TOO_SHORT_MESSAGE: &str = "Search term must be at least 4 characters long";

/// Message shown when the accepted-query sink reports a failure.
pub const SUBMISSION_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

// ===== FormId =====

/// Identifies which search form on the page a query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormId {
    /// Compact search field in the page header.
    Header,
    /// Large search field in the "How can we help?" section.
    Hero,
}

impl FormId {
    /// Lowercase name used in logs and history records.
    pub fn as_str(self) -> &'static str {
        match self {
            FormId::Header => "header",
            FormId::Hero => "hero",
        }
    }

    /// Element id of the text field belonging to this form.
    pub fn input_id(self) -> &'static str {
        match self {
            FormId::Header => "header-search-input",
            FormId::Hero => "main-search-input",
        }
    }
}

// ===== ValidationErrorKind =====

/// Why a submit did not produce an accepted query.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Trimmed input has zero length.
    #[error("Please enter a search term")]
    Empty,
    /// Trimmed input has 1 to 3 characters.
    #[error("Search term must be at least 4 characters long")]
    TooShort,
    /// The accepted-query sink returned an error.
    #[error("An error occurred. Please try again.")]
    SubmissionFailed,
}

impl ValidationErrorKind {
    /// User-visible message for this error.
    pub fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::Empty => EMPTY_QUERY_MESSAGE,
            ValidationErrorKind::TooShort => TOO_SHORT_MESSAGE,
            ValidationErrorKind::SubmissionFailed => SUBMISSION_FAILED_MESSAGE,
        }
    }
}

// ===== NormalizedQuery =====

/// Strip leading and trailing whitespace, including the byte-order mark
/// (U+FEFF), from a raw query.
pub fn trim_query(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trimmed, validated search string. Never shorter than [`MIN_QUERY_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Smart constructor: trims `raw` with [`trim_query`] and checks the
    /// length policy.
    ///
    /// Length is counted in chars, not bytes.
    pub fn parse(raw: &str) -> Result<Self, ValidationErrorKind> {
        let trimmed = trim_query(raw);
        if trimmed.is_empty() {
            return Err(ValidationErrorKind::Empty);
        }
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Err(ValidationErrorKind::TooShort);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query, returning the trimmed text.
    pub fn into_string(self) -> String {
        self.0
    }
}

// ===== QueryState =====

/// Current text and validity of one search form.
///
/// `error` is the single source of truth for validity: the field is invalid
/// exactly when an error is present, and the message is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    value: String,
    error: Option<ValidationErrorKind>,
}

impl QueryState {
    /// Fresh state: empty value, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Valid state holding `value` verbatim.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    /// Same value, marked invalid with `error`.
    pub fn with_error(self, error: ValidationErrorKind) -> Self {
        Self {
            value: self.value,
            error: Some(error),
        }
    }

    /// Exactly what the user typed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current validation error, if any.
    pub fn error(&self) -> Option<ValidationErrorKind> {
        self.error
    }

    /// Error text, or `""` when the field is valid.
    pub fn error_message(&self) -> &'static str {
        self.error.map(ValidationErrorKind::message).unwrap_or("")
    }

    /// True while an error message is showing.
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

// ===== SubmissionEvent =====

/// A query that passed validation, handed to the accepted-query sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionEvent {
    /// Form the query was submitted from.
    pub form: FormId,
    /// Trimmed query text.
    pub normalized_value: String,
}

impl SubmissionEvent {
    /// Event for `query` submitted from `form`.
    pub fn new(form: FormId, query: NormalizedQuery) -> Self {
        Self {
            form,
            normalized_value: query.into_string(),
        }
    }
}
