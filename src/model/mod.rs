//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod content;
pub mod error;
pub mod key_action;
pub mod query;

// Re-export for convenience
pub use content::{load_content, CardContent, FooterLink, FooterSection, PageContent};
pub use error::{ContentError, SubmissionError};
pub use key_action::KeyAction;
pub use query::{
    trim_query, FormId, NormalizedQuery, QueryState, SubmissionEvent, ValidationErrorKind,
    MIN_QUERY_LENGTH,
};
