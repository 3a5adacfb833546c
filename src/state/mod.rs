//! Application state (pure).
//!
//! Everything here is plain data plus transition functions; none of it
//! touches the terminal.

pub mod form_host;
pub mod page_state;
pub mod scroll_handler;
pub mod search_controller;
pub mod sink;
pub mod text_edit;

pub use form_host::{FormHost, FormPhase, SubmitTrigger};
pub use page_state::{Focus, Notice, PageState, Viewport};
pub use search_controller::{SearchController, SubmitOutcome};
pub use sink::{HistorySink, NullSink, QuerySink};
pub use text_edit::{apply_edit, EditResult, TextEdit};
