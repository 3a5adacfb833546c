//! Search form host.
//!
//! A `FormHost` is the form element around one search field. It applies
//! editing keystrokes, forwards the resulting raw text to its
//! [`SearchController`], and turns submit triggers into `on_submit` calls.
//!
//! Submitting is guarded per turn: after one submit the host stays in
//! [`FormPhase::Submitting`] until the shell calls [`FormHost::settle`] after
//! drawing the next frame, or until the text changes. A bare retrigger
//! arriving before that, such as a mouse click queued right behind an Enter
//! key, is ignored.

use super::search_controller::{SearchController, SubmitOutcome};
use super::sink::QuerySink;
use super::text_edit::{apply_edit, TextEdit};
use crate::model::{FormId, QueryState};
use tracing::debug;

/// Submission phase of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Ready to accept a submit trigger.
    #[default]
    Idle,
    /// A submit was handled this turn and the page has not been redrawn yet.
    Submitting,
}

/// What caused a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// Enter pressed while the field has focus (implicit submission).
    EnterKey,
    /// The form's submit button activated from the keyboard.
    SubmitButton,
    /// The form's submit button clicked with the mouse.
    Click,
}

/// Form element wrapping one search field.
#[derive(Debug, Clone)]
pub struct FormHost {
    controller: SearchController,
    phase: FormPhase,
    /// Cursor position in chars.
    cursor: usize,
}

impl FormHost {
    /// Idle host with an empty field.
    pub fn new(form: FormId) -> Self {
        Self {
            controller: SearchController::new(form),
            phase: FormPhase::Idle,
            cursor: 0,
        }
    }

    /// Form this host wraps.
    pub fn form(&self) -> FormId {
        self.controller.form()
    }

    /// Current query state of the field.
    pub fn state(&self) -> &QueryState {
        self.controller.state()
    }

    /// Controller that validates submits.
    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Current submission phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one editing keystroke.
    ///
    /// Text changes go to the controller verbatim and re-arm the submit
    /// guard; cursor-only moves do not touch the query state. Returns true if
    /// the text changed.
    pub fn edit(&mut self, edit: TextEdit) -> bool {
        let result = apply_edit(self.controller.state().value(), self.cursor, edit);
        self.cursor = result.cursor;
        match result.text {
            Some(text) => {
                self.controller.on_change(text);
                self.phase = FormPhase::Idle;
                true
            }
            None => false,
        }
    }

    /// Replace the whole text (e.g. a pre-filled query) and put the cursor at the end.
    pub fn set_value(&mut self, raw: impl Into<String>) {
        let state = self.controller.on_change(raw);
        self.cursor = state.value().chars().count();
        self.phase = FormPhase::Idle;
    }

    /// Handle a submit trigger.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without touching the controller if a
    /// submit was already handled this turn.
    pub fn submit(&mut self, trigger: SubmitTrigger, sink: &mut dyn QuerySink) -> SubmitOutcome {
        if self.phase == FormPhase::Submitting {
            debug!(
                form = self.form().as_str(),
                ?trigger,
                "Ignoring submit while previous submit is unsettled"
            );
            return SubmitOutcome::Ignored;
        }

        self.phase = FormPhase::Submitting;
        debug!(form = self.form().as_str(), ?trigger, "Submitting search form");
        let outcome = self.controller.on_submit(sink);
        self.cursor = self.cursor.min(self.controller.state().value().chars().count());
        outcome
    }

    /// Return to [`FormPhase::Idle`]. Called once per drawn frame.
    pub fn settle(&mut self) {
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SubmissionError, SubmissionEvent, ValidationErrorKind};

    fn type_text(host: &mut FormHost, text: &str) {
        for ch in text.chars() {
            host.edit(TextEdit::Insert(ch));
        }
    }

    #[test]
    fn typing_forwards_raw_text_to_controller() {
        let mut host = FormHost::new(FormId::Header);
        type_text(&mut host, " hi ");
        assert_eq!(host.state().value(), " hi ");
        assert_eq!(host.cursor(), 4);
    }

    #[test]
    fn cursor_moves_do_not_clear_error() {
        let mut host = FormHost::new(FormId::Header);
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> { Ok(()) };
        type_text(&mut host, "ab");
        host.submit(SubmitTrigger::EnterKey, &mut sink);

        assert!(!host.edit(TextEdit::CursorLeft));
        assert!(host.state().is_invalid(), "Only text changes dismiss errors");
    }

    #[test]
    fn keystroke_after_invalid_submit_clears_error() {
        let mut host = FormHost::new(FormId::Header);
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> { Ok(()) };
        type_text(&mut host, "ab");
        host.submit(SubmitTrigger::EnterKey, &mut sink);
        assert!(host.state().is_invalid());

        host.edit(TextEdit::Insert('c'));
        assert!(!host.state().is_invalid());
        assert_eq!(host.state().value(), "abc");
    }

    #[test]
    fn second_submit_before_settle_is_ignored() {
        let mut host = FormHost::new(FormId::Header);
        let mut accepted = 0;
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> {
            accepted += 1;
            Ok(())
        };

        type_text(&mut host, "valid search");
        let first = host.submit(SubmitTrigger::EnterKey, &mut sink);
        let second = host.submit(SubmitTrigger::Click, &mut sink);

        assert!(first.accepted().is_some());
        assert_eq!(second, SubmitOutcome::Ignored);
        assert!(
            !host.state().is_invalid(),
            "Ignored submit must not validate the reset field"
        );
        drop(sink);
        assert_eq!(accepted, 1);
    }

    #[test]
    fn submit_after_settle_is_handled_again() {
        let mut host = FormHost::new(FormId::Header);
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> { Ok(()) };

        type_text(&mut host, "valid search");
        host.submit(SubmitTrigger::EnterKey, &mut sink);
        assert_eq!(host.phase(), FormPhase::Submitting);

        host.settle();
        assert_eq!(host.phase(), FormPhase::Idle);

        let outcome = host.submit(SubmitTrigger::SubmitButton, &mut sink);
        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationErrorKind::Empty));
    }

    #[test]
    fn invalid_submit_also_blocks_until_settled() {
        let mut host = FormHost::new(FormId::Hero);
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> { Ok(()) };

        host.submit(SubmitTrigger::EnterKey, &mut sink);
        assert_eq!(
            host.submit(SubmitTrigger::EnterKey, &mut sink),
            SubmitOutcome::Ignored
        );
    }

    #[test]
    fn text_change_rearms_guard_within_turn() {
        let mut host = FormHost::new(FormId::Header);
        let mut accepted = Vec::new();
        let mut sink = |event: &SubmissionEvent| -> Result<(), SubmissionError> {
            accepted.push(event.normalized_value.clone());
            Ok(())
        };

        type_text(&mut host, "ab");
        host.submit(SubmitTrigger::EnterKey, &mut sink);
        type_text(&mut host, "cdef");
        assert_eq!(host.phase(), FormPhase::Idle);

        let outcome = host.submit(SubmitTrigger::EnterKey, &mut sink);
        assert!(outcome.accepted().is_some());
        drop(sink);
        assert_eq!(accepted, vec!["abcdef".to_string()]);
    }

    #[test]
    fn cursor_move_does_not_rearm_guard() {
        let mut host = FormHost::new(FormId::Header);
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> { Ok(()) };

        type_text(&mut host, "ab");
        host.submit(SubmitTrigger::EnterKey, &mut sink);
        host.edit(TextEdit::Home);
        assert_eq!(
            host.submit(SubmitTrigger::Click, &mut sink),
            SubmitOutcome::Ignored
        );
    }

    #[test]
    fn cursor_resets_after_accepted_submit() {
        let mut host = FormHost::new(FormId::Header);
        let mut sink = |_: &SubmissionEvent| -> Result<(), SubmissionError> { Ok(()) };

        type_text(&mut host, "valid search");
        host.submit(SubmitTrigger::EnterKey, &mut sink);
        assert_eq!(host.cursor(), 0);
    }

    #[test]
    fn set_value_places_cursor_at_end() {
        let mut host = FormHost::new(FormId::Hero);
        host.set_value("pré-fill");
        assert_eq!(host.cursor(), 8);
        assert_eq!(host.state().value(), "pré-fill");
    }
}
