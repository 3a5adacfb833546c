//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Every `send_*` call is one event-loop turn: the events are
//! handled, a frame is drawn, and the forms settle.

use crate::model::{FormId, PageContent, SubmissionError, SubmissionEvent};
use crate::state::{Focus, PageState, QuerySink};
use crate::view::{buffer_to_string, search_props, AriaAttributes, RunOptions, Theme, TuiApp};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

/// Sink that records accepted events, optionally failing instead.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<SubmissionEvent>>>,
    attempts: Rc<RefCell<usize>>,
    fail: Rc<RefCell<bool>>,
}

impl RecordingSink {
    /// Every event the sink accepted, in order.
    pub fn events(&self) -> Vec<SubmissionEvent> {
        self.events.borrow().clone()
    }

    /// Number of times the sink was called, failed calls included.
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }

    /// Make subsequent submissions fail (or succeed again).
    pub fn set_failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail;
    }
}

impl QuerySink for RecordingSink {
    fn accept(&mut self, event: &SubmissionEvent) -> Result<(), SubmissionError> {
        *self.attempts.borrow_mut() += 1;
        if *self.fail.borrow() {
            return Err(SubmissionError::Rejected("recording sink set to fail".to_string()));
        }
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

/// Test harness for acceptance testing
pub struct PageHarness {
    app: TuiApp<TestBackend>,
    sink: RecordingSink,
    running: bool,
}

impl PageHarness {
    /// Default page in a 100x30 terminal.
    pub fn new() -> Self {
        Self::with_size(100, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self::build(width, height, PageContent::default(), None)
    }

    /// Harness whose hero field starts pre-filled, as with `--search`.
    pub fn with_initial_query(query: &str) -> Self {
        Self::build(100, 30, PageContent::default(), Some(query.to_string()))
    }

    fn build(width: u16, height: u16, content: PageContent, initial_query: Option<String>) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let sink = RecordingSink::default();
        let options = RunOptions {
            theme: Theme::default(),
            content,
            sink: Box::new(sink.clone()),
            initial_query,
        };
        let mut harness = Self {
            app: TuiApp::new_for_test(terminal, options),
            sink,
            running: true,
        };
        harness.render();
        harness
    }

    /// Run one turn with `events`.
    ///
    /// Returns true if the app quit during the turn.
    pub fn send_turn(&mut self, events: Vec<Event>) -> bool {
        if !self.running {
            return true;
        }
        let quit = self
            .app
            .turn_test(events)
            .expect("drawing to TestBackend should not fail");
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a single key as its own turn.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.send_turn(vec![key_event(key, mods)])
    }

    /// Type text, one turn per character.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Move focus to `focus` with Tab presses.
    pub fn focus(&mut self, focus: Focus) {
        for _ in 0..Focus::ORDER.len() {
            if self.state().focus() == focus {
                return;
            }
            self.send_key(KeyCode::Tab);
        }
    }

    /// Screen-space rect of the control named by `focus`, at the current scroll.
    pub fn screen_rect(&self, focus: Focus) -> Rect {
        let area = self.app.page_layout().focus_area(focus);
        Rect {
            y: area.y.saturating_sub(self.state().scroll()),
            ..area
        }
    }

    /// Left click event at the center of `focus`.
    pub fn click_event(&self, focus: Focus) -> Event {
        let rect = self.screen_rect(focus);
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Click the control named by `focus` as its own turn.
    pub fn click(&mut self, focus: Focus) {
        let event = self.click_event(focus);
        self.send_turn(vec![event]);
    }

    /// Scroll the mouse wheel as its own turn.
    pub fn wheel(&mut self, down: bool) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.send_turn(vec![Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })]);
    }

    /// Draw a frame without handling any event.
    pub fn render(&mut self) {
        self.send_turn(Vec::new());
    }

    /// Text currently on screen, empty rows dropped.
    pub fn screen_text(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    pub fn state(&self) -> &PageState {
        self.app.page_state()
    }

    /// Accessibility attributes of the search field of `form`.
    pub fn aria(&self, form: FormId) -> AriaAttributes {
        search_props(form).aria(self.state().form(form).state())
    }

    /// Events the sink accepted so far.
    pub fn submissions(&self) -> Vec<SubmissionEvent> {
        self.sink.events()
    }

    pub fn sink(&self) -> &RecordingSink {
        &self.sink
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Key press event.
pub fn key_event(code: KeyCode, mods: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, mods))
}
