//! TUI rendering and terminal management (impure shell)

pub mod button;
pub mod card;
pub mod constants;
pub mod footer;
pub mod header;
pub mod hero;
pub mod input;
pub mod layout;
pub mod logo;
pub mod notice;
mod text;
pub mod theme;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardStack, CardStackLayout};
pub use input::{
    accessible_description, search_props, AriaAttributes, ErrorTooltip, InputProps, InputSize,
    ValidatedTextInput,
};
pub use layout::{render_page, PageLayout};
pub use logo::{Logo, MiniLogo};
pub use notice::NoticeView;
pub use theme::{ColorConfig, Theme, ThemeName};

use crate::config::KeyBindings;
use crate::model::{FormId, KeyAction, PageContent};
use crate::state::{
    scroll_handler, Focus, PageState, QuerySink, SubmitOutcome, SubmitTrigger, TextEdit, Viewport,
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Everything the shell needs to start.
pub struct RunOptions {
    /// Theme used for every widget.
    pub theme: Theme,
    /// Cards and footer to show.
    pub content: PageContent,
    /// Receives every accepted search.
    pub sink: Box<dyn QuerySink>,
    /// Pre-filled hero query. Validated only when submitted.
    pub initial_query: Option<String>,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    page: PageState,
    theme: Theme,
    key_bindings: KeyBindings,
    sink: Box<dyn QuerySink>,
    /// Layout of the last drawn frame (for mouse hit testing)
    layout: PageLayout,
    viewport: Viewport,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(options: RunOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::from_parts(terminal, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on the first event, then
    /// drains every event already queued so they form a single turn.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let mut batch = vec![event::read()?];
            while event::poll(Duration::ZERO)? {
                batch.push(event::read()?);
            }
            if self.turn(batch)? {
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn from_parts(terminal: Terminal<B>, options: RunOptions) -> Self {
        let mut page = PageState::new(options.content);
        if let Some(query) = options.initial_query {
            page.form_mut(FormId::Hero).set_value(query);
            page.set_focus(Focus::HeroSearch);
        }

        let theme = options.theme;
        let width = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80,
        };
        let height = terminal.size().map(|size| size.height).unwrap_or(24);
        let layout = PageLayout::compute(width, page.content(), &theme);
        let viewport = Viewport::new(height, layout.height());

        Self {
            terminal,
            page,
            theme,
            key_bindings: KeyBindings::default(),
            sink: options.sink,
            layout,
            viewport,
        }
    }

    /// Handle one batch of events, then draw and settle the forms.
    ///
    /// Returns true if app should quit. Nothing is drawn after a quit.
    fn turn(&mut self, events: impl IntoIterator<Item = Event>) -> Result<bool, TuiError> {
        for event in events {
            let quit = match event {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    false
                }
                // Resize is picked up by the draw below
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        self.draw()?;
        Ok(false)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = self.key_bindings.get(key);

        // The notice swallows everything except its dismiss keys
        if self.page.notice().is_some() {
            if matches!(
                action,
                Some(KeyAction::Activate) | Some(KeyAction::DismissNotice)
            ) {
                self.page.dismiss_notice();
            }
            return false;
        }

        if let Some(edit) = text_edit_for(key) {
            if let Some(host) = self.page.focused_form_mut() {
                host.edit(edit);
                return false;
            }
        }

        let Some(action) = action else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::FocusNext => self.page.focus_next(),
            KeyAction::FocusPrev => self.page.focus_prev(),
            KeyAction::Activate => {
                self.activate(self.page.focus(), SubmitTrigger::EnterKey);
            }
            KeyAction::DismissNotice => {}
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                scroll_handler::handle_scroll_action(&mut self.page, action, self.viewport);
            }
        }

        false
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.page.notice().is_some() {
                    return;
                }
                let page_row = self.page.scroll().saturating_add(mouse.row);
                let Some(focus) = self.layout.hit_test(mouse.column, page_row) else {
                    return;
                };
                self.page.set_focus(focus);
                if focus == Focus::SubmitRequest {
                    self.activate(focus, SubmitTrigger::Click);
                }
            }
            MouseEventKind::ScrollDown => {
                scroll_handler::handle_wheel(&mut self.page, true, self.viewport);
            }
            MouseEventKind::ScrollUp => {
                scroll_handler::handle_wheel(&mut self.page, false, self.viewport);
            }
            _ => {}
        }
    }

    /// Activate the control named by `focus`.
    fn activate(&mut self, focus: Focus, trigger: SubmitTrigger) -> SubmitOutcome {
        let form = match focus {
            Focus::HeaderSearch | Focus::SubmitRequest => FormId::Header,
            Focus::HeroSearch => FormId::Hero,
            Focus::SignIn => {
                debug!("Sign In activated");
                return SubmitOutcome::Ignored;
            }
        };
        let trigger = match (focus, trigger) {
            (Focus::SubmitRequest, SubmitTrigger::EnterKey) => SubmitTrigger::SubmitButton,
            (_, trigger) => trigger,
        };
        self.page.submit(form, trigger, self.sink.as_mut())
    }

    /// Render the current frame
    ///
    /// Lays out the full page off-screen, copies the scrolled window to the
    /// terminal, overlays the notice, then settles both forms.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let width = size.width.max(1); // Guard against zero width
        self.layout = PageLayout::compute(width, self.page.content(), &self.theme);
        self.viewport = Viewport::new(size.height, self.layout.height());

        let scroll = self.page.scroll();
        self.page.set_scroll(scroll, self.viewport);
        if self.page.take_reveal_focus() {
            let (top, bottom) = self.layout.focus_rows(self.page.focus());
            self.page.scroll_into_view(top, bottom, self.viewport);
        }

        let mut page_buf = Buffer::empty(self.layout.area());
        render_page(&mut page_buf, &self.layout, &self.page, &self.theme);

        let page = &self.page;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            let area = frame.area();
            layout::blit(&page_buf, page.scroll(), frame.buffer_mut(), area);
            if let Some(notice) = page.notice() {
                let notice_area = notice::notice_area(notice, area, theme);
                frame.render_widget(NoticeView::new(notice, theme), notice_area);
            }
        })?;

        self.page.settle_forms();
        Ok(())
    }
}

/// Text edit a key performs inside a focused text field, if any.
fn text_edit_for(key: KeyEvent) -> Option<TextEdit> {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if !plain {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(TextEdit::Insert(c)),
        KeyCode::Backspace => Some(TextEdit::Backspace),
        KeyCode::Delete => Some(TextEdit::Delete),
        KeyCode::Left => Some(TextEdit::CursorLeft),
        KeyCode::Right => Some(TextEdit::CursorRight),
        KeyCode::Home => Some(TextEdit::Home),
        KeyCode::End => Some(TextEdit::End),
        _ => None,
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips raw mode and alternate screen setup.
    pub(crate) fn new_for_test(terminal: Terminal<B>, options: RunOptions) -> Self {
        Self::from_parts(terminal, options)
    }

    /// Process `events` as one turn (test-only accessor)
    pub(crate) fn turn_test(&mut self, events: Vec<Event>) -> Result<bool, TuiError> {
        self.turn(events)
    }

    pub(crate) fn page_state(&self) -> &PageState {
        &self.page
    }

    pub(crate) fn page_layout(&self) -> &PageLayout {
        &self.layout
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_options(options: RunOptions) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(options) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
