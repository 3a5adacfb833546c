//! Page-level application state.
//!
//! Holds the two independent search forms, keyboard focus, the vertical
//! scroll position, and the acknowledgement notice shown after an accepted
//! search. Pure state: rendering and terminal I/O live in `view`.

use super::form_host::{FormHost, SubmitTrigger};
use super::search_controller::SubmitOutcome;
use super::sink::QuerySink;
use crate::model::{FormId, PageContent, SubmissionEvent};

// ===== Focus =====

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Compact search field in the header.
    #[default]
    HeaderSearch,
    /// "Submit a request" button.
    SubmitRequest,
    /// "Sign In" button.
    SignIn,
    /// Large search field in the hero section.
    HeroSearch,
}

impl Focus {
    /// Tab order.
    pub const ORDER: [Focus; 4] = [
        Focus::HeaderSearch,
        Focus::SubmitRequest,
        Focus::SignIn,
        Focus::HeroSearch,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Next control, wrapping at the end.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping at the start.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The search form whose text field this is, if any.
    pub fn text_field(self) -> Option<FormId> {
        match self {
            Focus::HeaderSearch => Some(FormId::Header),
            Focus::HeroSearch => Some(FormId::Hero),
            Focus::SubmitRequest | Focus::SignIn => None,
        }
    }
}

// ===== Notice =====

/// Acknowledgement shown after an accepted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The accepted query.
    pub query: String,
    /// Titles of cards matching the query.
    pub matching_cards: Vec<String>,
}

impl Notice {
    /// Headline text, e.g. `Search: billing`.
    pub fn headline(&self) -> String {
        format!("Search: {}", self.query)
    }
}

// ===== Viewport =====

/// Visible window onto the laid-out page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Terminal rows available for the page.
    pub height: u16,
    /// Total rows of the laid-out page.
    pub page_height: u16,
}

impl Viewport {
    /// Viewport `height` rows tall over a page `page_height` rows tall.
    pub fn new(height: u16, page_height: u16) -> Self {
        Self {
            height,
            page_height,
        }
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(self) -> u16 {
        self.page_height.saturating_sub(self.height)
    }
}

// ===== PageState =====

/// State of the whole help-center page.
#[derive(Debug, Clone)]
pub struct PageState {
    content: PageContent,
    header: FormHost,
    hero: FormHost,
    focus: Focus,
    /// First page row shown at the top of the terminal.
    scroll: u16,
    notice: Option<Notice>,
    /// Set when focus moved and the focused control should be scrolled into view.
    reveal_focus: bool,
}

impl PageState {
    /// Page with both forms empty and focus on the header search.
    pub fn new(content: PageContent) -> Self {
        Self {
            content,
            header: FormHost::new(FormId::Header),
            hero: FormHost::new(FormId::Hero),
            focus: Focus::default(),
            scroll: 0,
            notice: None,
            reveal_focus: false,
        }
    }

    /// Cards and footer shown on the page.
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// Host of the given search form.
    pub fn form(&self, form: FormId) -> &FormHost {
        match form {
            FormId::Header => &self.header,
            FormId::Hero => &self.hero,
        }
    }

    /// Mutable host of the given search form.
    pub fn form_mut(&mut self, form: FormId) -> &mut FormHost {
        match form {
            FormId::Header => &mut self.header,
            FormId::Hero => &mut self.hero,
        }
    }

    /// Form whose text field currently has focus.
    pub fn focused_form_mut(&mut self) -> Option<&mut FormHost> {
        self.focus.text_field().map(|form| self.form_mut(form))
    }

    /// Focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Focus `focus` and scroll it into view on the next draw.
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.reveal_focus = true;
        }
    }

    /// Move focus to the next control, wrapping around.
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Move focus to the previous control, wrapping around.
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Consume the pending "scroll focus into view" request.
    pub fn take_reveal_focus(&mut self) -> bool {
        std::mem::take(&mut self.reveal_focus)
    }

    /// First visible page row.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Set the scroll offset, clamped to the page.
    pub fn set_scroll(&mut self, scroll: u16, viewport: Viewport) {
        self.scroll = scroll.min(viewport.max_scroll());
    }

    /// Scroll the minimum amount so rows `top..bottom` are visible.
    pub fn scroll_into_view(&mut self, top: u16, bottom: u16, viewport: Viewport) {
        if top < self.scroll {
            self.set_scroll(top, viewport);
        } else if bottom > self.scroll.saturating_add(viewport.height) {
            self.set_scroll(bottom.saturating_sub(viewport.height), viewport);
        }
    }

    /// Acknowledgement currently showing, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Close the acknowledgement.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Submit `form` and open the acknowledgement notice if the query was accepted.
    pub fn submit(
        &mut self,
        form: FormId,
        trigger: SubmitTrigger,
        sink: &mut dyn QuerySink,
    ) -> SubmitOutcome {
        let outcome = self.form_mut(form).submit(trigger, sink);
        if let Some(event) = outcome.accepted() {
            self.notice = Some(self.acknowledge(event));
        }
        outcome
    }

    fn acknowledge(&self, event: &SubmissionEvent) -> Notice {
        Notice {
            query: event.normalized_value.clone(),
            matching_cards: self
                .content
                .search_cards(&event.normalized_value)
                .into_iter()
                .map(|card| card.title.clone())
                .collect(),
        }
    }

    /// Return both forms to idle. Called after every drawn frame.
    pub fn settle_forms(&mut self) {
        self.header.settle();
        self.hero.settle();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "page_state_tests.rs"]
mod tests;
