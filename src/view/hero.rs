//! Hero band: page title and the main search field.

use super::constants::{
    CONTROL_HEIGHT, HERO_HEIGHT, HERO_TITLE_OFFSET, TOOLTIP_HEIGHT, XL_INPUT_MAX_WIDTH,
};
use super::input::{render_field, search_props, ValidatedTextInput};
use super::theme::{Spacing, Theme};
use crate::model::FormId;
use crate::state::{Focus, PageState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph, Widget},
};

/// Heading of the hero section.
pub const HERO_TITLE: &str = "How can we help?";

/// Rects of the hero band in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroLayout {
    /// Rows covered by the hero section.
    pub area: Rect,
    /// Heading row.
    pub title: Rect,
    /// Search field.
    pub search: Rect,
}

impl HeroLayout {
    /// Lay out the hero at row `y` on a page `width` columns wide.
    pub fn compute(y: u16, width: u16, spacing: Spacing) -> Self {
        let area = Rect::new(0, y, width, HERO_HEIGHT);
        let title = Rect::new(0, y + HERO_TITLE_OFFSET, width, 1);

        let search_width = width
            .saturating_sub(spacing.inline * 2)
            .min(XL_INPUT_MAX_WIDTH);
        // Blank row under the title, then the tooltip rows
        let search_y = title.y + 1 + spacing.block + TOOLTIP_HEIGHT;
        let search = Rect::new(
            (width - search_width) / 2,
            search_y,
            search_width,
            CONTROL_HEIGHT,
        );

        Self {
            area,
            title,
            search,
        }
    }
}

/// Hero band widget.
pub struct Hero<'a> {
    layout: &'a HeroLayout,
    state: &'a PageState,
    theme: &'a Theme,
}

impl<'a> Hero<'a> {
    /// Hero widget for `state` laid out by `layout`.
    pub fn new(layout: &'a HeroLayout, state: &'a PageState, theme: &'a Theme) -> Self {
        Self {
            layout,
            state,
            theme,
        }
    }
}

impl Widget for Hero<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let layout = self.layout;

        Block::new()
            .style(self.theme.hero_surface())
            .render(layout.area, buf);
        Paragraph::new(HERO_TITLE)
            .alignment(Alignment::Center)
            .style(self.theme.heading())
            .render(layout.title, buf);

        let props = search_props(FormId::Hero);
        let host = self.state.form(FormId::Hero);
        let input = ValidatedTextInput::new(&props, host.state(), self.theme)
            .cursor(host.cursor())
            .focused(self.state.focus() == Focus::HeroSearch);
        render_field(input, layout.search, layout.area, buf);
    }
}
