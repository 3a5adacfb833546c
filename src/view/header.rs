//! Header band: logo, header search field, and action buttons.

use super::button::{button_width, Button, ButtonSize, ButtonVariant};
use super::constants::{CONTROL_HEIGHT, HEADER_HEIGHT, HEADER_SEARCH_WIDTH, TOOLTIP_HEIGHT};
use super::input::{render_field, search_props, ValidatedTextInput};
use super::logo::Logo;
use super::theme::{Spacing, Theme};
use crate::model::FormId;
use crate::state::{Focus, PageState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Widget},
};

/// Label of the header submit button.
pub const SUBMIT_REQUEST_LABEL: &str = "Submit a request";
/// Label of the sign-in button.
pub const SIGN_IN_LABEL: &str = "Sign In";

/// Rects of the header and its controls in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Rows covered by the header.
    pub area: Rect,
    /// Logo link.
    pub logo: Rect,
    /// Search field.
    pub search: Rect,
    /// "Submit a request" button.
    pub submit: Rect,
    /// "Sign In" button.
    pub sign_in: Rect,
}

impl HeaderLayout {
    /// Lay out the header at row `y` on a page `width` columns wide.
    pub fn compute(y: u16, width: u16, spacing: Spacing) -> Self {
        let area = Rect::new(0, y, width, HEADER_HEIGHT);
        let row = Rect::new(
            spacing.inline,
            y + TOOLTIP_HEIGHT,
            width.saturating_sub(spacing.inline * 2),
            CONTROL_HEIGHT,
        );

        let [logo, _, search, _, submit, _, sign_in] = Layout::horizontal([
            Constraint::Length(Logo::width()),
            Constraint::Fill(1),
            Constraint::Length(HEADER_SEARCH_WIDTH),
            Constraint::Length(spacing.gap),
            Constraint::Length(button_width(SUBMIT_REQUEST_LABEL)),
            Constraint::Length(spacing.gap),
            Constraint::Length(button_width(SIGN_IN_LABEL)),
        ])
        .areas(row);

        // Logo text sits on the middle row of the controls
        let logo = Rect {
            y: row.y + CONTROL_HEIGHT / 2,
            height: 1,
            ..logo
        };

        Self {
            area,
            logo,
            search,
            submit,
            sign_in,
        }
    }
}

/// Header band widget.
pub struct Header<'a> {
    layout: &'a HeaderLayout,
    state: &'a PageState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Header widget for `state` laid out by `layout`.
    pub fn new(layout: &'a HeaderLayout, state: &'a PageState, theme: &'a Theme) -> Self {
        Self {
            layout,
            state,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let layout = self.layout;
        let focus = self.state.focus();

        Block::new()
            .style(self.theme.inverse_surface())
            .render(layout.area, buf);
        Logo::new(self.theme).render(layout.logo, buf);

        let props = search_props(FormId::Header);
        let host = self.state.form(FormId::Header);
        let input = ValidatedTextInput::new(&props, host.state(), self.theme)
            .cursor(host.cursor())
            .focused(focus == Focus::HeaderSearch);
        render_field(input, layout.search, layout.area, buf);

        Button::new(SUBMIT_REQUEST_LABEL, self.theme)
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Lg)
            .focused(focus == Focus::SubmitRequest)
            .render(layout.submit, buf);
        Button::new(SIGN_IN_LABEL, self.theme)
            .variant(ButtonVariant::Primary)
            .size(ButtonSize::Lg)
            .focused(focus == Focus::SignIn)
            .render(layout.sign_in, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_header_keeps_preferred_control_widths() {
        let layout = HeaderLayout::compute(0, 120, Spacing::default());

        assert_eq!(layout.area, Rect::new(0, 0, 120, HEADER_HEIGHT));
        assert_eq!(layout.search.width, HEADER_SEARCH_WIDTH);
        assert_eq!(layout.submit.width, button_width(SUBMIT_REQUEST_LABEL));
        assert_eq!(layout.sign_in.width, button_width(SIGN_IN_LABEL));
        assert_eq!(layout.sign_in.right(), 118);
    }

    #[test]
    fn controls_sit_below_the_tooltip_rows() {
        let layout = HeaderLayout::compute(0, 120, Spacing::default());
        assert_eq!(layout.search.y, TOOLTIP_HEIGHT);
        assert_eq!(layout.search.height, CONTROL_HEIGHT);
        assert_eq!(layout.logo.y, TOOLTIP_HEIGHT + 1);
    }

    #[test]
    fn controls_do_not_overlap() {
        let layout = HeaderLayout::compute(0, 120, Spacing::default());
        assert!(layout.logo.right() <= layout.search.x);
        assert!(layout.search.right() <= layout.submit.x);
        assert!(layout.submit.right() <= layout.sign_in.x);
    }
}
