//! Button widget.

use super::constants::CONTROL_HEIGHT;
use super::text::display_width;
use super::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the primary brand color.
    #[default]
    Primary,
    /// Outlined on dark surfaces.
    Secondary,
}

/// Button size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Single row, padded label.
    #[default]
    Md,
    /// Bordered box, `CONTROL_HEIGHT` rows.
    Lg,
}

impl ButtonSize {
    /// Rows the button occupies.
    pub fn height(self) -> u16 {
        match self {
            ButtonSize::Md => 1,
            ButtonSize::Lg => CONTROL_HEIGHT,
        }
    }
}

/// Columns a button with `label` occupies.
///
/// Both sizes add four columns: padding for `Md`, border plus padding for `Lg`.
pub fn button_width(label: &str) -> u16 {
    display_width(label).saturating_add(4)
}

/// Clickable button.
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    /// Primary `Md` button, unfocused.
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            focused: false,
            theme,
        }
    }

    /// Set the color variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Draw the focus highlight.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn fill_style(&self) -> Style {
        if self.focused {
            return self.theme.focused();
        }
        let palette = self.theme.palette();
        match self.variant {
            ButtonVariant::Primary => self.theme.fg_bg(palette.white, palette.primary),
            ButtonVariant::Secondary => self.theme.fg_bg(palette.white, palette.black),
        }
    }

    fn border_style(&self) -> Style {
        let palette = self.theme.palette();
        match (self.focused, self.variant) {
            (true, _) => self.theme.focused(),
            // Border blends into the fill
            (false, ButtonVariant::Primary) => self.theme.fg(palette.primary),
            (false, ButtonVariant::Secondary) => self.theme.fg(palette.white),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.fill_style();
        match self.size {
            ButtonSize::Lg => {
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.border_style())
                    .style(style);
                Paragraph::new(self.label)
                    .alignment(Alignment::Center)
                    .block(block)
                    .render(area, buf);
            }
            ButtonSize::Md => {
                Paragraph::new(self.label)
                    .alignment(Alignment::Center)
                    .style(style)
                    .render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::buffer_to_string;
    use ratatui::style::Modifier;

    #[test]
    fn width_adds_four_columns_to_label() {
        assert_eq!(button_width("Sign In"), 11);
        assert_eq!(button_width(""), 4);
    }

    #[test]
    fn large_button_renders_bordered_label() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, button_width("Sign In"), ButtonSize::Lg.height());
        let mut buf = Buffer::empty(area);

        Button::new("Sign In", &theme)
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Lg)
            .render(area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ╭─────────╮
        │ Sign In │
        ╰─────────╯
        ");
    }

    #[test]
    fn medium_button_centers_label_on_one_row() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);

        Button::new("Sign In", &theme).render(area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "  Sign In");
    }

    #[test]
    fn focused_button_uses_focus_style() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        Button::new("Go", &theme).focused(true).render(area, &mut buf);

        assert!(buf[(4, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(4, 0)].bg, theme.palette().white);
    }
}
