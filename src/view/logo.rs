//! Brand logo.

use super::text::display_width;
use super::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Where the logo links to.
pub const LOGO_HREF: &str = "https://www.goabstract.com";

/// Alternative text of the logo mark.
pub const LOGO_ALT: &str = "Logo";

/// The logo mark.
pub const LOGO_MARK: &str = "◩";

const BRAND: &str = "Abstract";
const PRODUCT: &str = "Help Center";
const DIVIDER: &str = " | ";

/// Full logo: mark, brand, divider, product name.
pub struct Logo<'a> {
    theme: &'a Theme,
}

impl<'a> Logo<'a> {
    /// Logo widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Plain text of the logo.
    pub fn text() -> String {
        format!("{LOGO_MARK} {BRAND}{DIVIDER}{PRODUCT}")
    }

    /// Columns the logo occupies.
    pub fn width() -> u16 {
        display_width(&Self::text())
    }
}

impl Widget for Logo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = self.theme.inverse_surface();
        let line = Line::from(vec![
            Span::styled(
                format!("{LOGO_MARK} {BRAND}"),
                surface.add_modifier(Modifier::BOLD),
            ),
            Span::styled(DIVIDER, surface.add_modifier(Modifier::DIM)),
            Span::styled(PRODUCT, surface),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// Logo mark alone, used in the footer.
pub struct MiniLogo<'a> {
    theme: &'a Theme,
}

impl<'a> MiniLogo<'a> {
    /// Mini logo widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for MiniLogo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(LOGO_MARK)
            .style(self.theme.inverse_surface().add_modifier(Modifier::BOLD))
            .render(area, buf);
    }
}
