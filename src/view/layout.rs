//! Full-page layout, hit testing, and off-screen page rendering.
//!
//! The page is laid out at its full height regardless of terminal size. It is
//! rendered into an off-screen buffer and the visible window starting at the
//! scroll offset is copied to the frame.

use super::card::{CardStack, CardStackLayout};
use super::constants::TOOLTIP_HEIGHT;
use super::footer::{Footer, FooterLayout};
use super::header::{Header, HeaderLayout};
use super::hero::{Hero, HeroLayout};
use super::theme::Theme;
use crate::model::PageContent;
use crate::state::{Focus, PageState};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

/// Positions of every page section in page coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width in columns.
    pub width: u16,
    /// Header section.
    pub header: HeaderLayout,
    /// Hero section.
    pub hero: HeroLayout,
    /// Card stack.
    pub cards: CardStackLayout,
    /// Footer.
    pub footer: FooterLayout,
}

impl PageLayout {
    /// Lay out the page for a terminal `width` columns wide.
    pub fn compute(width: u16, content: &PageContent, theme: &Theme) -> Self {
        let spacing = theme.spacing();
        let header = HeaderLayout::compute(0, width, spacing);
        let hero = HeroLayout::compute(header.area.bottom(), width, spacing);
        let cards = CardStackLayout::compute(hero.area.bottom(), width, &content.cards);
        let footer = FooterLayout::compute(cards.area.bottom(), width, content, spacing);
        Self {
            width,
            header,
            hero,
            cards,
            footer,
        }
    }

    /// Total page height in rows.
    pub fn height(&self) -> u16 {
        self.footer.area.bottom()
    }

    /// Rect covering the whole page.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height())
    }

    /// Rect of the control that `focus` names.
    pub fn focus_area(&self, focus: Focus) -> Rect {
        match focus {
            Focus::HeaderSearch => self.header.search,
            Focus::SubmitRequest => self.header.submit,
            Focus::SignIn => self.header.sign_in,
            Focus::HeroSearch => self.hero.search,
        }
    }

    /// Rows `top..bottom` that must be visible to show `focus`.
    ///
    /// Text fields include the tooltip rows above them.
    pub fn focus_rows(&self, focus: Focus) -> (u16, u16) {
        let area = self.focus_area(focus);
        let top = match focus.text_field() {
            Some(_) => area.y.saturating_sub(TOOLTIP_HEIGHT),
            None => area.y,
        };
        (top, area.bottom())
    }

    /// Focusable control at page position (`x`, `y`), if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Focus> {
        let position = Position::new(x, y);
        Focus::ORDER
            .into_iter()
            .find(|&focus| self.focus_area(focus).contains(position))
    }
}

/// Render every page section into `buf`, which must cover `layout.area()`.
pub fn render_page(buf: &mut Buffer, layout: &PageLayout, state: &PageState, theme: &Theme) {
    let content = state.content();
    Header::new(&layout.header, state, theme).render(layout.header.area, buf);
    Hero::new(&layout.hero, state, theme).render(layout.hero.area, buf);
    CardStack::new(&layout.cards, &content.cards, theme).render(layout.cards.area, buf);
    Footer::new(&layout.footer, content, theme).render(layout.footer.area, buf);
}

/// Copy page rows starting at `scroll` into `target` over `area`.
///
/// Rows past the end of the page are left untouched.
pub fn blit(page: &Buffer, scroll: u16, target: &mut Buffer, area: Rect) {
    let page_area = page.area;
    let width = area.width.min(page_area.width);
    for row in 0..area.height {
        let page_y = scroll.saturating_add(row);
        if page_y >= page_area.bottom() {
            break;
        }
        for col in 0..width {
            target[(area.x + col, area.y + row)] = page[(page_area.x + col, page_y)].clone();
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
