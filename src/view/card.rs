//! Help-topic cards and the two-column card stack.

use super::constants::{CARD_COLUMN_GAP, CARD_MIN_WIDTH, CARD_ROW_GAP, CARD_STACK_WIDTH_PERCENT};
use super::text::wrap_text;
use super::theme::Theme;
use crate::model::CardContent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};

/// Columns taken by a card's border and inner padding.
const CARD_CHROME_WIDTH: u16 = 4;

/// Rows taken by a card's border.
const CARD_CHROME_HEIGHT: u16 = 2;

fn text_width(card_width: u16) -> u16 {
    card_width.saturating_sub(CARD_CHROME_WIDTH).max(1)
}

/// Rows needed to show `card` at `width` columns.
///
/// Title, blank line, description, blank line, link, plus the border.
pub fn card_height(card: &CardContent, width: u16) -> u16 {
    let inner = text_width(width);
    let title = wrap_text(&card.title, inner).len();
    let description = wrap_text(&card.description, inner).len();
    let rows = title + 1 + description + 1 + 1;
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(CARD_CHROME_HEIGHT)
}

/// A single help-topic card.
pub struct Card<'a> {
    card: &'a CardContent,
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    /// Card widget for `card`.
    pub fn new(card: &'a CardContent, theme: &'a Theme) -> Self {
        Self { card, theme }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = text_width(area.width);
        let mut lines: Vec<Line> = wrap_text(&self.card.title, inner)
            .into_iter()
            .map(|line| Line::styled(line, self.theme.heading()))
            .collect();
        lines.push(Line::default());
        lines.extend(wrap_text(&self.card.description, inner).into_iter().map(Line::from));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} →", self.card.link_text()),
            self.theme.link().add_modifier(Modifier::UNDERLINED),
        )));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.fg(self.theme.palette().border))
            .padding(Padding::horizontal(1));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

// ===== CardStack =====

/// Card rects in page coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStackLayout {
    /// Rows covered by the stack, including gaps.
    pub area: Rect,
    /// One rect per card, in content order.
    pub cards: Vec<Rect>,
}

impl CardStackLayout {
    /// Lay out `cards` starting at row `y` on a page `page_width` wide.
    ///
    /// Two columns when they fit at `CARD_MIN_WIDTH`, otherwise one. Cards in
    /// the same row share the height of the tallest.
    pub fn compute(y: u16, page_width: u16, cards: &[CardContent]) -> Self {
        let scaled = u32::from(page_width) * u32::from(CARD_STACK_WIDTH_PERCENT) / 100;
        let stack_width = u16::try_from(scaled)
            .unwrap_or(page_width)
            .max(CARD_MIN_WIDTH.min(page_width));
        let x = (page_width - stack_width) / 2;
        let columns: u16 = if stack_width >= CARD_MIN_WIDTH * 2 + CARD_COLUMN_GAP {
            2
        } else {
            1
        };
        let column_width = (stack_width - CARD_COLUMN_GAP * (columns - 1)) / columns;

        let mut rects = Vec::with_capacity(cards.len());
        let mut row_y = y.saturating_add(CARD_ROW_GAP);
        for row in cards.chunks(usize::from(columns)) {
            let height = row
                .iter()
                .map(|card| card_height(card, column_width))
                .max()
                .unwrap_or(0);
            for (index, _) in row.iter().enumerate() {
                // index < columns, which is at most 2
                let column = index as u16;
                rects.push(Rect::new(
                    x + column * (column_width + CARD_COLUMN_GAP),
                    row_y,
                    column_width,
                    height,
                ));
            }
            row_y = row_y.saturating_add(height).saturating_add(CARD_ROW_GAP);
        }

        // Trailing row gap doubles as bottom padding
        let area = Rect::new(0, y, page_width, row_y.saturating_sub(y));
        Self { area, cards: rects }
    }
}

/// All cards at their laid-out positions.
pub struct CardStack<'a> {
    layout: &'a CardStackLayout,
    cards: &'a [CardContent],
    theme: &'a Theme,
}

impl<'a> CardStack<'a> {
    /// Stack widget drawing `cards` at the rects in `layout`.
    pub fn new(layout: &'a CardStackLayout, cards: &'a [CardContent], theme: &'a Theme) -> Self {
        Self {
            layout,
            cards,
            theme,
        }
    }
}

impl Widget for CardStack<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        for (card, rect) in self.cards.iter().zip(&self.layout.cards) {
            Card::new(card, self.theme).render(*rect, buf);
        }
    }
}
