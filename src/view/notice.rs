//! Acknowledgement overlay shown after an accepted search.
//!
//! Shows a centered modal with the accepted query and the cards that match it.
//! Dismissed by Enter or Esc.

use super::constants::{NOTICE_MAX_MATCHES, NOTICE_MAX_WIDTH};
use super::text::wrap_text;
use super::theme::Theme;
use crate::state::Notice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

/// Border title of the notice.
pub const NOTICE_TITLE: &str = " Search ";
/// Hint shown on the bottom border.
pub const NOTICE_HINT: &str = " Press Enter or Esc to close ";
/// Shown when no card matches the query.
pub const NO_MATCHES_TEXT: &str = "No matching articles.";
/// Heading above the matching card titles.
pub const MATCHES_HEADING: &str = "Matching articles:";

/// Columns taken by the border and inner padding.
const CHROME_WIDTH: u16 = 4;

/// Body lines of `notice` wrapped to `width` columns.
fn body_lines(notice: &Notice, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = wrap_text(&notice.headline(), width)
        .into_iter()
        .map(|line| Line::styled(line, theme.heading()))
        .collect();
    lines.push(Line::default());

    if notice.matching_cards.is_empty() {
        lines.push(Line::from(NO_MATCHES_TEXT));
        return lines;
    }

    lines.push(Line::from(MATCHES_HEADING));
    for title in notice.matching_cards.iter().take(NOTICE_MAX_MATCHES) {
        lines.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(title.clone(), theme.link()),
        ]));
    }
    let hidden = notice.matching_cards.len().saturating_sub(NOTICE_MAX_MATCHES);
    if hidden > 0 {
        lines.push(Line::styled(
            format!("…and {hidden} more"),
            theme.placeholder(),
        ));
    }
    lines
}

/// Centered rect for `notice` inside `frame`.
pub fn notice_area(notice: &Notice, frame: Rect, theme: &Theme) -> Rect {
    let width = NOTICE_MAX_WIDTH.min(frame.width.saturating_sub(4)).max(1);
    let body = u16::try_from(body_lines(notice, width.saturating_sub(CHROME_WIDTH), theme).len())
        .unwrap_or(u16::MAX);
    // Border rows plus one blank row above the bottom border
    let height = body.saturating_add(3).min(frame.height);
    let x = frame.x + (frame.width.saturating_sub(width)) / 2;
    let y = frame.y + (frame.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Acknowledgement overlay widget.
pub struct NoticeView<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> NoticeView<'a> {
    /// Overlay widget for `notice`.
    pub fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = body_lines(
            self.notice,
            area.width.saturating_sub(CHROME_WIDTH),
            self.theme,
        );
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(NOTICE_TITLE)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.link())
                    .padding(Padding::horizontal(1)),
            )
            .alignment(Alignment::Left)
            .render(area, buf);

        // Dismissal hint on the bottom border
        let hint_area = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(Span::styled(
            NOTICE_HINT,
            self.theme.placeholder().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}
