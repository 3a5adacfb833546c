//! Footer: link sections and copyright block.

use super::constants::{FOOTER_COLUMN_WIDTH, FOOTER_COPYRIGHT_WIDTH, FOOTER_PADDING};
use super::logo::MiniLogo;
use super::theme::{Spacing, Theme};
use crate::model::{FooterSection, PageContent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Subtitle shown above a section's contact links.
pub const CONTACT_SUBTITLE: &str = "Contact Us";

fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Rows a footer section needs: title, gap, links, and the contact block.
pub fn section_height(section: &FooterSection) -> u16 {
    let mut height = rows(section.links.len()).saturating_add(2);
    if !section.contact.is_empty() {
        height = height.saturating_add(rows(section.contact.len()).saturating_add(2));
    }
    height
}

/// Rows the copyright block needs: mini logo, gap, text lines.
pub fn copyright_height(copyright: &[String]) -> u16 {
    rows(copyright.len()).saturating_add(2)
}

/// Footer rects in page coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLayout {
    /// Rows covered by the footer, including padding.
    pub area: Rect,
    /// One rect per section, in content order.
    pub sections: Vec<Rect>,
    /// Copyright block.
    pub copyright: Rect,
}

impl FooterLayout {
    /// Lay out the footer at row `y`.
    ///
    /// Wide pages put every section in one row with the copyright block
    /// bottom-aligned at the right. Narrower pages wrap sections into a grid
    /// and put the copyright block underneath.
    pub fn compute(y: u16, width: u16, content: &PageContent, spacing: Spacing) -> Self {
        let inner_x = spacing.inline * 2;
        let inner_width = width.saturating_sub(inner_x * 2);
        let top = y.saturating_add(FOOTER_PADDING);
        let count = rows(content.footer.len());
        let copyright_rows = copyright_height(&content.copyright);

        let one_row_width = count
            .saturating_mul(FOOTER_COLUMN_WIDTH)
            .saturating_add(FOOTER_COPYRIGHT_WIDTH);

        let (sections, copyright, content_height) = if inner_width >= one_row_width {
            let height = content
                .footer
                .iter()
                .map(section_height)
                .max()
                .unwrap_or(0);
            let sections = (0..count)
                .map(|i| {
                    Rect::new(
                        inner_x + i * FOOTER_COLUMN_WIDTH,
                        top,
                        FOOTER_COLUMN_WIDTH,
                        height,
                    )
                })
                .collect();
            let content_height = height.max(copyright_rows);
            let copyright = Rect::new(
                inner_x + inner_width - FOOTER_COPYRIGHT_WIDTH,
                top.saturating_add(content_height - copyright_rows),
                FOOTER_COPYRIGHT_WIDTH,
                copyright_rows,
            );
            (sections, copyright, content_height)
        } else {
            let columns = (inner_width / FOOTER_COLUMN_WIDTH).clamp(1, count.max(1));
            let column_width = inner_width / columns;
            let mut sections = Vec::with_capacity(content.footer.len());
            let mut row_y = top;
            for row in content.footer.chunks(usize::from(columns)) {
                let height = row.iter().map(section_height).max().unwrap_or(0);
                for (index, _) in row.iter().enumerate() {
                    let column = rows(index);
                    sections.push(Rect::new(
                        inner_x + column * column_width,
                        row_y,
                        column_width,
                        height,
                    ));
                }
                row_y = row_y.saturating_add(height).saturating_add(1);
            }
            let copyright = Rect::new(inner_x, row_y, inner_width, copyright_rows);
            (sections, copyright, (row_y - top).saturating_add(copyright_rows))
        };

        let area = Rect::new(0, y, width, content_height.saturating_add(FOOTER_PADDING * 2));
        Self {
            area,
            sections,
            copyright,
        }
    }
}

/// Footer widget.
pub struct Footer<'a> {
    layout: &'a FooterLayout,
    content: &'a PageContent,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    /// Footer widget for `content` laid out by `layout`.
    pub fn new(layout: &'a FooterLayout, content: &'a PageContent, theme: &'a Theme) -> Self {
        Self {
            layout,
            content,
            theme,
        }
    }

    fn section_lines(&self, section: &'a FooterSection) -> Vec<Line<'a>> {
        let heading = self.theme.heading();
        let mut lines = vec![
            Line::styled(section.title.as_str(), heading),
            Line::default(),
        ];
        lines.extend(section.links.iter().map(|link| Line::from(link.label.as_str())));
        if !section.contact.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(
                CONTACT_SUBTITLE,
                heading.add_modifier(Modifier::ITALIC),
            ));
            lines.extend(
                section
                    .contact
                    .iter()
                    .map(|link| Line::from(link.label.as_str())),
            );
        }
        lines
    }
}

impl Widget for Footer<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let surface = self.theme.inverse_surface();
        Block::new().style(surface).render(self.layout.area, buf);

        for (section, rect) in self.content.footer.iter().zip(&self.layout.sections) {
            Paragraph::new(self.section_lines(section))
                .style(surface)
                .render(*rect, buf);
        }

        let copyright = self.layout.copyright;
        MiniLogo::new(self.theme).render(Rect { height: 1, ..copyright }, buf);
        let text = Rect {
            y: copyright.y + 2,
            height: copyright.height.saturating_sub(2),
            ..copyright
        };
        let lines: Vec<Line> = self
            .content
            .copyright
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        Paragraph::new(lines)
            .style(surface.add_modifier(Modifier::DIM))
            .render(text, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::buffer_to_string;

    #[test]
    fn section_height_includes_contact_block() {
        let content = PageContent::default();
        let company = content
            .footer
            .iter()
            .find(|s| !s.contact.is_empty())
            .expect("default footer has a contact section");

        assert_eq!(
            section_height(company),
            2 + company.links.len() as u16 + 2 + company.contact.len() as u16
        );
    }

    #[test]
    fn wide_footer_puts_sections_in_one_row() {
        let content = PageContent::default();
        let layout = FooterLayout::compute(50, 140, &content, Spacing::default());

        assert_eq!(layout.sections.len(), content.footer.len());
        assert!(layout.sections.iter().all(|r| r.y == 50 + FOOTER_PADDING));
        assert!(layout.sections.last().unwrap().right() <= layout.copyright.x);
        assert_eq!(layout.copyright.bottom() + FOOTER_PADDING, layout.area.bottom());
    }

    #[test]
    fn narrow_footer_wraps_sections_and_moves_copyright_below() {
        let content = PageContent::default();
        let layout = FooterLayout::compute(0, 60, &content, Spacing::default());

        let bottom = layout.sections.iter().map(|r| r.bottom()).max().unwrap();
        assert!(layout.copyright.y >= bottom);
        assert!(layout.sections.iter().any(|r| r.y > layout.sections[0].y));
        assert!(layout.area.bottom() >= layout.copyright.bottom());
    }

    #[test]
    fn footer_renders_titles_contact_and_copyright() {
        let theme = Theme::default();
        let content = PageContent::default();
        let layout = FooterLayout::compute(0, 140, &content, Spacing::default());
        let mut buf = Buffer::empty(layout.area);

        Footer::new(&layout, &content, &theme).render(layout.area, &mut buf);

        let text = buffer_to_string(&buf);
        for section in &content.footer {
            assert!(text.contains(&section.title), "missing {}", section.title);
        }
        assert!(text.contains(CONTACT_SUBTITLE));
        assert!(text.contains("info@goabstract.com"));
        assert!(text.contains("© Copyright 2025"));
    }
}
