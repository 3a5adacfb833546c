//! Tests for page layout, hit testing, and the scroll window copy.

use super::*;
use crate::view::buffer_to_string;

fn default_layout(width: u16) -> PageLayout {
    PageLayout::compute(width, &PageContent::default(), &Theme::default())
}

// ===== Section stacking =====

#[test]
fn sections_stack_without_gaps() {
    let layout = default_layout(100);

    assert_eq!(layout.header.area.y, 0);
    assert_eq!(layout.hero.area.y, layout.header.area.bottom());
    assert_eq!(layout.cards.area.y, layout.hero.area.bottom());
    assert_eq!(layout.footer.area.y, layout.cards.area.bottom());
    assert_eq!(layout.height(), layout.footer.area.bottom());
}

#[test]
fn narrow_page_is_taller_than_wide_page() {
    assert!(default_layout(50).height() > default_layout(140).height());
}

#[test]
fn every_section_spans_page_width() {
    let layout = default_layout(90);
    for area in [
        layout.header.area,
        layout.hero.area,
        layout.cards.area,
        layout.footer.area,
    ] {
        assert_eq!(area.x, 0);
        assert_eq!(area.width, 90);
    }
}

#[test]
fn oversized_content_saturates_page_height() {
    let mut content = PageContent::default();
    let long = "word ".repeat(60_000);
    for card in &mut content.cards {
        card.description = long.clone();
    }

    let layout = PageLayout::compute(20, &content, &Theme::default());

    assert_eq!(layout.height(), u16::MAX);
    assert!(layout.cards.area.y < layout.cards.area.bottom());
    assert!(layout.footer.area.y >= layout.cards.area.y);
}

// ===== Hit testing =====

#[test]
fn hit_test_finds_each_control() {
    let layout = default_layout(120);
    for focus in Focus::ORDER {
        let area = layout.focus_area(focus);
        assert_eq!(
            layout.hit_test(area.x, area.y),
            Some(focus),
            "top-left of {focus:?}"
        );
        assert_eq!(
            layout.hit_test(area.right() - 1, area.bottom() - 1),
            Some(focus),
            "bottom-right of {focus:?}"
        );
    }
}

#[test]
fn hit_test_misses_outside_controls() {
    let layout = default_layout(120);
    assert_eq!(layout.hit_test(0, 0), None);
    assert_eq!(layout.hit_test(0, layout.height() - 1), None);
    assert_eq!(layout.hit_test(119, layout.hero.title.y), None);
}

// ===== Focus rows =====

#[test]
fn focus_rows_include_tooltip_for_text_fields() {
    let layout = default_layout(120);
    let (top, bottom) = layout.focus_rows(Focus::HeroSearch);

    assert_eq!(top, layout.hero.search.y - TOOLTIP_HEIGHT);
    assert_eq!(bottom, layout.hero.search.bottom());
}

#[test]
fn focus_rows_for_buttons_match_button_rows() {
    let layout = default_layout(120);
    let (top, bottom) = layout.focus_rows(Focus::SignIn);
    assert_eq!((top, bottom), (layout.header.sign_in.y, layout.header.sign_in.bottom()));
}

// ===== Rendering =====

#[test]
fn rendered_page_contains_every_section() {
    let theme = Theme::default();
    let state = PageState::new(PageContent::default());
    let layout = PageLayout::compute(120, state.content(), &theme);
    let mut buf = Buffer::empty(layout.area());

    render_page(&mut buf, &layout, &state, &theme);

    let text = buffer_to_string(&buf);
    assert!(text.contains("◩ Abstract | Help Center"));
    assert!(text.contains("Submit a request"));
    assert!(text.contains("Sign In"));
    assert!(text.contains("How can we help?"));
    assert!(text.contains("Manage billing"));
    assert!(text.contains("Learn more →"));
    assert!(text.contains("All rights reserved"));
}

#[test]
fn blit_copies_scrolled_window() {
    let page_area = Rect::new(0, 0, 4, 6);
    let mut page = Buffer::empty(page_area);
    for y in 0..6 {
        page.set_string(0, y, format!("row{y}"), ratatui::style::Style::default());
    }

    let frame_area = Rect::new(0, 0, 4, 3);
    let mut frame = Buffer::empty(frame_area);
    blit(&page, 2, &mut frame, frame_area);

    assert_eq!(buffer_to_string(&frame), "row2\nrow3\nrow4");
}

#[test]
fn blit_stops_at_page_end() {
    let page_area = Rect::new(0, 0, 4, 2);
    let mut page = Buffer::empty(page_area);
    page.set_string(0, 0, "top", ratatui::style::Style::default());
    page.set_string(0, 1, "end", ratatui::style::Style::default());

    let frame_area = Rect::new(0, 0, 4, 5);
    let mut frame = Buffer::empty(frame_area);
    blit(&page, 1, &mut frame, frame_area);

    assert_eq!(buffer_to_string(&frame), "end");
}
