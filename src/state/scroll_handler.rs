//! Page scrolling (pure state transitions).

use super::page_state::{PageState, Viewport};
use crate::model::KeyAction;

/// Lines moved by one mouse wheel notch.
pub const WHEEL_SCROLL_LINES: u16 = 3;

/// Apply a scroll action to the page.
///
/// Page moves keep one line of overlap. Non-scroll actions are ignored.
pub fn handle_scroll_action(state: &mut PageState, action: KeyAction, viewport: Viewport) {
    let scroll = state.scroll();
    let page = viewport.height.saturating_sub(1).max(1);

    let target = match action {
        KeyAction::ScrollUp => scroll.saturating_sub(1),
        KeyAction::ScrollDown => scroll.saturating_add(1),
        KeyAction::PageUp => scroll.saturating_sub(page),
        KeyAction::PageDown => scroll.saturating_add(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => viewport.max_scroll(),
        _ => return,
    };

    state.set_scroll(target, viewport);
}

/// Scroll by a mouse wheel notch.
pub fn handle_wheel(state: &mut PageState, down: bool, viewport: Viewport) {
    let scroll = state.scroll();
    let target = if down {
        scroll.saturating_add(WHEEL_SCROLL_LINES)
    } else {
        scroll.saturating_sub(WHEEL_SCROLL_LINES)
    };
    state.set_scroll(target, viewport);
}
