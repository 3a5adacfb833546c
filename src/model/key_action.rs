//! Domain-level keyboard actions independent of key bindings.

/// Page-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text editing keys inside a search field are not actions; they are routed to
/// the focused field before bindings are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus
    /// Move focus to the next control. Default: Tab
    FocusNext,
    /// Move focus to the previous control. Default: Shift+Tab
    FocusPrev,

    // Forms and buttons
    /// Submit the focused form or press the focused button. Default: Enter
    Activate,

    // Scrolling
    /// Scroll the page up by one line. Default: ↑/k
    ScrollUp,
    /// Scroll the page down by one line. Default: ↓/j
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the page. Default: g/Ctrl+Home
    ScrollToTop,
    /// Jump to the footer. Default: G/Ctrl+End
    ScrollToBottom,

    // Notice
    /// Close the acknowledgement notice. Default: Esc/Enter
    DismissNotice,

    // Application
    /// Quit the application. Default: q (outside text fields), Ctrl+C
    Quit,
}
