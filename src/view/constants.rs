//! Layout dimension constants for page rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the page sections.

/// Rows reserved above a search field for its error tooltip.
///
/// The tooltip body takes one row and its arrow another.
pub const TOOLTIP_HEIGHT: u16 = 2;

/// Height of a bordered control (input or large button) in lines.
pub const CONTROL_HEIGHT: u16 = 3;

/// Height of the header band in lines.
///
/// Tooltip rows, control row, and one row of bottom padding.
pub const HEADER_HEIGHT: u16 = TOOLTIP_HEIGHT + CONTROL_HEIGHT + 1;

/// Preferred width of the header search field in columns.
pub const HEADER_SEARCH_WIDTH: u16 = 30;

/// Height of the hero band in lines.
pub const HERO_HEIGHT: u16 = 12;

/// Rows between the hero top edge and its title.
pub const HERO_TITLE_OFFSET: u16 = 2;

/// Maximum width of the extra-large hero search field in columns.
pub const XL_INPUT_MAX_WIDTH: u16 = 72;

/// Percentage of the page width used by the card stack.
pub const CARD_STACK_WIDTH_PERCENT: u16 = 80;

/// Narrowest card column before the stack collapses to one column.
pub const CARD_MIN_WIDTH: u16 = 28;

/// Columns between card columns.
pub const CARD_COLUMN_GAP: u16 = 4;

/// Rows between card rows, and above and below the stack.
pub const CARD_ROW_GAP: u16 = 2;

/// Width of a footer link column.
pub const FOOTER_COLUMN_WIDTH: u16 = 22;

/// Width reserved for the footer copyright block on wide layouts.
pub const FOOTER_COPYRIGHT_WIDTH: u16 = 30;

/// Rows of padding above and below footer content.
pub const FOOTER_PADDING: u16 = 2;

/// Maximum width of the acknowledgement notice.
pub const NOTICE_MAX_WIDTH: u16 = 60;

/// Maximum card titles listed in the acknowledgement notice.
pub const NOTICE_MAX_MATCHES: usize = 6;
