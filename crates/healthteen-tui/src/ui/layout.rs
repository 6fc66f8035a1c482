// Layout constants shared by the views

use ratatui::layout::Rect;

/// Horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Horizontal padding for modal content (left + right)
pub const MODAL_PADDING_H: u16 = 2;

/// Header line with back marker, title and clock
pub const HEADER_HEIGHT: u16 = 1;

/// Bottom tab bar (border + labels), only on the main view
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Height of one metric card on the home tab
pub const METRIC_CARD_HEIGHT: u16 = 5;

/// Chat input box (border + one line)
pub const CHAT_INPUT_HEIGHT: u16 = 3;

/// Log modal width in columns (capped by terminal width - 4)
pub const LOG_MODAL_WIDTH: u16 = 44;

/// Log modal height in rows
pub const LOG_MODAL_HEIGHT: u16 = 9;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

#[inline]
pub fn with_modal_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, MODAL_PADDING_H)
}
