// Centralized theme: every color and style the views use is defined here

use healthteen_core::models::Metric;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background, a subtle lift from black
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Selected item background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Active tab background
pub const BG_TAB_ACTIVE: Color = Color::Rgb(28, 28, 32);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

pub const BG_MODAL_OVERLAY: Color = Color::Rgb(10, 10, 12);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Likes and unread dots
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Metric Colors
// -----------------------------------------------------------------------------

pub const METRIC_STEPS: Color = Color::Rgb(78, 154, 154);

pub const METRIC_SLEEP: Color = Color::Rgb(140, 140, 210);

pub const METRIC_CALORIES: Color = Color::Rgb(214, 140, 70);

pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

/// Empty part of gauges and bars
pub const PROGRESS_EMPTY: Color = Color::Rgb(60, 60, 60);

pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Steps => METRIC_STEPS,
        Metric::Sleep => METRIC_SLEEP,
        Metric::Calories => METRIC_CALORIES,
    }
}

/// Green for growth, red for decline.
pub fn trend_style(percent: i64) -> Style {
    if percent >= 0 {
        status_success()
    } else {
        status_error()
    }
}

// -----------------------------------------------------------------------------
// Text Styles
// -----------------------------------------------------------------------------

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    text_bold()
}

// -----------------------------------------------------------------------------
// Border Styles
// -----------------------------------------------------------------------------

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

/// Border for a card, brighter when selected.
pub fn card_border(selected: bool) -> Style {
    if selected {
        border_focused()
    } else {
        border_inactive()
    }
}

// -----------------------------------------------------------------------------
// Interactive Element Styles
// -----------------------------------------------------------------------------

pub fn interactive_normal() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn interactive_selected() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .bg(BG_SELECTED)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item(selected: bool) -> Style {
    if selected {
        interactive_selected()
    } else {
        interactive_normal()
    }
}

// -----------------------------------------------------------------------------
// Status Styles
// -----------------------------------------------------------------------------

pub fn status_success() -> Style {
    Style::default().fg(ACCENT_SUCCESS)
}

pub fn status_warning() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn status_info() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

// -----------------------------------------------------------------------------
// Input Styles
// -----------------------------------------------------------------------------

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

// -----------------------------------------------------------------------------
// Chat Styles
// -----------------------------------------------------------------------------

pub fn bubble_mine() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(Color::Rgb(30, 50, 72))
}

pub fn bubble_theirs() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_CARD)
}

pub fn unread_dot() -> Style {
    Style::default().fg(ACCENT_SPECIAL)
}

pub fn liked() -> Style {
    Style::default()
        .fg(ACCENT_ERROR)
        .add_modifier(Modifier::BOLD)
}

// -----------------------------------------------------------------------------
// Tab/Navigation Styles
// -----------------------------------------------------------------------------

pub fn tab_active() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(BG_TAB_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(TEXT_MUTED)
}

// -----------------------------------------------------------------------------
// Modal Styles
// -----------------------------------------------------------------------------

pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}
