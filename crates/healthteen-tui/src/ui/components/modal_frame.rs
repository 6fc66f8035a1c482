use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout;
use crate::ui::theme;

/// Fixed modal size, capped by the terminal.
pub struct ModalSize {
    pub max_width: u16,
    pub height: u16,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self {
            max_width: layout::LOG_MODAL_WIDTH,
            height: layout::LOG_MODAL_HEIGHT,
        }
    }
}

/// Calculate centered modal area
pub fn modal_area(terminal_area: Rect, size: &ModalSize) -> Rect {
    let popup_width = size.max_width.min(terminal_area.width.saturating_sub(4));
    let popup_height = size.height.min(terminal_area.height);
    let popup_x = terminal_area.x + (terminal_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = terminal_area.y + (terminal_area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Dims whatever is already drawn underneath.
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .bg(theme::BG_MODAL_OVERLAY),
                    );
                }
            }
        }
    }
}

pub fn render_modal_overlay(f: &mut Frame, terminal_area: Rect) {
    f.render_widget(DimOverlay, terminal_area);
}

/// Clear the area and fill it with the modal background.
pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    let bg_block = Block::default().style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(bg_block, area);
}

/// Title on the left, key hint on the right. Returns the area below.
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let header_area = layout::with_modal_padding(chunks[0]);

    let spacing = (header_area.width as usize).saturating_sub(title.width() + hint.width());
    let header_line = Line::from(vec![
        Span::styled(title, theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint, theme::modal_hint()),
    ]);
    f.render_widget(Paragraph::new(header_line), header_area);

    chunks[1]
}
