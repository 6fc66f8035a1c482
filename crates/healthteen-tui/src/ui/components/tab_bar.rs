use healthteen_core::Tab;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Bottom navigation bar: one equal-width cell per tab with its number key.
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: Tab) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_inactive());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::horizontal(Tab::ALL.iter().map(|_| Constraint::Ratio(1, 4))).split(inner);

    for (tab, cell) in Tab::ALL.iter().zip(cells.iter()) {
        let is_active = *tab == active;
        let style = if is_active {
            theme::tab_active()
        } else {
            theme::tab_inactive()
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", tab.index() + 1), theme::text_dim()),
            Span::styled(tab.label(), style),
        ])
        .centered();
        f.render_widget(Paragraph::new(line).style(style), *cell);
    }
}
