use crate::catalog::{CatalogState, LoadStatus, SortMethod};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, catalog: &CatalogState, sort: SortMethod) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_icon, status_text, status_color) = match catalog.status {
            LoadStatus::Idle => ("●", "Ready", STATUS_OK),
            LoadStatus::Loading => ("◌", "Loading", STATUS_WARN),
            LoadStatus::Failed => ("●", "Failed", STATUS_ERROR),
        };
        let line = Line::from(vec![
            Span::styled(
                " prodview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} products", catalog.products.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("♥ {}", catalog.favorites.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Show: {}", catalog.filter.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Sort: {}", sort.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled(format!(" {status_text}"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
