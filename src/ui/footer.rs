use crate::ui::app::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the footer advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Screen(Screen),
    Search,
    Form,
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(mode: FooterMode) -> &'static str {
        match mode {
            FooterMode::Screen(Screen::List) => {
                " ↑↓ Move │ ←→ Page │ Enter Open │ / Search │ f Fav │ d Delete │ v Filter │ s Sort │ n New │ r Reload │ q Quit"
            }
            FooterMode::Screen(Screen::Detail(_)) => {
                " Esc Back │ e Edit │ f Fav │ d Delete │ q Quit"
            }
            FooterMode::Search => " Type to search │ Enter/Esc Done │ Backspace Delete",
            FooterMode::Form => " Tab/↑↓ Field │ Enter Save │ Esc Cancel",
        }
    }

    pub fn widget(&self, area: Rect, mode: FooterMode) -> Paragraph<'static> {
        let hints = Self::hints(mode);
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes (hints contain arrows and box-drawing).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
