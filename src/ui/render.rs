use crate::catalog::{LoadStatus, Product};
use crate::ui::app::{App, Screen};
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::form::{FormField, FormMode, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    PRICE, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
const EXCERPT_CHARS: usize = 100;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let catalog = app.store().state();
    frame.render_widget(Header::new().widget(catalog, app.listing().sort), header);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::List => draw_list(frame, app, body),
        Screen::Detail(_) => draw_detail(frame, app, body),
    }

    let mode = if app.form().is_visible() {
        FooterMode::Form
    } else if app.screen() == Screen::List && app.listing().searching {
        FooterMode::Search
    } else {
        FooterMode::Screen(app.screen())
    };
    frame.render_widget(Footer::new().widget(footer, mode), footer);

    if let FormState::Visible {
        mode,
        values,
        focused,
        error,
    } = app.form()
    {
        let title = match mode {
            FormMode::Create => " New product ".to_string(),
            FormMode::Edit { id } => format!(" Edit product #{id} "),
        };
        let mut lines = Vec::new();
        for field in FormField::ALL {
            let is_focused = field == *focused;
            let marker = if is_focused { "▸ " } else { "  " };
            let label_style = if is_focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", field.label()),
                label_style,
            )));
            let cursor = if is_focused { "_" } else { "" };
            let value_line = Line::from(format!("    {}{}", values.get(field), cursor));
            lines.push(if is_focused {
                value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                value_line
            });
        }
        lines.push(Line::from(""));
        match error {
            Some(message) => lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Enter: Save  Esc: Cancel",
                Style::default().fg(MUTED_TEXT),
            ))),
        }

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let popup_width = content_width.saturating_add(4).max(60);
        let popup_height = lines.len().saturating_add(2) as u16;
        let popup_area = centered_rect_by_size(body, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);
        let popup = Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(lines).block(popup), popup_area);
    }
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let catalog = app.store().state();
    let listing = app.listing();
    let mut lines = Vec::new();

    let search_style = if listing.searching {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let cursor = if listing.searching { "_" } else { "" };
    lines.push(Line::from(vec![
        Span::styled(" Search: ", search_style),
        Span::styled(format!("{}{}", listing.query, cursor), Style::default().fg(HEADER_TEXT)),
    ]));
    lines.push(Line::from(""));

    match catalog.status {
        LoadStatus::Loading => {
            let frame_idx = usize::from(app.tick()) % SPINNER.len();
            lines.push(Line::from(format!(
                " {} Loading products...",
                SPINNER[frame_idx]
            )));
        }
        LoadStatus::Failed => {
            let reason = catalog.last_error.as_deref().unwrap_or("unknown error");
            lines.push(Line::from(Span::styled(
                format!(" Failed to load products: {reason}"),
                Style::default().fg(STATUS_ERROR),
            )));
            lines.push(Line::from(" Press r to try again."));
        }
        LoadStatus::Idle => {
            let page = app.current_page();
            if page.is_empty() {
                lines.push(Line::from(Span::styled(
                    " No products to show.",
                    Style::default().fg(MUTED_TEXT),
                )));
            }
            for (idx, product) in page.items.iter().enumerate() {
                let selected = idx == listing.selected;
                lines.extend(product_rows(product, catalog.is_favorite(product.id), selected));
            }
            if page.total_pages > 0 {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!(
                        " Page {} of {}  ({} items)",
                        page.page + 1,
                        page.total_pages,
                        page.total_items
                    ),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(" Products ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn product_rows(product: &Product, favorite: bool, selected: bool) -> [Line<'static>; 2] {
    let (heart, heart_style) = if favorite {
        ("♥", Style::default().fg(FAVORITE))
    } else {
        ("♡", Style::default().fg(MUTED_TEXT))
    };
    let marker = if selected { "▸" } else { " " };
    let mut title = Line::from(vec![
        Span::raw(format!("{marker} ")),
        Span::styled(heart, heart_style),
        Span::raw(" "),
        Span::styled(
            product.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("${}", product.price), Style::default().fg(PRICE)),
    ]);
    let mut excerpt = Line::from(Span::styled(
        format!("     {}", product.excerpt(EXCERPT_CHARS)),
        Style::default().fg(MUTED_TEXT),
    ));
    if selected {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        title = title.style(highlight);
        excerpt = excerpt.style(highlight);
    }
    [title, excerpt]
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let Some(product) = app.detail_product() else {
        let widget = Paragraph::new(Line::from(" Product not found")).block(block);
        frame.render_widget(widget, area);
        return;
    };

    let favorite = app.store().state().is_favorite(product.id);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                product.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            if favorite {
                Span::styled("♥ Favorite", Style::default().fg(FAVORITE))
            } else {
                Span::styled("♡", Style::default().fg(MUTED_TEXT))
            },
        ]),
        Line::from(Span::styled(
            format!("Price: ${}", product.price),
            Style::default().fg(PRICE),
        )),
        Line::from(""),
        Line::from(product.description.clone()),
        Line::from(""),
        Line::from(Span::styled("Images:", Style::default().fg(MUTED_TEXT))),
    ];
    match product.cover_image() {
        Some(cover) => lines.push(Line::from(vec![
            Span::raw(format!("  {cover}")),
            Span::styled(" (cover)", Style::default().fg(MUTED_TEXT)),
        ])),
        None => lines.push(Line::from("  (none)")),
    }
    for image in product.images.iter().skip(1) {
        lines.push(Line::from(format!("  {image}")));
    }

    let widget = Paragraph::new(lines)
        .block(block.title(format!(" Product #{} ", product.id)))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
