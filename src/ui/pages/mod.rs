//! Per-route content rendering. One module per page, mirroring the
//! product's route table.

pub mod billing;
pub mod clients;
pub mod dashboard;
pub mod invoices;
pub mod login;
pub mod not_found;
pub mod project_detail;
pub mod projects;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::styles;

/// Placeholder body shown while a page's fetch is in flight.
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let body = Paragraph::new(Line::from(Span::styled(
        "Loading...",
        styles::muted_style(),
    )))
    .block(block);
    frame.render_widget(body, area);
}

/// Remote failure, shown where the list would have been.
pub(crate) fn render_error(frame: &mut Frame, area: Rect, title: &str, error: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let body = Paragraph::new(Line::from(Span::styled(
        error.to_string(),
        styles::error_style(),
    )))
    .block(block);
    frame.render_widget(body, area);
}
