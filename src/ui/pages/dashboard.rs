use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Resource;
use crate::app::App;
use crate::models::{Client, Invoice, Project};
use crate::ui::styles;
use crate::utils::format_amount;

/// How many entries each "Recent" section shows
const RECENT_LIMIT: usize = 3;

/// Render the dashboard: stat tiles over three recent-item sections.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stat tiles
            Constraint::Min(5),    // Recent clients
            Constraint::Min(5),    // Recent projects
            Constraint::Min(5),    // Recent invoices
        ])
        .split(area);

    render_stats(frame, app, rows[0]);
    render_recent_clients(frame, &app.clients, rows[1]);
    render_recent_projects(frame, &app.projects, rows[2]);
    render_recent_invoices(frame, &app.invoices, rows[3]);
}

/// A count, or the em dash placeholder while the list is loading.
fn stat_value<T>(resource: &Resource<Vec<T>>, count: impl Fn(&[T]) -> usize) -> String {
    match resource.data.as_deref() {
        Some(list) => count(list).to_string(),
        None => "—".to_string(),
    }
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = [
        ("Clients", stat_value(&app.clients, |list: &[Client]| list.len())),
        (
            "Active Projects",
            stat_value(&app.projects, |list: &[Project]| {
                list.iter().filter(|p| p.is_active()).count()
            }),
        ),
        (
            "Outstanding Invoices",
            stat_value(&app.invoices, |list: &[Invoice]| {
                list.iter().filter(|i| i.is_outstanding()).count()
            }),
        ),
    ];

    for (tile, (label, value)) in tiles.iter().zip(stats) {
        let block = Block::default()
            .title(format!(" {} ", label))
            .title_style(styles::muted_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(false));

        let body = Paragraph::new(Line::from(Span::styled(
            format!("  {}", value),
            styles::brand_style(),
        )))
        .block(block);
        frame.render_widget(body, *tile);
    }
}

/// One bordered section of up to `RECENT_LIMIT` two-column lines.
fn render_recent_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    resource_error: Option<&str>,
    entries: Vec<(String, String)>,
) {
    let mut lines = Vec::new();

    if let Some(error) = resource_error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            styles::error_style(),
        )));
    } else if entries.is_empty() {
        lines.push(Line::from(Span::styled("Nothing yet", styles::muted_style())));
    } else {
        for (primary, secondary) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<28}", primary), styles::list_item_style()),
                Span::styled(secondary, styles::muted_style()),
            ]));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_recent_clients(frame: &mut Frame, clients: &Resource<Vec<Client>>, area: Rect) {
    let entries = clients
        .data
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(RECENT_LIMIT)
        .map(|c| (c.name.clone(), c.subtitle().to_string()))
        .collect();
    render_recent_section(frame, area, "Recent Clients", clients.error.as_deref(), entries);
}

fn render_recent_projects(frame: &mut Frame, projects: &Resource<Vec<Project>>, area: Rect) {
    let entries = projects
        .data
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(RECENT_LIMIT)
        .map(|p| (p.name.clone(), format!("Status: {}", p.status)))
        .collect();
    render_recent_section(
        frame,
        area,
        "Recent Projects",
        projects.error.as_deref(),
        entries,
    );
}

fn render_recent_invoices(frame: &mut Frame, invoices: &Resource<Vec<Invoice>>, area: Rect) {
    let entries = invoices
        .data
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(RECENT_LIMIT)
        .map(|i| {
            (
                i.invoice_number.clone(),
                format!("{} ({})", format_amount(i.total), i.status),
            )
        })
        .collect();
    render_recent_section(
        frame,
        area,
        "Recent Invoices",
        invoices.error.as_deref(),
        entries,
    );
}
