use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::format_date;

use super::{render_error, render_loading};

/// Render the projects page. Enter opens the selected project.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.projects.loading {
        render_loading(frame, area, "Projects");
        return;
    }
    if let Some(error) = &app.projects.error {
        render_error(frame, area, "Projects", error);
        return;
    }

    let projects = app.projects.data.as_deref().unwrap_or_default();

    let header = Row::new([Cell::from("Name"), Cell::from("Status"), Cell::from("Started")])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = projects
        .iter()
        .map(|project| {
            let started = project
                .start_date
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".to_string());
            Row::new([
                Cell::from(project.name.clone()),
                Cell::from(project.status.clone()),
                Cell::from(started),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];

    let title = format!(" Projects ({}) - Enter opens ", projects.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.projects_selection));

    frame.render_stateful_widget(table, area, &mut state);
}
