use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::models::Project;
use crate::ui::styles;
use crate::utils::format_date;

use super::render_loading;

/// Render a single project with its embedded task list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.project_detail.loading {
        render_loading(frame, area, "Project");
        return;
    }

    let Some(project) = app.project_detail.data.as_ref() else {
        // Fetch failed or the id does not exist
        let block = Block::default()
            .title(" Project ")
            .title_style(styles::title_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(false));
        let body = Paragraph::new(Line::from(Span::styled(
            "Project not found",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(body, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    render_header(frame, project, rows[0]);
    render_tasks(frame, app, project, rows[1]);
}

fn render_header(frame: &mut Frame, project: &Project, area: Rect) {
    let placeholder = "-";

    let dates = match (&project.start_date, &project.end_date) {
        (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
        (Some(start), None) => format!("{} -", format_date(start)),
        _ => placeholder.to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(project.name.clone(), styles::brand_style())),
        Line::from(Span::styled(
            project.description.clone().unwrap_or_default(),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Status:  ", styles::muted_style()),
            Span::styled(project.status.clone(), styles::highlight_style()),
            Span::styled("   Dates:  ", styles::muted_style()),
            Span::raw(dates),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_tasks(frame: &mut Frame, app: &App, project: &Project, area: Rect) {
    let header = Row::new([Cell::from("Task"), Cell::from("Priority"), Cell::from("Status")])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = project
        .tasks
        .iter()
        .map(|task| {
            Row::new([
                Cell::from(task.title.clone()),
                Cell::from(format!("{:>8}", task.priority)),
                Cell::from(task.status.clone()),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(55),
        Constraint::Percentage(15),
        Constraint::Percentage(30),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Tasks ({}) - Esc goes back ", project.tasks.len()))
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.tasks_selection));

    frame.render_stateful_widget(table, area, &mut state);
}
