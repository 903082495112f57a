use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

use super::{render_error, render_loading};

/// Render the clients page - one row per client, like the web cards.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.clients.loading {
        render_loading(frame, area, "Clients");
        return;
    }
    if let Some(error) = &app.clients.error {
        render_error(frame, area, "Clients", error);
        return;
    }

    let clients = app.clients.data.as_deref().unwrap_or_default();

    let header = Row::new([Cell::from("Name"), Cell::from("Company / Email"), Cell::from("Phone")])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = clients
        .iter()
        .map(|client| {
            Row::new([
                Cell::from(client.name.clone()),
                Cell::from(client.subtitle().to_string()),
                Cell::from(client.phone.clone().unwrap_or_else(|| "-".to_string())),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(40),
        Constraint::Percentage(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Clients ({}) ", clients.len()))
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.clients_selection));

    frame.render_stateful_widget(table, area, &mut state);
}
