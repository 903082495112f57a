use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::format_amount;

use super::{render_error, render_loading};

/// Render the invoices page.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.invoices.loading {
        render_loading(frame, area, "Invoices");
        return;
    }
    if let Some(error) = &app.invoices.error {
        render_error(frame, area, "Invoices", error);
        return;
    }

    let invoices = app.invoices.data.as_deref().unwrap_or_default();

    let header = Row::new([Cell::from("Invoice"), Cell::from("Status"), Cell::from("Total")])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = invoices
        .iter()
        .map(|invoice| {
            Row::new([
                Cell::from(invoice.invoice_number.clone()),
                Cell::from(invoice.status.clone()),
                Cell::from(format!("{:>16}", format_amount(invoice.total))),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(25),
        Constraint::Percentage(30),
    ];

    let outstanding = invoices.iter().filter(|i| i.is_outstanding()).count();
    let title = format!(" Invoices ({}, {} outstanding) ", invoices.len(), outstanding);

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
    state.select(Some(app.invoices_selection));

    frame.render_stateful_widget(table, area, &mut state);
}
