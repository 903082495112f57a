use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

/// Render the billing page. Checkout happens on the backend; this page
/// is informational only.
pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Manage subscriptions and payment methods here.",
            styles::list_item_style(),
        )),
        Line::from(Span::styled(
            " Checkout sessions are created by the backend and referenced by id.",
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .title(" Billing ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
