use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

/// Render the not-found page.
pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let boxed = centered_rect_fixed(34, 7, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("            404", styles::brand_style())),
        Line::from(Span::styled(
            "        Page not found",
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("        "),
            Span::styled("[1]", styles::help_key_style()),
            Span::raw(" Go home"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), boxed);
}
