use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

/// Interior width of the login dialog
const DIALOG_WIDTH: u16 = 46;

/// Render the sign-in page: the one route reachable without a session.
pub fn render(frame: &mut Frame, app: &App) {
    let height = if app.login_error.is_some() { 15 } else { 13 };
    let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "             FreelanceHQ",
            styles::brand_style(),
        )),
        Line::from(Span::styled(
            "    Manage clients, projects & invoices",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    lines.push(field_line(
        "Email   ",
        &app.login_email,
        app.login_focus == LoginFocus::Email,
    ));
    lines.push(Line::from(""));

    let masked = "*".repeat(app.login_password.chars().count());
    lines.push(field_line(
        "Password",
        &masked,
        app.login_focus == LoginFocus::Password,
    ));
    lines.push(Line::from(""));

    let button = if app.login_in_flight {
        "  Signing in...  "
    } else {
        "  [ Sign in ]  "
    };
    lines.push(Line::from(vec![
        Span::raw("             "),
        Span::styled(button, styles::button_style(app.login_focus == LoginFocus::Button)),
    ]));

    if let Some(error) = &app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab: next field  Enter: submit  Esc: quit",
        styles::muted_style(),
    )));

    let block = Block::default()
        .title(" Sign in ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A labelled input line with a cursor marker on the focused field.
fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let cursor = if focused { "_" } else { " " };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(label, styles::muted_style()),
        Span::raw("  "),
        Span::styled(format!("{}{}", value, cursor), styles::field_style(focused)),
    ])
}
