use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState};
use crate::router::{Route, NAV_ROUTES};

use super::pages;
use super::styles;

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 24;

pub fn render(frame: &mut Frame, app: &App) {
    if app.router.current() == Route::Login {
        // The login page replaces the shell entirely
        pages::login::render(frame, app);
    } else {
        render_shell(frame, app);
    }

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

/// Sidebar on the left, navbar / content / status line on the right.
fn render_shell(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(frame.area());

    render_sidebar(frame, app, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(10),   // Page content
            Constraint::Length(2), // Status line
        ])
        .split(columns[1]);

    render_navbar(frame, app, rows[0]);
    render_content(frame, app, rows[1]);
    render_status_bar(frame, app, rows[2]);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.router.current().nav_parent();

    let mut lines = vec![
        Line::from(Span::styled("Workspace", styles::brand_style())),
        Line::from(Span::styled("Your tenant", styles::muted_style())),
        Line::from(""),
    ];

    for (i, route) in NAV_ROUTES.iter().enumerate() {
        let label = format!(" [{}] {:<14}", i + 1, route.title());
        lines.push(Line::from(Span::styled(
            label,
            styles::nav_style(active == Some(*route)),
        )));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let brand = " FreelanceHQ";
    let tagline = "  Manage clients, projects & invoices";

    let email = app
        .session
        .user()
        .map(|u| u.email)
        .unwrap_or_default();
    let signout_hint = if email.is_empty() {
        String::new()
    } else {
        format!("{}  [s] Sign out ", email)
    };

    let used = brand.len() + tagline.len() + signout_hint.len();
    let padding = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(brand, styles::brand_style()),
        Span::styled(tagline, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(signout_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.router.current() {
        Route::Dashboard => pages::dashboard::render(frame, app, area),
        Route::Clients => pages::clients::render(frame, app, area),
        Route::Projects => pages::projects::render(frame, app, area),
        Route::ProjectDetail(_) => pages::project_detail::render(frame, app, area),
        Route::Invoices => pages::invoices::render(frame, app, area),
        Route::Billing => pages::billing::render(frame, app, area),
        Route::NotFound => pages::not_found::render(frame, app, area),
        // Handled before the shell is drawn
        Route::Login => {}
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status_message {
        Some(message) => format!(" {}", message),
        None => " Tab: switch page  Enter: open  r: refresh  ?: help  q: quit".to_string(),
    };

    let paragraph = Paragraph::new(Line::from(Span::raw(text))).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Overlays
// ============================================================================

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 16, frame.area());
    frame.render_widget(Clear, area);

    let keys: [(&str, &str); 11] = [
        ("Tab / BackTab", "next / previous page"),
        ("1-5", "jump to page"),
        ("Up/Down, j/k", "move selection"),
        ("PgUp / PgDn", "move selection faster"),
        ("Enter", "open selected project"),
        ("Esc", "back to project list"),
        ("r", "refresh current page"),
        ("s", "sign out"),
        ("?", "this help"),
        ("q", "quit"),
        ("Ctrl+C", "quit immediately"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", key), styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(34, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Quit FreelanceHQ? "),
            Span::styled("[y]es ", styles::help_key_style()),
            Span::styled("[n]o", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
