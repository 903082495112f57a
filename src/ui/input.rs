//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes. The login form captures input whenever the
//! guard has routed navigation to the login page.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, LoginFocus, PAGE_SCROLL_SIZE};
use crate::router::{Route, NAV_ROUTES};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // The login page owns the keyboard while it is the current route
    if app.router.current() == Route::Login {
        return handle_login_input(app, key);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Tab => {
            let next = app.router.current().next_nav();
            app.navigate(next);
        }
        KeyCode::BackTab => {
            let prev = app.router.current().prev_nav();
            app.navigate(prev);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            app.navigate(NAV_ROUTES[idx]);
        }
        KeyCode::Char('r') => {
            app.reload();
        }
        KeyCode::Char('s') => {
            app.sign_out();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down(1);
        }
        KeyCode::PageUp => {
            app.move_selection_up(PAGE_SCROLL_SIZE);
        }
        KeyCode::PageDown => {
            app.move_selection_down(PAGE_SCROLL_SIZE);
        }
        KeyCode::Enter => {
            app.open_selected_project();
        }
        KeyCode::Esc => {
            if matches!(app.router.current(), Route::ProjectDetail(_)) {
                app.navigate(Route::Projects);
            }
        }
        _ => {}
    }

    Ok(false)
}

fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            // Quit if on the login page; there is nowhere else to go
            app.state = AppState::Quitting;
            return Ok(true);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Email => LoginFocus::Password,
                LoginFocus::Password => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Email,
            };
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Email => LoginFocus::Button,
                LoginFocus::Password => LoginFocus::Email,
                LoginFocus::Button => LoginFocus::Password,
            };
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Email => {
                app.login_focus = LoginFocus::Password;
            }
            LoginFocus::Password | LoginFocus::Button => {
                app.submit_login();
            }
        },
        KeyCode::Backspace => {
            app.login_input_backspace();
        }
        KeyCode::Char(c) => {
            app.login_input_char(c);
        }
        _ => {}
    }

    Ok(false)
}
