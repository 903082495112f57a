// Allow dead code: style functions defined for consistent UI
#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

// Color palette, lifted from the product's web theme
pub const CHOCOLATE: Color = Color::Rgb(43, 27, 23);
pub const CARAMEL: Color = Color::Rgb(169, 113, 66);
pub const GOLD: Color = Color::Rgb(212, 175, 55);
pub const CREAM: Color = Color::Rgb(250, 243, 224);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(146, 131, 116);

// Styles
pub fn brand_style() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default().fg(CARAMEL).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(CARAMEL)
        .fg(CREAM)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(CREAM)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(GOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn nav_style(active: bool) -> Style {
    if active {
        Style::default()
            .bg(CARAMEL)
            .fg(CREAM)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CREAM)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(CARAMEL)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(CREAM).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(GOLD)
            .fg(CHOCOLATE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CREAM)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(CHOCOLATE).fg(CREAM)
}

pub fn help_key_style() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(CREAM)
}
