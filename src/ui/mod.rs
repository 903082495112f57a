//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: application shell (sidebar, navbar, content, status line)
//! - `input`: keyboard event handling
//! - `styles`: color palette and text styling
//! - `pages`: per-route content rendering

pub mod input;
pub mod pages;
pub mod render;
pub mod styles;
