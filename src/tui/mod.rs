//! Terminal user interface built on Ratatui.

pub mod screens;
pub mod terminal;
pub mod theme;
