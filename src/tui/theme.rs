//! TUI theme - consistent styling across the chat screen.

use crate::domain::types::StatusTone;
use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Success indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// Timestamp style in the transcript
pub fn timestamp() -> Style {
    Style::default().fg(MUTED)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// AI message prefix style
pub fn ai_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

/// System message style
pub fn system_prefix() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::ITALIC)
}

/// Mode badge - plain chat
pub fn mode_chat() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT)
}

/// Mode badge - RAG
pub fn mode_rag() -> Style {
    Style::default().fg(Color::Black).bg(SUCCESS)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}

/// Style for the upload status line by tone
pub fn upload_status(tone: StatusTone) -> Style {
    match tone {
        StatusTone::Neutral => Style::default().fg(MUTED),
        StatusTone::Success => Style::default().fg(SUCCESS),
        StatusTone::Error => Style::default().fg(ERROR),
    }
}
