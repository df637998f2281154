//! Chat input handling

use super::state::ChatState;
use crate::domain::types::ChatMode;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input as a chat message
    Submit,
    /// Execute a command
    Command(String),
    /// Text pasted, or a file dropped onto the terminal window
    Paste(String),
    /// Exit the chat
    Exit,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle a terminal event and update state
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Paste(data) => InputAction::Paste(data),
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.input.clear();
        state.cursor_pos = 0;
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter if key.modifiers.is_empty() => {
            if state.input.is_empty() {
                return InputAction::None;
            }

            if state.is_command() {
                let cmd = state.take_input();
                return InputAction::Command(cmd);
            }

            // The send path stays disabled while a request is outstanding;
            // typing, commands, and uploads remain available.
            if state.loading {
                return InputAction::None;
            }

            InputAction::Submit
        }
        KeyCode::Esc => {
            if !state.input.is_empty() {
                state.input.clear();
                state.cursor_pos = 0;
            }
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollTop
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::ScrollBottom
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }

        _ => InputAction::None,
    }
}

/// Parse a command line into the action it maps to
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches(|c| c == '/' || c == ':');
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    match name.as_str() {
        "" => CommandResult::None,

        "help" | "?" => CommandResult::ShowHelp,

        "mode" => match args.first().map(|value| value.to_ascii_lowercase()) {
            Some(value) if value == "chat" => CommandResult::SetMode(ChatMode::Chat),
            Some(value) if value == "rag" => CommandResult::SetMode(ChatMode::Rag),
            _ => CommandResult::ToggleMode,
        },

        "chat" => CommandResult::SetMode(ChatMode::Chat),

        "rag" => CommandResult::SetMode(ChatMode::Rag),

        "upload" | "file" => {
            CommandResult::Upload(args.iter().map(|arg| arg.to_string()).collect())
        }

        "reset" | "clear" | "new" => CommandResult::Reset,

        "exit" | "quit" | "bye" => CommandResult::Exit,

        _ => CommandResult::Unknown(name),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    SetMode(ChatMode),
    ToggleMode,
    Upload(Vec<String>),
    Reset,
    Exit,
    Unknown(String),
}
