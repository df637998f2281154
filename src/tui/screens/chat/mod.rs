//! Interactive chat screen

pub mod input;
pub mod messaging;
pub mod runner;
pub mod state;
pub mod ui;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use messaging::{CommandOutcome, ResponseEvent};
pub use runner::run_chat;
pub use state::ChatState;
