//! Chat screen state management

use crate::domain::types::{ChatMessage, ChatMode, UploadStatus};

/// Chat screen state
pub struct ChatState {
    /// Transcript, append-only
    pub messages: Vec<ChatMessage>,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor_pos: usize,
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Active conversation mode
    pub mode: ChatMode,
    /// Whether a chat request is in flight (the send path is disabled)
    pub loading: bool,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Last upload status line, overwritten per attempt
    pub upload_status: Option<UploadStatus>,
    /// Number of uploads currently in flight
    pub uploads_in_flight: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(ChatMode::default())
    }
}

impl ChatState {
    pub fn new(mode: ChatMode) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            mode,
            loading: false,
            loading_frame: 0,
            upload_status: None,
            uploads_in_flight: 0,
        }
    }

    /// Add a message to the transcript
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        // Auto-scroll to bottom
        self.scroll_to_bottom();
    }

    /// Switch conversation mode.
    ///
    /// Always appends the switch notice, even when the selected mode equals
    /// the current one.
    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
        self.add_message(ChatMessage::system(mode.switch_notice()));
    }

    /// Switch to the other mode
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Stage a send: append the trimmed input as a user message, clear the
    /// input, and mark the request in flight. Returns the message text, or
    /// None when the input is empty after trimming or a request is already
    /// outstanding - in both cases nothing changes.
    pub fn prepare_submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let text = trimmed.to_string();
        self.input.clear();
        self.cursor_pos = 0;
        self.add_message(ChatMessage::user(&text));
        self.loading = true;
        Some(text)
    }

    /// Overwrite the upload status line
    pub fn set_upload_status(&mut self, status: UploadStatus) {
        self.upload_status = Some(status);
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        if self.cursor_pos >= self.input.len() {
            self.input.push(c);
        } else {
            self.input.insert(self.cursor_pos, c);
        }
        self.cursor_pos += c.len_utf8();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 && !self.input.is_empty() {
            let previous = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.cursor_pos -= previous;
            self.input.remove(self.cursor_pos);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        let previous = self.input[..self.cursor_pos]
            .chars()
            .next_back()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.cursor_pos -= previous;
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        let next = self.input[self.cursor_pos..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.cursor_pos += next;
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved during render against the actual content height
        self.scroll_offset = u16::MAX;
    }

    /// Clear the transcript and upload status
    pub fn reset(&mut self) {
        self.messages.clear();
        self.upload_status = None;
        self.scroll_offset = 0;
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.loading || self.uploads_in_flight > 0 {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/') || self.input.starts_with(':')
    }

    /// Get command name if input is a command
    pub fn get_command(&self) -> Option<&str> {
        if self.is_command() {
            let cmd = self.input.trim_start_matches(|c| c == '/' || c == ':');
            cmd.split_whitespace().next()
        } else {
            None
        }
    }
}
