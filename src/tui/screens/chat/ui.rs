//! Chat UI rendering components

use super::state::ChatState;
use crate::domain::types::{ChatMode, MessageRole};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Spinner frames for in-flight indicators
const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, server_url: &str) {
        let area = frame.area();

        // The upload panel exists only in RAG mode
        let mut constraints = vec![
            Constraint::Length(3), // Status bar
            Constraint::Min(5),    // Transcript
        ];
        if state.mode == ChatMode::Rag {
            constraints.push(Constraint::Length(4));
        }
        constraints.push(Constraint::Length(3)); // Input area
        constraints.push(Constraint::Length(1)); // Help bar

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut index = 0;
        Self::render_status_bar(frame, chunks[index], state, server_url);
        index += 1;
        Self::render_messages(frame, chunks[index], state);
        index += 1;
        if state.mode == ChatMode::Rag {
            Self::render_upload_panel(frame, chunks[index], state);
            index += 1;
        }
        Self::render_input(frame, chunks[index], state);
        Self::render_help_bar(frame, chunks[index + 1]);
    }

    /// Render status bar with the mode badge and server info
    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState, server_url: &str) {
        let badge = match state.mode {
            ChatMode::Chat => Span::styled(" 일반 ", theme::mode_chat()),
            ChatMode::Rag => Span::styled(" RAG ", theme::mode_rag()),
        };

        let loading_indicator = if state.loading {
            Span::styled(
                format!(" {} ", SPINNER[state.loading_frame]),
                theme::loading(),
            )
        } else {
            Span::raw("")
        };

        let upload_indicator = if state.uploads_in_flight > 0 {
            Span::styled(
                format!(" 업로드 {}건 진행 중 ", state.uploads_in_flight),
                theme::footer(),
            )
        } else {
            Span::raw("")
        };

        let status_line = Line::from(vec![
            Span::styled(" 💬 damso ", theme::user_prefix()),
            Span::styled("│ ", theme::footer()),
            badge,
            Span::styled(" │ ", theme::footer()),
            Span::styled(server_url.to_string(), theme::footer()),
            loading_indicator,
            upload_indicator,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        let para = Paragraph::new(status_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render the transcript
    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();

        for msg in &state.messages {
            let (prefix, style) = match msg.role {
                MessageRole::User => ("나: ", theme::user_prefix()),
                MessageRole::Assistant => ("AI: ", theme::ai_prefix()),
                MessageRole::System => ("안내: ", theme::system_prefix()),
            };

            let stamp = msg.timestamp.format("%H:%M").to_string();
            let content_lines: Vec<&str> = msg.content.lines().collect();
            if let Some(first_line) = content_lines.first() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{stamp} "), theme::timestamp()),
                    Span::styled(prefix, style),
                    Span::raw(*first_line),
                ]));
            }

            // Continuation lines with indent
            for line in content_lines.iter().skip(1) {
                let indent = " ".repeat(stamp.len() + 1 + prefix.len());
                lines.push(Line::from(format!("{indent}{line}")));
            }

            lines.push(Line::from(""));
        }

        // Placeholder while waiting for an answer; rendered, not stored, so
        // clearing the flag removes it
        if state.loading {
            lines.push(Line::from(Span::styled(
                format!("AI: {} 응답 생성 중...", SPINNER[state.loading_frame]),
                theme::loading(),
            )));
        }

        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(inner_height);
        let scroll = if state.scroll_offset == u16::MAX {
            max_scroll as u16
        } else {
            state.scroll_offset.min(max_scroll as u16)
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    /// Render the upload panel (RAG mode only)
    fn render_upload_panel(frame: &mut Frame, area: Rect, state: &ChatState) {
        let hint = Line::from(Span::styled(
            "파일을 창에 끌어다 놓거나 /upload <경로> 를 입력하세요",
            theme::footer(),
        ));

        let status_line = match &state.upload_status {
            Some(status) => {
                let mut spans = vec![Span::styled(
                    status.text.clone(),
                    theme::upload_status(status.tone),
                )];
                if state.uploads_in_flight > 0 {
                    spans.push(Span::styled(
                        format!(" {}", SPINNER[state.loading_frame]),
                        theme::loading(),
                    ));
                }
                Line::from(spans)
            }
            None => Line::from(Span::styled("업로드된 문서가 없습니다", theme::footer())),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.uploads_in_flight > 0 {
                theme::border_active()
            } else {
                theme::border()
            })
            .title(" 문서 업로드 ");

        let para = Paragraph::new(vec![hint, status_line]).block(block);
        frame.render_widget(para, area);
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let display_input = if state.input.is_empty() {
            Span::styled(state.mode.placeholder().to_string(), theme::footer())
        } else {
            // Insert cursor indicator at the char position
            let cursor_chars = state.input[..state.cursor_pos].chars().count();
            let mut chars: Vec<char> = state.input.chars().collect();
            if cursor_chars >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(cursor_chars, '|');
            }
            Span::styled(chars.into_iter().collect::<String>(), theme::text())
        };

        let input_line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            display_input,
        ]);

        let title = if state.is_command() {
            " 명령어 "
        } else if state.loading {
            " 응답 대기 중 "
        } else {
            " 메시지 "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.loading {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(title);

        let para = Paragraph::new(input_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::raw(": 전송 │ "),
            Span::styled("/help", theme::key_hint()),
            Span::raw(": 명령어 │ "),
            Span::styled("PageUp/Down", theme::key_hint()),
            Span::raw(": 스크롤 │ "),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::raw(": 종료 "),
        ]);

        let para = Paragraph::new(help_text);
        frame.render_widget(para, area);
    }
}
