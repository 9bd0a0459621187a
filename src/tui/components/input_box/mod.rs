//! # InputBox Component
//!
//! The "tell us about yourself" text area.
//!
//! ## Responsibilities
//!
//! - Capture text input, capped at `MAX_INPUT_CHARS` characters
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit submission (Enter) without clearing the buffer
//! - Show a placeholder when empty and a live `n/300` counter
//!
//! The buffer is internal state. Validation of blank input is the core's
//! job; the box forwards every Enter press.

mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::state::MAX_INPUT_CHARS;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, cursor_line_col,
    inner_width, next_char_boundary, prev_char_boundary, wrap_lines,
};

pub const PLACEHOLDER: &str = "Tell us about yourself — habits, dreams, or anything we can roast you for (be specific for better burns).";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed; carries the untrimmed buffer
    Submit(String),
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Drawn dim when focus is elsewhere, e.g. the mode dropdown (Prop)
    pub dimmed: bool,
    /// Cursor byte offset into `buffer`
    cursor: usize,
    /// First wrapped line shown
    scroll_offset: u16,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor: 0,
            scroll_offset: 0,
        }
    }

    /// Height the box always occupies.
    pub fn height() -> u16 {
        MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
    }

    /// Live character count shown in the counter.
    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn remaining(&self) -> usize {
        MAX_INPUT_CHARS.saturating_sub(self.char_count())
    }

    fn insert_str(&mut self, text: &str) -> bool {
        let allowed: String = text.chars().take(self.remaining()).collect();
        if allowed.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor, &allowed);
        self.cursor += allowed.len();
        true
    }

    /// Keep the cursor's wrapped line inside the visible window.
    fn update_scroll_offset(&mut self, width: u16) {
        let (line, _) = cursor_line_col(&self.buffer[..self.cursor], width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = line + 1 - MAX_VISIBLE_LINES;
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.update_scroll_offset(width);

        let counter = format!(" {}/{} ", self.char_count(), MAX_INPUT_CHARS);
        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Tell us about yourself ")
            .title_bottom(Line::from(counter).right_aligned())
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: false })
        } else {
            let lines: Vec<Line> = wrap_lines(&self.buffer, width)
                .into_iter()
                .skip(self.scroll_offset as usize)
                .take(MAX_VISIBLE_LINES as usize)
                .map(Line::from)
                .collect();
            let style = if self.dimmed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Paragraph::new(lines).style(style)
        };

        frame.render_widget(paragraph.block(block), area);

        if !self.dimmed {
            let (line, col) = cursor_line_col(&self.buffer[..self.cursor], width);
            let row = line.saturating_sub(self.scroll_offset);
            frame.set_cursor_position((
                area.x + CONTENT_OFFSET_X + col,
                area.y + CONTENT_OFFSET_Y + row,
            ));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf))
                    .then_some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => self.insert_str(text).then_some(InputEvent::ContentChanged),
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
