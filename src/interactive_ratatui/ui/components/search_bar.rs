use crate::interactive_ratatui::ui::components::{Component, is_exit_prompt};
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line search input with readline-style editing.
///
/// `cursor_position` counts characters, not bytes.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the echoed text from state. The cursor only moves when the text
    /// actually changed underneath it.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor_position = self.char_count();
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(index, _)| index)
            .unwrap_or(self.query.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from.min(chars.len());

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Remove the characters in `start..end` and leave the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }
        let (byte_start, byte_end) = (self.byte_index(start), self.byte_index(end));
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_index(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn delete_before_cursor(&mut self) -> Option<Message> {
        if self.cursor_position == 0 {
            return None;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_at_cursor(&mut self) -> Option<Message> {
        self.delete_range(self.cursor_position, self.cursor_position + 1)
    }

    fn move_cursor(&mut self, position: usize) -> Option<Message> {
        self.cursor_position = position.min(self.char_count());
        None
    }

    fn title(&self) -> String {
        let mut title = "Search".to_string();
        if self.is_loading {
            title.push_str(" [loading]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }
        title
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let split = self.byte_index(self.cursor_position);
        let (before, rest) = self.query.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().unwrap_or(' ');

        let input_text = vec![
            Span::raw(before.to_string()),
            Span::styled(under_cursor.to_string(), Styles::cursor()),
            Span::raw(rest_chars.as_str().to_string()),
        ];

        let mut block = Block::default().title(self.title()).borders(Borders::ALL);
        if is_exit_prompt(&self.message) {
            block = block.border_style(Styles::error());
        }

        let input = Paragraph::new(Line::from(input_text))
            .block(block)
            .style(Styles::input());

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => self.move_cursor(0),
                KeyCode::Char('e') => self.move_cursor(self.char_count()),
                KeyCode::Char('b') => self.move_cursor(self.cursor_position.saturating_sub(1)),
                KeyCode::Char('f') => self.move_cursor(self.cursor_position + 1),
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_at_cursor(),
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.move_cursor(self.find_prev_word_boundary(self.cursor_position))
                }
                KeyCode::Char('f') => {
                    self.move_cursor(self.find_next_word_boundary(self.cursor_position))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.move_cursor(self.cursor_position.saturating_sub(1)),
            KeyCode::Right => self.move_cursor(self.cursor_position + 1),
            KeyCode::Home => self.move_cursor(0),
            KeyCode::End => self.move_cursor(self.char_count()),
            _ => None,
        }
    }
}
