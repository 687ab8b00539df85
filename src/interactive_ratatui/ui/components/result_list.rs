use crate::interactive_ratatui::constants::{EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::interactive_ratatui::domain::models::UserRecord;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::components::{Component, list_viewer::ListViewer};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// User list, replaced by a placeholder while a fetch is outstanding.
#[derive(Default)]
pub struct ResultList {
    list_viewer: ListViewer<UserRecord>,
    is_loading: bool,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("Users".to_string(), EMPTY_MESSAGE.to_string()),
            is_loading: false,
        }
    }

    pub fn set_results(&mut self, results: Vec<UserRecord>) {
        self.list_viewer.set_items(results);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn selected_result(&self) -> Option<&UserRecord> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    pub fn len(&self) -> usize {
        self.list_viewer.items_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.is_loading {
            let placeholder = Paragraph::new(LOADING_MESSAGE)
                .block(Block::default().title("Users").borders(Borders::ALL))
                .style(Styles::title())
                .alignment(Alignment::Center);
            f.render_widget(placeholder, area);
            return;
        }

        self.list_viewer.render(f, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.is_loading {
            return None;
        }

        let moved = match key.code {
            KeyCode::Up => self.list_viewer.move_up(),
            KeyCode::Down => self.list_viewer.move_down(),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.list_viewer.move_up()
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.list_viewer.move_down()
            }
            KeyCode::PageUp => self.list_viewer.page_up(),
            KeyCode::PageDown => self.list_viewer.page_down(),
            _ => return None,
        };
        self.selection_message(moved)
    }
}
