use super::list_item::ListItem;
use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title,
            empty_message,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.selected_index >= self.items.len() {
            self.selected_index = 0;
            self.scroll_offset = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn select(&mut self, index: usize) -> bool {
        if index != self.selected_index && index < self.items.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    pub fn move_up(&mut self) -> bool {
        self.select(self.selected_index.saturating_sub(1))
    }

    pub fn move_down(&mut self) -> bool {
        self.select(self.selected_index + 1)
    }

    pub fn page_up(&mut self) -> bool {
        self.select(self.selected_index.saturating_sub(PAGE_SIZE))
    }

    pub fn page_down(&mut self) -> bool {
        let last = self.items.len().saturating_sub(1);
        self.select((self.selected_index + PAGE_SIZE).min(last))
    }

    pub fn adjust_scroll_offset(&mut self, visible_count: usize) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if visible_count > 0 && self.selected_index >= self.scroll_offset + visible_count
        {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
                .style(Styles::dimmed());
            f.render_widget(empty_message, area);
            return;
        }

        let visible_count = area.height.saturating_sub(2) as usize; // Account for borders
        self.adjust_scroll_offset(visible_count);
        let start = self.scroll_offset;
        let end = (start + visible_count).min(self.items.len());
        let available_width = area.width.saturating_sub(2) as usize;

        let items: Vec<TuiListItem> = self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let style = if start + offset == self.selected_index {
                    Styles::selected()
                } else {
                    ratatui::style::Style::default()
                };
                TuiListItem::new(item.create_line(available_width)).style(style)
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items.len()
        );

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);
    }
}
