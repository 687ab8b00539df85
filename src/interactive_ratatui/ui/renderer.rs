use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::ui::app_state::AppState;
use crate::interactive_ratatui::ui::components::{
    Component, result_list::ResultList, search_bar::SearchBar, sort_bar::SortBar,
    view_layout::Styles,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const KEY_HINTS: &str =
    "Type to search | F2/F3: Sort | ↑/↓: Select | Ctrl+R: Reload | Esc: Quit";

#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    sort_bar: SortBar,
    result_list: ResultList,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            sort_bar: SortBar::new(),
            result_list: ResultList::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let error_height = if state.search.error.is_some() {
            ERROR_LINE_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Length(SORT_BAR_HEIGHT),   // Sort buttons
                Constraint::Length(error_height),      // Inline error
                Constraint::Min(0),                    // Users
                Constraint::Length(STATUS_BAR_HEIGHT), // Status
            ])
            .split(f.area());

        self.search_bar.set_query(state.search.display_query.clone());
        self.search_bar.set_loading(state.search.is_loading);
        self.search_bar.set_message(state.ui.message.clone());

        self.sort_bar.set_sort(state.search.sort);

        self.result_list.set_results(state.search.results.clone());
        self.result_list.set_selected_index(state.search.selected_index);
        self.result_list.set_loading(state.search.is_loading);

        self.search_bar.render(f, chunks[0]);
        self.sort_bar.render(f, chunks[1]);
        if let Some(error) = &state.search.error {
            Self::render_error(f, chunks[2], error);
        }
        self.result_list.render(f, chunks[3]);
        Self::render_status_bar(f, chunks[4], state);
    }

    fn render_error(f: &mut Frame, area: Rect, error: &str) {
        let line = Line::from(vec![
            Span::styled("Failed to load users: ", Styles::error()),
            Span::styled(error.to_string(), Styles::error()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![Line::from(Span::styled(KEY_HINTS, Styles::dimmed()))];
        if !state.search.is_loading {
            if let Some(user) = state.search.selected_user() {
                let avatar = user.avatar_url.as_deref().unwrap_or("no avatar");
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", user.avatar_badge()), Styles::avatar()),
                    Span::styled(avatar.to_string(), Styles::dimmed()),
                ]));
            }
        }

        let status_bar = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(status_bar, area);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_sort_bar_mut(&mut self) -> &mut SortBar {
        &mut self.sort_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }
}
