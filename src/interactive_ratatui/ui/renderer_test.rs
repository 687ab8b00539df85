#[cfg(test)]
mod tests {
    use super::super::app_state::AppState;
    use super::super::events::Message;
    use super::super::renderer::Renderer;
    use crate::interactive_ratatui::domain::models::{SortField, UserRecord};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_screen(state: &AppState) -> String {
        let mut renderer = Renderer::new();
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| renderer.render(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_state(users: Vec<UserRecord>) -> AppState {
        let mut state = AppState::new();
        state.update(Message::Refresh);
        let id = state.search.current_fetch_id;
        state.update(Message::FetchCompleted { id, users });
        state
    }

    #[test]
    fn test_initial_mount_renders_loading() {
        let mut state = AppState::new();
        state.update(Message::Refresh);

        let screen = render_screen(&state);
        assert!(screen.contains("Loading users..."));
        assert!(screen.contains("Search [loading]"));
        assert!(screen.contains("Name ↑"));
    }

    #[test]
    fn test_loaded_state_renders_users_and_avatar() {
        let state = loaded_state(vec![UserRecord {
            id: "1".to_string(),
            name: "Ada Lovelace".to_string(),
            company: "Analytical".to_string(),
            avatar_url: Some("https://example.com/ada.png".to_string()),
        }]);

        let screen = render_screen(&state);
        assert!(screen.contains("Ada Lovelace"));
        assert!(screen.contains("Analytical"));
        assert!(screen.contains("https://example.com/ada.png"));
        assert!(!screen.contains("Loading users..."));
    }

    #[test]
    fn test_error_line_is_shown() {
        let mut state = loaded_state(Vec::new());
        state.update(Message::Refresh);
        let id = state.search.current_fetch_id;
        state.update(Message::FetchFailed {
            id,
            error: "connection refused".to_string(),
        });

        let screen = render_screen(&state);
        assert!(screen.contains("Failed to load users: connection refused"));
        assert!(screen.contains("No users found"));
    }

    #[test]
    fn test_sort_indicator_tracks_state() {
        let mut state = loaded_state(Vec::new());
        state.update(Message::ToggleSort(SortField::Company));
        state.update(Message::ToggleSort(SortField::Company));

        let screen = render_screen(&state);
        assert!(screen.contains("Company ↓"));
        assert!(screen.contains("Name ↑"));
    }

    #[test]
    fn test_display_query_is_echoed_before_debounce() {
        let mut state = loaded_state(Vec::new());
        state.update(Message::QueryChanged("acm".to_string()));

        let screen = render_screen(&state);
        assert!(screen.contains("acm"));
        assert!(screen.contains("typing..."));
        assert_eq!(state.search.effective_query, "");
    }
}
