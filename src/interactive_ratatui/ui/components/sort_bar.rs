use crate::interactive_ratatui::domain::models::{SortDirection, SortField, SortSpec};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Row of sort buttons, one per field.
///
/// Only the active button shows the current direction; inactive buttons keep
/// a dimmed ascending arrow.
#[derive(Default)]
pub struct SortBar {
    sort: SortSpec,
}

impl SortBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    fn shortcut(field: SortField) -> &'static str {
        match field {
            SortField::Name => "F2",
            SortField::Company => "F3",
        }
    }

    pub fn button_spans(&self, field: SortField) -> Vec<Span<'static>> {
        let label = format!("[ {} ", field.label());
        if self.sort.is_active(field) {
            vec![
                Span::styled(label, Styles::active_button()),
                Span::styled(self.sort.direction.arrow(), Styles::active_button()),
                Span::styled(" ]", Styles::active_button()),
            ]
        } else {
            vec![
                Span::styled(label, Styles::normal()),
                Span::styled(SortDirection::Ascending.arrow(), Styles::dimmed()),
                Span::styled(" ]", Styles::normal()),
            ]
        }
    }
}

impl Component for SortBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("Order: ", Styles::title())];
        for field in SortField::ALL {
            spans.extend(self.button_spans(field));
            spans.push(Span::styled(
                format!(" {}  ", Self::shortcut(field)),
                Styles::dimmed(),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let field = match key.code {
            KeyCode::F(2) => SortField::Name,
            KeyCode::F(3) => SortField::Company,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::ALT) => SortField::Name,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::ALT) => SortField::Company,
            _ => return None,
        };
        Some(Message::ToggleSort(field))
    }
}
