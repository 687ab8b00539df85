use crate::interactive_ratatui::domain::models::UserRecord;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::text::{Line, Span};

/// Trait for items that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// Creates the single display line for the item
    fn create_line(&self, max_width: usize) -> Line<'static>;
}

impl ListItem for UserRecord {
    fn create_line(&self, max_width: usize) -> Line<'static> {
        let badge = self.avatar_badge();
        let badge_style = if self.avatar_url.is_some() {
            Styles::avatar()
        } else {
            Styles::dimmed()
        };

        // Badge plus the two separating spaces
        let text_width = max_width.saturating_sub(badge.chars().count() + 3);
        let name = truncate_text(self.display_name(), text_width / 2);
        let company = truncate_text(self.display_company(), text_width - text_width / 2);

        Line::from(vec![
            Span::styled(badge, badge_style),
            Span::raw(" "),
            Span::styled(name, Styles::normal()),
            Span::raw("  "),
            Span::styled(company, Styles::dimmed()),
        ])
    }
}

/// Truncate to `max_chars` characters, marking the cut with "..."
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut truncated: String = text.chars().take(max_chars - 3).collect();
    truncated.push_str("...");
    truncated
}
