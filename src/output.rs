use crate::interactive_ratatui::domain::models::{UserQuery, UserRecord};
use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One line per user: badge, name, company and avatar URL when present.
pub fn format_user_line(user: &UserRecord) -> String {
    let mut line = format!(
        "{} {}  ({})",
        user.avatar_badge(),
        user.display_name(),
        user.display_company()
    );
    if let Some(avatar) = &user.avatar_url {
        line.push_str("  ");
        line.push_str(avatar);
    }
    line
}

pub fn write_users<W: Write>(
    out: &mut W,
    query: &UserQuery,
    users: &[UserRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if users.is_empty() {
                writeln!(out, "No users found.")?;
            } else {
                for user in users {
                    writeln!(out, "{}", format_user_line(user))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sortBy": query.sort.field.as_str(),
                "order": query.sort.direction.as_str(),
                "search": query.search,
                "count": users.len(),
                "users": users,
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
