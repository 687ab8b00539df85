use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the remote user directory.
///
/// Every field is optional on the wire. Missing, null or oddly typed values
/// become empty and are shown with a placeholder instead of failing the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(
        default,
        rename = "avatar",
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

impl UserRecord {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "(no name)"
        } else {
            &self.name
        }
    }

    pub fn display_company(&self) -> &str {
        if self.company.trim().is_empty() {
            "(no company)"
        } else {
            &self.company
        }
    }

    /// Up to two uppercase initials taken from the name.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Terminal stand-in for the avatar image.
    pub fn avatar_badge(&self) -> String {
        match self.avatar_url {
            Some(_) => format!("[{:<2}]", self.initials()),
            None => "[??]".to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_string(deserializer)?;
    Ok(if value.trim().is_empty() {
        None
    } else {
        Some(value)
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortField {
    #[default]
    Name,
    Company,
}

impl SortField {
    pub const ALL: [SortField; 2] = [SortField::Name, SortField::Company];

    /// Value sent as `sortBy`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Company => "company",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Company => "Company",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "company" => Ok(SortField::Company),
            other => Err(format!(
                "unknown sort field '{other}' (expected 'name' or 'company')"
            )),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Value sent as `order`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!(
                "unknown sort order '{other}' (expected 'asc' or 'desc')"
            )),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Switching to another field always starts ascending; picking the
    /// current field flips the direction.
    pub fn toggle(self, field: SortField) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }

    pub fn is_active(&self, field: SortField) -> bool {
        self.field == field
    }
}

/// Everything a fetch is keyed on. Equal queries never cause a second request.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct UserQuery {
    pub sort: SortSpec,
    pub search: String,
}

impl UserQuery {
    pub fn new(sort: SortSpec, search: impl Into<String>) -> Self {
        Self {
            sort,
            search: search.into(),
        }
    }

    /// Query parameters in the order the endpoint documents them.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("sortBy", self.sort.field.as_str()),
            ("order", self.sort.direction.as_str()),
            ("search", self.search.as_str()),
        ]
    }

    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params())
            .finish()
    }
}

// Fetch request sent to the worker; the id orders requests by dispatch time
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    pub id: u64,
    pub query: UserQuery,
}
