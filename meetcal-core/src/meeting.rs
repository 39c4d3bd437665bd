//! The meeting record and its category tag.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date::{is_past, parse_local_date};

/// Separator between start and end in a meeting's `time` text.
const TIME_RANGE_SEPARATOR: &str = " - ";

/// A scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: u64,
    /// Local calendar day as `YYYY-MM-DD`
    pub date: String,
    pub title: String,
    /// Organizer name
    pub initiator: String,
    pub attendees: Vec<String>,
    /// Display time range, e.g. "10:00 AM - 11:00 AM"
    pub time: String,
    pub is_synced: bool,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
}

/// Meeting category, used for coloring.
///
/// Stored meetings without a category (or with one we don't know) are
/// treated as internal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Client,
    #[default]
    Internal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Client => "client",
            Category::Internal => "internal",
        }
    }

    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "client" => Category::Client,
            _ => Category::Internal,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.as_deref().map(Category::from_name).unwrap_or_default())
}

impl Meeting {
    /// The meeting's calendar day, or `None` if `date` is not a recognizable date.
    pub fn local_date(&self) -> Option<NaiveDate> {
        parse_local_date(&self.date)
    }

    /// Start of the time range: the text before the first " - " (or the whole text).
    pub fn start_time(&self) -> &str {
        self.time
            .split_once(TIME_RANGE_SEPARATOR)
            .map_or(self.time.as_str(), |(start, _)| start)
    }

    /// Copy of this meeting with `is_synced` replaced.
    pub fn with_sync_status(&self, is_synced: bool) -> Meeting {
        Meeting {
            is_synced,
            ..self.clone()
        }
    }

    /// Past meetings can no longer be modified. Undated meetings never count as past.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.local_date().is_some_and(|day| is_past(day, today))
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
