//! Terminal rendering for meetcal types.
//!
//! Category colors: client meetings are magenta, internal ones cyan.

use chrono::{Datelike, NaiveDate};
use meetcal_core::date::{MonthCursor, is_same_local_day};
use meetcal_core::query::meetings_on_day;
use meetcal_core::{Category, Meeting};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let tag = format!("[{}]", self);
        match self {
            Category::Client => tag.magenta().to_string(),
            Category::Internal => tag.cyan().to_string(),
        }
    }
}

impl Render for Meeting {
    fn render(&self) -> String {
        format!("{} {}", self.title.bold(), self.category.render())
    }
}

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Visible width of one month-grid cell ("dd" + space + markers).
const CELL_WIDTH: usize = 7;

/// Markers shown per cell before collapsing into "+"
const MAX_MARKERS: usize = 3;

fn category_marker(category: Category) -> String {
    match category {
        Category::Client => "●".magenta().to_string(),
        Category::Internal => "●".cyan().to_string(),
    }
}

/// Sync badge for a meeting: synced, past (locked), or its id to pass to `meetcal sync`.
pub fn sync_badge(meeting: &Meeting, today: NaiveDate) -> String {
    if meeting.is_synced {
        "✓ Synced".green().to_string()
    } else if meeting.is_past(today) {
        "Past".dimmed().to_string()
    } else {
        format!("sync #{}", meeting.id).yellow().to_string()
    }
}

/// Full meeting card: time, title, category, badge, then organizer and attendees.
pub fn render_meeting_card(meeting: &Meeting, today: NaiveDate) -> Vec<String> {
    vec![
        format!(
            "{}  {}  {}",
            meeting.time.dimmed(),
            meeting.render(),
            sync_badge(meeting, today)
        ),
        format!(
            "    {} {}  {} {}",
            "By:".dimmed(),
            meeting.initiator,
            "Attendees:".dimmed(),
            meeting.attendees.join(", ")
        ),
    ]
}

/// Render the padded month grid with per-day category markers.
pub fn render_month(cursor: MonthCursor, meetings: &[&Meeting], today: NaiveDate) -> String {
    let mut lines = vec![cursor.label().bold().to_string()];

    lines.push(
        WEEKDAY_HEADERS
            .iter()
            .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in cursor.grid().chunks(7) {
        let row: String = week
            .iter()
            .map(|day| render_cell(*day, &cursor, &meetings_on_day(meetings.iter().copied(), *day), today))
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

fn render_cell(day: NaiveDate, cursor: &MonthCursor, meetings: &[&Meeting], today: NaiveDate) -> String {
    let number = format!("{:>2}", day.day());
    let number = if is_same_local_day(day, today) {
        number.reversed().bold().to_string()
    } else if !cursor.contains(day) {
        number.dimmed().to_string()
    } else {
        number
    };

    let mut markers: String = meetings
        .iter()
        .take(MAX_MARKERS)
        .map(|m| category_marker(m.category))
        .collect();
    let mut visible = 3 + meetings.len().min(MAX_MARKERS);
    if meetings.len() > MAX_MARKERS {
        markers.push('+');
        visible += 1;
    }

    let padding = " ".repeat(CELL_WIDTH.saturating_sub(visible));
    format!("{number} {markers}{padding}")
}

/// "3 meetings" / "1 meeting"
pub fn pluralize_meetings(count: usize) -> String {
    if count == 1 {
        "1 meeting".to_string()
    } else {
        format!("{count} meetings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes() {
        assert_eq!(pluralize_meetings(0), "0 meetings");
        assert_eq!(pluralize_meetings(1), "1 meeting");
        assert_eq!(pluralize_meetings(2), "2 meetings");
    }

    /// Drop ANSI color sequences so assertions see visible text only.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn month_has_header_weekdays_and_week_rows() {
        let meetings = meetcal_core::seed::default_meetings();
        let refs: Vec<&Meeting> = meetings.iter().collect();
        let today = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();

        let rendered = strip_ansi(&render_month(MonthCursor::new(2025, 8), &refs, today));
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "September 2025");
        assert!(lines[1].starts_with("Sun"));
        assert_eq!(lines.len(), 2 + 5);
        // Sep 29 row carries two markers, Oct 1 one
        assert!(lines[6].contains("29 ●●"));
        assert!(lines[6].contains(" 1 ●"));
    }
}
