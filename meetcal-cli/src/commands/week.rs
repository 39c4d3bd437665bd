use anyhow::Result;
use chrono::NaiveDate;
use meetcal_core::date::{is_same_local_day, week_of};
use meetcal_core::query::{meetings_on_day, search_meetings};
use owo_colors::OwoColorize;

use super::load_meetings;
use crate::render::{Render, sync_badge};

pub fn run(day: NaiveDate, search: Option<&str>, today: NaiveDate) -> Result<()> {
    let meetings = load_meetings()?;
    let visible = search_meetings(&meetings, search.unwrap_or_default());

    for (i, date) in week_of(day).into_iter().enumerate() {
        if i > 0 {
            println!();
        }

        let label = date.format("%a %b %-d").to_string();
        if is_same_local_day(date, today) {
            println!("{} {}", label.bold(), "(today)".dimmed());
        } else {
            println!("{}", label.bold());
        }

        let on_day = meetings_on_day(visible.iter().copied(), date);
        if on_day.is_empty() {
            println!("  {}", "No meetings".dimmed());
        }
        for meeting in on_day {
            println!(
                "  {} {} {}",
                meeting.start_time().dimmed(),
                meeting.render(),
                sync_badge(meeting, today)
            );
        }
    }

    Ok(())
}
