use anyhow::Result;
use chrono::NaiveDate;
use meetcal_core::date::is_past;
use meetcal_core::query::{meetings_on_day, search_meetings, sort_by_start_time};
use owo_colors::OwoColorize;

use super::load_meetings;
use crate::render::{pluralize_meetings, render_meeting_card};

pub fn run(day: NaiveDate, search: Option<&str>, today: NaiveDate) -> Result<()> {
    let meetings = load_meetings()?;
    let on_day = meetings_on_day(&meetings, day);
    let agenda = sort_by_start_time(search_meetings(on_day, search.unwrap_or_default()));

    let heading = day.format("%A, %B %-d, %Y").to_string();
    if day == today {
        println!("{} {}", heading.bold(), "(today)".dimmed());
    } else {
        println!("{}", heading.bold());
    }
    println!("{}", format!("{} scheduled", pluralize_meetings(agenda.len())).dimmed());

    if agenda.is_empty() {
        println!("\n{}", "No meetings scheduled for this date.".dimmed());
        return Ok(());
    }

    if is_past(day, today) && agenda.iter().any(|m| !m.is_synced) {
        println!("{}", "The meeting date has passed and cannot be modified.".red());
    }

    for meeting in agenda {
        println!();
        for line in render_meeting_card(meeting, today) {
            println!("  {line}");
        }
    }

    Ok(())
}
