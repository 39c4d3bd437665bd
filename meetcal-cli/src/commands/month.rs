use anyhow::Result;
use chrono::NaiveDate;
use meetcal_core::date::MonthCursor;
use meetcal_core::query::search_meetings;
use owo_colors::OwoColorize;

use super::load_meetings;
use crate::render::{pluralize_meetings, render_month};

pub fn run(cursor: MonthCursor, search: Option<&str>, today: NaiveDate) -> Result<()> {
    let meetings = load_meetings()?;
    let visible = search_meetings(&meetings, search.unwrap_or_default());

    println!("{}", render_month(cursor, &visible, today));

    let in_month = visible
        .iter()
        .filter(|m| m.local_date().is_some_and(|d| cursor.contains(d)))
        .count();
    println!();
    println!("{}", format!("{} this month", pluralize_meetings(in_month)).dimmed());
    println!(
        "{}",
        format!(
            "Previous: meetcal month -y {} -m {}   Next: meetcal month -y {} -m {}",
            cursor.prev().year(),
            cursor.prev().month_index() + 1,
            cursor.next().year(),
            cursor.next().month_index() + 1,
        )
        .dimmed()
    );

    Ok(())
}
