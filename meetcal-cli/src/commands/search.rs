use anyhow::Result;
use meetcal_core::date::format_local_date;
use meetcal_core::query::{search_meetings, sort_by_start_time};
use owo_colors::OwoColorize;

use super::load_meetings;
use crate::render::{Render, pluralize_meetings};

pub fn run(query: &str) -> Result<()> {
    let meetings = load_meetings()?;

    // Undated meetings cannot be placed in the calendar and are left out
    let mut found: Vec<_> = search_meetings(&meetings, query)
        .into_iter()
        .filter_map(|m| m.local_date().map(|d| (d, m)))
        .collect();
    found.sort_by_key(|(date, _)| *date);

    if found.is_empty() {
        println!("{}", "No meetings found".dimmed());
        return Ok(());
    }

    println!("{}", format!("{} found", pluralize_meetings(found.len())).dimmed());

    for group in found.chunk_by(|a, b| a.0 == b.0) {
        let date = group[0].0;
        println!();
        println!("{}", format_local_date(date).bold());

        let sorted = sort_by_start_time(group.iter().map(|(_, m)| *m).collect::<Vec<_>>());
        for meeting in sorted {
            println!(
                "  {} {} {}",
                meeting.start_time().dimmed(),
                meeting.render(),
                format!("#{}", meeting.id).dimmed()
            );
        }
    }

    Ok(())
}
