//! Pure queries over a meeting collection.
//!
//! Nothing here performs I/O or mutates its input.

use std::borrow::Borrow;

use chrono::NaiveDate;

use crate::date::{LocalDay, is_same_local_day};
use crate::meeting::Meeting;

/// Meetings falling on `day`, in input order.
///
/// Meetings whose `date` does not parse are skipped.
pub fn meetings_on_day<'a, I>(meetings: I, day: impl LocalDay) -> Vec<&'a Meeting>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    let day: NaiveDate = day.local_day();
    meetings
        .into_iter()
        .filter(|m| m.local_date().is_some_and(|d| is_same_local_day(d, day)))
        .collect()
}

/// Case-insensitive substring search over title, attendees and initiator.
///
/// A blank query matches everything.
pub fn search_meetings<'a, I>(meetings: I, query: &str) -> Vec<&'a Meeting>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    if query.trim().is_empty() {
        return meetings.into_iter().collect();
    }

    let query = query.to_lowercase();
    meetings
        .into_iter()
        .filter(|m| matches_query(m, &query))
        .collect()
}

fn matches_query(meeting: &Meeting, query: &str) -> bool {
    meeting.title.to_lowercase().contains(query)
        || meeting
            .attendees
            .iter()
            .any(|a| a.to_lowercase().contains(query))
        || meeting.initiator.to_lowercase().contains(query)
}

/// Order by the start of the `time` text, compared as plain strings.
///
/// The comparison is textual, so "10:00 AM" sorts before "9:00 AM". The sort
/// is stable: meetings with the same start keep their relative order.
pub fn sort_by_start_time<M: Borrow<Meeting>>(mut meetings: Vec<M>) -> Vec<M> {
    meetings.sort_by(|a, b| a.borrow().start_time().cmp(b.borrow().start_time()));
    meetings
}

/// New collection with the meeting `id` carrying `is_synced`.
///
/// Unknown ids give back an unchanged copy.
pub fn update_sync_status(meetings: &[Meeting], id: u64, is_synced: bool) -> Vec<Meeting> {
    meetings
        .iter()
        .map(|m| {
            if m.id == id {
                m.with_sync_status(is_synced)
            } else {
                m.clone()
            }
        })
        .collect()
}
