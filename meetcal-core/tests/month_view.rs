use chrono::NaiveDate;
use meetcal_core::date::{format_local_date, month_grid, parse_local_date};
use meetcal_core::query::{meetings_on_day, search_meetings, sort_by_start_time};
use meetcal_core::seed::default_meetings;
use meetcal_core::store::{FileStore, MeetingStore};
use meetcal_core::sync::{NoDelay, SyncCommand, SyncOutcome, SyncSession};

fn day(s: &str) -> NaiveDate {
    parse_local_date(s).unwrap()
}

#[test]
fn september_grid_buckets_seed_meetings() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = MeetingStore::new(FileStore::new(dir.path()), default_meetings());
    store.migrate();
    let meetings = store.load();

    let grid = month_grid(2025, 8);
    let cell = grid
        .iter()
        .copied()
        .find(|d| format_local_date(*d) == "2025-09-29")
        .expect("grid should contain 2025-09-29");

    let on_day = meetings_on_day(&meetings, cell);
    let ids: Vec<_> = on_day.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(on_day.iter().all(|m| !m.is_synced));

    // October 1st is in the trailing week of the September grid
    assert!(grid.contains(&day("2025-10-01")));
    assert_eq!(meetings_on_day(&meetings, day("2025-10-01")).len(), 1);
}

#[test]
fn day_agenda_is_searched_then_sorted() {
    let meetings = default_meetings();
    let on_day = meetings_on_day(&meetings, day("2025-09-29"));

    let sorted = sort_by_start_time(search_meetings(on_day, "a"));
    let titles: Vec<_> = sorted.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Team Sync", "Client Meeting"]);
}

#[tokio::test]
async fn sync_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let today = day("2025-09-01");

    {
        let mut store = MeetingStore::new(FileStore::new(dir.path()), default_meetings());
        store.migrate();
        let session = SyncSession::new();
        let outcome = SyncCommand::new(13, session.token())
            .run(&mut store, &NoDelay, today)
            .await;
        assert!(matches!(outcome, SyncOutcome::Synced(_)));
    }

    let mut reopened = MeetingStore::new(FileStore::new(dir.path()), default_meetings());
    assert!(!reopened.migrate());
    let meetings = reopened.load();
    let synced: Vec<_> = meetings.iter().filter(|m| m.is_synced).map(|m| m.id).collect();
    assert_eq!(synced, vec![13]);
}
