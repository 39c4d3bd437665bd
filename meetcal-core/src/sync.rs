//! Simulated sync of a meeting to an external calendar.
//!
//! There is no real remote: a sync is a single pause standing in for the
//! network round-trip, after which the meeting is marked synced. The pause is
//! injected through [`Delay`] so tests can skip it, and every command carries
//! a [`SessionToken`] so a result arriving after its session ended is dropped.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::DEFAULT_SYNC_DELAY_MS;
use crate::meeting::Meeting;
use crate::store::{KeyValueStore, MeetingStore};

/// Source of the simulated round-trip pause.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real wall-clock pause on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Resolves immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// A UI session that sync results belong to.
///
/// Ending the session bumps its generation; tokens issued before that no
/// longer count as current.
#[derive(Debug, Clone, Default)]
pub struct SyncSession {
    generation: Arc<AtomicU64>,
}

impl SyncSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> SessionToken {
        SessionToken {
            generation: Arc::clone(&self.generation),
            issued: self.generation.load(Ordering::SeqCst),
        }
    }

    pub fn end(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct SessionToken {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl SessionToken {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }
}

/// How a sync command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The meeting was marked synced; carries the updated collection.
    Synced(Vec<Meeting>),
    AlreadySynced,
    /// Meetings on past days cannot be modified.
    Past,
    NotFound,
    /// The session ended during the pause; nothing was written.
    Abandoned,
}

/// Mark one meeting as synced after the simulated round-trip.
pub struct SyncCommand {
    meeting_id: u64,
    delay: Duration,
    token: SessionToken,
}

impl SyncCommand {
    pub fn new(meeting_id: u64, token: SessionToken) -> Self {
        SyncCommand {
            meeting_id,
            delay: Duration::from_millis(DEFAULT_SYNC_DELAY_MS),
            token,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn meeting_id(&self) -> u64 {
        self.meeting_id
    }

    pub async fn run<S, D>(self, store: &mut MeetingStore<S>, delay: &D, today: NaiveDate) -> SyncOutcome
    where
        S: KeyValueStore,
        D: Delay,
    {
        let meetings = store.load();
        let Some(meeting) = meetings.iter().find(|m| m.id == self.meeting_id) else {
            return SyncOutcome::NotFound;
        };
        if meeting.is_synced {
            return SyncOutcome::AlreadySynced;
        }
        if meeting.is_past(today) {
            return SyncOutcome::Past;
        }

        delay.sleep(self.delay).await;

        if !self.token.is_current() {
            debug!(id = self.meeting_id, "Session ended before sync completed");
            return SyncOutcome::Abandoned;
        }

        SyncOutcome::Synced(store.update_sync_status(self.meeting_id, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_meetings;
    use crate::store::MemoryStore;

    fn store() -> MeetingStore<MemoryStore> {
        MeetingStore::new(MemoryStore::default(), default_meetings())
    }

    fn sept_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn is_synced(store: &mut MeetingStore<MemoryStore>, id: u64) -> bool {
        store.load().iter().any(|m| m.id == id && m.is_synced)
    }

    #[tokio::test]
    async fn marks_meeting_synced() {
        let mut store = store();
        let session = SyncSession::new();

        let outcome = SyncCommand::new(2, session.token())
            .run(&mut store, &NoDelay, sept_first())
            .await;

        let SyncOutcome::Synced(meetings) = outcome else {
            panic!("expected Synced, got {outcome:?}");
        };
        assert!(meetings.iter().find(|m| m.id == 2).unwrap().is_synced);
        assert!(is_synced(&mut store, 2));
        assert!(!is_synced(&mut store, 1));
    }

    #[tokio::test]
    async fn unknown_and_already_synced() {
        let mut store = store();
        let session = SyncSession::new();

        let outcome = SyncCommand::new(404, session.token())
            .run(&mut store, &NoDelay, sept_first())
            .await;
        assert_eq!(outcome, SyncOutcome::NotFound);

        store.update_sync_status(1, true);
        let outcome = SyncCommand::new(1, session.token())
            .run(&mut store, &NoDelay, sept_first())
            .await;
        assert_eq!(outcome, SyncOutcome::AlreadySynced);
    }

    #[tokio::test]
    async fn past_meetings_are_not_synced() {
        let mut store = store();
        let session = SyncSession::new();
        let later = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();

        let outcome = SyncCommand::new(10, session.token())
            .run(&mut store, &NoDelay, later)
            .await;

        assert_eq!(outcome, SyncOutcome::Past);
        assert!(!is_synced(&mut store, 10));
    }

    #[tokio::test]
    async fn ended_session_is_a_noop() {
        let mut store = store();
        let session = SyncSession::new();
        let token = session.token();
        session.end();

        let outcome = SyncCommand::new(1, token)
            .run(&mut store, &NoDelay, sept_first())
            .await;

        assert_eq!(outcome, SyncOutcome::Abandoned);
        assert!(!is_synced(&mut store, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn session_ending_during_delay_abandons() {
        let mut store = store();
        let session = SyncSession::new();
        let command =
            SyncCommand::new(1, session.token()).with_delay(Duration::from_millis(300));

        let (outcome, ()) = tokio::join!(command.run(&mut store, &TokioDelay, sept_first()), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            session.end();
        });

        assert_eq!(outcome, SyncOutcome::Abandoned);
        assert!(!is_synced(&mut store, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_delay() {
        let mut store = store();
        let session = SyncSession::new();
        let start = tokio::time::Instant::now();

        let outcome = SyncCommand::new(1, session.token())
            .run(&mut store, &TokioDelay, sept_first())
            .await;

        assert!(matches!(outcome, SyncOutcome::Synced(_)));
        assert!(start.elapsed() >= Duration::from_millis(DEFAULT_SYNC_DELAY_MS));
    }

    #[test]
    fn new_tokens_are_current_after_end() {
        let session = SyncSession::new();
        let old = session.token();
        session.end();

        assert!(!old.is_current());
        assert!(session.token().is_current());
    }
}
