pub mod config;
pub mod day;
pub mod month;
pub mod reset;
pub mod search;
pub mod sync;
pub mod week;

use anyhow::Result;
use meetcal_core::Meeting;
use meetcal_core::meetcal::Meetcal;
use meetcal_core::store::{FileStore, MeetingStore};

/// Open the configured store with the one-time migration applied.
fn open_store() -> Result<(Meetcal, MeetingStore<FileStore>)> {
    let meetcal = Meetcal::load()?;
    let mut store = meetcal.open_store();
    store.migrate();
    Ok((meetcal, store))
}

/// Every stored meeting.
fn load_meetings() -> Result<Vec<Meeting>> {
    let (_, mut store) = open_store()?;
    Ok(store.load())
}
