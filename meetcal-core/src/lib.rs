//! Core of the meetcal meeting calendar.
//!
//! - `date`: local calendar-day parsing, formatting and month/week grids
//! - `meeting` and `query`: the meeting record and pure queries over a collection
//! - `store`: persistence of the collection over a key-value backend
//! - `sync`: the simulated sync round-trip
//! - `meetcal`: configuration and the store it points at

pub mod constants;
pub mod date;
pub mod error;
pub mod meetcal;
pub mod meetcal_config;
pub mod meeting;
pub mod query;
pub mod seed;
pub mod store;
pub mod sync;

pub use meeting::{Category, Meeting};
