/// Storage key holding the serialized meeting collection.
pub const MEETINGS_KEY: &str = "meetings";

/// Storage key marking that the pre-v2 storage format has been discarded.
pub const MIGRATION_FLAG_KEY: &str = "meetings_migrated_v2";

/// Simulated round-trip before a meeting is marked synced.
pub const DEFAULT_SYNC_DELAY_MS: u64 = 300;
