//! Registry bounds, terms and storage tuning.

/// Maximum name length in bytes.
pub const MAX_NAME_LEN: u32 = 32;

/// Maximum metadata length in bytes.
pub const MAX_METADATA_LEN: u32 = 280;

/// Validity granted by one registration or renewal (365 days).
pub const REGISTRATION_TERM: i64 = 31_536_000;

/// A name this close to expiry reports `NameStatus::ExpiringSoon` (30 days).
pub const EXPIRING_SOON_WINDOW: i64 = 30 * 86_400;

/// Window used by `get_stats` when counting names about to lapse (7 days).
pub const STATS_EXPIRING_WINDOW: i64 = 7 * 86_400;

// ─── Namespace tags ────────────────────────────────────────────────────────

pub const CONFIG_TAG: &[u8] = b"config";

pub const NAME_TAG: &[u8] = b"name";

pub const REVERSE_TAG: &[u8] = b"reverse";

// ─── Pagination ────────────────────────────────────────────────────────────

/// Upper bound on `limit` for the paged index views.
pub const MAX_PAGE_SIZE: u32 = 100;

// ─── TTL ───────────────────────────────────────────────────────────────────

/// Ledgers per day at 5 s/ledger.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Target TTL for the instance and every persistent entry: one registration
/// term. Clamped to the network's maximum entry TTL at bump time.
pub const TTL_TARGET: u32 = (REGISTRATION_TERM / 5) as u32;

/// Entries are bumped once less than `TTL_TARGET - TTL_SLACK` ledgers remain.
pub const TTL_SLACK: u32 = DAY_IN_LEDGERS;
