//! Lazy expiry: nothing is ever swept. A record's state is derived by
//! comparing `expires_at` with the ledger clock whenever it is read.

use crate::constants::{EXPIRING_SOON_WINDOW, REGISTRATION_TERM};
use crate::types::{NameRecord, NameStatus};
use name_registry_errors::RegistryError;
use soroban_sdk::Env;

/// Current ledger time as signed seconds.
pub fn now(e: &Env) -> i64 {
    i64::try_from(e.ledger().timestamp()).unwrap_or(i64::MAX)
}

/// Expiry for a fresh registration at `now`.
pub fn initial_expiry(now: i64) -> Result<i64, RegistryError> {
    now.checked_add(REGISTRATION_TERM)
        .ok_or(RegistryError::Overflow)
}

/// Expiry after one renewal. Extends from whichever is later, `now` or the
/// current expiry, so early renewals stack and lapsed names restart from now.
pub fn renewed_expiry(now: i64, current: i64) -> Result<i64, RegistryError> {
    now.max(current)
        .checked_add(REGISTRATION_TERM)
        .ok_or(RegistryError::Overflow)
}

pub fn is_lapsed(record: &NameRecord, now: i64) -> bool {
    now > record.expires_at
}

/// Seconds left before lapse, 0 once lapsed.
pub fn remaining(record: &NameRecord, now: i64) -> i64 {
    record.expires_at.saturating_sub(now).max(0)
}

pub fn status(record: &NameRecord, now: i64) -> NameStatus {
    if is_lapsed(record, now) {
        NameStatus::Lapsed
    } else if remaining(record, now) <= EXPIRING_SOON_WINDOW {
        NameStatus::ExpiringSoon
    } else {
        NameStatus::Active
    }
}
