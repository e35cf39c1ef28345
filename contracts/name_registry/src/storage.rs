//! Typed access to registry state.
//!
//! | Key                               | Tier           | Lifecycle        |
//! |-----------------------------------|----------------|------------------|
//! | `Record(config_address)`          | `instance()`   | Entire contract  |
//! | `Token`, `FeePool`, `Fees*`       | `instance()`   | Entire contract  |
//! | `NameCount`                       | `instance()`   | Entire contract  |
//! | `Record(name_address(name))`      | `persistent()` | Per name         |
//! | `Record(reverse_address(owner))`  | `persistent()` | Per owner        |
//! | `NameAt(i)`                       | `persistent()` | Per name         |
//! | `OwnerNameCount(owner)`           | `persistent()` | Per owner        |
//! | `OwnerNameAt(owner, i)`           | `persistent()` | Per name         |
//!
//! The name index is one small entry per name plus a counter, so a
//! registration writes the same number of bytes however many names exist.
//!
//! Every persistent entry found on a read or written is bumped toward one
//! registration term of TTL. The instance is bumped by each mutating entry
//! point through [`bump_instance`].

use crate::address::{config_address, name_address, reverse_address};
use crate::constants::{TTL_SLACK, TTL_TARGET};
use crate::types::{Config, DataKey, NameRecord, ReverseRecord};
use name_registry_errors::RegistryError;
use soroban_sdk::{Address, Env, String};

// ─── TTL ───────────────────────────────────────────────────────────────────

/// `(threshold, extend_to)` for the current network limits.
fn ttl_bounds(e: &Env) -> (u32, u32) {
    let target = TTL_TARGET.min(e.storage().max_ttl());
    (target.saturating_sub(TTL_SLACK), target)
}

pub fn bump_instance(e: &Env) {
    let (threshold, target) = ttl_bounds(e);
    e.storage().instance().extend_ttl(threshold, target);
}

fn bump(e: &Env, key: &DataKey) {
    let (threshold, target) = ttl_bounds(e);
    e.storage().persistent().extend_ttl(key, threshold, target);
}

// ─── Config ────────────────────────────────────────────────────────────────

pub fn has_config(e: &Env) -> bool {
    e.storage()
        .instance()
        .has(&DataKey::Record(config_address(e)))
}

pub fn load_config(e: &Env) -> Result<Config, RegistryError> {
    e.storage()
        .instance()
        .get(&DataKey::Record(config_address(e)))
        .ok_or(RegistryError::NotInitialized)
}

pub fn save_config(e: &Env, config: &Config) {
    e.storage()
        .instance()
        .set(&DataKey::Record(config_address(e)), config);
}

pub fn load_token(e: &Env) -> Result<Address, RegistryError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(RegistryError::NotInitialized)
}

pub fn save_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

// ─── Counters ──────────────────────────────────────────────────────────────

pub fn read_amount(e: &Env, key: &DataKey) -> i128 {
    e.storage().instance().get(key).unwrap_or(0)
}

pub fn write_amount(e: &Env, key: &DataKey, amount: i128) {
    e.storage().instance().set(key, &amount);
}

// ─── Name records ──────────────────────────────────────────────────────────

pub fn has_name(e: &Env, name: &String) -> bool {
    let key = DataKey::Record(name_address(e, name));
    let found = e.storage().persistent().has(&key);
    if found {
        bump(e, &key);
    }
    found
}

/// Read a name record and bump its TTL, or `NotFound`.
pub fn load_name(e: &Env, name: &String) -> Result<NameRecord, RegistryError> {
    let key = DataKey::Record(name_address(e, name));
    let record: NameRecord = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RegistryError::NotFound)?;
    bump(e, &key);
    Ok(record)
}

pub fn save_name(e: &Env, record: &NameRecord) {
    let key = DataKey::Record(name_address(e, &record.name));
    e.storage().persistent().set(&key, record);
    bump(e, &key);
}

// ─── Reverse records ───────────────────────────────────────────────────────

pub fn load_reverse(e: &Env, owner: &Address) -> Option<ReverseRecord> {
    let key = DataKey::Record(reverse_address(e, owner));
    let record: Option<ReverseRecord> = e.storage().persistent().get(&key);
    if record.is_some() {
        bump(e, &key);
    }
    record
}

pub fn save_reverse(e: &Env, owner: &Address, record: &ReverseRecord) {
    let key = DataKey::Record(reverse_address(e, owner));
    e.storage().persistent().set(&key, record);
    bump(e, &key);
}

// ─── Name index ────────────────────────────────────────────────────────────

pub fn name_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::NameCount).unwrap_or(0)
}

pub fn owner_name_count(e: &Env, owner: &Address) -> u32 {
    let key = DataKey::OwnerNameCount(owner.clone());
    let count: Option<u32> = e.storage().persistent().get(&key);
    if count.is_some() {
        bump(e, &key);
    }
    count.unwrap_or(0)
}

fn load_indexed(e: &Env, key: &DataKey) -> Option<String> {
    let name: Option<String> = e.storage().persistent().get(key);
    if name.is_some() {
        bump(e, key);
    }
    name
}

pub fn name_at(e: &Env, index: u32) -> Option<String> {
    load_indexed(e, &DataKey::NameAt(index))
}

pub fn owner_name_at(e: &Env, owner: &Address, index: u32) -> Option<String> {
    load_indexed(e, &DataKey::OwnerNameAt(owner.clone(), index))
}

/// Append `name` to the global index and to `owner`'s index.
pub fn append_index(e: &Env, owner: &Address, name: &String) -> Result<(), RegistryError> {
    let storage = e.storage().persistent();

    let count = name_count(e);
    let next = count.checked_add(1).ok_or(RegistryError::Overflow)?;
    let owned = owner_name_count(e, owner);
    let next_owned = owned.checked_add(1).ok_or(RegistryError::Overflow)?;

    let at = DataKey::NameAt(count);
    storage.set(&at, name);
    bump(e, &at);
    e.storage().instance().set(&DataKey::NameCount, &next);

    let owned_at = DataKey::OwnerNameAt(owner.clone(), owned);
    storage.set(&owned_at, name);
    bump(e, &owned_at);
    let owned_count = DataKey::OwnerNameCount(owner.clone());
    storage.set(&owned_count, &next_owned);
    bump(e, &owned_count);
    Ok(())
}
