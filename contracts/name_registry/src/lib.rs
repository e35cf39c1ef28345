#![no_std]

//! # Name Registry Contract
//!
//! Maps human-readable names to owner addresses. Names are bought for a
//! per-character fee, stay valid for a fixed term, and can be renewed by
//! anyone willing to pay. Each owner may point a reverse record at one of
//! their names to mark it as their primary name. Fees collect in a pool that
//! only the admin can sweep to the treasury.
//!
//! ## Records
//! - `Config` (singleton) - admin, treasury, price per character
//! - `NameRecord` (one per name) - owner, name, metadata, expiry
//! - `ReverseRecord` (one per owner) - primary name
//!
//! Every record lives at an address derived from a namespace tag and its
//! key material (see [`address`]).
//!
//! ## Expiry
//! Lapsed names are never deleted. They stay readable and renewable, and
//! cannot be registered again.

mod address;
mod constants;
mod events;
mod expiry;
mod fees;
mod storage;
mod types;
mod validation;

pub use address::{config_address, derive_address, name_address, reverse_address};
pub use constants::*;
pub use name_registry_errors::{ErrorCategory, ErrorExt, RegistryError};
pub use types::{Config, FeeSummary, NameRecord, NameStatus, RegistryStats, ReverseRecord};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use validation::{validate_metadata, validate_name};



#[cfg(test)]
mod test_renew;


#[cfg(test)]
mod test_fees;




#[contract]
pub struct NameRegistry;

#[contractimpl]
impl NameRegistry {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// Create the config record. Callable once.
    ///
    /// # Arguments
    /// * `admin` - Identity allowed to withdraw fees; fixed forever
    /// * `treasury` - Destination of withdrawn fees
    /// * `price_per_char` - Fee per name byte, in `token` smallest units
    /// * `token` - Token contract fees are charged in
    ///
    /// # Errors
    /// * `AlreadyInitialized` - config already exists
    pub fn initialize_config(
        e: Env,
        admin: Address,
        treasury: Address,
        price_per_char: u64,
        token: Address,
    ) -> Result<Config, RegistryError> {
        if storage::has_config(&e) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            treasury: treasury.clone(),
            price_per_char,
        };
        storage::save_config(&e, &config);
        storage::save_token(&e, &token);
        storage::bump_instance(&e);

        events::emit_config_initialized(&e, &admin, &treasury, price_per_char, &token);
        Ok(config)
    }

    // ── Name lifecycle ─────────────────────────────────────────────────────

    /// Register `name` to `owner` for one term, charging the per-character fee.
    ///
    /// Does not touch the owner's reverse record; use `set_reverse_record`.
    ///
    /// # Errors
    /// * `NotInitialized`
    /// * `EmptyName` / `NameTooLong` / `MetadataTooLong`
    /// * `NameAlreadyRegistered` - the name exists, even if lapsed
    /// * `InsufficientFunds` - `owner` cannot cover the fee
    pub fn register_name(
        e: Env,
        owner: Address,
        name: String,
        metadata: Option<String>,
    ) -> Result<NameRecord, RegistryError> {
        owner.require_auth();

        let config = storage::load_config(&e)?;

        let metadata = metadata.unwrap_or_else(|| String::from_str(&e, ""));
        validate_name(&name)?;
        validate_metadata(&metadata)?;

        if storage::has_name(&e, &name) {
            return Err(RegistryError::NameAlreadyRegistered);
        }

        let fee = fees::quote(&config, &name)?;
        let expires_at = expiry::initial_expiry(expiry::now(&e))?;

        fees::collect(&e, &owner, fee)?;

        let record = NameRecord {
            owner: owner.clone(),
            name: name.clone(),
            metadata,
            expires_at,
        };
        storage::save_name(&e, &record);
        storage::append_index(&e, &owner, &name)?;
        storage::bump_instance(&e);

        events::emit_name_registered(&e, &owner, &name, fee, expires_at);
        Ok(record)
    }

    /// Extend `name` by one term, charging the current per-character fee.
    ///
    /// Anyone may renew any name. The term is added to the later of now and
    /// the current expiry: early renewals stack, lapsed names restart from now.
    ///
    /// # Returns
    /// The new expiry timestamp
    ///
    /// # Errors
    /// * `NotInitialized`
    /// * `NotFound` - no such name
    /// * `InsufficientFunds` - `payer` cannot cover the fee
    pub fn renew_name(e: Env, payer: Address, name: String) -> Result<i64, RegistryError> {
        payer.require_auth();

        let config = storage::load_config(&e)?;
        let mut record = storage::load_name(&e, &name)?;

        let fee = fees::quote(&config, &record.name)?;
        let expires_at = expiry::renewed_expiry(expiry::now(&e), record.expires_at)?;

        fees::collect(&e, &payer, fee)?;

        record.expires_at = expires_at;
        storage::save_name(&e, &record);
        storage::bump_instance(&e);

        events::emit_name_renewed(&e, &payer, &name, fee, expires_at);
        Ok(expires_at)
    }

    /// Overwrite the metadata of a name `owner` holds. Empty is allowed.
    ///
    /// # Errors
    /// * `NotInitialized`
    /// * `NotFound` - no such name
    /// * `Unauthorized` - `owner` does not hold the name
    /// * `MetadataTooLong`
    pub fn update_metadata(
        e: Env,
        owner: Address,
        name: String,
        new_metadata: String,
    ) -> Result<(), RegistryError> {
        owner.require_auth();

        storage::load_config(&e)?;
        let mut record = storage::load_name(&e, &name)?;

        if record.owner != owner {
            return Err(RegistryError::Unauthorized);
        }
        validate_metadata(&new_metadata)?;

        record.metadata = new_metadata;
        storage::save_name(&e, &record);
        storage::bump_instance(&e);

        events::emit_metadata_updated(&e, &owner, &name);
        Ok(())
    }

    /// Point `owner`'s reverse record at `name`, creating or overwriting it.
    ///
    /// # Errors
    /// * `NotInitialized`
    /// * `NotFound` - no such name
    /// * `Unauthorized` - `owner` does not hold the name
    pub fn set_reverse_record(e: Env, owner: Address, name: String) -> Result<(), RegistryError> {
        owner.require_auth();

        storage::load_config(&e)?;
        let record = storage::load_name(&e, &name)?;

        if record.owner != owner {
            return Err(RegistryError::Unauthorized);
        }

        storage::save_reverse(&e, &owner, &ReverseRecord { name: name.clone() });
        storage::bump_instance(&e);

        events::emit_reverse_set(&e, &owner, &name);
        Ok(())
    }

    // ── Treasury ───────────────────────────────────────────────────────────

    /// Sweep the fee pool to the configured treasury.
    ///
    /// # Returns
    /// The amount transferred
    ///
    /// # Errors
    /// * `NotInitialized`
    /// * `Unauthorized` - `admin` is not the config admin
    /// * `NoFeesAvailable` - the pool is empty
    pub fn withdraw_fees(e: Env, admin: Address) -> Result<i128, RegistryError> {
        admin.require_auth();

        let config = storage::load_config(&e)?;
        if config.admin != admin {
            return Err(RegistryError::Unauthorized);
        }

        let amount = fees::drain(&e, &config.treasury)?;
        storage::bump_instance(&e);

        events::emit_fees_withdrawn(&e, &admin, &config.treasury, amount);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_config(e: Env) -> Result<Config, RegistryError> {
        storage::load_config(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, RegistryError> {
        storage::load_token(&e)
    }

    pub fn fee_summary(e: Env) -> FeeSummary {
        fees::summary(&e)
    }

    /// Fee for registering or renewing `name` at the current price.
    pub fn quote_price(e: Env, name: String) -> Result<i128, RegistryError> {
        let config = storage::load_config(&e)?;
        validate_name(&name)?;
        fees::quote(&config, &name)
    }

    /// The stored record, lapsed or not.
    pub fn get_name_record(e: Env, name: String) -> Result<NameRecord, RegistryError> {
        storage::load_name(&e, &name)
    }

    /// The stored reverse record. It may point at a name `owner` no longer
    /// holds or that has lapsed; see `primary_name` for a checked read.
    pub fn get_reverse_record(e: Env, owner: Address) -> Result<ReverseRecord, RegistryError> {
        storage::load_reverse(&e, &owner).ok_or(RegistryError::NotFound)
    }

    /// Owner of `name` while it is active; `None` if absent or lapsed.
    pub fn resolve_owner(e: Env, name: String) -> Option<Address> {
        let record = storage::load_name(&e, &name).ok()?;
        if expiry::is_lapsed(&record, expiry::now(&e)) {
            return None;
        }
        Some(record.owner)
    }

    /// `owner`'s primary name, if their reverse record still points at an
    /// active name they hold. Stale pointers read as `None`.
    pub fn primary_name(e: Env, owner: Address) -> Option<String> {
        let reverse = storage::load_reverse(&e, &owner)?;
        let record = storage::load_name(&e, &reverse.name).ok()?;
        if record.owner != owner || expiry::is_lapsed(&record, expiry::now(&e)) {
            return None;
        }
        Some(reverse.name)
    }

    pub fn is_expired(e: Env, name: String) -> Result<bool, RegistryError> {
        let record = storage::load_name(&e, &name)?;
        Ok(expiry::is_lapsed(&record, expiry::now(&e)))
    }

    /// Seconds until `name` lapses; 0 once it has.
    pub fn time_until_expiry(e: Env, name: String) -> Result<i64, RegistryError> {
        let record = storage::load_name(&e, &name)?;
        Ok(expiry::remaining(&record, expiry::now(&e)))
    }

    pub fn name_status(e: Env, name: String) -> Result<NameStatus, RegistryError> {
        let record = storage::load_name(&e, &name)?;
        Ok(expiry::status(&record, expiry::now(&e)))
    }

    /// Number of names ever registered; the length of the index paged by
    /// `get_all_names` and `get_stats`.
    pub fn name_count(e: Env) -> u32 {
        storage::name_count(&e)
    }

    /// Registered names in registration order, `limit` at most
    /// `MAX_PAGE_SIZE`, starting at index `start`.
    pub fn get_all_names(e: Env, start: u32, limit: u32) -> Vec<String> {
        let mut names = Vec::new(&e);
        for i in start..page_end(start, limit, storage::name_count(&e)) {
            if let Some(name) = storage::name_at(&e, i) {
                names.push_back(name);
            }
        }
        names
    }

    /// Names registered to `owner`, lapsed ones included, paged like
    /// `get_all_names`. Ownership never moves, so this is also what `owner`
    /// currently holds.
    pub fn names_of(e: Env, owner: Address, start: u32, limit: u32) -> Vec<String> {
        let mut names = Vec::new(&e);
        let end = page_end(start, limit, storage::owner_name_count(&e, &owner));
        for i in start..end {
            if let Some(name) = storage::owner_name_at(&e, &owner, i) {
                names.push_back(name);
            }
        }
        names
    }

    /// Counts over one page of the name index. Sum the pages for totals.
    pub fn get_stats(e: Env, start: u32, limit: u32) -> RegistryStats {
        let now = expiry::now(&e);
        let mut stats = RegistryStats {
            total: 0,
            active: 0,
            expiring: 0,
            lapsed: 0,
        };
        for i in start..page_end(start, limit, storage::name_count(&e)) {
            let Some(name) = storage::name_at(&e, i) else {
                continue;
            };
            let Ok(record) = storage::load_name(&e, &name) else {
                continue;
            };
            stats.total += 1;
            if expiry::is_lapsed(&record, now) {
                stats.lapsed += 1;
            } else {
                stats.active += 1;
                if expiry::remaining(&record, now) <= STATS_EXPIRING_WINDOW {
                    stats.expiring += 1;
                }
            }
        }
        stats
    }
}

fn page_end(start: u32, limit: u32, len: u32) -> u32 {
    start.saturating_add(limit.min(MAX_PAGE_SIZE)).min(len)
}
