use soroban_sdk::{contracttype, Address, BytesN, String};

// ─── Records ───────────────────────────────────────────────────────────────

/// Registry-wide settings. Exactly one exists once `initialize_config` ran.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Sole identity allowed to withdraw fees. Never changes.
    pub admin: Address,
    /// Destination of withdrawn fees.
    pub treasury: Address,
    /// Fee per byte of name, in the token's smallest unit.
    pub price_per_char: u64,
}

/// One registered name.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameRecord {
    /// Current holder.
    pub owner: Address,
    /// The registered name; its storage address is derived from it.
    pub name: String,
    /// Free-form description.
    pub metadata: String,
    /// Unix seconds after which the name is lapsed.
    pub expires_at: i64,
}

/// An owner's primary-name pointer. May go stale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReverseRecord {
    pub name: String,
}

// ─── Views ─────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameStatus {
    Active,
    ExpiringSoon,
    Lapsed,
}

/// Snapshot of the name index, evaluated against the current ledger time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryStats {
    pub total: u32,
    pub active: u32,
    /// Active names lapsing within the stats window.
    pub expiring: u32,
    pub lapsed: u32,
}

/// Fee pool bookkeeping. `collected - withdrawn == pool` always holds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSummary {
    pub pool: i128,
    pub collected: i128,
    pub withdrawn: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Config, name and reverse records, keyed by derived address.
    Record(BytesN<32>),
    /// Token contract fees are charged in.
    Token,
    /// Withdrawable fee balance.
    FeePool,
    /// Lifetime fees received.
    FeesCollected,
    /// Lifetime fees sent to the treasury.
    FeesWithdrawn,
    /// Number of names ever registered. Instance.
    NameCount,
    /// The name registered at position `i` (0-based). Persistent.
    NameAt(u32),
    /// Number of names registered to an owner. Persistent.
    OwnerNameCount(Address),
    /// The owner's `i`-th name (0-based). Persistent.
    OwnerNameAt(Address, u32),
}
