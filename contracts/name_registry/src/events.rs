use soroban_sdk::{Address, Env, String, Symbol};

/// Emitted once, when the config record is created.
///
/// # Topics
/// * `Symbol` - "config_initialized"
/// * `Address` - The admin
///
/// # Data
/// * `Address` - The treasury
/// * `u64` - Price per character
/// * `Address` - The fee token
pub fn emit_config_initialized(
    e: &Env,
    admin: &Address,
    treasury: &Address,
    price_per_char: u64,
    token: &Address,
) {
    let topics = (Symbol::new(e, "config_initialized"), admin.clone());
    let data = (treasury.clone(), price_per_char, token.clone());
    e.events().publish(topics, data);
}

/// Emitted when a name is registered.
///
/// # Topics
/// * `Symbol` - "name_registered"
/// * `Address` - The new owner
///
/// # Data
/// * `String` - The name
/// * `i128` - Fee paid
/// * `i64` - Expiry timestamp
pub fn emit_name_registered(e: &Env, owner: &Address, name: &String, fee: i128, expires_at: i64) {
    let topics = (Symbol::new(e, "name_registered"), owner.clone());
    e.events().publish(topics, (name.clone(), fee, expires_at));
}

/// Emitted when a name is renewed. The payer need not be the owner.
pub fn emit_name_renewed(e: &Env, payer: &Address, name: &String, fee: i128, expires_at: i64) {
    let topics = (Symbol::new(e, "name_renewed"), payer.clone());
    e.events().publish(topics, (name.clone(), fee, expires_at));
}

pub fn emit_metadata_updated(e: &Env, owner: &Address, name: &String) {
    let topics = (Symbol::new(e, "metadata_updated"), owner.clone());
    e.events().publish(topics, name.clone());
}

pub fn emit_reverse_set(e: &Env, owner: &Address, name: &String) {
    let topics = (Symbol::new(e, "reverse_set"), owner.clone());
    e.events().publish(topics, name.clone());
}

/// Emitted when the fee pool is swept.
///
/// # Topics
/// * `Symbol` - "fees_withdrawn"
/// * `Address` - The admin
///
/// # Data
/// * `Address` - The treasury credited
/// * `i128` - Amount moved
pub fn emit_fees_withdrawn(e: &Env, admin: &Address, treasury: &Address, amount: i128) {
    let topics = (Symbol::new(e, "fees_withdrawn"), admin.clone());
    e.events().publish(topics, (treasury.clone(), amount));
}
