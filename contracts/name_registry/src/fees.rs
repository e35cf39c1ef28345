//! Fee pricing and the fee pool.
//! Fees are pulled from the payer into the contract's own token balance and
//! tracked in `FeePool` until the admin sweeps them to the treasury.

use crate::storage::{load_token, read_amount, write_amount};
use crate::types::{Config, DataKey, FeeSummary};
use name_registry_errors::RegistryError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env, String};

fn token_client(e: &Env) -> Result<TokenClient<'_>, RegistryError> {
    let token = load_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// `price_per_char * byte length`, in the token's smallest unit.
pub fn quote(config: &Config, name: &String) -> Result<i128, RegistryError> {
    (config.price_per_char as i128)
        .checked_mul(name.len() as i128)
        .ok_or(RegistryError::Overflow)
}

/// Move `amount` from `payer` into the contract and credit the pool.
/// Fails with `InsufficientFunds` before any transfer is attempted.
pub fn collect(e: &Env, payer: &Address, amount: i128) -> Result<(), RegistryError> {
    if amount == 0 {
        return Ok(());
    }

    let token = token_client(e)?;
    if token.balance(payer) < amount {
        return Err(RegistryError::InsufficientFunds);
    }

    let pool = read_amount(e, &DataKey::FeePool)
        .checked_add(amount)
        .ok_or(RegistryError::Overflow)?;
    let collected = read_amount(e, &DataKey::FeesCollected)
        .checked_add(amount)
        .ok_or(RegistryError::Overflow)?;

    token.transfer(payer, &e.current_contract_address(), &amount);

    write_amount(e, &DataKey::FeePool, pool);
    write_amount(e, &DataKey::FeesCollected, collected);
    Ok(())
}

/// Send the whole pool to `treasury` and return the amount moved.
pub fn drain(e: &Env, treasury: &Address) -> Result<i128, RegistryError> {
    let pool = read_amount(e, &DataKey::FeePool);
    if pool <= 0 {
        return Err(RegistryError::NoFeesAvailable);
    }
    let withdrawn = read_amount(e, &DataKey::FeesWithdrawn)
        .checked_add(pool)
        .ok_or(RegistryError::Overflow)?;

    // CEI: clear the pool before the transfer.
    write_amount(e, &DataKey::FeePool, 0);
    write_amount(e, &DataKey::FeesWithdrawn, withdrawn);

    token_client(e)?.transfer(&e.current_contract_address(), treasury, &pool);
    Ok(pool)
}

pub fn summary(e: &Env) -> FeeSummary {
    FeeSummary {
        pool: read_amount(e, &DataKey::FeePool),
        collected: read_amount(e, &DataKey::FeesCollected),
        withdrawn: read_amount(e, &DataKey::FeesWithdrawn),
    }
}
