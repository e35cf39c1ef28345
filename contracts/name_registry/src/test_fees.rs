//! Fee pricing, the fee pool and withdrawal.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{FeeSummary, RegistryError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn test_quote_price() {
    let e = Env::default();
    let reg = setup(&e);

    assert_eq!(reg.client.quote_price(&s(&e, "a")), PRICE_PER_CHAR as i128);
    assert_eq!(reg.client.quote_price(&s(&e, "akhil")), 5 * PRICE_PER_CHAR as i128);
    assert_eq!(
        reg.client.try_quote_price(&s(&e, "")),
        Err(Ok(RegistryError::EmptyName))
    );
}

#[test]
fn test_quote_price_counts_bytes() {
    let e = Env::default();
    let reg = setup(&e);
    // "é" is two bytes.
    assert_eq!(reg.client.quote_price(&s(&e, "é")), 2 * PRICE_PER_CHAR as i128);
}

#[test]
fn test_quote_price_handles_max_price() {
    let e = Env::default();
    let reg = setup_with_price(&e, u64::MAX);
    assert_eq!(
        reg.client.quote_price(&s(&e, "abc")),
        u64::MAX as i128 * 3
    );
}

#[test]
fn test_fee_pool_accumulates() {
    let e = Env::default();
    let reg = setup(&e);

    assert_eq!(
        reg.client.fee_summary(),
        FeeSummary { pool: 0, collected: 0, withdrawn: 0 }
    );

    reg.register(&reg.user, "akhil");
    reg.register(&reg.user, "bo");
    reg.client.renew_name(&reg.user, &s(&e, "bo"));

    let summary = reg.client.fee_summary();
    assert_eq!(summary.pool, 9 * PRICE_PER_CHAR as i128);
    assert_eq!(summary.collected, summary.pool);
    assert_eq!(summary.withdrawn, 0);
    assert_eq!(reg.token.balance(&reg.contract_id), summary.pool);
}

#[test]
fn test_withdraw_fees() {
    let e = Env::default();
    let reg = setup(&e);
    reg.register(&reg.user, "akhil");

    let amount = reg.client.withdraw_fees(&reg.admin);

    assert_eq!(amount, 5 * PRICE_PER_CHAR as i128);
    assert_eq!(reg.token.balance(&reg.treasury), amount);
    assert_eq!(reg.token.balance(&reg.contract_id), 0);
    assert_eq!(
        reg.client.fee_summary(),
        FeeSummary { pool: 0, collected: amount, withdrawn: amount }
    );
}

#[test]
fn test_withdraw_fees_twice() {
    let e = Env::default();
    let reg = setup(&e);
    reg.register(&reg.user, "akhil");
    reg.client.withdraw_fees(&reg.admin);

    assert_eq!(
        reg.client.try_withdraw_fees(&reg.admin),
        Err(Ok(RegistryError::NoFeesAvailable))
    );

    reg.register(&reg.user, "abc");
    assert_eq!(reg.client.withdraw_fees(&reg.admin), 3 * PRICE_PER_CHAR as i128);

    let summary = reg.client.fee_summary();
    assert_eq!(summary.collected - summary.withdrawn, summary.pool);
    assert_eq!(reg.token.balance(&reg.treasury), 8 * PRICE_PER_CHAR as i128);
}

#[test]
fn test_withdraw_fees_empty_pool() {
    let e = Env::default();
    let reg = setup(&e);
    assert_eq!(
        reg.client.try_withdraw_fees(&reg.admin),
        Err(Ok(RegistryError::NoFeesAvailable))
    );
}

#[test]
fn test_withdraw_fees_non_admin() {
    let e = Env::default();
    let reg = setup(&e);
    reg.register(&reg.user, "akhil");

    let stranger = Address::generate(&e);
    assert_eq!(
        reg.client.try_withdraw_fees(&stranger),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(
        reg.client.try_withdraw_fees(&reg.treasury),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(reg.client.fee_summary().pool, 5 * PRICE_PER_CHAR as i128);
    assert_eq!(reg.token.balance(&reg.treasury), 0);
}

#[test]
fn test_zero_price_collects_nothing() {
    let e = Env::default();
    let reg = setup_with_price(&e, 0);

    reg.register(&reg.user, "akhil");
    reg.client.renew_name(&reg.user, &s(&e, "akhil"));

    assert_eq!(reg.token.balance(&reg.user), DEFAULT_MINT);
    assert_eq!(reg.client.fee_summary().collected, 0);
    assert_eq!(
        reg.client.try_withdraw_fees(&reg.admin),
        Err(Ok(RegistryError::NoFeesAvailable))
    );
}
