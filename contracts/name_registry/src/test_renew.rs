#![cfg(test)]

use crate::test_helpers::*;
use crate::{RegistryError, REGISTRATION_TERM};
use soroban_sdk::Env;

#[test]
fn test_renew_extends_by_one_term() {
    let e = Env::default();
    let reg = setup(&e);
    let record = reg.register(&reg.user, "akhil");

    let new_expiry = reg.client.renew_name(&reg.user, &s(&e, "akhil"));

    assert!(new_expiry > record.expires_at);
    assert_eq!(new_expiry, record.expires_at + REGISTRATION_TERM);
    assert_eq!(reg.client.get_name_record(&s(&e, "akhil")).expires_at, new_expiry);
}

#[test]
fn test_early_renewals_stack() {
    let e = Env::default();
    let reg = setup(&e);
    let record = reg.register(&reg.user, "akhil");

    advance(&e, 100 * ONE_DAY);
    reg.client.renew_name(&reg.user, &s(&e, "akhil"));
    let expiry = reg.client.renew_name(&reg.user, &s(&e, "akhil"));

    assert_eq!(expiry, record.expires_at + 2 * REGISTRATION_TERM);
}

#[test]
fn test_renew_lapsed_name_restarts_from_now() {
    let e = Env::default();
    let reg = setup(&e);
    reg.register(&reg.user, "akhil");

    advance(&e, REGISTRATION_TERM as u64 + 10 * ONE_DAY);
    assert!(reg.client.is_expired(&s(&e, "akhil")));

    let now = e.ledger().timestamp() as i64;
    let expiry = reg.client.renew_name(&reg.user, &s(&e, "akhil"));

    assert_eq!(expiry, now + REGISTRATION_TERM);
    assert!(!reg.client.is_expired(&s(&e, "akhil")));
    assert_eq!(reg.client.resolve_owner(&s(&e, "akhil")), Some(reg.user.clone()));
}

#[test]
fn test_anyone_may_renew() {
    let e = Env::default();
    let reg = setup(&e);
    let record = reg.register(&reg.user, "akhil");

    let friend = reg.funded_user(&e, DEFAULT_MINT);
    let expiry = reg.client.renew_name(&friend, &s(&e, "akhil"));

    assert_eq!(expiry, record.expires_at + REGISTRATION_TERM);
    // Ownership does not move to the payer.
    assert_eq!(reg.client.get_name_record(&s(&e, "akhil")).owner, reg.user);
    assert_eq!(reg.token.balance(&friend), DEFAULT_MINT - 5 * PRICE_PER_CHAR as i128);
}

#[test]
fn test_renew_charges_current_price() {
    let e = Env::default();
    let reg = setup(&e);
    reg.register(&reg.user, "akhil");
    let after_register = reg.token.balance(&reg.user);

    reg.client.renew_name(&reg.user, &s(&e, "akhil"));

    assert_eq!(
        reg.token.balance(&reg.user),
        after_register - 5 * PRICE_PER_CHAR as i128
    );
    assert_eq!(reg.client.fee_summary().pool, 10 * PRICE_PER_CHAR as i128);
}

#[test]
fn test_renew_unknown_name() {
    let e = Env::default();
    let reg = setup(&e);
    let result = reg.client.try_renew_name(&reg.user, &s(&e, "ghost"));
    assert_eq!(result, Err(Ok(RegistryError::NotFound)));
}

#[test]
fn test_renew_insufficient_funds_keeps_expiry() {
    let e = Env::default();
    let reg = setup(&e);
    let record = reg.register(&reg.user, "akhil");

    let poor = reg.funded_user(&e, PRICE_PER_CHAR as i128);
    let result = reg.client.try_renew_name(&poor, &s(&e, "akhil"));
    assert_eq!(result, Err(Ok(RegistryError::InsufficientFunds)));
    assert_eq!(
        reg.client.get_name_record(&s(&e, "akhil")).expires_at,
        record.expires_at
    );
}
