//! Record address derivation.
//!
//! An address is `sha256(len(tag) || tag || len(seed_0) || seed_0 || ...)`
//! with every length a big-endian `u32`. Because each field carries its own
//! length, two different `(tag, seeds)` tuples never share a preimage, so
//! records of different kinds cannot collide even with adversarial names.

use crate::constants::{CONFIG_TAG, NAME_TAG, REVERSE_TAG};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

fn push_field(buf: &mut Bytes, field: &Bytes) {
    buf.extend_from_array(&field.len().to_be_bytes());
    buf.append(field);
}

/// Derive the storage address for `tag` plus zero or more seeds.
pub fn derive_address(e: &Env, tag: &[u8], seeds: &[Bytes]) -> BytesN<32> {
    let mut preimage = Bytes::new(e);
    push_field(&mut preimage, &Bytes::from_slice(e, tag));
    for seed in seeds {
        push_field(&mut preimage, seed);
    }
    e.crypto().sha256(&preimage).to_bytes()
}

pub fn config_address(e: &Env) -> BytesN<32> {
    derive_address(e, CONFIG_TAG, &[])
}

pub fn name_address(e: &Env, name: &String) -> BytesN<32> {
    derive_address(e, NAME_TAG, &[name.clone().to_xdr(e)])
}

pub fn reverse_address(e: &Env, owner: &Address) -> BytesN<32> {
    derive_address(e, REVERSE_TAG, &[owner.clone().to_xdr(e)])
}
