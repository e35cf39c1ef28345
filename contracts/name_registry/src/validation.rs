//! Input bounds for names and metadata.
//!
//! Lengths are UTF-8 byte counts, the same measure the fee is charged on.
//! Validation runs before any storage write or token transfer.

use crate::constants::{MAX_METADATA_LEN, MAX_NAME_LEN};
use name_registry_errors::RegistryError;
use soroban_sdk::String;

/// Reject empty names and names longer than `MAX_NAME_LEN` bytes.
pub fn validate_name(name: &String) -> Result<(), RegistryError> {
    let len = name.len();
    if len == 0 {
        return Err(RegistryError::EmptyName);
    }
    if len > MAX_NAME_LEN {
        return Err(RegistryError::NameTooLong);
    }
    Ok(())
}

/// Reject metadata longer than `MAX_METADATA_LEN` bytes. Empty is fine.
pub fn validate_metadata(metadata: &String) -> Result<(), RegistryError> {
    if metadata.len() > MAX_METADATA_LEN {
        return Err(RegistryError::MetadataTooLong);
    }
    Ok(())
}
