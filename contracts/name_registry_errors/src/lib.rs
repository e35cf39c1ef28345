#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups registry errors by the code range they occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Registry setup errors (codes 1-99).
    Initialization,
    /// Input bound errors (codes 100-199).
    Validation,
    /// Caller identity errors (codes 200-299).
    Authorization,
    /// Record presence errors (codes 300-399).
    Record,
    /// Fee payment and withdrawal errors (codes 400-499).
    Treasury,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  RegistryError
/// @notice Error enum returned by every fallible name registry entry point.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1   -  99 : Initialization
///   100 - 199 : Validation
///   200 - 299 : Authorization
///   300 - 399 : Record
///   400 - 499 : Treasury
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // --- Initialization (1-99) ---
    /// No config record exists yet.
    NotInitialized = 1,

    /// The config record already exists and cannot be created again.
    AlreadyInitialized = 2,

    // --- Validation (100-199) ---
    /// Name exceeds the maximum byte length.
    NameTooLong = 100,

    /// Metadata exceeds the maximum byte length.
    MetadataTooLong = 101,

    /// Name has zero length.
    EmptyName = 102,

    // --- Authorization (200-299) ---
    /// Caller is not the record owner (or not the config admin).
    Unauthorized = 200,

    // --- Record (300-399) ---
    /// A name record already exists at the derived address, lapsed or not.
    NameAlreadyRegistered = 300,

    /// The record the operation addresses does not exist.
    NotFound = 301,

    // --- Treasury (400-499) ---
    /// Payer balance is below the registration or renewal fee.
    InsufficientFunds = 400,

    /// The fee pool holds nothing to withdraw.
    NoFeesAvailable = 401,

    // --- Arithmetic (700-799) ---
    /// Integer overflow in fee or expiry arithmetic.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category(), description() and field() on every
///         RegistryError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;

    /// @return The request field a client should correct, if any.
    fn field(&self) -> Option<&'static str>;
}

impl ErrorExt for RegistryError {
    fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::NotInitialized | RegistryError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            RegistryError::NameTooLong
            | RegistryError::MetadataTooLong
            | RegistryError::EmptyName => ErrorCategory::Validation,
            RegistryError::Unauthorized => ErrorCategory::Authorization,
            RegistryError::NameAlreadyRegistered | RegistryError::NotFound => {
                ErrorCategory::Record
            }
            RegistryError::InsufficientFunds | RegistryError::NoFeesAvailable => {
                ErrorCategory::Treasury
            }
            RegistryError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            RegistryError::NotInitialized => "Registry config has not been initialized",
            RegistryError::AlreadyInitialized => "Registry config has already been initialized",
            RegistryError::NameTooLong => "Name is too long",
            RegistryError::MetadataTooLong => "Metadata is too long",
            RegistryError::EmptyName => "Name must not be empty",
            RegistryError::Unauthorized => "Caller is not authorized for this record",
            RegistryError::NameAlreadyRegistered => "Name has already been registered",
            RegistryError::NotFound => "No record found for the given key",
            RegistryError::InsufficientFunds => "Insufficient funds for registration",
            RegistryError::NoFeesAvailable => "No fees available",
            RegistryError::Overflow => "Integer overflow in checked arithmetic",
        }
    }

    fn field(&self) -> Option<&'static str> {
        match self {
            RegistryError::NotInitialized | RegistryError::AlreadyInitialized => Some("config"),
            RegistryError::NameTooLong
            | RegistryError::EmptyName
            | RegistryError::NameAlreadyRegistered
            | RegistryError::NotFound => Some("name"),
            RegistryError::MetadataTooLong => Some("metadata"),
            RegistryError::Unauthorized => Some("caller"),
            RegistryError::InsufficientFunds => Some("balance"),
            RegistryError::NoFeesAvailable => Some("fee_pool"),
            RegistryError::Overflow => None,
        }
    }
}
