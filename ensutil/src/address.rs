//! Ethereum address format validation and display helpers.
//!
//! Validation is format-only (existence on any chain is out of scope): 40 hex
//! digits with an optional `0x` prefix, and a verified EIP-55 checksum
//! whenever the digits mix upper and lower case. Uniform-case addresses carry
//! no checksum information and pass without one.

use alloy_primitives::Address;
use serde::Serialize;

/// Ways an Ethereum address can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The input was empty.
    #[error("Ethereum address is required")]
    Required,
    /// The input is not 40 hex digits, or its EIP-55 checksum is wrong.
    #[error("Invalid Ethereum address")]
    Invalid,
}

/// Validate an Ethereum address and return its parsed form.
pub fn check_address(address: &str) -> Result<Address, AddressError> {
    if address.is_empty() {
        return Err(AddressError::Required);
    }
    let digits = address.strip_prefix("0x").unwrap_or(address);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::Invalid);
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        // Mixed case means the writer intended an EIP-55 checksum; verify it
        let prefixed = format!("0x{digits}");
        return Address::parse_checksummed(&prefixed, None).map_err(|_| AddressError::Invalid);
    }

    digits.parse::<Address>().map_err(|_| AddressError::Invalid)
}

/// Outcome of [`validate_address`].
///
/// Validity only; the address value itself is not normalized or returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressValidation {
    /// Whether the address is well-formed.
    pub valid: bool,
    /// Human-readable reason the address was rejected, when invalid.
    pub error: Option<String>,
}

/// Validate an Ethereum address, reporting every failure as a value.
pub fn validate_address(address: &str) -> AddressValidation {
    match check_address(address) {
        Ok(_) => AddressValidation {
            valid: true,
            error: None,
        },
        Err(err) => AddressValidation {
            valid: false,
            error: Some(err.to_string()),
        },
    }
}

/// EIP-55 checksummed form of a valid address, or `None` if it fails
/// [`check_address`].
pub fn checksum_address(address: &str) -> Option<String> {
    check_address(address).ok().map(|addr| addr.to_checksum(None))
}

/// Abbreviate an address as `0x1234...abcd` for compact display.
///
/// Inputs too short to abbreviate, or containing non-ASCII bytes (hex
/// addresses never do), are returned unchanged.
pub fn abbreviate_address(address: &str) -> String {
    if address.len() > 10 && address.is_ascii() {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
