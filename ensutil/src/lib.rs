//! ENS utilities: name normalization, validation, and profile helpers.
//!
//! ENS supports many TLDs beyond .eth (e.g. .xyz, .com, .art via DNS
//! integration, and subdomains like sub.name.eth), so nothing here assumes a
//! particular suffix. Name handling goes through UTS-46 normalization and
//! address handling through the alloy primitives. Every public entry point is
//! pure and synchronous, and reports failures as values rather than panics.
#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod address;
pub mod name;
pub mod normalize;
pub mod text_keys;

pub use address::{
    AddressError, AddressValidation, abbreviate_address, check_address, checksum_address,
    validate_address,
};
pub use name::{NameError, NameValidation, check_name, validate_name};
pub use normalize::{namehash, normalize_name};
pub use text_keys::{EXTENDED_TEXT_KEYS, STANDARD_TEXT_KEYS, is_known_text_key};
