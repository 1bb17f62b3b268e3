//! Order-preserving utilities over sequences of 160-bit addresses.
//!
//! The operations live in [`utils::address_array`] and are re-exported here.

pub mod address;
pub mod config;
pub mod errors;
pub mod utils;

pub use address::Address;
pub use config::{ArrayUtilsConfig, DuplicateScan};
pub use errors::{AddressArrayError, ParseAddressError};
pub use utils::{
    address_array::{contains, has_duplicate, has_duplicate_with, index_of, pop, remove, IndexOf},
    common::NOT_FOUND_INDEX,
};
