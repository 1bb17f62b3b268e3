//! Order-preserving queries and removals over sequences of [`Address`].
//!
//! Every function borrows its input and returns freshly allocated output.
//! Failures are checked before anything is built, so an `Err` means no
//! partial result exists.

use std::collections::HashSet;

use num::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    address::Address,
    config::{ArrayUtilsConfig, DuplicateScan},
    errors::AddressArrayError,
    utils::common::{index_to_word, NOT_FOUND_INDEX},
};

/// Result of [`index_of`]. `index` is [`NOT_FOUND_INDEX`] whenever `found` is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOf {
    pub index: usize,
    pub found: bool,
}

impl IndexOf {
    pub const NOT_FOUND: Self = Self {
        index: NOT_FOUND_INDEX,
        found: false,
    };

    pub fn position(&self) -> Option<usize> {
        self.found.then_some(self.index)
    }

    pub fn to_word(&self) -> BigUint {
        index_to_word(self.index)
    }
}

impl From<IndexOf> for (usize, bool) {
    fn from(value: IndexOf) -> Self {
        (value.index, value.found)
    }
}

/// Finds the first occurrence of `target`.
pub fn index_of(addresses: &[Address], target: &Address) -> IndexOf {
    let result = addresses
        .iter()
        .position(|address| address == target)
        .map_or(IndexOf::NOT_FOUND, |index| IndexOf { index, found: true });
    trace!(len = addresses.len(), %target, found = result.found, "index_of");

    result
}

pub fn contains(addresses: &[Address], target: &Address) -> bool {
    index_of(addresses, target).found
}

/// Returns whether any address appears more than once.
///
/// An empty sequence is rejected with [`AddressArrayError::EmptyInput`]
/// rather than answered with `false`.
pub fn has_duplicate(addresses: &[Address]) -> Result<bool, AddressArrayError> {
    has_duplicate_with(addresses, &ArrayUtilsConfig::default())
}

pub fn has_duplicate_with(
    addresses: &[Address],
    config: &ArrayUtilsConfig,
) -> Result<bool, AddressArrayError> {
    if addresses.is_empty() {
        debug!("has_duplicate called with an empty array");
        return Err(AddressArrayError::EmptyInput);
    }

    let result = match config.duplicate_scan {
        DuplicateScan::Pairwise => addresses
            .iter()
            .enumerate()
            .any(|(i, address)| addresses[i + 1..].contains(address)),
        DuplicateScan::HashSet => {
            let mut seen = HashSet::with_capacity(addresses.len());
            addresses.iter().any(|address| !seen.insert(address))
        }
    };
    trace!(len = addresses.len(), scan = ?config.duplicate_scan, result, "has_duplicate");

    Ok(result)
}

/// Removes the first occurrence of `target`, shifting later elements down by one.
pub fn remove(addresses: &[Address], target: &Address) -> Result<Vec<Address>, AddressArrayError> {
    let index = index_of(addresses, target).position().ok_or_else(|| {
        debug!(len = addresses.len(), %target, "address to remove is not in array");
        AddressArrayError::NotFound
    })?;

    let (new_addresses, _) = pop(addresses, index)?;

    Ok(new_addresses)
}

/// Removes the element at `index` and returns it alongside the remaining elements.
pub fn pop(
    addresses: &[Address],
    index: usize,
) -> Result<(Vec<Address>, Address), AddressArrayError> {
    let len = addresses.len();
    if index >= len {
        debug!(index, len, "pop index out of bounds");
        return Err(AddressArrayError::IndexOutOfBounds { index, len });
    }

    let removed = addresses[index];
    let mut new_addresses = Vec::with_capacity(len - 1);
    new_addresses.extend_from_slice(&addresses[..index]);
    new_addresses.extend_from_slice(&addresses[index + 1..]);
    trace!(index, len, %removed, "pop");

    Ok((new_addresses, removed))
}
