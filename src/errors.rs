use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressArrayError {
    #[error("A is empty")]
    EmptyInput,
    #[error("Address not in array.")]
    NotFound,
    #[error("Index must be < A length")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseAddressError {
    #[error("fail to strip 0x-prefix: given value {0} does not start with 0x")]
    MissingPrefix(String),
    #[error("fail to parse a hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("too long hexadecimal sequence: {0} bytes")]
    TooLong(usize),
}
