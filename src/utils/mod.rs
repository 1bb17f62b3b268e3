pub mod address_array;
pub mod common;
