use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ParseAddressError;

pub const ADDRESS_LENGTH: usize = 20;

/// 160-bit account identifier. Only equality is meaningful to the array utilities.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    pub fn rand() -> Self {
        Self(rand::thread_rng().gen())
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(value: [u8; ADDRESS_LENGTH]) -> Self {
        Self(value)
    }
}

impl std::ops::Deref for Address {
    type Target = [u8; ADDRESS_LENGTH];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw_without_prefix = s
            .strip_prefix("0x")
            .ok_or_else(|| ParseAddressError::MissingPrefix(s.to_string()))?;
        let padded;
        let raw_without_prefix = if raw_without_prefix.len() % 2 == 1 {
            padded = format!("0{raw_without_prefix}");
            padded.as_str()
        } else {
            raw_without_prefix
        };
        let bytes = hex::decode(raw_without_prefix)?;
        if bytes.len() > ADDRESS_LENGTH {
            return Err(ParseAddressError::TooLong(bytes.len()));
        }

        // big endian, left-padded with zeros
        let mut value = [0u8; ADDRESS_LENGTH];
        value[ADDRESS_LENGTH - bytes.len()..].copy_from_slice(&bytes);

        Ok(Self(value))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        Address::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

#[test]
fn test_fmt_address() {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - 1] = 1;
    let value = Address(bytes);
    let encoded_value = format!("{}", value);
    assert_eq!(encoded_value, "0x0000000000000000000000000000000000000001");
    let decoded_value = Address::from_str("0x01").unwrap();
    assert_eq!(decoded_value, value);
    assert_eq!(Address::from_str("0x").unwrap(), Address::ZERO);
    let decoded_value = Address::from_str("0x1").unwrap();
    assert_eq!(decoded_value, value);

    let value = Address::rand();
    let encoded_value = format!("{}", value);
    assert_eq!(encoded_value.len(), 42);
    let decoded_value = Address::from_str(&encoded_value).unwrap();
    assert_eq!(decoded_value, value);
}

#[test]
fn test_parse_invalid_address() {
    assert_eq!(
        Address::from_str("01"),
        Err(ParseAddressError::MissingPrefix("01".to_string()))
    );
    assert!(matches!(
        Address::from_str("0xzz"),
        Err(ParseAddressError::InvalidHex(_))
    ));
    let too_long = format!("0x{}", "ab".repeat(ADDRESS_LENGTH + 1));
    assert_eq!(
        Address::from_str(&too_long),
        Err(ParseAddressError::TooLong(ADDRESS_LENGTH + 1))
    );
}

#[test]
fn test_serialize_address() {
    let value = Address::from_str("0x01").unwrap();
    let encoded_value = serde_json::to_string(&value).unwrap();
    assert_eq!(
        encoded_value,
        "\"0x0000000000000000000000000000000000000001\""
    );
    let decoded_value: Address = serde_json::from_str("\"0x01\"").unwrap();
    assert_eq!(decoded_value, value);

    let value = Address::rand();
    let encoded_value = serde_json::to_string(&value).unwrap();
    assert_eq!(encoded_value.len(), 44); // include 0x-prefix and quotation marks
    let decoded_value: Address = serde_json::from_str(&encoded_value).unwrap();
    assert_eq!(decoded_value, value);

    assert!(serde_json::from_str::<Address>("\"01\"").is_err());
}
