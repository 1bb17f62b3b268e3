use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How `has_duplicate_with` looks for repeated addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateScan {
    /// Compare every pair. O(n^2), needs equality only.
    #[default]
    Pairwise,
    /// Collect into a `HashSet`. O(n).
    HashSet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayUtilsConfig {
    #[serde(default)]
    pub duplicate_scan: DuplicateScan,
}

impl ArrayUtilsConfig {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("fail to parse array utils config")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("fail to read config file {}", path.display()))?;

        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArrayUtilsConfig::default();
        assert_eq!(config.duplicate_scan, DuplicateScan::Pairwise);

        let config = ArrayUtilsConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ArrayUtilsConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config = ArrayUtilsConfig::from_json_str(r#"{"duplicate_scan":"hash_set"}"#).unwrap();
        assert_eq!(config.duplicate_scan, DuplicateScan::HashSet);

        let encoded = serde_json::to_string(&config).unwrap();
        assert_eq!(encoded, r#"{"duplicate_scan":"hash_set"}"#);

        assert!(ArrayUtilsConfig::from_json_str(r#"{"duplicate_scan":"sorted"}"#).is_err());
    }

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"duplicate_scan":"pairwise"}}"#).unwrap();

        let config = ArrayUtilsConfig::load(file.path()).unwrap();
        assert_eq!(config.duplicate_scan, DuplicateScan::Pairwise);

        let missing = file.path().with_extension("missing");
        assert!(ArrayUtilsConfig::load(missing).is_err());
    }
}
