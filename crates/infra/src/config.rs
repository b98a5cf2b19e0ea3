//! Configuration loading and representation.

use std::path::PathBuf;

/// Environment variable naming the directory of the file-backed store.
pub const DATA_DIR_VAR: &str = "STOCKROOM_DATA_DIR";
/// Environment variable controlling seed data on an empty store.
pub const SEED_ON_EMPTY_VAR: &str = "STOCKROOM_SEED_ON_EMPTY";

const DEFAULT_DATA_DIR: &str = "./data";

/// Where and how the ledger snapshot is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    /// Start from the sample dataset when a collection is absent or unreadable.
    /// When false such a collection starts empty.
    pub seed_on_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_on_empty: true,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(SEED_ON_EMPTY_VAR) {
            match parse_bool(&raw) {
                Some(flag) => config.seed_on_empty = flag,
                None => tracing::warn!(
                    variable = SEED_ON_EMPTY_VAR,
                    value = %raw,
                    "unrecognized boolean; keeping default"
                ),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
