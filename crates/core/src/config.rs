//! Identifier codec configuration
//!
//! Each logical id namespace (workspaces, workspace versions) carries its own
//! [`IdConfig`]. Configuration can be built in code or read from a
//! properties source using the keys:
//!
//! ```text
//! ids.<namespace>.obfuscate.alphabet
//! ids.<namespace>.obfuscate.block_size
//! ids.<namespace>.obfuscate.min_length
//! ```
//!
//! Missing keys fall back to the defaults. Numeric values that are not
//! integers fail fast with [`ConfigError::NotAnInteger`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Namespace used for workspace identifiers.
pub const WORKSPACE_IDS: &str = "workspaces";

/// Namespace used for workspace version identifiers.
pub const VERSION_IDS: &str = "workspace_version";

/// Default symbol set for encoded identifiers.
pub const DEFAULT_ALPHABET: &str = "mn6j2c4rv8bpygw95z7hsdaetxuk3fq";

/// Default number of low-order bits scrambled by the encoder.
pub const DEFAULT_BLOCK_SIZE: u32 = 24;

/// Default minimum length of an encoded identifier.
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Configuration for one identifier namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    /// Symbols used in encoded identifiers; the first symbol is the zero digit
    pub alphabet: String,
    /// Number of low-order bits that are bit-reversed before encoding
    pub block_size: u32,
    /// Encoded identifiers shorter than this are left-padded
    pub min_length: usize,
}

impl IdConfig {
    /// Create a configuration with explicit values.
    pub fn new(alphabet: impl Into<String>, block_size: u32, min_length: usize) -> Self {
        Self {
            alphabet: alphabet.into(),
            block_size,
            min_length,
        }
    }

    /// Read the configuration for `namespace` from a properties set.
    pub fn from_properties(props: &Properties, namespace: &str) -> Result<Self, ConfigError> {
        let alphabet = props
            .get(&property_key(namespace, "alphabet"))
            .unwrap_or(DEFAULT_ALPHABET)
            .to_string();
        let block_size = props.get_int(&property_key(namespace, "block_size"), DEFAULT_BLOCK_SIZE)?;
        let min_length = props.get_int(&property_key(namespace, "min_length"), DEFAULT_MIN_LENGTH)?;

        let config = Self {
            alphabet,
            block_size,
            min_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a bijective encoding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 || self.block_size > 64 {
            return Err(ConfigError::BlockSize(self.block_size));
        }

        let count = self.alphabet.chars().count();
        if count < 2 {
            return Err(ConfigError::AlphabetTooShort(count));
        }

        let mut seen = HashSet::with_capacity(count);
        for symbol in self.alphabet.chars() {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        Ok(())
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            block_size: DEFAULT_BLOCK_SIZE,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Codec configuration for the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Codec for workspace ids
    pub workspace_ids: IdConfig,
    /// Codec for version ids, instantiated once per workspace
    pub version_ids: IdConfig,
}

impl StoreConfig {
    /// Read both namespaces from a properties set.
    pub fn from_properties(props: &Properties) -> Result<Self, ConfigError> {
        Ok(Self {
            workspace_ids: IdConfig::from_properties(props, WORKSPACE_IDS)?,
            version_ids: IdConfig::from_properties(props, VERSION_IDS)?,
        })
    }

    /// Validate both namespaces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.workspace_ids.validate()?;
        self.version_ids.validate()
    }
}

fn property_key(namespace: &str, name: &str) -> String {
    format!("ids.{}.obfuscate.{}", namespace, name)
}

/// Flat `key=value` configuration.
///
/// Accepts `key=value` and `key: value` lines. Lines starting with `#` or `!`
/// are comments; blank lines are skipped. Later keys override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    pub fn parse(text: &str) -> Self {
        let mut props = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let split = line.find(|c: char| c == '=' || c == ':');
            let (key, value) = match split {
                Some(pos) => (&line[..pos], &line[pos + 1..]),
                None => (line, ""),
            };
            props.set(key.trim(), value.trim());
        }
        props
    }

    /// Load properties from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("Loading configuration properties from {}", path.display());
        Ok(Self::parse(&text))
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Get a raw property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get an integer property, falling back to `default` when absent.
    pub fn get_int<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::NotAnInteger {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// Overlay `other` on this set; its values win.
    pub fn merge(&mut self, other: &Properties) -> &mut Self {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}
