//! Opaque, ordered identifiers
//!
//! Identifiers are minted from a per-factory counter and rendered as short
//! strings that do not reveal the counter. The string form is a boundary
//! artifact only: ordering and equality inside the store always use the
//! decoded [`Sequence`].
//!
//! ## Encoding
//!
//! ```text
//! n ──► reverse the low `block_size` bits ──► base-|alphabet| digits ──► left-pad to `min_length`
//! ```
//!
//! Bit reversal is its own inverse, so decoding parses the digits and reverses
//! the same block again.

use crate::config::IdConfig;
use crate::error::{ConfigError, DecodeError};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Decoded identifier value.
///
/// Orders numerically, which is minting order for ids from one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(u64);

impl Sequence {
    /// Wrap a raw counter value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw counter value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reversible integer ↔ string encoder.
#[derive(Debug, Clone)]
pub struct IdObfuscator {
    alphabet: Vec<char>,
    index: HashMap<char, u64>,
    block_size: u32,
    mask: u64,
    min_length: usize,
}

impl IdObfuscator {
    /// Build an encoder from a validated configuration.
    pub fn new(config: &IdConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let alphabet: Vec<char> = config.alphabet.chars().collect();
        let index = alphabet
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, i as u64))
            .collect();
        let mask = if config.block_size == 64 {
            u64::MAX
        } else {
            (1u64 << config.block_size) - 1
        };

        Ok(Self {
            alphabet,
            index,
            block_size: config.block_size,
            mask,
            min_length: config.min_length,
        })
    }

    /// Encode a sequence number.
    pub fn encode(&self, n: u64) -> String {
        self.enbase(self.scramble(n))
    }

    /// Decode a string produced by [`encode`](Self::encode).
    pub fn decode(&self, id: &str) -> Result<u64, DecodeError> {
        Ok(self.scramble(self.debase(id)?))
    }

    /// Reverse the bits of the low block; bits above the block pass through.
    fn scramble(&self, n: u64) -> u64 {
        let block = (n & self.mask).reverse_bits() >> (64 - self.block_size);
        (n & !self.mask) | block
    }

    fn enbase(&self, mut n: u64) -> String {
        let base = self.alphabet.len() as u64;
        let mut digits = Vec::new();
        loop {
            digits.push(self.alphabet[(n % base) as usize]);
            n /= base;
            if n == 0 {
                break;
            }
        }

        while digits.len() < self.min_length {
            digits.push(self.alphabet[0]);
        }

        digits.iter().rev().collect()
    }

    fn debase(&self, id: &str) -> Result<u64, DecodeError> {
        if id.is_empty() {
            return Err(DecodeError::Empty);
        }

        let base = self.alphabet.len() as u64;
        let mut value: u64 = 0;
        for (position, symbol) in id.chars().enumerate() {
            let digit = *self
                .index
                .get(&symbol)
                .ok_or(DecodeError::InvalidSymbol { symbol, position })?;
            value = value
                .checked_mul(base)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| DecodeError::Overflow(id.to_string()))?;
        }
        Ok(value)
    }
}

/// Mints identifiers for one namespace.
///
/// Each factory owns its counter; two factories never share numbering.
///
/// # Thread Safety
///
/// [`next`](Self::next) is a single atomic increment, so concurrent callers
/// always receive distinct ids.
#[derive(Debug)]
pub struct IdFactory {
    obfuscator: Arc<IdObfuscator>,
    counter: AtomicU64,
}

impl IdFactory {
    /// Create a factory whose first id encodes 1.
    pub fn new(config: &IdConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_obfuscator(Arc::new(IdObfuscator::new(config)?)))
    }

    /// Create a factory with a fresh counter over an existing encoder.
    pub fn with_obfuscator(obfuscator: Arc<IdObfuscator>) -> Self {
        Self {
            obfuscator,
            counter: AtomicU64::new(1),
        }
    }

    /// Create a factory, logging the configuration for `namespace`.
    pub fn for_namespace(config: &IdConfig, namespace: &str) -> Result<Self, ConfigError> {
        tracing::debug!(
            namespace,
            alphabet = %config.alphabet,
            block_size = config.block_size,
            min_length = config.min_length,
            "Initializing id obfuscator"
        );
        Self::new(config)
    }

    /// Mint the next id, returning both its decoded and display forms.
    pub fn next(&self) -> (Sequence, String) {
        let n = self.counter.fetch_add(1, AtomicOrdering::SeqCst);
        (Sequence(n), self.obfuscator.encode(n))
    }

    /// Mint the next id in display form.
    pub fn next_id(&self) -> String {
        self.next().1
    }

    /// Encode a sequence number.
    pub fn encode(&self, seq: Sequence) -> String {
        self.obfuscator.encode(seq.0)
    }

    /// Decode a display id minted by this factory's configuration.
    pub fn decode(&self, id: &str) -> Result<Sequence, DecodeError> {
        self.obfuscator.decode(id).map(Sequence)
    }

    /// Compare two display ids by the sequence numbers they decode to.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering, DecodeError> {
        Ok(self.decode(a)?.cmp(&self.decode(b)?))
    }

    /// The encoder shared by this factory.
    pub fn obfuscator(&self) -> &Arc<IdObfuscator> {
        &self.obfuscator
    }

    /// Number of ids minted so far.
    pub fn minted(&self) -> u64 {
        self.counter.load(AtomicOrdering::SeqCst) - 1
    }
}
