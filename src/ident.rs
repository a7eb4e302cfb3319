//! Device identifier type and generation
//!
//! Identifiers are fixed-length strings drawn from the uppercase alphabet.
//! Generation is a pure random draw with no uniqueness guarantee; collision
//! avoidance is the registry's job.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default length of a generated device identifier
pub const DEVICE_ID_LENGTH: usize = 8;

/// Alphabet identifiers are drawn from
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Opaque identifier addressing one registered device.
///
/// Unique within a single registry instance only; there is no global
/// uniqueness guarantee and no persistence across process lifetimes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    /// Create a device id from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of candidate device identifiers.
///
/// Implementations draw independently on each call and may repeat
/// themselves. The registry injects its own generator, so tests can supply
/// a deterministic one.
pub trait IdGenerator: Send + Sync {
    /// Draw the next candidate identifier
    fn next_id(&mut self) -> DeviceId;
}

/// Random identifier generator backed by a seedable RNG
pub struct RandomIdGenerator {
    rng: StdRng,
    length: usize,
}

impl RandomIdGenerator {
    /// Create a generator seeded from OS entropy with the default length
    pub fn new() -> Self {
        Self::with_length(DEVICE_ID_LENGTH)
    }

    /// Create a generator seeded from OS entropy with a custom length
    pub fn with_length(length: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            length,
        }
    }

    /// Create a deterministic generator from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            length: DEVICE_ID_LENGTH,
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> DeviceId {
        let id: String = (0..self.length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        DeviceId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let mut gen = RandomIdGenerator::new();
        let id = gen.next_id();
        assert_eq!(id.as_str().len(), DEVICE_ID_LENGTH);
        assert!(id.as_str().chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_custom_length() {
        let mut gen = RandomIdGenerator::with_length(3);
        assert_eq!(gen.next_id().as_str().len(), 3);
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let mut a = RandomIdGenerator::seeded(42);
        let mut b = RandomIdGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_draws_are_independent() {
        let mut gen = RandomIdGenerator::seeded(7);
        let first = gen.next_id();
        let second = gen.next_id();
        assert_ne!(first, second);
    }
}
