//! Outcome Hashing for Reproducibility
//!
//! Provides deterministic SHA-256 fingerprints of tournament outcomes for:
//! - Replay checks (same seed must give the same fingerprint)
//! - Comparing trials without diffing every table

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type OutcomeHash = [u8; 32];

/// Deterministic hasher for tournament outcomes.
///
/// Wraps SHA-256 with helpers for the values a tournament produces.
/// Order of updates is critical for determinism.
pub struct OutcomeHasher {
    hasher: Sha256,
}

impl OutcomeHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a full tournament outcome.
    pub fn for_tournament() -> Self {
        Self::new(b"WORLD_CUP_OUTCOME_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a length-prefixed string.
    ///
    /// The prefix keeps `["ab", "c"]` and `["a", "bc"]` apart.
    #[inline]
    pub fn update_str(&mut self, value: &str) {
        self.update_u32(value.len() as u32);
        self.hasher.update(value.as_bytes());
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> OutcomeHash {
        self.hasher.finalize().into()
    }
}

/// Compute hash with domain separator.
pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> OutcomeHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the fingerprint of a tournament outcome.
///
/// This function is called by `TournamentOutcome::compute_hash()`.
/// The closure adds the outcome-specific data after the starting RNG state.
pub fn compute_outcome_hash<F>(rng_state: [u64; 2], add_outcome: F) -> OutcomeHash
where
    F: FnOnce(&mut OutcomeHasher),
{
    let mut hasher = OutcomeHasher::for_tournament();

    // Always hash both RNG state words first
    for word in rng_state {
        hasher.update_u64(word);
    }

    add_outcome(&mut hasher);

    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================
