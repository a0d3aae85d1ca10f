//! Core deterministic primitives.
//!
//! The seeded RNG every trial draws from, and the hashing used to
//! fingerprint a finished tournament.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::{DeterministicRng, derive_trial_seed};
pub use hash::{OutcomeHash, OutcomeHasher, compute_outcome_hash};
