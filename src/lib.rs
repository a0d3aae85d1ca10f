//! # World Cup Simulator
//!
//! Seeded Monte Carlo simulation of a 48-team tournament: twelve groups,
//! best third-placed qualifiers and a 32-team knockout bracket.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    WORLD CUP SIMULATOR                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Xorshift128+ PRNG, per-trial seeds        │
//! │  └── hash.rs     - Outcome fingerprints                      │
//! │                                                              │
//! │  tournament/     - Simulation engine (deterministic)         │
//! │  ├── outcome.rs  - Match probability model                   │
//! │  ├── group.rs    - Round-robin group stage                   │
//! │  ├── qualifier.rs- Best third-placed teams                   │
//! │  ├── bracket.rs  - Round-of-32 seeding template              │
//! │  ├── knockout.rs - Knockout rounds                           │
//! │  ├── placement.rs- Furthest stage per team                   │
//! │  ├── simulation.rs - One tournament                          │
//! │  └── trials.rs   - Many tournaments, tallied                 │
//! │                                                              │
//! │  config.rs       - Run settings from the environment         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same seed and skill model, a trial produces the same group
//! tables, bracket and placements on every run:
//! - No HashMap (uses BTreeMap for sorted iteration)
//! - No system time dependencies
//! - All randomness from seeded Xorshift128+
//! - The skill model is passed in, never stored globally
//!
//! ## Example
//!
//! ```
//! use world_cup::{simulate_world_cup, SkillTable, Stage, TeamId};
//!
//! let skill = SkillTable::new(0.0).with("brazil", 1.0);
//! let placements = simulate_world_cup(&skill, false, 2026).unwrap();
//!
//! assert_eq!(placements.len(), 48);
//! assert!(placements.get(&TeamId::from("brazil")).is_some());
//! assert_eq!(placements.teams_at(Stage::Winner).count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod tournament;

// Re-export commonly used types
pub use config::SimConfig;
pub use crate::core::rng::DeterministicRng;
pub use crate::core::hash::OutcomeHash;
pub use error::TournamentError;
pub use tournament::{
    run_trials, simulate_world_cup, GroupLabel, MatchConfig, PlacementTally, Placements,
    Roster, SkillModel, SkillTable, Stage, TeamId, TournamentOutcome, WorldCup,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of groups in the tournament
pub const GROUP_COUNT: usize = tournament::roster::GROUP_COUNT;

/// Teams entering the knockout bracket
pub const BRACKET_SIZE: usize = tournament::bracket::BRACKET_SIZE;
