//! Tournament Module
//!
//! The simulation engine. Deterministic for a given RNG seed and skill model.
//!
//! ## Module Structure
//!
//! - `team`: Team identifiers and skill models
//! - `outcome`: Single-match probability model
//! - `events`: Match records
//! - `roster`: The twelve groups
//! - `group`: Round-robin group stage
//! - `qualifier`: Best third-placed teams
//! - `bracket`: Round-of-32 seeding template
//! - `knockout`: Knockout rounds to a champion
//! - `placement`: Furthest stage per team
//! - `simulation`: One full tournament
//! - `trials`: Many tournaments and their tally
//! - `report`: Console output

pub mod team;
pub mod outcome;
pub mod events;
pub mod roster;
pub mod group;
pub mod qualifier;
pub mod bracket;
pub mod knockout;
pub mod placement;
pub mod simulation;
pub mod trials;
pub mod report;

// Re-export key types
pub use team::{TeamId, SkillModel, SkillTable};
pub use outcome::{MatchConfig, MatchOutcome};
pub use group::{Group, GroupLabel, GroupStage, GroupTable};
pub use roster::Roster;
pub use knockout::KnockoutResult;
pub use placement::{Placements, Stage};
pub use simulation::{simulate_world_cup, TournamentOutcome, WorldCup};
pub use trials::{run_trials, PlacementTally, TeamOdds};
