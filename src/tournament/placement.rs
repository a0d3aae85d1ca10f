//! Placement Tracker
//!
//! Records the furthest stage each team reached.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::tournament::group::GroupStage;
use crate::tournament::knockout::KnockoutResult;
use crate::tournament::team::TeamId;

/// Tournament stages, ordered by depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Stage {
    /// Eliminated in the group stage
    #[serde(rename = "GROUPS")]
    Groups = 0,
    /// Reached the round of 32
    #[serde(rename = "R32")]
    RoundOf32 = 1,
    /// Reached the round of 16
    #[serde(rename = "R16")]
    RoundOf16 = 2,
    /// Reached the quarter-finals
    #[serde(rename = "QF")]
    QuarterFinal = 3,
    /// Reached the semi-finals
    #[serde(rename = "SF")]
    SemiFinal = 4,
    /// Reached the final
    #[serde(rename = "F")]
    Final = 5,
    /// Won the tournament
    #[serde(rename = "WINNER")]
    Winner = 6,
}

impl Stage {
    /// All stages, shallowest first.
    pub const ALL: [Stage; 7] = [
        Stage::Groups,
        Stage::RoundOf32,
        Stage::RoundOf16,
        Stage::QuarterFinal,
        Stage::SemiFinal,
        Stage::Final,
        Stage::Winner,
    ];

    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Groups => "GROUPS",
            Stage::RoundOf32 => "R32",
            Stage::RoundOf16 => "R16",
            Stage::QuarterFinal => "QF",
            Stage::SemiFinal => "SF",
            Stage::Final => "F",
            Stage::Winner => "WINNER",
        }
    }

    /// Index into [`Stage::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Furthest stage reached per team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placements(BTreeMap<TeamId, Stage>);

impl Placements {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `team` reached `stage`.
    ///
    /// Keeps the deeper of the old and new stage, so the result does not
    /// depend on the order stages are recorded in.
    pub fn promote(&mut self, team: &TeamId, stage: Stage) {
        self.0
            .entry(team.clone())
            .and_modify(|current| *current = (*current).max(stage))
            .or_insert(stage);
    }

    /// Stage reached by `team`.
    pub fn get(&self, team: &TeamId) -> Option<Stage> {
        self.0.get(team).copied()
    }

    /// Iterate alphabetically by team.
    pub fn iter(&self) -> impl Iterator<Item = (&TeamId, Stage)> {
        self.0.iter().map(|(team, stage)| (team, *stage))
    }

    /// Teams whose furthest stage is exactly `stage`.
    pub fn teams_at(&self, stage: Stage) -> impl Iterator<Item = &TeamId> {
        self.iter().filter(move |(_, s)| *s == stage).map(|(team, _)| team)
    }

    /// The champion, if the tournament finished.
    pub fn champion(&self) -> Option<&TeamId> {
        self.teams_at(Stage::Winner).next()
    }

    /// Number of teams tracked.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no team is tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Assign every team its furthest stage.
///
/// All group teams start at `Groups`; each knockout list promotes its
/// members; the champion ends at `Winner`.
pub fn calculate_placements(stage: &GroupStage, knockouts: &KnockoutResult) -> Placements {
    let mut placements = Placements::new();

    for team in stage.teams() {
        placements.promote(team, Stage::Groups);
    }

    for (round_stage, teams) in knockouts.rounds() {
        for team in teams {
            placements.promote(team, round_stage);
        }
    }

    placements.promote(&knockouts.champion, Stage::Winner);

    placements
}
