//! Tournament Roster
//!
//! The twelve groups a tournament is played with. Validated once on
//! construction so the engine never sees a malformed draw.

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use crate::error::TournamentError;
use crate::tournament::group::{Group, GroupLabel};
use crate::tournament::team::TeamId;

/// Number of groups in the format.
pub const GROUP_COUNT: usize = 12;

/// Smallest allowed group.
pub const MIN_GROUP_SIZE: usize = 3;

/// Largest allowed group.
pub const MAX_GROUP_SIZE: usize = 4;

/// A validated set of groups, ordered by label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    groups: Vec<Group>,
}

impl Roster {
    /// Validate and build a roster.
    ///
    /// Requires exactly [`GROUP_COUNT`] groups with distinct labels,
    /// 3-4 teams each, and no team drawn twice.
    pub fn new(groups: Vec<Group>) -> Result<Self, TournamentError> {
        if groups.len() != GROUP_COUNT {
            return Err(TournamentError::GroupCount {
                expected: GROUP_COUNT,
                got: groups.len(),
            });
        }

        let mut by_label: BTreeMap<GroupLabel, Group> = BTreeMap::new();
        let mut seen: BTreeMap<TeamId, GroupLabel> = BTreeMap::new();

        for group in groups {
            let size = group.teams.len();
            if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&size) {
                return Err(TournamentError::GroupSize { group: group.label, size });
            }

            for team in &group.teams {
                if let Some(first) = seen.insert(team.clone(), group.label) {
                    return Err(TournamentError::DuplicateTeam {
                        team: team.clone(),
                        first,
                        second: group.label,
                    });
                }
            }

            let label = group.label;
            if by_label.insert(label, group).is_some() {
                return Err(TournamentError::DuplicateGroup(label));
            }
        }

        Ok(Self {
            groups: by_label.into_values().collect(),
        })
    }

    /// The 2026 draw. Unconfirmed playoff spots are educated guesses.
    pub fn world_cup_2026() -> Self {
        use GroupLabel::*;

        let groups = [
            (A, ["mexico", "south korea", "south africa", "denmark"]),
            (B, ["canada", "switzerland", "qatar", "italy"]),
            (C, ["brazil", "morocco", "scotland", "haiti"]),
            (D, ["united states", "paraguay", "australia", "turkey"]),
            (E, ["germany", "ecuador", "ivory coast", "curaçao"]),
            (F, ["netherlands", "japan", "tunisia", "sweden"]),
            (G, ["belgium", "egypt", "iran", "new zealand"]),
            (H, ["spain", "cape verde", "saudi arabia", "uruguay"]),
            (I, ["france", "senegal", "norway", "iraq"]),
            (J, ["argentina", "algeria", "austria", "jordan"]),
            (K, ["portugal", "colombia", "uzbekistan", "dr congo"]),
            (L, ["england", "croatia", "ghana", "panama"]),
        ];

        // Distinct labels, four unique teams each: always valid
        Self {
            groups: groups
                .into_iter()
                .map(|(label, teams)| Group::new(label, teams))
                .collect(),
        }
    }

    /// Groups in label order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Every team, group by group.
    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.groups.iter().flat_map(|g| g.teams.iter())
    }

    /// Total number of teams.
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.teams.len()).sum()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::world_cup_2026()
    }
}
