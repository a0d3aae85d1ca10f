//! Group Stage Engine
//!
//! Round-robin inside each group: every pair plays once, 3 points for a
//! win and 1 each for a draw. Tables are ordered by points with ties
//! broken at random.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::rng::DeterministicRng;
use crate::tournament::events::MatchRecord;
use crate::tournament::outcome::{simulate_match, MatchConfig, MatchOutcome};
use crate::tournament::placement::Stage;
use crate::tournament::roster::Roster;
use crate::tournament::team::{SkillModel, TeamId};

/// Points for a win.
pub const POINTS_WIN: u32 = 3;

/// Points for each side in a draw.
pub const POINTS_DRAW: u32 = 1;

// =============================================================================
// GROUP LABEL
// =============================================================================

/// Group label A-L.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GroupLabel {
    /// Group A
    A = 0,
    /// Group B
    B = 1,
    /// Group C
    C = 2,
    /// Group D
    D = 3,
    /// Group E
    E = 4,
    /// Group F
    F = 5,
    /// Group G
    G = 6,
    /// Group H
    H = 7,
    /// Group I
    I = 8,
    /// Group J
    J = 9,
    /// Group K
    K = 10,
    /// Group L
    L = 11,
}

impl GroupLabel {
    /// All labels in order.
    pub const ALL: [GroupLabel; 12] = [
        GroupLabel::A, GroupLabel::B, GroupLabel::C, GroupLabel::D,
        GroupLabel::E, GroupLabel::F, GroupLabel::G, GroupLabel::H,
        GroupLabel::I, GroupLabel::J, GroupLabel::K, GroupLabel::L,
    ];

    /// Letter for this label.
    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// GROUP
// =============================================================================

/// A group and its teams, in draw order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group label
    pub label: GroupLabel,
    /// Teams in draw order
    pub teams: Vec<TeamId>,
}

impl Group {
    /// Create a group.
    pub fn new<T: Into<TeamId>>(label: GroupLabel, teams: impl IntoIterator<Item = T>) -> Self {
        Self {
            label,
            teams: teams.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of round-robin matches: n choose 2.
    pub fn match_count(&self) -> usize {
        let n = self.teams.len();
        n * n.saturating_sub(1) / 2
    }
}

// =============================================================================
// GROUP TABLE
// =============================================================================

/// One line of a group table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Team
    pub team: TeamId,
    /// Points earned in the group
    pub points: u32,
}

/// Final standings of one group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    /// Group label
    pub label: GroupLabel,
    /// Rows by points descending
    pub rows: Vec<TableRow>,
    /// Matches in the order they were played
    pub matches: Vec<MatchRecord>,
}

impl GroupTable {
    /// Row at 0-based `position`, if the group is that large.
    pub fn row(&self, position: usize) -> Option<&TableRow> {
        self.rows.get(position)
    }

    /// Team at 0-based `position`.
    pub fn team_at(&self, position: usize) -> Option<&TeamId> {
        self.row(position).map(|row| &row.team)
    }

    /// Sum of points over all rows.
    pub fn total_points(&self) -> u32 {
        self.rows.iter().map(|row| row.points).sum()
    }

    /// Number of matches that ended in a draw.
    pub fn draws(&self) -> usize {
        self.matches.iter().filter(|m| !m.outcome.is_decisive()).count()
    }

    /// Number of matches with a winner.
    pub fn decisive(&self) -> usize {
        self.matches.len() - self.draws()
    }

    /// Teams in table order.
    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.rows.iter().map(|row| &row.team)
    }
}

/// Simulate one group.
///
/// Pairs are played in draw order (i < j). Ranking is an explicit
/// two-step: shuffle all rows, then stable-sort by points, so tied teams
/// land in random relative order. Groups of 0 or 1 team produce a table
/// without matches.
pub fn simulate_group<S: SkillModel + ?Sized>(
    group: &Group,
    skill: &S,
    rng: &mut DeterministicRng,
    config: &MatchConfig,
) -> GroupTable {
    let teams = &group.teams;
    let mut points = vec![0u32; teams.len()];
    let mut matches = Vec::with_capacity(group.match_count());

    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            let outcome = simulate_match(&teams[i], &teams[j], skill, true, rng, config);
            match outcome {
                MatchOutcome::Team1 => points[i] += POINTS_WIN,
                MatchOutcome::Team2 => points[j] += POINTS_WIN,
                MatchOutcome::Draw => {
                    points[i] += POINTS_DRAW;
                    points[j] += POINTS_DRAW;
                }
            }
            matches.push(MatchRecord::new(
                Stage::Groups,
                teams[i].clone(),
                teams[j].clone(),
                outcome,
            ));
        }
    }

    let mut rows: Vec<TableRow> = teams
        .iter()
        .zip(points)
        .map(|(team, points)| TableRow { team: team.clone(), points })
        .collect();

    rng.shuffle(&mut rows);
    rows.sort_by(|a, b| b.points.cmp(&a.points));

    let table = GroupTable {
        label: group.label,
        rows,
        matches,
    };

    debug!(
        group = %table.label,
        leader = %table.team_at(0).map(TeamId::as_str).unwrap_or("-"),
        points = table.total_points(),
        draws = table.draws(),
        decisive = table.decisive(),
        "group simulated"
    );

    table
}

// =============================================================================
// GROUP STAGE
// =============================================================================

/// Tables of every group, keyed by label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStage {
    /// Tables in label order
    pub tables: BTreeMap<GroupLabel, GroupTable>,
}

impl GroupStage {
    /// Table of one group.
    pub fn table(&self, label: GroupLabel) -> Option<&GroupTable> {
        self.tables.get(&label)
    }

    /// Iterate tables in label order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupTable> {
        self.tables.values()
    }

    /// Every team in every group.
    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.tables.values().flat_map(|table| table.teams())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no group has been played.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<GroupTable> for GroupStage {
    fn from_iter<I: IntoIterator<Item = GroupTable>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().map(|table| (table.label, table)).collect(),
        }
    }
}

/// Simulate every group of the roster in label order.
pub fn simulate_group_stage<S: SkillModel + ?Sized>(
    roster: &Roster,
    skill: &S,
    rng: &mut DeterministicRng,
    config: &MatchConfig,
) -> GroupStage {
    roster
        .groups()
        .iter()
        .map(|group| simulate_group(group, skill, rng, config))
        .collect()
}
