//! Round-of-32 Seeding Template
//!
//! The official 2026 round-of-32 pairing as data. Each of the 16 matches
//! names two slot sources: a group winner or runner-up, or a position in
//! the reshuffled best-thirds list. Resolving the template is kept apart
//! from playing it so the seeding can be checked on its own.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::rng::DeterministicRng;
use crate::error::TournamentError;
use crate::tournament::group::{GroupLabel, GroupStage};
use crate::tournament::qualifier::{pick_best_thirds, BEST_THIRDS};
use crate::tournament::team::TeamId;

/// Teams in the round of 32.
pub const BRACKET_SIZE: usize = 32;

/// Matches in the round of 32.
pub const ROUND_OF_32_MATCHES: usize = BRACKET_SIZE / 2;

/// Finishing position a slot takes from a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupRank {
    /// First place
    Winner,
    /// Second place
    RunnerUp,
}

impl GroupRank {
    /// 0-based table position.
    pub fn position(self) -> usize {
        match self {
            GroupRank::Winner => 0,
            GroupRank::RunnerUp => 1,
        }
    }
}

/// Where a bracket slot gets its team from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotSource {
    /// A fixed finishing position in a named group
    Group {
        /// Group
        group: GroupLabel,
        /// Winner or runner-up
        rank: GroupRank,
    },
    /// Index into the reshuffled best-thirds list
    BestThird(usize),
}

impl fmt::Display for SlotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSource::Group { group, rank } => write!(f, "{}{}", rank.position() + 1, group),
            SlotSource::BestThird(index) => write!(f, "T{index}"),
        }
    }
}

const fn winner(group: GroupLabel) -> SlotSource {
    SlotSource::Group { group, rank: GroupRank::Winner }
}

const fn runner_up(group: GroupLabel) -> SlotSource {
    SlotSource::Group { group, rank: GroupRank::RunnerUp }
}

const fn third(index: usize) -> SlotSource {
    SlotSource::BestThird(index)
}

/// Round-of-32 pairings in bracket order. Adjacent matches feed the same
/// round-of-16 match.
///
/// The trailing comments give the official third-place eligibility of each
/// best-third slot. Slots are filled from the shuffled best-thirds list
/// rather than by eligibility.
pub const ROUND_OF_32_TEMPLATE: [(SlotSource, SlotSource); ROUND_OF_32_MATCHES] = {
    use GroupLabel::*;
    [
        (winner(E), third(0)),        // 1: 1E vs 3A/B/C/D/F
        (winner(I), third(1)),        // 2: 1I vs 3C/D/F/G/H
        (runner_up(A), runner_up(B)), // 3
        (winner(F), runner_up(C)),    // 4
        (runner_up(K), runner_up(L)), // 5
        (winner(H), runner_up(J)),    // 6
        (winner(D), third(2)),        // 7: 1D vs 3B/E/F/I/J
        (winner(G), third(3)),        // 8: 1G vs 3A/E/H/I/J
        (winner(C), runner_up(F)),    // 9
        (runner_up(E), runner_up(I)), // 10
        (winner(A), third(4)),        // 11: 1A vs 3C/E/F/H/I
        (winner(L), third(5)),        // 12: 1L vs 3E/H/I/J/K
        (winner(J), runner_up(H)),    // 13
        (runner_up(D), runner_up(G)), // 14
        (winner(B), third(6)),        // 15: 1B vs 3E/F/G/I/J
        (winner(K), third(7)),        // 16: 1K vs 3D/E/I/J/L
    ]
};

/// Template slots flattened in bracket order (32 entries).
pub fn template_slots() -> impl Iterator<Item = SlotSource> {
    let template: &'static [(SlotSource, SlotSource)] = &ROUND_OF_32_TEMPLATE;
    template.iter().flat_map(|&(home, away)| [home, away])
}

/// Resolve one slot against the group results and best-thirds list.
pub fn resolve_slot<'a>(
    slot: SlotSource,
    stage: &'a GroupStage,
    best_thirds: &'a [TeamId],
) -> Result<&'a TeamId, TournamentError> {
    let team = match slot {
        SlotSource::Group { group, rank } => stage
            .table(group)
            .and_then(|table| table.team_at(rank.position())),
        SlotSource::BestThird(index) => best_thirds.get(index),
    };

    team.ok_or(TournamentError::UnresolvedSlot { slot })
}

/// Build the round-of-32 list from the group results.
///
/// Selects the best thirds, reshuffles them once more so no residual
/// bucket order leaks into the seeding, then fills every template slot.
/// Pairs (2i, 2i+1) of the result meet in round one.
pub fn create_knockouts_list(
    stage: &GroupStage,
    rng: &mut DeterministicRng,
) -> Result<Vec<TeamId>, TournamentError> {
    let mut best_thirds = pick_best_thirds(stage, rng);
    rng.shuffle(&mut best_thirds);

    template_slots()
        .map(|slot| resolve_slot(slot, stage, &best_thirds).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::group::simulate_group_stage;
    use crate::tournament::outcome::MatchConfig;
    use crate::tournament::roster::Roster;
    use crate::tournament::team::SkillTable;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_template_uses_every_group_position_once() {
        let mut winners = BTreeSet::new();
        let mut runners_up = BTreeSet::new();
        let mut thirds = BTreeSet::new();

        for slot in template_slots() {
            let fresh = match slot {
                SlotSource::Group { group, rank: GroupRank::Winner } => winners.insert(group),
                SlotSource::Group { group, rank: GroupRank::RunnerUp } => runners_up.insert(group),
                SlotSource::BestThird(index) => thirds.insert(index),
            };
            assert!(fresh, "slot {slot} used twice");
        }

        assert_eq!(winners.len(), 12);
        assert_eq!(runners_up.len(), 12);
        assert_eq!(thirds, (0..BEST_THIRDS).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_group_winners_never_meet_in_round_one() {
        for (home, away) in ROUND_OF_32_TEMPLATE {
            let both_winners = matches!(
                (home, away),
                (
                    SlotSource::Group { rank: GroupRank::Winner, .. },
                    SlotSource::Group { rank: GroupRank::Winner, .. }
                )
            );
            assert!(!both_winners, "{home} vs {away}");
        }
    }

    #[test]
    fn test_template_order_matches_official_bracket() {
        let labels: Vec<String> = template_slots().map(|s| s.to_string()).collect();

        assert_eq!(
            labels,
            [
                "1E", "T0", "1I", "T1", "2A", "2B", "1F", "2C",
                "2K", "2L", "1H", "2J", "1D", "T2", "1G", "T3",
                "1C", "2F", "2E", "2I", "1A", "T4", "1L", "T5",
                "1J", "2H", "2D", "2G", "1B", "T6", "1K", "T7",
            ]
        );
    }

    #[test]
    fn test_knockouts_list_is_32_distinct_teams() {
        let roster = Roster::world_cup_2026();
        let config = MatchConfig::default();
        let mut rng = DeterministicRng::new(21);

        for _ in 0..50 {
            let stage = simulate_group_stage(&roster, &SkillTable::new(0.0), &mut rng, &config);
            let r32 = create_knockouts_list(&stage, &mut rng).unwrap();
            let distinct: BTreeSet<_> = r32.iter().collect();

            assert_eq!(r32.len(), BRACKET_SIZE);
            assert_eq!(distinct.len(), BRACKET_SIZE);
        }
    }

    #[test]
    fn test_fixed_slots_follow_tables() {
        let roster = Roster::world_cup_2026();
        let mut rng = DeterministicRng::new(22);
        let stage = simulate_group_stage(&roster, &SkillTable::new(0.0), &mut rng, &MatchConfig::default());
        let r32 = create_knockouts_list(&stage, &mut rng).unwrap();

        let team = |label, pos| stage.table(label).unwrap().team_at(pos).unwrap();
        assert_eq!(&r32[0], team(GroupLabel::E, 0));
        assert_eq!(&r32[4], team(GroupLabel::A, 1));
        assert_eq!(&r32[5], team(GroupLabel::B, 1));
        assert_eq!(&r32[30], team(GroupLabel::K, 0));

        // Best-third slots hold third-placed teams
        let thirds: BTreeMap<_, _> = stage
            .iter()
            .map(|t| (t.team_at(2).unwrap().clone(), t.label))
            .collect();
        for index in [1, 3, 13, 15, 21, 23, 29, 31] {
            assert!(thirds.contains_key(&r32[index]), "slot {index} is not a third");
        }
    }

    #[test]
    fn test_missing_group_is_unresolved() {
        let roster = Roster::world_cup_2026();
        let mut rng = DeterministicRng::new(23);
        let mut stage = simulate_group_stage(&roster, &SkillTable::new(0.0), &mut rng, &MatchConfig::default());
        stage.tables.remove(&GroupLabel::E);

        assert_eq!(
            create_knockouts_list(&stage, &mut rng),
            Err(TournamentError::UnresolvedSlot { slot: winner(GroupLabel::E) })
        );
    }
}
