//! Match Outcome Model
//!
//! Turns two skill values into a probabilistic result. Draw probability
//! peaks at `max_draw_prob` for evenly matched teams and decays
//! exponentially with the skill gap; the remaining mass is split by a
//! logistic curve of the skill difference.

use serde::{Serialize, Deserialize};
#[cfg(feature = "debug-tracing")]
use tracing::trace;

use crate::core::rng::DeterministicRng;
use crate::tournament::team::{SkillModel, TeamId};

/// Default peak draw probability for evenly matched teams.
pub const DEFAULT_MAX_DRAW_PROB: f64 = 0.15;

/// Configuration for the match model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Draw probability at zero skill difference.
    pub max_draw_prob: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_draw_prob: DEFAULT_MAX_DRAW_PROB,
        }
    }
}

/// Result of a single match from the first team's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MatchOutcome {
    /// First-named team won
    Team1 = 0,
    /// Draw (group stage only)
    Draw = 1,
    /// Second-named team won
    Team2 = 2,
}

impl MatchOutcome {
    /// Winner of the match, or None for a draw.
    pub fn winner<'a>(self, team1: &'a TeamId, team2: &'a TeamId) -> Option<&'a TeamId> {
        match self {
            MatchOutcome::Team1 => Some(team1),
            MatchOutcome::Team2 => Some(team2),
            MatchOutcome::Draw => None,
        }
    }

    /// True for a win by either side.
    pub fn is_decisive(self) -> bool {
        self != MatchOutcome::Draw
    }
}

/// Probabilities of the three outcomes. Always sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeProbabilities {
    /// First team wins.
    pub team1: f64,
    /// Draw.
    pub draw: f64,
    /// Second team wins.
    pub team2: f64,
}

impl OutcomeProbabilities {
    /// Map a uniform draw in [0, 1) onto an outcome.
    ///
    /// [0, team1) is a team1 win, [team1, team1 + draw) a draw,
    /// anything above a team2 win.
    #[inline]
    pub fn resolve(&self, roll: f64) -> MatchOutcome {
        if roll < self.team1 {
            MatchOutcome::Team1
        } else if roll < self.team1 + self.draw {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Team2
        }
    }
}

/// Outcome probabilities for a given skill difference (team1 - team2).
pub fn outcome_probabilities(
    skill_diff: f64,
    allow_draw: bool,
    max_draw_prob: f64,
) -> OutcomeProbabilities {
    let draw = if allow_draw {
        max_draw_prob * (-skill_diff.abs()).exp()
    } else {
        0.0
    };

    let team1 = (1.0 - draw) / (1.0 + (-skill_diff).exp());
    let team2 = 1.0 - draw - team1;

    OutcomeProbabilities { team1, draw, team2 }
}

/// Simulate one match.
///
/// Queries `skill` exactly once per team and consumes exactly one
/// uniform draw from `rng`. Returns [`MatchOutcome::Draw`] only when
/// `allow_draw` is set.
pub fn simulate_match<S: SkillModel + ?Sized>(
    team1: &TeamId,
    team2: &TeamId,
    skill: &S,
    allow_draw: bool,
    rng: &mut DeterministicRng,
    config: &MatchConfig,
) -> MatchOutcome {
    let skill_diff = skill.skill(team1) - skill.skill(team2);
    let probs = outcome_probabilities(skill_diff, allow_draw, config.max_draw_prob);
    let outcome = probs.resolve(rng.next_f64());

    #[cfg(feature = "debug-tracing")]
    trace!(%team1, %team2, skill_diff, ?outcome, "match resolved");

    outcome
}

/// Simulate a knockout match. Always produces a winner from one draw.
///
/// Returns the winner together with the decisive outcome.
pub fn simulate_knockout_match<'a, S: SkillModel + ?Sized>(
    team1: &'a TeamId,
    team2: &'a TeamId,
    skill: &S,
    rng: &mut DeterministicRng,
    config: &MatchConfig,
) -> (&'a TeamId, MatchOutcome) {
    match simulate_match(team1, team2, skill, false, rng, config) {
        MatchOutcome::Team2 => (team2, MatchOutcome::Team2),
        // Draw is unreachable with a zero draw probability
        MatchOutcome::Team1 | MatchOutcome::Draw => (team1, MatchOutcome::Team1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::team::SkillTable;
    use proptest::prelude::*;

    fn teams() -> (TeamId, TeamId) {
        (TeamId::from("home"), TeamId::from("away"))
    }

    #[test]
    fn test_even_match_probabilities() {
        let probs = outcome_probabilities(0.0, true, 0.15);

        assert!((probs.draw - 0.15).abs() < 1e-12);
        assert!((probs.team1 - 0.425).abs() < 1e-12);
        assert!((probs.team2 - 0.425).abs() < 1e-12);
    }

    #[test]
    fn test_knockout_probabilities_have_no_draw() {
        let probs = outcome_probabilities(1.0, false, 0.15);

        assert_eq!(probs.draw, 0.0);
        assert!((probs.team1 - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_partitions_unit_interval() {
        let probs = OutcomeProbabilities { team1: 0.4, draw: 0.2, team2: 0.4 };

        assert_eq!(probs.resolve(0.0), MatchOutcome::Team1);
        assert_eq!(probs.resolve(0.399), MatchOutcome::Team1);
        assert_eq!(probs.resolve(0.4), MatchOutcome::Draw);
        assert_eq!(probs.resolve(0.599), MatchOutcome::Draw);
        assert_eq!(probs.resolve(0.6), MatchOutcome::Team2);
        assert_eq!(probs.resolve(0.999), MatchOutcome::Team2);
    }

    #[test]
    fn test_knockout_never_draws() {
        let (home, away) = teams();
        let skill = SkillTable::new(0.0);
        let config = MatchConfig::default();
        let mut rng = DeterministicRng::new(77);

        for _ in 0..20_000 {
            let outcome = simulate_match(&home, &away, &skill, false, &mut rng, &config);
            assert_ne!(outcome, MatchOutcome::Draw);

            let (winner, outcome) = simulate_knockout_match(&home, &away, &skill, &mut rng, &config);
            assert_eq!(outcome.winner(&home, &away), Some(winner));
        }
    }

    #[test]
    fn test_group_match_can_draw() {
        let (home, away) = teams();
        let skill = SkillTable::new(0.0);
        let config = MatchConfig::default();
        let mut rng = DeterministicRng::new(78);

        let draws = (0..10_000)
            .filter(|_| simulate_match(&home, &away, &skill, true, &mut rng, &config) == MatchOutcome::Draw)
            .count();

        // Expect ~1500
        assert!((1200..1800).contains(&draws), "draws = {draws}");
    }

    #[test]
    fn test_skill_queried_twice_per_match() {
        use std::cell::Cell;

        let calls = Cell::new(0u32);
        let skill = |_: &TeamId| {
            calls.set(calls.get() + 1);
            0.0
        };
        let (home, away) = teams();
        let mut rng = DeterministicRng::new(1);

        simulate_match(&home, &away, &skill, true, &mut rng, &MatchConfig::default());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_stronger_team_wins_more() {
        let (home, away) = teams();
        let skill = SkillTable::new(0.0).with("home", 1.0);
        let mut rng = DeterministicRng::new(5);
        let config = MatchConfig::default();

        let wins = (0..10_000)
            .filter(|_| simulate_knockout_match(&home, &away, &skill, &mut rng, &config).0 == &home)
            .count();

        // logistic(1.0) ~= 0.731
        assert!((7000..7600).contains(&wins), "wins = {wins}");
    }

    #[test]
    fn test_outcome_winner() {
        let (home, away) = teams();

        assert_eq!(MatchOutcome::Team1.winner(&home, &away), Some(&home));
        assert_eq!(MatchOutcome::Team2.winner(&home, &away), Some(&away));
        assert_eq!(MatchOutcome::Draw.winner(&home, &away), None);
        assert!(!MatchOutcome::Draw.is_decisive());
    }

    proptest! {
        #[test]
        fn prop_probabilities_sum_to_one(diff in -20.0f64..20.0, allow_draw in any::<bool>(), cap in 0.0f64..1.0) {
            let probs = outcome_probabilities(diff, allow_draw, cap);

            prop_assert!((probs.team1 + probs.draw + probs.team2 - 1.0).abs() < 1e-9);
            prop_assert!(probs.draw <= cap + 1e-12);
            prop_assert!(probs.team1 >= 0.0 && probs.team2 >= -1e-12);
        }

        #[test]
        fn prop_swapping_teams_mirrors_probabilities(diff in -10.0f64..10.0) {
            let forward = outcome_probabilities(diff, true, 0.15);
            let reverse = outcome_probabilities(-diff, true, 0.15);

            prop_assert!((forward.team1 - reverse.team2).abs() < 1e-9);
            prop_assert!((forward.draw - reverse.draw).abs() < 1e-12);
        }
    }
}
