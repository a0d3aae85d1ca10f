//! Match Records
//!
//! Every match played in a trial, kept for reporting and fingerprinting.

use serde::{Serialize, Deserialize};

use crate::tournament::outcome::MatchOutcome;
use crate::tournament::placement::Stage;
use crate::tournament::team::TeamId;

/// One played match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Stage the match belongs to (`Groups` for round-robin matches,
    /// the round being played otherwise)
    pub stage: Stage,

    /// First-named team
    pub team1: TeamId,

    /// Second-named team
    pub team2: TeamId,

    /// Result
    pub outcome: MatchOutcome,
}

impl MatchRecord {
    /// Create a new record.
    pub fn new(stage: Stage, team1: TeamId, team2: TeamId, outcome: MatchOutcome) -> Self {
        Self {
            stage,
            team1,
            team2,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_winner() {
        let record = MatchRecord::new(
            Stage::QuarterFinal,
            TeamId::from("spain"),
            TeamId::from("japan"),
            MatchOutcome::Team2,
        );

        assert_eq!(record.outcome.winner(&record.team1, &record.team2), Some(&TeamId::from("japan")));
    }

    #[test]
    fn test_draw_has_no_winner() {
        let record = MatchRecord::new(
            Stage::Groups,
            TeamId::from("ghana"),
            TeamId::from("panama"),
            MatchOutcome::Draw,
        );

        assert_eq!(record.outcome.winner(&record.team1, &record.team2), None);
    }
}
