//! Tournament errors.
//!
//! The simulation itself has no recoverable failure paths. Everything here
//! is caught at the boundary: an invalid roster, an unfillable bracket slot,
//! or configuration outside its domain.

use thiserror::Error;

use crate::tournament::bracket::SlotSource;
use crate::tournament::group::GroupLabel;
use crate::tournament::placement::Stage;
use crate::tournament::team::TeamId;

/// Errors raised while building or running a tournament.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TournamentError {
    /// Roster does not have the expected number of groups.
    #[error("expected {expected} groups, got {got}")]
    GroupCount {
        /// Groups the format needs.
        expected: usize,
        /// Groups supplied.
        got: usize,
    },

    /// A group label was supplied twice.
    #[error("group {0} defined more than once")]
    DuplicateGroup(GroupLabel),

    /// A group has too few or too many teams.
    #[error("group {group} has {size} teams, expected 3 or 4")]
    GroupSize {
        /// Offending group.
        group: GroupLabel,
        /// Number of teams in it.
        size: usize,
    },

    /// A team was drawn into two groups.
    #[error("team {team} appears in groups {first} and {second}")]
    DuplicateTeam {
        /// The repeated team.
        team: TeamId,
        /// First group it was found in.
        first: GroupLabel,
        /// Second group it was found in.
        second: GroupLabel,
    },

    /// A bracket slot could not be resolved from the group results.
    #[error("bracket slot {slot} could not be filled")]
    UnresolvedSlot {
        /// The template slot that had no team.
        slot: SlotSource,
    },

    /// A knockout round did not receive a full field.
    #[error("{stage} round played with {teams} teams")]
    IncompleteBracket {
        /// Round being played.
        stage: Stage,
        /// Teams that entered it.
        teams: usize,
    },

    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::bracket::GroupRank;

    #[test]
    fn test_error_messages() {
        let err = TournamentError::GroupSize { group: GroupLabel::C, size: 2 };
        assert_eq!(err.to_string(), "group C has 2 teams, expected 3 or 4");

        let err = TournamentError::UnresolvedSlot {
            slot: SlotSource::Group { group: GroupLabel::E, rank: GroupRank::Winner },
        };
        assert_eq!(err.to_string(), "bracket slot 1E could not be filled");

        let err = TournamentError::UnresolvedSlot { slot: SlotSource::BestThird(5) };
        assert_eq!(err.to_string(), "bracket slot T5 could not be filled");
    }
}
