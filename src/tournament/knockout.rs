//! Knockout Bracket Engine
//!
//! Plays the round of 32 down to a champion. Each round resolves adjacent
//! pairs left to right; winners keep their pair's position, so the bracket
//! shape carries over from one round to the next.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::rng::DeterministicRng;
use crate::error::TournamentError;
use crate::tournament::bracket::{create_knockouts_list, BRACKET_SIZE};
use crate::tournament::events::MatchRecord;
use crate::tournament::group::GroupStage;
use crate::tournament::outcome::{simulate_knockout_match, MatchConfig};
use crate::tournament::placement::Stage;
use crate::tournament::team::{SkillModel, TeamId};

/// Every round of the knockout stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutResult {
    /// Round-of-32 field (32 teams)
    pub r32: Vec<TeamId>,
    /// Round-of-16 field (16 teams)
    pub r16: Vec<TeamId>,
    /// Quarter-finalists (8 teams)
    pub qf: Vec<TeamId>,
    /// Semi-finalists (4 teams)
    pub sf: Vec<TeamId>,
    /// Finalists (2 teams)
    pub final_pair: Vec<TeamId>,
    /// Champion
    pub champion: TeamId,
    /// Knockout matches in the order played
    pub matches: Vec<MatchRecord>,
}

impl KnockoutResult {
    /// Each knockout field with the stage its members reached.
    pub fn rounds(&self) -> [(Stage, &[TeamId]); 5] {
        [
            (Stage::RoundOf32, self.r32.as_slice()),
            (Stage::RoundOf16, self.r16.as_slice()),
            (Stage::QuarterFinal, self.qf.as_slice()),
            (Stage::SemiFinal, self.sf.as_slice()),
            (Stage::Final, self.final_pair.as_slice()),
        ]
    }

    /// The beaten finalist.
    pub fn runner_up(&self) -> Option<&TeamId> {
        self.final_pair.iter().find(|team| **team != self.champion)
    }
}

/// Play one round. `teams` holds pairs (2i, 2i+1); pair i's winner is
/// placed at index i of the result. A trailing unpaired team is ignored.
///
/// Every match is appended to `log` tagged with `stage`.
pub fn run_round<S: SkillModel + ?Sized>(
    teams: &[TeamId],
    stage: Stage,
    skill: &S,
    rng: &mut DeterministicRng,
    config: &MatchConfig,
    log: &mut Vec<MatchRecord>,
) -> Vec<TeamId> {
    teams
        .chunks_exact(2)
        .map(|pair| {
            let (team1, team2) = (&pair[0], &pair[1]);
            let (winner, outcome) = simulate_knockout_match(team1, team2, skill, rng, config);
            log.push(MatchRecord::new(stage, team1.clone(), team2.clone(), outcome));
            winner.clone()
        })
        .collect()
}

/// Build the bracket from the group results and play it out.
pub fn simulate_knockouts<S: SkillModel + ?Sized>(
    stage: &GroupStage,
    skill: &S,
    rng: &mut DeterministicRng,
    config: &MatchConfig,
) -> Result<KnockoutResult, TournamentError> {
    let r32 = create_knockouts_list(stage, rng)?;
    debug_assert_eq!(r32.len(), BRACKET_SIZE);

    let mut matches = Vec::with_capacity(BRACKET_SIZE - 1);

    let r16 = run_round(&r32, Stage::RoundOf32, skill, rng, config, &mut matches);
    let qf = run_round(&r16, Stage::RoundOf16, skill, rng, config, &mut matches);
    let sf = run_round(&qf, Stage::QuarterFinal, skill, rng, config, &mut matches);
    let final_pair = run_round(&sf, Stage::SemiFinal, skill, rng, config, &mut matches);
    let last = run_round(&final_pair, Stage::Final, skill, rng, config, &mut matches);

    let champion = match last.as_slice() {
        [champion] => champion.clone(),
        _ => {
            return Err(TournamentError::IncompleteBracket {
                stage: Stage::Final,
                teams: final_pair.len(),
            })
        }
    };

    debug!(%champion, "knockouts complete");

    Ok(KnockoutResult {
        r32,
        r16,
        qf,
        sf,
        final_pair,
        champion,
        matches,
    })
}
