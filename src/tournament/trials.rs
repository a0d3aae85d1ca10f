//! Multi-trial runner.
//!
//! Plays many independent tournaments and counts how often each team
//! finished at each stage. Trial `i` draws from its own RNG stream derived
//! from the base seed, so any single trial can be replayed on its own.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::core::rng::DeterministicRng;
use crate::error::TournamentError;
use crate::tournament::placement::{Placements, Stage};
use crate::tournament::simulation::WorldCup;
use crate::tournament::team::{SkillModel, TeamId};

/// Number of stages a team can finish at.
const STAGE_COUNT: usize = Stage::ALL.len();

/// Final-stage counts over a batch of trials.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementTally {
    trials: u64,
    counts: BTreeMap<TeamId, [u64; STAGE_COUNT]>,
}

/// Per-team probabilities of reaching each stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamOdds {
    /// Team
    pub team: TeamId,
    /// Fraction of trials reaching at least each stage
    pub reach: BTreeMap<Stage, f64>,
}

impl PlacementTally {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trial's placements.
    pub fn record(&mut self, placements: &Placements) {
        self.trials += 1;
        for (team, stage) in placements.iter() {
            self.counts.entry(team.clone()).or_default()[stage.index()] += 1;
        }
    }

    /// Trials recorded.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Teams seen, alphabetically.
    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.counts.keys()
    }

    /// Trials in which `team` finished exactly at `stage`.
    pub fn count(&self, team: &TeamId, stage: Stage) -> u64 {
        self.counts.get(team).map_or(0, |counts| counts[stage.index()])
    }

    /// Fraction of trials in which `team` finished exactly at `stage`.
    pub fn stage_probability(&self, team: &TeamId, stage: Stage) -> f64 {
        self.fraction(self.count(team, stage))
    }

    /// Fraction of trials in which `team` reached `stage` or went further.
    pub fn reach_probability(&self, team: &TeamId, stage: Stage) -> f64 {
        let reached = self
            .counts
            .get(team)
            .map_or(0, |counts| counts[stage.index()..].iter().sum::<u64>());
        self.fraction(reached)
    }

    /// Teams ordered by title probability, highest first.
    ///
    /// Ties keep alphabetical order.
    pub fn by_title_odds(&self) -> Vec<(&TeamId, f64)> {
        let mut ranked: Vec<_> = self
            .teams()
            .map(|team| (team, self.stage_probability(team, Stage::Winner)))
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Reach probabilities for every team, in title-odds order.
    pub fn odds(&self) -> Vec<TeamOdds> {
        self.by_title_odds()
            .into_iter()
            .map(|(team, _)| TeamOdds {
                team: team.clone(),
                reach: Stage::ALL
                    .iter()
                    .map(|&stage| (stage, self.reach_probability(team, stage)))
                    .collect(),
            })
            .collect()
    }

    fn fraction(&self, count: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }
}

/// Run `trials` tournaments and tally the placements.
///
/// Trial `i` uses `DeterministicRng::for_trial(base_seed, i)`. The first
/// failing trial aborts the run.
pub fn run_trials<S: SkillModel + ?Sized>(
    world_cup: &WorldCup,
    skill: &S,
    base_seed: u64,
    trials: u64,
) -> Result<PlacementTally, TournamentError> {
    if trials == 0 {
        return Err(TournamentError::InvalidConfig("trial count must be at least 1".into()));
    }

    let progress_every = (trials / 10).max(1);
    let mut tally = PlacementTally::new();

    for trial in 0..trials {
        let mut rng = DeterministicRng::for_trial(base_seed, trial);
        let outcome = world_cup.simulate(skill, &mut rng)?;
        debug!(trial, champion = %outcome.champion(), "trial complete");

        tally.record(&outcome.placements);

        if (trial + 1) % progress_every == 0 {
            info!("{}/{} trials complete", trial + 1, trials);
        }
    }

    Ok(tally)
}
