//! World Cup Simulator
//!
//! Runs one verbose tournament, checks it replays identically, then runs
//! the configured number of trials and reports title odds.

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use world_cup::{
    core::hash::OutcomeHash,
    run_trials, DeterministicRng, Roster, SimConfig, SkillTable, Stage, WorldCup,
    BRACKET_SIZE, GROUP_COUNT, VERSION,
};

/// Title contenders listed after the trial run.
const TOP_CONTENDERS: usize = 10;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let config = SimConfig::from_env().context("invalid WC_* configuration")?;

    info!("World Cup Simulator v{}", VERSION);
    info!("Groups: {}, bracket: {} teams", GROUP_COUNT, BRACKET_SIZE);
    info!("Seed: {}, trials: {}", config.seed, config.trials);

    let world_cup = WorldCup::new(Roster::world_cup_2026(), config.match_config);
    let skills = demo_skills(world_cup.roster(), config.seed);
    info!(
        "Teams: {}, max draw probability: {}",
        world_cup.roster().team_count(),
        world_cup.config().max_draw_prob
    );

    demo_trial(&world_cup, &skills, &config)?;

    let tally = run_trials(&world_cup, &skills, config.seed, config.trials)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&tally.odds())?);
        return Ok(());
    }

    info!("=== Title Odds ({} trials) ===", tally.trials());
    for (rank, (team, odds)) in tally.by_title_odds().into_iter().take(TOP_CONTENDERS).enumerate() {
        info!(
            "#{}: {} - title {:.1}%, final {:.1}%, semi {:.1}%",
            rank + 1,
            team,
            odds * 100.0,
            tally.reach_probability(team, Stage::Final) * 100.0,
            tally.reach_probability(team, Stage::SemiFinal) * 100.0,
        );
    }

    Ok(())
}

/// Play one tournament, then replay it from the same seed and compare.
fn demo_trial(world_cup: &WorldCup, skills: &SkillTable, config: &SimConfig) -> Result<()> {
    info!("=== Demo Tournament ===");

    let outcome = world_cup.simulate_seeded(skills, config.seed)?;
    if config.verbose {
        print!("{}", world_cup::tournament::report::render_group_results(&outcome.group_stage));
        print!("{}", world_cup::tournament::report::render_placements(&outcome.placements));
    }

    info!("Champion: {}", outcome.champion());
    if let Some(runner_up) = outcome.knockouts.runner_up() {
        info!("Runner-up: {}", runner_up);
    }

    let hash: OutcomeHash = outcome.compute_hash();
    info!("Outcome Hash: {}", hex::encode(hash));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let replay_hash = world_cup.simulate_seeded(skills, config.seed)?.compute_hash();
    info!("Replay Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("determinism failure: replay hash differs");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    Ok(())
}

/// Fixed standard-normal skill per team, drawn once from `seed`.
fn demo_skills(roster: &Roster, seed: u64) -> SkillTable {
    SkillTable::standard_normal(roster.teams(), &mut DeterministicRng::new(seed))
}
