//! Best Third-Placed Qualifiers
//!
//! Eight of the twelve third-placed teams join the round of 32. Teams are
//! taken by points, highest first; within a points bucket the order is
//! shuffled before appending, and selection stops at eight even if that
//! splits a bucket.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::rng::DeterministicRng;
use crate::tournament::group::GroupStage;
use crate::tournament::team::TeamId;

/// Number of third-placed teams that advance.
pub const BEST_THIRDS: usize = 8;

/// 0-based table position of a third-placed team.
const THIRD_PLACE: usize = 2;

/// Third-placed teams bucketed by points, in group label order within
/// each bucket. Groups with fewer than three teams contribute nothing.
pub fn third_place_pool(stage: &GroupStage) -> BTreeMap<u32, Vec<TeamId>> {
    let mut pool: BTreeMap<u32, Vec<TeamId>> = BTreeMap::new();

    for table in stage.iter() {
        if let Some(row) = table.row(THIRD_PLACE) {
            pool.entry(row.points).or_default().push(row.team.clone());
        }
    }

    pool
}

/// Pick the best third-placed teams.
///
/// Must be re-run every trial: the bucket shuffles consume randomness.
/// Returns fewer than [`BEST_THIRDS`] teams only when fewer groups have a
/// third-placed team.
pub fn pick_best_thirds(stage: &GroupStage, rng: &mut DeterministicRng) -> Vec<TeamId> {
    let pool = third_place_pool(stage);
    let mut best = Vec::with_capacity(BEST_THIRDS);

    // Highest points first
    for (points, mut bucket) in pool.into_iter().rev() {
        rng.shuffle(&mut bucket);

        let room = BEST_THIRDS - best.len();
        if bucket.len() > room {
            debug!(points, dropped = bucket.len() - room, "best thirds cut inside a points bucket");
        }
        best.extend(bucket.into_iter().take(room));

        if best.len() == BEST_THIRDS {
            break;
        }
    }

    best
}
