//! Hazard and pickup spawning
//!
//! Hazards always spawn when their countdown expires; pickup placement is
//! best-effort and gives up after a fixed number of attempts rather than
//! block the tick.

use crate::Rect;
use crate::ranges_overlap;
use crate::rng::RandomSource;

use super::state::{HazardKind, Obstacle, PIT_CHANCE, Pickup, RunnerConfig};

/// Pickup sprite is square.
pub const PICKUP_SIZE: f32 = 44.0;
/// Horizontal safety margin between a pickup and any hazard.
const PLACEMENT_MARGIN: f32 = 26.0;
/// Placement attempts per spawn cycle before giving up.
const PLACEMENT_ATTEMPTS: u32 = 12;

pub(crate) fn initial_hazard_countdown(rng: &mut impl RandomSource) -> i32 {
    rng.int_in(70, 115)
}

pub(crate) fn next_hazard_countdown(rng: &mut impl RandomSource) -> i32 {
    rng.int_in(66, 112)
}

pub(crate) fn initial_pickup_countdown(rng: &mut impl RandomSource) -> i32 {
    rng.int_in(30, 60)
}

pub(crate) fn next_pickup_countdown(rng: &mut impl RandomSource) -> i32 {
    rng.int_in(26, 52)
}

/// Roll a new hazard just past the right edge of the screen.
pub fn spawn_hazard(config: &RunnerConfig, rng: &mut impl RandomSource) -> Obstacle {
    if rng.chance(PIT_CHANCE) {
        spawn_pit(config, rng)
    } else {
        spawn_block(config, rng)
    }
}

fn spawn_block(config: &RunnerConfig, rng: &mut impl RandomSource) -> Obstacle {
    let height = rng.int_in(58, 120) as f32;
    let width = rng.int_in(44, 70) as f32;
    let x = config.width + rng.int_in(0, 40) as f32;
    Obstacle {
        kind: HazardKind::Block,
        rect: Rect::new(x, config.ground_y() - height, width, height),
        passed: false,
    }
}

fn spawn_pit(config: &RunnerConfig, rng: &mut impl RandomSource) -> Obstacle {
    let width = rng.int_in(64, 128) as f32;
    let x = config.width + rng.int_in(0, 40) as f32;
    Obstacle {
        kind: HazardKind::Pit,
        rect: Rect::new(x, config.ground_y(), width, config.ground_height),
        passed: false,
    }
}

/// Try to place a pickup in one of two vertical lanes just off the right
/// edge. A candidate whose span (plus margin) overlaps any hazard's span is
/// rejected; after [`PLACEMENT_ATTEMPTS`] rejections no pickup spawns this
/// cycle.
pub fn spawn_pickup(
    config: &RunnerConfig,
    obstacles: &[Obstacle],
    rng: &mut impl RandomSource,
) -> Option<Pickup> {
    let ground_y = config.ground_y();
    let top_offset = (config.player_height * 1.12 * 1.2).round();

    for _ in 0..PLACEMENT_ATTEMPTS {
        let lane = rng.int_in(0, 1);
        let y_by_lane = [
            ground_y - (config.player_height * 0.6).round(),
            ground_y - top_offset,
        ];
        let y = y_by_lane[lane as usize].max(24.0);
        let x = config.width + rng.int_in(16, 90) as f32;
        if !clear_of_obstacles(x, PICKUP_SIZE, obstacles) {
            continue;
        }
        return Some(Pickup {
            rect: Rect::new(x, y, PICKUP_SIZE, PICKUP_SIZE),
        });
    }

    log::debug!("pickup placement gave up after {PLACEMENT_ATTEMPTS} attempts");
    None
}

fn clear_of_obstacles(x: f32, size: f32, obstacles: &[Obstacle]) -> bool {
    let start = x - PLACEMENT_MARGIN;
    let end = x + size + PLACEMENT_MARGIN;
    obstacles
        .iter()
        .all(|obs| !ranges_overlap(start, end, obs.rect.x, obs.rect.right()))
}
