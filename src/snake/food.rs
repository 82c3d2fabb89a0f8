//! Food lifecycle: the grow/shrink spawn cycle and free-cell placement
//!
//! Every 3rd or 4th consumed food (rolled once per cycle) is a shrink food
//! carrying a tick TTL; everything else grows. Placement is best-effort: on a
//! board with no free cell, no food spawns.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

use super::state::SnakeConfig;

/// Shrink food lives this many ticks before expiring.
pub const SHRINK_TTL_MIN: i32 = 22;
pub const SHRINK_TTL_MAX: i32 = 36;

/// What eating a food does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    Grow,
    Shrink,
}

/// A food on the board. Only shrink food expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Food {
    Grow { cell: IVec2 },
    Shrink { cell: IVec2, ttl_ticks: i32 },
}

impl Food {
    #[inline]
    pub fn cell(&self) -> IVec2 {
        match *self {
            Food::Grow { cell } | Food::Shrink { cell, .. } => cell,
        }
    }

    #[inline]
    pub fn kind(&self) -> FoodKind {
        match self {
            Food::Grow { .. } => FoodKind::Grow,
            Food::Shrink { .. } => FoodKind::Shrink,
        }
    }
}

/// Roll the cycle length: shrink food every 3rd or 4th consumption.
pub(crate) fn roll_shrink_interval(rng: &mut impl RandomSource) -> u32 {
    if rng.chance(0.5) { 3 } else { 4 }
}

/// Pick a uniformly random cell not occupied by the snake (row-major scan).
fn free_cell(config: &SnakeConfig, snake: &[IVec2], rng: &mut impl RandomSource) -> Option<IVec2> {
    let mut free = Vec::with_capacity((config.width * config.height) as usize);
    for y in 0..config.height {
        for x in 0..config.width {
            let cell = IVec2::new(x, y);
            if !snake.contains(&cell) {
                free.push(cell);
            }
        }
    }
    if free.is_empty() {
        return None;
    }
    let index = (rng.next_unit() * free.len() as f32).floor() as usize;
    Some(free[index.min(free.len() - 1)])
}

/// Place a food of the given kind on a free cell, rolling a TTL for shrink
/// food. `None` when the board is full.
pub(crate) fn spawn_food(
    config: &SnakeConfig,
    snake: &[IVec2],
    kind: FoodKind,
    rng: &mut impl RandomSource,
) -> Option<Food> {
    let cell = free_cell(config, snake, rng)?;
    Some(match kind {
        FoodKind::Grow => Food::Grow { cell },
        FoodKind::Shrink => Food::Shrink {
            cell,
            ttl_ticks: rng.int_in(SHRINK_TTL_MIN, SHRINK_TTL_MAX),
        },
    })
}

/// Advance the spawn cycle after a consumption and place the next food.
/// Returns the new food (if placeable) plus the updated cycle counters.
pub(crate) fn next_food_in_cycle(
    config: &SnakeConfig,
    food_spawn_counter: u32,
    next_shrink_at: u32,
    snake: &[IVec2],
    rng: &mut impl RandomSource,
) -> (Option<Food>, u32, u32) {
    let mut counter = food_spawn_counter + 1;
    let mut shrink_at = next_shrink_at;
    let kind = if counter >= shrink_at {
        counter = 0;
        shrink_at = roll_shrink_interval(rng);
        FoodKind::Shrink
    } else {
        FoodKind::Grow
    };
    (spawn_food(config, snake, kind, rng), counter, shrink_at)
}
