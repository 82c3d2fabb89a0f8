//! Snake frame state on a toroidal grid
//!
//! Cells are `IVec2` grid coordinates; both axes wrap, so there are no wall
//! collisions. The snake is stored head-first.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

use super::food::{self, Food, FoodKind};

/// Movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-cell displacement (y grows downward).
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Grid dimensions, constant for a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
        }
    }
}

impl SnakeConfig {
    #[inline]
    pub fn extent(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// Complete snake frame state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeState {
    pub config: SnakeConfig,
    /// Body cells, head first. Length is always at least 1.
    pub snake: Vec<IVec2>,
    pub direction: Direction,
    /// Queued direction, committed at the start of the next step.
    pub pending_direction: Direction,
    /// At most one food on the board; `None` only when no free cell exists.
    pub food: Option<Food>,
    /// Consumptions since the last shrink food.
    pub food_spawn_counter: u32,
    /// Cycle length: every `next_shrink_at`-th food is a shrink food.
    pub next_shrink_at: u32,
    pub score: u32,
    pub is_game_over: bool,
    /// Whether the previous step grew the snake (render hint).
    pub grew_last_step: bool,
}

impl SnakeState {
    /// Fresh game: single segment centered on the grid, one grow food out.
    pub fn new(config: SnakeConfig, rng: &mut impl RandomSource) -> Self {
        let head = IVec2::new(config.width / 2, config.height / 2);
        let snake = vec![head];
        let next_shrink_at = food::roll_shrink_interval(rng);
        let food = food::spawn_food(&config, &snake, FoodKind::Grow, rng);
        Self {
            config,
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            food_spawn_counter: 1,
            next_shrink_at,
            score: 0,
            is_game_over: false,
            grew_last_step: false,
        }
    }

    #[inline]
    pub fn head(&self) -> IVec2 {
        self.snake[0]
    }
}
