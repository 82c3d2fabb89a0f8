//! Runner frame state and world configuration
//!
//! Everything needed to replay or render a run lives here. A state snapshot
//! is an immutable value; the step function returns a fresh one each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::rng::RandomSource;

use super::spawn;

/// Hard cap on scroll speed.
pub const MAX_SPEED: f32 = 9.5;
/// Scroll speed gained per elapsed tick.
pub const SPEED_PER_TICK: f32 = 0.0028;
/// Gravity multiplier while falling into a pit, so the fall reads heavier.
pub const PIT_FALL_GRAVITY_SCALE: f32 = 1.4;
/// Entities are culled once their right edge scrolls past this x.
pub const OFFSCREEN_X: f32 = -8.0;
/// Player start offset from the left edge.
pub const PLAYER_START_X: f32 = 56.0;
/// Slack below the ground line that still counts as grounded.
pub const GROUND_SLACK: f32 = 0.5;
/// Probability that a spawned hazard is a pit rather than a block.
pub const PIT_CHANCE: f32 = 0.3;
/// Minimum downward velocity enforced on the tick a pit fall starts.
pub const PIT_ENTRY_FALL_SPEED: f32 = 2.5;

// The forgiving hitbox is inset from the sprite box; the pit check uses a
// separate, narrower foot interval. The two margins are intentionally
// different and must not be unified.
const HITBOX_INSET_X: f32 = 20.0;
const HITBOX_INSET_TOP: f32 = 18.0;
const HITBOX_TRIM_W: f32 = 40.0;
const HITBOX_TRIM_H: f32 = 24.0;
const FOOT_INSET_X: f32 = 18.0;
const FOOT_TRIM_W: f32 = 36.0;
const FOOT_MIN_WIDTH: f32 = 8.0;

/// World geometry and physics tuning, constant for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub base_speed: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
            ground_height: 120.0,
            player_width: 92.0,
            player_height: 148.0,
            gravity: 0.62,
            jump_velocity: -16.1,
            base_speed: 4.4,
        }
    }
}

impl RunnerConfig {
    /// Y coordinate of the ground line.
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }
}

/// Run lifecycle. `FallingIntoPit` has no path back to `Running`; it only
/// ends in `Ended` once the player drops below the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    FallingIntoPit,
    Ended,
}

impl Phase {
    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::Ended)
    }

    #[inline]
    pub fn is_falling_into_pit(&self) -> bool {
        matches!(self, Phase::FallingIntoPit)
    }
}

/// Which kind of hazard an obstacle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Block,
    Pit,
}

/// A scrolling hazard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: HazardKind,
    pub rect: Rect,
    /// Set once the obstacle has scrolled fully behind the player.
    pub passed: bool,
}

/// A collectible worth one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub rect: Rect,
}

/// The player sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
}

impl Player {
    /// Full sprite box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Shrunk box used for block and pickup intersection. The insets keep
    /// collisions visually forgiving.
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.pos.x + HITBOX_INSET_X,
            self.pos.y + HITBOX_INSET_TOP,
            self.size.x - HITBOX_TRIM_W,
            self.size.y - HITBOX_TRIM_H,
        )
    }

    /// Horizontal interval of the feet, used only for the pit check.
    pub fn foot_span(&self) -> (f32, f32) {
        let start = self.pos.x + FOOT_INSET_X;
        let width = (self.size.x - FOOT_TRIM_W).max(FOOT_MIN_WIDTH);
        (start, start + width)
    }

    /// Whether the sprite is resting on (or within slack of) the ground line.
    #[inline]
    pub fn grounded(&self, ground_y: f32) -> bool {
        self.pos.y + self.size.y >= ground_y - GROUND_SLACK
    }
}

/// Complete runner frame state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerState {
    pub config: RunnerConfig,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    pub score: u32,
    pub ticks: u64,
    pub speed: f32,
    /// Ticks until the next hazard spawn attempt.
    pub spawn_countdown: i32,
    /// Ticks until the next pickup placement attempt.
    pub pickup_countdown: i32,
    pub phase: Phase,
}

impl RunnerState {
    /// Fresh run with the player grounded and nothing on screen.
    pub fn new(config: RunnerConfig, rng: &mut impl RandomSource) -> Self {
        let spawn_countdown = spawn::initial_hazard_countdown(rng);
        let pickup_countdown = spawn::initial_pickup_countdown(rng);
        Self {
            player: Player {
                pos: Vec2::new(PLAYER_START_X, config.ground_y() - config.player_height),
                size: Vec2::new(config.player_width, config.player_height),
                velocity_y: 0.0,
            },
            obstacles: Vec::new(),
            pickups: Vec::new(),
            score: 0,
            ticks: 0,
            speed: config.base_speed,
            spawn_countdown,
            pickup_countdown,
            phase: Phase::Running,
            config,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    #[inline]
    pub fn is_falling_into_pit(&self) -> bool {
        self.phase.is_falling_into_pit()
    }
}
