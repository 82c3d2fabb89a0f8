//! Pocket Arcade - deterministic minigame simulations
//!
//! Core modules:
//! - `runner`: side-scrolling runner (gravity jumps, block/pit hazards, pickups)
//! - `snake`: toroidal-grid snake with a grow/shrink food cycle
//! - `rng`: injectable randomness source for reproducible runs
//! - `leaderboard`: best-score-per-player table fed by both engines
//!
//! Both engines are pure and deterministic: `step(state, rng)` maps one frame
//! snapshot to the next and never touches I/O. Replaying the same seed and
//! input sequence reproduces a run exactly, which is how the tests work.

pub mod leaderboard;
pub mod rng;
pub mod runner;
pub mod snake;

pub use leaderboard::Leaderboard;
pub use rng::{RandomSource, SeededRng};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Axis-aligned overlap test, strict on all edges (touching is a miss).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Check whether two horizontal intervals overlap (strict, like [`Rect::intersects`]).
#[inline]
pub fn ranges_overlap(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> bool {
    a_start < b_end && a_end > b_start
}
