//! Grid snake engine
//!
//! Toroidal movement (both axes wrap), a grow/shrink food cycle, and
//! self-collision as the only way to lose. Pure and deterministic like the
//! runner: injected randomness, fresh snapshot per step.

pub mod food;
pub mod state;
pub mod tick;

pub use food::{Food, FoodKind, SHRINK_TTL_MAX, SHRINK_TTL_MIN};
pub use state::{Direction, SnakeConfig, SnakeState};
pub use tick::{restart, set_direction, step};
