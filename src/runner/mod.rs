//! Side-scrolling runner engine
//!
//! Gravity-based jumping over two hazard kinds (blocks and pits) with
//! collectible pickups. Pure and deterministic: fixed timestep, injected
//! randomness, every step returns a fresh owned snapshot.

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{PICKUP_SIZE, spawn_hazard, spawn_pickup};
pub use state::{
    HazardKind, Obstacle, Phase, Pickup, Player, RunnerConfig, RunnerState,
};
pub use tick::{jump, restart, step};
