//! Runner step function and input operations
//!
//! `step` advances one fixed tick. The phase ordering matters and mirrors the
//! collision design: pit entry is checked before blocks, both before pickup
//! collection, and a tick that changes phase returns early without scoring.

use crate::ranges_overlap;
use crate::rng::RandomSource;

use super::spawn;
use super::state::{
    HazardKind, MAX_SPEED, OFFSCREEN_X, PIT_ENTRY_FALL_SPEED, PIT_FALL_GRAVITY_SCALE, Phase,
    RunnerState, SPEED_PER_TICK,
};

/// Advance the simulation by one fixed tick.
///
/// Terminal states are absorbing: stepping an ended run returns it unchanged.
pub fn step(state: &RunnerState, rng: &mut impl RandomSource) -> RunnerState {
    if state.phase.is_game_over() {
        return state.clone();
    }

    let config = state.config;
    let ground_y = config.ground_y();
    let falling = state.phase.is_falling_into_pit();

    let mut next = state.clone();
    next.ticks += 1;
    next.speed = (config.base_speed + next.ticks as f32 * SPEED_PER_TICK).min(MAX_SPEED);

    // Vertical integration. The ground clamp is suspended while falling into
    // a pit; the fall only ends below the world.
    let gravity = if falling {
        config.gravity * PIT_FALL_GRAVITY_SCALE
    } else {
        config.gravity
    };
    let mut player_y = state.player.pos.y + state.player.velocity_y;
    let mut velocity_y = state.player.velocity_y + gravity;
    if !falling && player_y + state.player.size.y >= ground_y {
        player_y = ground_y - state.player.size.y;
        velocity_y = 0.0;
    }

    // Scroll the world left and cull what is fully off screen.
    let speed = next.speed;
    for obstacle in &mut next.obstacles {
        obstacle.rect.x -= speed;
    }
    next.obstacles.retain(|obs| obs.rect.right() > OFFSCREEN_X);
    for pickup in &mut next.pickups {
        pickup.rect.x -= speed;
    }
    next.pickups.retain(|p| p.rect.right() > OFFSCREEN_X);

    // Countdown-driven spawning. Pickup placement sees the hazard spawned
    // this very tick, so the overlap constraint holds within the frame.
    next.spawn_countdown -= 1;
    if next.spawn_countdown <= 0 {
        let hazard = spawn::spawn_hazard(&config, rng);
        log::debug!(
            "tick {}: spawned {:?} at x={:.0} w={:.0}",
            next.ticks,
            hazard.kind,
            hazard.rect.x,
            hazard.rect.width
        );
        next.obstacles.push(hazard);
        next.spawn_countdown = spawn::next_hazard_countdown(rng);
    }
    next.pickup_countdown -= 1;
    if next.pickup_countdown <= 0 {
        if let Some(pickup) = spawn::spawn_pickup(&config, &next.obstacles, rng) {
            next.pickups.push(pickup);
        }
        next.pickup_countdown = spawn::next_pickup_countdown(rng);
    }

    next.player.pos.y = player_y;
    next.player.velocity_y = velocity_y;

    // Pit check: only the foot interval matters, and only while grounded.
    if !falling && next.player.grounded(ground_y) {
        let (foot_start, foot_end) = next.player.foot_span();
        let over_pit = next.obstacles.iter().any(|obs| {
            obs.kind == HazardKind::Pit
                && ranges_overlap(foot_start, foot_end, obs.rect.x, obs.rect.right())
        });
        if over_pit {
            next.player.pos.y = player_y + 1.0;
            next.player.velocity_y = velocity_y.max(PIT_ENTRY_FALL_SPEED);
            next.phase = Phase::FallingIntoPit;
            log::info!("tick {}: fell into pit", next.ticks);
            return next;
        }
    }

    // Block check: forgiving inset hitbox against every block.
    let hitbox = next.player.hitbox();
    let hit_block = next
        .obstacles
        .iter()
        .any(|obs| obs.kind == HazardKind::Block && hitbox.intersects(&obs.rect));
    if hit_block {
        next.phase = Phase::Ended;
        log::info!(
            "tick {}: run ended on block collision, score {}",
            next.ticks,
            next.score
        );
        return next;
    }

    // A pit fall terminates once the player is fully below the world.
    if falling && player_y > config.height + state.player.size.y {
        next.phase = Phase::Ended;
        log::info!("tick {}: pit fall complete, score {}", next.ticks, next.score);
        return next;
    }

    // Pickup collection. A pickup whose span overlaps any hazard's span is
    // dropped outright so collection never aliases an obstacle collision.
    let obstacles = &next.obstacles;
    let mut collected = 0u32;
    next.pickups.retain(|pickup| {
        let blocked = obstacles.iter().any(|obs| {
            ranges_overlap(pickup.rect.x, pickup.rect.right(), obs.rect.x, obs.rect.right())
        });
        if blocked {
            return false;
        }
        if hitbox.intersects(&pickup.rect) {
            collected += 1;
            return false;
        }
        true
    });
    next.score += collected;

    // Mark hazards fully behind the player (render/scoring hint only).
    let player_x = next.player.pos.x;
    for obs in &mut next.obstacles {
        if !obs.passed && obs.rect.right() < player_x {
            obs.passed = true;
        }
    }

    next
}

/// Start a jump. Silently ignored unless the run is live and the player is
/// grounded; there is no double jump.
pub fn jump(state: &RunnerState) -> RunnerState {
    if state.phase != Phase::Running {
        return state.clone();
    }
    if !state.player.grounded(state.config.ground_y()) {
        return state.clone();
    }
    let mut next = state.clone();
    next.player.velocity_y = state.config.jump_velocity;
    next
}

/// Fresh run preserving only the world configuration.
pub fn restart(state: &RunnerState, rng: &mut impl RandomSource) -> RunnerState {
    RunnerState::new(state.config, rng)
}
