//! Snake step function and input operations

use crate::rng::RandomSource;

use super::food::{self, Food, FoodKind};
use super::state::{Direction, SnakeState};

/// Advance the game by one fixed tick.
///
/// Commits the pending direction, moves the head one cell with wraparound,
/// resolves food and self-collision, and advances the food cycle. A finished
/// game is returned unchanged.
pub fn step(state: &SnakeState, rng: &mut impl RandomSource) -> SnakeState {
    if state.is_game_over {
        return state.clone();
    }

    let mut next = state.clone();
    next.direction = state.pending_direction;
    let new_head = (state.head() + next.direction.delta()).rem_euclid(state.config.extent());

    let eaten = state
        .food
        .as_ref()
        .filter(|f| f.cell() == new_head)
        .map(|f| f.kind());
    let grows = eaten == Some(FoodKind::Grow);
    let shrinks = eaten == Some(FoodKind::Shrink);

    // When growing, the tail stays put and still occupies its cell; otherwise
    // the tail cell is vacated this tick and is safe to enter.
    let body_to_check = if grows {
        &state.snake[..]
    } else {
        &state.snake[..state.snake.len() - 1]
    };
    if body_to_check.contains(&new_head) {
        next.is_game_over = true;
        next.grew_last_step = false;
        log::info!("snake game over: self collision, score {}", next.score);
        return next;
    }

    next.snake.insert(0, new_head);
    if !grows {
        next.snake.pop();
    }
    if shrinks && next.snake.len() > 1 {
        next.snake.pop();
    }

    if eaten.is_some() {
        let (new_food, counter, shrink_at) = food::next_food_in_cycle(
            &state.config,
            state.food_spawn_counter,
            state.next_shrink_at,
            &next.snake,
            rng,
        );
        next.food = new_food;
        next.food_spawn_counter = counter;
        next.next_shrink_at = shrink_at;
        if grows {
            next.score += 1;
        } else {
            next.score = next.score.saturating_sub(1);
        }
    } else if let Some(Food::Shrink { cell, ttl_ticks }) = next.food {
        if ttl_ticks <= 1 {
            // Expired: replace with a fresh grow food (best-effort).
            next.food = food::spawn_food(&state.config, &next.snake, FoodKind::Grow, rng);
        } else {
            next.food = Some(Food::Shrink {
                cell,
                ttl_ticks: ttl_ticks - 1,
            });
        }
    }

    next.grew_last_step = grows;
    next
}

/// Queue a direction change for the next step. Changes that reverse the
/// active direction, or the one already queued, are silently rejected.
pub fn set_direction(state: &SnakeState, direction: Direction) -> SnakeState {
    if direction == state.direction.opposite() || direction == state.pending_direction.opposite() {
        return state.clone();
    }
    let mut next = state.clone();
    next.pending_direction = direction;
    next
}

/// Fresh game on the same grid.
pub fn restart(state: &SnakeState, rng: &mut impl RandomSource) -> SnakeState {
    SnakeState::new(state.config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedRandom, SeededRng, SequenceRandom};
    use crate::snake::state::SnakeConfig;
    use glam::IVec2;
    use proptest::prelude::*;

    fn grid(width: i32, height: i32) -> SnakeConfig {
        SnakeConfig { width, height }
    }

    /// Hand-built state for collision and food scenarios.
    fn scenario(config: SnakeConfig, snake: Vec<IVec2>, food: Option<Food>) -> SnakeState {
        SnakeState {
            config,
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            food_spawn_counter: 1,
            next_shrink_at: 4,
            score: 0,
            is_game_over: false,
            grew_last_step: false,
        }
    }

    #[test]
    fn test_moves_one_cell_per_step() {
        let state = SnakeState::new(grid(10, 10), &mut FixedRandom(0.0));
        let next = step(&state, &mut FixedRandom(0.0));
        assert_eq!(next.head(), state.head() + IVec2::new(1, 0));
        assert_eq!(next.score, 0);
        assert_eq!(next.snake.len(), 1);
    }

    #[test]
    fn test_wraps_around_grid_edges() {
        let state = scenario(grid(3, 3), vec![IVec2::new(2, 1)], None);
        let next = step(&state, &mut FixedRandom(0.0));
        assert!(!next.is_game_over);
        assert_eq!(next.head(), IVec2::new(0, 1));
    }

    #[test]
    fn test_grow_food_adds_segment_and_point() {
        let state = scenario(
            grid(6, 6),
            vec![IVec2::new(2, 2)],
            Some(Food::Grow {
                cell: IVec2::new(3, 2),
            }),
        );
        let next = step(&state, &mut FixedRandom(0.0));
        assert_eq!(next.snake.len(), 2);
        assert_eq!(next.score, 1);
        assert!(next.grew_last_step);
    }

    #[test]
    fn test_shrink_food_drops_segment_and_point() {
        let mut state = scenario(
            grid(6, 6),
            vec![IVec2::new(2, 2), IVec2::new(1, 2), IVec2::new(0, 2)],
            Some(Food::Shrink {
                cell: IVec2::new(3, 2),
                ttl_ticks: 10,
            }),
        );
        state.score = 5;
        let next = step(&state, &mut FixedRandom(0.0));
        assert_eq!(next.snake.len(), 2);
        assert_eq!(next.score, 4);
        assert!(!next.grew_last_step);
    }

    #[test]
    fn test_shrink_floors_at_length_one_and_score_zero() {
        let state = scenario(
            grid(5, 5),
            vec![IVec2::new(1, 1)],
            Some(Food::Shrink {
                cell: IVec2::new(2, 1),
                ttl_ticks: 10,
            }),
        );
        let next = step(&state, &mut FixedRandom(0.0));
        assert_eq!(next.snake.len(), 1);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_self_collision_ends_game() {
        // Head at (2,2) turning left into a loop that still occupies (1,2).
        let mut state = scenario(
            grid(5, 5),
            vec![
                IVec2::new(2, 2),
                IVec2::new(2, 3),
                IVec2::new(1, 3),
                IVec2::new(1, 2),
                IVec2::new(1, 1),
                IVec2::new(2, 1),
                IVec2::new(3, 1),
                IVec2::new(3, 2),
            ],
            Some(Food::Grow {
                cell: IVec2::new(0, 0),
            }),
        );
        state.direction = Direction::Up;
        state.pending_direction = Direction::Left;
        let next = step(&state, &mut FixedRandom(0.0));
        assert!(next.is_game_over);
    }

    #[test]
    fn test_tail_cell_is_safe_when_not_growing() {
        // Moving into the tail's cell is fine because the tail vacates it.
        let state = scenario(
            grid(5, 5),
            vec![
                IVec2::new(1, 1),
                IVec2::new(1, 2),
                IVec2::new(2, 2),
                IVec2::new(2, 1),
            ],
            None,
        );
        let mut turned = state.clone();
        turned.direction = Direction::Up;
        turned.pending_direction = Direction::Right;
        let next = step(&turned, &mut FixedRandom(0.0));
        assert!(!next.is_game_over);
        assert_eq!(next.head(), IVec2::new(2, 1));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let state = SnakeState::new(grid(8, 8), &mut FixedRandom(0.0));
        let next = set_direction(&state, Direction::Left);
        assert_eq!(next.pending_direction, Direction::Right);
    }

    #[test]
    fn test_reversal_of_pending_direction_is_rejected() {
        let state = SnakeState::new(grid(8, 8), &mut FixedRandom(0.0));
        let queued = set_direction(&state, Direction::Up);
        assert_eq!(queued.pending_direction, Direction::Up);
        let next = set_direction(&queued, Direction::Down);
        assert_eq!(next.pending_direction, Direction::Up);
    }

    #[test]
    fn test_food_respawns_off_snake_after_growth() {
        let state = scenario(
            grid(3, 3),
            vec![IVec2::new(1, 1), IVec2::new(0, 1)],
            Some(Food::Grow {
                cell: IVec2::new(2, 1),
            }),
        );
        let next = step(&state, &mut FixedRandom(0.0));
        let food_cell = next.food.unwrap().cell();
        assert!(!next.snake.contains(&food_cell));
    }

    #[test]
    fn test_restart_resets_game() {
        let mut state = SnakeState::new(grid(10, 10), &mut FixedRandom(0.0));
        state.score = 9;
        state.is_game_over = true;
        let reset = restart(&state, &mut FixedRandom(0.0));
        assert_eq!(reset.score, 0);
        assert!(!reset.is_game_over);
        assert_eq!(reset.snake.len(), 1);
        assert_eq!(reset.head(), IVec2::new(5, 5));
    }

    #[test]
    fn test_cycle_spawns_shrink_on_schedule() {
        let mut state = scenario(
            grid(6, 6),
            vec![IVec2::new(2, 2)],
            Some(Food::Grow {
                cell: IVec2::new(3, 2),
            }),
        );
        state.food_spawn_counter = 2;
        state.next_shrink_at = 3;
        let next = step(&state, &mut SequenceRandom::new([0.0, 0.8]));
        assert_eq!(next.food.unwrap().kind(), FoodKind::Shrink);
        assert_eq!(next.food_spawn_counter, 0);
    }

    #[test]
    fn test_expired_shrink_food_becomes_grow_food() {
        let state = scenario(
            grid(6, 6),
            vec![IVec2::new(2, 2)],
            Some(Food::Shrink {
                cell: IVec2::new(4, 4),
                ttl_ticks: 1,
            }),
        );
        let next = step(&state, &mut FixedRandom(0.0));
        assert_eq!(next.food.unwrap().kind(), FoodKind::Grow);
    }

    #[test]
    fn test_shrink_ttl_counts_down_when_uneaten() {
        let state = scenario(
            grid(6, 6),
            vec![IVec2::new(2, 2)],
            Some(Food::Shrink {
                cell: IVec2::new(4, 4),
                ttl_ticks: 5,
            }),
        );
        let next = step(&state, &mut FixedRandom(0.0));
        match next.food {
            Some(Food::Shrink { ttl_ticks, .. }) => assert_eq!(ttl_ticks, 4),
            other => panic!("expected shrink food, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_is_deterministic() {
        let run = |seed: u64| {
            let mut rng = SeededRng::seed_from_u64(seed);
            let mut state = SnakeState::new(SnakeConfig::default(), &mut rng);
            let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
            for tick in 0..500usize {
                if state.is_game_over {
                    break;
                }
                if tick % 6 == 0 {
                    state = set_direction(&state, turns[(tick / 6) % turns.len()]);
                }
                state = step(&state, &mut rng);
            }
            serde_json::to_string(&state).unwrap()
        };
        assert_eq!(run(99), run(99));
    }

    proptest! {
        #[test]
        fn prop_head_moves_one_cell_with_wraparound(
            width in 2i32..30,
            height in 2i32..30,
            x in 0i32..30,
            y in 0i32..30,
            dir_index in 0usize..4,
        ) {
            let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
            let direction = directions[dir_index];
            let head = IVec2::new(x % width, y % height);
            let mut state = scenario(grid(width, height), vec![head], None);
            state.direction = direction;
            state.pending_direction = direction;

            let next = step(&state, &mut FixedRandom(0.0));
            let expected = (head + direction.delta()).rem_euclid(IVec2::new(width, height));
            prop_assert_eq!(next.head(), expected);
            prop_assert!(!next.is_game_over);
        }

        #[test]
        fn prop_snake_length_never_drops_below_one(seed in any::<u64>()) {
            let mut rng = SeededRng::seed_from_u64(seed);
            let mut state = SnakeState::new(grid(8, 8), &mut rng);
            for _ in 0..300 {
                if state.is_game_over {
                    break;
                }
                state = step(&state, &mut rng);
                prop_assert!(!state.snake.is_empty());
            }
        }
    }
}
