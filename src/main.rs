//! Headless demo host loop
//!
//! Seeds both engines from an optional command-line seed, drives them with
//! naive input policies until game over, and feeds the final scores into a
//! leaderboard. All gameplay lives in the library; this binary only shows
//! the host-side wiring.

use pocket_arcade::leaderboard::{Leaderboard, PlayerId};
use pocket_arcade::rng::{RandomSource, SeededRng};
use pocket_arcade::{runner, snake};

const MAX_TICKS: u64 = 20_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xA11CE);
    log::info!("demo seed: {seed}");

    let mut rng = SeededRng::seed_from_u64(seed);
    let (runner_score, runner_ticks) = run_runner(&mut rng);
    let (snake_score, snake_ticks) = run_snake(&mut rng);

    let mut board = Leaderboard::new();
    let runner_rank = board.submit(PlayerId(1), "runner-demo", runner_score);
    let snake_rank = board.submit(PlayerId(2), "snake-demo", snake_score);

    println!("runner: score {runner_score} after {runner_ticks} ticks (rank {})", runner_rank.rank);
    println!("snake:  score {snake_score} after {snake_ticks} ticks (rank {})", snake_rank.rank);
    match serde_json::to_string_pretty(&board.top(10)) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize leaderboard: {err}"),
    }
}

/// Drive the runner with a reaction-window jump policy.
fn run_runner(rng: &mut impl RandomSource) -> (u32, u64) {
    let mut state = runner::RunnerState::new(runner::RunnerConfig::default(), rng);
    for _ in 0..MAX_TICKS {
        if state.is_game_over() {
            break;
        }
        let threat_ahead = state.obstacles.iter().any(|obs| {
            let gap = obs.rect.x - state.player.pos.x;
            (0.0..140.0).contains(&gap)
        });
        if threat_ahead {
            state = runner::jump(&state);
        }
        state = runner::step(&state, rng);
    }
    (state.score, state.ticks)
}

/// Drive the snake in a slow clockwise sweep.
fn run_snake(rng: &mut impl RandomSource) -> (u32, u64) {
    let turns = [
        snake::Direction::Down,
        snake::Direction::Left,
        snake::Direction::Up,
        snake::Direction::Right,
    ];
    let mut state = snake::SnakeState::new(snake::SnakeConfig::default(), rng);
    let mut ticks = 0u64;
    for tick in 0..MAX_TICKS {
        if state.is_game_over {
            break;
        }
        if tick % 7 == 0 {
            state = snake::set_direction(&state, turns[(tick as usize / 7) % turns.len()]);
        }
        state = snake::step(&state, rng);
        ticks += 1;
    }
    (state.score, ticks)
}
