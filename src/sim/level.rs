//! Level initialization and obstacle spawning
//!
//! Runs on every `Idle -> Playing` transition and restart. Pipe gaps are the
//! simulation's only randomness and draw from the state-owned seeded RNG so
//! playthroughs reproduce exactly from a seed.

use rand::Rng;

use super::config::ModeConfig;
use super::state::{Actor, Block, GameState, ModeState, Pipe, Target};

/// Initialize a playthrough: reset the actor and score, rebuild entity sets.
pub fn initialize(state: &mut GameState) {
    state.score = 0;
    state.actor = Actor::at_rest(state.config.actor_start(), state.config.actor_radius());

    match (&state.config, &mut state.mode) {
        (ModeConfig::Runner(cfg), ModeState::Runner { pipes, spawn_timer }) => {
            pipes.clear();
            // Cadence starts elapsed so the first pipe spawns on the first tick
            *spawn_timer = cfg.spawn_interval;
            // Runner physics is active from the first tick
            state.actor.launched = true;
        }
        (ModeConfig::Puzzle(cfg), ModeState::Puzzle {
            blocks,
            targets,
            drag,
            attempts_left,
            reload_timer,
        }) => {
            let ground_y = cfg.height - cfg.ground_height;
            *blocks = tower_blocks(cfg.width, ground_y);
            *targets = tower_targets(cfg.width, ground_y);
            *drag = None;
            *attempts_left = cfg.attempts;
            *reload_timer = None;
        }
        // Config and mode state are constructed as a pair
        _ => unreachable!("mode state does not match mode config"),
    }

    log::info!(
        "Level initialized ({} mode, seed {})",
        state.config.name(),
        state.seed
    );
}

/// The puzzle tower: two stacked rows of blocks capped by one, anchored at
/// three quarters of the arena width.
fn tower_blocks(width: f32, ground_y: f32) -> Vec<Block> {
    let base = width * 0.75;
    vec![
        Block::new(base, ground_y - 20.0, 30.0, 20.0, 2),
        Block::new(base + 30.0, ground_y - 20.0, 30.0, 20.0, 2),
        Block::new(base + 60.0, ground_y - 20.0, 30.0, 20.0, 2),
        Block::new(base + 15.0, ground_y - 40.0, 30.0, 20.0, 2),
        Block::new(base + 45.0, ground_y - 40.0, 30.0, 20.0, 2),
        Block::new(base + 30.0, ground_y - 60.0, 30.0, 20.0, 2),
    ]
}

/// Targets nested inside the tower
fn tower_targets(width: f32, ground_y: f32) -> Vec<Target> {
    let base = width * 0.75;
    vec![
        Target::new(base + 30.0, ground_y - 30.0, 18.0),
        Target::new(base + 60.0, ground_y - 30.0, 18.0),
        Target::new(base + 45.0, ground_y - 50.0, 18.0),
    ]
}

/// Append a pipe at the right edge with a uniformly random gap position.
///
/// The gap top is constrained so both the opening and the margins above and
/// below it stay fully playable.
pub fn spawn_pipe(state: &mut GameState) {
    let ModeConfig::Runner(cfg) = state.config else {
        return;
    };

    let ground_y = cfg.height - cfg.ground_height;
    let min_top = cfg.pipe_margin;
    let max_top = ground_y - cfg.pipe_gap - cfg.pipe_margin;
    let top_height = state.rng.random_range(min_top..max_top);

    if let ModeState::Runner { pipes, .. } = &mut state.mode {
        log::debug!("Spawning pipe (top {top_height:.1})");
        pipes.push(Pipe::new(cfg.width, top_height, cfg.pipe_gap));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_initialize_builds_the_puzzle_level() {
        let mut state = GameState::new(ModeConfig::puzzle(), 1);
        initialize(&mut state);

        assert_eq!(state.blocks().len(), 6);
        assert_eq!(state.targets().len(), 3);
        assert_eq!(state.attempts_left(), 3);
        assert_eq!(state.score, 0);
        assert!(!state.actor.launched);
        // Everything sits above the ground line
        let ground_y = state.ground_y();
        assert!(state.blocks().iter().all(|b| b.rect().bottom() <= ground_y));
        assert!(state.targets().iter().all(|t| t.pos.y < ground_y));
    }

    #[test]
    fn test_initialize_resets_a_finished_runner_playthrough() {
        let mut state = GameState::new(ModeConfig::runner(), 1);
        initialize(&mut state);
        state.score = 9;
        state.phase = GamePhase::Lost;
        spawn_pipe(&mut state);
        assert_eq!(state.pipes().len(), 1);

        initialize(&mut state);
        assert_eq!(state.score, 0);
        assert!(state.pipes().is_empty());
        assert!(state.actor.launched);
        assert_eq!(state.actor.vel, glam::Vec2::ZERO);
    }

    #[test]
    fn test_pipe_gaps_stay_within_margins() {
        let mut state = GameState::new(ModeConfig::runner(), 0xB1AD);
        initialize(&mut state);

        for _ in 0..200 {
            spawn_pipe(&mut state);
        }

        let cfg = match state.config {
            ModeConfig::Runner(c) => c,
            _ => unreachable!(),
        };
        let ground_y = cfg.height - cfg.ground_height;
        for pipe in state.pipes() {
            assert!(pipe.top_height >= cfg.pipe_margin);
            assert!(pipe.top_height + pipe.gap + cfg.pipe_margin <= ground_y);
            assert_eq!(pipe.x, cfg.width);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_pipe_gaps_are_reproducible_from_the_seed() {
        let mut a = GameState::new(ModeConfig::runner(), 77);
        let mut b = GameState::new(ModeConfig::runner(), 77);
        initialize(&mut a);
        initialize(&mut b);

        for _ in 0..20 {
            spawn_pipe(&mut a);
            spawn_pipe(&mut b);
        }
        assert_eq!(a.pipes(), b.pipes());

        let mut c = GameState::new(ModeConfig::runner(), 78);
        initialize(&mut c);
        for _ in 0..20 {
            spawn_pipe(&mut c);
        }
        // A different seed produces a different gap sequence
        assert_ne!(a.pipes(), c.pipes());
    }
}
