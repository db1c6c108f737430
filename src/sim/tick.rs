//! Fixed timestep simulation tick
//!
//! The single authoritative per-tick update for both modes. One call advances
//! one tick; the host calls it once per rendered frame. All input lands here
//! at the start of the step, never mid-tick.

use glam::Vec2;

use super::collision;
use super::config::{ModeConfig, PuzzleConfig, RunnerConfig};
use super::level;
use super::physics::integrate;
use super::state::{Actor, GamePhase, GameState, ModeState};
use crate::clamp_magnitude;

/// Drag gesture events for slingshot aiming (puzzle mode)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start(Vec2),
    Move(Vec2),
    Release,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Begin a playthrough (honored from Idle)
    pub start: bool,
    /// Re-run level init (honored from Playing, Won, or Lost)
    pub restart: bool,
    /// Jump impulse (runner mode)
    pub jump: bool,
    /// Drag gestures in arrival order (puzzle mode)
    pub drag: Vec<DragEvent>,
}

/// Advance the game state by one tick.
///
/// Start/restart transitions consume the step; physics resumes on the next
/// one. Outside `Playing` every other command is a no-op and no entity moves.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let start_requested = input.start && state.phase == GamePhase::Idle;
    let restart_requested = input.restart && state.phase != GamePhase::Idle;
    if start_requested || restart_requested {
        level::initialize(state);
        state.phase = GamePhase::Playing;
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    match state.config {
        ModeConfig::Runner(cfg) => runner_tick(state, input, &cfg),
        ModeConfig::Puzzle(cfg) => puzzle_tick(state, input, &cfg),
    }
}

/// One tick of the side-scrolling obstacle avoider
fn runner_tick(state: &mut GameState, input: &TickInput, cfg: &RunnerConfig) {
    // A jump overrides the current vertical velocity outright
    if input.jump {
        state.actor.vel.y = cfg.jump_impulse;
    }

    let (pos, vel) = integrate(state.actor.pos, state.actor.vel, cfg.gravity, 1.0);
    state.actor.pos = pos;
    state.actor.vel = vel;

    // Spawn cadence, counted in ticks
    let spawn_due = {
        let ModeState::Runner { spawn_timer, .. } = &mut state.mode else {
            unreachable!("runner config paired with runner state");
        };
        *spawn_timer += 1;
        if *spawn_timer >= cfg.spawn_interval {
            *spawn_timer = 0;
            true
        } else {
            false
        }
    };
    if spawn_due {
        level::spawn_pipe(state);
    }

    // Scroll pipes, score passes exactly once, drop off-screen pipes
    let actor_x = state.actor.pos.x;
    let mut passes = 0u32;
    if let ModeState::Runner { pipes, .. } = &mut state.mode {
        for pipe in pipes.iter_mut() {
            pipe.x -= cfg.pipe_speed;
            if !pipe.passed && pipe.x + cfg.pipe_width < actor_x {
                pipe.passed = true;
                passes += 1;
            }
        }
        pipes.retain(|p| p.x + cfg.pipe_width > 0.0);
    }
    state.score += passes;

    // Terminal conditions: ceiling, ground, or any pipe
    let ground_y = cfg.height - cfg.ground_height;
    let actor = state.actor;
    let out_of_bounds =
        actor.pos.y - actor.radius <= 0.0 || actor.pos.y + actor.radius >= ground_y;
    let hit_pipe = state.pipes().iter().any(|pipe| {
        collision::actor_hits_pipe(actor.pos, actor.radius, pipe, cfg.pipe_width, ground_y)
    });

    if out_of_bounds || hit_pipe {
        state.phase = GamePhase::Lost;
        log::info!(
            "Runner playthrough lost at tick {} (score {})",
            state.time_ticks,
            state.score
        );
    }
}

/// One tick of the slingshot puzzle
fn puzzle_tick(state: &mut GameState, input: &TickInput, cfg: &PuzzleConfig) {
    apply_drag_events(state, input, cfg);

    // A spent actor waits out the reload countdown; no physics meanwhile
    if tick_reload(state, cfg) {
        return;
    }

    // Unlaunched means aiming on the slingshot: no integration
    if !state.actor.launched {
        return;
    }

    let (pos, vel) = integrate(state.actor.pos, state.actor.vel, cfg.gravity, cfg.friction);
    state.actor.pos = pos;
    state.actor.vel = vel;

    let ground_y = cfg.height - cfg.ground_height;
    let radius = state.actor.radius;

    // Ground bounce
    let mut grounded = false;
    if state.actor.pos.y + radius >= ground_y {
        grounded = true;
        state.actor.pos.y = ground_y - radius;
        state.actor.vel.y = -state.actor.vel.y * cfg.ground_restitution;
        state.actor.vel.x *= cfg.ground_drag;
    }

    // Side walls and ceiling
    if state.actor.pos.x - radius < 0.0 || state.actor.pos.x + radius > cfg.width {
        state.actor.vel.x = -state.actor.vel.x * cfg.wall_restitution;
        state.actor.pos.x = state.actor.pos.x.clamp(radius, cfg.width - radius);
    }
    if state.actor.pos.y - radius < 0.0 {
        state.actor.vel.y = -state.actor.vel.y * cfg.wall_restitution;
        state.actor.pos.y = radius;
    }

    resolve_block_hits(state, cfg);
    resolve_target_hits(state, cfg);

    // All targets gone wins, before any settle accounting
    if state.targets().is_empty() {
        state.phase = GamePhase::Won;
        log::info!(
            "Puzzle playthrough won at tick {} (score {})",
            state.time_ticks,
            state.score
        );
        return;
    }

    // Low-speed ground contact: this launch is spent
    let vel = state.actor.vel;
    if grounded && vel.x.abs() < cfg.settle_epsilon && vel.y.abs() < cfg.settle_epsilon {
        settle(state, cfg);
    }
}

/// Fold queued drag gestures into the aiming state, launching on release.
fn apply_drag_events(state: &mut GameState, input: &TickInput, cfg: &PuzzleConfig) {
    for event in &input.drag {
        let ModeState::Puzzle { drag, .. } = &mut state.mode else {
            return;
        };
        match event {
            DragEvent::Start(point) => {
                // Grabs must begin near the unlaunched actor
                if !state.actor.launched && state.actor.pos.distance(*point) < cfg.grab_radius {
                    *drag = Some(*point);
                }
            }
            DragEvent::Move(point) => {
                if drag.is_some() {
                    *drag = Some(*point);
                }
            }
            DragEvent::Release => {
                if let Some(point) = drag.take() {
                    launch(&mut state.actor, point, cfg);
                }
            }
        }
    }
}

/// Launch the actor opposite the drag, speed scaled by capped drag distance.
///
/// A zero-length drag has no direction to normalize and is a no-op launch.
fn launch(actor: &mut Actor, point: Vec2, cfg: &PuzzleConfig) {
    let pull = actor.pos - point;
    if pull.length_squared() == 0.0 {
        return;
    }

    let capped = clamp_magnitude(pull, cfg.max_drag);
    actor.vel = capped / cfg.max_drag * cfg.launch_speed;
    actor.launched = true;
    log::info!("Actor launched (vel {:.2},{:.2})", actor.vel.x, actor.vel.y);
}

/// Advance a pending reload countdown. Returns true while the actor waits.
fn tick_reload(state: &mut GameState, cfg: &PuzzleConfig) -> bool {
    let ModeState::Puzzle { reload_timer, .. } = &mut state.mode else {
        unreachable!("puzzle config paired with puzzle state");
    };
    let Some(ticks) = reload_timer else {
        return false;
    };

    *ticks = ticks.saturating_sub(1);
    if *ticks == 0 {
        *reload_timer = None;
        state.actor = Actor::at_rest(cfg.slingshot, cfg.actor_radius);
        log::info!("Actor reloaded at the slingshot");
    }
    true
}

/// Damage overlapped blocks; destroyed blocks score, survivors bounce the
/// actor back out along the contact normal.
fn resolve_block_hits(state: &mut GameState, cfg: &PuzzleConfig) {
    let mut scored = 0u32;
    let actor = &mut state.actor;
    if let ModeState::Puzzle { blocks, .. } = &mut state.mode {
        let mut i = 0;
        while i < blocks.len() {
            let result = collision::circle_rect(actor.pos, actor.radius, &blocks[i].rect());
            if result.hit {
                blocks[i].health = blocks[i].health.saturating_sub(1);
                if blocks[i].health == 0 {
                    blocks.remove(i);
                    scored += cfg.block_points;
                    continue;
                }
                // Separate first so one sustained overlap cannot drain the
                // block on consecutive ticks, then dampened rebound
                actor.pos += result.normal * result.penetration;
                actor.vel = -actor.vel * cfg.block_restitution;
            }
            i += 1;
        }
    }
    state.score += scored;
}

/// Remove contacted targets and score them.
fn resolve_target_hits(state: &mut GameState, cfg: &PuzzleConfig) {
    let (pos, radius) = (state.actor.pos, state.actor.radius);
    let mut scored = 0u32;
    if let ModeState::Puzzle { targets, .. } = &mut state.mode {
        let before = targets.len();
        targets.retain(|t| !collision::circle_circle(pos, radius, t.pos, t.radius));
        scored = (before - targets.len()) as u32 * cfg.target_points;
    }
    state.score += scored;
}

/// A settled launch with targets remaining: consume an attempt or lose.
fn settle(state: &mut GameState, cfg: &PuzzleConfig) {
    state.actor.vel = Vec2::ZERO;

    let ModeState::Puzzle {
        attempts_left,
        reload_timer,
        ..
    } = &mut state.mode
    else {
        unreachable!("puzzle config paired with puzzle state");
    };

    *attempts_left = attempts_left.saturating_sub(1);
    if *attempts_left == 0 {
        state.phase = GamePhase::Lost;
        log::info!(
            "Puzzle playthrough lost at tick {} (score {})",
            state.time_ticks,
            state.score
        );
    } else {
        *reload_timer = Some(cfg.reload_delay.max(1));
        log::info!("Launch spent, {} attempt(s) remaining", *attempts_left);
    }
}
