//! Bird Arcade - the embedded mini-game engine for the bird viewer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `engine`: Command queue and per-frame snapshot interface for hosts
//! - `platform`: Browser embedding (frame loop, wasm bindings)
//!
//! One engine backs both mini-games: the side-scrolling obstacle avoider
//! ("runner") and the slingshot destruction puzzle ("puzzle"). The host page
//! renders snapshots and feeds input commands; the engine never draws.

pub mod engine;
pub mod platform;
pub mod sim;

pub use engine::{Command, Engine, Snapshot};
pub use sim::config::{ModeConfig, PuzzleConfig, RunnerConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    // === Runner mode ("Flappy") ===

    /// Arena dimensions
    pub const RUNNER_WIDTH: f32 = 400.0;
    pub const RUNNER_HEIGHT: f32 = 500.0;

    /// Downward acceleration per tick
    pub const RUNNER_GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on a jump (overrides current velocity)
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Leftward pipe scroll per tick
    pub const PIPE_SPEED: f32 = 2.0;
    pub const PIPE_WIDTH: f32 = 50.0;
    /// Vertical opening between the pipe halves
    pub const PIPE_GAP: f32 = 150.0;
    /// Ticks between pipe spawns (200 ms at the 60 Hz frame cadence)
    pub const PIPE_SPAWN_INTERVAL: u32 = 12;
    /// Minimum clearance kept above and below the gap when placing it
    pub const PIPE_MARGIN: f32 = 50.0;

    pub const RUNNER_START_X: f32 = 100.0;
    pub const RUNNER_START_Y: f32 = 250.0;

    // === Puzzle mode ("slingshot") ===

    pub const PUZZLE_WIDTH: f32 = 600.0;
    pub const PUZZLE_HEIGHT: f32 = 500.0;

    pub const PUZZLE_GRAVITY: f32 = 0.3;
    /// Per-tick velocity damping while airborne
    pub const AIR_FRICTION: f32 = 0.98;

    /// Drag distance at which launch speed saturates
    pub const MAX_DRAG: f32 = 100.0;
    /// Launch speed at full drag
    pub const LAUNCH_SPEED: f32 = 12.0;
    /// A drag must begin within this distance of the actor
    pub const GRAB_RADIUS: f32 = 50.0;

    /// Fraction of velocity kept when bouncing off a surviving block
    pub const BLOCK_RESTITUTION: f32 = 0.5;
    /// Fraction of vertical velocity kept on a ground bounce
    pub const GROUND_RESTITUTION: f32 = 0.5;
    /// Horizontal damping applied on a ground bounce
    pub const GROUND_DRAG: f32 = 0.8;
    /// Fraction of velocity kept when bouncing off a wall or the ceiling
    pub const WALL_RESTITUTION: f32 = 0.7;
    /// Below this speed on both axes at ground contact, the actor has settled
    pub const SETTLE_EPSILON: f32 = 0.5;

    pub const BLOCK_POINTS: u32 = 10;
    pub const TARGET_POINTS: u32 = 50;

    /// Launches per playthrough before a settled miss is a loss
    pub const PUZZLE_ATTEMPTS: u32 = 3;
    /// Ticks between settling and the actor reloading at the slingshot
    pub const RELOAD_DELAY: u32 = 120;

    pub const SLINGSHOT_X: f32 = 100.0;
    pub const SLINGSHOT_Y: f32 = 400.0;

    // === Shared ===

    /// Height of the ground band at the bottom of either arena
    pub const GROUND_HEIGHT: f32 = 50.0;
    pub const ACTOR_RADIUS: f32 = 15.0;
}

/// Scale a vector so its length never exceeds `max`.
///
/// A zero vector is returned unchanged (no direction to preserve).
#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max && len > 0.0 { v * (max / len) } else { v }
}
