//! Mode descriptors and gameplay tuning
//!
//! One engine, two games: the mode descriptor selects runner or puzzle rules
//! and carries every tunable the simulation reads. Defaults reproduce the
//! original mini-games; hosts may deserialize their own tuning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning for the side-scrolling obstacle avoider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Arena width in pixels
    pub width: f32,
    /// Arena height in pixels
    pub height: f32,
    /// Height of the ground band at the bottom
    pub ground_height: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump command
    pub jump_impulse: f32,
    /// Leftward pipe scroll per tick
    pub pipe_speed: f32,
    pub pipe_width: f32,
    /// Vertical opening between pipe halves
    pub pipe_gap: f32,
    /// Ticks between pipe spawns
    pub spawn_interval: u32,
    /// Clearance enforced above and below the gap
    pub pipe_margin: f32,
    pub actor_radius: f32,
    /// Actor position at playthrough start
    pub start: Vec2,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            width: RUNNER_WIDTH,
            height: RUNNER_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: RUNNER_GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            spawn_interval: PIPE_SPAWN_INTERVAL,
            pipe_margin: PIPE_MARGIN,
            actor_radius: ACTOR_RADIUS,
            start: Vec2::new(RUNNER_START_X, RUNNER_START_Y),
        }
    }
}

/// Tuning for the slingshot destruction puzzle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    pub gravity: f32,
    /// Per-tick velocity damping while airborne, in (0, 1]
    pub friction: f32,
    /// Drag distance at which launch speed saturates
    pub max_drag: f32,
    /// Launch speed at full drag
    pub launch_speed: f32,
    /// A drag must begin within this distance of the actor
    pub grab_radius: f32,
    /// Velocity kept when bouncing off a surviving block
    pub block_restitution: f32,
    /// Vertical velocity kept on a ground bounce
    pub ground_restitution: f32,
    /// Horizontal damping applied on a ground bounce
    pub ground_drag: f32,
    /// Velocity kept when bouncing off a wall or the ceiling
    pub wall_restitution: f32,
    /// Speed below which a ground contact counts as settled
    pub settle_epsilon: f32,
    /// Points for destroying a block
    pub block_points: u32,
    /// Points for eliminating a target
    pub target_points: u32,
    /// Launches per playthrough; a settled miss with none left is a loss
    pub attempts: u32,
    /// Ticks between settling and the actor reloading at the slingshot
    pub reload_delay: u32,
    pub actor_radius: f32,
    /// Slingshot anchor; the actor rests and reloads here
    pub slingshot: Vec2,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: PUZZLE_WIDTH,
            height: PUZZLE_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: PUZZLE_GRAVITY,
            friction: AIR_FRICTION,
            max_drag: MAX_DRAG,
            launch_speed: LAUNCH_SPEED,
            grab_radius: GRAB_RADIUS,
            block_restitution: BLOCK_RESTITUTION,
            ground_restitution: GROUND_RESTITUTION,
            ground_drag: GROUND_DRAG,
            wall_restitution: WALL_RESTITUTION,
            settle_epsilon: SETTLE_EPSILON,
            block_points: BLOCK_POINTS,
            target_points: TARGET_POINTS,
            attempts: PUZZLE_ATTEMPTS,
            reload_delay: RELOAD_DELAY,
            actor_radius: ACTOR_RADIUS,
            slingshot: Vec2::new(SLINGSHOT_X, SLINGSHOT_Y),
        }
    }
}

/// Tagged mode descriptor selecting which game the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModeConfig {
    Runner(RunnerConfig),
    Puzzle(PuzzleConfig),
}

impl ModeConfig {
    pub fn runner() -> Self {
        ModeConfig::Runner(RunnerConfig::default())
    }

    pub fn puzzle() -> Self {
        ModeConfig::Puzzle(PuzzleConfig::default())
    }

    /// Y coordinate of the ground line
    pub fn ground_y(&self) -> f32 {
        match self {
            ModeConfig::Runner(c) => c.height - c.ground_height,
            ModeConfig::Puzzle(c) => c.height - c.ground_height,
        }
    }

    pub fn actor_radius(&self) -> f32 {
        match self {
            ModeConfig::Runner(c) => c.actor_radius,
            ModeConfig::Puzzle(c) => c.actor_radius,
        }
    }

    /// Actor position at playthrough start
    pub fn actor_start(&self) -> Vec2 {
        match self {
            ModeConfig::Runner(c) => c.start,
            ModeConfig::Puzzle(c) => c.slingshot,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModeConfig::Runner(_) => "runner",
            ModeConfig::Puzzle(_) => "puzzle",
        }
    }
}
