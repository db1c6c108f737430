//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per rendered frame, no wall-clock scaling)
//! - Seeded RNG only
//! - Stable iteration order (entity vectors in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod level;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, actor_hits_pipe, circle_circle, circle_rect, reflect};
pub use config::{ModeConfig, PuzzleConfig, RunnerConfig};
pub use physics::integrate;
pub use state::{Actor, Block, GamePhase, GameState, ModeState, Pipe, Rect, Target};
pub use tick::{DragEvent, TickInput, tick};
