//! Game state and core simulation types
//!
//! Everything a playthrough owns lives here: the actor, the per-mode entity
//! sets, the seeded RNG, and the state machine phase. Entities are created at
//! level init (or, for pipes, at the spawn cadence) and removed by collision
//! outcome or reset; nothing outlives its `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::ModeConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for an explicit start command
    Idle,
    /// Active gameplay; the only phase that ticks physics
    Playing,
    /// Playthrough ended in victory (puzzle only); score frozen
    Won,
    /// Playthrough ended in defeat; score frozen
    Lost,
}

/// The player-controlled body ("the bird")
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Whether physics applies. Runner mode launches at start; puzzle mode
    /// waits on the slingshot until a drag is released.
    pub launched: bool,
}

impl Actor {
    /// Actor at rest at `pos` with zero velocity
    pub fn at_rest(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            launched: false,
        }
    }
}

/// Axis-aligned rectangle in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A scrolling pipe pair (runner mode)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge of the pipe column
    pub x: f32,
    /// Bottom of the upper pipe half
    pub top_height: f32,
    /// Vertical opening between the halves
    pub gap: f32,
    /// Set once the trailing edge crosses the actor; worth exactly one point
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            gap,
            passed: false,
        }
    }
}

/// A destructible block (puzzle mode)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Qualifying hits remaining before the block is destroyed
    pub health: u8,
}

impl Block {
    pub fn new(x: f32, y: f32, width: f32, height: f32, health: u8) -> Self {
        Self {
            x,
            y,
            width,
            height,
            health,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A target ("pig", puzzle mode); elimination of all targets wins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
}

impl Target {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
        }
    }
}

/// Per-mode entity sets and timers
///
/// The two original mini-games duplicated this state in separate components;
/// the tagged variant is what lets one engine back both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModeState {
    Runner {
        /// Active pipes in spawn order
        pipes: Vec<Pipe>,
        /// Ticks since the last pipe spawn
        spawn_timer: u32,
    },
    Puzzle {
        /// Surviving blocks in spawn order
        blocks: Vec<Block>,
        /// Surviving targets in spawn order
        targets: Vec<Target>,
        /// Current pull point while aiming
        drag: Option<Vec2>,
        /// Launches remaining this playthrough
        attempts_left: u32,
        /// Countdown to reloading the actor after a settled miss
        reload_timer: Option<u32>,
    },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playthrough seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source (pipe gap placement)
    pub rng: Pcg32,
    /// Mode descriptor and tuning, fixed for the engine's lifetime
    pub config: ModeConfig,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub actor: Actor,
    pub mode: ModeState,
}

impl GameState {
    /// Create an idle game state; a start command runs level init
    pub fn new(config: ModeConfig, seed: u64) -> Self {
        debug_assert!(config.actor_radius() > 0.0);

        let mode = match &config {
            ModeConfig::Runner(_) => ModeState::Runner {
                pipes: Vec::new(),
                spawn_timer: 0,
            },
            ModeConfig::Puzzle(c) => ModeState::Puzzle {
                blocks: Vec::new(),
                targets: Vec::new(),
                drag: None,
                attempts_left: c.attempts,
                reload_timer: None,
            },
        };

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            actor: Actor::at_rest(config.actor_start(), config.actor_radius()),
            mode,
        }
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.config.ground_y()
    }

    /// Active pipes (empty slice in puzzle mode)
    pub fn pipes(&self) -> &[Pipe] {
        match &self.mode {
            ModeState::Runner { pipes, .. } => pipes,
            ModeState::Puzzle { .. } => &[],
        }
    }

    /// Surviving blocks (empty slice in runner mode)
    pub fn blocks(&self) -> &[Block] {
        match &self.mode {
            ModeState::Puzzle { blocks, .. } => blocks,
            ModeState::Runner { .. } => &[],
        }
    }

    /// Surviving targets (empty slice in runner mode)
    pub fn targets(&self) -> &[Target] {
        match &self.mode {
            ModeState::Puzzle { targets, .. } => targets,
            ModeState::Runner { .. } => &[],
        }
    }

    /// Current aim point, if a drag is in progress
    pub fn drag(&self) -> Option<Vec2> {
        match &self.mode {
            ModeState::Puzzle { drag, .. } => *drag,
            ModeState::Runner { .. } => None,
        }
    }

    /// Launches remaining (puzzle mode; 0 in runner mode)
    pub fn attempts_left(&self) -> u32 {
        match &self.mode {
            ModeState::Puzzle { attempts_left, .. } => *attempts_left,
            ModeState::Runner { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_with_zero_score() {
        let state = GameState::new(ModeConfig::runner(), 7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.pipes().is_empty());
        assert!(!state.actor.launched);
    }

    #[test]
    fn test_puzzle_state_starts_with_full_attempts() {
        let state = GameState::new(ModeConfig::puzzle(), 7);
        assert_eq!(state.attempts_left(), 3);
        assert_eq!(state.actor.pos, Vec2::new(100.0, 400.0));
        assert!(state.blocks().is_empty());
        assert!(state.targets().is_empty());
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(ModeConfig::puzzle(), 42);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 42);
        assert_eq!(back.phase, GamePhase::Idle);
        assert_eq!(back.actor, state.actor);
    }
}
