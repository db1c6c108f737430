//! External command interface
//!
//! The host adapter talks to the simulation exclusively through this type:
//! input events become queued commands, `frame` applies them at the start of
//! the next tick (never mid-tick), and renderers read immutable snapshots.

use std::collections::VecDeque;

use glam::Vec2;
use serde::Serialize;

use crate::sim::config::ModeConfig;
use crate::sim::state::{Actor, Block, GamePhase, GameState, Pipe, Target};
use crate::sim::tick::{DragEvent, TickInput, tick};

/// A queued input command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Begin a playthrough
    Start,
    /// Re-run level init after (or during) a playthrough
    Restart,
    /// Jump impulse (runner mode)
    Jump,
    /// Begin aiming at the given point (puzzle mode)
    DragStart(Vec2),
    /// Update the aim point
    DragMove(Vec2),
    /// Release the slingshot
    DragRelease,
}

/// Read-only per-frame view of the simulation, enough to draw the scene
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub actor: &'a Actor,
    /// Active pipes (runner mode; empty otherwise)
    pub pipes: &'a [Pipe],
    /// Surviving blocks (puzzle mode; empty otherwise)
    pub blocks: &'a [Block],
    /// Surviving targets (puzzle mode; empty otherwise)
    pub targets: &'a [Target],
    /// Current aim point while dragging
    pub drag: Option<Vec2>,
    /// Launches remaining (puzzle mode)
    pub attempts_left: u32,
    pub score: u32,
    pub phase: GamePhase,
}

/// The arcade engine: owns one playthrough's state and its input queue
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    pending: VecDeque<Command>,
}

impl Engine {
    pub fn new(config: ModeConfig, seed: u64) -> Self {
        log::info!("Engine created ({} mode, seed {})", config.name(), seed);
        Self {
            state: GameState::new(config, seed),
            pending: VecDeque::new(),
        }
    }

    /// Queue a command for the next frame
    pub fn handle(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn start_game(&mut self) {
        self.handle(Command::Start);
    }

    pub fn restart(&mut self) {
        self.handle(Command::Restart);
    }

    pub fn jump(&mut self) {
        self.handle(Command::Jump);
    }

    pub fn drag_start(&mut self, x: f32, y: f32) {
        self.handle(Command::DragStart(Vec2::new(x, y)));
    }

    pub fn drag_move(&mut self, x: f32, y: f32) {
        self.handle(Command::DragMove(Vec2::new(x, y)));
    }

    pub fn drag_release(&mut self) {
        self.handle(Command::DragRelease);
    }

    /// Apply queued commands and advance one tick.
    ///
    /// Call once per rendered frame.
    pub fn frame(&mut self) {
        let input = self.drain_pending();
        tick(&mut self.state, &input);
    }

    /// Collapse the queue into one tick's input, preserving gesture order
    fn drain_pending(&mut self) -> TickInput {
        let mut input = TickInput::default();
        while let Some(command) = self.pending.pop_front() {
            match command {
                Command::Start => input.start = true,
                Command::Restart => input.restart = true,
                Command::Jump => input.jump = true,
                Command::DragStart(p) => input.drag.push(DragEvent::Start(p)),
                Command::DragMove(p) => input.drag.push(DragEvent::Move(p)),
                Command::DragRelease => input.drag.push(DragEvent::Release),
            }
        }
        input
    }

    /// Read-only view of the current frame
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            actor: &self.state.actor,
            pipes: self.state.pipes(),
            blocks: self.state.blocks(),
            targets: self.state.targets(),
            drag: self.state.drag(),
            attempts_left: self.state.attempts_left(),
            score: self.state.score,
            phase: self.state.phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &ModeConfig {
        &self.state.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_apply_on_the_next_frame_only() {
        let mut engine = Engine::new(ModeConfig::runner(), 1);

        engine.start_game();
        // Queued, not applied
        assert_eq!(engine.snapshot().phase, GamePhase::Idle);

        engine.frame();
        assert_eq!(engine.snapshot().phase, GamePhase::Playing);
    }

    #[test]
    fn test_jump_outside_playing_is_a_noop() {
        let mut engine = Engine::new(ModeConfig::runner(), 1);
        let before = *engine.snapshot().actor;

        engine.jump();
        engine.frame();

        assert_eq!(engine.snapshot().phase, GamePhase::Idle);
        assert_eq!(*engine.snapshot().actor, before);
    }

    #[test]
    fn test_jump_applies_at_tick_start() {
        let mut engine = Engine::new(ModeConfig::runner(), 1);
        engine.start_game();
        engine.frame();

        engine.jump();
        engine.frame();
        assert_eq!(engine.snapshot().actor.vel.y, -7.5);
    }

    #[test]
    fn test_queue_drains_completely_each_frame() {
        let mut engine = Engine::new(ModeConfig::runner(), 1);
        engine.start_game();
        engine.jump(); // dropped: the start transition consumes the step
        engine.frame();
        assert_eq!(engine.snapshot().phase, GamePhase::Playing);

        // Nothing left over: the next frame is input-free
        engine.frame();
        assert_eq!(engine.snapshot().actor.vel.y, 0.5);
    }

    #[test]
    fn test_drag_gesture_across_frames_launches() {
        let mut engine = Engine::new(ModeConfig::puzzle(), 1);
        engine.start_game();
        engine.frame();

        let anchor = engine.snapshot().actor.pos;
        engine.drag_start(anchor.x, anchor.y);
        engine.frame();
        assert_eq!(engine.snapshot().drag, Some(anchor));

        engine.drag_move(anchor.x + 40.0, anchor.y + 20.0);
        engine.frame();
        assert_eq!(engine.snapshot().drag, Some(anchor + Vec2::new(40.0, 20.0)));

        engine.drag_release();
        engine.frame();
        assert!(engine.snapshot().actor.launched);
        assert!(engine.snapshot().drag.is_none());
    }

    #[test]
    fn test_snapshot_carries_the_puzzle_scene() {
        let mut engine = Engine::new(ModeConfig::puzzle(), 1);
        engine.start_game();
        engine.frame();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.blocks.len(), 6);
        assert_eq!(snapshot.targets.len(), 3);
        assert_eq!(snapshot.attempts_left, 3);
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.pipes.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_for_the_host() {
        let mut engine = Engine::new(ModeConfig::runner(), 1);
        engine.start_game();
        engine.frame();
        engine.frame(); // first pipe spawns

        let json = serde_json::to_string(&engine.snapshot()).unwrap();
        assert!(json.contains("\"actor\""));
        assert!(json.contains("\"pipes\""));
        assert!(json.contains("\"score\""));
        assert!(json.contains("\"phase\""));
    }

    #[test]
    fn test_restart_resets_score_to_zero() {
        let mut engine = Engine::new(ModeConfig::puzzle(), 1);
        engine.start_game();
        engine.frame();

        engine.restart();
        engine.frame();
        assert_eq!(engine.snapshot().score, 0);
        assert_eq!(engine.snapshot().phase, GamePhase::Playing);
    }
}
