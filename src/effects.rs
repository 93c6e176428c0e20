//! Cosmetic hooks
//!
//! The simulation reports visual/haptic moments through [`Effects`]. Hooks
//! receive plain values only, so a presentation layer can react but never
//! reach back into game state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;

/// One-way notifications from the simulation
pub trait Effects {
    /// Once per Playing frame, with the ball's current position
    fn ball_trail_tick(&mut self, _pos: Vec2) {}

    /// A brick was destroyed by the ball
    fn brick_destroyed(&mut self, _pos: Vec2, _tint: u8) {}

    /// Ball struck the paddle or a brick (0-1)
    fn impact(&mut self, _strength: f32) {}

    fn score_changed(&mut self, _score: u64) {}

    fn state_changed(&mut self, _phase: GamePhase) {}
}

/// Discards every hook
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl Effects for NoEffects {}

/// A recorded hook invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BallTrail { pos: Vec2 },
    BrickDestroyed { pos: Vec2, tint: u8 },
    Impact { strength: f32 },
    ScoreChanged { score: u64 },
    StateChanged { phase: GamePhase },
}

/// Records hooks in call order
impl Effects for Vec<GameEvent> {
    fn ball_trail_tick(&mut self, pos: Vec2) {
        self.push(GameEvent::BallTrail { pos });
    }

    fn brick_destroyed(&mut self, pos: Vec2, tint: u8) {
        self.push(GameEvent::BrickDestroyed { pos, tint });
    }

    fn impact(&mut self, strength: f32) {
        self.push(GameEvent::Impact { strength });
    }

    fn score_changed(&mut self, score: u64) {
        self.push(GameEvent::ScoreChanged { score });
    }

    fn state_changed(&mut self, phase: GamePhase) {
        self.push(GameEvent::StateChanged { phase });
    }
}
