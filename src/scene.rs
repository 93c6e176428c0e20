//! Host-facing scene
//!
//! Bundles the game state, the reference physics stepper and the effect sink
//! behind the entry points a host calls: frame ticks, touches, contacts and
//! resizes.

use glam::Vec2;

use crate::effects::{Effects, NoEffects};
use crate::sim::{self, Body, ContactOutcome, GamePhase, GameState, PhysicsWorld};
use crate::tuning::Tuning;

/// Longest physics step taken in one frame (seconds)
const MAX_FRAME_DT: f64 = 0.1;

/// A running game
#[derive(Debug)]
pub struct Scene<E: Effects = NoEffects> {
    state: GameState,
    world: PhysicsWorld,
    effects: E,
    /// Timestamp of the previous `frame` call
    last_frame: Option<f64>,
}

impl Scene<NoEffects> {
    /// Scene without cosmetic hooks
    pub fn headless(tuning: Tuning, width: f32, height: f32) -> Self {
        Self::new(tuning, width, height, NoEffects)
    }
}

impl<E: Effects> Scene<E> {
    pub fn new(tuning: Tuning, width: f32, height: f32, effects: E) -> Self {
        let state = GameState::new(tuning.validated(), Vec2::new(width, height));
        log::info!("Scene ready: {}x{} playfield, {} columns", width, height, state.tuning.columns);
        Self {
            state,
            world: PhysicsWorld::new(),
            effects,
            last_frame: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// Frame tick without physics, for hosts that run their own engine
    pub fn update(&mut self, now: f64) {
        sim::update(&mut self.state, now, &mut self.effects);
    }

    /// Full frame using the built-in physics: simulation update, then ball
    /// integration with contacts resolved as they begin.
    pub fn frame(&mut self, now: f64) {
        let dt = self
            .last_frame
            .map_or(0.0, |last| (now - last).clamp(0.0, MAX_FRAME_DT));
        self.last_frame = Some(now);

        self.update(now);

        let effects = &mut self.effects;
        self.world.step(&mut self.state, dt as f32, |state, a, b| {
            sim::resolve_contact(state, a, b, effects);
        });
    }

    pub fn on_touch_down(&mut self, x: f32, y: f32) {
        sim::touch_down(&mut self.state, Vec2::new(x, y), &mut self.effects);
        if self.state.phase == GamePhase::Splash {
            self.world.reset();
        }
    }

    pub fn on_touch_move(&mut self, x: f32, y: f32) {
        sim::touch_move(&mut self.state, Vec2::new(x, y));
    }

    /// Contact callback for an external physics engine
    pub fn on_contact(&mut self, a: Body, b: Body) -> ContactOutcome {
        sim::resolve_contact(&mut self.state, a, b, &mut self.effects)
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.state.resize(Vec2::new(width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::GameEvent;

    #[test]
    fn test_frame_plays_until_game_over() {
        let mut scene = Scene::headless(Tuning::default(), 320.0, 480.0);
        scene.on_touch_down(160.0, 60.0);
        assert_eq!(scene.phase(), GamePhase::Playing);

        let mut t = 0.0;
        while scene.phase() == GamePhase::Playing && t < 60.0 {
            scene.frame(t);
            t += 1.0 / 60.0;
        }
        assert_eq!(scene.phase(), GamePhase::GameOver);
        assert_eq!(scene.state().ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_effects_receive_trail_ticks() {
        let mut scene = Scene::new(Tuning::default(), 320.0, 480.0, Vec::<GameEvent>::new());
        scene.on_touch_down(0.0, 0.0);
        scene.frame(0.0);
        scene.frame(1.0 / 60.0);

        let trails = scene
            .effects()
            .iter()
            .filter(|e| matches!(e, GameEvent::BallTrail { .. }))
            .count();
        assert_eq!(trails, 2);
        assert_eq!(scene.effects()[0], GameEvent::StateChanged { phase: GamePhase::Playing });
    }

    #[test]
    fn test_external_contact_scores() {
        let mut scene = Scene::headless(Tuning::default(), 320.0, 480.0);
        scene.on_touch_down(0.0, 0.0);
        scene.update(0.0);
        let id = scene.state().bricks[3].id;

        let outcome = scene.on_contact(Body::brick(id), Body::BALL);
        assert!(matches!(outcome, ContactOutcome::BrickDestroyed(_)));
        assert_eq!(scene.score(), 10);
        assert_eq!(scene.state().bricks.len(), 7);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut scene = Scene::headless(Tuning::default(), 320.0, 480.0);
        scene.on_resize(640.0, 1000.0);
        assert_eq!(scene.state().layout.paddle_y, 120.0);
        assert_eq!(scene.state().paddle.pos, Vec2::new(320.0, 120.0));
        assert_eq!(scene.state().ball.pos, Vec2::new(320.0, 180.0));
    }
}
