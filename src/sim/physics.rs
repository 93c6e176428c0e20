//! Reference physics stepper
//!
//! Stands in for the host engine when running headless: moves the ball,
//! bounces it off the playfield edges and reports begin-of-overlap contacts
//! with the paddle and bricks. Contact *response* is left to the callback.

use std::collections::HashSet;

use glam::Vec2;

use super::collision::{Body, circle_overlaps_box};
use super::state::{GamePhase, GameState};

/// Max ball travel per substep, as a fraction of its radius
const SUBSTEP_FRACTION: f32 = 0.5;
const MAX_SUBSTEPS: usize = 20;

/// Ball-centric contact tracker
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    /// Bodies overlapping the ball after the last substep
    touching: HashSet<Body>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all overlaps (after a reset)
    pub fn reset(&mut self) {
        self.touching.clear();
    }

    /// Integrate the ball for `dt` seconds.
    ///
    /// `on_contact` is called synchronously for every body that starts
    /// overlapping the ball, paddle first then bricks in registry order.
    pub fn step<F>(&mut self, state: &mut GameState, dt: f32, mut on_contact: F)
    where
        F: FnMut(&mut GameState, Body, Body),
    {
        if state.phase != GamePhase::Playing {
            self.touching.clear();
            return;
        }
        if dt <= 0.0 {
            return;
        }

        let move_dist = state.ball.speed() * dt;
        let step_size = state.ball.radius * SUBSTEP_FRACTION;
        let num_steps = ((move_dist / step_size).ceil() as usize).clamp(1, MAX_SUBSTEPS);
        let step_dt = dt / num_steps as f32;

        for _ in 0..num_steps {
            state.ball.pos += state.ball.vel * step_dt;
            bounce_off_edges(state);

            let now_touching = overlapping_bodies(state);
            let began: Vec<Body> = now_touching
                .iter()
                .copied()
                .filter(|body| !self.touching.contains(body))
                .collect();
            self.touching = now_touching.into_iter().collect();

            for body in began {
                on_contact(state, Body::BALL, body);
            }

            if state.phase != GamePhase::Playing {
                self.touching.clear();
                return;
            }
        }
    }
}

/// Keep the ball inside the playfield, reflecting off whichever edge it crossed
fn bounce_off_edges(state: &mut GameState) {
    let r = state.ball.radius;
    let max = state.playfield - Vec2::splat(r);
    let ball = &mut state.ball;

    if ball.pos.x < r {
        ball.pos.x = r;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x > max.x {
        ball.pos.x = max.x;
        ball.vel.x = -ball.vel.x.abs();
    }

    if ball.pos.y < r {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
    } else if ball.pos.y > max.y {
        ball.pos.y = max.y;
        ball.vel.y = -ball.vel.y.abs();
    }
}

/// Bodies currently overlapping the ball, in delivery order
fn overlapping_bodies(state: &GameState) -> Vec<Body> {
    let ball = &state.ball;
    let mut bodies = Vec::new();

    let paddle = &state.paddle;
    if circle_overlaps_box(ball.pos, ball.radius, paddle.pos, paddle.size / 2.0) {
        bodies.push(Body::PADDLE);
    }
    for brick in &state.bricks {
        if circle_overlaps_box(ball.pos, ball.radius, brick.pos, brick.half_extents()) {
            bodies.push(Body::brick(brick.id));
        }
    }
    bodies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;
    use crate::sim::collision::{BodyKind, resolve_contact};
    use crate::sim::state::Brick;
    use crate::sim::tick::start_game;
    use crate::tuning::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::new(Tuning::default(), Vec2::new(320.0, 480.0));
        start_game(&mut state, &mut NoEffects);
        state
    }

    #[test]
    fn test_ball_moves_with_velocity() {
        let mut state = playing();
        let mut world = PhysicsWorld::new();
        world.step(&mut state, 0.1, |_, _, _| panic!("no contact expected"));
        assert!((state.ball.pos.y - 152.0).abs() < 1e-3);
        assert_eq!(state.ball.pos.x, 160.0);
    }

    #[test]
    fn test_no_motion_outside_play() {
        let mut state = GameState::new(Tuning::default(), Vec2::new(320.0, 480.0));
        state.ball.vel = Vec2::new(0.0, 320.0);
        let mut world = PhysicsWorld::new();
        world.step(&mut state, 0.1, |_, _, _| {});
        assert_eq!(state.ball.pos, Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_edges_reflect() {
        let mut state = playing();
        state.ball.pos = Vec2::new(12.0, 470.0);
        state.ball.vel = Vec2::new(-200.0, 200.0);
        let mut world = PhysicsWorld::new();
        world.step(&mut state, 0.05, |_, _, _| {});
        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.pos.x >= 10.0);
        assert!(state.ball.pos.y <= 470.0);
    }

    #[test]
    fn test_contact_fires_once_per_overlap() {
        let mut state = playing();
        let id = state.next_brick_id();
        state.bricks.push(Brick {
            id,
            pos: Vec2::new(160.0, 150.0),
            size: Vec2::new(40.0, 40.0),
            tint: 0,
        });
        state.ball.pos = Vec2::new(160.0, 115.0);
        state.ball.vel = Vec2::new(0.0, 60.0);

        let mut hits = Vec::new();
        let mut world = PhysicsWorld::new();
        for _ in 0..10 {
            world.step(&mut state, 1.0 / 60.0, |_, a, b| hits.push((a, b)));
        }
        assert_eq!(hits, vec![(Body::BALL, Body::brick(id))]);
    }

    #[test]
    fn test_paddle_contact_reported_first() {
        let mut state = playing();
        let id = state.next_brick_id();
        state.bricks.push(Brick {
            id,
            pos: Vec2::new(160.0, 95.0),
            size: Vec2::new(40.0, 20.0),
            tint: 0,
        });
        state.ball.pos = Vec2::new(160.0, 80.0);
        state.ball.vel = Vec2::new(0.0, -10.0);

        let mut kinds = Vec::new();
        let mut world = PhysicsWorld::new();
        world.step(&mut state, 0.01, |_, _, b| kinds.push(b.kind));
        assert_eq!(kinds, vec![BodyKind::Paddle, BodyKind::Brick]);
    }

    #[test]
    fn test_resolver_removes_brick_via_callback() {
        let mut state = playing();
        let id = state.next_brick_id();
        state.bricks.push(Brick {
            id,
            pos: Vec2::new(160.0, 200.0),
            size: Vec2::new(40.0, 40.0),
            tint: 0,
        });

        let mut world = PhysicsWorld::new();
        // Long enough to reach the brick, short enough not to come back off the paddle
        for _ in 0..20 {
            world.step(&mut state, 1.0 / 60.0, |s, a, b| {
                resolve_contact(s, a, b, &mut NoEffects);
            });
        }
        assert!(state.bricks.is_empty());
        assert_eq!(state.score, 10);
        assert!(state.ball.vel.y < 0.0);
    }
}
