//! Contact handling and collision geometry
//!
//! The physics layer reports begin-of-overlap contacts between tagged bodies;
//! `resolve_contact` turns them into bounces, brick removal and score.

use glam::Vec2;

use super::state::{Brick, BrickId, GamePhase, GameState};
use crate::bounce_angle;
use crate::consts::{BRICK_IMPACT, PADDLE_IMPACT};
use crate::effects::Effects;

/// Physics category of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Ball,
    Paddle,
    Brick,
    /// Playfield boundary
    Edge,
}

/// A body as seen by the contact callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Body {
    pub kind: BodyKind,
    /// Owning brick, for `BodyKind::Brick`
    pub brick: Option<BrickId>,
}

impl Body {
    pub const BALL: Body = Body {
        kind: BodyKind::Ball,
        brick: None,
    };
    pub const PADDLE: Body = Body {
        kind: BodyKind::Paddle,
        brick: None,
    };
    pub const EDGE: Body = Body {
        kind: BodyKind::Edge,
        brick: None,
    };

    pub fn brick(id: BrickId) -> Self {
        Self {
            kind: BodyKind::Brick,
            brick: Some(id),
        }
    }
}

/// Result of a contact
#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
    /// Not a ball contact we react to
    Ignored,
    PaddleBounce,
    BrickDestroyed(Brick),
}

/// React to a contact between two bodies. Only acts while Playing.
pub fn resolve_contact(
    state: &mut GameState,
    a: Body,
    b: Body,
    fx: &mut impl Effects,
) -> ContactOutcome {
    if state.phase != GamePhase::Playing {
        return ContactOutcome::Ignored;
    }

    let other = if a.kind == BodyKind::Ball {
        b
    } else if b.kind == BodyKind::Ball {
        a
    } else {
        return ContactOutcome::Ignored;
    };

    match (other.kind, other.brick) {
        (BodyKind::Paddle, _) => {
            paddle_bounce(state);
            fx.impact(PADDLE_IMPACT);
            ContactOutcome::PaddleBounce
        }
        (BodyKind::Brick, Some(id)) => {
            // Stale contact for a brick already gone: nothing to do
            let Some(brick) = state.remove_brick(id) else {
                return ContactOutcome::Ignored;
            };
            state.ball.vel = brick_bounce(state.ball.pos, state.ball.vel, brick.pos);
            state.score += state.tuning.points_per_brick;

            fx.impact(BRICK_IMPACT);
            fx.brick_destroyed(brick.pos, brick.tint);
            fx.score_changed(state.score);
            ContactOutcome::BrickDestroyed(brick)
        }
        _ => ContactOutcome::Ignored,
    }
}

/// Send the ball upward at an angle set by where it struck the paddle
fn paddle_bounce(state: &mut GameState) {
    let offset = (state.ball.pos.x - state.paddle.pos.x) / state.paddle.half_width();
    let angle = bounce_angle(offset);
    let speed = state.tuning.ball_speed;
    state.ball.vel = Vec2::new(speed * angle.sin(), (speed * angle.cos()).abs());
}

/// Flip the velocity component along the dominant ball-to-brick axis
pub fn brick_bounce(ball_pos: Vec2, vel: Vec2, brick_pos: Vec2) -> Vec2 {
    let d = ball_pos - brick_pos;
    if d.x.abs() > d.y.abs() {
        Vec2::new(-vel.x, vel.y)
    } else {
        Vec2::new(vel.x, -vel.y)
    }
}

/// Check whether a circle overlaps an axis-aligned box
pub fn circle_overlaps_box(center: Vec2, radius: f32, box_center: Vec2, half_extents: Vec2) -> bool {
    let closest = center.clamp(box_center - half_extents, box_center + half_extents);
    center.distance_squared(closest) < radius * radius
}
