//! Brick descent, off-screen culling and ball speed normalization

use glam::Vec2;

use super::state::{Ball, GameState};

/// What happened while moving the bricks down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescentOutcome {
    /// A brick touched the paddle line
    pub reached_paddle: bool,
    /// Bricks dropped below the playfield and were discarded
    pub culled: usize,
}

/// Move every brick down by `brick_speed * dt`, oldest first.
///
/// The first brick whose bottom reaches the paddle's top ends the pass: it and
/// every brick after it stay in the registry untouched (later bricks are not
/// moved or culled this frame). Bricks whose top is below the floor are removed.
pub fn descend_bricks(state: &mut GameState, dt: f32) -> DescentOutcome {
    let drop = state.tuning.brick_speed * dt;
    let paddle_top = state.paddle.top();
    let mut outcome = DescentOutcome::default();

    let mut i = 0;
    while i < state.bricks.len() {
        let brick = &mut state.bricks[i];
        brick.pos.y -= drop;

        if brick.bottom() <= paddle_top {
            outcome.reached_paddle = true;
            break;
        }

        if brick.top() < 0.0 {
            state.bricks.remove(i);
            outcome.culled += 1;
        } else {
            i += 1;
        }
    }

    if outcome.culled > 0 {
        log::debug!("Culled {} bricks below the floor", outcome.culled);
    }
    outcome
}

/// Rescale the ball velocity to `target` speed, preserving direction.
///
/// A ball slower than `min_speed` is relaunched straight up. Returns true when
/// that relaunch happened.
pub fn normalize_ball_speed(ball: &mut Ball, target: f32, min_speed: f32) -> bool {
    let speed = ball.speed();
    if speed < min_speed {
        ball.vel = Vec2::new(0.0, target);
        return true;
    }
    ball.vel *= target / speed;
    false
}
