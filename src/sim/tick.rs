//! Per-frame update and phase transitions
//!
//! Splash -> Playing on a tap, Playing -> GameOver when a brick reaches the
//! paddle line, GameOver -> Splash on a tap. Nothing else changes the phase.

use glam::Vec2;

use super::descent::{descend_bricks, normalize_ball_speed};
use super::spawn::spawn_if_due;
use super::state::{GamePhase, GameState};
use crate::effects::Effects;

/// Advance the simulation to `now` (seconds, monotonic)
pub fn update(state: &mut GameState, now: f64, fx: &mut impl Effects) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // First frame after a phase change has no history: zero delta
    let dt = state
        .last_update_time
        .map_or(0.0, |last| (now - last).max(0.0)) as f32;
    state.last_update_time = Some(now);

    spawn_if_due(state, now);

    if descend_bricks(state, dt).reached_paddle {
        end_game(state, fx);
        return;
    }

    let tuning = &state.tuning;
    if normalize_ball_speed(&mut state.ball, tuning.ball_speed, tuning.min_ball_speed) {
        log::debug!("Ball stalled, relaunched upward");
    }
    fx.ball_trail_tick(state.ball.pos);
}

/// Splash -> Playing. Launches the ball straight up.
pub fn start_game(state: &mut GameState, fx: &mut impl Effects) {
    if state.phase != GamePhase::Splash {
        return;
    }
    enter_phase(state, GamePhase::Playing, fx);
}

/// Playing -> GameOver. Stops the ball.
pub fn end_game(state: &mut GameState, fx: &mut impl Effects) {
    if state.phase != GamePhase::Playing {
        return;
    }
    enter_phase(state, GamePhase::GameOver, fx);
}

/// GameOver -> Splash, with a full reset
pub fn return_to_splash(state: &mut GameState, fx: &mut impl Effects) {
    if state.phase != GamePhase::GameOver {
        return;
    }
    enter_phase(state, GamePhase::Splash, fx);
}

fn enter_phase(state: &mut GameState, phase: GamePhase, fx: &mut impl Effects) {
    state.phase = phase;
    state.last_update_time = None;

    match phase {
        GamePhase::Splash => {
            state.reset_objects();
            fx.score_changed(state.score);
        }
        GamePhase::Playing => {
            state.last_brick_time = None;
            state.ball.vel = Vec2::new(0.0, state.tuning.ball_speed);
        }
        GamePhase::GameOver => {
            state.ball.vel = Vec2::ZERO;
            log::info!("Game over: score {}, {} bricks on field", state.score, state.bricks.len());
        }
    }

    log::info!("Phase -> {:?}", phase);
    fx.state_changed(phase);
}
