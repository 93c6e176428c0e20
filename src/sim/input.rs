//! Pointer / touch input
//!
//! One contact point per event, in playfield coordinates.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::tick::{return_to_splash, start_game};
use crate::effects::Effects;

/// A touch began
pub fn touch_down(state: &mut GameState, pos: Vec2, fx: &mut impl Effects) {
    match state.phase {
        GamePhase::Splash => start_game(state, fx),
        GamePhase::GameOver => return_to_splash(state, fx),
        GamePhase::Playing => move_paddle(state, pos),
    }
}

/// A touch moved. Only steers the paddle during play.
pub fn touch_move(state: &mut GameState, pos: Vec2) {
    if state.phase == GamePhase::Playing {
        move_paddle(state, pos);
    }
}

fn move_paddle(state: &mut GameState, pos: Vec2) {
    if !pos.x.is_finite() {
        return;
    }
    let width = state.playfield.x;
    state.paddle.move_to(pos.x, width);
}
