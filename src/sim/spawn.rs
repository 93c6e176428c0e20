//! Brick rows
//!
//! A new row appears at the top edge every `spawn_interval` seconds. At most
//! one row is added per frame; time missed during a long frame is not made up.

use glam::Vec2;

use super::state::{Brick, GameState};

/// Spawn a row if the interval has elapsed. Returns true if a row was added.
pub fn spawn_if_due(state: &mut GameState, now: f64) -> bool {
    let due = match state.last_brick_time {
        None => true,
        Some(last) => now - last >= state.tuning.spawn_interval(),
    };
    if !due {
        return false;
    }

    add_row(state);
    state.last_brick_time = Some(now);
    true
}

/// Add one full row of bricks spanning the playfield, top edge flush with the top
pub fn add_row(state: &mut GameState) {
    let width = state.brick_width();
    let height = state.tuning.brick_height;
    let y = state.playfield.y - height / 2.0;

    for col in 0..state.tuning.columns {
        let id = state.next_brick_id();
        let tint = state.next_tint();
        state.bricks.push(Brick {
            id,
            pos: Vec2::new(width * (col as f32 + 0.5), y),
            size: Vec2::new(width, height),
            tint,
        });
    }
    log::debug!("Spawned row of {} bricks ({} live)", state.tuning.columns, state.bricks.len());
}
