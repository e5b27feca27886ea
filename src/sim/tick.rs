//! Per-frame simulation step
//!
//! One synchronous pass per rendered frame: fold in the input intent,
//! integrate, resolve collisions, clamp to the screen, animate the flip
//! rotation. Strictly single-threaded; the state is owned by the frame loop.

use super::collision::{clamp_to_bounds, resolve_walls};
use super::input::FrameInput;
use super::state::SimState;
use crate::consts::{GRAVITY, MAX_FRAME_DT};

/// Advance the simulation by one frame.
///
/// `dt` is wall-clock elapsed seconds since the previous frame; it is clamped
/// to `MAX_FRAME_DT` so a stalled frame never integrates more than 50 ms.
/// A quit request only clears `running` - the frame still simulates and the
/// driver exits at the next iteration boundary.
pub fn tick(state: &mut SimState, input: &FrameInput, dt: f32) {
    if input.quit {
        state.running = false;
    }

    let dt = dt.min(MAX_FRAME_DT);

    if input.flip {
        state.player.flip_gravity();
    }

    // Horizontal velocity is set, not accumulated: instant response, no inertia
    state.player.vel.x = input.move_x;

    // Semi-implicit Euler: velocity first, then position
    state.player.vel.y += GRAVITY * state.player.gravity.sign() * dt;

    // Pre-move position disambiguates collision direction
    let prev = state.player.rect.pos;
    let step = state.player.vel * dt;
    state.player.rect.pos += step;

    resolve_walls(
        &mut state.player.rect,
        &mut state.player.vel,
        prev,
        &state.walls,
    );
    clamp_to_bounds(&mut state.player.rect, state.screen_w);

    state.player.animate_rotation(dt);

    state.frame += 1;
}
