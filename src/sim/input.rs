//! Per-frame input sampling
//!
//! The platform layer delivers a raw held-key snapshot; the sampler folds it
//! into a `FrameInput` value object once per frame. The sim only ever sees
//! `FrameInput`, which makes replay-based testing trivial: feed a script of
//! snapshots and the outcome is fully determined.

use serde::{Deserialize, Serialize};

use crate::consts::MOVE_SPEED;

/// Held-key state for one frame, as read from the platform layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySnapshot {
    pub left: bool,
    pub right: bool,
    pub flip: bool,
    pub quit: bool,
}

/// Input intent for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal velocity intent: -MOVE_SPEED, 0, or +MOVE_SPEED
    pub move_x: f32,
    /// Gravity flip requested (edge-triggered, once per key-down transition)
    pub flip: bool,
    /// Quit requested; the sim only latches this, the driver decides
    pub quit: bool,
}

/// Folds key snapshots into frame inputs, tracking the flip key edge
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    flip_was_down: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce this frame's input intent from the current held-key state.
    ///
    /// Left and right are checked in that order, so holding both resolves
    /// to the right-intent (last write wins). The flip intent fires only on
    /// the key-down transition, never on hold.
    pub fn sample(&mut self, keys: KeySnapshot) -> FrameInput {
        let mut move_x = 0.0;
        if keys.left {
            move_x = -MOVE_SPEED;
        }
        if keys.right {
            move_x = MOVE_SPEED;
        }

        let flip = keys.flip && !self.flip_was_down;
        self.flip_was_down = keys.flip;

        FrameInput {
            move_x,
            flip,
            quit: keys.quit,
        }
    }
}
