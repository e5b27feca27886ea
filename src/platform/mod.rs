//! Platform abstraction layer
//!
//! Handles what the sim must not know about:
//! - Wall-clock frame timing
//! - Where key state comes from
//!
//! The sim consumes plain `KeySnapshot` values and an elapsed-seconds number;
//! any windowing backend that can produce those two things can drive it. The
//! scripted source here drives the headless demo and replay tests.

use std::time::Instant;

use crate::sim::KeySnapshot;

/// Monotonic per-frame elapsed-time query.
///
/// Returns raw elapsed seconds; the sim applies its own clamp, so a long
/// stall shows up here as a large value and is bounded inside `tick`.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction)
    pub fn frame_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can report held-key state once per frame
pub trait InputSource {
    fn poll(&mut self) -> KeySnapshot;
}

/// A pre-recorded key script, one snapshot per frame.
///
/// Past the end of the script it reports the quit key held, so a finite
/// script always terminates the frame loop.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: Vec<KeySnapshot>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<KeySnapshot>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// The demo script: run right onto the first platform, flip to the
    /// ceiling, run back left, flip down again, then quit.
    pub fn demo() -> Self {
        let mut frames = Vec::new();
        let hold = |frames: &mut Vec<KeySnapshot>, keys: KeySnapshot, n: usize| {
            frames.extend(std::iter::repeat_n(keys, n));
        };

        let idle = KeySnapshot::default();
        let right = KeySnapshot {
            right: true,
            ..idle
        };
        let left = KeySnapshot { left: true, ..idle };
        let flip = KeySnapshot { flip: true, ..idle };

        hold(&mut frames, idle, 30);
        hold(&mut frames, right, 90);
        hold(&mut frames, flip, 1);
        hold(&mut frames, idle, 90);
        hold(&mut frames, left, 120);
        hold(&mut frames, flip, 1);
        hold(&mut frames, idle, 90);
        Self::new(frames)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> KeySnapshot {
        match self.frames.get(self.cursor) {
            Some(keys) => {
                self.cursor += 1;
                *keys
            }
            None => KeySnapshot {
                quit: true,
                ..Default::default()
            },
        }
    }
}
