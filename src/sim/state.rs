//! Simulation state and core types
//!
//! The whole world is one player, one wall list, and a gravity sign. All of it
//! is owned by the frame loop and mutated only inside `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which way gravity pulls. The magnitude is constant; only this sign varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityDir {
    #[default]
    Down,
    Up,
}

impl GravityDir {
    /// Signed multiplier applied to the gravity magnitude
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            GravityDir::Down => 1.0,
            GravityDir::Up => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            GravityDir::Down => GravityDir::Up,
            GravityDir::Up => GravityDir::Down,
        }
    }

    /// Display orientation this direction converges toward:
    /// upright (0°) under downward gravity, inverted (180°) under upward.
    #[inline]
    pub fn target_angle(self) -> f32 {
        match self {
            GravityDir::Down => 0.0,
            GravityDir::Up => 180.0,
        }
    }
}

/// The controllable rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position and fixed 40x60 size
    pub rect: Rect,
    /// Velocity (vx overwritten from input each frame, vy integrated)
    pub vel: Vec2,
    /// Current gravity direction
    pub gravity: GravityDir,
    /// Current display angle (degrees, continuous)
    pub angle: f32,
    /// Target display angle (degrees, 0 or 180)
    pub target_angle: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_W, PLAYER_H),
            vel: Vec2::ZERO,
            gravity: GravityDir::Down,
            angle: 0.0,
            target_angle: 0.0,
        }
    }
}

impl Player {
    /// Invert gravity.
    ///
    /// Zeroes vertical velocity unconditionally so no residual speed from the
    /// pre-flip direction carries over, and retargets the rotation animation.
    pub fn flip_gravity(&mut self) {
        self.gravity = self.gravity.flipped();
        self.vel.y = 0.0;
        self.target_angle = self.gravity.target_angle();
        log::info!(
            "Gravity flipped. Now {}, target angle = {} deg",
            match self.gravity {
                GravityDir::Down => "DOWN",
                GravityDir::Up => "UP",
            },
            self.target_angle
        );
    }

    /// Step the display angle toward the target at a fixed rate.
    ///
    /// Rate-limited approach to a setpoint, clamped never to overshoot. The
    /// target only ever takes 0 or 180 and the angle starts at 0, so no
    /// wraparound handling is needed.
    pub fn animate_rotation(&mut self, dt: f32) {
        if self.angle < self.target_angle {
            self.angle += ANGLE_SPEED * dt;
            if self.angle > self.target_angle {
                self.angle = self.target_angle;
            }
        } else if self.angle > self.target_angle {
            self.angle -= ANGLE_SPEED * dt;
            if self.angle < self.target_angle {
                self.angle = self.target_angle;
            }
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub player: Player,
    /// Static level geometry; never mutated after construction
    pub walls: Vec<Rect>,
    /// Horizontal level bounds the player is clamped into
    pub screen_w: f32,
    /// Cleared when quit is requested; the driver checks it each iteration
    pub running: bool,
    /// Frame counter
    pub frame: u64,
}

impl SimState {
    pub fn new(walls: Vec<Rect>, screen_w: f32) -> Self {
        Self {
            player: Player::default(),
            walls,
            screen_w,
            running: true,
            frame: 0,
        }
    }
}
