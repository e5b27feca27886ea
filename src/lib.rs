//! Flip Man - a gravity-flip platformer demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input intent, physics, collisions, rotation)
//! - `platform`: Frame clock and input source abstraction
//! - `render`: Render adapter boundary (the sim never draws)
//! - `settings`: Screen/asset configuration loaded from JSON

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_W: f32 = 800.0;
    pub const SCREEN_H: f32 = 600.0;

    /// Player rectangle size (fixed at creation, never changes)
    pub const PLAYER_W: f32 = 40.0;
    pub const PLAYER_H: f32 = 60.0;
    /// Player spawn position
    pub const PLAYER_START_X: f32 = 380.0;
    pub const PLAYER_START_Y: f32 = 520.0;

    /// Gravity magnitude (pixels/s²); only its sign ever changes
    pub const GRAVITY: f32 = 900.0;
    /// Horizontal move speed (pixels/s), set directly from input each frame
    pub const MOVE_SPEED: f32 = 240.0;
    /// Rotation rate toward the target angle (degrees/s)
    pub const ANGLE_SPEED: f32 = 720.0;

    /// Upper bound on a single integration step (seconds).
    /// A stalled frame never advances the sim by more than this.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Wall tile size for the floor and ceiling rows
    pub const TILE_W: f32 = 64.0;
    pub const TILE_H: f32 = 40.0;
}
