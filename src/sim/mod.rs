//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit per-frame input intent, no direct key reads
//! - Wall-clock dt clamped before integration
//! - Stable wall iteration order (the resolution order is part of the contract)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{clamp_to_bounds, resolve_walls};
pub use input::{FrameInput, InputSampler, KeySnapshot};
pub use level::build_level;
pub use rect::Rect;
pub use state::{GravityDir, Player, SimState};
pub use tick::tick;
