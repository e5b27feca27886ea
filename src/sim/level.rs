//! Static level geometry
//!
//! Built once at startup and read-only thereafter. The returned order matters:
//! the collision pass tests walls in sequence against the player's current,
//! possibly already-corrected position, so reordering changes outcomes.

use super::rect::Rect;
use crate::consts::{TILE_H, TILE_W};

/// Build the wall set: floor row, ceiling row, then two platforms.
pub fn build_level(screen_w: f32, screen_h: f32) -> Vec<Rect> {
    let mut walls = Vec::new();

    // Floor (bottom of screen)
    let mut x = 0.0;
    while x < screen_w {
        walls.push(Rect::new(x, screen_h - TILE_H, TILE_W, TILE_H));
        x += TILE_W;
    }

    // Ceiling (top of screen)
    let mut x = 0.0;
    while x < screen_w {
        walls.push(Rect::new(x, 0.0, TILE_W, TILE_H));
        x += TILE_W;
    }

    // Platforms (middle of level)
    walls.push(Rect::new(200.0, screen_h - 160.0, 128.0, 32.0));
    walls.push(Rect::new(500.0, screen_h - 260.0, 128.0, 32.0));

    walls
}
