//! Render adapter boundary
//!
//! The sim never draws. Each frame the driver hands the current state to a
//! `RenderBackend`, which owns textures, windows, and fallbacks. A backend
//! that cannot load an asset substitutes a solid-color rect; that decision
//! never reaches the simulation.

use crate::sim::{Rect, SimState};

/// Drawing primitives a backend must provide.
///
/// One background, one call per wall, one rotated player, then present.
/// `angle_deg` rotates the player about its center.
pub trait RenderBackend {
    fn draw_background(&mut self);
    fn draw_wall(&mut self, rect: &Rect);
    fn draw_player(&mut self, rect: &Rect, angle_deg: f32);
    fn present(&mut self);
}

/// Draw one frame in fixed order: background, walls, player, present.
pub fn render_frame(backend: &mut dyn RenderBackend, state: &SimState) {
    backend.draw_background();
    for wall in &state.walls {
        backend.draw_wall(wall);
    }
    backend.draw_player(&state.player.rect, state.player.angle);
    backend.present();
}

/// Backend that draws nothing and counts frames.
///
/// Stands in when no graphical backend is available; draw calls are traced
/// at debug level so the demo loop stays observable.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames_presented: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for HeadlessRenderer {
    fn draw_background(&mut self) {}

    fn draw_wall(&mut self, _rect: &Rect) {}

    fn draw_player(&mut self, rect: &Rect, angle_deg: f32) {
        log::debug!(
            "player at ({:.1}, {:.1}) angle {:.0} deg",
            rect.pos.x,
            rect.pos.y,
            angle_deg
        );
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_H, SCREEN_W};
    use crate::sim::build_level;

    /// Records the call sequence to pin the draw order
    #[derive(Default)]
    struct TraceRenderer {
        calls: Vec<&'static str>,
    }

    impl RenderBackend for TraceRenderer {
        fn draw_background(&mut self) {
            self.calls.push("bg");
        }
        fn draw_wall(&mut self, _rect: &Rect) {
            self.calls.push("wall");
        }
        fn draw_player(&mut self, _rect: &Rect, _angle_deg: f32) {
            self.calls.push("player");
        }
        fn present(&mut self) {
            self.calls.push("present");
        }
    }

    #[test]
    fn test_draw_order() {
        let state = SimState::new(build_level(SCREEN_W, SCREEN_H), SCREEN_W);
        let mut backend = TraceRenderer::default();
        render_frame(&mut backend, &state);

        assert_eq!(backend.calls.first(), Some(&"bg"));
        assert_eq!(backend.calls.last(), Some(&"present"));
        let walls = backend.calls.iter().filter(|c| **c == "wall").count();
        assert_eq!(walls, state.walls.len());
        // Player drawn after every wall
        let player_idx = backend.calls.iter().position(|c| *c == "player").unwrap();
        assert_eq!(player_idx, backend.calls.len() - 2);
    }

    #[test]
    fn test_headless_counts_frames() {
        let state = SimState::new(Vec::new(), SCREEN_W);
        let mut backend = HeadlessRenderer::new();
        render_frame(&mut backend, &state);
        render_frame(&mut backend, &state);
        assert_eq!(backend.frames_presented, 2);
    }
}
