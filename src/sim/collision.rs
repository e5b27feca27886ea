//! Collision detection and resolution
//!
//! One ordered pass over the walls per frame. Each wall is tested against the
//! player's current rect, which earlier walls in the same pass may already
//! have corrected; resolving one wall can change which later walls still
//! intersect. That sequencing is load-bearing: do not parallelize the pass,
//! reorder the walls, or exit early.

use glam::Vec2;

use super::rect::Rect;

/// Resolve the player against every wall in order.
///
/// `prev` is the player's position before this frame's move; it disambiguates
/// which side the player came from. On intersection, the penetration depth is
/// computed on both axes and the shallower axis is resolved; an exact tie
/// resolves horizontally.
///
/// Vertical resolution snaps only when y actually changed this frame. A purely
/// horizontal approach that still registers a smaller vertical overlap leaves
/// the player uncorrected - a known quirk of the strict inequality on y that
/// is deliberately kept (see the quirk test below).
pub fn resolve_walls(rect: &mut Rect, vel: &mut Vec2, prev: Vec2, walls: &[Rect]) {
    for wall in walls {
        if !rect.intersects(wall) {
            continue;
        }

        let overlap_left = rect.right() - wall.left();
        let overlap_right = wall.right() - rect.left();
        let overlap_top = rect.bottom() - wall.top();
        let overlap_bottom = wall.bottom() - rect.top();

        let min_horiz = overlap_left.min(overlap_right);
        let min_vert = overlap_top.min(overlap_bottom);

        if min_vert < min_horiz {
            // Resolve vertically based on movement direction
            if rect.pos.y > prev.y {
                // Moved down into the wall: snap to its top
                rect.pos.y = wall.top() - rect.size.y;
                vel.y = 0.0;
            } else if rect.pos.y < prev.y {
                // Moved up into the wall: snap to its bottom
                rect.pos.y = wall.bottom();
                vel.y = 0.0;
            }
        } else {
            // Resolve horizontally
            if rect.pos.x > prev.x {
                rect.pos.x = wall.left() - rect.size.x;
            } else if rect.pos.x < prev.x {
                rect.pos.x = wall.right();
            }
            vel.x = 0.0;
        }
    }
}

/// Hard screen boundary, applied after the wall pass regardless of collisions
pub fn clamp_to_bounds(rect: &mut Rect, screen_w: f32) {
    if rect.pos.x < 0.0 {
        rect.pos.x = 0.0;
    }
    if rect.right() > screen_w {
        rect.pos.x = screen_w - rect.size.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 40.0, 60.0)
    }

    #[test]
    fn test_landing_snaps_to_wall_top() {
        // Player fell downward into a floor tile
        let mut rect = player_at(100.0, 510.0);
        let mut vel = Vec2::new(0.0, 300.0);
        let prev = Vec2::new(100.0, 490.0);
        let wall = Rect::new(0.0, 560.0, 800.0, 40.0);

        // Not yet intersecting; move it in like the integrator would
        rect.pos.y = 505.0;
        assert!(!rect.intersects(&wall));
        rect.pos.y = 515.0;
        assert!(rect.intersects(&wall));

        resolve_walls(&mut rect, &mut vel, prev, &[wall]);
        assert_eq!(rect.pos.y, 500.0); // wall top - player height
        assert_eq!(vel.y, 0.0);
        assert!(!rect.intersects(&wall));
    }

    #[test]
    fn test_ceiling_hit_snaps_to_wall_bottom() {
        let wall = Rect::new(0.0, 0.0, 800.0, 40.0);
        let mut rect = player_at(100.0, 35.0);
        let mut vel = Vec2::new(0.0, -200.0);
        let prev = Vec2::new(100.0, 50.0);

        resolve_walls(&mut rect, &mut vel, prev, &[wall]);
        assert_eq!(rect.pos.y, 40.0);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_horizontal_push_right_moving_left() {
        let wall = Rect::new(200.0, 400.0, 128.0, 132.0);
        // Barely into the wall's right edge, moving left
        let mut rect = player_at(320.0, 430.0);
        let mut vel = Vec2::new(-240.0, 0.0);
        let prev = Vec2::new(335.0, 430.0);

        resolve_walls(&mut rect, &mut vel, prev, &[wall]);
        assert_eq!(rect.pos.x, 328.0); // wall right edge
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_horizontal_push_left_moving_right() {
        let wall = Rect::new(200.0, 400.0, 128.0, 132.0);
        let mut rect = player_at(165.0, 430.0);
        let mut vel = Vec2::new(240.0, 0.0);
        let prev = Vec2::new(150.0, 430.0);

        resolve_walls(&mut rect, &mut vel, prev, &[wall]);
        assert_eq!(rect.pos.x, 160.0); // wall left - player width
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_exact_tie_resolves_horizontally() {
        // Equal penetration on both axes must take the horizontal branch
        let wall = Rect::new(100.0, 100.0, 100.0, 100.0);
        let mut rect = Rect::new(90.0, 90.0, 20.0, 20.0);
        let mut vel = Vec2::new(50.0, 50.0);
        let prev = Vec2::new(85.0, 90.0);

        resolve_walls(&mut rect, &mut vel, prev, &[wall]);
        assert_eq!(rect.pos.x, 80.0);
        assert_eq!(vel.x, 0.0);
        // Vertical state untouched
        assert_eq!(rect.pos.y, 90.0);
        assert_eq!(vel.y, 50.0);
    }

    /// Known quirk: vertical-axis resolution with unchanged y applies no
    /// correction at all. A purely horizontal approach that registers a
    /// smaller vertical overlap leaves the player interpenetrating. This is
    /// an artifact of the strict inequality on y and must stay as-is.
    #[test]
    fn test_quirk_unchanged_y_leaves_player_uncorrected() {
        let wall = Rect::new(90.0, 155.0, 200.0, 40.0);
        let mut rect = player_at(100.0, 100.0);
        let mut vel = Vec2::new(240.0, 120.0);
        let prev = Vec2::new(95.0, 100.0); // x moved, y did not

        // min_vert (5) < min_horiz (50): vertical axis chosen
        resolve_walls(&mut rect, &mut vel, prev, &[wall]);
        assert_eq!(rect.pos, Vec2::new(100.0, 100.0));
        assert_eq!(vel, Vec2::new(240.0, 120.0));
        assert!(rect.intersects(&wall));
    }

    #[test]
    fn test_sequential_pass_uses_corrected_position() {
        // Two overlapping floor tiles: after the first snap the player no
        // longer intersects the second, so only one correction applies.
        let walls = [
            Rect::new(0.0, 560.0, 64.0, 40.0),
            Rect::new(30.0, 560.0, 64.0, 40.0),
        ];
        let mut rect = player_at(20.0, 510.0);
        let mut vel = Vec2::new(0.0, 250.0);
        let prev = Vec2::new(20.0, 500.0);

        resolve_walls(&mut rect, &mut vel, prev, &walls);
        assert_eq!(rect.pos.y, 500.0);
        assert_eq!(vel.y, 0.0);
        for wall in &walls {
            assert!(!rect.intersects(wall));
        }
    }

    #[test]
    fn test_screen_clamp() {
        let mut rect = player_at(-50.0, 300.0);
        clamp_to_bounds(&mut rect, 800.0);
        assert_eq!(rect.pos.x, 0.0);

        let mut rect = player_at(900.0, 300.0);
        clamp_to_bounds(&mut rect, 800.0);
        assert_eq!(rect.pos.x, 760.0);

        let mut rect = player_at(380.0, 300.0);
        clamp_to_bounds(&mut rect, 800.0);
        assert_eq!(rect.pos.x, 380.0);
    }
}
