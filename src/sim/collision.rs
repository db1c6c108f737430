//! Collision detection for the two arcade modes
//!
//! Pure predicates over circles, axis-aligned rectangles, and pipe columns.
//! Detection never mutates entities; response (bounces, damage, scoring) is
//! the tick's responsibility.
//!
//! Boundary policy: rectangle and pipe overlap tests are inclusive at exact
//! contact (touching counts as a hit), keeping behavior deterministic at
//! pixel-perfect boundaries. Circle-circle uses strict `<` - two circles
//! whose edges exactly touch do not collide.

use glam::Vec2;

use super::state::{Pipe, Rect};

/// Result of a circle-vs-rectangle check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Axis-aligned surface normal pointing away from the rectangle (if hit)
    pub normal: Vec2,
    /// Overlap depth along the normal (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circle-vs-circle intersection (actor vs. target).
///
/// True iff the center distance is strictly less than the radius sum.
#[inline]
pub fn circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> bool {
    c0.distance_squared(c1) < (r0 + r1) * (r0 + r1)
}

/// Circle-vs-rectangle overlap (actor vs. block).
///
/// Compares the circle's bounding extremes against the rectangle edges on
/// both axes. On a hit, the normal is the axis of minimum separation so the
/// caller can push the circle back out.
pub fn circle_rect(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    let overlaps = center.x + radius >= rect.left()
        && center.x - radius <= rect.right()
        && center.y + radius >= rect.top()
        && center.y - radius <= rect.bottom();
    if !overlaps {
        return CollisionResult::miss();
    }

    // Depth past each edge; the smallest is the cheapest way out.
    let depths = [
        (center.x + radius - rect.left(), Vec2::new(-1.0, 0.0)),
        (rect.right() - (center.x - radius), Vec2::new(1.0, 0.0)),
        (center.y + radius - rect.top(), Vec2::new(0.0, -1.0)),
        (rect.bottom() - (center.y - radius), Vec2::new(0.0, 1.0)),
    ];
    let (penetration, normal) = depths
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((0.0, Vec2::ZERO));

    CollisionResult {
        hit: true,
        normal,
        penetration,
    }
}

/// Actor-vs-pipe test (runner mode).
///
/// The actor collides while horizontally overlapping the pipe column AND
/// either poking above the gap top or below the gap bottom. Contact at or
/// below the ground line is left to the ground check.
pub fn actor_hits_pipe(
    center: Vec2,
    radius: f32,
    pipe: &Pipe,
    pipe_width: f32,
    ground_y: f32,
) -> bool {
    if center.x + radius < pipe.x || center.x - radius > pipe.x + pipe_width {
        return false;
    }

    let hit_top = center.y - radius <= pipe.top_height;
    let gap_bottom = pipe.top_height + pipe.gap;
    let hit_bottom = center.y + radius >= gap_bottom && center.y + radius < ground_y;

    hit_top || hit_bottom
}

/// Reflect velocity off a surface: `v' = v - 2(v.n)n`
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_circle_overlap() {
        assert!(circle_circle(
            Vec2::new(0.0, 0.0),
            15.0,
            Vec2::new(20.0, 0.0),
            18.0
        ));
        assert!(!circle_circle(
            Vec2::new(0.0, 0.0),
            15.0,
            Vec2::new(100.0, 0.0),
            18.0
        ));
    }

    #[test]
    fn test_circle_circle_exact_touch_is_miss() {
        // distance == r0 + r1: strict inequality, no hit
        assert!(!circle_circle(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(25.0, 0.0),
            15.0
        ));
        // A hair closer hits
        assert!(circle_circle(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(24.99, 0.0),
            15.0
        ));
    }

    #[test]
    fn test_circle_rect_overlap_and_miss() {
        let rect = Rect::new(100.0, 100.0, 30.0, 20.0);

        let result = circle_rect(Vec2::new(95.0, 110.0), 15.0, &rect);
        assert!(result.hit);

        let result = circle_rect(Vec2::new(0.0, 0.0), 15.0, &rect);
        assert!(!result.hit);
    }

    #[test]
    fn test_circle_rect_exact_touch_is_hit() {
        let rect = Rect::new(100.0, 100.0, 30.0, 20.0);

        // Circle's right extreme exactly on the left edge
        let result = circle_rect(Vec2::new(85.0, 110.0), 15.0, &rect);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(result.penetration, 0.0);
    }

    #[test]
    fn test_circle_rect_normal_picks_shallowest_axis() {
        let rect = Rect::new(100.0, 100.0, 30.0, 20.0);

        // Approaching from above: vertical overlap is shallowest
        let result = circle_rect(Vec2::new(115.0, 88.0), 15.0, &rect);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(0.0, -1.0));
        assert!((result.penetration - 3.0).abs() < 1e-4);

        // Approaching from the right
        let result = circle_rect(Vec2::new(142.0, 110.0), 15.0, &rect);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_pipe_miss_when_not_in_column() {
        let pipe = Pipe::new(200.0, 150.0, 150.0);
        // Left of the column
        assert!(!actor_hits_pipe(Vec2::new(100.0, 250.0), 15.0, &pipe, 50.0, 450.0));
        // Right of the column
        assert!(!actor_hits_pipe(Vec2::new(300.0, 250.0), 15.0, &pipe, 50.0, 450.0));
    }

    #[test]
    fn test_pipe_safe_inside_gap() {
        let pipe = Pipe::new(200.0, 150.0, 150.0);
        // Centered in the gap (150..300), radius clear of both halves
        assert!(!actor_hits_pipe(Vec2::new(225.0, 225.0), 15.0, &pipe, 50.0, 450.0));
    }

    #[test]
    fn test_pipe_hits_top_and_bottom_halves() {
        let pipe = Pipe::new(200.0, 150.0, 150.0);
        // Poking into the top half
        assert!(actor_hits_pipe(Vec2::new(225.0, 160.0), 15.0, &pipe, 50.0, 450.0));
        // Poking into the bottom half (gap bottom at 300)
        assert!(actor_hits_pipe(Vec2::new(225.0, 290.0), 15.0, &pipe, 50.0, 450.0));
    }

    #[test]
    fn test_pipe_column_touch_is_hit() {
        let pipe = Pipe::new(200.0, 150.0, 150.0);
        // Actor's right extreme exactly on the pipe's left edge, inside the
        // top half vertically
        assert!(actor_hits_pipe(Vec2::new(185.0, 100.0), 15.0, &pipe, 50.0, 450.0));
    }

    #[test]
    fn test_pipe_below_ground_is_not_a_pipe_hit() {
        let pipe = Pipe::new(200.0, 150.0, 150.0);
        // Bottom extreme at the ground line: ground collision, not pipe
        assert!(!actor_hits_pipe(Vec2::new(225.0, 435.0), 15.0, &pipe, 50.0, 450.0));
    }

    #[test]
    fn test_reflect_off_vertical_wall() {
        let reflected = reflect(Vec2::new(100.0, 40.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 1e-4);
        assert!((reflected.y - 40.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_circle_circle_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 0.1f32..50.0, rb in 0.1f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circle_circle(a, ra, b, rb), circle_circle(b, rb, a, ra));
        }

        #[test]
        fn prop_reflect_preserves_speed(
            vx in -400.0f32..400.0, vy in -400.0f32..400.0,
        ) {
            let v = Vec2::new(vx, vy);
            for normal in [Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, -1.0)] {
                let r = reflect(v, normal);
                prop_assert!((r.length() - v.length()).abs() < 1e-3);
            }
        }
    }
}
