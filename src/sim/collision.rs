//! Collision detection and response for axis-aligned geometry
//!
//! Bricks use the precise circle-vs-rectangle test. The paddle uses a looser
//! box-vs-box proxy so edge hits feel forgiving.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Closest point on (or in) the rectangle to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x, self.right()),
            point.y.clamp(self.y, self.bottom()),
        )
    }
}

/// Surface orientation a ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right faces and side walls: flips horizontal speed
    Vertical,
    /// Top/bottom faces, ceiling and paddle: flips vertical speed
    Horizontal,
}

/// Check whether a circle overlaps a rectangle
///
/// The closest point on the rectangle to the circle center is compared
/// against the radius using squared distances. Grazing contact (distance
/// exactly equal to the radius) is not a hit.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Box-vs-box proxy for ball/paddle contact
///
/// The ball's horizontal extent must strictly overlap the paddle, and the
/// ball's bottom edge must have reached the paddle's top edge.
pub fn ball_overlaps_paddle(center: Vec2, radius: f32, paddle: &Rect) -> bool {
    center.x + radius > paddle.x
        && center.x - radius < paddle.right()
        && center.y + radius >= paddle.y
}

/// Reflect velocity off a surface by negating exactly one component
#[inline]
pub fn reflect(velocity: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::Vertical => Vec2::new(-velocity.x, velocity.y),
        Axis::Horizontal => Vec2::new(velocity.x, -velocity.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brick() -> Rect {
        Rect::new(100.0, 50.0, 50.0, 20.0)
    }

    #[test]
    fn test_circle_hits_face() {
        // Center 5px above the top face, radius 7
        assert!(circle_intersects_rect(Vec2::new(125.0, 45.0), 7.0, &brick()));
        // Center 5px left of the left face
        assert!(circle_intersects_rect(Vec2::new(95.0, 60.0), 7.0, &brick()));
    }

    #[test]
    fn test_circle_grazing_edge_is_miss() {
        // Exactly one radius above the top face
        assert!(!circle_intersects_rect(Vec2::new(125.0, 43.0), 7.0, &brick()));
    }

    #[test]
    fn test_circle_corner() {
        // 4,4 from the top-left corner: distance ~5.66 < 7
        assert!(circle_intersects_rect(Vec2::new(96.0, 46.0), 7.0, &brick()));
        // 5,5 from the corner: distance ~7.07 > 7, even though the
        // bounding boxes overlap
        assert!(!circle_intersects_rect(Vec2::new(95.0, 45.0), 7.0, &brick()));
    }

    #[test]
    fn test_center_inside_is_hit() {
        assert!(circle_intersects_rect(brick().center(), 1.0, &brick()));
    }

    #[test]
    fn test_paddle_proxy_is_looser_than_circle() {
        let paddle = Rect::new(175.0, 300.0, 100.0, 10.0);
        // Ball diagonally off the paddle's corner: the box proxy accepts it,
        // the precise test does not.
        let center = Vec2::new(170.0, 295.0);
        assert!(ball_overlaps_paddle(center, 7.0, &paddle));
        assert!(!circle_intersects_rect(center, 7.0, &paddle));
    }

    #[test]
    fn test_paddle_proxy_requires_x_overlap() {
        let paddle = Rect::new(175.0, 300.0, 100.0, 10.0);
        // Touching the left edge exactly is not an overlap
        assert!(!ball_overlaps_paddle(Vec2::new(168.0, 296.0), 7.0, &paddle));
        // Bottom edge has not reached the paddle yet
        assert!(!ball_overlaps_paddle(Vec2::new(200.0, 290.0), 7.0, &paddle));
        // Bottom edge exactly on the paddle top counts
        assert!(ball_overlaps_paddle(Vec2::new(200.0, 293.0), 7.0, &paddle));
    }

    #[test]
    fn test_reflect_single_axis() {
        let v = Vec2::new(2.0, -3.0);
        assert_eq!(reflect(v, Axis::Vertical), Vec2::new(-2.0, -3.0));
        assert_eq!(reflect(v, Axis::Horizontal), Vec2::new(2.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_center_inside_rect_always_hits(
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
            radius in 0.5f32..20.0,
        ) {
            let rect = brick();
            let center = Vec2::new(rect.x + fx * rect.width, rect.y + fy * rect.height);
            prop_assert!(circle_intersects_rect(center, radius, &rect));
        }

        #[test]
        fn prop_far_circle_never_hits(
            angle in 0.0f32..std::f32::consts::TAU,
            radius in 0.5f32..20.0,
        ) {
            let rect = brick();
            // Further than the rect's half-diagonal plus the radius
            let reach = rect.center().distance(Vec2::new(rect.x, rect.y)) + radius + 1.0;
            let center = rect.center() + Vec2::new(angle.cos(), angle.sin()) * reach;
            prop_assert!(!circle_intersects_rect(center, radius, &rect));
        }

        #[test]
        fn prop_hit_implies_paddle_proxy_hit_when_above(
            x in 80.0f32..170.0,
            y in 30.0f32..60.0,
            radius in 1.0f32..15.0,
        ) {
            // Any precise hit from above is also accepted by the box proxy
            let rect = brick();
            let center = Vec2::new(x, y);
            if circle_intersects_rect(center, radius, &rect) && center.y <= rect.y {
                prop_assert!(ball_overlaps_paddle(center, radius, &rect));
            }
        }

        #[test]
        fn prop_reflect_twice_is_identity(vx in -50.0f32..50.0, vy in -50.0f32..50.0) {
            let v = Vec2::new(vx, vy);
            prop_assert_eq!(reflect(reflect(v, Axis::Vertical), Axis::Vertical), v);
            prop_assert_eq!(reflect(reflect(v, Axis::Horizontal), Axis::Horizontal), v);
        }
    }
}
