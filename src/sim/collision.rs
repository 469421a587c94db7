//! Collision detection between circles and the ship hull
//!
//! Two predicates cover the whole game: circle-circle for missiles against
//! asteroids, and circle-triangle for asteroids against the ship.

use glam::Vec2;

use crate::tuning::HullTest;

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// The ship's triangular collision shape, in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hull {
    pub vertices: [Vec2; 3],
}

impl Hull {
    /// Whether a circle touches the hull, using the configured edge test
    pub fn struck_by(&self, circle: Circle, test: HullTest) -> bool {
        match test {
            HullTest::Legacy => circle_overlaps_triangle(circle, &self.vertices),
            HullTest::Exact => circle_overlaps_triangle_exact(circle, &self.vertices),
        }
    }
}

/// True when center distance does not exceed the sum of radii
#[inline]
pub fn circles_overlap(a: Circle, b: Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// Circle against triangle edges, classic variant
///
/// The center is projected onto each edge's infinite line. When the foot of
/// the projection leaves the edge's bounding box, x and y are snapped
/// independently: each to the start coordinate if the foot is below it,
/// otherwise to the end coordinate. For some edges that picks a point that
/// is neither endpoint. The game keeps this test as its default so collision
/// timing matches the classic behaviour; see [`circle_overlaps_triangle_exact`].
pub fn circle_overlaps_triangle(circle: Circle, triangle: &[Vec2; 3]) -> bool {
    (0..3).any(|i| {
        let start = triangle[i];
        let end = triangle[(i + 1) % 3];

        let edge = end - start;
        let t = (circle.center - start).dot(edge) / edge.length_squared();
        let mut closest = start + edge * t;

        if !within_segment_bounds(closest, start, end) {
            closest.x = if closest.x < start.x { start.x } else { end.x };
            closest.y = if closest.y < start.y { start.y } else { end.y };
        }

        closest.distance(circle.center) <= circle.radius
    })
}

/// Circle against triangle edges with a true closest point on each segment
pub fn circle_overlaps_triangle_exact(circle: Circle, triangle: &[Vec2; 3]) -> bool {
    (0..3).any(|i| {
        let start = triangle[i];
        let end = triangle[(i + 1) % 3];
        closest_point_on_segment(circle.center, start, end).distance(circle.center)
            <= circle.radius
    })
}

/// Closest point to `p` on the segment `start..end`
pub fn closest_point_on_segment(p: Vec2, start: Vec2, end: Vec2) -> Vec2 {
    let edge = end - start;
    let len_sq = edge.length_squared();
    if len_sq <= f32::EPSILON {
        return start;
    }
    let t = ((p - start).dot(edge) / len_sq).clamp(0.0, 1.0);
    start + edge * t
}

/// Axis-aligned bounding-box containment against a segment's endpoints
#[inline]
fn within_segment_bounds(p: Vec2, start: Vec2, end: Vec2) -> bool {
    let min = start.min(end);
    let max = start.max(end);
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}
