//! Collision detection for circles and regular polygons.
//!
//! The tricky part of Shape Scramble: deciding whether a circle overlaps a
//! polygon exactly, without a physics engine. The polygon is fanned into
//! triangles against the circle center and the swept circle sectors are
//! subtracted back out; the result matches the polygon's own area only when
//! the center lies inside. Vertex proximity covers the edge cases the area
//! comparison misses.
//!
//! Every function here is pure and state-free. The exact test is O(vertex
//! count) in trig and square roots, so callers are expected to discard
//! clearly-disjoint pairs with the AABB pre-filter first;
//! [`circle_hits_polygon`] composes both.

use crate::math::{Matrix, Vector2};

use super::shape::{Circle, Polygon};

/// Slack applied to the triangulated-area comparison. The accumulated
/// triangle and sector areas carry a small float inaccuracy, so the test
/// accepts a narrow band around the true area instead of exact equality.
const AREA_EPSILON: f64 = 1e-8;

/// True iff two circles touch or overlap.
pub fn circle_circle(c1: Vector2, r1: f64, c2: Vector2, r2: f64) -> bool {
    (c1 - c2).magnitude() <= r1 + r2
}

/// Area of the triangle (p1, p2, p3) by Heron's formula.
pub fn triangle_area(p1: Vector2, p2: Vector2, p3: Vector2) -> f64 {
    let a = (p1 - p2).magnitude();
    let b = (p2 - p3).magnitude();
    let c = (p1 - p3).magnitude();
    let s = (a + b + c) / 2.0;
    // Round-off can push a degenerate triangle's product slightly negative
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

/// The angle between two vectors, in degrees.
pub fn angle_between_degrees(v1: Vector2, v2: Vector2) -> f64 {
    let cos = (v1.dot(v2) / (v1.magnitude() * v2.magnitude())).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Area of the triangle (p1, p2, center) together with the circle sector
/// swept between the two edge endpoints as seen from the circle center.
fn triangle_and_sector(p1: Vector2, p2: Vector2, center: Vector2, radius: f64) -> (f64, f64) {
    let area = triangle_area(p1, p2, center);
    let angle = angle_between_degrees(p2 - center, p1 - center);
    let sector = angle / 360.0 * std::f64::consts::PI * radius * radius;
    (area, sector)
}

/// Exact circle/polygon overlap test via triangulated sector-area
/// comparison.
///
/// `points` is the polygon's vertex matrix (one 2D row per vertex in
/// angular order) and `polygon_area` its true area. Assumes an AABB
/// pre-filter has already rejected clearly-disjoint pairs; without it, the
/// area comparison can report overlap for large, distant circles.
pub fn circle_polygon(center: Vector2, radius: f64, points: &Matrix, polygon_area: f64) -> bool {
    let n = points.num_rows();
    let mut test_area = 0.0;
    let mut sector_area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let (tri, sector) =
            triangle_and_sector(row_point(points, i), row_point(points, j), center, radius);
        test_area += tri;
        sector_area += sector;
    }
    // Subtracting the sectors measures against the circle's edge rather
    // than its center; the remainder matches the polygon area only when the
    // center is inside.
    let test_area = test_area - sector_area;
    if test_area - AREA_EPSILON <= polygon_area + AREA_EPSILON {
        return true;
    }
    // The area test cannot see a circle that only clips a vertex
    (0..n).any(|i| circle_circle(center, radius, row_point(points, i), 0.0))
}

/// AABB-prefiltered exact test between a circle and a polygon.
///
/// Axis-aligned squares short-circuit on box overlap: their bounding box IS
/// the shape, so the box test is already exact and the expensive polygon
/// test is skipped. The polygon's area is computed lazily on first use.
pub fn circle_hits_polygon(circle: &Circle, polygon: &mut Polygon) -> bool {
    if !circle.aabb().intersects(&polygon.aabb()) {
        return false;
    }
    if polygon.sides() == 4 {
        return true;
    }
    let area = polygon.area();
    circle_polygon(circle.center, circle.radius, polygon.points(), area)
}

fn row_point(points: &Matrix, i: usize) -> Vector2 {
    let row = points.row(i);
    Vector2::new(row[0], row[1])
}
