//! Bounding shapes for game entities.
//!
//! A shape is either a circle or a regular polygon. Polygons own their
//! vertex positions as a point matrix (one row per vertex, counter-clockwise
//! from angle 0) and move by rigid translation through the homogeneous
//! pipeline; they are only rebuilt on discrete events (spawn, hit-reaction
//! reshape), never per frame.

use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

use super::collision;
use crate::math::{matrix, Matrix, MathResult, Vector2, VectorN};

/// An axis-aligned bounding box, used as a cheap pre-filter before exact
/// collision tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// True iff the two rectangles overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// A circle with its center in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The square box centered on the circle with side `2 * radius`.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// A regular polygon: `sides` vertices evenly spaced by angle around the
/// center at distance `radius`.
///
/// Four-sided polygons are a special case: the raw diamond is rotated 45
/// degrees at construction time so squares sit axis-aligned, after which
/// `radius` is redefined as half the side length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    center: Vector2,
    radius: f64,
    sides: u32,
    points: Matrix,
    area: Option<f64>,
    aabb: Aabb,
}

impl Polygon {
    /// Build a regular polygon. Vertex i sits at `(360 / sides) * i` degrees
    /// from the center (counter-clockwise on screen, inverted-y polar
    /// convention).
    pub fn regular(center: Vector2, sides: u32, radius: f64) -> MathResult<Self> {
        let step = 360.0 / f64::from(sides);
        let rows = (0..sides)
            .map(|i| {
                let vertex = center + Vector2::from_polar(radius, step * f64::from(i), true);
                VectorN::from(vertex)
            })
            .collect();
        let mut points = Matrix::from_rows(rows)?;
        let mut center = center;
        let mut radius = radius;

        if sides == 4 {
            // Rotate the diamond 45 degrees about vertex 1 so the square
            // sits axis-aligned: homogenize, move the pivot to the origin,
            // rotate, move back, project the homogeneous coordinate out.
            let pivot = points.row(1).to_vector2()?;
            let t = matrix::translate(3, &[-pivot.x, -pivot.y]);
            let r = embed_rotation(45.0)?;
            points = matrix::homogeneous(&points)
                .multiply(&t)?
                .multiply(&r)?
                .multiply(&t.inverse()?)?
                .multiply(&matrix::project(2))?;

            // The rotation moves the centroid; radius becomes half the new
            // side length and the center is re-derived from the top-left
            // vertex.
            let half_side = (radius * 2.0) / SQRT_2 / 2.0;
            radius = half_side;
            center = points.row(1).to_vector2()? + Vector2::new(half_side, half_side);
        }

        let aabb = compute_aabb(center, radius, sides, &points);
        Ok(Self { center, radius, sides, points, area: None, aabb })
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The point matrix: one row per vertex.
    pub fn points(&self) -> &Matrix {
        &self.points
    }

    /// One vertex as a 2D position.
    pub fn vertex(&self, i: usize) -> Vector2 {
        let row = self.points.row(i);
        Vector2::new(row[0], row[1])
    }

    /// All vertices in angular order, for the shell's render pass.
    pub fn vertices(&self) -> Vec<Vector2> {
        (0..self.points.num_rows()).map(|i| self.vertex(i)).collect()
    }

    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Rigidly translate the polygon: center and every vertex move by
    /// `delta` through the homogeneous pipeline, and the bounding box is
    /// recomputed.
    pub fn translate(&mut self, delta: Vector2) -> MathResult<()> {
        self.center += delta;
        self.points = matrix::homogeneous(&self.points)
            .multiply(&matrix::translate2d(delta))?
            .multiply(&matrix::project(2))?;
        self.aabb = compute_aabb(self.center, self.radius, self.sides, &self.points);
        Ok(())
    }

    /// The polygon's area, computed once on first use and memoized.
    ///
    /// Triangles use Heron's formula on their vertices directly; larger
    /// n-gons are n copies of the (center, v0, v1) sample triangle.
    pub fn area(&mut self) -> f64 {
        if let Some(area) = self.area {
            return area;
        }
        let area = if self.sides == 3 {
            collision::triangle_area(self.vertex(0), self.vertex(1), self.vertex(2))
        } else {
            collision::triangle_area(self.center, self.vertex(0), self.vertex(1))
                * f64::from(self.sides)
        };
        self.area = Some(area);
        area
    }
}

/// Embed the 2x2 rotation for `angle_degrees` into a 3x3 homogeneous
/// transform.
fn embed_rotation(angle_degrees: f64) -> MathResult<Matrix> {
    let r = matrix::rotate2d(angle_degrees);
    Matrix::from_rows(vec![
        VectorN::new(vec![r.get(0, 0), r.get(0, 1), 0.0]),
        VectorN::new(vec![r.get(1, 0), r.get(1, 1), 0.0]),
        VectorN::new(vec![0.0, 0.0, 1.0]),
    ])
}

/// Bounding box for a polygon. Squares get a tight fit from the rotated
/// vertex rows; every other polygon uses the generic circle box.
fn compute_aabb(center: Vector2, radius: f64, sides: u32, points: &Matrix) -> Aabb {
    if sides == 4 {
        let top_left = points.row(1);
        let size = points.row(0)[0] - top_left[0];
        Aabb::new(top_left[0], top_left[1], size, size)
    } else {
        Aabb::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }
}

/// A bounding shape, matched exhaustively wherever the two variants need
/// different handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn center(&self) -> Vector2 {
        match self {
            Shape::Circle(c) => c.center,
            Shape::Polygon(p) => p.center(),
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.radius,
            Shape::Polygon(p) => p.radius(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Circle(c) => c.aabb(),
            Shape::Polygon(p) => p.aabb(),
        }
    }

    /// Move the shape by `delta`, keeping any vertex data in sync with the
    /// center.
    pub fn translate(&mut self, delta: Vector2) -> MathResult<()> {
        match self {
            Shape::Circle(c) => {
                c.center += delta;
                Ok(())
            }
            Shape::Polygon(p) => p.translate(delta),
        }
    }

    /// Vertex positions for rendering; empty for circles.
    pub fn vertices(&self) -> Vec<Vector2> {
        match self {
            Shape::Circle(_) => Vec::new(),
            Shape::Polygon(p) => p.vertices(),
        }
    }
}
