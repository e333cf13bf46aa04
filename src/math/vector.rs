//! Fixed-dimension and runtime-dimension vectors.
//!
//! `Vector2` and `Vector3` are the typed workhorses: for them, dimension
//! errors are unrepresentable and arithmetic goes through plain operators.
//! `VectorN` carries a runtime dimension (it is the matrix row type) and
//! returns `DimensionMismatch` from componentwise operations on unequal
//! lengths. `Vector` is the sum of all three, selected by a factory from
//! raw component data.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use super::error::{MathError, MathResult};

/// Components within this distance of zero are snapped to exactly 0 when
/// converting from polar coordinates, suppressing trig noise like
/// `cos(90deg) = 6.1e-17`.
pub const POLAR_SNAP_EPSILON: f64 = 1e-9;

/// Which p-norm to compute.
///
/// `P(0)` returns the sum of absolute values (a degenerate case, not a true
/// 0-norm). Negative orders are unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Norm {
    /// The p-norm `(sum |x_i|^p)^(1/p)` for p >= 1; sum of `|x_i|` for p = 0.
    P(u32),
    /// The infinity norm: the maximum absolute component.
    Infinity,
}

/// Shared p-norm kernel over raw components.
fn norm_of(components: &[f64], p: Norm) -> f64 {
    match p {
        Norm::P(0) => components.iter().map(|c| c.abs()).sum(),
        Norm::P(p) => {
            let sum: f64 = components.iter().map(|c| c.abs().powi(p as i32)).sum();
            sum.powf(1.0 / f64::from(p))
        }
        Norm::Infinity => components.iter().fold(0.0, |acc, c| acc.max(c.abs())),
    }
}

/// A 2D vector in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert polar coordinates to a cartesian vector.
    ///
    /// `theta_degrees` is measured counter-clockwise in math convention;
    /// `invert_y` negates the y component for the screen-coordinate
    /// convention where y grows downward. Components within
    /// [`POLAR_SNAP_EPSILON`] of zero are snapped to exactly 0.
    pub fn from_polar(r: f64, theta_degrees: f64, invert_y: bool) -> Self {
        let theta = theta_degrees.to_radians();
        let mut x = r * theta.cos();
        let mut y = r * theta.sin();
        if invert_y {
            y = -y;
        }
        if x.abs() <= POLAR_SNAP_EPSILON {
            x = 0.0;
        }
        if y.abs() <= POLAR_SNAP_EPSILON {
            y = 0.0;
        }
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The counter-clockwise perpendicular: `(x, y) -> (-y, x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn norm(self, p: Norm) -> f64 {
        norm_of(&[self.x, self.y], p)
    }

    /// The 2-norm.
    pub fn magnitude(self) -> f64 {
        self.norm(Norm::P(2))
    }

    /// The squared 2-norm (`self . self`).
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// A unit vector in the same direction, or `DivideByZero` for the zero
    /// vector.
    pub fn normalized(self) -> MathResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(self / mag)
    }

    /// True iff every component is exactly 0.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Angle of the vector in radians, math convention.
    pub fn radians(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle in radians with the y axis inverted (screen convention).
    pub fn radians_inv(self) -> f64 {
        (-self.y).atan2(self.x)
    }

    /// Angle of the vector in degrees, math convention.
    pub fn degrees(self) -> f64 {
        self.radians().to_degrees()
    }

    /// Angle in degrees with the y axis inverted (screen convention).
    pub fn degrees_inv(self) -> f64 {
        self.radians_inv().to_degrees()
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

/// A 3D vector, used for homogeneous points and cross products.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The cross product. Only defined for 3D vectors, which the type
    /// system enforces.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm(self, p: Norm) -> f64 {
        norm_of(&[self.x, self.y, self.z], p)
    }

    pub fn magnitude(self) -> f64 {
        self.norm(Norm::P(2))
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn normalized(self) -> MathResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(self / mag)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Drop the trailing (homogeneous) component.
    pub fn truncate(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

/// A vector whose dimension is only known at runtime.
///
/// This is the matrix row type. Componentwise operations check dimensions
/// and return `DimensionMismatch` instead of silently truncating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorN {
    data: Vec<f64>,
}

impl VectorN {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// The zero vector of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self { data: vec![0.0; dim] }
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn check_dim(&self, other: &Self) -> MathResult<()> {
        if self.dim() != other.dim() {
            return Err(MathError::DimensionMismatch {
                expected: self.dim(),
                got: other.dim(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        self.check_dim(other)?;
        Ok(Self::new(
            self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect(),
        ))
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.check_dim(other)?;
        Ok(Self::new(
            self.data.iter().zip(&other.data).map(|(a, b)| a - b).collect(),
        ))
    }

    pub fn dot(&self, other: &Self) -> MathResult<f64> {
        self.check_dim(other)?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.data.iter().map(|c| c * s).collect())
    }

    pub fn norm(&self, p: Norm) -> f64 {
        norm_of(&self.data, p)
    }

    pub fn magnitude(&self) -> f64 {
        self.norm(Norm::P(2))
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum()
    }

    pub fn normalized(&self) -> MathResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(self.scale(1.0 / mag))
    }

    /// True iff every component is exactly 0.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// Reinterpret as a `Vector2`, or `DimensionMismatch` if not 2D.
    pub fn to_vector2(&self) -> MathResult<Vector2> {
        match self.data[..] {
            [x, y] => Ok(Vector2::new(x, y)),
            _ => Err(MathError::DimensionMismatch { expected: 2, got: self.dim() }),
        }
    }

    /// Reinterpret as a `Vector3`, or `DimensionMismatch` if not 3D.
    pub fn to_vector3(&self) -> MathResult<Vector3> {
        match self.data[..] {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => Err(MathError::DimensionMismatch { expected: 3, got: self.dim() }),
        }
    }
}

impl Index<usize> for VectorN {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for VectorN {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl From<Vector2> for VectorN {
    fn from(v: Vector2) -> Self {
        Self::new(vec![v.x, v.y])
    }
}

impl From<Vector3> for VectorN {
    fn from(v: Vector3) -> Self {
        Self::new(vec![v.x, v.y, v.z])
    }
}

/// A vector of any dimension, selected at construction.
///
/// The factory classifies raw component data into the typed 2D/3D variants
/// and falls back to [`VectorN`] for other dimensions. Equality across
/// different dimensions is `false`, never an error.
#[derive(Debug, Clone)]
pub enum Vector {
    V2(Vector2),
    V3(Vector3),
    N(VectorN),
}

impl Vector {
    /// Build a vector from raw components, picking the variant by length.
    pub fn from_slice(components: &[f64]) -> Self {
        match components[..] {
            [x, y] => Vector::V2(Vector2::new(x, y)),
            [x, y, z] => Vector::V3(Vector3::new(x, y, z)),
            _ => Vector::N(VectorN::new(components.to_vec())),
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            Vector::V2(_) => 2,
            Vector::V3(_) => 3,
            Vector::N(v) => v.dim(),
        }
    }

    pub fn component(&self, i: usize) -> Option<f64> {
        match self {
            Vector::V2(v) => [v.x, v.y].get(i).copied(),
            Vector::V3(v) => [v.x, v.y, v.z].get(i).copied(),
            Vector::N(v) => v.as_slice().get(i).copied(),
        }
    }

    fn flat(&self) -> VectorN {
        match self {
            Vector::V2(v) => VectorN::from(*v),
            Vector::V3(v) => VectorN::from(*v),
            Vector::N(v) => v.clone(),
        }
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        Ok(Self::from_slice(self.flat().add(&other.flat())?.as_slice()))
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        Ok(Self::from_slice(self.flat().sub(&other.flat())?.as_slice()))
    }

    pub fn dot(&self, other: &Self) -> MathResult<f64> {
        self.flat().dot(&other.flat())
    }

    pub fn scale(&self, s: f64) -> Self {
        Self::from_slice(self.flat().scale(s).as_slice())
    }

    pub fn norm(&self, p: Norm) -> f64 {
        self.flat().norm(p)
    }

    pub fn magnitude(&self) -> f64 {
        self.norm(Norm::P(2))
    }

    pub fn normalized(&self) -> MathResult<Self> {
        Ok(Self::from_slice(self.flat().normalized()?.as_slice()))
    }

    pub fn is_zero(&self) -> bool {
        self.flat().is_zero()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.flat() == other.flat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_scalar_ops_commute() {
        let v = Vector2::new(2.5, -1.5);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v / 2.0, Vector2::new(1.25, -0.75));
    }

    #[test]
    fn test_dot_and_perpendicular() {
        let a = Vector2::new(3.0, 4.0);
        assert_eq!(a.dot(a), 25.0);
        assert_eq!(a.perpendicular(), Vector2::new(-4.0, 3.0));
        // A vector is always orthogonal to its perpendicular
        assert_eq!(a.dot(a.perpendicular()), 0.0);
    }

    #[test]
    fn test_norms() {
        let v = Vector2::new(3.0, -4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.norm(Norm::P(1)), 7.0);
        assert_eq!(v.norm(Norm::P(0)), 7.0); // degenerate: sum of |x_i|
        assert_eq!(v.norm(Norm::Infinity), 4.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector2::new(10.0, 0.0);
        assert_eq!(v.normalized().unwrap(), Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::ZERO.normalized(), Err(MathError::DivideByZero));

        let w = Vector2::new(-7.3, 2.9).normalized().unwrap();
        assert!((w.magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_zero_requires_all_components() {
        assert!(Vector2::ZERO.is_zero());
        // A single zero component is not enough
        assert!(!Vector2::new(0.0, 5.0).is_zero());
        assert!(!Vector3::new(0.0, 0.0, 1.0).is_zero());
        assert!(!VectorN::new(vec![0.0, 0.0, 0.0, 2.0]).is_zero());
    }

    #[test]
    fn test_from_polar() {
        // 90 degrees with inverted y points straight up in screen space
        let up = Vector2::from_polar(5.0, 90.0, true);
        assert_eq!(up, Vector2::new(0.0, -5.0));

        // Without inversion it points down the +y axis
        let down = Vector2::from_polar(5.0, 90.0, false);
        assert_eq!(down, Vector2::new(0.0, 5.0));

        // Trig noise at the axes snaps to exactly zero
        let right = Vector2::from_polar(1.0, 360.0, true);
        assert_eq!(right.y, 0.0);
    }

    #[test]
    fn test_from_polar_round_trip() {
        for theta in [0.0, 30.0, 115.0, 241.0, 359.0] {
            let v = Vector2::from_polar(7.5, theta, true);
            assert!((v.magnitude() - 7.5).abs() < 1e-9);
            let back = v.degrees_inv().rem_euclid(360.0);
            assert!((back - theta).abs() < 1e-9, "theta {} came back {}", theta, back);
        }
    }

    #[test]
    fn test_angle_accessors() {
        let v = Vector2::new(1.0, -1.0);
        assert!((v.degrees() - (-45.0)).abs() < 1e-12);
        assert!((v.degrees_inv() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_vector_n_dimension_mismatch() {
        let a = VectorN::new(vec![1.0, 2.0, 3.0]);
        let b = VectorN::new(vec![1.0, 2.0]);
        assert_eq!(
            a.add(&b),
            Err(MathError::DimensionMismatch { expected: 3, got: 2 })
        );
        assert_eq!(
            a.dot(&b),
            Err(MathError::DimensionMismatch { expected: 3, got: 2 })
        );
    }

    #[test]
    fn test_vector_n_conversions() {
        let v = VectorN::new(vec![1.0, 2.0]);
        assert_eq!(v.to_vector2().unwrap(), Vector2::new(1.0, 2.0));
        assert!(v.to_vector3().is_err());

        let h = VectorN::new(vec![1.0, 2.0, 1.0]).to_vector3().unwrap();
        assert_eq!(h.truncate(), Vector2::new(1.0, 2.0));
        assert_eq!(VectorN::from(h).dim(), 3);
    }

    #[test]
    fn test_factory_classifies_by_dimension() {
        assert!(matches!(Vector::from_slice(&[1.0, 2.0]), Vector::V2(_)));
        assert!(matches!(Vector::from_slice(&[1.0, 2.0, 3.0]), Vector::V3(_)));
        assert!(matches!(Vector::from_slice(&[1.0; 4]), Vector::N(_)));
        assert_eq!(Vector::from_slice(&[1.0; 5]).dim(), 5);
    }

    #[test]
    fn test_mismatched_dimensions_compare_unequal() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[1.0, 2.0, 0.0]);
        assert_ne!(a, b);
        assert_eq!(a, Vector::from_slice(&[1.0, 2.0]));
    }
}
