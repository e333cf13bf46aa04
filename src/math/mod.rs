//! Hand-rolled 2D affine-transform math.
//!
//! Only what the game needs: 2D/3D/N-D vectors, rectangular matrices up to
//! 4x4 determinants/inverses, and homogeneous-coordinate builders for
//! translation, rotation and projection. Not a general-purpose linear
//! algebra library.

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::{MathError, MathResult};
pub use matrix::Matrix;
pub use vector::{Norm, Vector, Vector2, Vector3, VectorN};
