//! Rectangular matrices built from row vectors, plus affine-transform
//! builders.
//!
//! Transforms follow the row-vector convention: a point is a 1xN row on the
//! LEFT of the matrix, so translation lives in the BOTTOM row (not the last
//! column) and transforms compose left to right. The shape pipeline
//! (`points_h * T * R * T_inv * P`) depends on this and it must be
//! preserved.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

use super::error::{MathError, MathResult};
use super::vector::{Vector2, VectorN};

/// Values this close to zero are snapped to exactly 0 by [`Matrix::set`],
/// preventing signed-zero artifacts from trigonometric construction.
pub const SET_SNAP_EPSILON: f64 = 1e-10;

/// A rectangular matrix: an ordered sequence of equal-dimension row vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: Vec<VectorN>,
}

impl Matrix {
    /// Build a matrix from row vectors. The list must be non-empty and all
    /// rows must share one dimension.
    pub fn from_rows(rows: Vec<VectorN>) -> MathResult<Self> {
        let Some(first) = rows.first() else {
            return Err(MathError::DimensionMismatch { expected: 1, got: 0 });
        };
        let cols = first.dim();
        for row in &rows {
            if row.dim() != cols {
                return Err(MathError::DimensionMismatch { expected: cols, got: row.dim() });
            }
        }
        Ok(Self { rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, VectorN::dim)
    }

    /// Element access. Panics if the index is out of range, like slice
    /// indexing.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Set one element, snapping values within [`SET_SNAP_EPSILON`] of zero
    /// to exactly 0. Panics if the index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let value = if value.abs() < SET_SNAP_EPSILON { 0.0 } else { value };
        self.rows[row][col] = value;
    }

    pub fn row(&self, i: usize) -> &VectorN {
        &self.rows[i]
    }

    /// The j-th column as a vector.
    pub fn column(&self, j: usize) -> VectorN {
        VectorN::new(self.rows.iter().map(|r| r[j]).collect())
    }

    /// Replace a row; the new vector must match the matrix width.
    pub fn set_row(&mut self, i: usize, v: VectorN) -> MathResult<()> {
        if v.dim() != self.num_cols() {
            return Err(MathError::DimensionMismatch { expected: self.num_cols(), got: v.dim() });
        }
        self.rows[i] = v;
        Ok(())
    }

    /// Replace a column; the new vector must match the matrix height.
    pub fn set_column(&mut self, j: usize, v: VectorN) -> MathResult<()> {
        if v.dim() != self.num_rows() {
            return Err(MathError::DimensionMismatch { expected: self.num_rows(), got: v.dim() });
        }
        for i in 0..self.num_rows() {
            self.set(i, j, v[i]);
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> MathResult<()> {
        if self.num_rows() != other.num_rows() {
            return Err(MathError::DimensionMismatch {
                expected: self.num_rows(),
                got: other.num_rows(),
            });
        }
        if self.num_cols() != other.num_cols() {
            return Err(MathError::DimensionMismatch {
                expected: self.num_cols(),
                got: other.num_cols(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        self.check_same_shape(other)?;
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.add(b))
            .collect::<MathResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.add(&-other)
    }

    pub fn scale(&self, s: f64) -> Self {
        Self { rows: self.rows.iter().map(|r| r.scale(s)).collect() }
    }

    /// Matrix-matrix product. The left operand's width must equal the right
    /// operand's height.
    pub fn multiply(&self, other: &Self) -> MathResult<Self> {
        if self.num_cols() != other.num_rows() {
            return Err(MathError::DimensionMismatch {
                expected: self.num_cols(),
                got: other.num_rows(),
            });
        }
        let mut rows = Vec::with_capacity(self.num_rows());
        for i in 0..self.num_rows() {
            let mut data = Vec::with_capacity(other.num_cols());
            for j in 0..other.num_cols() {
                data.push(self.rows[i].dot(&other.column(j))?);
            }
            rows.push(VectorN::new(data));
        }
        Ok(Self { rows })
    }

    /// Multiply by a vector treated as a single-column matrix on the right.
    pub fn mul_vector(&self, v: &VectorN) -> MathResult<VectorN> {
        if self.num_cols() != v.dim() {
            return Err(MathError::DimensionMismatch { expected: self.num_cols(), got: v.dim() });
        }
        let mut data = Vec::with_capacity(self.num_rows());
        for row in &self.rows {
            data.push(row.dot(v)?);
        }
        Ok(VectorN::new(data))
    }

    /// The transpose: rows become columns. Non-square matrices swap their
    /// dimensions.
    pub fn transpose(&self) -> Self {
        let rows = (0..self.num_cols()).map(|j| self.column(j)).collect();
        Self { rows }
    }

    /// The minor of `self` with one row and one column removed.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip_row)
            .map(|(_, row)| {
                VectorN::new(
                    row.as_slice()
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != skip_col)
                        .map(|(_, v)| *v)
                        .collect(),
                )
            })
            .collect();
        Self { rows }
    }

    /// The determinant, by cofactor expansion along the first row. Only
    /// 2x2, 3x3 and 4x4 matrices are supported.
    pub fn determinant(&self) -> MathResult<f64> {
        match (self.num_rows(), self.num_cols()) {
            (2, 2) => Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)),
            (3, 3) | (4, 4) => {
                let mut det = 0.0;
                for j in 0..self.num_cols() {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * self.get(0, j) * self.minor(0, j).determinant()?;
                }
                Ok(det)
            }
            (rows, cols) => Err(MathError::UnsupportedSize { rows, cols }),
        }
    }

    /// The inverse, by the adjugate/cofactor method. Only sizes with a
    /// supported determinant can be inverted; a zero determinant is
    /// `Singular`.
    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MathError::Singular);
        }
        let n = self.num_rows();
        if n == 2 {
            let mut inv = zeros(2, 2);
            inv.set(0, 0, self.get(1, 1));
            inv.set(0, 1, -self.get(0, 1));
            inv.set(1, 0, -self.get(1, 0));
            inv.set(1, 1, self.get(0, 0));
            return Ok(inv.scale(1.0 / det));
        }
        let mut cofactors = zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                cofactors.set(i, j, sign * self.minor(i, j).determinant()?);
            }
        }
        Ok(cofactors.transpose().scale(1.0 / det))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

/// Multiply a vector treated as a single-row matrix on the left.
pub fn row_vector_times(v: &VectorN, m: &Matrix) -> MathResult<VectorN> {
    if v.dim() != m.num_rows() {
        return Err(MathError::DimensionMismatch { expected: m.num_rows(), got: v.dim() });
    }
    let mut data = Vec::with_capacity(m.num_cols());
    for j in 0..m.num_cols() {
        data.push(v.dot(&m.column(j))?);
    }
    Ok(VectorN::new(data))
}

/// The n x n identity matrix.
pub fn identity(n: usize) -> Matrix {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = VectorN::zeros(n);
        row[i] = 1.0;
        rows.push(row);
    }
    Matrix { rows }
}

/// A matrix of all zeros.
pub fn zeros(rows: usize, cols: usize) -> Matrix {
    Matrix { rows: (0..rows).map(|_| VectorN::zeros(cols)).collect() }
}

/// A matrix of all ones.
pub fn ones(rows: usize, cols: usize) -> Matrix {
    Matrix { rows: (0..rows).map(|_| VectorN::new(vec![1.0; cols])).collect() }
}

/// The sum of the diagonal of a square matrix.
pub fn trace(m: &Matrix) -> MathResult<f64> {
    if m.num_rows() != m.num_cols() {
        return Err(MathError::DimensionMismatch { expected: m.num_rows(), got: m.num_cols() });
    }
    Ok((0..m.num_rows()).map(|i| m.get(i, i)).sum())
}

/// The standard 2x2 counter-clockwise rotation matrix for an angle in
/// degrees: rows `(cos, -sin)` and `(sin, cos)`.
pub fn rotate2d(angle_degrees: f64) -> Matrix {
    let theta = angle_degrees.to_radians();
    Matrix {
        rows: vec![
            VectorN::new(vec![theta.cos(), -theta.sin()]),
            VectorN::new(vec![theta.sin(), theta.cos()]),
        ],
    }
}

/// Convert a matrix to homogeneous coordinates by appending a trailing 1 to
/// every row.
pub fn homogeneous(m: &Matrix) -> Matrix {
    let rows = m
        .rows
        .iter()
        .map(|row| {
            let mut data = row.as_slice().to_vec();
            data.push(1.0);
            VectorN::new(data)
        })
        .collect();
    Matrix { rows }
}

/// Convert a vector to homogeneous coordinates by appending a trailing 1.
pub fn homogeneous_vec(v: &VectorN) -> VectorN {
    let mut data = v.as_slice().to_vec();
    data.push(1.0);
    VectorN::new(data)
}

/// A homogeneous translation matrix: the identity of size `dim` with the
/// offsets written into the bottom row (row-vector convention).
pub fn translate(dim: usize, offsets: &[f64]) -> Matrix {
    let mut t = identity(dim);
    for (i, offset) in offsets.iter().enumerate() {
        t.set(dim - 1, i, *offset);
    }
    t
}

/// A homogeneous 2D translation by a displacement vector.
pub fn translate2d(delta: Vector2) -> Matrix {
    translate(3, &[delta.x, delta.y])
}

/// A projection matrix that drops the homogeneous coordinate: the identity
/// of size `dim` stacked above one all-zero row.
pub fn project(dim: usize) -> Matrix {
    let mut m = identity(dim);
    m.rows.push(VectorN::zeros(dim));
    m
}
