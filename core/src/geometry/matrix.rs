//! 4x4 Matrix

#![allow(dead_code)]
use super::Tuple;
use crate::common::*;
use std::ops::{Index, Mul};

/// A 4x4 matrix containing Float values.
#[derive(Copy, Clone, Debug)]
pub struct Matrix4x4 {
    /// Stores a 2-D array of Float.
    pub m: [[Float; 4]; 4],
}

/// Zero matrix.
pub const ZERO_MATRIX: Matrix4x4 = Matrix4x4 { m: [[0.0; 4]; 4] };

/// Identity matrix.
pub const IDENTITY_MATRIX: Matrix4x4 = Matrix4x4 {
    m: [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ],
};

/// Create a 4x4 matrix using the following order of the parameters:
///
/// * `t00`, `t01`, `t02`, `t03` - Row 1
/// * `t10`, `t11`, `t12`, `t13` - Row 2
/// * `t20`, `t21`, `t22`, `t23` - Row 3
/// * `t30`, `t31`, `t32`, `t33` - Row 4
#[rustfmt::skip]
pub fn matrix4x4(
    t00: Float, t01: Float, t02: Float, t03: Float,
    t10: Float, t11: Float, t12: Float, t13: Float,
    t20: Float, t21: Float, t22: Float, t23: Float,
    t30: Float, t31: Float, t32: Float, t33: Float,
) -> Matrix4x4 {
    Matrix4x4 {
        m: [
            [t00, t01, t02, t03],
            [t10, t11, t12, t13],
            [t20, t21, t22, t23],
            [t30, t31, t32, t33],
        ],
    }
}

impl Matrix4x4 {
    /// Returns the transpose of the matrix.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Matrix4x4 {
        matrix4x4(
            self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0],
            self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1],
            self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2],
            self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3],
        )
    }

    /// Returns the determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> Float {
        determinant_n(&self.m, 4)
    }

    /// Returns the submatrix with the given row and column removed. Only
    /// the top-left 3x3 of the result is meaningful.
    ///
    /// * `row` - The row to remove.
    /// * `col` - The column to remove.
    pub fn submatrix(&self, row: usize, col: usize) -> [[Float; 4]; 4] {
        submatrix_n(&self.m, 4, row, col)
    }

    /// Returns the minor of the element at the given row and column, i.e.
    /// the determinant of the corresponding 3x3 submatrix.
    ///
    /// * `row` - The row.
    /// * `col` - The column.
    pub fn minor(&self, row: usize, col: usize) -> Float {
        determinant_n(&self.submatrix(row, col), 3)
    }

    /// Returns the cofactor of the element at the given row and column.
    ///
    /// * `row` - The row.
    /// * `col` - The column.
    pub fn cofactor(&self, row: usize, col: usize) -> Float {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns true if the matrix can be inverted.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Returns the inverse of the matrix using the classical adjugate
    /// method: the transposed cofactor matrix divided by the determinant.
    ///
    /// The function will panic if the matrix is singular.
    pub fn inverse(&self) -> Matrix4x4 {
        let det = self.determinant();
        if det == 0.0 {
            panic!("Singular matrix in Matrix4x4::inverse()");
        }

        let mut minv = ZERO_MATRIX;
        for row in 0..4 {
            for col in 0..4 {
                // Transposed assignment folds the adjugate transpose in.
                minv.m[col][row] = self.cofactor(row, col) / det;
            }
        }
        minv
    }
}

/// Determinant of the top-left `n` x `n` block via cofactor expansion
/// along the first row, bottoming out at 2x2.
///
/// * `m` - The matrix storage.
/// * `n` - The block size (2, 3 or 4).
fn determinant_n(m: &[[Float; 4]; 4], n: usize) -> Float {
    if n == 2 {
        return m[0][0] * m[1][1] - m[0][1] * m[1][0];
    }

    let mut det = 0.0;
    for col in 0..n {
        let minor = determinant_n(&submatrix_n(m, n, 0, col), n - 1);
        let cofactor = if col % 2 == 0 { minor } else { -minor };
        det += m[0][col] * cofactor;
    }
    det
}

/// Copies the top-left `n` x `n` block with one row and column removed
/// into the top-left of a fresh 4x4 array.
///
/// * `m`   - The matrix storage.
/// * `n`   - The block size.
/// * `row` - The row to remove.
/// * `col` - The column to remove.
fn submatrix_n(m: &[[Float; 4]; 4], n: usize, row: usize, col: usize) -> [[Float; 4]; 4] {
    let mut out = [[0.0; 4]; 4];
    let mut r_out = 0;
    for r in 0..n {
        if r == row {
            continue;
        }
        let mut c_out = 0;
        for c in 0..n {
            if c == col {
                continue;
            }
            out[r_out][c_out] = m[r][c];
            c_out += 1;
        }
        r_out += 1;
    }
    out
}

impl PartialEq for Matrix4x4 {
    /// Approximate equality within `EPSILON` on every element.
    ///
    /// * `other` - The matrix to compare.
    fn eq(&self, other: &Self) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !epsilon_eq(self.m[row][col], other.m[row][col]) {
                    return false;
                }
            }
        }
        true
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = [Float; 4];

    /// Returns the given row.
    ///
    /// * `row` - The row index.
    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    /// Multiplies two matrices.
    ///
    /// * `other` - The right-hand matrix.
    fn mul(self, other: Matrix4x4) -> Self::Output {
        let mut out = ZERO_MATRIX;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        out
    }
}

impl Mul<Tuple> for Matrix4x4 {
    type Output = Tuple;

    /// Transforms a tuple.
    ///
    /// * `t` - The tuple.
    fn mul(self, t: Tuple) -> Self::Output {
        Tuple::new(
            self.m[0][0] * t.x + self.m[0][1] * t.y + self.m[0][2] * t.z + self.m[0][3] * t.w,
            self.m[1][0] * t.x + self.m[1][1] * t.y + self.m[1][2] * t.z + self.m[1][3] * t.w,
            self.m[2][0] * t.x + self.m[2][1] * t.y + self.m[2][2] * t.z + self.m[2][3] * t.w,
            self.m[3][0] * t.x + self.m[3][1] * t.y + self.m[3][2] * t.z + self.m[3][3] * t.w,
        )
    }
}
