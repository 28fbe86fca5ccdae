//! A dense, row-major `f64` matrix with classic textbook arithmetic.

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};

/// Tolerance used by [`Matrix::approx_eq`] (and through it `==`).
pub const EPSILON: f64 = 1e-6;

/// A dense matrix of `f64` elements in row-major order.
///
/// Dimensions are always at least 1×1; every constructor rejects a zero
/// dimension with [`Error::InvalidDimensions`]. Arithmetic comes in two
/// layers: checked methods ([`sum`], [`sub`], [`mul_matrix`], ...) that
/// return a [`Result`] and leave the receiver untouched on failure, and the
/// usual operator impls (`+`, `-`, `*`, unary `-`) that delegate to them
/// and panic on a dimension mismatch.
///
/// Determinants are computed by Laplace expansion along the first row,
/// which is O(n!) and intended for small matrices only.
///
/// # Examples
///
/// ```
/// use arbor_collections::Matrix;
///
/// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
/// let t = a.transpose();
///
/// let gram = &a * &t;
/// assert_eq!(gram, Matrix::from_rows(&[&[5.0, 11.0], &[11.0, 25.0]]).unwrap());
/// ```
///
/// [`sum`]: Self::sum
/// [`sub`]: Self::sub
/// [`mul_matrix`]: Self::mul_matrix
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows` × `cols` matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let m = Matrix::new(2, 3).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert!(Matrix::new(0, 3).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Creates the `n` × `n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        Ok(matrix)
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if there are no rows or the
    /// first row is empty, and [`Error::DimensionMismatch`] if the rows
    /// have differing lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_rows(&[&[1.0][..], &[2.0, 3.0][..]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut matrix = Self::new(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    left_rows: 1,
                    left_cols: cols,
                    right_rows: 1,
                    right_cols: row.len(),
                });
            }
            matrix.data[i * cols..(i + 1) * cols].copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Resizes the matrix to `rows` rows, keeping the overlapping elements
    /// and zero-filling any new ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `rows` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let mut m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// m.set_rows(3).unwrap();
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(2, 0)], 0.0);
    /// ```
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        self.resize(rows, self.cols)
    }

    /// Resizes the matrix to `cols` columns, keeping the overlapping
    /// elements and zero-filling any new ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `cols` is zero.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        self.resize(self.rows, cols)
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let mut resized = Self::new(rows, cols)?;
        for i in 0..self.rows.min(rows) {
            for j in 0..self.cols.min(cols) {
                resized.data[i * cols + j] = self.data[i * self.cols + j];
            }
        }
        *self = resized;
        Ok(())
    }

    /// Checked element read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the position is outside the
    /// matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Checked element write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the position is outside the
    /// matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Element-wise comparison within [`EPSILON`].
    ///
    /// Matrices of different dimensions are never approximately equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let a = Matrix::from_rows(&[&[1.0]]).unwrap();
    /// let b = Matrix::from_rows(&[&[1.0 + 1e-8]]).unwrap();
    /// let c = Matrix::from_rows(&[&[1.1]]).unwrap();
    /// assert!(a.approx_eq(&b));
    /// assert!(!a.approx_eq(&c));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= EPSILON)
    }

    /// Adds `other` to `self` element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] (and leaves `self` untouched)
    /// if the dimensions differ.
    pub fn sum(&mut self, other: &Self) -> Result<()> {
        self.check_same_dims(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts `other` from `self` element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] (and leaves `self` untouched)
    /// if the dimensions differ.
    pub fn sub(&mut self, other: &Self) -> Result<()> {
        self.check_same_dims(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(())
    }

    fn check_same_dims(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        Ok(())
    }

    /// Multiplies every element by `scalar`, in place.
    pub fn mul_scalar(&mut self, scalar: f64) {
        for element in &mut self.data {
            *element *= scalar;
        }
    }

    /// Replaces `self` with the matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] (and leaves `self` untouched)
    /// if `self.cols() != other.rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let mut a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// let b = Matrix::identity(2).unwrap();
    /// a.mul_matrix(&b).unwrap();
    /// assert_eq!(a[(1, 1)], 4.0);
    /// ```
    pub fn mul_matrix(&mut self, other: &Self) -> Result<()> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut product = Self::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                product.data[i * other.cols + j] = acc;
            }
        }
        *self = product;
        Ok(())
    }

    /// Returns the transpose of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// let t = Matrix::from_rows(&[&[1.0, 3.0], &[2.0, 4.0]]).unwrap();
    /// assert_eq!(m.transpose(), t);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transposed = Self {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                transposed.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        transposed
    }

    /// Computes the determinant by Laplace expansion along the first row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -2.0);
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        self.check_square()?;
        Ok(self.det_unchecked())
    }

    /// Computes the matrix of algebraic complements (cofactors).
    ///
    /// The 1×1 case has no proper minors; its cofactor matrix is defined
    /// as `[[1.0]]` so that [`inverse`](Self::inverse) stays total over
    /// non-singular matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the matrix is not square.
    pub fn calc_complements(&self) -> Result<Self> {
        self.check_square()?;
        if self.rows == 1 {
            return Self::from_rows(&[&[1.0]]);
        }
        let mut complements = Self::new(self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                complements.data[i * self.cols + j] = sign * self.minor(i, j).det_unchecked();
            }
        }
        Ok(complements)
    }

    /// Computes the inverse as `transpose(complements) / determinant`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the matrix is not square
    /// and [`Error::SingularMatrix`] if the determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[4.0, 7.0], &[2.0, 6.0]]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert!((&m * &inv).approx_eq(&Matrix::identity(2).unwrap()));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }
        let mut inverted = self.calc_complements()?.transpose();
        inverted.mul_scalar(1.0 / det);
        Ok(inverted)
    }

    fn check_square(&self) -> Result<()> {
        if self.rows == self.cols {
            Ok(())
        } else {
            Err(Error::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Determinant of a matrix already known to be square.
    fn det_unchecked(&self) -> f64 {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det = 0.0;
                for j in 0..self.cols {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * self.data[j] * self.minor(0, j).det_unchecked();
                }
                det
            }
        }
    }

    /// The (n-1)×(n-1) submatrix with `skip_row` and `skip_col` removed.
    /// Only called on square matrices with n >= 2.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        let n = self.rows - 1;
        let mut minor = Self {
            rows: n,
            cols: n,
            data: Vec::with_capacity(n * n),
        };
        for i in 0..self.rows {
            if i == skip_row {
                continue;
            }
            for j in 0..self.cols {
                if j == skip_col {
                    continue;
                }
                minor.data.push(self.data[i * self.cols + j]);
            }
        }
        minor
    }
}

/// The 3×3 zero matrix.
impl Default for Matrix {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            data: vec![0.0; 9],
        }
    }
}

/// Approximate equality within [`EPSILON`]; see [`Matrix::approx_eq`].
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        if let Err(error) = self.check_index(row, col) {
            panic!("{error}");
        }
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        if let Err(error) = self.check_index(row, col) {
            panic!("{error}");
        }
        &mut self.data[row * self.cols + col]
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, rhs: &Matrix) -> Matrix {
        let mut out = self.clone();
        if let Err(error) = out.sum(rhs) {
            panic!("{error}");
        }
        out
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub(self, rhs: &Matrix) -> Matrix {
        let mut out = self.clone();
        if let Err(error) = Matrix::sub(&mut out, rhs) {
            panic!("{error}");
        }
        out
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    fn mul(self, rhs: &Matrix) -> Matrix {
        let mut out = self.clone();
        if let Err(error) = out.mul_matrix(rhs) {
            panic!("{error}");
        }
        out
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        let mut out = self.clone();
        out.mul_scalar(scalar);
        out
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix * self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}

impl AddAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add_assign(&mut self, rhs: &Matrix) {
        if let Err(error) = self.sum(rhs) {
            panic!("{error}");
        }
    }
}

impl SubAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub_assign(&mut self, rhs: &Matrix) {
        if let Err(error) = self.sub(rhs) {
            panic!("{error}");
        }
    }
}

impl MulAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    fn mul_assign(&mut self, rhs: &Matrix) {
        if let Err(error) = self.mul_matrix(rhs) {
            panic!("{error}");
        }
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.mul_scalar(scalar);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn constructors_reject_zero_dimensions() {
        assert_eq!(Matrix::new(0, 3), Err(Error::InvalidDimensions { rows: 0, cols: 3 }));
        assert_eq!(Matrix::new(3, 0), Err(Error::InvalidDimensions { rows: 3, cols: 0 }));
        assert_eq!(Matrix::identity(0), Err(Error::InvalidDimensions { rows: 0, cols: 0 }));
        assert!(Matrix::from_rows::<&[f64]>(&[]).is_err());
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = Matrix::from_rows(&[&[1.0, 2.0][..], &[3.0][..]]);
        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                left_rows: 1,
                left_cols: 2,
                right_rows: 1,
                right_cols: 1,
            })
        );
    }

    #[test]
    fn default_is_a_3x3_zero_matrix() {
        let d = Matrix::default();
        assert_eq!((d.rows(), d.cols()), (3, 3));
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(d[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn checked_access_reports_positions() {
        let mut a = m(&[&[1.0, 2.0]]);
        assert_eq!(a.get(0, 1), Ok(2.0));
        assert_eq!(
            a.get(1, 0),
            Err(Error::IndexOutOfRange { row: 1, col: 0, rows: 1, cols: 2 })
        );
        a.set(0, 0, 9.0).unwrap();
        assert_eq!(a[(0, 0)], 9.0);
        assert!(a.set(0, 2, 0.0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics_out_of_range() {
        let a = m(&[&[1.0]]);
        let _ = a[(0, 1)];
    }

    #[test]
    fn sum_and_sub_are_element_wise() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[10.0, 20.0], &[30.0, 40.0]]);
        a.sum(&b).unwrap();
        assert_eq!(a, m(&[&[11.0, 22.0], &[33.0, 44.0]]));
        Matrix::sub(&mut a, &b).unwrap();
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
    }

    #[test]
    fn mismatched_sum_leaves_receiver_untouched() {
        let mut a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let before = a.clone();
        assert_eq!(
            a.sum(&b),
            Err(Error::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 3,
                right_cols: 2,
            })
        );
        assert_eq!(a, before);
    }

    #[test]
    fn matrix_product_follows_inner_dimension() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let product = &a * &b;
        assert_eq!(product, m(&[&[58.0, 64.0], &[139.0, 154.0]]));

        // Same shapes in the wrong order.
        let mut c = b.clone();
        assert!(c.mul_matrix(&product).is_err());
    }

    #[test]
    fn gram_matrix_from_transpose() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.transpose(), m(&[&[1.0, 3.0], &[2.0, 4.0]]));
        assert_eq!(&a * &a.transpose(), m(&[&[5.0, 11.0], &[11.0, 25.0]]));
    }

    #[test]
    fn determinant_base_and_recursive_cases() {
        assert_eq!(m(&[&[7.0]]).determinant(), Ok(7.0));
        assert_eq!(m(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant(), Ok(-2.0));

        let a = m(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]]);
        assert!((a.determinant().unwrap() - 1.0).abs() < EPSILON);

        // Linearly dependent rows.
        let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(singular.determinant(), Ok(0.0));

        let rect = m(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(
            rect.determinant(),
            Err(Error::InvalidDimensions { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn cofactor_matrix_matches_hand_computation() {
        let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 4.0, 2.0], &[5.0, 2.0, 1.0]]);
        let expected = m(&[&[0.0, 10.0, -20.0], &[4.0, -14.0, 8.0], &[-8.0, -2.0, 4.0]]);
        assert_eq!(a.calc_complements().unwrap(), expected);
    }

    #[test]
    fn cofactors_of_1x1_are_the_unit() {
        let a = m(&[&[5.0]]);
        assert_eq!(a.calc_complements().unwrap(), m(&[&[1.0]]));
        assert_eq!(a.inverse().unwrap(), m(&[&[0.2]]));
    }

    #[test]
    fn inverse_matches_hand_computation() {
        let a = m(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]]);
        let expected = m(&[
            &[1.0, -1.0, 1.0],
            &[-38.0, 41.0, -34.0],
            &[27.0, -29.0, 24.0],
        ]);
        assert_eq!(a.inverse().unwrap(), expected);
        assert!((&a * &a.inverse().unwrap()).approx_eq(&Matrix::identity(3).unwrap()));
    }

    #[test]
    fn singular_matrices_have_no_inverse() {
        let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(singular.inverse(), Err(Error::SingularMatrix));
    }

    #[test]
    fn approx_eq_uses_the_epsilon() {
        let a = m(&[&[1.0, 2.0]]);
        let close = m(&[&[1.0 + 1e-7, 2.0]]);
        let far = m(&[&[1.0 + 1e-5, 2.0]]);
        let other_shape = m(&[&[1.0], &[2.0]]);
        assert_eq!(a, close);
        assert_ne!(a, far);
        assert_ne!(a, other_shape);
    }

    #[test]
    fn resize_keeps_the_overlap() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.set_cols(3).unwrap();
        assert_eq!(a, m(&[&[1.0, 2.0, 0.0], &[3.0, 4.0, 0.0]]));
        a.set_rows(1).unwrap();
        assert_eq!(a, m(&[&[1.0, 2.0, 0.0]]));
        assert!(a.set_rows(0).is_err());
    }

    #[test]
    fn operators_compose() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[4.0, 3.0], &[2.0, 1.0]]);

        assert_eq!(&a + &b, m(&[&[5.0, 5.0], &[5.0, 5.0]]));
        assert_eq!(&a - &b, m(&[&[-3.0, -1.0], &[1.0, 3.0]]));
        assert_eq!(&a * 2.0, m(&[&[2.0, 4.0], &[6.0, 8.0]]));
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!(-&a, &a * -1.0);

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, &a * 3.0);
        c = a.clone();
        c *= &b;
        assert_eq!(c, &a * &b);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_add_panics_on_mismatch() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let _ = &a + &b;
    }
}
