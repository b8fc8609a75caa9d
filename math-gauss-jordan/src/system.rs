//! Owned linear system with a separate right-hand side

use crate::direct::{
    EliminationConfig, EliminationReport, Solution, extract_solution, gauss_jordan,
};
use crate::error::{GaussJordanError, Result};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Dense system `A x = b` whose shape has been validated.
///
/// Coefficients and right-hand side are co-indexed by row and are always
/// permuted together.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSystem<T: RealField> {
    coefficients: Array2<T>,
    rhs: Array1<T>,
}

impl<T: RealField> AugmentedSystem<T> {
    /// Build from row vectors and a right-hand side.
    ///
    /// Ragged rows are rejected; nothing is padded or truncated.
    pub fn from_rows(rows: Vec<Vec<T>>, rhs: Vec<T>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(GaussJordanError::EmptyMatrix {
                rows: nrows,
                columns: ncols,
            });
        }
        if let Some((row, got)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(GaussJordanError::RaggedRow {
                row,
                expected: ncols,
                got,
            });
        }
        if rhs.len() != nrows {
            return Err(GaussJordanError::RhsLengthMismatch {
                expected: nrows,
                got: rhs.len(),
            });
        }

        let coefficients = Array2::from_shape_fn((nrows, ncols), |(i, j)| rows[i][j]);
        Ok(Self {
            coefficients,
            rhs: Array1::from_vec(rhs),
        })
    }

    /// Build from rows whose last entry is the right-hand side
    pub fn from_augmented_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let mut coefficient_rows = Vec::with_capacity(rows.len());
        let mut rhs = Vec::with_capacity(rows.len());
        let expected = rows.first().map_or(0, Vec::len);

        for (row, mut values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(GaussJordanError::RaggedRow {
                    row,
                    expected,
                    got: values.len(),
                });
            }
            if let Some(last) = values.pop() {
                rhs.push(last);
            }
            coefficient_rows.push(values);
        }

        Self::from_rows(coefficient_rows, rhs)
    }

    /// Build from arrays, checking that `rhs` has one entry per row
    pub fn from_arrays(coefficients: Array2<T>, rhs: Array1<T>) -> Result<Self> {
        let (rows, columns) = coefficients.dim();
        if rows == 0 || columns == 0 {
            return Err(GaussJordanError::EmptyMatrix { rows, columns });
        }
        if rhs.len() != rows {
            return Err(GaussJordanError::RhsLengthMismatch {
                expected: rows,
                got: rhs.len(),
            });
        }
        Ok(Self { coefficients, rhs })
    }

    /// Number of equations
    pub fn nrows(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Number of unknowns
    pub fn ncols(&self) -> usize {
        self.coefficients.ncols()
    }

    /// Coefficient matrix
    pub fn coefficients(&self) -> &Array2<T> {
        &self.coefficients
    }

    /// Right-hand side
    pub fn rhs(&self) -> &Array1<T> {
        &self.rhs
    }

    /// Split into coefficient matrix and right-hand side
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.coefficients, self.rhs)
    }

    /// Reduce the system in place with Gauss-Jordan elimination
    pub fn reduce(&mut self, config: &EliminationConfig<T>) -> Result<EliminationReport> {
        gauss_jordan(&mut self.coefficients, &mut self.rhs, config)
    }

    /// Reduce the system and read off its solution
    pub fn solve(&mut self, config: &EliminationConfig<T>) -> Result<Solution<T>> {
        let report = self.reduce(config)?;
        extract_solution(&self.coefficients, &self.rhs, &report, config.tolerance)
    }
}
