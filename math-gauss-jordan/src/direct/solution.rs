//! Reading a solution off a reduced system
//!
//! After a full sweep every pivot row holds a single leading 1, so the
//! particular solution with all free variables set to zero is just the
//! right-hand side entry of each pivot row.

use crate::direct::gauss_jordan::EliminationReport;
use crate::error::{GaussJordanError, Result};
use crate::traits::RealField;
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

/// Solution read from a reduced system
#[derive(Debug, Clone)]
pub struct Solution<T: RealField> {
    /// Particular solution (free variables set to zero)
    pub x: Array1<T>,
    /// Columns without a pivot (free or dependent variables)
    pub free_columns: Vec<usize>,
    /// Rows reading `0 = c` with `|c|` above the scaled tolerance
    pub inconsistent_rows: Vec<usize>,
}

impl<T: RealField> Solution<T> {
    /// Whether no row contradicts the others
    pub fn is_consistent(&self) -> bool {
        self.inconsistent_rows.is_empty()
    }

    /// Whether the system has exactly one solution
    pub fn is_unique(&self) -> bool {
        self.is_consistent() && self.free_columns.is_empty()
    }
}

/// Read the solution of a system reduced by [`crate::gauss_jordan`].
///
/// `report` must be the report returned for this `a` and `b`. Rows past the
/// rank have all-zero coefficients after the sweep; a right-hand side above
/// `tolerance * report.magnitude` on such a row makes the system inconsistent.
/// The threshold follows the scale of the input, so multiplying the whole
/// system by a constant does not change the classification.
pub fn extract_solution<T, S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
    report: &EliminationReport,
    tolerance: T,
) -> Result<Solution<T>>
where
    T: RealField,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let (rows, columns) = a.dim();
    if rows != report.rows || columns != report.columns {
        return Err(GaussJordanError::ReportShapeMismatch {
            expected_rows: report.rows,
            expected_columns: report.columns,
            rows,
            columns,
        });
    }
    if b.len() != rows {
        return Err(GaussJordanError::RhsLengthMismatch {
            expected: rows,
            got: b.len(),
        });
    }

    let mut x = Array1::from_elem(columns, T::zero());
    for pivot in &report.pivots {
        x[pivot.column] = b[pivot.row];
    }

    let magnitude = T::from_f64(report.magnitude).unwrap_or_else(T::zero);
    let threshold = tolerance * magnitude;
    let inconsistent_rows = (report.rank()..rows)
        .filter(|&r| !b[r].is_zero_approx(threshold))
        .collect();

    Ok(Solution {
        x,
        free_columns: report.skipped_columns.clone(),
        inconsistent_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::gauss_jordan::{EliminationConfig, gauss_jordan};
    use approx::assert_relative_eq;
    use ndarray::{Axis, array};

    #[test]
    fn test_unique_solution() {
        let mut a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let mut b = array![5.0_f64, 10.0];
        let config = EliminationConfig::default();

        let report = gauss_jordan(&mut a, &mut b, &config).expect("elimination should succeed");
        let solution =
            extract_solution(&a, &b, &report, config.tolerance).expect("shapes should match");

        assert!(solution.is_unique());
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dependent_system_has_free_column() {
        let mut a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let mut b = array![3.0_f64, 6.0];
        let config = EliminationConfig::default();

        let report = gauss_jordan(&mut a, &mut b, &config).expect("elimination should succeed");
        let solution =
            extract_solution(&a, &b, &report, config.tolerance).expect("shapes should match");

        assert!(solution.is_consistent());
        assert!(!solution.is_unique());
        assert_eq!(solution.free_columns, vec![1]);
        assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-12);
        assert_eq!(solution.x[1], 0.0);
    }

    #[test]
    fn test_inconsistent_system() {
        let mut a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let mut b = array![3.0_f64, 7.0];
        let config = EliminationConfig::default();

        let report = gauss_jordan(&mut a, &mut b, &config).expect("elimination should succeed");
        let solution =
            extract_solution(&a, &b, &report, config.tolerance).expect("shapes should match");

        assert!(!solution.is_consistent());
        assert_eq!(solution.inconsistent_rows, vec![1]);
    }

    #[test]
    fn test_report_shape_mismatch() {
        let mut a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let mut b = array![1.0_f64, 2.0];
        let config = EliminationConfig::default();
        let report = gauss_jordan(&mut a, &mut b, &config).expect("elimination should succeed");

        let other = array![[1.0_f64]];
        let err = extract_solution(&other, &b, &report, config.tolerance)
            .expect_err("report belongs to another matrix");
        assert!(matches!(err, GaussJordanError::ReportShapeMismatch { .. }));
    }

    #[test]
    fn test_consistency_independent_of_scale() {
        // Row 1 is three times row 0; b holds the row sums so x = (1, 1, 1) solves it.
        let base = array![[0.1_f64, 0.7, 0.3], [0.3, 2.1, 0.9], [0.7, 0.2, 0.11]];
        let config = EliminationConfig::default();

        for scale in [1e-13, 1.0, 1e3, 1e5, 1e6] {
            let mut a = base.mapv(|v| v * scale);
            let mut b = a.sum_axis(Axis(1));
            let report = gauss_jordan(&mut a, &mut b, &config).expect("elimination should succeed");
            let solution =
                extract_solution(&a, &b, &report, config.tolerance).expect("shapes should match");

            assert!(solution.is_consistent(), "scale {scale}");
            assert_eq!(solution.free_columns, vec![2], "scale {scale}");
        }
    }

    #[test]
    fn test_inconsistency_independent_of_scale() {
        let base = array![[0.1_f64, 0.7, 0.3], [0.3, 2.1, 0.9], [0.7, 0.2, 0.11]];
        let config = EliminationConfig::default();

        for scale in [1e-13, 1.0, 1e3, 1e6] {
            let mut a = base.mapv(|v| v * scale);
            let mut b = a.sum_axis(Axis(1));
            b[1] += scale;
            let report = gauss_jordan(&mut a, &mut b, &config).expect("elimination should succeed");
            let solution =
                extract_solution(&a, &b, &report, config.tolerance).expect("shapes should match");

            assert_eq!(solution.inconsistent_rows, vec![2], "scale {scale}");
        }
    }
}
