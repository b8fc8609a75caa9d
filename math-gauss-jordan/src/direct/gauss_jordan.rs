//! Gauss-Jordan elimination solver
//!
//! Reduces a dense system to reduced row-echelon form with partial pivoting.
//! Every column is swept once: the largest remaining entry is moved to the
//! pivot row, the pivot row is scaled to a leading 1, and the column is cleared
//! in every other row. The right-hand side is carried through every row
//! operation, so the solution can be read off directly once the sweep ends.
//!
//! Columns whose best candidate is below the pivot tolerance are skipped and
//! reported, never treated as an error.

use crate::error::{GaussJordanError, Result};
use crate::traits::RealField;
use ndarray::{ArrayBase, Data, DataMut, Ix1, Ix2, s};
use serde::{Deserialize, Serialize};

/// Gauss-Jordan solver configuration
///
/// The zero-pivot test is relative to the input: a column has no pivot when its
/// best candidate is at most `tolerance * max|a_ij|`, with the maximum taken
/// over the coefficient block once, before the sweep starts. Scaling the whole
/// system therefore does not change which columns are skipped.
#[derive(Debug, Clone)]
pub struct EliminationConfig<R> {
    /// Zero-pivot tolerance relative to the largest coefficient magnitude
    pub tolerance: R,
    /// Log progress every N columns (0 = no output)
    pub print_interval: usize,
}

impl Default for EliminationConfig<f64> {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            print_interval: 0,
        }
    }
}

impl Default for EliminationConfig<f32> {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            print_interval: 0,
        }
    }
}

/// Position of a pivot that was normalized to 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotPosition {
    /// Row holding the leading 1
    pub row: usize,
    /// Column that was cleared
    pub column: usize,
}

/// Outcome of a full column sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliminationReport {
    /// Number of matrix rows
    pub rows: usize,
    /// Number of coefficient columns swept
    pub columns: usize,
    /// Pivots in the order they were found
    pub pivots: Vec<PivotPosition>,
    /// Columns where no usable pivot was found
    pub skipped_columns: Vec<usize>,
    /// Number of row exchanges performed
    pub row_exchanges: usize,
    /// Largest absolute entry of the coefficients and right-hand side before the sweep
    pub magnitude: f64,
}

impl EliminationReport {
    fn new(rows: usize, columns: usize, magnitude: f64) -> Self {
        Self {
            rows,
            columns,
            pivots: Vec::with_capacity(rows.min(columns)),
            skipped_columns: Vec::new(),
            row_exchanges: 0,
            magnitude,
        }
    }

    /// Number of pivots found
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Whether every coefficient column received a pivot
    pub fn is_full_rank(&self) -> bool {
        self.skipped_columns.is_empty()
    }

    /// Pivot row for a column, if the column received one
    pub fn pivot_row_of(&self, column: usize) -> Option<usize> {
        self.pivots
            .iter()
            .find(|pivot| pivot.column == column)
            .map(|pivot| pivot.row)
    }
}

/// Largest absolute value in the matrix (0 for an all-zero matrix)
pub fn max_abs<T, S>(a: &ArrayBase<S, Ix2>) -> T
where
    T: RealField,
    S: Data<Elem = T>,
{
    a.iter().fold(T::zero(), |acc, v| acc.max(v.abs()))
}

/// Find the row in `[pivot_row, nrows)` with the largest absolute value in `column`.
///
/// `threshold` is absolute here; [`gauss_jordan`] passes the scaled threshold
/// described on [`EliminationConfig`]. Returns `None` when the best candidate
/// does not exceed `threshold`, including when no rows remain at or below
/// `pivot_row`.
///
/// # Panics
///
/// Panics if `column >= a.ncols()` while `pivot_row < a.nrows()`.
pub fn find_pivot<T, S>(
    a: &ArrayBase<S, Ix2>,
    pivot_row: usize,
    column: usize,
    threshold: T,
) -> Option<usize>
where
    T: RealField,
    S: Data<Elem = T>,
{
    let mut best_row = pivot_row;
    let mut best_abs = T::zero();

    for scan_row in pivot_row..a.nrows() {
        let candidate = a[[scan_row, column]].abs();
        if candidate > best_abs {
            best_abs = candidate;
            best_row = scan_row;
        }
    }

    if best_abs.is_zero_approx(threshold) {
        None
    } else {
        Some(best_row)
    }
}

/// Exchange two rows, including their right-hand side entries
///
/// # Panics
///
/// Panics if `first != second` and either one is out of bounds for `a` or `b`.
pub fn swap_rows<T, S1, S2>(
    a: &mut ArrayBase<S1, Ix2>,
    b: &mut ArrayBase<S2, Ix1>,
    first: usize,
    second: usize,
) where
    T: RealField,
    S1: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
{
    if first == second {
        return;
    }
    for col in 0..a.ncols() {
        a.swap([first, col], [second, col]);
    }
    b.swap(first, second);
}

/// Scale `row` so that the entry in `column` becomes exactly 1.
///
/// The caller guarantees the pivot entry is nonzero (see [`find_pivot`]).
///
/// # Panics
///
/// Panics if `row` is out of bounds for `a` or `b`, or `column >= a.ncols()`.
pub fn normalize_row<T, S1, S2>(
    a: &mut ArrayBase<S1, Ix2>,
    b: &mut ArrayBase<S2, Ix1>,
    row: usize,
    column: usize,
) where
    T: RealField,
    S1: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
{
    let inv_pivot = a[[row, column]].recip();
    a.row_mut(row).mapv_inplace(|v| v * inv_pivot);
    b[row] *= inv_pivot;
    a[[row, column]] = T::one();
}

/// Clear `column` in every row except `pivot_row`.
///
/// Expects the pivot row to be normalized already.
///
/// # Panics
///
/// Panics if `pivot_row >= b.len()`. Panics if a row other than `pivot_row`
/// must be read or cleared and `column`, `pivot_row` or that row is out of
/// bounds for `a` or `b`.
pub fn eliminate_column<T, S1, S2>(
    a: &mut ArrayBase<S1, Ix2>,
    b: &mut ArrayBase<S2, Ix1>,
    pivot_row: usize,
    column: usize,
) where
    T: RealField,
    S1: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
{
    let pivot_rhs = b[pivot_row];

    for r in 0..a.nrows() {
        if r == pivot_row {
            continue;
        }
        let factor = a[[r, column]];
        if factor == T::zero() {
            continue;
        }

        for col in 0..a.ncols() {
            let update = factor * a[[pivot_row, col]];
            a[[r, col]] -= update;
        }
        b[r] -= factor * pivot_rhs;
        a[[r, column]] = T::zero();
    }
}

fn validate<T: RealField>(
    rows: usize,
    columns: usize,
    rhs_len: usize,
    config: &EliminationConfig<T>,
) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(GaussJordanError::EmptyMatrix { rows, columns });
    }
    if rhs_len != rows {
        return Err(GaussJordanError::RhsLengthMismatch {
            expected: rows,
            got: rhs_len,
        });
    }
    if !config.tolerance.is_finite() || config.tolerance <= T::zero() {
        return Err(GaussJordanError::InvalidTolerance {
            tolerance: config.tolerance.to_f64_lossy(),
        });
    }
    Ok(())
}

/// Sweep every column of an already validated system
fn sweep<T, S1, S2>(
    a: &mut ArrayBase<S1, Ix2>,
    b: &mut ArrayBase<S2, Ix1>,
    config: &EliminationConfig<T>,
) -> EliminationReport
where
    T: RealField,
    S1: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
{
    let (rows, columns) = a.dim();
    let coefficient_max = max_abs(a);
    let rhs_max = b.iter().fold(T::zero(), |acc, v| acc.max(v.abs()));
    let mut report =
        EliminationReport::new(rows, columns, coefficient_max.max(rhs_max).to_f64_lossy());
    let mut pivot_row = 0;
    let threshold = config.tolerance * coefficient_max;

    for column in 0..columns {
        match find_pivot(a, pivot_row, column, threshold) {
            Some(best_row) => {
                if best_row != pivot_row {
                    log::debug!(
                        "Gauss-Jordan column {}: exchanging rows {} and {}",
                        column,
                        pivot_row,
                        best_row
                    );
                    swap_rows(a, b, pivot_row, best_row);
                    report.row_exchanges += 1;
                }
                normalize_row(a, b, pivot_row, column);
                eliminate_column(a, b, pivot_row, column);
                report.pivots.push(PivotPosition {
                    row: pivot_row,
                    column,
                });
                pivot_row += 1;
            }
            None => {
                log::debug!(
                    "Gauss-Jordan column {}: no pivot above {:.3e}, skipping",
                    column,
                    threshold.to_f64_lossy()
                );
                report.skipped_columns.push(column);
            }
        }

        if config.print_interval > 0 && (column + 1) % config.print_interval == 0 {
            log::info!(
                "Gauss-Jordan column {}/{}: {} pivots found",
                column + 1,
                columns,
                report.rank()
            );
        }
    }

    if config.print_interval > 0 {
        log::info!(
            "Gauss-Jordan finished: rank {} of {}x{}, {} row exchanges, {} skipped columns",
            report.rank(),
            rows,
            columns,
            report.row_exchanges,
            report.skipped_columns.len()
        );
    }

    report
}

/// Reduce `a` and its right-hand side `b` in place.
///
/// Shapes and the tolerance are checked before anything is modified; on error
/// both inputs are left untouched.
pub fn gauss_jordan<T, S1, S2>(
    a: &mut ArrayBase<S1, Ix2>,
    b: &mut ArrayBase<S2, Ix1>,
    config: &EliminationConfig<T>,
) -> Result<EliminationReport>
where
    T: RealField,
    S1: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
{
    let (rows, columns) = a.dim();
    validate(rows, columns, b.len(), config)?;
    Ok(sweep(a, b, config))
}

/// Reduce an augmented matrix whose last column is the right-hand side.
///
/// Only the coefficient columns are swept; the last column is carried along
/// with every row operation but never pivoted on.
pub fn gauss_jordan_augmented<T, S>(
    m: &mut ArrayBase<S, Ix2>,
    config: &EliminationConfig<T>,
) -> Result<EliminationReport>
where
    T: RealField,
    S: DataMut<Elem = T>,
{
    let (rows, total_columns) = m.dim();
    let columns = total_columns.saturating_sub(1);
    validate(rows, columns, rows, config)?;

    let (mut a, mut b) = m.multi_slice_mut((s![.., ..columns], s![.., columns]));
    Ok(sweep(&mut a, &mut b, config))
}
