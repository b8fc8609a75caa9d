//! Direct solvers for dense linear systems
//!
//! This module provides the Gauss-Jordan eliminator and its building blocks:
//! - [`gauss_jordan`]: full sweep with a separate right-hand side
//! - [`gauss_jordan_augmented`]: full sweep with the right-hand side as last column
//! - [`find_pivot`], [`swap_rows`], [`normalize_row`], [`eliminate_column`]: single steps
//! - [`extract_solution`]: read the solution off a reduced system

mod gauss_jordan;
mod solution;

pub use gauss_jordan::{
    EliminationConfig, EliminationReport, PivotPosition, eliminate_column, find_pivot,
    gauss_jordan, gauss_jordan_augmented, max_abs, normalize_row, swap_rows,
};
pub use solution::{Solution, extract_solution};
