//! Dense Gauss-Jordan elimination with partial pivoting
//!
//! This crate reduces a linear system `A x = b` to reduced row-echelon form in
//! place, so the solution can be read directly from the right-hand side.
//!
//! # Features
//!
//! - **Eliminator**: column sweep with partial pivoting, on a separate
//!   right-hand side ([`gauss_jordan`]) or an augmented matrix
//!   ([`gauss_jordan_augmented`])
//! - **Rank-deficient systems**: columns without a usable pivot are skipped and
//!   reported, never treated as an error
//! - **Solution reading**: particular solution, free columns and inconsistent
//!   rows ([`extract_solution`])
//! - **Text I/O**: loader and renderer for the plain-text system format
//! - **Generic Scalar Types**: Works with f64, f32
//!
//! # Example
//!
//! ```
//! use math_audio_gauss_jordan::{EliminationConfig, gauss_jordan};
//! use ndarray::array;
//!
//! let mut a = array![[2.0_f64, 1.0], [1.0, 3.0]];
//! let mut b = array![5.0_f64, 10.0];
//!
//! let report = gauss_jordan(&mut a, &mut b, &EliminationConfig::default())?;
//! assert_eq!(report.rank(), 2);
//! assert!((b[0] - 1.0).abs() < 1e-12);
//! assert!((b[1] - 3.0).abs() < 1e-12);
//! # Ok::<(), math_audio_gauss_jordan::GaussJordanError>(())
//! ```
//!
//! Pivots whose magnitude is merely the largest available, without being
//! significant, are not detected; callers needing conditioning diagnostics
//! must add their own checks.

pub mod direct;
pub mod error;
pub mod io;
pub mod system;
pub mod traits;

// Re-export main types
pub use error::{GaussJordanError, ParseError, Result};
pub use system::AugmentedSystem;
pub use traits::RealField;

// Re-export the eliminator
pub use direct::{
    EliminationConfig, EliminationReport, PivotPosition, Solution, eliminate_column,
    extract_solution, find_pivot, gauss_jordan, gauss_jordan_augmented, max_abs, normalize_row,
    swap_rows,
};

// Re-export text I/O
pub use io::{
    format_system, parse_system, read_system, read_system_file, write_system, write_system_file,
};
