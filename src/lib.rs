//! Jacobi relaxation solver for dense linear systems
//!
//! This crate approximates the solution of a square system A*x = b with the
//! classic Jacobi iteration and reports the final estimate, the number of
//! sweeps performed, and the full per-iteration trajectory.
//!
//! # Features
//!
//! - **Jacobi iteration**: full sweeps from the previous iterate only, with
//!   convergence measured by the infinity-norm step delta
//! - **Full trace**: every iterate is retained for visualization and export
//! - **Input parsing**: strict text-to-number conversion for matrices,
//!   vectors and initial guesses (no silent NaN)
//! - **Trace export**: CSV rows at 8 decimal places, a 4-decimal headline
//!   for the final estimate
//! - **Generic scalar types**: works with `f64` and `f32`
//!
//! # Example
//!
//! ```
//! use jacobi_solver::{jacobi, JacobiConfig};
//! use ndarray::array;
//!
//! let a = array![[10.0, 1.0], [2.0, 10.0]];
//! let b = array![12.0, 13.0];
//!
//! let config = JacobiConfig {
//!     max_iterations: 50,
//!     tolerance: 1e-3,
//!     print_interval: 0,
//! };
//!
//! let solution = jacobi(&a, &b, &config).unwrap();
//! assert!(solution.converged);
//! assert_eq!(solution.trace.len(), solution.iterations);
//! ```
//!
//! Non-convergence is not an error: when the iteration cap is reached first,
//! the best-effort iterate and the trace are returned with
//! `converged = false`, and the caller decides how to surface that.

pub mod error;
pub mod input;
pub mod jacobi;
pub mod report;

// Re-export main types
pub use error::{Result, SolverError};
pub use input::{ParseError, parse_matrix, parse_vector};
pub use jacobi::{JacobiConfig, JacobiSolution, jacobi, jacobi_with_guess};
pub use report::{format_headline, save_trace_csv, trace_rows, write_trace_csv};
