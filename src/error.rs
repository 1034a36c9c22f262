//! Error types for the Jacobi solver.
//!
//! Only dimension and configuration problems abort a solve before it starts
//! iterating. Everything else is reported through the solution data: hitting
//! the iteration cap returns the best-effort iterate with `converged = false`,
//! and a zero diagonal entry surfaces as non-finite values in the returned
//! iterates rather than as a distinct error, so the caller always has a
//! deterministic trace to inspect.

use thiserror::Error;

/// Errors that can occur before a Jacobi solve starts iterating.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The system matrix is not square.
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NonSquareMatrix {
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// The right-hand side length does not match the matrix dimension.
    #[error("right-hand side dimension mismatch: expected {expected}, got {got}")]
    RhsDimensionMismatch {
        /// Expected length (the matrix dimension)
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// The initial guess length does not match the matrix dimension.
    #[error("initial guess dimension mismatch: expected {expected}, got {got}")]
    GuessDimensionMismatch {
        /// Expected length (the matrix dimension)
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// The convergence tolerance is not a positive finite number.
    #[error("invalid tolerance: {tolerance} (must be finite and > 0)")]
    InvalidTolerance {
        /// The invalid tolerance value
        tolerance: f64,
    },

    /// The iteration cap is zero.
    #[error("max_iterations must be > 0")]
    InvalidMaxIterations,
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if this is a dimension agreement error.
    ///
    /// This includes `NonSquareMatrix`, `RhsDimensionMismatch` and
    /// `GuessDimensionMismatch`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::NonSquareMatrix { .. }
                | SolverError::RhsDimensionMismatch { .. }
                | SolverError::GuessDimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// This includes `InvalidTolerance` and `InvalidMaxIterations`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidTolerance { .. } | SolverError::InvalidMaxIterations
        )
    }
}
