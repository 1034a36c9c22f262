//! Jacobi relaxation solver
//!
//! The classic stationary iteration for square systems A*x = b. Every
//! component of the new iterate is computed from the *previous* full iterate:
//!
//! ```text
//! x_new[i] = (b[i] - Σ_{j≠i} A[i][j] * x[j]) / A[i][i]
//! ```
//!
//! Convergence is measured by the infinity norm of the step delta,
//! max_i |x_new[i] - x[i]|. The method converges for any starting point when
//! A is diagonally dominant; for other systems it may diverge, in which case
//! the best-effort iterate, the full trace and `converged = false` are still
//! returned.

use crate::error::{Result, SolverError};
use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign, ToPrimitive};

/// Jacobi solver configuration
#[derive(Debug, Clone)]
pub struct JacobiConfig<R> {
    /// Maximum number of sweeps before giving up
    pub max_iterations: usize,
    /// Convergence threshold on the infinity-norm step delta
    pub tolerance: R,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for JacobiConfig<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-6,
            print_interval: 0,
        }
    }
}

impl Default for JacobiConfig<f32> {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-4,
            print_interval: 0,
        }
    }
}

/// Jacobi solver result
///
/// The trace keeps every iterate in iteration order, so memory grows with
/// `iterations * n`. Callers requesting a large cap on a large system pay
/// that cost in exchange for the full trajectory.
#[derive(Debug, Clone)]
pub struct JacobiSolution<T> {
    /// Final estimate of the solution vector
    pub x: Array1<T>,
    /// Number of sweeps actually performed
    pub iterations: usize,
    /// Every iterate, one snapshot per completed sweep (`trace.len() == iterations`)
    pub trace: Vec<Array1<T>>,
    /// Infinity norm of the last step delta
    pub step_delta: T,
    /// Whether the tolerance was met within the iteration cap
    pub converged: bool,
}

/// Solve A*x = b with the Jacobi iteration, starting from the zero vector
///
/// # Errors
///
/// Fails before any sweep runs if A is not square, if `b` does not match the
/// matrix dimension, or if the configuration is invalid. A zero diagonal
/// entry is not checked: the division produces non-finite values that
/// propagate through the returned iterates.
pub fn jacobi<T>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &JacobiConfig<T>,
) -> Result<JacobiSolution<T>>
where
    T: Float + NumAssign + ToPrimitive,
{
    jacobi_with_guess(a, b, None, config)
}

/// Solve A*x = b with the Jacobi iteration and an optional initial guess
///
/// A missing guess starts from the zero vector. The guess must have the same
/// length as `b`.
pub fn jacobi_with_guess<T>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &JacobiConfig<T>,
) -> Result<JacobiSolution<T>>
where
    T: Float + NumAssign + ToPrimitive,
{
    let n = validate_inputs(a, b, x0, config)?;

    let mut x = match x0 {
        Some(x0) => x0.clone(),
        None => Array1::from_elem(n, T::zero()),
    };

    let mut trace: Vec<Array1<T>> = Vec::new();
    let mut iterations = 0usize;

    // Start above the tolerance so at least one sweep runs.
    let mut error = config.tolerance + T::one();

    while error > config.tolerance && iterations < config.max_iterations {
        let x_new = sweep(a, b, &x);
        error = max_abs_diff(&x_new, &x);
        x = x_new;
        iterations += 1;
        trace.push(x.clone());

        if config.print_interval > 0 && iterations % config.print_interval == 0 {
            log::info!(
                "Jacobi iteration {}: step delta = {:.6e}",
                iterations,
                error.to_f64().unwrap_or(f64::NAN)
            );
        }
    }

    // `converged` mirrors the loop's stop condition: a NaN step delta also
    // ends the loop, and the caller detects that case from non-finite
    // entries in the result.
    let converged = !(error > config.tolerance);

    Ok(JacobiSolution {
        x,
        iterations,
        trace,
        step_delta: error,
        converged,
    })
}

/// Check dimensions and configuration, returning the system size n
fn validate_inputs<T>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &JacobiConfig<T>,
) -> Result<usize>
where
    T: Float + ToPrimitive,
{
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolverError::NonSquareMatrix { rows, cols });
    }
    if b.len() != rows {
        return Err(SolverError::RhsDimensionMismatch {
            expected: rows,
            got: b.len(),
        });
    }
    if let Some(x0) = x0 {
        if x0.len() != rows {
            return Err(SolverError::GuessDimensionMismatch {
                expected: rows,
                got: x0.len(),
            });
        }
    }
    if !(config.tolerance > T::zero()) || !config.tolerance.is_finite() {
        return Err(SolverError::InvalidTolerance {
            tolerance: config.tolerance.to_f64().unwrap_or(f64::NAN),
        });
    }
    if config.max_iterations == 0 {
        return Err(SolverError::InvalidMaxIterations);
    }
    Ok(rows)
}

/// One full Jacobi sweep over all rows, using the previous iterate only
fn sweep<T>(a: &Array2<T>, b: &Array1<T>, x: &Array1<T>) -> Array1<T>
where
    T: Float + NumAssign,
{
    let n = b.len();
    let mut x_new = Array1::from_elem(n, T::zero());
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..n {
            if j != i {
                sum -= a[[i, j]] * x[j];
            }
        }
        x_new[i] = sum / a[[i, i]];
    }
    x_new
}

/// Infinity norm of x - y. Any NaN component makes the result NaN.
fn max_abs_diff<T: Float>(x: &Array1<T>, y: &Array1<T>) -> T {
    let mut max = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let d = (xi - yi).abs();
        if d.is_nan() {
            return d;
        }
        if d > max {
            max = d;
        }
    }
    max
}
