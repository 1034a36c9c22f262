//! Iteration trace export
//!
//! Rendering a solve for the end user (PDF report, on-screen summary) is the
//! caller's job; this module produces the data those renderers consume:
//! 1-based `(iteration, iterate)` rows in iteration order, a CSV rendition of
//! the full trajectory, and a one-line headline for the final estimate.
//!
//! The solver returns full-precision values; rounding happens only here, at
//! the export boundary: 8 decimal places for trace rows, 4 for the headline.

use crate::jacobi::JacobiSolution;
use ndarray::Array1;
use num_traits::{Float, ToPrimitive};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Decimal places for exported trace rows.
const TRACE_PRECISION: usize = 8;
/// Decimal places for the headline solution string.
const HEADLINE_PRECISION: usize = 4;

/// Iterates paired with their 1-based iteration index, in iteration order.
pub fn trace_rows<T>(solution: &JacobiSolution<T>) -> impl Iterator<Item = (usize, &Array1<T>)> {
    solution
        .trace
        .iter()
        .enumerate()
        .map(|(i, iterate)| (i + 1, iterate))
}

/// Write the full trace as CSV: an `iteration,x1,..,xn` header followed by
/// one row per sweep.
pub fn write_trace_csv<T, W>(solution: &JacobiSolution<T>, out: &mut W) -> io::Result<()>
where
    T: Float + ToPrimitive,
    W: Write,
{
    write!(out, "iteration")?;
    for i in 0..solution.x.len() {
        write!(out, ",x{}", i + 1)?;
    }
    writeln!(out)?;

    for (iteration, iterate) in trace_rows(solution) {
        write!(out, "{}", iteration)?;
        for v in iterate.iter() {
            write!(
                out,
                ",{:.prec$}",
                v.to_f64().unwrap_or(f64::NAN),
                prec = TRACE_PRECISION
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the trace CSV to a file.
pub fn save_trace_csv<T, P>(solution: &JacobiSolution<T>, path: P) -> io::Result<()>
where
    T: Float + ToPrimitive,
    P: AsRef<Path>,
{
    let mut file = BufWriter::new(File::create(path)?);
    write_trace_csv(solution, &mut file)?;
    file.flush()
}

/// Format the final estimate as a one-line summary `x1 = v, x2 = v, ...`.
pub fn format_headline<T>(solution: &JacobiSolution<T>) -> String
where
    T: Float + ToPrimitive,
{
    let parts: Vec<String> = solution
        .x
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "x{} = {:.prec$}",
                i + 1,
                v.to_f64().unwrap_or(f64::NAN),
                prec = HEADLINE_PRECISION
            )
        })
        .collect();
    parts.join(", ")
}
