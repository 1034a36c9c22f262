//! Text input parsing for matrices and vectors
//!
//! The solver expects fully populated numeric inputs. This module is the
//! validate-and-parse step between raw text (a whitespace-separated initial
//! guess like `"1 1 1"`, a matrix with one row per line) and the solver:
//! every token must parse as a finite number, so no NaN from an unset or
//! malformed cell ever reaches the iteration.

use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors produced while parsing text input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input contains no tokens at all.
    #[error("input is empty")]
    Empty,

    /// A token is not a finite number.
    #[error("invalid number {token:?} at position {position}")]
    InvalidNumber {
        /// The offending token
        token: String,
        /// Zero-based token position within its row
        position: usize,
    },

    /// A matrix row has a different length from the first row.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Entries in the first row
        expected: usize,
        /// Entries in the offending row
        got: usize,
    },
}

/// Parse a whitespace-separated list of numbers, e.g. an initial guess `"1 1 1"`.
pub fn parse_vector(text: &str) -> Result<Array1<f64>, ParseError> {
    let mut values = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        values.push(parse_token(token, position)?);
    }
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Array1::from_vec(values))
}

/// Parse a matrix with one row per line; `;` is also accepted as a row
/// separator. All rows must have the same number of entries.
pub fn parse_matrix(text: &str) -> Result<Array2<f64>, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for line in text.split(['\n', ';']) {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (position, token) in line.split_whitespace().enumerate() {
            row.push(parse_token(token, position)?);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    let cols = rows[0].len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(ParseError::RaggedRow {
                row: i,
                expected: cols,
                got: row.len(),
            });
        }
    }

    let data: Vec<f64> = rows.into_iter().flatten().collect();
    let num_rows = data.len() / cols;
    Ok(Array2::from_shape_vec((num_rows, cols), data).expect("row lengths already checked"))
}

fn parse_token(token: &str, position: usize) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            token: token.to_string(),
            position,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_vector() {
        let v = parse_vector("1 1 1").unwrap();
        assert_eq!(v, array![1.0, 1.0, 1.0]);

        let v = parse_vector("  1.5\t-2e3  0.25 ").unwrap();
        assert_eq!(v, array![1.5, -2000.0, 0.25]);
    }

    #[test]
    fn test_parse_vector_rejects_bad_tokens() {
        let err = parse_vector("1 abc 3").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                token: "abc".to_string(),
                position: 1,
            }
        );

        // NaN would otherwise flow silently into the iteration
        let err = parse_vector("1 NaN").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { position: 1, .. }));

        assert_eq!(parse_vector("   ").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_parse_matrix() {
        let a = parse_matrix("10 1\n2 10").unwrap();
        assert_eq!(a, array![[10.0, 1.0], [2.0, 10.0]]);

        let a = parse_matrix("0 1; 1 1").unwrap();
        assert_eq!(a, array![[0.0, 1.0], [1.0, 1.0]]);
    }

    #[test]
    fn test_parse_matrix_skips_blank_lines() {
        let a = parse_matrix("\n4 1\n\n1 3\n").unwrap();
        assert_eq!(a, array![[4.0, 1.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_parse_matrix_rejects_ragged_rows() {
        let err = parse_matrix("1 2\n3").unwrap_err();
        assert_eq!(
            err,
            ParseError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn test_parse_matrix_rejects_empty() {
        assert_eq!(parse_matrix("").unwrap_err(), ParseError::Empty);
        assert_eq!(parse_matrix(" ;\n; ").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidNumber {
            token: "x".to_string(),
            position: 0,
        };
        assert_eq!(err.to_string(), "invalid number \"x\" at position 0");
    }
}
