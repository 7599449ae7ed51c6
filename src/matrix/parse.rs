//! Parsing square matrices from plain text.
//!
//! The accepted format is a list of rows separated by `;` or newlines, each
//! row a run of whitespace- or comma-separated numbers, e.g. `"2 1; 1 2"`.
//! Opening and reading the file that holds the text stays with the caller.

use crate::error::SpektrError;
use crate::matrix::dense::DenseMatrix;
use faer::Mat;

/// Parse a square matrix of doubles from row-oriented text.
///
/// Ragged rows and non-square shapes are rejected; so is any entry that does
/// not parse as a number.
pub fn parse_matrix(text: &str) -> Result<Mat<f64>, SpektrError> {
    let rows: Vec<&str> = text
        .split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .collect();

    let n = rows.len();
    if n == 0 {
        return Err(SpektrError::EmptyMatrix);
    }

    // Column-major fill, one parsed row at a time.
    let mut data = vec![0.0f64; n * n];
    for (i, row) in rows.iter().enumerate() {
        let entries: Vec<&str> = row
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|e| !e.is_empty())
            .collect();
        if entries.len() != n {
            return Err(SpektrError::NotSquare(n, entries.len()));
        }
        for (j, entry) in entries.iter().enumerate() {
            let value = entry
                .parse::<f64>()
                .map_err(|e| SpektrError::Parse(format!("row {i}, entry {j} ({entry:?}): {e}")))?;
            data[j * n + i] = value;
        }
    }

    Ok(Mat::from_raw(n, n, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_rows() {
        let a = parse_matrix("2 1; 1 2").unwrap();
        assert_eq!(a.nrows(), 2);
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(0, 1)], 1.0);
        assert_eq!(a[(1, 0)], 1.0);
        assert_eq!(a[(1, 1)], 2.0);
    }

    #[test]
    fn parses_newline_rows_with_commas() {
        let a = parse_matrix("1.5, 0.0\n0.0, -2.5\n").unwrap();
        assert_eq!(a[(0, 0)], 1.5);
        assert_eq!(a[(1, 1)], -2.5);
        assert_eq!(a[(1, 0)], 0.0);
    }

    #[test]
    fn rejects_ragged_input() {
        assert!(matches!(
            parse_matrix("1 2; 3"),
            Err(SpektrError::NotSquare(2, 1))
        ));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(parse_matrix("  \n "), Err(SpektrError::EmptyMatrix)));
        assert!(matches!(parse_matrix("1 x; 2 3"), Err(SpektrError::Parse(_))));
    }
}
