//! Row-oriented categorical datasets.
//!
//! Input is comma-separated integer codes, one observation per line. Lines
//! that contain the unknown marker `?` are dropped before parsing; blank
//! lines are skipped.

pub mod mammographic;

use credal_common::{Code, Error, Result, Row};

/// Marker for an unknown value in the raw text.
pub const UNKNOWN_MARKER: &str = "?";

/// Parse rows of `width` comma-separated codes and apply `process` to each.
///
/// Line numbers in errors are 1-based.
pub fn parse_rows<F>(text: &str, width: usize, mut process: F) -> Result<Vec<Row>>
where
    F: FnMut(Row) -> Row,
{
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.contains(&UNKNOWN_MARKER) {
            continue;
        }
        if fields.len() != width {
            return Err(Error::DatasetParse {
                line: index + 1,
                message: format!("expected {} fields, found {}", width, fields.len()),
            });
        }
        let row = fields
            .iter()
            .map(|field| {
                field.parse::<Code>().map_err(|e| Error::DatasetParse {
                    line: index + 1,
                    message: format!("invalid code {:?}: {}", field, e),
                })
            })
            .collect::<Result<Row>>()?;
        rows.push(process(row));
    }
    Ok(rows)
}

/// Keep at most the first `limit` rows.
pub fn take_prefix(mut rows: Vec<Row>, limit: Option<usize>) -> Vec<Row> {
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_processes_rows() {
        let rows = parse_rows("1,2\n3,4\n", 2, |mut r| {
            r[0] *= 10;
            r
        })
        .unwrap();
        assert_eq!(rows, vec![vec![10, 2], vec![30, 4]]);
    }

    #[test]
    fn unknown_rows_are_dropped() {
        let rows = parse_rows("1,?\n2,3\n?,x", 2, |r| r).unwrap();
        assert_eq!(rows, vec![vec![2, 3]]);
    }

    #[test]
    fn blank_lines_and_whitespace_ignored() {
        let rows = parse_rows("\n 1 , 2 \n\n", 2, |r| r).unwrap();
        assert_eq!(rows, vec![vec![1, 2]]);
    }

    #[test]
    fn bad_integer_reports_line() {
        let err = parse_rows("1,2\n1,x\n", 2, |r| r).unwrap_err();
        match err {
            Error::DatasetParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_width_is_an_error() {
        let err = parse_rows("1,2,3\n", 2, |r| r).unwrap_err();
        assert_eq!(err.code(), 22);
    }

    #[test]
    fn prefix_limit() {
        let rows = vec![vec![1], vec![2], vec![3]];
        assert_eq!(take_prefix(rows.clone(), Some(2)).len(), 2);
        assert_eq!(take_prefix(rows.clone(), Some(10)).len(), 3);
        assert_eq!(take_prefix(rows, None).len(), 3);
    }
}
