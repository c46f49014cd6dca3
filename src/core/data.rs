//! CSV → series ingest with zero-allocation float parsing.
//!
//! Each column is one series.  If the first non-comment row contains any
//! field that does not parse as a float it is taken as a header naming the
//! series; otherwise names `col1..colN` are synthesized and the row counts
//! as data.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::series::{Series, SeriesSet};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    ColumnCount { want: usize, got: usize },
    BadFloat { col: usize, text: String },
    NoRows,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::ColumnCount { want, got } => {
                write!(f, "line {}: expected {} columns, got {}", self.line, want, got)
            }
            ParseErrorKind::BadFloat { col, text } => {
                write!(f, "line {}: column {}: invalid value '{}'", self.line, col, text)
            }
            ParseErrorKind::NoRows => write!(f, "no data rows found"),
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// U+2212 (minus sign) → ASCII '-', in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, col: usize) -> Result<f64, ParseCsvError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            col,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                col,
                text: "NaN".into(),
            },
        })
    }
}

fn split_fields(buf: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    loop {
        let end = buf[start..]
            .iter()
            .position(|&b| b == b',')
            .map_or(buf.len(), |p| start + p);
        out.push(trim(&buf[start..end]));
        if end == buf.len() {
            break;
        }
        start = end + 1;
    }
    out
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_csv_fast<R: Read>(src: R) -> Result<SeriesSet, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut names = Vec::<String>::new();
    let mut columns = Vec::<Vec<f64>>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        let fields = split_fields(&buf);

        // First row decides the column count and, when non-numeric, the names.
        if names.is_empty() {
            let header = fields
                .iter()
                .any(|f| lexical_core::parse::<f64>(f).is_err());
            if header {
                names = fields
                    .iter()
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect();
                columns = vec![Vec::new(); names.len()];
                continue;
            }
            names = (1..=fields.len()).map(|i| format!("col{i}")).collect();
            columns = vec![Vec::new(); names.len()];
            // fall through: the row is data
        }

        if fields.len() != names.len() {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::ColumnCount {
                    want: names.len(),
                    got: fields.len(),
                },
            });
        }
        for (i, field) in fields.iter().enumerate() {
            columns[i].push(parse_f64(field, line_no, i + 1)?);
        }
    }

    if columns.iter().all(Vec::is_empty) {
        return Err(ParseCsvError {
            line: 0,
            kind: ParseErrorKind::NoRows,
        });
    }

    Ok(names
        .into_iter()
        .zip(columns)
        .map(|(name, samples)| (name, Series::new(samples)))
        .collect())
}

pub fn read_csv_from_path(path: &str) -> Result<SeriesSet, ParseCsvError> {
    if path == "-" {
        read_csv_fast(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv_fast(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_names_the_series() {
        let csv = "load,temp\n1.0,20.5\n2.0,21.0\n";
        let set = read_csv_fast(csv.as_bytes()).unwrap();
        assert_eq!(set.get("load").unwrap().samples, vec![1.0, 2.0]);
        assert_eq!(set.get("temp").unwrap().samples, vec![20.5, 21.0]);
    }

    #[test]
    fn headerless_input_synthesizes_names() {
        let csv = "1,2\n3,4\n";
        let set = read_csv_fast(csv.as_bytes()).unwrap();
        assert_eq!(set.get("col1").unwrap().samples, vec![1.0, 3.0]);
        assert_eq!(set.get("col2").unwrap().samples, vec![2.0, 4.0]);
    }

    #[test]
    fn unicode_minus_and_comments_are_handled() {
        let csv = "# comment\n\u{2212}1.5\n2.5\n";
        let set = read_csv_fast(csv.as_bytes()).unwrap();
        assert_eq!(set.get("col1").unwrap().samples, vec![-1.5, 2.5]);
    }

    #[test]
    fn ragged_rows_error_with_line_number() {
        let csv = "a,b\n1,2\n3\n";
        let err = read_csv_fast(csv.as_bytes()).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(
            err.kind,
            ParseErrorKind::ColumnCount { want: 2, got: 1 }
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(read_csv_fast("".as_bytes()).is_err());
        assert!(read_csv_fast("a,b\n".as_bytes()).is_err());
    }
}
