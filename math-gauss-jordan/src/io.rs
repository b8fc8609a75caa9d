//! Text input and output for linear systems
//!
//! The input format is a whitespace-separated token stream:
//!
//! ```text
//! rows columns
//! a_00 a_01 ... (rows * columns coefficients, row-major)
//! b_0 b_1 ...   (rows right-hand side values)
//! ```
//!
//! Reduced systems are rendered one row per line, each coefficient followed by
//! a space, then ` | ` and the right-hand side value.

use crate::error::{GaussJordanError, ParseError};
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{ArrayBase, Data, Ix1, Ix2};
use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Whitespace token stream that remembers the index of the next token
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let position = self.position;
        let token = self
            .inner
            .next()
            .ok_or(ParseError::UnexpectedEof { expected, position })?;
        self.position += 1;
        token.parse().map_err(|_| ParseError::InvalidToken {
            expected,
            token: token.to_string(),
            position,
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parse a system from its text representation
pub fn parse_system<T>(input: &str) -> Result<AugmentedSystem<T>, ParseError>
where
    T: RealField + FromStr,
{
    let mut tokens = Tokens::new(input);
    let rows = tokens.next_value::<usize>("row count")?;
    let columns = tokens.next_value::<usize>("column count")?;
    if rows == 0 || columns == 0 {
        return Err(GaussJordanError::EmptyMatrix { rows, columns }.into());
    }

    let mut coefficients = Vec::with_capacity(rows);
    for _ in 0..rows {
        let row = (0..columns)
            .map(|_| tokens.next_value("coefficient"))
            .collect::<Result<Vec<T>, _>>()?;
        coefficients.push(row);
    }
    let rhs = (0..rows)
        .map(|_| tokens.next_value("right-hand side value"))
        .collect::<Result<Vec<T>, _>>()?;

    let count = tokens.remaining();
    if count > 0 {
        return Err(ParseError::TrailingTokens { count });
    }

    Ok(AugmentedSystem::from_rows(coefficients, rhs)?)
}

/// Read a system from any reader
pub fn read_system<T, R>(mut reader: R) -> Result<AugmentedSystem<T>, ParseError>
where
    T: RealField + FromStr,
    R: Read,
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_system(&input)
}

/// Read a system from a file
pub fn read_system_file<T, P>(path: P) -> Result<AugmentedSystem<T>, ParseError>
where
    T: RealField + FromStr,
    P: AsRef<Path>,
{
    let input = fs::read_to_string(path)?;
    parse_system(&input)
}

/// Render a system as text, one row per line
pub fn format_system<T, S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix1>) -> String
where
    T: RealField,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let mut out = String::new();
    for (row, rhs) in a.rows().into_iter().zip(b.iter()) {
        for value in row.iter() {
            let _ = write!(out, "{} ", value);
        }
        let _ = writeln!(out, " | {}", rhs);
    }
    out
}

/// Write a rendered system to any writer
pub fn write_system<T, S1, S2, W>(
    mut writer: W,
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
) -> std::io::Result<()>
where
    T: RealField,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    W: Write,
{
    writer.write_all(format_system(a, b).as_bytes())?;
    writer.flush()
}

/// Write a rendered system to a file, replacing its contents
pub fn write_system_file<T, S1, S2, P>(
    path: P,
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
) -> std::io::Result<()>
where
    T: RealField,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_system(BufWriter::new(file), a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_system() {
        let system: AugmentedSystem<f64> =
            parse_system("2 2\n2 1\n1 3\n5 10\n").expect("valid input");

        assert_eq!(system.coefficients(), &array![[2.0_f64, 1.0], [1.0, 3.0]]);
        assert_eq!(system.rhs(), &array![5.0_f64, 10.0]);
    }

    #[test]
    fn test_parse_system_any_whitespace() {
        let system: AugmentedSystem<f64> =
            parse_system("  1\t3 \n 1 -2.5 3e2 \n\n 4").expect("valid input");

        assert_eq!(system.coefficients(), &array![[1.0_f64, -2.5, 300.0]]);
        assert_eq!(system.rhs()[0], 4.0);
    }

    #[test]
    fn test_parse_system_missing_rhs() {
        let err = parse_system::<f64>("2 2\n2 1\n1 3\n5").expect_err("RHS is short");

        assert!(matches!(
            err,
            ParseError::UnexpectedEof {
                expected: "right-hand side value",
                position: 7
            }
        ));
    }

    #[test]
    fn test_parse_system_invalid_number() {
        let err = parse_system::<f64>("1 2\n1 x\n3").expect_err("bad coefficient");

        match err {
            ParseError::InvalidToken {
                expected,
                token,
                position,
            } => {
                assert_eq!(expected, "coefficient");
                assert_eq!(token, "x");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_system_negative_dimension() {
        let err = parse_system::<f64>("-1 2").expect_err("negative row count");
        assert!(matches!(
            err,
            ParseError::InvalidToken {
                expected: "row count",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_system_dimension_positions() {
        let err = parse_system::<f64>("2 2.5").expect_err("fractional column count");
        assert!(matches!(
            err,
            ParseError::InvalidToken {
                expected: "column count",
                position: 1,
                ..
            }
        ));

        let err = parse_system::<f64>("3").expect_err("column count missing");
        assert!(matches!(
            err,
            ParseError::UnexpectedEof {
                expected: "column count",
                position: 1
            }
        ));

        let err = parse_system::<f64>("").expect_err("empty input");
        assert!(matches!(
            err,
            ParseError::UnexpectedEof {
                expected: "row count",
                position: 0
            }
        ));
    }

    #[test]
    fn test_parse_system_zero_dimension() {
        let err = parse_system::<f64>("0 3").expect_err("zero rows");
        assert!(matches!(
            err,
            ParseError::Shape(GaussJordanError::EmptyMatrix { rows: 0, columns: 3 })
        ));
    }

    #[test]
    fn test_parse_system_trailing_tokens() {
        let err = parse_system::<f64>("1 1\n2\n4\n7 8").expect_err("extra values");
        assert!(matches!(err, ParseError::TrailingTokens { count: 2 }));
    }

    #[test]
    fn test_read_system_from_reader() {
        let input: &[u8] = b"1 1 5 10";
        let system: AugmentedSystem<f32> = read_system(input).expect("valid input");
        assert_eq!(system.coefficients()[[0, 0]], 5.0);
        assert_eq!(system.rhs()[0], 10.0);
    }

    #[test]
    fn test_format_system() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let b = array![1.0_f64, 3.5];

        assert_eq!(format_system(&a, &b), "1 0  | 1\n0 1  | 3.5\n");
    }

    #[test]
    fn test_write_system() {
        let a = array![[1.0_f64]];
        let b = array![2.0_f64];
        let mut out = Vec::new();

        write_system(&mut out, &a, &b).expect("writing to memory succeeds");

        assert_eq!(String::from_utf8(out).expect("utf-8"), "1  | 2\n");
    }
}
