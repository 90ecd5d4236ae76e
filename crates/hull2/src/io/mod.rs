//! Whitespace-delimited token input and point-cloud readers.
//!
//! - `TokenSource`: anything that yields string tokens; typed accessors
//!   (`next_int`, `next_long`, `next_double`, `next_char`) are provided on top.
//! - `TokenReader`: `TokenSource` over any `BufRead`, one line buffered at a time.
//! - `read_points`, `read_point_cloud`: `x y` pairs into `Vec<Point>`.
//!
//! Code cross-refs: `hull::graham_scan` (typical consumer)

use std::io::BufRead;
use std::str::FromStr;

use crate::error::ReadError;
use crate::geom2::Point;

/// Source of whitespace-delimited tokens.
pub trait TokenSource {
    /// Next token, skipping blank lines. `ReadError::EndOfInput` once exhausted.
    fn next_token(&mut self) -> Result<String, ReadError>;

    fn next_int(&mut self) -> Result<i32, ReadError> {
        parse_token(self.next_token()?, "i32")
    }

    fn next_long(&mut self) -> Result<i64, ReadError> {
        parse_token(self.next_token()?, "i64")
    }

    fn next_double(&mut self) -> Result<f64, ReadError> {
        parse_token(self.next_token()?, "f64")
    }

    /// First character of the next token.
    fn next_char(&mut self) -> Result<char, ReadError> {
        let token = self.next_token()?;
        let first = token.chars().next();
        first.ok_or(ReadError::Format {
            token,
            expected: "char",
        })
    }
}

fn parse_token<T: FromStr>(token: String, expected: &'static str) -> Result<T, ReadError> {
    token
        .parse()
        .map_err(|_| ReadError::Format { token, expected })
}

/// Buffered tokenizer over a `BufRead`.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
    lines_read: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            lines_read: 0,
        }
    }

    /// Number of lines pulled from the underlying reader so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Rest of the current line (without the line break) if it has any
    /// non-blank content left, otherwise the whole next line.
    pub fn next_line(&mut self) -> Result<String, ReadError> {
        if self.line[self.pos..].trim().is_empty() && !self.fill()? {
            return Err(ReadError::EndOfInput);
        }
        let rest = self.line[self.pos..].trim_end_matches(['\n', '\r']).to_string();
        self.pos = self.line.len();
        Ok(rest)
    }

    /// Replace the buffered line with the next one. `false` at end of input.
    fn fill(&mut self) -> Result<bool, ReadError> {
        self.line.clear();
        self.pos = 0;
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.lines_read += 1;
        tracing::trace!(line = self.lines_read, "token reader: line buffered");
        Ok(true)
    }
}

impl<R: BufRead> TokenSource for TokenReader<R> {
    fn next_token(&mut self) -> Result<String, ReadError> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let tail = &rest[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                let token = tail[..len].to_string();
                self.pos += start + len;
                return Ok(token);
            }
            if !self.fill()? {
                return Err(ReadError::EndOfInput);
            }
        }
    }
}

/// Read `n` points given as `x y` pairs.
///
/// Non-finite coordinates (`NaN`, `inf`) are rejected as `ReadError::Format`.
pub fn read_points<S: TokenSource + ?Sized>(
    src: &mut S,
    n: usize,
) -> Result<Vec<Point>, ReadError> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let x = next_coordinate(src)?;
        let y = next_coordinate(src)?;
        out.push(Point::new(x, y));
    }
    Ok(out)
}

/// Read a point count followed by that many `x y` pairs.
pub fn read_point_cloud<S: TokenSource + ?Sized>(src: &mut S) -> Result<Vec<Point>, ReadError> {
    let n: usize = parse_token(src.next_token()?, "point count")?;
    tracing::debug!(n, "reading point cloud");
    read_points(src, n)
}

fn next_coordinate<S: TokenSource + ?Sized>(src: &mut S) -> Result<f64, ReadError> {
    let token = src.next_token()?;
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ReadError::Format {
            token,
            expected: "finite f64",
        }),
    }
}

#[cfg(test)]
mod tests;
