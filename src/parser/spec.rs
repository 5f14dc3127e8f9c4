// This file is part of expando-rs.
// Copyright (C) 2026 the expando-rs contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Parses the `[flags][width][.precision]` prefix of an expando
//!
//! ```text
//! spec ::= ("-"|"=")? ("0")? digits? ("." digits)?
//! ```

use super::cursor::Cursor;
use crate::error::{ParseError, SyntaxError};
use crate::node::{FormatSpec, Justify};

/// Consumes a format spec from `cursor`, leaving the cursor positioned at the
/// first byte of the code that follows.
pub(super) fn parse_spec(cursor: &mut Cursor) -> Result<FormatSpec, ParseError> {
    let mut spec = FormatSpec::default();

    match cursor.peek() {
        Some('-') => {
            spec.justify = Justify::Left;
            cursor.bump();
        }
        Some('=') => {
            spec.justify = Justify::Centre;
            cursor.bump();
        }
        _ => {}
    }

    if cursor.peek() == Some('0') {
        spec.leader = '0';
        cursor.bump();
    }

    if let Some(width) = parse_digits(cursor)? {
        spec.min_width = width;
    }

    if cursor.peek() == Some('.') {
        cursor.bump();
        let precision = parse_digits(cursor)?.ok_or_else(|| {
            ParseError::new(SyntaxError::MalformedSpec, cursor.position())
        })?;
        spec.max_width = Some(precision);
    }

    Ok(spec)
}

/// Consumes a run of decimal digits, returning `None` if there were none.
fn parse_digits(cursor: &mut Cursor) -> Result<Option<usize>, ParseError> {
    let start = cursor.rest();
    let mut len = 0;
    for c in start.chars() {
        if c.is_ascii_digit() {
            len += c.len_utf8();
        } else {
            break;
        }
    }
    if len == 0 {
        return Ok(None);
    }
    let digits = &start[..len];
    for _ in digits.chars() {
        cursor.bump();
    }
    digits
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ParseError::new(SyntaxError::MalformedSpec, cursor.position()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_of(s: &str) -> FormatSpec {
        let mut c = Cursor::new(s);
        parse_spec(&mut c).unwrap()
    }

    #[test]
    fn default_spec_is_right_justified_no_width() {
        let spec = spec_of("c");
        assert_eq!(spec.justify, Justify::Right);
        assert_eq!(spec.min_width, 0);
        assert_eq!(spec.max_width, None);
        assert_eq!(spec.leader, ' ');
    }

    #[test]
    fn left_justify_flag() {
        let spec = spec_of("-5c");
        assert_eq!(spec.justify, Justify::Left);
        assert_eq!(spec.min_width, 5);
    }

    #[test]
    fn centre_justify_flag() {
        assert_eq!(spec_of("=3c").justify, Justify::Centre);
    }

    #[test]
    fn zero_pad_leader_is_distinct_from_width_digit() {
        let spec = spec_of("05c");
        assert_eq!(spec.leader, '0');
        assert_eq!(spec.min_width, 5);
    }

    #[test]
    fn precision_sets_max_width() {
        let spec = spec_of(".2c");
        assert_eq!(spec.max_width, Some(2));
    }

    #[test]
    fn dot_without_digits_is_malformed() {
        let mut c = Cursor::new(".c");
        let err = parse_spec(&mut c).unwrap_err();
        assert_eq!(err.cause, SyntaxError::MalformedSpec);
    }
}
