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

//! Parses `[flags][width][.prec]CODE[arg]`, shared by plain expandos and by
//! the boolean test inside a conditional

use super::cursor::Cursor;
use super::spec::parse_spec;
use crate::definition::ExpandoDefinition;
use crate::error::{ParseError, SyntaxError};
use crate::node::{DefinitionId, FormatSpec};

/// The parsed pieces common to [`Node::Expando`](crate::Node::Expando) and
/// [`Node::CondBool`](crate::Node::CondBool).
#[derive(Debug)]
pub(super) struct ExpandoBody {
    pub code: String,
    pub arg: Option<String>,
    pub definition: DefinitionId,
    pub format: FormatSpec,
}

pub(super) fn parse_expando_body(
    cursor: &mut Cursor,
    defs: &[ExpandoDefinition],
) -> Result<ExpandoBody, ParseError> {
    let format = parse_spec(cursor)?;
    let code_position = cursor.position();
    let code = read_code(cursor, defs)?;
    let def = ExpandoDefinition::lookup(defs, &code).ok_or_else(|| {
        ParseError::new(
            SyntaxError::UnknownExpando { code: code.clone() },
            code_position,
        )
    })?;

    let arg = match def.custom_parser {
        Some(parse_arg) => {
            let opening_position = cursor.position();
            let (arg, consumed) = parse_arg(cursor.rest()).ok_or_else(|| {
                ParseError::new(
                    SyntaxError::UnterminatedArgument { opening_position },
                    opening_position,
                )
            })?;
            cursor.advance_bytes(consumed);
            Some(arg)
        }
        None => None,
    };

    let definition = DefinitionId {
        namespace_id: def.namespace_id,
        field_id: def.field_id,
        value_kind: def.value_kind,
    };

    Ok(ExpandoBody {
        code,
        arg,
        definition,
        format,
    })
}

/// Reads a one- or two-byte code, preferring a two-byte match if the
/// definition table has one, matching the first byte seen.
fn read_code(cursor: &mut Cursor, defs: &[ExpandoDefinition]) -> Result<String, ParseError> {
    let rest = cursor.rest();
    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return Err(ParseError::new(
            SyntaxError::TruncatedDirective,
            cursor.position(),
        ));
    };

    if let Some(second) = chars.next() {
        let two_len = first.len_utf8() + second.len_utf8();
        let two = &rest[..two_len];
        if ExpandoDefinition::lookup(defs, two).is_some() {
            cursor.advance_bytes(two_len);
            return Ok(two.to_string());
        }
    }

    let one = &rest[..first.len_utf8()];
    cursor.advance_bytes(first.len_utf8());
    Ok(one.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ValueKind;

    const DEFS: &[ExpandoDefinition] = &[
        ExpandoDefinition {
            short_name: "c",
            long_name: None,
            namespace_id: 1,
            field_id: 1,
            value_kind: ValueKind::String,
            custom_parser: None,
        },
        ExpandoDefinition {
            short_name: "[",
            long_name: Some("date"),
            namespace_id: 2,
            field_id: 1,
            value_kind: ValueKind::Number,
            custom_parser: Some(|input| {
                let end = input.find(']')?;
                Some((input[..end].to_string(), end + 1))
            }),
        },
    ];

    #[test]
    fn plain_code_with_no_argument() {
        let mut c = Cursor::new("c");
        let body = parse_expando_body(&mut c, DEFS).unwrap();
        assert_eq!(body.code, "c");
        assert_eq!(body.arg, None);
        assert!(c.is_at_end());
    }

    #[test]
    fn unknown_code_is_an_error() {
        let mut c = Cursor::new("Q");
        let err = parse_expando_body(&mut c, DEFS).unwrap_err();
        assert_eq!(
            err.cause,
            SyntaxError::UnknownExpando {
                code: "Q".to_string()
            }
        );
    }

    #[test]
    fn custom_parser_consumes_until_terminator() {
        let mut c = Cursor::new("[1m]rest");
        let body = parse_expando_body(&mut c, DEFS).unwrap();
        assert_eq!(body.code, "[");
        assert_eq!(body.arg, Some("1m".to_string()));
        assert_eq!(c.rest(), "rest");
    }

    #[test]
    fn unterminated_argument_is_an_error() {
        let mut c = Cursor::new("[1m");
        let err = parse_expando_body(&mut c, DEFS).unwrap_err();
        assert_eq!(
            err.cause,
            SyntaxError::UnterminatedArgument { opening_position: 1 }
        );
    }

    #[test]
    fn width_and_justify_precede_the_code() {
        let mut c = Cursor::new("-5c");
        let body = parse_expando_body(&mut c, DEFS).unwrap();
        assert_eq!(body.format.min_width, 5);
        assert_eq!(body.code, "c");
    }
}
