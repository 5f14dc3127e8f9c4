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

//! The recursive-descent parser
//!
//! Dispatch is driven entirely by the character immediately after a `%`:
//! `%` itself is an escape, `<`/`?` start a conditional, `>`/`|`/`*` start a
//! padding marker, anything else starts a plain expando. Everything between
//! constructs is a [text run](text), bounded by a caller-supplied
//! [`Terminators`] set so that conditional branches know where they end
//! without the text parser needing to know it is inside one.
//!
//! The one exception is `<`/`?` dispatch itself: a legacy (`%?…?…?`)
//! branch is not nestable, so elements parsed inside one are parsed with
//! nesting disabled (see `nestable` below) — a `%<` or `%?` found there is
//! read as an ordinary expando code rather than a nested conditional.

mod conditional;
mod cursor;
mod expando;
mod spec;
mod text;

use crate::definition::ExpandoDefinition;
use crate::error::{ParseError, SyntaxError};
use crate::node::{Node, PaddingKind};
use cursor::Cursor;

bitflags::bitflags! {
    /// The set of characters that end a text run without being consumed
    ///
    /// Empty at top level; conditional branches narrow this as they parse so
    /// the shared [`text::parse_text`] function never needs to know whether
    /// it's inside a modern true-branch, a modern false-branch, or a legacy
    /// branch.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct Terminators: u8 {
        const AMP = 0b001;
        const GT = 0b010;
        const QUESTION = 0b100;
    }
}

/// Parses `source` into a flat, not-yet-re-padded sibling list.
///
/// [`Expando::parse`](crate::Expando::parse) wraps this in a
/// [`Node::Container`] and runs the [re-pad pass](crate::repad) over it.
#[tracing::instrument(level = "trace", skip(defs))]
pub(crate) fn parse_tree(source: &str, defs: &[ExpandoDefinition]) -> Result<Vec<Node>, ParseError> {
    let mut cursor = Cursor::new(source);
    let nodes = parse_elements(&mut cursor, defs, Terminators::empty(), true)?;
    if !cursor.is_at_end() {
        // A stray terminator character (`&`, `>`, `?`) at top level, where
        // none is active, is just ordinary text content; parse_elements
        // only stops early on `%`-introduced constructs or an active
        // terminator, so reaching here with input left over cannot happen
        // for well-formed top-level terminator sets. Kept as a debug
        // assertion rather than silently dropping trailing input.
        debug_assert!(cursor.is_at_end(), "parser did not consume all input");
    }
    Ok(nodes)
}

/// Parses elements until `%`-end-of-input or an active terminator is seen.
///
/// `nestable` is false while parsing the content of a legacy branch: there,
/// a `%<` or `%?` is not a conditional trigger, just an ordinary code.
pub(super) fn parse_elements(
    cursor: &mut Cursor,
    defs: &[ExpandoDefinition],
    terminators: Terminators,
    nestable: bool,
) -> Result<Vec<Node>, ParseError> {
    let mut nodes = Vec::new();
    loop {
        match cursor.peek() {
            None => break,
            Some('&') if terminators.contains(Terminators::AMP) => break,
            Some('>') if terminators.contains(Terminators::GT) => break,
            Some('?') if terminators.contains(Terminators::QUESTION) => break,
            Some('%') => nodes.push(parse_directive(cursor, defs, nestable)?),
            Some(_) => nodes.push(text::parse_text(cursor, terminators)),
        }
    }
    Ok(nodes)
}

/// Parses one `%...` construct; `cursor` is positioned at the `%`.
fn parse_directive(
    cursor: &mut Cursor,
    defs: &[ExpandoDefinition],
    nestable: bool,
) -> Result<Node, ParseError> {
    let opening_position = cursor.position();
    cursor.bump(); // consume '%'

    match cursor.peek() {
        Some('%') => {
            cursor.bump();
            Ok(Node::text("%"))
        }
        Some('<') | Some('?') if nestable => {
            conditional::parse_conditional(cursor, defs, opening_position)
        }
        Some('>') => parse_padding(cursor, PaddingKind::Soft),
        Some('|') => parse_padding(cursor, PaddingKind::Hard),
        Some('*') => parse_padding(cursor, PaddingKind::Eol),
        Some(_) => {
            let body = expando::parse_expando_body(cursor, defs)?;
            Ok(Node::Expando {
                code: body.code,
                arg: body.arg,
                definition: body.definition,
                format: body.format,
            })
        }
        None => Err(ParseError::new(
            SyntaxError::TruncatedDirective,
            cursor.position(),
        )),
    }
}

fn parse_padding(cursor: &mut Cursor, kind: PaddingKind) -> Result<Node, ParseError> {
    let marker_position = cursor.position();
    cursor.bump(); // consume '>' | '|' | '*'
    let fill = cursor.bump().ok_or_else(|| {
        ParseError::new(SyntaxError::TruncatedDirective, marker_position)
    })?;
    Ok(Node::Padding { kind, fill })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ValueKind;

    const DEFS: &[ExpandoDefinition] = &[ExpandoDefinition {
        short_name: "c",
        long_name: None,
        namespace_id: 1,
        field_id: 1,
        value_kind: ValueKind::String,
        custom_parser: None,
    }];

    #[test]
    fn escape_is_a_single_text_node() {
        let nodes = parse_tree("%%", &[]).unwrap();
        assert_eq!(nodes, vec![Node::text("%")]);
    }

    #[test]
    fn plain_text_and_expando_are_siblings() {
        let nodes = parse_tree("a%cb", DEFS).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], Node::text("a"));
        assert_eq!(nodes[2], Node::text("b"));
    }

    #[test]
    fn truncated_directive_at_end_of_input() {
        let err = parse_tree("x%", &[]).unwrap_err();
        assert_eq!(err.cause, SyntaxError::TruncatedDirective);
        assert_eq!(err.position, 2);
    }

    #[test]
    fn padding_marker_captures_fill_glyph() {
        let nodes = parse_tree("%>.", &[]).unwrap();
        assert_eq!(
            nodes,
            vec![Node::Padding {
                kind: PaddingKind::Soft,
                fill: '.'
            }]
        );
    }
}
