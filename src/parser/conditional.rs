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

//! Parses `%<test?true&false>` and the legacy `%?test?true&false?`
//!
//! The two forms share everything but their delimiter pair, the terminator
//! set used while scanning a branch's body, and nestability: a modern
//! (`%<`) branch parses its contents with conditional dispatch still
//! enabled, so a `%<...>` or `%?...?` found there parses itself out
//! recursively, consuming its own closing delimiter first. A legacy (`%?`)
//! branch parses its contents with conditional dispatch *disabled* (see
//! `nestable` on [`super::parse_elements`]) — a `%<` or `%?` found there is
//! read as an ordinary expando code, never as a nested conditional.

use super::expando::parse_expando_body;
use super::Terminators;
use crate::definition::ExpandoDefinition;
use crate::error::{ParseError, SyntaxError};
use crate::node::Node;
use crate::parser::cursor::Cursor;

/// Parses a conditional whose opening delimiter (`<` or `?`) is the next
/// character in `cursor`. `opening_position` is the byte offset of the `%`
/// (or, in test position, of the bare delimiter) that introduced it, used to
/// point at the right place if the conditional is never closed.
pub(super) fn parse_conditional(
    cursor: &mut Cursor,
    defs: &[ExpandoDefinition],
    opening_position: usize,
) -> Result<Node, ParseError> {
    let legacy = match cursor.peek() {
        Some('?') => true,
        Some('<') => false,
        _ => unreachable!("parse_conditional called without a conditional delimiter"),
    };
    cursor.bump();

    let condition = parse_test(cursor, defs)?;

    if cursor.peek() != Some('?') {
        return Err(ParseError::new(
            SyntaxError::MissingQuestionMark,
            cursor.position(),
        ));
    }
    cursor.bump();

    // A legacy branch is not nestable: its contents are parsed with
    // conditional dispatch disabled, so a `%<`/`%?` inside one is read as an
    // ordinary expando code rather than recursing into another conditional.
    let nestable = !legacy;

    let true_terminators = if legacy {
        Terminators::AMP | Terminators::QUESTION
    } else {
        Terminators::AMP | Terminators::GT
    };
    let true_nodes = super::parse_elements(cursor, defs, true_terminators, nestable)?;
    let if_true = Box::new(collapse(true_nodes));

    let if_false = if cursor.peek() == Some('&') {
        cursor.bump();
        let false_terminators = if legacy {
            Terminators::QUESTION
        } else {
            Terminators::GT
        };
        let false_nodes = super::parse_elements(cursor, defs, false_terminators, nestable)?;
        Some(Box::new(collapse(false_nodes)))
    } else {
        None
    };

    let closing = if legacy { '?' } else { '>' };
    if cursor.peek() != Some(closing) {
        return Err(ParseError::new(
            SyntaxError::UnclosedConditional { opening_position },
            cursor.position(),
        ));
    }
    cursor.bump();

    Ok(Node::Condition {
        condition: Box::new(condition),
        if_true,
        if_false,
    })
}

/// Parses the test slot of a conditional: a bare `%` is implicit, so an
/// opening `<` or `?` by itself is enough to introduce a nested conditional
/// here; anything else is a bare code evaluated as a boolean.
fn parse_test(cursor: &mut Cursor, defs: &[ExpandoDefinition]) -> Result<Node, ParseError> {
    match cursor.peek() {
        Some('<') | Some('?') => {
            let opening_position = cursor.position();
            parse_conditional(cursor, defs, opening_position)
        }
        _ => {
            let body = parse_expando_body(cursor, defs)?;
            Ok(Node::CondBool {
                code: body.code,
                arg: body.arg,
                definition: body.definition,
                format: body.format,
            })
        }
    }
}

/// Collapses a parsed branch's sibling list the way the grammar expects:
/// no nodes become [`Node::Empty`], one node is used directly (not wrapped),
/// and more than one is grouped in a [`Node::Container`].
fn collapse(nodes: Vec<Node>) -> Node {
    Node::from_siblings(nodes)
}
