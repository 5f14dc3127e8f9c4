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

//! Parses a literal text run
//!
//! A text run ends at `%` or at any character in the caller's
//! [`Terminators`] set. It is only ever called when the cursor is not
//! already sitting on one of those, so it always consumes at least one
//! character and the resulting [`Node::Text`] is never empty.

use super::cursor::Cursor;
use super::Terminators;
use crate::node::Node;

pub(super) fn parse_text(cursor: &mut Cursor, terminators: Terminators) -> Node {
    let start = cursor.rest();
    let mut len = 0;
    for c in start.chars() {
        if c == '%' || is_terminator(c, terminators) {
            break;
        }
        len += c.len_utf8();
    }
    debug_assert!(len > 0, "parse_text must not be called at a stop character");
    cursor.advance_bytes(len);
    Node::Text(start[..len].to_string())
}

fn is_terminator(c: char, terminators: Terminators) -> bool {
    match c {
        '&' => terminators.contains(Terminators::AMP),
        '>' => terminators.contains(Terminators::GT),
        '?' => terminators.contains(Terminators::QUESTION),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_percent() {
        let mut c = Cursor::new("abc%d");
        let node = parse_text(&mut c, Terminators::empty());
        assert_eq!(node, Node::text("abc"));
        assert_eq!(c.rest(), "%d");
    }

    #[test]
    fn stops_at_active_terminator_but_not_inactive_one() {
        let mut c = Cursor::new("ab&cd>ef");
        let node = parse_text(&mut c, Terminators::GT);
        assert_eq!(node, Node::text("ab&cd"));
        assert_eq!(c.rest(), ">ef");
    }
}
