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

//! Restructures a flat, just-parsed sibling list around its padding markers
//!
//! The parser emits [`Node::Padding`] markers as ordinary siblings in the
//! root's flat list. This pass turns `[..., Padding, ...]` into
//! `[left, Padding, right]`, recursing into `right` for any further
//! markers, so the renderer's column accounting for a padding node is local
//! to its own two neighbours instead of the whole sibling list.
//!
//! Because it only ever looks for a [`Node::Padding`] among its own
//! immediate input list — never inside an already-built [`Node::Container`]
//! — running it again on its own output (wrapped in a one-element list) is
//! a no-op: the re-pad pass is idempotent for free.

use crate::node::Node;

pub(crate) fn repad(nodes: Vec<Node>) -> Node {
    match nodes.iter().position(|n| matches!(n, Node::Padding { .. })) {
        None => Node::from_siblings(nodes),
        Some(idx) => {
            let mut nodes = nodes;
            let after = nodes.split_off(idx + 1);
            let padding = nodes.pop().unwrap();
            let left = Node::from_siblings(nodes);
            let right = repad(after);
            Node::Container(vec![left, padding, right])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::PaddingKind;

    #[test]
    fn no_markers_stays_flat() {
        let root = repad(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(root, Node::Container(vec![Node::text("a"), Node::text("b")]));
    }

    #[test]
    fn single_marker_splits_into_left_padding_right() {
        let root = repad(vec![
            Node::text("A"),
            Node::Padding {
                kind: PaddingKind::Soft,
                fill: '.',
            },
            Node::text("B"),
        ]);
        assert_eq!(
            root,
            Node::Container(vec![
                Node::text("A"),
                Node::Padding {
                    kind: PaddingKind::Soft,
                    fill: '.'
                },
                Node::text("B"),
            ])
        );
    }

    #[test]
    fn two_markers_nest_to_the_right() {
        let root = repad(vec![
            Node::text("A"),
            Node::Padding {
                kind: PaddingKind::Eol,
                fill: ' ',
            },
            Node::text("B"),
            Node::Padding {
                kind: PaddingKind::Eol,
                fill: ' ',
            },
            Node::text("C"),
        ]);
        assert_eq!(
            root,
            Node::Container(vec![
                Node::text("A"),
                Node::Padding {
                    kind: PaddingKind::Eol,
                    fill: ' '
                },
                Node::Container(vec![
                    Node::text("B"),
                    Node::Padding {
                        kind: PaddingKind::Eol,
                        fill: ' '
                    },
                    Node::text("C"),
                ]),
            ])
        );
    }

    #[test]
    fn repad_is_idempotent() {
        let once = repad(vec![
            Node::text("A"),
            Node::Padding {
                kind: PaddingKind::Soft,
                fill: '.',
            },
            Node::text("B"),
        ]);
        let twice = repad(vec![once.clone()]);
        assert_eq!(once, twice);
    }
}
