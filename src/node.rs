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

//! The node tree data model
//!
//! [`Node`] is a tagged variant, not an inheritance hierarchy: every kind a
//! parsed format string can produce is one `enum` arm, so kind-specific
//! fields (a [`FormatSpec`] on [`Node::Expando`], three fixed slots on
//! [`Node::Condition`]) are statically exhaustive and there is no untyped
//! union to get wrong.

use crate::definition::ValueKind;

/// Justification of an expando's rendered value within its field width
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Justify {
    Left,
    Centre,
    #[default]
    Right,
}

/// Width, precision and justification attached to an expando
///
/// Ill-formed specs (non-digit where a digit was expected) are rejected by
/// the parser with [`SyntaxError::MalformedSpec`](crate::SyntaxError::MalformedSpec)
/// before a `FormatSpec` is ever constructed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatSpec {
    /// Minimum field width in columns; 0 means "no minimum"
    pub min_width: usize,
    /// Maximum field width in columns; `None` means unbounded
    pub max_width: Option<usize>,
    pub justify: Justify,
    /// Fill glyph used to reach `min_width`: space, or `'0'` if the width
    /// field was written with a leading zero
    pub leader: char,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            min_width: 0,
            max_width: None,
            justify: Justify::default(),
            leader: ' ',
        }
    }
}

/// The three fixed child slots of a [`Node::Condition`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    Condition,
    True,
    False,
}

/// Identifies which host-supplied [`ExpandoDefinition`](crate::ExpandoDefinition)
/// an [`Node::Expando`] or [`Node::CondBool`] node refers to
///
/// The node stores the definition's identifying fields by value rather than
/// borrowing the definition itself, so `Node` and `Expando` need no lifetime
/// parameter tied to the caller's definition table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DefinitionId {
    pub namespace_id: i32,
    pub field_id: i32,
    pub value_kind: ValueKind,
}

/// Three ways a padding node can fill the remaining column budget
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaddingKind {
    /// `%>X` — fills with whatever room is left; never clips siblings
    Soft,
    /// `%|X` — like [`Soft`](PaddingKind::Soft), but may truncate the left
    /// sibling group if the total would exceed the column budget
    Hard,
    /// `%*X` — fills to the end of the row regardless of content; shared
    /// equally among multiple `Eol` siblings
    Eol,
}

/// A parsed node in an Expando tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Placeholder used where the grammar requires a subtree but the author
    /// wrote none, e.g. the true branch of `%<c?>`
    Empty,
    /// A literal run of text; never empty after parsing
    Text(String),
    /// A reference to a host-defined data field
    Expando {
        code: String,
        /// Code-specific argument, e.g. an `strftime` pattern for `%[...]`
        arg: Option<String>,
        definition: DefinitionId,
        format: FormatSpec,
    },
    /// An expando used strictly as a boolean test inside a conditional
    ///
    /// Carries the same fields as [`Node::Expando`]; see
    /// [`crate::render`] for how its truth value is resolved from
    /// `definition.value_kind`.
    CondBool {
        code: String,
        arg: Option<String>,
        definition: DefinitionId,
        format: FormatSpec,
    },
    /// A ternary `%<test?true&false>` (or legacy `%?test?true&false?`)
    ///
    /// `if_false` is `None` when the author omitted `&false`; it is
    /// `Some(Box::new(Node::Empty))` when `&` was present but the branch was
    /// syntactically empty — these are different states, both representable.
    Condition {
        condition: Box<Node>,
        if_true: Box<Node>,
        if_false: Option<Box<Node>>,
    },
    /// An ordered sibling list with no rendering behaviour of its own
    ///
    /// Used as a grouping after the [re-pad pass](crate::repad) splits a
    /// sibling list around padding markers.
    Container(Vec<Node>),
    /// A structural node injected by the re-pad pass
    Padding { kind: PaddingKind, fill: char },
}

impl Node {
    /// Returns an [`Node::Empty`] node.
    #[must_use]
    pub fn empty() -> Node {
        Node::Empty
    }

    /// Returns a [`Node::Text`] node holding a copy of `s`.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Node {
        Node::Text(s.into())
    }

    /// Appends `node` as a sibling at the end of `list`.
    pub fn append(list: &mut Vec<Node>, node: Node) {
        list.push(node);
    }

    /// Looks up a fixed child slot of a [`Node::Condition`].
    ///
    /// Returns `None` for any other node kind, or for the `False` slot when
    /// no false branch was written at all (as opposed to an empty one).
    #[must_use]
    pub fn get_child(&self, slot: Slot) -> Option<&Node> {
        match (self, slot) {
            (Node::Condition { condition, .. }, Slot::Condition) => Some(condition),
            (Node::Condition { if_true, .. }, Slot::True) => Some(if_true),
            (Node::Condition { if_false, .. }, Slot::False) => if_false.as_deref(),
            _ => None,
        }
    }

    /// Collapses a sibling list the way the grammar expects it collapsed:
    /// no nodes become [`Node::Empty`], one node is used directly (not
    /// wrapped), and more than one is grouped in a [`Node::Container`].
    pub(crate) fn from_siblings(mut nodes: Vec<Node>) -> Node {
        match nodes.len() {
            0 => Node::Empty,
            1 => nodes.pop().unwrap(),
            _ => Node::Container(nodes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(value_kind: ValueKind) -> DefinitionId {
        DefinitionId {
            namespace_id: 0,
            field_id: 0,
            value_kind,
        }
    }

    #[test]
    fn condition_slots_are_fixed_regardless_of_false_presence() {
        let with_false = Node::Condition {
            condition: Box::new(Node::CondBool {
                code: "c".into(),
                arg: None,
                definition: def(ValueKind::String),
                format: FormatSpec::default(),
            }),
            if_true: Box::new(Node::text("tan")),
            if_false: Some(Box::new(Node::text("fig"))),
        };
        assert_eq!(with_false.get_child(Slot::True), Some(&Node::text("tan")));
        assert_eq!(with_false.get_child(Slot::False), Some(&Node::text("fig")));

        let without_false = Node::Condition {
            condition: Box::new(Node::CondBool {
                code: "c".into(),
                arg: None,
                definition: def(ValueKind::String),
                format: FormatSpec::default(),
            }),
            if_true: Box::new(Node::Empty),
            if_false: None,
        };
        assert_eq!(without_false.get_child(Slot::True), Some(&Node::Empty));
        assert_eq!(without_false.get_child(Slot::False), None);
    }

    #[test]
    fn append_preserves_textual_order() {
        let mut list = Vec::new();
        Node::append(&mut list, Node::text("a"));
        Node::append(&mut list, Node::text("b"));
        assert_eq!(list, vec![Node::text("a"), Node::text("b")]);
    }
}
