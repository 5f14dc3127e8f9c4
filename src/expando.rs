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

//! The compiled format string: source plus parsed tree, immutable after
//! [`parse`](Expando::parse)

use crate::callback::ExpandoCallbacks;
use crate::definition::ExpandoDefinition;
use crate::error::ParseError;
use crate::node::Node;
use crate::render::RenderFlags;
use std::any::Any;

/// A parsed format string, ready to be rendered repeatedly against
/// different host data.
///
/// Two `Expando`s are equal iff their source format strings are
/// byte-identical; there is no separate `free` operation, ordinary `Drop`
/// recursively releases the node tree.
#[derive(Clone, Debug)]
pub struct Expando {
    string: String,
    root: Node,
}

impl Expando {
    /// Parses `source` against `defs`, the host's table of recognised codes.
    #[tracing::instrument(level = "trace", skip(defs))]
    pub fn parse(source: &str, defs: &[ExpandoDefinition]) -> Result<Expando, ParseError> {
        let nodes = crate::parser::parse_tree(source, defs)?;
        let root = crate::repad::repad(nodes);
        Ok(Expando {
            string: source.to_string(),
            root,
        })
    }

    /// Renders this Expando into `out`, invoking `callbacks` for each
    /// referenced field and never writing more than `max_cols` columns
    /// (`None` means effectively unbounded). Returns the number of columns
    /// written.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn render(
        &self,
        callbacks: &dyn ExpandoCallbacks,
        data: &dyn Any,
        flags: RenderFlags,
        max_cols: Option<usize>,
        out: &mut String,
    ) -> usize {
        crate::render::render(&self.root, callbacks, data, flags, max_cols, out)
    }

    /// The original format string this Expando was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.string
    }

    /// The parsed, re-padded root node, for callers that want to inspect
    /// the tree directly (e.g. tests).
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl PartialEq for Expando {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Eq for Expando {}

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

    struct NoValues;
    impl ExpandoCallbacks for NoValues {}

    #[test]
    fn equality_is_by_source_string() {
        let a = Expando::parse("%c", DEFS).unwrap();
        let b = Expando::parse("%c", DEFS).unwrap();
        let c = Expando::parse("%%c", DEFS).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn parse_then_render_round_trips_escape() {
        let expando = Expando::parse("%%", &[]).unwrap();
        let mut out = String::new();
        expando.render(&NoValues, &(), RenderFlags::empty(), None, &mut out);
        assert_eq!(out, "%");
    }

    #[test]
    fn parse_error_reports_position() {
        let err = Expando::parse("a%<c?xxx", DEFS).unwrap_err();
        assert_eq!(err.position, 8);
    }
}
