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

//! The host-supplied table of recognised expando codes

/// Whether an expando's host-side value is produced as text or as a number
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    String,
    Number,
}

/// A custom argument parser for codes whose argument is not a bare letter
///
/// `input` is the remaining source immediately after the code byte(s). On
/// success, returns the parsed argument text together with the number of
/// bytes of `input` it consumed (including any closing delimiter, so the
/// caller's cursor ends up positioned right after it). Returns `None` if the
/// argument is malformed or unterminated.
///
/// The canonical example is a date code `%[fmt]`, whose parser reads an
/// `strftime`-style pattern up to the closing `]`:
///
/// ```
/// use expando::CustomParser;
///
/// let read_until_bracket: CustomParser = |input| {
///     let end = input.find(']')?;
///     Some((input[..end].to_string(), end + 1))
/// };
/// assert_eq!(read_until_bracket("%b]rest"), Some(("%b".to_string(), 3)));
/// assert_eq!(read_until_bracket("%b"), None);
/// ```
pub type CustomParser = fn(input: &str) -> Option<(String, usize)>;

/// A single recognised expando code
///
/// The host builds a static table of these and passes it to
/// [`Expando::parse`](crate::Expando::parse). `namespace_id`/`field_id`
/// identify the field to the host without string comparisons; the render-time
/// [callback table](crate::ExpandoCallbacks) is keyed on the same pair.
#[derive(Clone, Copy, Debug)]
pub struct ExpandoDefinition {
    /// The code after `%`, e.g. `"c"` or `"["`
    pub short_name: &'static str,
    /// Optional human-readable name, used only in diagnostics
    pub long_name: Option<&'static str>,
    pub namespace_id: i32,
    pub field_id: i32,
    pub value_kind: ValueKind,
    /// Parser for a code-specific argument, if this code takes one
    pub custom_parser: Option<CustomParser>,
}

impl ExpandoDefinition {
    /// Finds the definition whose `short_name` matches `code` in `defs`.
    #[must_use]
    pub fn lookup<'a>(defs: &'a [ExpandoDefinition], code: &str) -> Option<&'a ExpandoDefinition> {
        defs.iter().find(|def| def.short_name == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_matching_short_name() {
        const DEFS: &[ExpandoDefinition] = &[
            ExpandoDefinition {
                short_name: "c",
                long_name: Some("count"),
                namespace_id: 1,
                field_id: 2,
                value_kind: ValueKind::String,
                custom_parser: None,
            },
            ExpandoDefinition {
                short_name: "n",
                long_name: None,
                namespace_id: 1,
                field_id: 3,
                value_kind: ValueKind::Number,
                custom_parser: None,
            },
        ];
        let found = ExpandoDefinition::lookup(DEFS, "n").unwrap();
        assert_eq!(found.field_id, 3);
        assert!(ExpandoDefinition::lookup(DEFS, "z").is_none());
    }
}
