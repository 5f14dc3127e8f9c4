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

//! Errors that happen while parsing a format string

use thiserror::Error;

/// Kinds of syntax and semantic errors the parser can report
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{}", self.message())]
#[non_exhaustive]
pub enum SyntaxError {
    /// A conditional's test is not followed by `?`
    MissingQuestionMark,
    /// A conditional's true branch is not followed by `&` or the closing
    /// terminator (`>` for modern, `?` for legacy)
    UnclosedConditional {
        /// Byte offset of the `%<` or `%?` that opened the conditional
        opening_position: usize,
    },
    /// A `%` is not followed by a recognised code
    UnknownExpando {
        /// The unrecognised code, for diagnostics
        code: String,
    },
    /// A format spec's width or precision digits are malformed
    MalformedSpec,
    /// A custom argument (e.g. `%[...]`) is not terminated
    UnterminatedArgument {
        /// Byte offset of the opening delimiter
        opening_position: usize,
    },
    /// The source ends right after a `%`
    TruncatedDirective,
}

impl SyntaxError {
    /// A human-readable description of the error
    #[must_use]
    pub fn message(&self) -> String {
        use SyntaxError::*;
        match self {
            MissingQuestionMark => "conditional is missing `?`".to_string(),
            UnclosedConditional { .. } => "conditional is missing `&` or `>`".to_string(),
            UnknownExpando { code } => format!("unknown expando `%{code}`"),
            MalformedSpec => "malformed width/precision".to_string(),
            UnterminatedArgument { .. } => "expando argument is not terminated".to_string(),
            TruncatedDirective => "`%` at end of input".to_string(),
        }
    }

    /// A short label suitable for pointing at the error location
    #[must_use]
    pub fn label(&self) -> &'static str {
        use SyntaxError::*;
        match self {
            MissingQuestionMark => "expected `?` here",
            UnclosedConditional { .. } => "expected `&` or a closing terminator",
            UnknownExpando { .. } => "not a registered expando code",
            MalformedSpec => "expected digits or `.`",
            UnterminatedArgument { .. } => "expected a closing terminator",
            TruncatedDirective => "expected a code after `%`",
        }
    }

    /// The byte offset of a related, earlier position in the source, if any
    #[must_use]
    pub fn related_position(&self) -> Option<usize> {
        use SyntaxError::*;
        match self {
            UnclosedConditional { opening_position } | UnterminatedArgument { opening_position } => {
                Some(*opening_position)
            }
            _ => None,
        }
    }
}

/// Error produced when [parsing](crate::Expando::parse) fails
///
/// `position` is the byte offset into the source format string at which the
/// error was detected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{cause} at byte {position}")]
pub struct ParseError {
    pub cause: SyntaxError,
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(cause: SyntaxError, position: usize) -> Self {
        tracing::trace!(%position, cause = %cause.message(), "parse error");
        ParseError { cause, position }
    }

    /// Renders this error and the offending source as a single annotated
    /// diagnostic line, with a caret pointing at the error position.
    #[cfg(feature = "pretty")]
    #[must_use]
    pub fn to_pretty_string(&self, source: &str) -> String {
        use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

        let message = self.cause.message();
        let label = self.cause.label();
        let annotation = AnnotationKind::Primary
            .span(self.position..self.position)
            .label(label);
        let snippet = Snippet::source(source).annotations([annotation]);
        let group = Level::ERROR.primary_title(&message).elements([snippet]);
        Renderer::styled().render(&[group])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let error = ParseError::new(SyntaxError::MissingQuestionMark, 5);
        assert_eq!(error.to_string(), "conditional is missing `?` at byte 5");
    }

    #[test]
    fn unknown_expando_message_includes_code() {
        let error = SyntaxError::UnknownExpando {
            code: "Q".to_string(),
        };
        assert_eq!(error.message(), "unknown expando `%Q`");
    }
}
