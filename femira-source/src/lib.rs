//! Source code representation and compile time errors.

use std::fmt;
use thiserror::Error;

/// Represents source code.
pub struct Source<'a> {
    /// Name of the source (usually the file path).
    pub name: &'a str,
    /// Original source code.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `name` and `content`.
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }

    /// Returns the 1-based line and column of the byte `offset`.
    /// Offsets past the end of the content are clamped to the end.
    ///
    /// # Example
    /// ```
    /// use femira_source::Source;
    /// let source = Source::new("main.fe", "print 1;\nprint 2;");
    /// let location = source.location(15);
    /// assert_eq!((location.line, location.column), (2, 7));
    /// ```
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.content.len());
        let before = &self.content[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Location {
            line,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

/// A 1-based position in a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a lexing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

impl LexError {
    /// Byte offset of the offending character.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// Represents a syntax error (compile time error).
///
/// `position` is the parser cursor (token index) at the point of failure and
/// `offset` is the byte offset of the offending token, or `None` when the
/// parser ran out of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected one of {expected}, found {found}, at position {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
        offset: Option<usize>,
    },
    #[error("cannot parse expression, found {found}, at position {position}")]
    UnparsableExpression {
        found: String,
        position: usize,
        offset: Option<usize>,
    },
}

impl SyntaxError {
    /// Create a new [`SyntaxError::UnexpectedToken`].
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: usize,
        offset: Option<usize>,
    ) -> Self {
        SyntaxError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            position,
            offset,
        }
    }

    /// The parser cursor at which the error was raised.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnparsableExpression { position, .. } => *position,
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            SyntaxError::UnexpectedToken { offset, .. }
            | SyntaxError::UnparsableExpression { offset, .. } => *offset,
        }
    }
}
