//! Translation error types.

use crate::lexer::{Span, TokenKind};

/// Broad category of a translation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required clause could not be located or is malformed.
    ParseError,
    /// The statement, or a construct inside it, is outside the supported subset.
    UnsupportedOperation,
}

/// An error raised while translating a statement.
///
/// Every error carries the byte span of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// A required clause could not be located or is malformed.
    #[error("{message} at position {}..{}", span.start, span.end)]
    Parse {
        /// What failed to parse.
        message: String,
        /// The location of the error.
        span: Span,
    },

    /// The input uses something outside the supported subset.
    #[error("Unsupported operation: {message} at position {}..{}", span.start, span.end)]
    Unsupported {
        /// The construct that is not supported.
        message: String,
        /// The location of the construct.
        span: Span,
    },
}

impl TranslateError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        Self::Parse {
            message: message.into(),
            span,
        }
    }

    /// Creates an "unexpected token" parse error.
    #[must_use]
    pub fn unexpected(expected: &str, found: &TokenKind, span: Span) -> Self {
        let message = match found {
            TokenKind::Eof => format!("Unexpected end of input: expected {expected}"),
            TokenKind::Error(lex) => lex.clone(),
            other => format!("Unexpected token: expected {expected}, found {other:?}"),
        };
        Self::parse(message, span)
    }

    /// Creates an unsupported-operation error.
    #[must_use]
    pub fn unsupported(message: impl Into<String>, span: Span) -> Self {
        Self::Unsupported {
            message: message.into(),
            span,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::Unsupported { .. } => ErrorKind::UnsupportedOperation,
        }
    }

    /// Returns the human-readable description without the position.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. } | Self::Unsupported { message, .. } => message,
        }
    }

    /// Returns the location of the error in the input.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Parse { span, .. } | Self::Unsupported { span, .. } => *span,
        }
    }
}

/// Result type for translation.
pub type Result<T> = std::result::Result<T, TranslateError>;
