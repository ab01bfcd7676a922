//! Token types for the SQL lexer.

use super::Span;

/// Keywords of the supported SQL subset.
///
/// Words that only matter for rejecting out-of-subset input (`OR`,
/// `BETWEEN`, `JOIN`, ...) are keywords too, so the translator can name
/// them in its errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Statements
    Select,
    Insert,
    Update,
    Delete,

    // Clauses
    From,
    Where,
    Order,
    By,
    Group,
    Having,
    Limit,
    Offset,
    Into,
    Values,
    Set,
    Returning,
    Distinct,
    Default,
    Join,
    Union,

    // Conditions
    And,
    Or,
    Not,
    In,
    Like,
    Ilike,
    Is,
    Between,
    Exists,
    Null,
    True,
    False,

    // Ordering
    Asc,
    Desc,
    Nulls,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "INSERT" => Some(Self::Insert),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "ORDER" => Some(Self::Order),
            "BY" => Some(Self::By),
            "GROUP" => Some(Self::Group),
            "HAVING" => Some(Self::Having),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "SET" => Some(Self::Set),
            "RETURNING" => Some(Self::Returning),
            "DISTINCT" => Some(Self::Distinct),
            "DEFAULT" => Some(Self::Default),
            "JOIN" => Some(Self::Join),
            "UNION" => Some(Self::Union),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "ILIKE" => Some(Self::Ilike),
            "IS" => Some(Self::Is),
            "BETWEEN" => Some(Self::Between),
            "EXISTS" => Some(Self::Exists),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            _ => None,
        }
    }

    /// Returns the keyword as it is written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Group => "GROUP",
            Self::Having => "HAVING",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Set => "SET",
            Self::Returning => "RETURNING",
            Self::Distinct => "DISTINCT",
            Self::Default => "DEFAULT",
            Self::Join => "JOIN",
            Self::Union => "UNION",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Is => "IS",
            Self::Between => "BETWEEN",
            Self::Exists => "EXISTS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
        }
    }

    /// Returns true for keywords that shape a statement wherever they
    /// appear and so cannot name a column unquoted.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Order
                | Self::By
                | Self::Group
                | Self::Having
                | Self::Limit
                | Self::Offset
                | Self::Into
                | Self::Values
                | Self::Set
                | Self::Returning
                | Self::Default
                | Self::Asc
                | Self::Desc
                | Self::Nulls
        )
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Unsigned numeric literal, kept as written (e.g. `42`, `3.5`, `1e3`)
    Number(String),
    /// Single-quoted string literal with `''` escapes resolved
    String(String),

    // Identifiers and keywords
    /// Bare identifier (e.g. `lesson_id`)
    Identifier(String),
    /// Double-quoted or backtick-quoted word with the quotes removed
    QuotedIdentifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

impl TokenKind {
    /// Returns true for tokens that can stand as a single literal value.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Number(_)
                | Self::String(_)
                | Self::Identifier(_)
                | Self::QuotedIdentifier(_)
                | Self::Keyword(Keyword::True | Keyword::False | Keyword::Null)
        )
    }
}

/// A token with its span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_from_str_ignores_case() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("ilike"), Some(Keyword::Ilike));
        assert_eq!(Keyword::from_str("WhErE"), Some(Keyword::Where));
        assert_eq!(Keyword::from_str("lessons"), None);
        assert_eq!(Keyword::from_str("merge"), None);
    }

    #[test]
    fn keyword_round_trips_through_as_str() {
        for kw in [
            Keyword::Select,
            Keyword::Returning,
            Keyword::Between,
            Keyword::Nulls,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn clause_keywords_are_not_reserved() {
        assert!(!Keyword::Order.is_reserved());
        assert!(!Keyword::Offset.is_reserved());
        assert!(Keyword::Where.is_reserved());
        assert!(Keyword::Null.is_reserved());
    }

    #[test]
    fn literal_token_kinds() {
        assert!(TokenKind::Number(String::from("1")).is_literal());
        assert!(TokenKind::Keyword(Keyword::True).is_literal());
        assert!(!TokenKind::Keyword(Keyword::And).is_literal());
        assert!(!TokenKind::LeftParen.is_literal());
    }

    #[test]
    fn token_accessors() {
        let eof = Token::new(TokenKind::Eof, Span::new(3, 3));
        assert!(eof.is_eof());
        assert_eq!(eof.as_keyword(), None);

        let kw = Token::new(TokenKind::Keyword(Keyword::Where), Span::new(0, 5));
        assert_eq!(kw.as_keyword(), Some(Keyword::Where));
    }
}
