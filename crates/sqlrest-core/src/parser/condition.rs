//! WHERE-clause conditions and their query-string tokens.

use std::fmt;

use crate::literal::Literal;

/// Filter operators of the REST-over-Postgres convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `=`
    Eq,
    /// `!=` or `<>`
    Neq,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `LIKE`
    Like,
    /// `ILIKE`
    Ilike,
    /// `IN (...)`
    In,
    /// `IS NULL`, `IS TRUE`, `IS FALSE`
    Is,
}

impl FilterOp {
    /// Returns the operator name used in query-string tokens.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gte => "gte",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::Like => "like",
            Self::Ilike => "ilike",
            Self::In => "in",
            Self::Is => "is",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `column operator value` condition of a conjunctive WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column being filtered.
    pub column: String,
    /// Comparison operator.
    pub op: FilterOp,
    /// True for `NOT LIKE`, `NOT IN`, `IS NOT ...`.
    pub negated: bool,
    /// Right-hand side. Pattern operators hold the bare pattern text,
    /// `IN` holds a [`Literal::List`].
    pub value: Literal,
}

impl Condition {
    /// Creates a non-negated condition.
    #[must_use]
    pub fn new(column: impl Into<String>, op: FilterOp, value: Literal) -> Self {
        Self {
            column: column.into(),
            op,
            negated: false,
            value,
        }
    }

    /// Returns the `column=[not.]operator.value` query-string token.
    #[must_use]
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", encode_query_text(&self.column))?;
        if self.negated {
            f.write_str("not.")?;
        }
        let value = encode_query_text(&self.value.to_string());
        match self.op {
            FilterOp::Like | FilterOp::Ilike => write!(f, "{}.*{value}*", self.op),
            _ => write!(f, "{}.{value}", self.op),
        }
    }
}

/// Percent-encodes the characters that would split or end a query-string
/// token: `%`, `&`, `#`, `+` and `=`.
pub(crate) fn encode_query_text(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '%' | '&' | '#' | '+' | '=' => format!("%{:02X}", u32::from(c)),
            _ => c.to_string(),
        })
        .collect()
}

/// Removes every `%` and quote character from a LIKE pattern.
pub(crate) fn strip_pattern(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '%' | '\'' | '"'))
        .collect()
}

/// Removes every quote character and surrounding whitespace from an IN element.
pub(crate) fn strip_list_element(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '(' | ')'))
        .collect()
}
