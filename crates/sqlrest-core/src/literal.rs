//! Decoded literal values.
//!
//! VALUES entries, SET right-hand sides and WHERE right-hand sides all go
//! through the same decoding rule, implemented by [`Literal::decode`]:
//!
//! 1. a token wrapped in one matching pair of `'` or `"` is a string, and
//!    is never coerced further;
//! 2. otherwise `true` / `false` (any case) is a boolean;
//! 3. otherwise a token that is entirely a signed or unsigned number is a
//!    number;
//! 4. anything else is kept as a string.
//!
//! The SQL `NULL` keyword is recognised by the parser, not by this rule,
//! so the bare text `NULL` decodes to a string.

use std::fmt;

use serde::Serialize;

/// A literal value taken from SQL text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// SQL `NULL`, sent as JSON `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integral number that fits in an `i64`.
    Integer(i64),
    /// Any other number.
    Float(f64),
    /// Text value.
    Text(String),
    /// Ordered list of values, as used by `IN (...)`.
    List(Vec<Literal>),
}

impl Literal {
    /// Decodes one raw token using the literal-decoding rule.
    ///
    /// ```rust
    /// use sqlrest_core::Literal;
    ///
    /// assert_eq!(Literal::decode("'true'"), Literal::Text("true".into()));
    /// assert_eq!(Literal::decode("TRUE"), Literal::Bool(true));
    /// assert_eq!(Literal::decode("-12"), Literal::Integer(-12));
    /// assert_eq!(Literal::decode("'42'"), Literal::Text("42".into()));
    /// ```
    #[must_use]
    pub fn decode(token: &str) -> Self {
        let token = token.trim();
        if let Some(inner) = strip_matching_quotes(token) {
            return Self::Text(String::from(inner));
        }
        if token.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if token.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        Self::parse_number(token).unwrap_or_else(|| Self::Text(String::from(token)))
    }

    /// Parses `text` as a number if the whole token is one.
    ///
    /// Accepted forms are `[+-]digits[.digits]` and `[+-].digits`, each
    /// with an optional exponent. Integral text that fits in an `i64` yields
    /// [`Literal::Integer`]; everything else yields [`Literal::Float`].
    #[must_use]
    pub fn parse_number(text: &str) -> Option<Self> {
        if !is_number(text) {
            return None;
        }
        let integral = !text.contains(['.', 'e', 'E']);
        if integral {
            if let Ok(n) = text.parse::<i64>() {
                return Some(Self::Integer(n));
            }
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Self::Float)
    }

    /// Returns the text of a [`Literal::Text`] value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Strips one matching pair of surrounding `'` or `"` quotes.
fn strip_matching_quotes(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if (first == '\'' || first == '"') && token.len() >= 2 && token.ends_with(first) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

fn is_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
