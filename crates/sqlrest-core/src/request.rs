//! REST request descriptions produced by the translator.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::literal::Literal;

/// HTTP methods used by the REST-over-Postgres convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Read rows.
    Get,
    /// Create a row.
    Post,
    /// Partially update matching rows.
    Patch,
    /// Remove matching rows.
    Delete,
}

impl Method {
    /// Returns the method as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns true if requests with this method carry a JSON body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column-to-value mapping sent as the JSON body of POST and PATCH.
///
/// Columns keep the order they were written in. Assigning a column twice
/// replaces the earlier value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    entries: Vec<(String, Literal)>,
}

impl Body {
    /// Creates an empty body.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `column` to `value`.
    pub fn insert(&mut self, column: impl Into<String>, value: Literal) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Returns the value assigned to `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Literal> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no column is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<C: Into<String>> FromIterator<(C, Literal)> for Body {
    fn from_iter<I: IntoIterator<Item = (C, Literal)>>(iter: I) -> Self {
        let mut body = Self::new();
        for (column, value) in iter {
            body.insert(column, value);
        }
        body
    }
}

/// Description of one REST call against a `/table` resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestRequest {
    /// HTTP method.
    pub method: Method,
    /// `/` followed by the table name.
    pub path: String,
    /// `&`-joined `column=operator.value` tokens, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// JSON body for POST and PATCH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

impl RestRequest {
    /// Creates a request for `table` with no query and no body.
    #[must_use]
    pub fn new(method: Method, table: &str) -> Self {
        Self {
            method,
            path: format!("/{table}"),
            query: None,
            body: None,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn table(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// Returns the path followed by `?query` when a query is present.
    #[must_use]
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    /// Returns the query tokens in order.
    pub fn query_tokens(&self) -> impl Iterator<Item = &str> {
        self.query.as_deref().into_iter().flat_map(|q| q.split('&'))
    }
}

impl fmt::Display for RestRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.target())
    }
}

/// Accumulates query-string tokens in order.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    tokens: Vec<String>,
}

impl QueryString {
    pub(crate) fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Joins the tokens with `&`, or returns `None` when there are none.
    pub(crate) fn finish(self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_strings() {
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert!(Method::Post.has_body());
        assert!(!Method::Get.has_body());
        assert_eq!(
            serde_json::to_value(Method::Get).unwrap(),
            serde_json::json!("GET")
        );
    }

    #[test]
    fn body_keeps_order_and_replaces() {
        let mut body = Body::new();
        body.insert("b", Literal::Integer(1));
        body.insert("a", Literal::Integer(2));
        body.insert("b", Literal::Integer(3));
        let columns: Vec<&str> = body.iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["b", "a"]);
        assert_eq!(body.get("b"), Some(&Literal::Integer(3)));
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn body_serializes_in_column_order() {
        let body: Body = [("word", Literal::from("hola")), ("level", Literal::Integer(2))]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"word":"hola","level":2}"#
        );
    }

    #[test]
    fn request_target_and_table() {
        let mut req = RestRequest::new(Method::Get, "lessons");
        assert_eq!(req.target(), "/lessons");
        assert_eq!(req.table(), "lessons");
        assert_eq!(req.query_tokens().count(), 0);

        req.query = Some(String::from("level=gte.2&limit=5"));
        assert_eq!(req.target(), "/lessons?level=gte.2&limit=5");
        assert_eq!(
            req.query_tokens().collect::<Vec<_>>(),
            vec!["level=gte.2", "limit=5"]
        );
        assert_eq!(req.to_string(), "GET /lessons?level=gte.2&limit=5");
    }

    #[test]
    fn request_serialization_omits_absent_parts() {
        let req = RestRequest::new(Method::Delete, "cards");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"method": "DELETE", "path": "/cards"})
        );
    }

    #[test]
    fn query_string_finish() {
        assert_eq!(QueryString::default().finish(), None);
        let mut qs = QueryString::default();
        qs.push("a=eq.1");
        qs.push(String::from("limit=2"));
        assert_eq!(qs.finish().as_deref(), Some("a=eq.1&limit=2"));
    }
}
