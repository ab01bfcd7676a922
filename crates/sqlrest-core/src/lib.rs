//! # sqlrest-core
//!
//! Translates a small SQL subset into descriptions of REST calls against a
//! PostgREST-style ("REST-over-Postgres") endpoint.
//!
//! Each table is a resource at `/table`, filters are query parameters of
//! the form `column=operator.value`, and rows are created, updated and
//! removed with `POST`, `PATCH` and `DELETE`.
//!
//! ```rust
//! use sqlrest_core::{translate, Method};
//!
//! let request = translate("SELECT * FROM lessons WHERE level >= 2 ORDER BY title LIMIT 10")?;
//! assert_eq!(request.method, Method::Get);
//! assert_eq!(request.target(), "/lessons?level=gte.2&order=title.asc&limit=10");
//!
//! let request = translate("INSERT INTO words (word, level) VALUES ('gato', 1)")?;
//! assert_eq!(request.method, Method::Post);
//! assert_eq!(
//!     serde_json::to_string(&request.body)?,
//!     r#"{"word":"gato","level":1}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Translation is pure: no I/O, no shared state. Anything outside the
//! supported subset (`OR`, joins, subqueries, multi-row inserts, ...) fails
//! with [`ErrorKind::UnsupportedOperation`] instead of producing a request
//! that does not match the statement.

pub mod config;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod request;
pub mod script;

use tracing::debug;

pub use config::{ClientConfig, ConfigError, PreparedRequest};
pub use literal::Literal;
pub use parser::{Condition, ErrorKind, FilterOp, Parser, StatementKind, TranslateError};
pub use request::{Body, Method, RestRequest};
pub use script::split_statements;

/// Translates one SQL statement into a REST request description.
///
/// # Errors
///
/// Returns a [`TranslateError`] of kind [`ErrorKind::ParseError`] when a
/// required clause is missing or malformed, and of kind
/// [`ErrorKind::UnsupportedOperation`] for statements or constructs outside
/// the supported subset.
pub fn translate(sql: &str) -> Result<RestRequest, TranslateError> {
    match Parser::new(sql).translate() {
        Ok(request) => {
            debug!(method = %request.method, target = %request.target(), "translated statement");
            Ok(request)
        }
        Err(err) => {
            debug!(error = %err, "translation failed");
            Err(err)
        }
    }
}
