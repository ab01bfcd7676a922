//! SQL-subset translator.
//!
//! A hand-written recursive descent parser that maps one statement onto a
//! PostgREST-style request.

mod condition;
mod error;
mod statement;

pub use condition::{Condition, FilterOp};
pub use error::{ErrorKind, Result, TranslateError};
pub use statement::{Parser, StatementKind};
