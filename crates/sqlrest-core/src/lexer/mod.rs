//! SQL lexer.
//!
//! A hand-written lexer that turns a statement into a stream of tokens.
//! Only the vocabulary the translator understands is recognised as
//! keywords; every other word is an identifier.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
