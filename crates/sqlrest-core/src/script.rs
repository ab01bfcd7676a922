//! Splitting maintenance scripts into statements.

use crate::lexer::{Lexer, TokenKind};

/// Splits `script` into statements on top-level `;`.
///
/// Semicolons inside quoted text or comments do not split. Each statement
/// is trimmed, and fragments holding nothing but whitespace or comments are
/// dropped.
///
/// ```rust
/// use sqlrest_core::split_statements;
///
/// let script = "DELETE FROM cards WHERE deck = 'a;b';\n-- done\n;SELECT * FROM decks";
/// assert_eq!(
///     split_statements(script),
///     vec!["DELETE FROM cards WHERE deck = 'a;b'", "SELECT * FROM decks"]
/// );
/// ```
#[must_use]
pub fn split_statements(script: &str) -> Vec<&str> {
    let mut statements = vec![];
    let mut lexer = Lexer::new(script);
    let mut start = 0;
    let mut has_tokens = false;

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Semicolon | TokenKind::Eof => {
                if has_tokens {
                    statements.push(script[start..token.span.start].trim());
                }
                if token.is_eof() {
                    break;
                }
                start = token.span.end;
                has_tokens = false;
            }
            _ => has_tokens = true,
        }
    }

    statements
}
