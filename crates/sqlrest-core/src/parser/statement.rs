//! Statement translator.
//!
//! A small recursive descent parser over the token stream. Each statement
//! kind is translated directly into a [`RestRequest`]; no intermediate AST
//! is kept, because nothing downstream needs one.

use tracing::trace;

use super::condition::{strip_list_element, strip_pattern, Condition, FilterOp};
use super::error::{Result, TranslateError};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};
use crate::literal::Literal;
use crate::request::{Body, Method, QueryString, RestRequest};

/// The four statement kinds the translator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `SELECT`, translated to GET.
    Select,
    /// `INSERT`, translated to POST.
    Insert,
    /// `UPDATE`, translated to PATCH.
    Update,
    /// `DELETE`, translated to DELETE.
    Delete,
}

impl StatementKind {
    /// Returns the statement kind chosen by the first keyword of `sql`.
    ///
    /// ```rust
    /// use sqlrest_core::StatementKind;
    ///
    /// assert_eq!(StatementKind::detect("  select 1"), Some(StatementKind::Select));
    /// assert_eq!(StatementKind::detect("MERGE INTO t"), None);
    /// ```
    #[must_use]
    pub fn detect(sql: &str) -> Option<Self> {
        match Lexer::new(sql).next_token().as_keyword()? {
            Keyword::Select => Some(Self::Select),
            Keyword::Insert => Some(Self::Insert),
            Keyword::Update => Some(Self::Update),
            Keyword::Delete => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns the HTTP method this statement kind maps to.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Select => Method::Get,
            Self::Insert => Method::Post,
            Self::Update => Method::Patch,
            Self::Delete => Method::Delete,
        }
    }
}

/// Translates one SQL statement into a [`RestRequest`].
pub struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for the given statement.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Lexer::new(input).tokenize(),
            pos: 0,
        }
    }

    /// Translates the statement.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Unsupported`] if the leading keyword is not
    /// `SELECT`, `INSERT`, `UPDATE` or `DELETE`, or if the statement uses a
    /// construct outside the supported subset. Returns
    /// [`TranslateError::Parse`] if a required clause is missing or
    /// malformed.
    pub fn translate(mut self) -> Result<RestRequest> {
        let first = self.current().clone();
        let kind = match &first.kind {
            TokenKind::Keyword(Keyword::Select) => StatementKind::Select,
            TokenKind::Keyword(Keyword::Insert) => StatementKind::Insert,
            TokenKind::Keyword(Keyword::Update) => StatementKind::Update,
            TokenKind::Keyword(Keyword::Delete) => StatementKind::Delete,
            TokenKind::Keyword(kw) => {
                return Err(TranslateError::unsupported(
                    format!("{} statements", kw.as_str()),
                    first.span,
                ));
            }
            TokenKind::Identifier(word) => {
                return Err(TranslateError::unsupported(
                    format!("{} statements", word.to_ascii_uppercase()),
                    first.span,
                ));
            }
            TokenKind::Eof | TokenKind::Semicolon => {
                return Err(TranslateError::parse("empty statement", first.span));
            }
            other => {
                return Err(TranslateError::unexpected(
                    "SELECT, INSERT, UPDATE, or DELETE",
                    other,
                    first.span,
                ));
            }
        };

        self.check_lexer_errors()?;
        self.advance();

        match kind {
            StatementKind::Select => self.translate_select(),
            StatementKind::Insert => self.translate_insert(),
            StatementKind::Update => self.translate_update(),
            StatementKind::Delete => self.translate_delete(),
        }
    }

    /// `SELECT ... FROM table [WHERE ...] [ORDER BY ...] [LIMIT n] [OFFSET n]`
    fn translate_select(&mut self) -> Result<RestRequest> {
        if self.check_keyword(Keyword::Distinct) {
            return Err(self.unsupported_here("SELECT DISTINCT"));
        }

        // The projection is not translated; skip it up to a top-level FROM.
        let mut depth = 0usize;
        loop {
            let token = self.current();
            match &token.kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth = depth.saturating_sub(1),
                TokenKind::Keyword(Keyword::Select) => {
                    return Err(self.unsupported_here("subqueries"));
                }
                TokenKind::Keyword(Keyword::From) if depth == 0 => break,
                TokenKind::Eof | TokenKind::Semicolon => {
                    return Err(TranslateError::parse("could not parse table name", token.span));
                }
                _ => {}
            }
            self.advance();
        }
        self.advance();

        let table = self.parse_table_name()?;
        self.reject_table_suffix()?;

        let mut query = QueryString::default();
        if self.check_keyword(Keyword::Where) {
            self.advance();
            for condition in self.parse_conditions()? {
                query.push(condition.to_token());
            }
        }

        if self.check_keyword(Keyword::Group) {
            return Err(self.unsupported_here("GROUP BY"));
        }
        if self.check_keyword(Keyword::Having) {
            return Err(self.unsupported_here("HAVING"));
        }

        if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            let order = self.parse_order_by_list()?;
            query.push(format!("order={order}"));
        }

        if self.check_keyword(Keyword::Limit) {
            self.advance();
            let limit = self.parse_count("LIMIT")?;
            query.push(format!("limit={limit}"));
        }

        if self.check_keyword(Keyword::Offset) {
            self.advance();
            let offset = self.parse_count("OFFSET")?;
            query.push(format!("offset={offset}"));
        }

        self.expect_end()?;

        let mut request = RestRequest::new(Method::Get, &table);
        request.query = query.finish();
        Ok(request)
    }

    /// `INSERT INTO table (c1, ...) VALUES (v1, ...)`
    fn translate_insert(&mut self) -> Result<RestRequest> {
        if !self.check_keyword(Keyword::Into) {
            return Err(TranslateError::parse(
                "could not parse table name",
                self.current().span,
            ));
        }
        self.advance();
        let table = self.parse_table_name()?;

        let token = self.current().clone();
        match &token.kind {
            TokenKind::LeftParen => self.advance(),
            TokenKind::Keyword(Keyword::Select) => {
                return Err(TranslateError::unsupported("INSERT ... SELECT", token.span));
            }
            TokenKind::Keyword(Keyword::Default) => {
                return Err(TranslateError::unsupported("DEFAULT VALUES", token.span));
            }
            _ => {
                return Err(TranslateError::parse(
                    "could not parse column list and VALUES",
                    token.span,
                ));
            }
        }

        let mut columns = vec![];
        loop {
            columns.push(self.parse_insert_column()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::RightParen, ")")?;

        let token = self.current().clone();
        match &token.kind {
            TokenKind::Keyword(Keyword::Values) => self.advance(),
            TokenKind::Keyword(Keyword::Select) => {
                return Err(TranslateError::unsupported("INSERT ... SELECT", token.span));
            }
            _ => {
                return Err(TranslateError::parse(
                    "could not parse VALUES list",
                    token.span,
                ));
            }
        }

        let values_start = self.current().span;
        self.expect(&TokenKind::LeftParen, "(")?;
        let mut values = vec![];
        loop {
            values.push(self.parse_list_value()?.0);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        let values_end = self.current().span;
        self.expect(&TokenKind::RightParen, ")")?;

        if self.check(&TokenKind::Comma) {
            return Err(self.unsupported_here("multi-row INSERT"));
        }
        if self.check_keyword(Keyword::Returning) {
            return Err(self.unsupported_here("RETURNING"));
        }
        if matches!(
            &self.current().kind,
            TokenKind::Identifier(word) if word.eq_ignore_ascii_case("on")
        ) {
            return Err(self.unsupported_here("ON CONFLICT"));
        }
        self.expect_end()?;

        if columns.len() != values.len() {
            return Err(TranslateError::parse(
                format!(
                    "INSERT lists {} columns but {} values",
                    columns.len(),
                    values.len()
                ),
                values_start.to(values_end),
            ));
        }

        let mut request = RestRequest::new(Method::Post, &table);
        request.body = Some(columns.into_iter().zip(values).collect());
        Ok(request)
    }

    /// `UPDATE table SET c = v, ... WHERE ...`
    fn translate_update(&mut self) -> Result<RestRequest> {
        let table = self.parse_table_name()?;
        self.reject_table_suffix()?;

        if !self.check_keyword(Keyword::Set) {
            return Err(TranslateError::parse(
                "could not parse SET clause",
                self.current().span,
            ));
        }
        self.advance();

        let mut body = Body::new();
        loop {
            if self.check_keyword(Keyword::Where) || self.at_end() {
                return Err(TranslateError::parse(
                    "could not parse SET clause",
                    self.current().span,
                ));
            }
            let column = self.parse_column_name()?;
            self.expect(&TokenKind::Eq, "= in SET clause")?;
            let (value, _) = self.parse_list_value()?;
            body.insert(column, value);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        let token = self.current().clone();
        match &token.kind {
            TokenKind::Keyword(Keyword::Where) => self.advance(),
            TokenKind::Eof | TokenKind::Semicolon => {
                return Err(TranslateError::parse(
                    "UPDATE requires a WHERE clause",
                    token.span,
                ));
            }
            TokenKind::Keyword(Keyword::From) => {
                return Err(TranslateError::unsupported("UPDATE ... FROM", token.span));
            }
            other => return Err(TranslateError::unexpected("WHERE", other, token.span)),
        }

        let mut query = QueryString::default();
        for condition in self.parse_conditions()? {
            query.push(condition.to_token());
        }
        self.reject_trailing_clauses("UPDATE")?;
        self.expect_end()?;

        let mut request = RestRequest::new(Method::Patch, &table);
        request.query = query.finish();
        request.body = Some(body);
        Ok(request)
    }

    /// `DELETE FROM table [WHERE ...]`
    fn translate_delete(&mut self) -> Result<RestRequest> {
        if !self.check_keyword(Keyword::From) {
            return Err(TranslateError::parse(
                "could not parse table name",
                self.current().span,
            ));
        }
        self.advance();
        let table = self.parse_table_name()?;
        self.reject_table_suffix()?;

        let mut query = QueryString::default();
        if self.check_keyword(Keyword::Where) {
            self.advance();
            for condition in self.parse_conditions()? {
                query.push(condition.to_token());
            }
        }
        self.reject_trailing_clauses("DELETE")?;
        self.expect_end()?;

        let mut request = RestRequest::new(Method::Delete, &table);
        request.query = query.finish();
        Ok(request)
    }

    /// Parses a conjunction of conditions joined by `AND`.
    fn parse_conditions(&mut self) -> Result<Vec<Condition>> {
        let mut conditions = vec![];
        loop {
            let condition = self.parse_condition()?;
            trace!(
                column = %condition.column,
                op = %condition.op,
                negated = condition.negated,
                "parsed condition"
            );
            conditions.push(condition);

            if self.check_keyword(Keyword::Or) {
                return Err(self.unsupported_here("OR conditions"));
            }
            if !self.check_keyword(Keyword::And) {
                break;
            }
            self.advance();
        }
        Ok(conditions)
    }

    /// Parses one `column operator value` condition.
    ///
    /// The comparison operators are single tokens, so `!=`, `<>`, `>=` and
    /// `<=` can never be read as `=`, `<` or `>`.
    fn parse_condition(&mut self) -> Result<Condition> {
        let token = self.current().clone();
        match &token.kind {
            TokenKind::LeftParen => {
                return Err(TranslateError::unsupported(
                    "parenthesized conditions",
                    token.span,
                ));
            }
            TokenKind::Keyword(Keyword::Not) => {
                return Err(TranslateError::unsupported(
                    "NOT before a condition",
                    token.span,
                ));
            }
            TokenKind::Keyword(Keyword::Exists) => {
                return Err(TranslateError::unsupported("EXISTS subqueries", token.span));
            }
            _ => {}
        }

        let column = self.parse_column_name()?;

        let op_token = self.current().clone();
        let (op, negated) = match &op_token.kind {
            TokenKind::NotEq => (FilterOp::Neq, false),
            TokenKind::GtEq => (FilterOp::Gte, false),
            TokenKind::LtEq => (FilterOp::Lte, false),
            TokenKind::Gt => (FilterOp::Gt, false),
            TokenKind::Lt => (FilterOp::Lt, false),
            TokenKind::Keyword(Keyword::Like) => (FilterOp::Like, false),
            TokenKind::Keyword(Keyword::Ilike) => (FilterOp::Ilike, false),
            TokenKind::Keyword(Keyword::In) => (FilterOp::In, false),
            TokenKind::Eq => (FilterOp::Eq, false),
            TokenKind::Keyword(Keyword::Is) => return self.parse_is(column),
            TokenKind::Keyword(Keyword::Not) => {
                let next = self.peek(1).clone();
                let op = match &next.kind {
                    TokenKind::Keyword(Keyword::Like) => FilterOp::Like,
                    TokenKind::Keyword(Keyword::Ilike) => FilterOp::Ilike,
                    TokenKind::Keyword(Keyword::In) => FilterOp::In,
                    TokenKind::Keyword(Keyword::Between) => {
                        return Err(TranslateError::unsupported("BETWEEN", next.span));
                    }
                    other => {
                        return Err(TranslateError::unexpected(
                            "LIKE, ILIKE or IN after NOT",
                            other,
                            next.span,
                        ));
                    }
                };
                self.advance();
                (op, true)
            }
            TokenKind::Keyword(Keyword::Between) => {
                return Err(TranslateError::unsupported("BETWEEN", op_token.span));
            }
            other => {
                return Err(TranslateError::unexpected(
                    "comparison operator",
                    other,
                    op_token.span,
                ));
            }
        };
        self.advance();

        let value = match op {
            FilterOp::Like | FilterOp::Ilike => {
                let span = if self.at_bare_pattern() {
                    self.parse_bare_pattern()
                } else {
                    let (value, span) = self.parse_value()?;
                    if value == Literal::Null {
                        return Err(TranslateError::unsupported("LIKE NULL", span));
                    }
                    span
                };
                Literal::Text(strip_pattern(span.slice(self.input)))
            }
            FilterOp::In => self.parse_in_list()?,
            _ => {
                let (value, span) = self.parse_value()?;
                if value == Literal::Null {
                    return Err(TranslateError::unsupported(
                        "comparison with NULL (use IS NULL)",
                        span,
                    ));
                }
                value
            }
        };
        self.reject_arithmetic()?;

        Ok(Condition {
            column,
            op,
            negated,
            value,
        })
    }

    /// Parses `IS [NOT] NULL|TRUE|FALSE` after the column.
    fn parse_is(&mut self, column: String) -> Result<Condition> {
        self.advance(); // IS
        let negated = self.check_keyword(Keyword::Not);
        if negated {
            self.advance();
        }
        let token = self.current().clone();
        let value = match &token.kind {
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            TokenKind::Keyword(Keyword::True) => Literal::Bool(true),
            TokenKind::Keyword(Keyword::False) => Literal::Bool(false),
            other => {
                return Err(TranslateError::unexpected(
                    "NULL, TRUE or FALSE",
                    other,
                    token.span,
                ));
            }
        };
        self.advance();
        Ok(Condition {
            column,
            op: FilterOp::Is,
            negated,
            value,
        })
    }

    /// Returns true if an unquoted `%word%` style pattern starts here.
    fn at_bare_pattern(&self) -> bool {
        let token = self.current();
        let next = self.peek(1);
        match token.kind {
            TokenKind::Percent => true,
            TokenKind::Identifier(_) | TokenKind::Number(_) => {
                next.kind == TokenKind::Percent && next.span.start == token.span.end
            }
            _ => false,
        }
    }

    /// Consumes a run of adjacent `%`, word and number tokens and returns
    /// its span.
    fn parse_bare_pattern(&mut self) -> Span {
        let mut span = self.current().span;
        loop {
            self.advance();
            let token = self.current();
            let part = matches!(
                token.kind,
                TokenKind::Percent | TokenKind::Identifier(_) | TokenKind::Number(_)
            );
            if !part || token.span.start != span.end {
                break;
            }
            span = span.to(token.span);
        }
        span
    }

    /// Parses `(v1, v2, ...)`. Elements keep their text with quotes and
    /// parentheses stripped.
    fn parse_in_list(&mut self) -> Result<Literal> {
        if self.check(&TokenKind::LeftParen) && self.peek(1).as_keyword() == Some(Keyword::Select)
        {
            return Err(TranslateError::unsupported("subqueries", self.peek(1).span));
        }
        self.expect(&TokenKind::LeftParen, "( after IN")?;
        if self.check(&TokenKind::RightParen) {
            return Err(TranslateError::parse("empty IN list", self.current().span));
        }

        let mut items = vec![];
        loop {
            let (_, span) = self.parse_list_value()?;
            items.push(Literal::Text(strip_list_element(span.slice(self.input))));
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::RightParen, ")")?;
        Ok(Literal::List(items))
    }

    /// Parses one literal value and returns it with the span of its text.
    fn parse_value(&mut self) -> Result<(Literal, Span)> {
        let token = self.current().clone();
        let literal = match &token.kind {
            TokenKind::Plus | TokenKind::Minus => {
                let next = self.peek(1).clone();
                let TokenKind::Number(digits) = &next.kind else {
                    return Err(TranslateError::unsupported(
                        "arithmetic expressions",
                        token.span,
                    ));
                };
                let sign = if token.kind == TokenKind::Minus { "-" } else { "+" };
                let span = token.span.to(next.span);
                let value = Literal::parse_number(&format!("{sign}{digits}"))
                    .ok_or_else(|| TranslateError::parse("invalid number literal", span))?;
                self.advance();
                self.advance();
                return Ok((value, span));
            }
            TokenKind::Number(text) => Literal::parse_number(text)
                .ok_or_else(|| TranslateError::parse("invalid number literal", token.span))?,
            TokenKind::String(text) | TokenKind::QuotedIdentifier(text) => {
                Literal::Text(text.clone())
            }
            TokenKind::Identifier(word) => match &self.peek(1).kind {
                TokenKind::LeftParen => {
                    return Err(TranslateError::unsupported("function calls", token.span));
                }
                TokenKind::Dot => {
                    return Err(TranslateError::unsupported("column references", token.span));
                }
                _ => Literal::decode(word),
            },
            TokenKind::Keyword(Keyword::True) => Literal::Bool(true),
            TokenKind::Keyword(Keyword::False) => Literal::Bool(false),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            TokenKind::LeftParen => {
                let what = if self.peek(1).as_keyword() == Some(Keyword::Select) {
                    "subqueries"
                } else {
                    "parenthesized expressions"
                };
                return Err(TranslateError::unsupported(what, token.span));
            }
            other => return Err(TranslateError::unexpected("literal value", other, token.span)),
        };
        self.advance();
        Ok((literal, token.span))
    }

    /// Parses a value inside a comma-separated list (VALUES, SET, IN).
    ///
    /// Lists are split on every comma, so a quoted value holding a comma
    /// cannot be represented and is rejected.
    fn parse_list_value(&mut self) -> Result<(Literal, Span)> {
        let (value, span) = self.parse_value()?;
        if span.slice(self.input).contains(',') {
            return Err(TranslateError::unsupported(
                "commas inside quoted list values",
                span,
            ));
        }
        self.reject_arithmetic()?;
        Ok((value, span))
    }

    /// Parses `column [ASC|DESC], ...` and returns the `order` token value.
    fn parse_order_by_list(&mut self) -> Result<String> {
        let mut items = vec![];
        loop {
            let column = self.parse_column_name()?;
            let direction = if self.check_keyword(Keyword::Desc) {
                self.advance();
                "desc"
            } else {
                if self.check_keyword(Keyword::Asc) {
                    self.advance();
                }
                "asc"
            };
            if self.check_keyword(Keyword::Nulls) {
                return Err(self.unsupported_here("NULLS FIRST/LAST"));
            }
            items.push(format!("{column}.{direction}"));

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items.join(","))
    }

    /// Parses the non-negative integer after LIMIT or OFFSET.
    fn parse_count(&mut self, clause: &str) -> Result<u64> {
        let token = self.current().clone();
        let count = match &token.kind {
            TokenKind::Number(text) => text.parse::<u64>().ok(),
            _ => None,
        };
        let Some(count) = count else {
            return Err(TranslateError::parse(
                format!("{clause} expects a non-negative integer"),
                token.span,
            ));
        };
        self.advance();
        Ok(count)
    }

    /// Parses the table name after FROM, INTO or UPDATE.
    fn parse_table_name(&mut self) -> Result<String> {
        let token = self.current().clone();
        if token.kind == TokenKind::LeftParen
            && self.peek(1).as_keyword() == Some(Keyword::Select)
        {
            return Err(TranslateError::unsupported("subqueries", self.peek(1).span));
        }
        let name = match &token.kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) if !name.is_empty() => {
                name.clone()
            }
            _ => {
                return Err(TranslateError::parse(
                    "could not parse table name",
                    token.span,
                ));
            }
        };
        self.advance();
        if self.check(&TokenKind::Dot) {
            return Err(TranslateError::unsupported(
                "schema-qualified table names",
                token.span.to(self.current().span),
            ));
        }
        Ok(name)
    }

    /// Parses a column name in a condition, SET assignment or ORDER BY.
    /// Clause keywords such as `order` or `offset` are accepted as names.
    fn parse_column_name(&mut self) -> Result<String> {
        let token = self.current().clone();
        let name = match &token.kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) if !name.is_empty() => {
                name.clone()
            }
            TokenKind::Keyword(kw) if !kw.is_reserved() => {
                String::from(token.span.slice(self.input))
            }
            other => return Err(TranslateError::unexpected("column name", other, token.span)),
        };
        self.advance();
        match &self.current().kind {
            TokenKind::Dot => Err(self.unsupported_here("qualified column names")),
            TokenKind::LeftParen => Err(TranslateError::unsupported("function calls", token.span)),
            _ => Ok(name),
        }
    }

    /// Parses a column of the INSERT column list. Single-quoted names are
    /// accepted and stripped like the other quote styles.
    fn parse_insert_column(&mut self) -> Result<String> {
        if let TokenKind::String(name) = &self.current().kind {
            if !name.is_empty() {
                let name = name.clone();
                self.advance();
                return Ok(name);
            }
        }
        self.parse_column_name()
    }

    /// Rejects anything after the table name that would change which rows
    /// are addressed: aliases, joins and comma-separated tables.
    fn reject_table_suffix(&self) -> Result<()> {
        let token = self.current();
        match &token.kind {
            TokenKind::Comma => Err(TranslateError::unsupported("multiple tables", token.span)),
            TokenKind::Keyword(Keyword::Join) => {
                Err(TranslateError::unsupported("JOIN", token.span))
            }
            TokenKind::Identifier(word) if is_join_word(word) => {
                Err(TranslateError::unsupported("JOIN", token.span))
            }
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => {
                Err(TranslateError::unsupported("table aliases", token.span))
            }
            _ => Ok(()),
        }
    }

    /// Rejects ORDER BY, LIMIT and RETURNING on UPDATE and DELETE.
    fn reject_trailing_clauses(&self, statement: &str) -> Result<()> {
        let token = self.current();
        let clause = match token.as_keyword() {
            Some(Keyword::Order) => "ORDER BY",
            Some(Keyword::Limit) => "LIMIT",
            Some(Keyword::Returning) => "RETURNING",
            _ => return Ok(()),
        };
        Err(TranslateError::unsupported(
            format!("{clause} on {statement}"),
            token.span,
        ))
    }

    /// Rejects an arithmetic operator following a value.
    fn reject_arithmetic(&self) -> Result<()> {
        let token = self.current();
        match token.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Concat => Err(TranslateError::unsupported(
                "arithmetic expressions",
                token.span,
            )),
            _ => Ok(()),
        }
    }

    /// Expects the end of the statement, allowing one trailing `;`.
    fn expect_end(&mut self) -> Result<()> {
        if self.check(&TokenKind::Semicolon) {
            self.advance();
            if !self.current().is_eof() {
                return Err(self.unsupported_here("multiple statements"));
            }
        }
        let token = self.current();
        match &token.kind {
            TokenKind::Eof => Ok(()),
            TokenKind::Keyword(Keyword::Union) => {
                Err(TranslateError::unsupported("UNION", token.span))
            }
            other => Err(TranslateError::unexpected(
                "end of statement",
                other,
                token.span,
            )),
        }
    }

    /// Fails on the first token the lexer could not make sense of.
    fn check_lexer_errors(&self) -> Result<()> {
        match self.tokens.iter().find_map(|t| match &t.kind {
            TokenKind::Error(message) => Some((message, t.span)),
            _ => None,
        }) {
            Some((message, span)) => Err(TranslateError::parse(message.clone(), span)),
            None => Ok(()),
        }
    }

    // --- Helper methods ---

    fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the token `n` positions ahead, or the trailing `Eof`.
    fn peek(&self, n: usize) -> &Token {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    /// Returns true at `;` or end of input.
    fn at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof | TokenKind::Semicolon)
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            let token = self.current();
            Err(TranslateError::unexpected(expected, &token.kind, token.span))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            let token = self.current();
            Err(TranslateError::unexpected(
                keyword.as_str(),
                &token.kind,
                token.span,
            ))
        }
    }

    fn unsupported_here(&self, what: &str) -> TranslateError {
        TranslateError::unsupported(what, self.current().span)
    }
}

fn is_join_word(word: &str) -> bool {
    ["inner", "left", "right", "full", "cross", "natural"]
        .iter()
        .any(|w| word.eq_ignore_ascii_case(w))
}
