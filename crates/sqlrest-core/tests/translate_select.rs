//! Tests for SELECT: table extraction, WHERE operators, ORDER BY, LIMIT
//! and OFFSET.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use sqlrest_core::Method;

#[test]
fn select_all() {
    assert_target("SELECT * FROM lessons", Method::Get, "/lessons");
}

#[test]
fn select_equality_with_quoted_value() {
    assert_target(
        "SELECT * FROM T WHERE col = 'v'",
        Method::Get,
        "/T?col=eq.v",
    );
}

#[test]
fn select_keywords_any_case_and_padding() {
    assert_target(
        "   select id from Users where Name = 'Bob'  ",
        Method::Get,
        "/Users?Name=eq.Bob",
    );
}

#[test]
fn select_trailing_semicolon() {
    assert_target("SELECT * FROM decks;", Method::Get, "/decks");
}

#[test]
fn select_quoted_table_name() {
    assert_target(
        "SELECT * FROM \"user progress\" WHERE \"lesson id\" = 3",
        Method::Get,
        "/user progress?lesson id=eq.3",
    );
}

#[test]
fn select_conjunction_keeps_order() {
    assert_target(
        "SELECT * FROM users WHERE age >= 18 AND name = 'Bob'",
        Method::Get,
        "/users?age=gte.18&name=eq.Bob",
    );
}

#[test]
fn select_and_inside_string_is_not_a_delimiter() {
    assert_target(
        "SELECT * FROM cartoons WHERE title = 'Tom AND Jerry'",
        Method::Get,
        "/cartoons?title=eq.Tom AND Jerry",
    );
}

#[test]
fn select_every_comparison_operator() {
    let cases = [
        ("a = 1", "a=eq.1"),
        ("a != 1", "a=neq.1"),
        ("a <> 1", "a=neq.1"),
        ("a >= 1", "a=gte.1"),
        ("a <= 1", "a=lte.1"),
        ("a > 1", "a=gt.1"),
        ("a < 1", "a=lt.1"),
        ("a>=1", "a=gte.1"),
        ("a<>1", "a=neq.1"),
    ];
    for (condition, token) in cases {
        let sql = format!("SELECT * FROM t WHERE {condition}");
        assert_target(&sql, Method::Get, &format!("/t?{token}"));
    }
}

#[test]
fn select_value_decoding() {
    assert_target(
        "SELECT * FROM t WHERE a = true AND b = 'true' AND c = 2.50 AND d = '2.50' AND e = spanish",
        Method::Get,
        "/t?a=eq.true&b=eq.true&c=eq.2.5&d=eq.2.50&e=eq.spanish",
    );
}

#[test]
fn select_like() {
    assert_target(
        "SELECT * FROM words WHERE word LIKE '%hol%'",
        Method::Get,
        "/words?word=like.*hol*",
    );
    assert_target(
        "SELECT * FROM words WHERE word like 'ho%la'",
        Method::Get,
        "/words?word=like.*hola*",
    );
}

#[test]
fn select_unquoted_like_pattern() {
    assert_target(
        "SELECT * FROM words WHERE word LIKE %hol%",
        Method::Get,
        "/words?word=like.*hol*",
    );
    assert_target(
        "SELECT * FROM words WHERE word ILIKE hol% AND level = 1",
        Method::Get,
        "/words?word=ilike.*hol*&level=eq.1",
    );
}

#[test]
fn select_ilike_and_not_like() {
    assert_target(
        "SELECT * FROM words WHERE word ILIKE '%HOL%' AND note NOT LIKE '%draft%'",
        Method::Get,
        "/words?word=ilike.*HOL*&note=not.like.*draft*",
    );
}

#[test]
fn select_in_list() {
    assert_target(
        "SELECT * FROM lessons WHERE lang IN ('es', 'fr', \"de\")",
        Method::Get,
        "/lessons?lang=in.(es,fr,de)",
    );
    assert_target(
        "SELECT * FROM lessons WHERE id NOT IN (1,2)",
        Method::Get,
        "/lessons?id=not.in.(1,2)",
    );
}

#[test]
fn select_is_null() {
    assert_target(
        "SELECT * FROM cards WHERE reviewed_at IS NULL AND archived IS NOT TRUE",
        Method::Get,
        "/cards?reviewed_at=is.null&archived=not.is.true",
    );
}

#[test]
fn select_order_by_defaults_to_asc() {
    assert_target(
        "SELECT * FROM lessons ORDER BY title",
        Method::Get,
        "/lessons?order=title.asc",
    );
}

#[test]
fn select_order_by_desc() {
    assert_target(
        "SELECT * FROM lessons ORDER BY created_at desc",
        Method::Get,
        "/lessons?order=created_at.desc",
    );
}

#[test]
fn select_order_by_several_columns() {
    assert_target(
        "SELECT * FROM lessons ORDER BY level DESC, title ASC",
        Method::Get,
        "/lessons?order=level.desc,title.asc",
    );
}

#[test]
fn select_limit_and_offset() {
    assert_target(
        "SELECT * FROM lessons LIMIT 10 OFFSET 20",
        Method::Get,
        "/lessons?limit=10&offset=20",
    );
}

#[test]
fn select_full_token_order() {
    assert_target(
        "SELECT id, title FROM lessons WHERE level > 1 AND lang = 'es' ORDER BY title DESC LIMIT 5 OFFSET 5",
        Method::Get,
        "/lessons?level=gt.1&lang=eq.es&order=title.desc&limit=5&offset=5",
    );
}

#[test]
fn select_comments_are_ignored() {
    assert_target(
        "SELECT * -- every column\nFROM lessons /* only active */ WHERE active = true",
        Method::Get,
        "/lessons?active=eq.true",
    );
}

#[test]
fn select_has_no_body() {
    let request = translate_ok("SELECT * FROM lessons WHERE id = 1");
    assert_eq!(request.body, None);
}

#[test]
fn select_missing_table() {
    let err = assert_parse_error("SELECT 1");
    assert_eq!(err.message(), "could not parse table name");
    let err = assert_parse_error("SELECT * FROM WHERE id = 1");
    assert_eq!(err.message(), "could not parse table name");
}

#[test]
fn select_bad_limit() {
    let err = assert_parse_error("SELECT * FROM t LIMIT ten");
    assert_eq!(err.message(), "LIMIT expects a non-negative integer");
    assert_parse_error("SELECT * FROM t LIMIT 2.5");
}

#[test]
fn select_condition_without_operator() {
    assert_parse_error("SELECT * FROM t WHERE active");
    assert_parse_error("SELECT * FROM t WHERE a = ");
}

#[test]
fn select_clause_out_of_order() {
    assert_parse_error("SELECT * FROM t LIMIT 1 ORDER BY a");
}

#[test]
fn select_clause_words_as_column_names() {
    assert_target(
        "SELECT * FROM lessons WHERE offset >= 3 ORDER BY order",
        Method::Get,
        "/lessons?offset=gte.3&order=order.asc",
    );
    assert_target(
        "SELECT * FROM lessons ORDER BY Order DESC LIMIT 2",
        Method::Get,
        "/lessons?order=Order.desc&limit=2",
    );
}

#[test]
fn select_structural_keyword_as_column_needs_quotes() {
    assert_parse_error("SELECT * FROM t WHERE from = 1");
    assert_target(
        "SELECT * FROM t WHERE \"from\" = 1",
        Method::Get,
        "/t?from=eq.1",
    );
}
