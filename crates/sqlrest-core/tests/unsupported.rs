//! Out-of-subset input must fail instead of producing a request that does
//! not represent the statement.

mod common;
use common::*;

use pretty_assertions::assert_eq;

#[test]
fn or_conditions() {
    let err = assert_unsupported("SELECT * FROM t WHERE a = 1 OR b = 2");
    assert_eq!(err.message(), "OR conditions");
}

#[test]
fn parenthesized_conditions() {
    assert_unsupported("SELECT * FROM t WHERE (a = 1 AND b = 2)");
    assert_unsupported("SELECT * FROM t WHERE a = 1 AND (b = 2 OR c = 3)");
}

#[test]
fn subqueries() {
    assert_unsupported("SELECT * FROM t WHERE id IN (SELECT id FROM u)");
    assert_unsupported("SELECT * FROM t WHERE id = (SELECT max(id) FROM u)");
    assert_unsupported("SELECT (SELECT 1) FROM t");
    let err = assert_unsupported("SELECT * FROM (SELECT 1) x");
    assert_eq!(err.message(), "subqueries");
    assert_unsupported("DELETE FROM (SELECT id FROM t) WHERE id = 1");
    assert_unsupported("SELECT * FROM t WHERE EXISTS (SELECT 1 FROM u)");
}

#[test]
fn negated_conditions() {
    assert_unsupported("SELECT * FROM t WHERE NOT a = 1");
    assert_unsupported("SELECT * FROM t WHERE a NOT BETWEEN 1 AND 2");
}

#[test]
fn between() {
    assert_unsupported("SELECT * FROM t WHERE a BETWEEN 1 AND 2");
}

#[test]
fn joins_and_multiple_tables() {
    assert_unsupported("SELECT * FROM a JOIN b ON a.id = b.id");
    assert_unsupported("SELECT * FROM a LEFT JOIN b ON a.id = b.id");
    assert_unsupported("SELECT * FROM a, b");
    assert_unsupported("SELECT * FROM lessons l WHERE l.id = 1");
}

#[test]
fn grouping_and_set_operations() {
    assert_unsupported("SELECT lang FROM lessons GROUP BY lang");
    assert_unsupported("SELECT * FROM lessons WHERE a = 1 GROUP BY lang");
    assert_unsupported("SELECT lang FROM lessons HAVING lang = 'es'");
    assert_unsupported("SELECT DISTINCT lang FROM lessons");
    assert_unsupported("SELECT * FROM a UNION SELECT * FROM b");
}

#[test]
fn qualified_names() {
    assert_unsupported("SELECT * FROM public.lessons");
    assert_unsupported("SELECT * FROM lessons WHERE lessons.id = 1");
}

#[test]
fn comparison_with_null() {
    let err = assert_unsupported("SELECT * FROM t WHERE a = NULL");
    assert_eq!(err.message(), "comparison with NULL (use IS NULL)");
}

#[test]
fn non_literal_right_hand_sides() {
    assert_unsupported("SELECT * FROM t WHERE a = lower('X')");
    assert_unsupported("SELECT * FROM t WHERE a = b.c");
    assert_unsupported("SELECT * FROM t WHERE a = 1 + 1");
    assert_unsupported("SELECT * FROM t WHERE a = 'x' || 'y'");
}

#[test]
fn comma_inside_in_element() {
    assert_unsupported("SELECT * FROM t WHERE a IN ('x,y', 'z')");
}

#[test]
fn nulls_ordering() {
    assert_unsupported("SELECT * FROM t ORDER BY a DESC NULLS LAST");
}

#[test]
fn several_statements_in_one_call() {
    let err = assert_unsupported("DELETE FROM a; DELETE FROM b");
    assert_eq!(err.message(), "multiple statements");
}
