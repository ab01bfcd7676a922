#![allow(dead_code)]

use sqlrest_core::{translate, ErrorKind, Method, RestRequest, TranslateError};

pub fn translate_ok(sql: &str) -> RestRequest {
    translate(sql).unwrap_or_else(|e| panic!("Failed to translate: {sql}\nError: {e}"))
}

pub fn translate_err(sql: &str) -> TranslateError {
    translate(sql)
        .err()
        .unwrap_or_else(|| panic!("Expected translation error for: {sql}"))
}

/// Asserts the method and `path[?query]` of a translated statement.
pub fn assert_target(sql: &str, method: Method, target: &str) {
    let request = translate_ok(sql);
    assert_eq!(request.method, method, "method of: {sql}");
    assert_eq!(request.target(), target, "target of: {sql}");
}

pub fn assert_unsupported(sql: &str) -> TranslateError {
    let err = translate_err(sql);
    assert_eq!(
        err.kind(),
        ErrorKind::UnsupportedOperation,
        "expected UnsupportedOperation for: {sql}, got {err}"
    );
    err
}

pub fn assert_parse_error(sql: &str) -> TranslateError {
    let err = translate_err(sql);
    assert_eq!(
        err.kind(),
        ErrorKind::ParseError,
        "expected ParseError for: {sql}, got {err}"
    );
    err
}

/// Returns the translated body as JSON.
pub fn body_json(sql: &str) -> serde_json::Value {
    let request = translate_ok(sql);
    let body = request
        .body
        .unwrap_or_else(|| panic!("Expected a body for: {sql}"));
    serde_json::to_value(&body).unwrap()
}
