//! Demo endpoints. Every handler answers with a cadenza envelope.

use axum::body::Bytes;
use axum::extract::Path;
use axum::response::Response;
use cadenza_core::{NO_DATA, STATUS_TABLE, bad_request, not_found, ok, respond, teapot};
use serde_json::Value;

/// Run `write` against a fresh response and return it.
fn reply(write: impl FnOnce(&mut Response)) -> Response {
    let mut response = Response::default();
    write(&mut response);
    response
}

/// Parse a path segment into a code the server can send as a final response.
///
/// 1xx codes are refused: hyper replaces a final informational response
/// with an empty 500, which would no longer match the envelope's `code`.
fn parse_code(raw: &str) -> Option<u16> {
    raw.parse::<u16>()
        .ok()
        .filter(|code| (200..=999).contains(code))
}

fn invalid_code(raw: &str) -> Response {
    tracing::debug!(raw, "rejecting status code");
    reply(|res| bad_request(res, Some(&format!("invalid status code: {raw}"))))
}

pub async fn health() -> Response {
    reply(|res| ok(res, Some(&serde_json::json!({ "status": "ok" }))))
}

/// `GET /codes`: the whole registry.
pub async fn codes() -> Response {
    reply(|res| ok(res, Some(STATUS_TABLE)))
}

/// `GET /status/{code}`: envelope with the reason phrase for `code`.
pub async fn status(Path(raw): Path<String>) -> Response {
    match parse_code(&raw) {
        Some(code) => reply(|res| respond(res, code, NO_DATA)),
        None => invalid_code(&raw),
    }
}

/// `POST /echo/{code}`: the JSON request body becomes `data`.
///
/// An empty body is treated as an omitted payload.
pub async fn echo(Path(raw): Path<String>, body: Bytes) -> Response {
    let Some(code) = parse_code(&raw) else {
        return invalid_code(&raw);
    };

    if body.is_empty() {
        return reply(|res| respond(res, code, NO_DATA));
    }

    match cadenza_core::json::from_slice::<Value>(&body) {
        Ok(data) => reply(|res| respond(res, code, Some(&data))),
        Err(err) => reply(|res| bad_request(res, Some(&format!("invalid JSON body: {err}")))),
    }
}

pub async fn brew() -> Response {
    reply(|res| teapot(res, NO_DATA))
}

pub async fn fallback() -> Response {
    reply(|res| not_found(res, NO_DATA))
}
