//! Shortcuts for frequently used response templates.
//!
//! Every function returns a [`ResponseBuilder`], so the result can be refined further before it
//! is passed to [`will_return`](crate::RequestMatcherBuilder::will_return).
use crate::api::{response, ResponseBuilder};
use serde_json::Value;

const CONTENT_TYPE: &str = "Content-Type";

/// `200 OK` with the given body and content type.
pub fn success<B: Into<String>, C: Into<String>>(body: B, content_type: C) -> ResponseBuilder {
    response().status(200).body(body).header(CONTENT_TYPE, content_type)
}

/// `200 OK` with a JSON body and `Content-Type: application/json`.
pub fn success_json<V: Into<Value>>(body: V) -> ResponseBuilder {
    response()
        .status(200)
        .json_body(body)
        .header(CONTENT_TYPE, "application/json")
}

/// `200 OK` with a binary body, stored base64-encoded.
pub fn success_binary<B: AsRef<[u8]>, C: Into<String>>(
    body: B,
    content_type: C,
) -> ResponseBuilder {
    response()
        .status(200)
        .body_bytes(body)
        .header(CONTENT_TYPE, content_type)
}

/// `201 Created` pointing to `location`.
pub fn created<L: Into<String>>(location: L) -> ResponseBuilder {
    response().status(201).header("Location", location)
}

pub fn no_content() -> ResponseBuilder {
    response().status(204)
}

pub fn bad_request() -> ResponseBuilder {
    response().status(400)
}

pub fn unauthorized() -> ResponseBuilder {
    response().status(401)
}

pub fn forbidden() -> ResponseBuilder {
    response().status(403)
}

pub fn not_found() -> ResponseBuilder {
    response().status(404)
}

pub fn server_error() -> ResponseBuilder {
    response().status(500)
}

pub fn service_unavailable() -> ResponseBuilder {
    response().status(503)
}

/// An empty response with an arbitrary status code.
pub fn with_status(status: u16) -> ResponseBuilder {
    response().status(status)
}
