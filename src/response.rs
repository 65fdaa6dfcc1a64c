//! HTTP response builders.
//!
//! Every response body is one of two JSON envelopes, both of which repeat the
//! HTTP status code inside the body:
//!
//! - [`Message`]: `{ "statusCode": 400, "message": "..." }`
//! - [`Wrapped`]: `{ "statusCode": 200, "content": [...] }`

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};
use serde::{Deserialize, Serialize};

/// Response body type used throughout the service.
pub type Body = Full<Bytes>;

/// Full response type used throughout the service.
pub type HttpResponse = Response<Body>;

/// Envelope carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub status_code: u16,
    pub message: String,
}

/// Envelope carrying an arbitrary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wrapped<T> {
    pub status_code: u16,
    pub content: T,
}

fn build(status: StatusCode, body: Vec<u8>) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// Build a pretty-printed JSON response with the given status code and body.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> crate::Result<HttpResponse> {
    let json = serde_json::to_vec_pretty(body)?;
    Ok(build(status, json))
}

/// Build a message envelope response.
pub fn message(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    let envelope = Message {
        status_code: status.as_u16(),
        message: message.into(),
    };
    let body = serde_json::to_vec_pretty(&envelope).unwrap_or_else(|_| {
        format!(r#"{{"statusCode":{},"message":""}}"#, envelope.status_code).into_bytes()
    });
    build(status, body)
}

/// Build a wrapped-content envelope response.
pub fn wrapped<T: Serialize>(status: StatusCode, content: &T) -> crate::Result<HttpResponse> {
    json(
        status,
        &Wrapped {
            status_code: status.as_u16(),
            content,
        },
    )
}

/// Build a 200 OK message envelope.
pub fn ok(text: impl Into<String>) -> HttpResponse {
    message(StatusCode::OK, text)
}

/// Build a 404 Not Found message envelope.
pub fn not_found() -> HttpResponse {
    message(StatusCode::NOT_FOUND, "Not found")
}

/// Build a 405 Method Not Allowed message envelope.
pub fn method_not_allowed() -> HttpResponse {
    message(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
