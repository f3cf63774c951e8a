use std::io::Cursor;
use std::time::Instant;

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, StatusCode};
use tracing::info;

use crate::handlers;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(name: &str, value: &str) -> Header {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .unwrap_or_else(|_| panic!("invalid header {}: {}", name, value))
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![header("Content-Type", "text/html; charset=utf-8")],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response<T: Serialize>(status: u16, body: &T) -> Response<Cursor<Vec<u8>>> {
    let bytes = serde_json::to_vec(body)
        .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e).into_bytes());
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![header("Content-Type", "application/json")],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn json_error(status: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    json_response(status, &ErrorBody { error: message })
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![header("Content-Type", "text/plain")],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches one request and logs method, path, status and latency.
pub fn dispatch(mut request: Request, state: SharedState) {
    let started = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or("").to_owned();

    let response = match (&method, path.as_str()) {
        (Method::Get,  "/")       => handlers::figure::handle_get(&state),
        (Method::Post, "/")       => handlers::predict::handle_post(&mut request, &state),
        (Method::Get,  "/valid")  => handlers::report::handle_get(&state),
        (Method::Get,  "/health") => json_response(200, &serde_json::json!({ "status": "ok" })),
        _ => not_found(),
    };

    let status = response.status_code().0;
    if let Err(e) = request.respond(response) {
        tracing::warn!(%method, path = %path, error = %e, "failed to write response");
        return;
    }

    info!(
        %method,
        path = %path,
        status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
}
