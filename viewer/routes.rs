use std::io::Cursor;

use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::render;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn svg_response(body: &str) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.as_bytes().to_vec();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"image/svg+xml").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate response.
pub fn dispatch(request: Request, state: SharedState) {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or("").to_owned();

    let response = match (method, path.as_str()) {
        (Method::Get, "/") => html_response(render::index_page(&state)),
        (Method::Get, "/chart/accuracy.svg") => svg_response(&state.accuracy_svg),
        (Method::Get, "/chart/loss.svg") => match &state.loss_svg {
            Some(svg) => svg_response(svg),
            None => not_found(),
        },
        _ => not_found(),
    };

    let _ = request.respond(response);
}
