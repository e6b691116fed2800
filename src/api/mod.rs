// API module entry
// REST routing for the product catalog resource

mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Parsed API route
#[derive(Debug, PartialEq, Eq)]
enum ApiRoute<'a> {
    /// `/api/products`
    Collection,
    /// `/api/products/{id}`
    Item(&'a str),
    Unknown,
}

/// Parse a request path into an API route
///
/// A single trailing slash is tolerated; an empty id segment is an
/// unknown route.
fn parse_route(path: &str) -> ApiRoute<'_> {
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };

    if path == "/api/products" {
        return ApiRoute::Collection;
    }
    match path.strip_prefix("/api/products/") {
        Some(id) if !id.is_empty() && !id.contains('/') => ApiRoute::Item(id),
        _ => ApiRoute::Unknown,
    }
}

/// API request entry point
///
/// Dispatches to handler functions, applies CORS headers, and writes
/// one access log line per request.
pub async fn handle_api_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    // Reject oversized bodies before reading them
    let mut res = match check_body_size(&req, state.config.http.max_body_size) {
        Some(resp) => resp,
        None => dispatch(req, &state).await,
    };

    if state.config.http.enable_cors {
        apply_cors(&mut res, &state.config.http.cors_allow_origin);
    }

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = res.status().as_u16();
        entry.body_bytes = body_len(res.body());
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(res)
}

/// Route to the matching resource handler
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    if req.method() == Method::OPTIONS {
        return response::build_preflight_response(
            state.config.http.enable_cors,
            &state.config.http.cors_allow_origin,
        );
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method, parse_route(&path)) {
        (Method::POST, ApiRoute::Collection) => handlers::handle_create(req, state).await,
        (Method::GET, ApiRoute::Collection) => handlers::handle_list(state).await,
        (Method::GET, ApiRoute::Item(id)) => handlers::handle_get(state, id).await,
        (Method::PATCH, ApiRoute::Item(id)) => handlers::handle_update(req, state, id).await,
        (Method::DELETE, ApiRoute::Item(id)) => handlers::handle_delete(state, id).await,
        _ => response::not_found(),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(crate::http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Stamp the configured CORS origin onto an outgoing response
fn apply_cors(res: &mut Response<Full<Bytes>>, origin: &str) {
    if let Ok(value) = hyper::header::HeaderValue::from_str(origin) {
        res.headers_mut()
            .insert("Access-Control-Allow-Origin", value);
    }
}

fn body_len(body: &Full<Bytes>) -> usize {
    body.size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

fn version_label(version: hyper::Version) -> String {
    match version {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string()
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_route() {
        assert_eq!(parse_route("/api/products"), ApiRoute::Collection);
        assert_eq!(parse_route("/api/products/"), ApiRoute::Collection);
    }

    #[test]
    fn test_parse_item_route() {
        assert_eq!(parse_route("/api/products/abc123"), ApiRoute::Item("abc123"));
        assert_eq!(parse_route("/api/products/abc123/"), ApiRoute::Item("abc123"));
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(parse_route("/"), ApiRoute::Unknown);
        assert_eq!(parse_route("/api"), ApiRoute::Unknown);
        assert_eq!(parse_route("/api/orders"), ApiRoute::Unknown);
        assert_eq!(parse_route("/api/products/a/b"), ApiRoute::Unknown);
        // Empty id segment after the double slash
        assert_eq!(parse_route("/api/products//"), ApiRoute::Unknown);
    }
}
