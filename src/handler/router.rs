//! Request routing dispatch module
//!
//! Entry point for UI-listener request processing: method validation,
//! route matching, and dispatching.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::ui;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for UI request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Extract headers for conditional requests
    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        access_log,
    };

    let response = route_request(&ctx, &state).await;
    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path and configuration
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    // 1. The catalog page itself
    if ctx.path == "/" {
        return ui::serve_catalog_page(ctx, state);
    }

    // 2. Favicon
    if ctx.path == "/favicon.ico" || ctx.path == "/favicon.svg" {
        return ui::serve_favicon(ctx);
    }

    // 3. Optional static assets
    if let Some(dir) = &state.config.ui.static_dir {
        return static_files::serve_directory(ctx, dir).await;
    }

    http::build_404_response()
}
