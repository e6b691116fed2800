// Web UI module
// Embedded form/list client for the catalog, served by the UI listener

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache};
use crate::logger;

const CATALOG_PAGE: &str = include_str!("catalog.html");
const FAVICON: &str = include_str!("favicon.svg");

/// Marker in catalog.html replaced with the API origin at serve time
const API_BASE_PLACEHOLDER: &str = "__API_BASE__";

/// Serve the catalog page
///
/// The page is cross-origin to the API listener, so the API base URL is
/// substituted in from the server configuration.
pub fn serve_catalog_page(
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let api_base = format!(
        "http://{}:{}",
        state.config.server.api_host, state.config.server.api_port
    );
    let html = CATALOG_PAGE.replace(API_BASE_PLACEHOLDER, &api_base);

    if ctx.access_log {
        logger::log_response(html.len());
    }

    http::response::build_html_response(html, ctx.is_head)
}

/// Serve the embedded favicon
pub fn serve_favicon(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let data = FAVICON.as_bytes();
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    if ctx.access_log {
        logger::log_response(data.len());
    }

    let body = if ctx.is_head {
        Bytes::new()
    } else {
        Bytes::from_static(data)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "image/svg+xml")
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=86400")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build favicon response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_carries_placeholder() {
        // The placeholder must survive edits to catalog.html, otherwise the
        // served page would point at the wrong API origin
        assert!(CATALOG_PAGE.contains(API_BASE_PLACEHOLDER));
    }

    #[test]
    fn test_favicon_is_svg() {
        assert!(FAVICON.contains("<svg"));
    }
}
