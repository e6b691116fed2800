//! Static file serving module
//!
//! Handles static asset loading, MIME type detection, and response building
//! for the optional `ui.static_dir` directory.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a static asset from the configured directory
pub async fn serve_directory(ctx: &RequestContext<'_>, dir: &str) -> Response<Full<Bytes>> {
    match load_from_directory(dir, ctx.path).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            build_static_file_response(
                &content,
                content_type,
                ctx.if_none_match.as_deref(),
                ctx.is_head,
            )
        }
        None => http::build_404_response(),
    }
}

/// Load a static file beneath the asset directory
pub async fn load_from_directory(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let relative_path = path.trim_start_matches('/').replace("..", "");

    let file_path = Path::new(static_dir).join(relative_path);

    // Security: ensure file_path is within static_dir
    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    // Determine content type from extension
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build static file response with `ETag` support
fn build_static_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    // Check if client has cached version
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::response::build_cached_response(
        Bytes::from(data.to_owned()),
        content_type,
        &etag,
        is_head,
    )
}
