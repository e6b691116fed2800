// Product resource handlers
// The five CRUD operations over the in-memory catalog

use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::sync::Arc;

use super::response::{bad_request, json_response, no_content, not_found_product};
use crate::catalog::{NewProduct, ProductPatch};
use crate::config::AppState;
use crate::logger;

/// POST /api/products - create a new product
pub async fn handle_create(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let Some(body) = read_body(req, state).await else {
        return bad_request("Failed to read request body");
    };

    let new: NewProduct = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => return bad_request(&format!("Invalid JSON: {e}")),
    };

    if let Err(message) = new.validate() {
        return bad_request(message);
    }

    let product = state.catalog.insert(new).await;
    json_response(StatusCode::CREATED, &product)
}

/// GET /api/products - list all products
pub async fn handle_list(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let products = state.catalog.list().await;
    json_response(StatusCode::OK, &products)
}

/// GET /api/products/{id} - fetch one product
pub async fn handle_get(state: &Arc<AppState>, id: &str) -> Response<Full<Bytes>> {
    match state.catalog.get(id).await {
        Some(product) => json_response(StatusCode::OK, &product),
        None => not_found_product(),
    }
}

/// PATCH /api/products/{id} - partial update
pub async fn handle_update(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
    id: &str,
) -> Response<Full<Bytes>> {
    if state.catalog.get(id).await.is_none() {
        return not_found_product();
    }

    let Some(body) = read_body(req, state).await else {
        return bad_request("Failed to read request body");
    };

    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => return bad_request(&format!("Invalid JSON: {e}")),
    };
    let Some(fields) = value.as_object() else {
        return bad_request("Invalid JSON: expected an object");
    };
    if fields.is_empty() {
        return bad_request("Nothing to update");
    }

    let patch: ProductPatch = match serde_json::from_value(value) {
        Ok(p) => p,
        Err(e) => return bad_request(&format!("Invalid JSON: {e}")),
    };

    match state.catalog.apply_patch(id, &patch).await {
        Some(product) => json_response(StatusCode::OK, &product),
        None => not_found_product(),
    }
}

/// DELETE /api/products/{id} - remove a product
pub async fn handle_delete(state: &Arc<AppState>, id: &str) -> Response<Full<Bytes>> {
    if state.catalog.remove(id).await {
        no_content()
    } else {
        not_found_product()
    }
}

/// Collect the request body, optionally logging it for mutating calls
async fn read_body(req: Request<hyper::body::Incoming>, state: &Arc<AppState>) -> Option<Bytes> {
    let bytes = req.collect().await.ok()?.to_bytes();
    if state.config.logging.log_request_body {
        logger::log_request_body(&bytes);
    }
    Some(bytes)
}
