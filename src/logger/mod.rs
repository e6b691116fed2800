//! Logger module
//!
//! Provides logging utilities for the catalog server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(
    api_addr: &SocketAddr,
    ui_addr: &SocketAddr,
    config: &Config,
    product_count: usize,
) {
    write_info("======================================");
    write_info("Product catalog server started");
    write_info(&format!("API:    http://{api_addr}/api/products"));
    write_info(&format!("Web UI: http://{ui_addr}/"));
    write_info(&format!("Log level: {}", config.logging.level));
    write_info(&format!("Seeded products: {product_count}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("Using Tokio runtime for concurrency");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log an incoming UI-server request line
pub fn log_request(method: &hyper::Method, uri: &hyper::Uri, version: hyper::Version) {
    write_info(&format!("[Request] {method} {uri} {version:?}"));
}

/// Log a served response body size (UI server)
pub fn log_response(bytes: usize) {
    write_info(&format!("[Response] {bytes} bytes"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

/// Log the body of a mutating API request (enabled via config)
pub fn log_request_body(body: &[u8]) {
    match std::str::from_utf8(body) {
        Ok(text) => write_info(&format!("[Body] {text}")),
        Err(_) => write_info(&format!("[Body] <{} non-utf8 bytes>", body.len())),
    }
}

pub fn log_shutdown(prefix: &str) {
    write_info(&format!("{prefix} Shutdown signal received, listener closing"));
}
