// Connection handling module
// Accepts and serves a single TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::api;
use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
/// * `check_limits` - Whether to check max connection limits
/// * `is_api_server` - Whether this listener serves the product API
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
    check_limits: bool,
    is_api_server: bool,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    // Check connection limit if requested
    if check_limits {
        if let Some(max_conn) = state.config.performance.max_connections {
            if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
                // Exceeded limit: rollback counter and reject
                conn_counter.fetch_sub(1, Ordering::SeqCst);
                logger::log_warning(&format!(
                    "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
                ));
                drop(stream);
                return;
            }
        }
    }

    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    // Handle the connection in a spawned task
    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
        is_api_server,
    );
}

/// Handle a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, configures HTTP/1.1 keep-alive,
/// serves the connection with the matching request handler under a
/// read/write timeout, and decrements the connection counter when done.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
    is_api_server: bool,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        // Read performance configuration
        let keep_alive_timeout = state.config.performance.keep_alive_timeout;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            state.config.performance.read_timeout,
            state.config.performance.write_timeout,
        ));

        // Build HTTP/1 connection with keep-alive support
        let mut builder = http1::Builder::new();
        if keep_alive_timeout > 0 {
            builder.keep_alive(true);
        }

        // Serve connection
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state_clone = Arc::clone(&state);
                async move {
                    if is_api_server {
                        api::handle_api_request(req, peer_addr, state_clone).await
                    } else {
                        handler::handle_request(req, state_clone).await
                    }
                }
            }),
        );

        // Apply timeout and handle result
        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection timeout after {} seconds, api_server: {}",
                    timeout_duration.as_secs(),
                    is_api_server
                ));
            }
        }

        // Decrement active connection counter
        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
