// Server loop module
// Unified accept loop shared by the API and UI listeners

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Configuration for server loop behavior
pub struct ServerLoopConfig {
    pub is_api_server: bool,
    pub check_connection_limits: bool,
    pub log_prefix: &'static str,
}

/// Accept connections until the shared shutdown signal fires.
///
/// The same loop drives both listeners; only the dispatch target and the
/// connection-limit policy differ.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    config: ServerLoopConfig,
) {
    let shutdown = state.shutdown.notified();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            config.check_connection_limits,
                            config.is_api_server,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!(
                            "{} Failed to accept connection: {e}",
                            config.log_prefix
                        ));
                    }
                }
            }

            () = &mut shutdown => {
                logger::log_shutdown(config.log_prefix);
                break;
            }
        }
    }
}
