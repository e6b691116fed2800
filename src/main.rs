use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod api;
mod catalog;
mod config;
mod handler;
mod http;
mod logger;
mod server;
mod ui;

use server::{create_listener, start_server_loop, ServerLoopConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing it from the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let api_addr = cfg.get_api_socket_addr()?;
    let ui_addr = cfg.get_ui_socket_addr()?;

    let api_listener = create_listener(api_addr)?;
    let ui_listener = create_listener(ui_addr)?;

    let seed = match cfg.catalog.seed_file.as_deref() {
        Some(path) => catalog::seed::load(path)?,
        None => catalog::seed::default_products(),
    };

    let state = Arc::new(config::AppState::new(
        &cfg,
        catalog::CatalogStore::new(seed),
    ));

    let product_count = state.catalog.len().await;
    logger::log_server_start(&api_addr, &ui_addr, &cfg, product_count);

    let api_connections = Arc::new(AtomicUsize::new(0));
    let ui_connections = Arc::new(AtomicUsize::new(0));

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(run_dual_servers(
            api_listener,
            ui_listener,
            state,
            api_connections,
            ui_connections,
        ))
        .await;
    Ok(())
}

/// Run the UI listener as a local task and the API listener in the
/// current task; Ctrl-C stops both.
async fn run_dual_servers(
    api_listener: tokio::net::TcpListener,
    ui_listener: tokio::net::TcpListener,
    state: Arc<config::AppState>,
    api_connections: Arc<AtomicUsize>,
    ui_connections: Arc<AtomicUsize>,
) {
    let shutdown = Arc::clone(&state.shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.notify_waiters();
        }
    });

    let state_clone = Arc::clone(&state);
    let ui_server = tokio::task::spawn_local(async move {
        start_server_loop(
            ui_listener,
            state_clone,
            ui_connections,
            ServerLoopConfig {
                is_api_server: false,
                check_connection_limits: false,
                log_prefix: "[UI]",
            },
        )
        .await;
    });

    start_server_loop(
        api_listener,
        state,
        api_connections,
        ServerLoopConfig {
            is_api_server: true,
            check_connection_limits: true,
            log_prefix: "[API]",
        },
    )
    .await;

    // The API loop exits on shutdown; wait for the UI loop to drain too
    let _ = ui_server.await;
}
