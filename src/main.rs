use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use search_console::export::handlers::handle_export;
use search_console::grid::handlers::handle_results;
use search_console::query::client::BackendClient;
use search_console::query::handlers::{handle_index, handle_search};
use search_console::session::store::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_arg: Option<String> = None;
    let mut backend_arg: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_arg = Some(args[i + 1].clone());
                i += 2;
            }
            "--backend" => {
                backend_arg = Some(args[i + 1].clone());
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--backend <url>]", args[0]);
                eprintln!("Defaults: --bind 127.0.0.1:8080 (or $BIND),");
                eprintln!("          --backend http://localhost:3001 (or $BACKEND_URL)");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr: SocketAddr = bind_arg
        .or_else(|| std::env::var("BIND").ok())
        .unwrap_or_else(|| "127.0.0.1:8080".to_string())
        .parse()?;
    let backend_url = backend_arg
        .or_else(|| std::env::var("BACKEND_URL").ok())
        .unwrap_or_else(|| "http://localhost:3001".to_string());

    let client = Arc::new(BackendClient::new(&backend_url));
    let sessions = Arc::new(SessionStore::new());

    tracing::info!("Search backend: {}", client.base_url());

    let app = Router::new()
        .route("/", get(handle_index))
        .route("/search", get(handle_search))
        .route("/results", get(handle_results))
        .route("/export.csv", get(handle_export))
        .layer(Extension(client))
        .layer(Extension(sessions));

    tracing::info!("Console listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
