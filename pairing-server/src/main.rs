use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pairing_server::cache::{CacheConfig, PairingCache};
use pairing_server::extract::Utf8Extractor;
use pairing_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Directory holding the published pairing documents
    let data_dir = std::env::var("PAIRING_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    let cache = PairingCache::new(&CacheConfig::default());
    let state = AppState::new(cache, Arc::new(Utf8Extractor), data_dir);

    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Pairing server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  POST /pairings/parse  - Parse an uploaded pairing document");
    println!("  GET  /files           - List published pairing documents");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
