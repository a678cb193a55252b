//! The Atrium server binary: in-memory store, grid door checker,
//! default validation limits.

use tracing_subscriber::{EnvFilter, fmt};

use atrium_api::{AppState, ServerConfig, create_router, server};
use atrium_domain::ValidationConfig;
use atrium_placement::GridDoorChecker;
use atrium_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env();
    let store = MemoryStore::new();
    let state = AppState::new(
        store,
        GridDoorChecker,
        ValidationConfig::default(),
    );
    let router = create_router(state);

    server::serve(config, router).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new("atrium_api=debug,atrium_service=debug,tower_http=debug,info")
        });
    fmt().with_env_filter(filter).init();
}
