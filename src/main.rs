use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bill_feed_server::config::load_config;
use bill_feed_server::core::cache::CacheManager;
use bill_feed_server::core::error::AppError;
use bill_feed_server::features::bills::{BillService, CongressDataSource, LegiScanDataSource};
use bill_feed_server::features::congress::CongressClient;
use bill_feed_server::features::legiscan::LegiScanClient;
use bill_feed_server::server::{AppState, build_router};

const CACHE_CAPACITY: u64 = 512;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);
    let cache_manager = CacheManager::new(config.cache_enabled, CACHE_CAPACITY);

    let congress: Arc<dyn CongressDataSource> =
        Arc::new(CongressClient::new(config.clone(), cache_manager.clone())?);
    let legiscan: Arc<dyn LegiScanDataSource> =
        Arc::new(LegiScanClient::new(config.clone(), cache_manager)?);
    if config.legiscan.api_key.is_none() {
        tracing::warn!("LEGISCAN_API_KEY not set, legiscan lookups will fail");
    }

    let bill_service = Arc::new(BillService::new(
        config.pagination.clone(),
        congress,
        legiscan,
    ));
    let app = build_router(AppState::new(bill_service, config.api_key.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, cache = config.cache_enabled, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
