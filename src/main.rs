// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use link_dashboard::application::bootstrap::seed_defaults;
use link_dashboard::application::dashboard_repository::DashboardRepository;
use link_dashboard::build_router;
use link_dashboard::infrastructure::config::load_dashboard_config;
use link_dashboard::infrastructure::favicon::FaviconResolver;
use link_dashboard::infrastructure::sqlite_repository::SqliteRepository;
use link_dashboard::presentation::app_state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("link_dashboard=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn DashboardRepository> =
        Arc::new(SqliteRepository::open(&config.database.path)?);

    if config.database.seed_defaults {
        seed_defaults(repository.as_ref()).await?;
    }

    // Create application state
    let favicons = FaviconResolver::new(config.favicon.service_url.clone());
    let state = Arc::new(AppState::new(repository, favicons));

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting link-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
