use std::sync::Arc;

use mindscope_export::chart::PngChartRenderer;
use mindscope_instruments::catalog::{Catalog, catalog};
use mindscope_server::build_router;
use mindscope_server::config::ServerConfig;
use mindscope_server::jobs;
use mindscope_server::mail::SpoolMailer;
use mindscope_server::state::AppState;
use mindscope_storage::store::DocumentStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let store = DocumentStore::open(config.data_dir.clone()).await?;
    let catalog = match &config.catalog_path {
        Some(path) => Arc::new(Catalog::from_json(&tokio::fs::read_to_string(path).await?)?),
        None => Arc::new(catalog().clone()),
    };
    tracing::info!(
        version = catalog.version(),
        questions = catalog.question_count(),
        "catalog loaded"
    );

    let bind = config.bind;
    let state = AppState::new(
        config,
        catalog,
        store.clone(),
        Arc::new(SpoolMailer::new(store)),
        Arc::new(PngChartRenderer::default()),
    );
    jobs::spawn_sweeper(state.clone(), jobs::SWEEP_INTERVAL);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(%bind, "listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
