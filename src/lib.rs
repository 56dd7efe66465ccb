use crate::model::{ModelManager, SessionStore};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod auth;
pub mod error;
pub mod model;
pub mod utils;
pub mod web;

static APPLICATION_NAME: &str = "learnpath";

pub async fn build_server() -> AppResult<(AppState, Router)> {
    let use_local = cfg!(debug_assertions);
    let config = Config::get_or_init(use_local).await;

    Ok(assemble(SessionStore::new(), config))
}

pub async fn build_server_with_store(store: SessionStore) -> AppResult<(AppState, Router)> {
    let config = Config::get_or_init(true).await;

    Ok(assemble(store, config))
}

fn assemble(store: SessionStore, config: &'static Config) -> (AppState, Router) {
    let mm = ModelManager::new(store);
    let state = AppState::new(mm, config);
    let app = web::routes::build_app(state.clone());
    (state, app)
}

#[tracing::instrument]
pub async fn setup_workers() -> AppResult<()> {
    let (state, app) = build_server().await?;
    let config = state.config();
    let shutdown = CancellationToken::new();

    let sweeper = tokio::spawn(state.pool().sessions().clone().run_sweeper(
        config.app().session_ttl(),
        config.app().sweep_interval(),
        shutdown.clone(),
    ));

    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());
    let axum_handle = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()));

    axum_handle.await?;

    shutdown.cancel();
    sweeper.await?;
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    setup_workers().await?;
    Ok(())
}
