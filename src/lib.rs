pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod types;
pub(crate) mod utils;

use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::error::ConfigError as Error;
use crate::core::{config::Args, seed, state::AppState, store::Store};

pub use crate::core::error::ConfigError;

pub async fn run() -> Result<(), Error> {
    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let books = seed::load_catalog(config.catalog_path.as_deref())?;
    let store = Arc::new(Store::new(books)?);

    let state = AppState::new(&config, store)?;

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::info!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
