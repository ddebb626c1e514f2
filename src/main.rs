use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blade_stock::{
    config::Settings,
    http::{router, AppState},
    services::DataService,
};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to register tracing subscriber")?;

    let settings = Settings::from_env()?;

    let data_service = match &settings.database_url {
        Some(database_url) => {
            let db = Arc::new(
                PgPoolOptions::new()
                    .max_connections(settings.database_max_connections)
                    .connect(database_url)
                    .await
                    .context("failed to connect to DATABASE_URL")?,
            );

            sqlx::migrate!().run(&*db).await?;

            DataService::relational(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, data is kept in memory only");

            DataService::in_memory()
        }
    };

    let state = AppState::new(settings, data_service);

    let address = format!("0.0.0.0:{}", state.settings.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!("blade stock api listening on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("received ctrl+c, shutting down"),
            Err(err) => {
                tracing::error!("failed to listen for ctrl+c: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!("failed to install terminate handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
