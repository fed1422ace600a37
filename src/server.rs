//! Server wiring: store selection, service construction and the HTTP loop.

use crate::config::AppConfig;
use crate::http;
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::{TaskRepository, TaskRepositoryError},
    services::TaskService,
};
use axum::Router;
use diesel::r2d2::PoolError;
use mockable::DefaultClock;
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The database pool could not be created.
    #[error("failed to connect to the task database: {0}")]
    Pool(#[from] PoolError),

    /// The task schema could not be applied.
    #[error("failed to prepare the task schema: {0}")]
    Schema(#[from] TaskRepositoryError),

    /// The listener could not bind.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Requested address.
        address: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Builds the application router for the given repository using the system
/// clock.
pub fn app<R>(repository: R) -> Router
where
    R: TaskRepository + 'static,
{
    http::router(TaskService::new(Arc::new(repository), Arc::new(DefaultClock)))
}

/// Selects the configured task store and serves HTTP until shutdown.
///
/// # Errors
///
/// Returns [`ServerError`] when the store cannot be prepared, the listener
/// cannot bind, or the server loop fails.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let router = match config.database.url.as_deref() {
        Some(database_url) => {
            info!(pool_size = config.database.pool_size, "using PostgreSQL task store");
            let pool = PostgresTaskRepository::build_pool(database_url, config.database.pool_size)?;
            let repository = PostgresTaskRepository::new(pool);
            repository.apply_schema().await?;
            app(repository)
        }
        None => {
            info!("using in-memory task store");
            app(InMemoryTaskRepository::new())
        }
    };

    serve(&config.server_addr(), router).await
}

async fn serve(address: &str, router: Router) -> Result<(), ServerError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.to_owned(),
            source,
        })?;
    info!(address = %address, version = env!("CARGO_PKG_VERSION"), "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
