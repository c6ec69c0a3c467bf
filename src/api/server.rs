use crate::api::routes;
use crate::cli::Cli;
use crate::db::{Database, SharedStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `cli` - Parsed configuration holding the port and the store location
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok once the server shut down, Error if it could not start
pub async fn launch_server(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let database = Database::new(&cli.database_url)?;
    let store: SharedStore = Arc::new(database);

    let app = routes::app(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on port {}", cli.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
