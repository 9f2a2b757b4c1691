//! Server setup and lifecycle management

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use super::create_router;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{InfraError, InfraResult};

/// Bind the configured address and serve the form until shutdown.
pub async fn serve(container: Arc<ServiceContainer>) -> InfraResult<()> {
    let addr = container.settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| InfraError::io(format!("bind {}", addr), e))?;
    run(listener, container).await
}

/// Serve the form on an already bound listener with graceful shutdown.
pub async fn run(listener: TcpListener, container: Arc<ServiceContainer>) -> InfraResult<()> {
    let local = listener
        .local_addr()
        .map_err(|e| InfraError::io("read listener address", e))?;
    let app = create_router(container);

    info!("tempconv listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| InfraError::Server {
            message: e.to_string(),
        })?;

    info!("tempconv shutting down");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
