//! Utility functions.

use std::path::Path;

use tracing::info;

/// Create the upload directory if it does not exist.
///
/// The directory is the service's only startup side effect; nothing in the
/// request path writes to it.
pub async fn ensure_upload_dir(path: &str) -> crate::Result<()> {
    if !Path::new(path).exists() {
        tokio::fs::create_dir_all(path).await?;
        info!("Created upload directory: {}", path);
    }

    Ok(())
}

/// Wait for a shutdown signal (ctrl-c or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install ctrl-c handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
