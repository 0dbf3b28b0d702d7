use healthchecks::Reporter;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

/// Wait for `signal`, then drop out of readiness and keep serving for `drain`
///
/// Passed to graceful shutdown: the server stops accepting connections only
/// once this future resolves, which gives the orchestrator time to observe
/// the failing readiness probe and stop routing traffic here.
pub async fn drain_on<F>(signal: F, reporter: Arc<dyn Reporter>, drain: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;

    tracing::info!("Shutdown signal received, marking not ready");
    reporter.set_ready(false);

    if !drain.is_zero() {
        tracing::info!("Draining for {:?} before shutdown", drain);
        tokio::time::sleep(drain).await;
    }

    tracing::info!("Drain complete, shutting down");
}
