use healthchecks::{Reporter, StateReporter};
use probe_server::{server, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    tracing::info!("Probe server starting");
    tracing::info!("Port: {}", config.port);
    tracing::info!("Health path: {}", config.health_path);
    tracing::info!("Ready path: {}", config.ready_path);
    tracing::info!("Admin endpoint enabled: {}", config.admin_enabled);

    let reporter: Arc<dyn Reporter> = Arc::new(StateReporter::new());

    // The process is up; readiness follows once the listener is bound
    reporter.set_healthy(true);

    server::start(config, reporter).await?;

    Ok(())
}
