use crate::config::Config;
use crate::error::ServerResult;
use crate::handlers;
use crate::lifecycle;
use axum::{routing::get, Router};
use healthchecks::{ProbeState, Reporter};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const ADMIN_STATE_PATH: &str = "/admin/state";

/// Build the HTTP server with all routes and middleware
pub fn build_router(config: &Config, reporter: Arc<dyn Reporter>) -> Router {
    let mut app = healthchecks::routes_at(&config.health_path, &config.ready_path, reporter.clone());

    if config.admin_enabled {
        app = app.merge(admin_routes(reporter));
    }

    app.layer(TraceLayer::new_for_http())
}

fn admin_routes(reporter: Arc<dyn Reporter>) -> Router {
    Router::new()
        .route(
            ADMIN_STATE_PATH,
            get(handlers::get_state_handler).put(handlers::put_state_handler),
        )
        .with_state(ProbeState::new(reporter))
}

/// Bind the configured port and serve until a shutdown signal arrives
pub async fn start(config: Config, reporter: Arc<dyn Reporter>) -> ServerResult<()> {
    let app = build_router(&config, reporter.clone());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    serve(
        listener,
        app,
        reporter,
        config.shutdown_drain,
        lifecycle::shutdown_signal(),
    )
    .await
}

/// Serve `app` on an already bound listener
///
/// Readiness is reported once the listener is accepting connections and
/// withdrawn as soon as `signal` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    reporter: Arc<dyn Reporter>,
    drain: Duration,
    signal: F,
) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;

    reporter.set_ready(true);
    tracing::info!("Probe server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(lifecycle::drain_on(signal, reporter, drain))
        .await?;

    tracing::info!("Probe server stopped");

    Ok(())
}
