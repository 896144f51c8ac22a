use std::sync::Arc;

use aide::openapi::{Info, OpenApi};
use axum::{Extension, Router};
use innertube::ClientFactory;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::types::Environment;

/// Builds the application router with all layers and shared dependencies
pub fn router(environment: Environment, client_factory: Arc<dyn ClientFactory>) -> Router {
    let mut openapi = OpenApi {
        info: Info {
            title: "Channel API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(client_factory))
        .layer(TraceLayer::new_for_http())
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    client_factory: Arc<dyn ClientFactory>,
) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], environment.port()));
    let router = router(environment, client_factory);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Channel API started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
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
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down Channel API...");
}
