use std::sync::Arc;

use channel_api::{server, types::Environment};
use innertube::InnertubeFactory;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set variables directly
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();

    // JSON logs for staging/production, human-readable logs for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    tracing::info!("Starting Channel API in {environment:?} environment");

    let client_factory = Arc::new(InnertubeFactory::new(environment.innertube_config()));

    server::start(environment, client_factory).await
}
