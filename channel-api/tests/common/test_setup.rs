use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use channel_api::{server, types::Environment};
use http_body_util::BodyExt;
use innertube::ClientFactory;
use tower::ServiceExt;

use super::FakeClientFactory;

/// Setup test environment with logging enabled
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router wired to a fake YouTube client
pub struct TestSetup {
    pub router: Router,
    pub client_factory: FakeClientFactory,
}

impl TestSetup {
    pub fn new(client_factory: FakeClientFactory) -> Self {
        Self::with_environment(Environment::Development, client_factory)
    }

    pub fn with_environment(environment: Environment, client_factory: FakeClientFactory) -> Self {
        setup_test_env();

        let factory: Arc<dyn ClientFactory> = Arc::new(client_factory.clone());
        let router = server::router(environment, factory);

        Self {
            router,
            client_factory,
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_request("GET", route, Body::empty()).await
    }

    pub async fn send_request(
        &self,
        method: &str,
        route: &str,
        body: Body,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .header("Content-Type", "application/json")
            .body(body)?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn response_text(
        &self,
        response: Response,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let body = response.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(body.to_vec())?)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }

    pub fn client_calls(&self) -> Vec<String> {
        self.client_factory.calls()
    }
}
