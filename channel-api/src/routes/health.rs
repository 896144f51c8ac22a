use aide::axum::IntoApiResponse;
use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Serialize;

use crate::types::Environment;

/// Liveness report
#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    status: &'static str,
    /// Deployment environment the process was started in
    environment: String,
    /// Crate version
    semver: &'static str,
    /// Commit hash of the build, when `GIT_REV` was set at compile time
    rev: Option<&'static str>,
}

/// Health check endpoint
///
/// Does not contact YouTube, so it stays green while upstream is down.
pub async fn handler(Extension(environment): Extension<Environment>) -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok",
        environment: format!("{environment:?}").to_lowercase(),
        semver: env!("CARGO_PKG_VERSION"),
        rev: option_env!("GIT_REV"),
    })
}
