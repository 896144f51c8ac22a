//! Custom extractors for request validation

use aide::operation::OperationInput;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::types::error::AppError;

/// Query string accepted by the channel endpoint
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChannelQuery {
    /// Platform channel identifier, e.g. `UC-gL3K6S5J99fE-Wq-s1_zQ`
    pub id: String,
}

/// Channel id taken from the `id` query parameter.
///
/// The request body is never read. When the parameter is repeated the first value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelId(pub String);

impl<S> FromRequestParts<S> for ChannelId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .uri
            .query()
            .and_then(|query| query_param(query, "id"))
            .filter(|id| !id.is_empty())
            .map(Self)
            .ok_or_else(AppError::missing_channel_id)
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

impl OperationInput for ChannelId {
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Documented as a regular `?id=` query parameter
        Query::<ChannelQuery>::operation_input(ctx, operation);
    }
}
