use std::sync::Arc;

use axum::Extension;
use innertube::ClientFactory;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::types::{AppError, ChannelId, PrettyJson};

/// Successful channel lookup
#[derive(Debug, Serialize, JsonSchema)]
pub struct ChannelResponse {
    /// Always `success`
    pub status: &'static str,
    /// The requested channel id, unchanged
    pub channel_id: String,
    /// Channel details exactly as returned by the YouTube client
    pub data: Value,
}

/// Channel details lookup
///
/// Opens a fresh YouTube client session and returns everything it knows about the
/// channel named by the `id` query parameter.
pub async fn handler(
    Extension(client_factory): Extension<Arc<dyn ClientFactory>>,
    ChannelId(channel_id): ChannelId,
) -> Result<PrettyJson<ChannelResponse>, AppError> {
    let client = client_factory
        .init()
        .await
        .map_err(|err| AppError::client_init(&err))?;

    tracing::info!(channel_id = %channel_id, "Looking up channel details");

    let data = client
        .get_channel_details(&channel_id)
        .await
        .map_err(|err| AppError::lookup_failed(&channel_id, &err))?;

    Ok(PrettyJson(ChannelResponse {
        status: "success",
        channel_id,
        data,
    }))
}
