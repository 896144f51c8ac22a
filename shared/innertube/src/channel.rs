//! Channel details extraction from `browse` responses

use serde_json::{json, Value};

use crate::{InnertubeError, InnertubeResult};

/// Picks the channel-level parts out of a raw `browse` response.
///
/// A response without `metadata.channelMetadataRenderer` is not a channel page.
pub(crate) fn extract_channel_details(
    channel_id: &str,
    response: &Value,
) -> InnertubeResult<Value> {
    let metadata = &response["metadata"]["channelMetadataRenderer"];
    if !metadata.is_object() {
        return Err(InnertubeError::ChannelNotFound(channel_id.to_string()));
    }

    let tabs: Vec<&str> = response["contents"]["twoColumnBrowseResultsRenderer"]["tabs"]
        .as_array()
        .map(|tabs| {
            tabs.iter()
                .filter_map(|tab| tab["tabRenderer"]["title"].as_str())
                .collect()
        })
        .unwrap_or_default();

    Ok(json!({
        "metadata": metadata,
        "header": response["header"],
        "microformat": response["microformat"]["microformatDataRenderer"],
        "tabs": tabs,
    }))
}

/// Message of an `{"error": {"message": ...}}` payload
pub(crate) fn api_error_message(response: &Value) -> Option<String> {
    response["error"]["message"].as_str().map(ToString::to_string)
}
