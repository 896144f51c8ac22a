//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use innertube::InnertubeError;
use schemars::JsonSchema;
use serde::Serialize;

/// Shown when the `id` query parameter is missing or empty
pub const MISSING_CHANNEL_ID: &str = "No channel ID was specified.";

/// Tells callers how to pass the channel id
pub const USAGE: &str = "Include the channel ID in the 'id' query parameter. \
     Example: /api/channel?id=UC-gL3K6S5J99fE-Wq-s1_zQ";

/// Shown when the `InnerTube` client could not be initialized
pub const CLIENT_INIT_FAILED: &str = "Failed to initialize the YouTube API client on the server.";

/// Shown when the channel lookup failed
pub const LOOKUP_FAILED: &str = "Failed to retrieve channel information.";

/// Details used when a lookup error carries no message
pub const LOOKUP_FAILED_FALLBACK: &str =
    "The specified channel ID was not found or the API call failed.";

/// API error response envelope
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Human-readable error summary
    error: &'static str,
    /// Underlying failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    /// How to call the endpoint correctly
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<&'static str>,
    /// Echo of the requested channel id
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_id: Option<String>,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// The `id` query parameter is missing or empty
    #[must_use]
    pub const fn missing_channel_id() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            inner: ApiErrorResponse {
                error: MISSING_CHANNEL_ID,
                details: None,
                usage: Some(USAGE),
                channel_id: None,
            },
        }
    }

    /// The client could not be created or initialized
    #[must_use]
    pub fn client_init(err: &InnertubeError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            inner: ApiErrorResponse {
                error: CLIENT_INIT_FAILED,
                details: Some(err.to_string()),
                usage: None,
                channel_id: None,
            },
        }
    }

    /// The lookup for `channel_id` failed, including when the channel does not exist
    #[must_use]
    pub fn lookup_failed(channel_id: &str, err: &InnertubeError) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            inner: ApiErrorResponse {
                error: LOOKUP_FAILED,
                details: Some(lookup_details(err)),
                usage: None,
                channel_id: Some(channel_id.to_string()),
            },
        }
    }

    /// HTTP status this error renders as
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

fn lookup_details(err: &InnertubeError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        LOOKUP_FAILED_FALLBACK.to_string()
    } else {
        message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let details = self.inner.details.as_deref().unwrap_or_default();
        let channel_id = self.inner.channel_id.as_deref();

        if self.status == StatusCode::BAD_REQUEST {
            tracing::warn!(status = %self.status, "{}", self.inner.error);
        } else {
            tracing::error!(status = %self.status, channel_id, "{}: {details}", self.inner.error);
        }

        (self.status, Json(self.inner)).into_response()
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn body(err: &AppError) -> serde_json::Value {
        serde_json::to_value(&err.inner).unwrap()
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Builds an error and renders it, returning the log lines written along the way
    fn logged_lines(make_error: impl FnOnce() -> AppError) -> Vec<String> {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _response = make_error().into_response();
        });

        let output = buffer.0.lock().unwrap().clone();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_missing_channel_id_body() {
        let err = AppError::missing_channel_id();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body(&err), json!({ "error": MISSING_CHANNEL_ID, "usage": USAGE }));
    }

    #[test]
    fn test_client_init_exposes_message() {
        let err = AppError::client_init(&InnertubeError::Other("network down".to_string()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body(&err),
            json!({ "error": CLIENT_INIT_FAILED, "details": "network down" })
        );
    }

    #[test]
    fn test_lookup_failed_echoes_channel_id() {
        let err = AppError::lookup_failed(
            "BADID",
            &InnertubeError::ChannelNotFound("BADID".to_string()),
        );

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body(&err),
            json!({
                "error": LOOKUP_FAILED,
                "details": "Channel not found: BADID",
                "channel_id": "BADID",
            })
        );
    }

    #[test]
    fn test_lookup_failed_without_message_uses_fallback() {
        let err = AppError::lookup_failed("UC123", &InnertubeError::Other("  ".to_string()));
        assert_eq!(body(&err)["details"], LOOKUP_FAILED_FALLBACK);
    }

    #[test]
    fn test_client_init_is_logged_once() {
        let lines = logged_lines(|| {
            AppError::client_init(&InnertubeError::Other("network down".to_string()))
        });

        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains(CLIENT_INIT_FAILED));
        assert!(lines[0].contains("network down"));
    }

    #[test]
    fn test_lookup_failure_is_logged_once_with_channel_id() {
        let lines = logged_lines(|| {
            AppError::lookup_failed("BADID", &InnertubeError::Other("gone".to_string()))
        });

        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("BADID"));
        assert!(lines[0].contains("gone"));
    }

    #[test]
    fn test_missing_channel_id_is_logged_as_warning() {
        let lines = logged_lines(AppError::missing_channel_id);

        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains(MISSING_CHANNEL_ID));
    }
}
