//! Session bootstrap from the `sw.js_data` payload

use serde::Serialize;
use serde_json::Value;

use crate::{InnertubeConfig, InnertubeError, InnertubeResult};

/// Anti-JSON-hijacking prefix in front of the `sw.js_data` payload
const XSSI_GUARD: &str = ")]}'";

/// Client name sent with every request
pub const CLIENT_NAME: &str = "WEB";

/// Used when the session payload does not advertise a client version
pub const FALLBACK_CLIENT_VERSION: &str = "2.20250101.00.00";

const FALLBACK_HL: &str = "en";
const FALLBACK_GL: &str = "US";

// Positions inside the device info tuple at `[0][2][0][0]`
const DEVICE_HL: usize = 0;
const DEVICE_GL: usize = 2;
const DEVICE_VISITOR_DATA: usize = 13;
const DEVICE_CLIENT_VERSION: usize = 16;

/// The `context.client` object sent with every `InnerTube` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext {
    /// Always [`CLIENT_NAME`]
    pub client_name: &'static str,
    /// Web client version advertised by the session
    pub client_version: String,
    /// Interface language
    pub hl: String,
    /// Content region
    pub gl: String,
    /// Anonymous visitor token
    pub visitor_data: String,
}

/// A resolved anonymous session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Client context for request bodies
    pub context: ClientContext,
    /// API key, when the payload carries one
    pub api_key: Option<String>,
}

impl Session {
    /// Parses the raw `sw.js_data` response body
    ///
    /// Language and region from `config` take precedence over the ones in the payload.
    ///
    /// # Errors
    ///
    /// Returns [`InnertubeError::Session`] if the body is not JSON or carries no visitor data
    pub fn from_sw_data(raw: &str, config: &InnertubeConfig) -> InnertubeResult<Self> {
        let trimmed = raw.trim_start();
        let json = trimmed.strip_prefix(XSSI_GUARD).unwrap_or(trimmed);

        let data: Value = serde_json::from_str(json)
            .map_err(|e| InnertubeError::Session(format!("invalid sw.js_data payload: {e}")))?;

        let ytcfg = &data[0][2];
        let device_info = &ytcfg[0][0];

        let visitor_data = non_empty(&device_info[DEVICE_VISITOR_DATA])
            .ok_or_else(|| InnertubeError::Session("visitor data missing from sw.js_data".into()))?;

        let client_version =
            non_empty(&device_info[DEVICE_CLIENT_VERSION]).unwrap_or(FALLBACK_CLIENT_VERSION);

        let hl = config
            .hl
            .as_deref()
            .or_else(|| non_empty(&device_info[DEVICE_HL]))
            .unwrap_or(FALLBACK_HL);

        let gl = config
            .gl
            .as_deref()
            .or_else(|| non_empty(&device_info[DEVICE_GL]))
            .unwrap_or(FALLBACK_GL);

        Ok(Self {
            context: ClientContext {
                client_name: CLIENT_NAME,
                client_version: client_version.to_string(),
                hl: hl.to_string(),
                gl: gl.to_string(),
                visitor_data: visitor_data.to_string(),
            },
            api_key: non_empty(&ytcfg[1]).map(ToString::to_string),
        })
    }
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
