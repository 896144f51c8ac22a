//! `InnerTube` HTTP client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::channel::{api_error_message, extract_channel_details};
use crate::provider::ChannelClient;
use crate::session::{ClientContext, Session};
use crate::{InnertubeConfig, InnertubeError, InnertubeResult};

#[derive(Serialize)]
struct RequestContext<'a> {
    client: &'a ClientContext,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseRequest<'a> {
    context: RequestContext<'a>,
    browse_id: &'a str,
}

/// An initialized `InnerTube` session bound to one HTTP client
#[derive(Debug, Clone)]
pub struct Innertube {
    http: Client,
    base_url: String,
    session: Session,
}

impl Innertube {
    /// Builds an HTTP client and resolves an anonymous session
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built, `sw.js_data` cannot be fetched,
    /// or its payload carries no visitor data
    pub async fn create(config: &InnertubeConfig) -> InnertubeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("channel-api/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InnertubeError::HttpClient(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        let response = http.get(format!("{base_url}/sw.js_data")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InnertubeError::Session(format!(
                "sw.js_data request failed with status {status}"
            )));
        }

        let raw = response.text().await?;
        let session = Session::from_sw_data(&raw, config)?;

        debug!(
            client_version = %session.context.client_version,
            hl = %session.context.hl,
            gl = %session.context.gl,
            "Resolved InnerTube session"
        );

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// The session this client sends with every request
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Calls the `browse` endpoint and returns the raw response body
    ///
    /// # Errors
    ///
    /// Returns [`InnertubeError::ChannelNotFound`] when upstream answers 400 or 404,
    /// [`InnertubeError::Api`] for other error statuses, and
    /// [`InnertubeError::InvalidResponse`] when a successful response is not JSON
    pub async fn browse(&self, browse_id: &str) -> InnertubeResult<Value> {
        let body = BrowseRequest {
            context: RequestContext {
                client: &self.session.context,
            },
            browse_id,
        };

        let mut request = self
            .http
            .post(format!("{}/youtubei/v1/browse", self.base_url))
            .query(&[("prettyPrint", "false")])
            .header("X-Goog-Visitor-Id", &self.session.context.visitor_data)
            .json(&body);

        if let Some(api_key) = &self.session.api_key {
            request = request.query(&[("key", api_key)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            if matches!(status, StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND) {
                return Err(InnertubeError::ChannelNotFound(browse_id.to_string()));
            }

            let message = parsed
                .ok()
                .as_ref()
                .and_then(api_error_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());

            return Err(InnertubeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parsed.map_err(|e| InnertubeError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ChannelClient for Innertube {
    async fn get_channel_details(&self, channel_id: &str) -> InnertubeResult<Value> {
        let response = self.browse(channel_id).await?;
        extract_channel_details(channel_id, &response)
    }
}
