//! Seams between services and the upstream API

use async_trait::async_trait;
use serde_json::Value;

use crate::{Innertube, InnertubeConfig, InnertubeResult};

/// Creates ready-to-use channel clients
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Creates and initializes a new client instance
    async fn init(&self) -> InnertubeResult<Box<dyn ChannelClient>>;
}

/// Looks up channel information
#[async_trait]
pub trait ChannelClient: Send + Sync {
    /// Returns everything the platform exposes about a channel.
    ///
    /// The shape of the value is owned by the implementation.
    async fn get_channel_details(&self, channel_id: &str) -> InnertubeResult<Value>;
}

/// Factory that opens a fresh [`Innertube`] session for every call
#[derive(Debug, Clone)]
pub struct InnertubeFactory {
    config: InnertubeConfig,
}

impl InnertubeFactory {
    /// Creates a factory for the given connection settings
    #[must_use]
    pub const fn new(config: InnertubeConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ClientFactory for InnertubeFactory {
    async fn init(&self) -> InnertubeResult<Box<dyn ChannelClient>> {
        let client = Innertube::create(&self.config).await?;
        Ok(Box::new(client))
    }
}
