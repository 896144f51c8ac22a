use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use innertube::{ChannelClient, ClientFactory, InnertubeError, InnertubeResult};
use serde_json::Value;

/// Calls observed by a [`FakeClientFactory`], in order
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Scripted stand-in for the YouTube client
#[derive(Clone, Default)]
pub struct FakeClientFactory {
    init_error: Option<String>,
    init_delay: Option<Duration>,
    lookup: Option<Result<Value, String>>,
    calls: CallLog,
}

impl FakeClientFactory {
    /// Initialization fails with `message`
    pub fn failing_init(message: &str) -> Self {
        Self {
            init_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Lookups resolve to `data`
    pub fn returning(data: Value) -> Self {
        Self {
            lookup: Some(Ok(data)),
            ..Self::default()
        }
    }

    /// Initialization takes `delay`, then lookups resolve to `data`
    pub fn slow_init(delay: Duration, data: Value) -> Self {
        Self {
            init_delay: Some(delay),
            ..Self::returning(data)
        }
    }

    /// Lookups fail with `message`
    pub fn failing_lookup(message: &str) -> Self {
        Self {
            lookup: Some(Err(message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientFactory for FakeClientFactory {
    async fn init(&self) -> InnertubeResult<Box<dyn ChannelClient>> {
        self.calls.lock().unwrap().push("init".to_string());

        if let Some(delay) = self.init_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.init_error {
            return Err(InnertubeError::Other(message.clone()));
        }

        Ok(Box::new(FakeChannelClient {
            lookup: self.lookup.clone(),
            calls: self.calls.clone(),
        }))
    }
}

struct FakeChannelClient {
    lookup: Option<Result<Value, String>>,
    calls: CallLog,
}

#[async_trait]
impl ChannelClient for FakeChannelClient {
    async fn get_channel_details(&self, channel_id: &str) -> InnertubeResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("lookup:{channel_id}"));

        match &self.lookup {
            Some(Ok(data)) => Ok(data.clone()),
            Some(Err(message)) => Err(InnertubeError::Other(message.clone())),
            None => Err(InnertubeError::ChannelNotFound(channel_id.to_string())),
        }
    }
}
