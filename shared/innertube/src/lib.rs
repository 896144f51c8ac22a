//! YouTube `InnerTube` client
//!
//! This crate resolves an anonymous `InnerTube` session and fetches channel details
//! through the `browse` endpoint. Services depend on the [`ClientFactory`] and
//! [`ChannelClient`] traits so the upstream API can be swapped out in tests.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

mod channel;
mod client;
mod config;
mod error;
mod provider;
mod session;

pub use client::Innertube;
pub use config::InnertubeConfig;
pub use error::{InnertubeError, InnertubeResult};
pub use provider::{ChannelClient, ClientFactory, InnertubeFactory};
pub use session::{ClientContext, Session};
