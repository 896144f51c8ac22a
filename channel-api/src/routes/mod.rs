mod channel;
mod docs;
mod health;

use aide::axum::{routing::get, ApiRouter};
use axum::handler::HandlerWithoutStateExt;

pub use channel::ChannelResponse;

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route(
            "/api/channel",
            // GET and POST are documented, every other method is served the same way
            get(channel::handler)
                .post(channel::handler)
                .fallback_service(channel::handler.into_service()),
        )
}
