//! Channel API service
//!
//! Exposes YouTube channel details over HTTP as JSON.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod routes;
pub mod server;
pub mod types;
