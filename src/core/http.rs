//! HTTP utilities for FPL API communication

use std::time::Duration;

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

const USER_AGENT: &str = concat!("fpl-hub/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every upstream request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared upstream client with an explicit per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_header_map())
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()?;
    Ok(client)
}
