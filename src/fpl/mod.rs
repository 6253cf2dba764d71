//! Fantasy Premier League upstream access: HTTP client, payload types and
//! the reshaping applied by passthrough routes.

pub mod compute;
pub mod http;
pub mod types;

pub use http::FplClient;
