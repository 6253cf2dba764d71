//! Core utilities for the FPL league hub
//!
//! - `http`: shared upstream client construction

pub mod http;

pub use http::{build_client, default_header_map};
