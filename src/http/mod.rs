//! HTTP client module
//!
//! Provides the single-attempt HTTP client shared by the feed loader and
//! the vote widget.
//!
//! # Features
//!
//! - **Base URL joining**: relative endpoint paths resolve against the server origin
//! - **Timeouts**: every request is bounded, overridable per request
//! - **Status classification**: 4xx/5xx responses surface as `Error::HttpStatus`

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, REQUESTED_WITH_HEADER,
    XML_HTTP_REQUEST,
};

#[cfg(test)]
mod tests;
