//! Page sources
//!
//! A [`PageSource`] answers "give me page N". The loader only sees this
//! trait, so its state machine can be driven without a network.

use super::types::PageResponse;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{
    HttpClient, HttpClientConfig, RequestConfig, REQUESTED_WITH_HEADER, XML_HTTP_REQUEST,
};
use async_trait::async_trait;
use tracing::debug;

/// Fetches one page of feed content
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the given page
    async fn fetch_page(&self, page: u32) -> Result<PageResponse>;
}

/// Fetches pages from the feed URL with `?<page_param>=<n>`
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: HttpClient,
    url: String,
    page_param: String,
}

impl HttpPageSource {
    /// Create a source for an explicit URL
    pub fn new(client: HttpClient, url: impl Into<String>, page_param: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            page_param: page_param.into(),
        }
    }

    /// Create a source from the client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::from_client_config(config))?;
        Ok(Self::new(
            client,
            config.feed_url()?.to_string(),
            config.page_param.clone(),
        ))
    }

    /// URL pages are requested from
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        debug!("Fetching page {} from {}", page, self.url);
        let request = RequestConfig::new()
            .query(&self.page_param, page.to_string())
            .header(REQUESTED_WITH_HEADER, XML_HTTP_REQUEST);
        self.client.get_json_with_config(&self.url, request).await
    }
}
