// src/catalogue/fetch.rs
// =============================================================================
// Downloads catalogue pages.
//
// Page n lives at <catalogue>/page-<n>.html. One reqwest Client is created
// per run and reused for every page (connection pooling). There is no retry:
// any network error or non-2xx answer is returned to the caller as-is.
// =============================================================================

use reqwest::header::USER_AGENT;
use reqwest::Client;
use url::Url;

use crate::config;
use crate::error::FetchError;

pub struct PageFetcher {
    client: Client,
    catalogue_url: Url,
}

impl PageFetcher {
    pub fn new(catalogue_url: Url) -> Result<Self, reqwest::Error> {
        // No explicit timeout: the crawl waits as long as the client's
        // default allows.
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            catalogue_url,
        })
    }

    /// Directory that listing pages and item links are relative to.
    pub fn catalogue_url(&self) -> &Url {
        &self.catalogue_url
    }

    // Deterministic: same index, same URL.
    pub fn page_url(&self, index: usize) -> Result<Url, FetchError> {
        self.catalogue_url
            .join(&format!("page-{}.html", index))
            .map_err(|source| FetchError::InvalidPageUrl { index, source })
    }

    /// Fetches listing page `index` (1-based) and returns its HTML.
    pub async fn fetch_page(&self, index: usize) -> Result<String, FetchError> {
        let url = self.page_url(index)?;

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, config::USER_AGENT)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
