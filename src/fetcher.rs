use crate::config::{FetchConfig, HeaderProfile};
use crate::error::AnalysisError;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};
use std::time::Duration;
use url::Url;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const BROWSER_REFERER: &str = "https://www.google.com/";

/// Fetches a single page with the configured header profile.
///
/// The underlying client is cheap to clone and is reused across calls; each
/// `fetch` issues exactly one GET with no retries.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .default_headers(profile_headers(config.profile))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AnalysisError::Client)?;

        Ok(Self { client })
    }

    /// GET the page and return its body, mapping non-success statuses to errors
    pub async fn fetch(&self, url: &Url) -> Result<String, AnalysisError> {
        let start = std::time::Instant::now();
        ::log::debug!("FETCH: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                ::log::warn!("Request to {} failed: {}", url, e);
                AnalysisError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} responded with {}", url, status);
            return Err(AnalysisError::from_status(status));
        }

        let body = response.text().await.map_err(AnalysisError::Network)?;

        ::log::debug!(
            "Fetched {} bytes from {} in {:.2} seconds",
            body.len(),
            url,
            start.elapsed().as_secs_f64()
        );

        Ok(body)
    }
}

/// Extra headers sent on top of the User-Agent
fn profile_headers(profile: HeaderProfile) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if profile == HeaderProfile::Browser {
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        headers.insert(REFERER, HeaderValue::from_static(BROWSER_REFERER));
    }
    headers
}
