use thiserror::Error;

use super::types::{SearchEnvelope, SearchPayload, SearchRequest};

/// Failures on the request path. Validation never reaches this type; these are
/// the terminal outcomes of a submission that actually went on the wire.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search backend returned {status}")]
    Backend {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the search backend. One instance is shared across handlers.
pub struct BackendClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the backend query string. `q` and `s` are always present; `k` is
    /// forwarded only when a key was provided, and the whole-word checkbox
    /// keeps its `mw=on` wire encoding.
    pub fn search_url(&self, request: &SearchRequest) -> String {
        let mut url = format!(
            "{}/search?q={}&s={}",
            self.base_url,
            urlencoding::encode(&request.query),
            request.size
        );
        if let Some(key) = &request.key {
            url.push_str("&k=");
            url.push_str(&urlencoding::encode(key));
        }
        if request.match_whole_word {
            url.push_str("&mw=on");
        }
        url
    }

    /// Issue exactly one GET for the request and normalize the payload.
    ///
    /// There are no retries and no client-side timeout; a failure is terminal
    /// for the submission and the user has to resubmit.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchEnvelope, SearchError> {
        let url = self.search_url(request);
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("backend rejected search: {} {}", status, body);
            return Err(SearchError::Backend { status, body });
        }

        let body = response.text().await?;
        let payload: SearchPayload = serde_json::from_str(&body)?;
        Ok(payload.into_envelope(request))
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    with_scheme.trim_end_matches('/').to_string()
}
