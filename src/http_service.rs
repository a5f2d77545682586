use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;

use crate::config::HeaderConfig;
use crate::error::ApiError;
use crate::translate::interface::{TranslatePayload, TranslateTransport};

/// reqwest-backed transport. The inner client keeps its connection pool
/// for the lifetime of the transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(headers: &HeaderConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(default_headers(headers)?)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

fn default_headers(headers: &HeaderConfig) -> Result<HeaderMap, ApiError> {
    let pairs: [(HeaderName, &str); 5] = [
        (USER_AGENT, headers.user_agent.as_str()),
        (CONTENT_TYPE, headers.content_type.as_str()),
        (ACCEPT, headers.accept.as_str()),
        (ORIGIN, headers.origin.as_str()),
        (REFERER, headers.referer.as_str()),
    ];

    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::Client(format!("invalid {} header: {}", name, e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait]
impl TranslateTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &TranslatePayload<'_>,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        let result: serde_json::Value = response.json().await?;
        Ok(result)
    }
}
