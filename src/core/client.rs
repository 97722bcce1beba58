use crate::core::{AstroSource, ConfigProvider, UpstreamPayload};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_UPSTREAM_URL: &str = "http://api.open-notify.org/astros.json";

/// Fetches `astros.json` from the configured endpoint. One attempt per call.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ServiceError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            url: config.upstream_url().to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AstroSource for UpstreamClient {
    async fn fetch(&self) -> Result<UpstreamPayload> {
        tracing::debug!("Making upstream request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("Upstream response status: {}", response.status());
        let payload = response.error_for_status()?.json::<UpstreamPayload>().await?;

        tracing::debug!("Upstream reported {} people", payload.number);
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_parses_payload() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/astros.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "message": "success",
                    "number": 1,
                    "people": [{"craft": "ISS", "name": "Sunita Williams"}]
                }));
        });

        let client = UpstreamClient::new(server.url("/astros.json"));
        let payload = client.fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(payload.number, 1);
        assert_eq!(payload.people[0].name, "Sunita Williams");
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/astros.json");
            then.status(503);
        });

        let client = UpstreamClient::new(server.url("/astros.json"));
        let err = client.fetch().await.unwrap_err();

        api_mock.assert();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_upstream_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/astros.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"message": "success", "number": 1}));
        });

        let client = UpstreamClient::new(server.url("/astros.json"));
        let err = client.fetch().await.unwrap_err();

        assert!(err.is_upstream());
    }
}
