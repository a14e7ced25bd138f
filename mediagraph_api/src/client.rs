//! HTTP client for the media messages catalog API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{MessageQuery, Query},
    types::{Message, MessageEnvelope, MessagesEnvelope},
    Error,
};

/// HTTP client for the media messages catalog API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout,
/// so the client itself carries no connection state.
pub struct Client {
    /// Base URL for the API. Defaults to the production catalog.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production catalog API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://media.watermark.org/api/v1".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("content-type", "application/json")
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedBody
        })?;

        Ok(parsed)
    }

    /// Fetches one page of messages. The envelope is returned as-is; the
    /// caller decides whether it holds a page or an upstream error.
    pub async fn get_messages(&self, query: &MessageQuery) -> Result<MessagesEnvelope, Error> {
        self.get::<MessagesEnvelope, MessageQuery>("/messages", Some(query))
            .await
    }

    /// Fetches a single message by its numeric ID.
    pub async fn get_message(&self, id: i64) -> Result<Message, Error> {
        let envelope = self
            .get::<MessageEnvelope, MessageQuery>(format!("/messages/{}", id).as_str(), None)
            .await?;
        if let Some(error) = envelope.error {
            return Err(Error::Upstream {
                message: error
                    .message
                    .unwrap_or_else(|| "upstream reported an error without a message".to_string()),
                code: error.code,
            });
        }
        envelope.message.ok_or(Error::Upstream {
            message: "upstream response carried no message record".to_string(),
            code: None,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
