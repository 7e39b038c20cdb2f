//! HTTP adapter for the spreadsheet-backed screener API.
//!
//! The backend is a single endpoint dispatching on `?action=` with an
//! optional `password` query parameter. Responses are plain JSON; an
//! application-level failure comes back as `{"error": "...", "code": n}`
//! with HTTP 200, so both layers are checked.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_source::{
    MonitorSnapshot, ScreenMetadata, ScreenerSnapshot, SnapshotSource,
};

pub struct HttpSnapshotSource {
    client: Client,
    base_url: String,
    password: Option<String>,
}

impl HttpSnapshotSource {
    pub fn new(base_url: String, password: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            password,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, action: &str) -> Result<T, DomainError> {
        let mut query: Vec<(&str, &str)> = vec![("action", action)];
        if let Some(password) = &self.password {
            query.push(("password", password));
        }

        let resp = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| DomainError::Api(format!("Request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Api(format!("{status}: {body}")));
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Invalid JSON from backend: {e}")))?;

        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return Err(DomainError::Api(message.to_string()));
        }

        serde_json::from_value(value)
            .map_err(|e| DomainError::Parse(format!("Unexpected {action} payload: {e}")))
    }
}

#[async_trait::async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn screener(&self) -> Result<ScreenerSnapshot, DomainError> {
        self.fetch("screener").await
    }

    async fn monitor(&self) -> Result<MonitorSnapshot, DomainError> {
        self.fetch("monitor").await
    }

    async fn metadata(&self) -> Result<ScreenMetadata, DomainError> {
        self.fetch("metadata").await
    }
}
