//! Alarm API client

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::api::AlarmListResponse;
use crate::io::HttpClient;
use crate::params::ListParams;
use crate::{ApiError, Result};

/// Client for the alarm REST API
#[derive(Clone)]
pub struct AlarmApiClient {
    base: Url,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for AlarmApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlarmApiClient")
            .field("base", &self.base.as_str())
            .finish()
    }
}

impl AlarmApiClient {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Result<Self> {
        let base = Url::parse(base_url)?;
        tracing::debug!("Created AlarmApiClient for {}", base);
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Build the `/api/alarms` URL for `params`.
    ///
    /// Absent, zero and empty values are left out entirely. `severity` and
    /// `status` are repeated once per value, in the order given.
    pub fn alarms_url(&self, params: &ListParams) -> Result<Url> {
        let mut url = self.base.join("/api/alarms")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(page) = params.page.filter(|p| *p > 0) {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(page_size) = params.page_size.filter(|p| *p > 0) {
                pairs.append_pair("page_size", &page_size.to_string());
            }
            for severity in params.severity.iter().flatten().filter(|v| !v.is_empty()) {
                pairs.append_pair("severity", severity);
            }
            for status in params.status.iter().flatten().filter(|v| !v.is_empty()) {
                pairs.append_pair("status", status);
            }
            let scalars = [
                ("q", &params.q),
                ("from", &params.from),
                ("to", &params.to),
                ("ordering", &params.ordering),
            ];
            for (key, value) in scalars {
                if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                    pairs.append_pair(key, value);
                }
            }
        }
        // A query with no pairs would still leave a dangling `?`
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    /// Fetch one page of alarms as untyped JSON
    pub async fn fetch_alarms(&self, params: &ListParams) -> Result<serde_json::Value> {
        let url = self.alarms_url(params)?;
        self.get_value(url.as_str()).await
    }

    /// Fetch one page of alarms
    pub async fn list_alarms(&self, params: &ListParams) -> Result<AlarmListResponse> {
        let value = self.fetch_alarms(params).await?;
        let response: AlarmListResponse = serde_json::from_value(value)?;
        tracing::debug!(
            "Fetched {} alarms (page {}, total {})",
            response.items.len(),
            response.page,
            response.total
        );
        Ok(response)
    }

    /// GET a path relative to the API base and decode its JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base.join(path)?;
        let value = self.get_value(url.as_str()).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_value(&self, url: &str) -> Result<serde_json::Value> {
        let response = self.http.get_json(url).await?;
        if !response.is_success() {
            tracing::debug!("Non-success response from {}: status={}", url, response.status);
            return Err(ApiError::Status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
