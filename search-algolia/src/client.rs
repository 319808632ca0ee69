//! Algolia REST client implementation.
//!
//! This module provides the concrete implementation of `SearchEngine`
//! over the Algolia HTTP API. Queries go to the DSN search host; writes
//! and settings go to the primary application host. Requests carry the
//! application ID and API key headers and rely on the HTTP client's
//! default timeouts; no retry is performed here.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::engine::{IndexSettings, QueryParams, QueryResponse, SearchEngine};
use crate::errors::EngineError;

const APP_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// HTTP client for the Algolia application the plugin is configured with.
pub struct AlgoliaClient {
    http: reqwest::Client,
    app_id: String,
    api_key: String,
    search_host: Url,
    write_host: Url,
}

impl AlgoliaClient {
    /// Create a client for the given application credentials.
    pub fn new(app_id: &str, api_key: &str) -> Result<Self, EngineError> {
        let search_host = Url::parse(&format!("https://{}-dsn.algolia.net", app_id.to_lowercase()))
            .map_err(|e| EngineError::connection(e.to_string()))?;
        let write_host = Url::parse(&format!("https://{}.algolia.net", app_id.to_lowercase()))
            .map_err(|e| EngineError::connection(e.to_string()))?;

        info!(app_id = %app_id, "Created Algolia client");

        Ok(Self {
            http: reqwest::Client::new(),
            app_id: app_id.to_string(),
            api_key: api_key.to_string(),
            search_host,
            write_host,
        })
    }

    /// Build a request with the authentication headers applied.
    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header(APP_ID_HEADER, &self.app_id)
            .header(API_KEY_HEADER, &self.api_key)
    }

    /// Path of the query endpoint for an index.
    fn query_path(index: &str) -> String {
        format!("/1/indexes/{index}/query")
    }

    /// Path of a single object within an index.
    fn object_path(index: &str, object_id: &str) -> String {
        format!("/1/indexes/{index}/{object_id}")
    }

    /// Path of the settings endpoint for an index.
    fn settings_path(index: &str) -> String {
        format!("/1/indexes/{index}/settings")
    }

    fn join(host: &Url, path: &str) -> Result<Url, EngineError> {
        host.join(path)
            .map_err(|e| EngineError::connection(e.to_string()))
    }

    /// Surface a non-success response as an error for the given operation.
    async fn check_status(
        response: reqwest::Response,
        make_err: fn(String) -> EngineError,
        operation: &str,
    ) -> Result<reqwest::Response, EngineError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "{operation} request failed");
            return Err(make_err(format!(
                "{operation} failed with status {status}: {body}"
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl SearchEngine for AlgoliaClient {
    async fn query(
        &self,
        index: &str,
        params: &QueryParams,
    ) -> Result<QueryResponse, EngineError> {
        let url = Self::join(&self.search_host, &Self::query_path(index))?;

        let response = self
            .request(reqwest::Method::POST, url)
            .json(params)
            .send()
            .await
            .map_err(|e| EngineError::query(e.to_string()))?;
        let response = Self::check_status(response, EngineError::QueryError, "Query").await?;

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| EngineError::query(e.to_string()))?;

        debug!(index = %index, hits = parsed.hits.len(), total = parsed.nb_hits, "Query executed");
        Ok(parsed)
    }

    async fn save_object(
        &self,
        index: &str,
        object_id: &str,
        object: &Map<String, Value>,
    ) -> Result<(), EngineError> {
        let url = Self::join(&self.write_host, &Self::object_path(index, object_id))?;

        let response = self
            .request(reqwest::Method::PUT, url)
            .json(object)
            .send()
            .await
            .map_err(|e| EngineError::save(e.to_string()))?;
        Self::check_status(response, EngineError::SaveError, "Save").await?;

        debug!(index = %index, object_id = %object_id, "Object saved");
        Ok(())
    }

    async fn delete_object(&self, index: &str, object_id: &str) -> Result<(), EngineError> {
        let url = Self::join(&self.write_host, &Self::object_path(index, object_id))?;

        let response = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .map_err(|e| EngineError::delete(e.to_string()))?;
        Self::check_status(response, EngineError::DeleteError, "Delete").await?;

        debug!(index = %index, object_id = %object_id, "Object deleted");
        Ok(())
    }

    async fn set_settings(
        &self,
        index: &str,
        settings: &IndexSettings,
        forward_to_replicas: bool,
    ) -> Result<(), EngineError> {
        let mut url = Self::join(&self.write_host, &Self::settings_path(index))?;
        if forward_to_replicas {
            url.query_pairs_mut()
                .append_pair("forwardToReplicas", "true");
        }

        let response = self
            .request(reqwest::Method::PUT, url)
            .json(settings)
            .send()
            .await
            .map_err(|e| EngineError::settings(e.to_string()))?;
        Self::check_status(response, EngineError::SettingsError, "Settings").await?;

        debug!(index = %index, forward_to_replicas, "Settings pushed");
        Ok(())
    }
}
