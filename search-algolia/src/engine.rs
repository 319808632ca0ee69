//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the hosted search
//! service, allowing the concrete REST client to be swapped for a mock
//! in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::EngineError;

/// Parameters for one paginated index query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Free-text query; empty matches everything the filters allow.
    pub query: String,
    /// Filter string in the service's filter grammar.
    pub filters: String,
    /// Zero-based page index.
    pub page: i32,
    /// Hits per page.
    pub hits_per_page: i32,
    /// Attributes to retrieve per hit.
    pub attributes_to_retrieve: Vec<String>,
}

/// A single hit in a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryHit {
    /// External object identifier.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Content type stored with the object, if retrieved.
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
}

/// Response to one paginated index query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    /// Hits for the requested page.
    #[serde(default)]
    pub hits: Vec<QueryHit>,
    /// Total hit count across all pages.
    #[serde(rename = "nbHits", default)]
    pub nb_hits: i64,
}

/// Index settings pushed to the service.
///
/// Only fields this plugin manages are modeled; unset fields are omitted
/// from the settings call so the service keeps its current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_for_faceting: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_ranking: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<Vec<String>>,
}

impl IndexSettings {
    /// Settings carrying only a custom-ranking list, for replica setup.
    pub fn custom_ranking_only(ranking: Vec<String>) -> Self {
        Self {
            custom_ranking: Some(ranking),
            ..Default::default()
        }
    }
}

/// Abstract interface to the hosted search service.
///
/// All implementations must be `Send + Sync` to allow use across async
/// tasks, and all methods return `Result<T, EngineError>`.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Execute one paginated query against an index.
    async fn query(&self, index: &str, params: &QueryParams)
        -> Result<QueryResponse, EngineError>;

    /// Upsert an object by ID into an index.
    async fn save_object(
        &self,
        index: &str,
        object_id: &str,
        object: &Map<String, Value>,
    ) -> Result<(), EngineError>;

    /// Delete an object by ID from an index.
    async fn delete_object(&self, index: &str, object_id: &str) -> Result<(), EngineError>;

    /// Push index settings, optionally forwarding them to replicas.
    async fn set_settings(
        &self,
        index: &str,
        settings: &IndexSettings,
        forward_to_replicas: bool,
    ) -> Result<(), EngineError>;
}
