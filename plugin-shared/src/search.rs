//! Search plugin contract: conditions, content records, results, and the
//! traits a search provider and a sidebar plugin implement.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SidebarConfig;
use crate::errors::PluginError;

/// Acceptance constraint on a search condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcceptedCond {
    /// No constraint.
    #[default]
    Any,
    /// Only accepted content.
    Accepted,
    /// Only content without an accepted answer.
    NotAccepted,
}

/// Search condition supplied by the host.
///
/// Numeric thresholds use `-1` as the "unset" sentinel; `0` is a real
/// value with per-field meaning (see the provider's filter construction).
#[derive(Debug, Clone)]
pub struct SearchCondition {
    /// Free-text query words.
    pub words: Vec<String>,
    /// Tag groups; each inner group is a disjunction, groups are conjoined.
    pub tag_ids: Vec<Vec<String>>,
    /// Restrict to content authored by this user; empty means no constraint.
    pub user_id: String,
    /// Sort order token: "newest", "active", "score", or empty for relevance.
    pub order: String,
    /// Minimum vote count; `0` means exactly zero votes, `-1` unset.
    pub vote_amount: i32,
    /// Minimum view count; `-1` unset.
    pub view_amount: i32,
    /// Minimum answer count; `0` means exactly zero answers, `-1` unset.
    pub answer_amount: i32,
    /// Acceptance constraint for question searches.
    pub question_accepted: AcceptedCond,
    /// Acceptance constraint for answer searches.
    pub answer_accepted: AcceptedCond,
    /// Restrict answers to one parent question; empty means no constraint.
    pub question_id: String,
    /// One-based page number.
    pub page: i32,
    /// Page size.
    pub page_size: i32,
}

impl Default for SearchCondition {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            tag_ids: Vec::new(),
            user_id: String::new(),
            order: String::new(),
            vote_amount: -1,
            view_amount: -1,
            answer_amount: -1,
            question_accepted: AcceptedCond::Any,
            answer_accepted: AcceptedCond::Any,
            question_id: String::new(),
            page: 1,
            page_size: 20,
        }
    }
}

/// Content record the host mirrors into the search index.
///
/// Serialized field names follow the external index schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchContent {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub content: String,
    pub answers: i64,
    pub status: i64,
    pub tags: Vec<String>,
    #[serde(rename = "questionID")]
    pub question_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub votes: i64,
    pub views: i64,
    pub created: i64,
    pub active: i64,
    pub score: i64,
    #[serde(rename = "hasAccepted")]
    pub has_accepted: bool,
}

/// A single search hit returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// External object identifier.
    pub id: String,
    /// Content type of the hit.
    #[serde(rename = "type")]
    pub result_type: String,
}

/// One page of search hits plus the service-reported total.
#[derive(Debug, Clone, Default)]
pub struct SearchResponse {
    /// Hits for the requested page, in service order.
    pub results: Vec<SearchResult>,
    /// Total hit count across all pages.
    pub total: i64,
}

/// Branding shown next to search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDesc {
    /// Provider icon, as a data URL; empty to hide.
    pub icon: String,
    /// Provider link; empty to hide.
    pub link: String,
}

/// Host-provided trigger requesting a full re-index of platform content.
#[async_trait]
pub trait SearchSyncer: Send + Sync {
    /// Ask the host to re-feed every content record through the plugin.
    async fn trigger_full_sync(&self) -> Result<(), PluginError>;
}

/// A search provider the host delegates search and index mirroring to.
#[async_trait]
pub trait SearchPlugin: Send + Sync {
    /// Plugin metadata for the host listing.
    fn info(&self) -> crate::info::PluginInfo;

    /// Branding shown next to search results.
    fn description(&self) -> SearchDesc;

    /// Called once at startup with the host's syncer handle. The plugin
    /// performs its one-time index configuration and requests an initial
    /// full sync.
    async fn register_syncer(&self, syncer: Arc<dyn SearchSyncer>) -> Result<(), PluginError>;

    /// Search across all content types.
    async fn search_contents(&self, cond: &SearchCondition)
        -> Result<SearchResponse, PluginError>;

    /// Search questions only.
    async fn search_questions(
        &self,
        cond: &SearchCondition,
    ) -> Result<SearchResponse, PluginError>;

    /// Search answers only.
    async fn search_answers(&self, cond: &SearchCondition) -> Result<SearchResponse, PluginError>;

    /// Mirror a created or updated content record into the index.
    async fn update_content(&self, content: &SearchContent) -> Result<(), PluginError>;

    /// Remove a content record from the index.
    async fn delete_content(&self, content_id: &str) -> Result<(), PluginError>;
}

/// A plugin contributing a sidebar widget.
pub trait SidebarPlugin: Send + Sync {
    /// Plugin metadata for the host listing.
    fn info(&self) -> crate::info::PluginInfo;

    /// Current sidebar configuration.
    fn sidebar_config(&self) -> Result<SidebarConfig, PluginError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_default_sentinels() {
        let cond = SearchCondition::default();
        assert_eq!(cond.vote_amount, -1);
        assert_eq!(cond.view_amount, -1);
        assert_eq!(cond.answer_amount, -1);
        assert_eq!(cond.page, 1);
        assert_eq!(cond.question_accepted, AcceptedCond::Any);
    }

    #[test]
    fn test_content_serializes_external_field_names() {
        let content = SearchContent {
            object_id: "q1".to_string(),
            title: "Title".to_string(),
            content_type: "question".to_string(),
            question_id: "q0".to_string(),
            user_id: "u1".to_string(),
            has_accepted: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["objectID"], "q1");
        assert_eq!(json["type"], "question");
        assert_eq!(json["questionID"], "q0");
        assert_eq!(json["userID"], "u1");
        assert_eq!(json["hasAccepted"], true);
    }

    #[test]
    fn test_result_serializes_type_key() {
        let result = SearchResult {
            id: "a1".to_string(),
            result_type: "question".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "a1");
        assert_eq!(json["type"], "question");
    }
}
