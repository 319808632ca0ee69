//! One-time index settings bootstrap.
//!
//! Triggered by syncer registration: the base index gets the fixed
//! settings template with the three virtual replica references injected,
//! forwarded to replicas, then each replica gets its own custom-ranking
//! list. Calls run sequentially with no rollback; a failure aborts the
//! remainder and leaves ranking configuration inconsistent until the
//! bootstrap is re-invoked.

use tracing::info;

use crate::engine::{IndexSettings, SearchEngine};
use crate::errors::EngineError;
use crate::index_name::{self, ACTIVE, NEWEST, SCORE};

/// Settings template for the base index.
pub(crate) const SETTINGS_TEMPLATE: &str = r#"{
    "searchableAttributes": [
        "title",
        "content",
        "tags"
    ],
    "attributesForFaceting": [
        "filterOnly(status)",
        "filterOnly(type)",
        "filterOnly(tags)",
        "filterOnly(userID)",
        "filterOnly(questionID)",
        "filterOnly(hasAccepted)"
    ],
    "customRanking": [
        "desc(score)",
        "desc(active)"
    ]
}"#;

/// Per-replica custom ranking, tie-broken by content and then title.
fn replica_ranking(lead_attribute: &str) -> Vec<String> {
    vec![
        format!("desc({lead_attribute})"),
        "desc(content)".to_string(),
        "desc(title)".to_string(),
    ]
}

/// Push base-index settings and configure the three sort-order replicas.
pub async fn bootstrap(engine: &dyn SearchEngine, base_index: &str) -> Result<(), EngineError> {
    let mut settings: IndexSettings = serde_json::from_str(SETTINGS_TEMPLATE)?;

    // Point the virtual replicas at the sort-order index names.
    settings.replicas = Some(vec![
        format!("virtual({})", index_name::resolve(base_index, NEWEST)),
        format!("virtual({})", index_name::resolve(base_index, ACTIVE)),
        format!("virtual({})", index_name::resolve(base_index, SCORE)),
    ]);

    engine.set_settings(base_index, &settings, true).await?;

    for (token, lead) in [(NEWEST, "created"), (ACTIVE, "active"), (SCORE, "score")] {
        let replica = IndexSettings::custom_ranking_only(replica_ranking(lead));
        engine
            .set_settings(&index_name::resolve(base_index, token), &replica, false)
            .await?;
    }

    info!(index = %base_index, "Index settings bootstrapped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{QueryParams, QueryResponse};
    use async_trait::async_trait;
    use serde_json::{Map, Value};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock engine recording settings calls.
    struct RecordingEngine {
        settings_calls: Arc<Mutex<Vec<(String, IndexSettings, bool)>>>,
        fail_on_call: Option<usize>,
    }

    impl RecordingEngine {
        fn new() -> Self {
            Self {
                settings_calls: Arc::new(Mutex::new(Vec::new())),
                fail_on_call: None,
            }
        }

        fn failing_on(call: usize) -> Self {
            Self {
                settings_calls: Arc::new(Mutex::new(Vec::new())),
                fail_on_call: Some(call),
            }
        }
    }

    #[async_trait]
    impl SearchEngine for RecordingEngine {
        async fn query(
            &self,
            _index: &str,
            _params: &QueryParams,
        ) -> Result<QueryResponse, EngineError> {
            Ok(QueryResponse::default())
        }

        async fn save_object(
            &self,
            _index: &str,
            _object_id: &str,
            _object: &Map<String, Value>,
        ) -> Result<(), EngineError> {
            Ok(())
        }

        async fn delete_object(&self, _index: &str, _object_id: &str) -> Result<(), EngineError> {
            Ok(())
        }

        async fn set_settings(
            &self,
            index: &str,
            settings: &IndexSettings,
            forward_to_replicas: bool,
        ) -> Result<(), EngineError> {
            let mut calls = self.settings_calls.lock().await;
            if self.fail_on_call == Some(calls.len()) {
                return Err(EngineError::settings("Mock failure"));
            }
            calls.push((index.to_string(), settings.clone(), forward_to_replicas));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_bootstrap_pushes_base_then_three_replicas() {
        let engine = RecordingEngine::new();
        let calls = engine.settings_calls.clone();

        bootstrap(&engine, "questions").await.unwrap();

        let calls = calls.lock().await;
        assert_eq!(calls.len(), 4);

        let (index, settings, forward) = &calls[0];
        assert_eq!(index, "questions");
        assert!(*forward);
        assert_eq!(
            settings.replicas.clone().unwrap(),
            vec![
                "virtual(questions_newest)".to_string(),
                "virtual(questions_active)".to_string(),
                "virtual(questions_score)".to_string(),
            ]
        );
        assert!(settings.searchable_attributes.is_some());
    }

    #[tokio::test]
    async fn test_replica_rankings_lead_with_sort_attribute() {
        let engine = RecordingEngine::new();
        let calls = engine.settings_calls.clone();

        bootstrap(&engine, "q").await.unwrap();

        let calls = calls.lock().await;
        let expectations = [
            ("q_newest", "desc(created)"),
            ("q_active", "desc(active)"),
            ("q_score", "desc(score)"),
        ];
        for (i, (index, lead)) in expectations.iter().enumerate() {
            let (call_index, settings, forward) = &calls[i + 1];
            assert_eq!(call_index, index);
            assert!(!*forward);
            let ranking = settings.custom_ranking.as_deref().unwrap();
            assert_eq!(ranking[0], *lead);
            assert_eq!(ranking[1], "desc(content)");
            assert_eq!(ranking[2], "desc(title)");
        }
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_replica_calls() {
        // Second call (first replica) fails; later replicas are skipped.
        let engine = RecordingEngine::failing_on(1);
        let calls = engine.settings_calls.clone();

        let result = bootstrap(&engine, "q").await;
        assert!(matches!(result, Err(EngineError::SettingsError(_))));
        assert_eq!(calls.lock().await.len(), 1);
    }

    #[test]
    fn test_template_parses() {
        let settings: IndexSettings = serde_json::from_str(SETTINGS_TEMPLATE).unwrap();
        assert!(settings.searchable_attributes.is_some());
        assert!(settings.attributes_for_faceting.is_some());
        assert!(settings.replicas.is_none());
    }
}
