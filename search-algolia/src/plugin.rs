//! The Algolia search plugin registered with the host.
//!
//! Holds the lazily-created engine handle (constructed exactly once even
//! under concurrent first use) and translates host calls into engine
//! calls. Engine errors propagate to the host verbatim; nothing here
//! retries or compensates.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::OnceCell;
use tracing::{error, info};

use plugin_shared::{
    ConfigField, ConfigFieldType, ConfigFieldUiOptions, ConfigPlugin, PluginError, PluginInfo,
    SearchCondition, SearchContent, SearchDesc, SearchPlugin, SearchResponse, SearchResult,
    SearchSyncer,
};

use crate::client::AlgoliaClient;
use crate::config::AlgoliaConfig;
use crate::engine::{QueryParams, SearchEngine};
use crate::filter;
use crate::index_name;
use crate::settings;

const SLUG_NAME: &str = "algolia_search";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const LINK: &str = "https://www.algolia.com/";

const ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIvPg==";

/// Attributes retrieved per hit; result mapping needs nothing else.
const RETRIEVED_ATTRIBUTES: [&str; 2] = ["objectID", "type"];

/// Algolia-backed implementation of the host's search plugin contract.
pub struct AlgoliaSearch {
    config: RwLock<AlgoliaConfig>,
    engine: OnceCell<Arc<dyn SearchEngine>>,
    syncer: RwLock<Option<Arc<dyn SearchSyncer>>>,
}

impl Default for AlgoliaSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgoliaSearch {
    /// Create the plugin with empty configuration; the host supplies
    /// credentials through the config receiver before first use.
    pub fn new() -> Self {
        Self {
            config: RwLock::new(AlgoliaConfig::default()),
            engine: OnceCell::new(),
            syncer: RwLock::new(None),
        }
    }

    /// Create the plugin with a pre-built engine, bypassing the lazy
    /// connection. Used for dependency injection in tests.
    pub fn with_engine(engine: Arc<dyn SearchEngine>, config: AlgoliaConfig) -> Self {
        Self {
            config: RwLock::new(config),
            engine: OnceCell::new_with(Some(engine)),
            syncer: RwLock::new(None),
        }
    }

    /// Snapshot of the current configuration.
    fn config(&self) -> AlgoliaConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The engine handle, constructed exactly once under concurrent
    /// first use and reused for the process lifetime.
    async fn engine(&self) -> Result<&Arc<dyn SearchEngine>, PluginError> {
        self.engine
            .get_or_try_init(|| async {
                let config = self.config();
                match AlgoliaClient::new(&config.app_id, &config.api_key) {
                    Ok(client) => {
                        info!("algolia: connected");
                        Ok(Arc::new(client) as Arc<dyn SearchEngine>)
                    }
                    Err(e) => {
                        error!(error = %e, "algolia: connect error");
                        Err(PluginError::from(e))
                    }
                }
            })
            .await
    }

    /// Execute one paginated query and adapt hits to the host's result
    /// shape. Hits are reported with type "question" on every path,
    /// including answers; that value is part of the established result
    /// contract and is pinned by a test.
    async fn run_query(
        &self,
        cond: &SearchCondition,
        filters: String,
    ) -> Result<SearchResponse, PluginError> {
        let engine = self.engine().await?;
        let index = index_name::resolve(&self.config().index, &cond.order);

        let params = QueryParams {
            query: filter::query_text(&cond.words),
            filters,
            // Host pages are one-based, the service's are zero-based.
            page: cond.page - 1,
            hits_per_page: cond.page_size,
            attributes_to_retrieve: RETRIEVED_ATTRIBUTES.map(String::from).to_vec(),
        };

        let response = engine.query(&index, &params).await.map_err(PluginError::from)?;

        Ok(SearchResponse {
            results: response
                .hits
                .into_iter()
                .map(|hit| SearchResult {
                    id: hit.object_id,
                    result_type: "question".to_string(),
                })
                .collect(),
            total: response.nb_hits,
        })
    }
}

/// Convert a content record to the object map sent to the index.
///
/// The conversion happens once at this boundary; the engine owns the
/// schema from here on.
fn to_document(content: &SearchContent) -> Result<Map<String, Value>, PluginError> {
    match serde_json::to_value(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(PluginError::serialization(
            "content record did not serialize to an object",
        )),
    }
}

#[async_trait]
impl SearchPlugin for AlgoliaSearch {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            slug_name: SLUG_NAME.to_string(),
            name: "Algolia Search".to_string(),
            description: "Third-party hosted search powered by Algolia".to_string(),
            author: "answer-plugins".to_string(),
            version: VERSION.to_string(),
            link: LINK.to_string(),
        }
    }

    fn description(&self) -> SearchDesc {
        let mut desc = SearchDesc::default();
        if self.config().show_logo {
            desc.icon = ICON.to_string();
            desc.link = LINK.to_string();
        }
        desc
    }

    async fn register_syncer(&self, syncer: Arc<dyn SearchSyncer>) -> Result<(), PluginError> {
        *self
            .syncer
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(syncer.clone());

        let engine = self.engine().await?;
        let base_index = self.config().index;
        settings::bootstrap(engine.as_ref(), &base_index)
            .await
            .map_err(PluginError::from)?;

        syncer.trigger_full_sync().await
    }

    async fn search_contents(
        &self,
        cond: &SearchCondition,
    ) -> Result<SearchResponse, PluginError> {
        self.run_query(cond, filter::build_content_filter(cond)).await
    }

    async fn search_questions(
        &self,
        cond: &SearchCondition,
    ) -> Result<SearchResponse, PluginError> {
        self.run_query(cond, filter::build_question_filter(cond)).await
    }

    async fn search_answers(&self, cond: &SearchCondition) -> Result<SearchResponse, PluginError> {
        self.run_query(cond, filter::build_answer_filter(cond)).await
    }

    async fn update_content(&self, content: &SearchContent) -> Result<(), PluginError> {
        let document = to_document(content)?;
        let engine = self.engine().await?;
        let index = self.config().index;

        engine
            .save_object(&index, &content.object_id, &document)
            .await
            .map_err(PluginError::from)
    }

    async fn delete_content(&self, content_id: &str) -> Result<(), PluginError> {
        let engine = self.engine().await?;
        let index = self.config().index;

        engine
            .delete_object(&index, content_id)
            .await
            .map_err(PluginError::from)
    }
}

impl ConfigPlugin for AlgoliaSearch {
    fn config_fields(&self) -> Vec<ConfigField> {
        let config = self.config();
        vec![
            ConfigField {
                name: "app_id".to_string(),
                field_type: ConfigFieldType::Input,
                title: "Application ID".to_string(),
                description: "Algolia application ID".to_string(),
                value: Value::String(config.app_id),
                ui_options: ConfigFieldUiOptions::default(),
            },
            ConfigField {
                name: "api_key".to_string(),
                field_type: ConfigFieldType::Input,
                title: "API key".to_string(),
                description: "API key with search and write permissions".to_string(),
                value: Value::String(config.api_key),
                ui_options: ConfigFieldUiOptions {
                    input_type: Some("password".to_string()),
                    ..Default::default()
                },
            },
            ConfigField {
                name: "index".to_string(),
                field_type: ConfigFieldType::Input,
                title: "Index".to_string(),
                description: "Base index name".to_string(),
                value: Value::String(config.index),
                ui_options: ConfigFieldUiOptions::default(),
            },
            ConfigField {
                name: "show_logo".to_string(),
                field_type: ConfigFieldType::Switch,
                title: "Show logo".to_string(),
                description: "Show the Algolia logo next to search results".to_string(),
                value: Value::Bool(config.show_logo),
                ui_options: ConfigFieldUiOptions::default(),
            },
        ]
    }

    fn config_receiver(&self, config: &[u8]) -> Result<(), PluginError> {
        let parsed: AlgoliaConfig =
            serde_json::from_slice(config).map_err(|e| PluginError::config(e.to_string()))?;
        *self
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner) = parsed;
        Ok(())
    }
}
