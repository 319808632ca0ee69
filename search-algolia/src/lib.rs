//! # Search Algolia
//!
//! Algolia search provider plugin for the Q&A platform. The plugin
//! translates the host's search conditions into the Algolia filter
//! grammar, proxies paginated queries against the hosted index, and
//! mirrors content mutations (create/update/delete) into it. All
//! indexing, ranking, and query execution happen inside the hosted
//! service; this crate is a translation layer.

pub mod client;
pub mod config;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod index_name;
pub mod plugin;
pub mod settings;

pub use client::AlgoliaClient;
pub use config::AlgoliaConfig;
pub use engine::{IndexSettings, QueryParams, QueryResponse, SearchEngine};
pub use errors::EngineError;
pub use plugin::AlgoliaSearch;
