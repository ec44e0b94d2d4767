use std::env;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> Option<String>;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the movie catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub stage: String,
    pub store: RepositoryStore,
    pub table_name: String,
    pub index_name: String,
}

impl Configuration {
    pub fn new(stage: &str) -> Self {
        Configuration {
            stage: stage.to_string(),
            store: RepositoryStore::LocalDynamoDB,
            table_name: "movies".to_string(),
            index_name: "movies_ndx".to_string(),
        }
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }

    // Reads MOVIES_STAGE, MOVIES_STORE and MOVIES_TABLE; unset values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let stage = lookup("MOVIES_STAGE").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(stage.as_str());
        if let Some(store) = lookup("MOVIES_STORE") {
            config.store = RepositoryStore::from(store);
        }
        if let Some(table) = lookup("MOVIES_TABLE") {
            config.index_name = format!("{}_ndx", table);
            config.table_name = table;
        }
        config
    }
}
