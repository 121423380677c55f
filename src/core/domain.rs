use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_CATALOG_FILE: &str = "library.txt";

// Configuration abstracts config options for the catalog shell
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub catalog_file: String,
    pub log_level: String,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(catalog_file: &str) -> Self {
        Configuration {
            catalog_file: catalog_file.to_string(),
            log_level: "warn".to_string(),
            store: RepositoryStore::FlatFile,
        }
    }

    pub fn in_memory() -> Self {
        Configuration {
            store: RepositoryStore::Memory,
            ..Configuration::new(DEFAULT_CATALOG_FILE)
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_CATALOG_FILE)
    }
}
