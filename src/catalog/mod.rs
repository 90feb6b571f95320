//! Display data for every card collection, injected into the pages at startup

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::CatalogError;
use crate::types::CollectionSpec;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    collections: Vec<CollectionSpec>,
}

impl Catalog {
    /// Catalog with the placeholder collections bundled into the binary
    pub fn builtin() -> Self {
        Self {
            collections: builtin::collections(),
        }
    }

    pub fn new(collections: Vec<CollectionSpec>) -> Result<Self, CatalogError> {
        let catalog = Self { collections };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} collections from {}",
            catalog.collections.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn collections(&self) -> &[CollectionSpec] {
        &self.collections
    }

    pub fn collection(&self, id: &str) -> Option<&CollectionSpec> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for collection in &self.collections {
            if !seen.insert(collection.id.as_str()) {
                return Err(CatalogError::DuplicateCollection(collection.id.clone()));
            }

            if let Some(index) = collection
                .records
                .iter()
                .position(|r| r.primary_label.trim().is_empty())
            {
                return Err(CatalogError::EmptyLabel {
                    collection: collection.id.clone(),
                    index,
                });
            }
        }
        Ok(())
    }
}
