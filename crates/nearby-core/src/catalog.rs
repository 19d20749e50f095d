// Rust guideline compliant 2026-10-19

//! Per-category lookup tables.
//!
//! Every category carries the same three tables (phones, image sequences,
//! descriptions) and an optional default entity whose images and description
//! stand in for ids that have none of their own. Phones never fall back: a
//! card must not dial another provider.

use crate::lookup::{LookupTable, Resolver};
use crate::{Category, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The display-fact tables of one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTables {
    /// Phone numbers by entity id.
    #[serde(default)]
    pub phones: LookupTable<String>,
    /// Image sequences by entity id.
    #[serde(default)]
    pub images: LookupTable<Vec<String>>,
    /// Descriptions by entity id.
    #[serde(default)]
    pub descriptions: LookupTable<String>,
    /// Entity whose images and description are used when an id has none.
    #[serde(default)]
    pub default_entity: Option<String>,
}

impl CategoryTables {
    /// Resolver over the phone table, exact ids only.
    #[must_use]
    pub fn phone_resolver(&self) -> Resolver<'_, String> {
        Resolver::new(&self.phones, None)
    }

    /// Resolver over the image table.
    #[must_use]
    pub fn image_resolver(&self) -> Resolver<'_, Vec<String>> {
        Resolver::new(&self.images, self.default_entity.as_deref())
    }

    /// Resolver over the description table.
    #[must_use]
    pub fn description_resolver(&self) -> Resolver<'_, String> {
        Resolver::new(&self.descriptions, self.default_entity.as_deref())
    }
}

/// Category-keyed collection of lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<Category, CategoryTables>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog from a JSON file keyed by category name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Writes the catalog as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Installs the tables for a category, replacing any previous ones.
    pub fn insert(&mut self, category: Category, tables: CategoryTables) {
        self.categories.insert(category, tables);
    }

    /// Returns the tables for a category, if registered.
    pub fn get(&self, category: Category) -> Option<&CategoryTables> {
        self.categories.get(&category)
    }

    /// Returns the tables for a category, or shared empty tables.
    ///
    /// Lookups against an unregistered category degrade to absent.
    pub fn tables(&self, category: Category) -> &CategoryTables {
        static EMPTY: std::sync::OnceLock<CategoryTables> = std::sync::OnceLock::new();
        self.categories
            .get(&category)
            .unwrap_or_else(|| EMPTY.get_or_init(CategoryTables::default))
    }

    /// Iterates over registered categories in order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_category_is_empty() {
        let catalog = Catalog::new();
        let tables = catalog.tables(Category::Dental);
        assert!(tables.phones.is_empty());
        assert!(tables.phone_resolver().resolve("dental_1").is_none());
    }

    #[test]
    fn test_catalog_parses_category_keys() {
        let json = r#"{
            "blood_bank": {
                "phones": {"bb_1": "040-2345"},
                "default_entity": "bb_1"
            }
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let tables = catalog.get(Category::BloodBank).unwrap();
        assert_eq!(
            tables.phone_resolver().resolve("bb_1").map(String::as_str),
            Some("040-2345")
        );
    }

    #[test]
    fn test_phone_does_not_fall_back_to_default_entity() {
        let tables = CategoryTables {
            phones: [("bb_1", "040-2345".to_string())].into_iter().collect(),
            images: [("bb_1", vec!["bb1.jpg".to_string()])].into_iter().collect(),
            descriptions: LookupTable::new(),
            default_entity: Some("bb_1".to_string()),
        };
        assert!(tables.phone_resolver().resolve("bb_9").is_none());
        assert_eq!(tables.image_resolver().resolve("bb_9").map(Vec::len), Some(1));
    }
}
