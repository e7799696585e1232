//! Read-only product catalog, loaded once at startup.

pub mod config;
pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::domain::Product;
use crate::similarity::MatchRules;

pub use config::{AlternateList, CatalogDefinition};
pub use error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// The authoritative product table: primary listing, deals, and the
/// curated alternates reachable only through similarity lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    deals: Vec<Product>,
    rules: MatchRules,
}

impl Catalog {
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        definition.validate()?;
        let rules = MatchRules::new(definition.keywords.clone(), definition.override_table());
        let catalog = Self {
            products: definition.products,
            deals: definition.deals,
            rules,
        };
        info!(
            products = catalog.products.len(),
            deals = catalog.deals.len(),
            override_lists = catalog.rules.overrides().len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        Self::from_definition(CatalogDefinition::parse(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    pub fn get_promotional(&self) -> &[Product] {
        &self.deals
    }

    pub fn get_alternates(&self) -> &BTreeMap<String, Vec<Product>> {
        self.rules.overrides()
    }

    pub fn keywords(&self) -> &[String] {
        self.rules.keywords()
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Looks up a record by id in the primary listing, then deals, then alternates.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products
            .iter()
            .chain(&self.deals)
            .chain(self.rules.overrides().values().flatten())
            .find(|product| product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.get_all().len(), 8);
        assert_eq!(catalog.get_promotional().len(), 6);
        assert_eq!(catalog.get_alternates().len(), 2);
        assert_eq!(catalog.keywords().len(), 8);
    }

    #[test]
    fn test_primary_order_is_definition_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.get_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_promotional_duplicates_are_kept() {
        let catalog = Catalog::builtin().unwrap();
        let deals = catalog.get_promotional();

        let original = deals.iter().find(|p| p.id == "deal-1").unwrap();
        let duplicate = deals.iter().find(|p| p.id == "deal-1-dup").unwrap();

        assert_ne!(original.id, duplicate.id);
        assert_eq!(original.name, duplicate.name);
        assert_eq!(original.price, duplicate.price);
        assert_eq!(original.discount, duplicate.discount);
    }

    #[test]
    fn test_find_reaches_every_subset() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.find("4").map(|p| p.name.as_str()), Some("Chicken Breast"));
        assert_eq!(catalog.find("deal-2").map(|p| p.discount), Some(Some(25)));
        assert_eq!(catalog.find("alt-sauce-2").map(|p| p.name.as_str()), Some("Alfredo Sauce"));
        assert!(catalog.find("nope").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            keywords = ["milk"]

            [[products]]
            id = "2"
            name = "Whole Milk"
            price = "3.48"
            image = "/images/milk.jpg"
            in_stock = true

            [[deals]]
            id = "deal-1"
            name = "Bundle: Bread & Milk"
            price = "4.99"
            image = "/images/bundle.jpg"
            in_stock = true
            discount = 15
        "#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.get_all().len(), 1);
        assert_eq!(catalog.get_all()[0].name, "Whole Milk");
        assert_eq!(catalog.get_promotional()[0].discount, Some(15));
        assert!(catalog.get_alternates().is_empty());
        assert_eq!(catalog.keywords(), ["milk".to_string()]);
    }

    #[test]
    fn test_invalid_definition_refused() {
        let err = Catalog::from_toml_str("keywords = [\"\"]").unwrap_err();
        assert!(matches!(err, CatalogError::BlankKeyword));
    }
}
