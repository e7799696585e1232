//! Alternate-product matching.
//!
//! Candidates come from two places, in this order:
//! 1. in-stock primary products sharing a keyword category with the subject
//! 2. the curated override list for the subject's exact name
//!
//! The two sources are not deduplicated against each other, so a product
//! reachable both ways is returned twice.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::domain::Product;

/// Keyword categories and curated overrides driving the matcher.
#[derive(Debug, Clone, Default)]
pub struct MatchRules {
    keywords: Vec<String>,
    overrides: BTreeMap<String, Vec<Product>>,
}

impl MatchRules {
    /// Keywords are lowercased here; override keys stay case-sensitive.
    pub fn new(keywords: Vec<String>, overrides: BTreeMap<String, Vec<Product>>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.trim().to_lowercase()).collect(),
            overrides,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn overrides(&self) -> &BTreeMap<String, Vec<Product>> {
        &self.overrides
    }

    /// True when some keyword appears in both names.
    pub fn share_category(&self, left: &str, right: &str) -> bool {
        let left = left.to_lowercase();
        let right = right.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| left.contains(keyword.as_str()) && right.contains(keyword.as_str()))
    }
}

pub struct SimilarityMatcher<'a> {
    products: &'a [Product],
    rules: &'a MatchRules,
}

impl<'a> SimilarityMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_rules(catalog.get_all(), catalog.rules())
    }

    pub fn with_rules(products: &'a [Product], rules: &'a MatchRules) -> Self {
        Self { products, rules }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id, product_name = %product.name))]
    pub fn find(&self, product: &Product) -> Vec<Product> {
        let mut similar: Vec<Product> = self
            .products
            .iter()
            .filter(|candidate| {
                candidate.in_stock
                    && candidate.id != product.id
                    && self.rules.share_category(&product.name, &candidate.name)
            })
            .cloned()
            .collect();
        let matched = similar.len();

        if let Some(curated) = self.rules.overrides().get(&product.name) {
            similar.extend(curated.iter().cloned());
        }

        debug!(matched, total = similar.len(), "Alternates resolved");
        similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_bread_loaf_uses_overrides() {
        let catalog = Catalog::builtin().unwrap();
        let bread = catalog.find("3").unwrap();

        let alternates = SimilarityMatcher::new(&catalog).find(bread);
        assert_eq!(ids(&alternates), vec!["alt-bread-1", "alt-bread-2", "alt-bread-3"]);
    }

    #[test]
    fn test_never_includes_subject_and_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let matcher = SimilarityMatcher::new(&catalog);

        for product in catalog.get_all() {
            let first = matcher.find(product);
            let second = matcher.find(product);
            assert_eq!(first, second);
            assert!(first.iter().all(|p| p.id != product.id));
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin().unwrap();
        let cereal = catalog.find("8").unwrap();
        assert!(SimilarityMatcher::new(&catalog).find(cereal).is_empty());
    }

    #[test]
    fn test_deal_matches_catalog_by_keyword() {
        let catalog = Catalog::builtin().unwrap();
        let bundle = catalog.find("deal-1").unwrap();

        // "Bundle: Bread & Milk" shares "milk" with Whole Milk; Bread Loaf is out of stock.
        let alternates = SimilarityMatcher::new(&catalog).find(bundle);
        assert_eq!(ids(&alternates), vec!["2"]);
    }

    #[test]
    fn test_out_of_stock_candidates_skipped() {
        let catalog = Catalog::builtin().unwrap();
        let sauce = Product::new("x", "Hot Sauce", Decimal::ONE, "/img", true);

        // Pasta Sauce is out of stock and "Hot Sauce" has no override list.
        assert!(SimilarityMatcher::new(&catalog).find(&sauce).is_empty());
    }

    #[test]
    fn test_override_key_is_case_sensitive() {
        let catalog = Catalog::builtin().unwrap();
        let shouting = Product::new("x", "BREAD LOAF", Decimal::ONE, "/img", false);
        assert!(SimilarityMatcher::new(&catalog).find(&shouting).is_empty());
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let rules = MatchRules::new(vec!["Apple".to_string()], BTreeMap::new());
        assert!(rules.share_category("GREEN APPLES", "apple pie"));
        assert!(!rules.share_category("green apples", "pear"));
    }

    #[test]
    fn test_catalog_and_override_overlap_is_kept() {
        let rye = Product::new("alt-rye", "Rye Bread", Decimal::new(274, 2), "/img", true);
        let products = vec![
            Product::new("1", "Bread Loaf", Decimal::new(224, 2), "/img", false),
            rye.clone(),
        ];
        let mut overrides = BTreeMap::new();
        overrides.insert("Bread Loaf".to_string(), vec![rye.clone()]);
        let rules = MatchRules::new(vec!["bread".to_string()], overrides);

        let alternates = SimilarityMatcher::with_rules(&products, &rules).find(&products[0]);
        assert_eq!(alternates, vec![rye.clone(), rye]);
    }
}
