//! On-disk catalog definition and its load-time validation.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::CatalogError;
use crate::domain::Product;

/// Curated alternates for one exact product name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlternateList {
    pub product_name: String,
    pub products: Vec<Product>,
}

/// Root of a catalog TOML document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDefinition {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub deals: Vec<Product>,
    #[serde(default)]
    pub alternates: Vec<AlternateList>,
}

impl CatalogDefinition {
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(source)?)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(CatalogError::BlankKeyword);
        }

        for product in &self.products {
            check_record(product)?;
            if product.discount.is_some() {
                return Err(CatalogError::UnexpectedDiscount(product.id.clone()));
            }
        }
        for deal in &self.deals {
            check_record(deal)?;
            if deal.discount.is_none() {
                return Err(CatalogError::MissingDiscount(deal.id.clone()));
            }
        }

        let mut seen: HashMap<&str, &Product> = HashMap::new();
        for product in self.products.iter().chain(&self.deals) {
            if seen.insert(product.id.as_str(), product).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        let primary_ids: Vec<&str> = seen.keys().copied().collect();

        let mut names = Vec::with_capacity(self.alternates.len());
        for list in &self.alternates {
            if names.contains(&list.product_name.as_str()) {
                return Err(CatalogError::DuplicateOverride(list.product_name.clone()));
            }
            names.push(list.product_name.as_str());

            for alternate in &list.products {
                check_record(alternate)?;
                if alternate.discount.is_some() {
                    return Err(CatalogError::UnexpectedDiscount(alternate.id.clone()));
                }
                if primary_ids.contains(&alternate.id.as_str()) {
                    return Err(CatalogError::DuplicateId(alternate.id.clone()));
                }
                // The same alternate may back several names, but only as one record.
                match seen.insert(alternate.id.as_str(), alternate) {
                    Some(previous) if previous != alternate => {
                        return Err(CatalogError::DuplicateId(alternate.id.clone()));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub(crate) fn override_table(&self) -> BTreeMap<String, Vec<Product>> {
        self.alternates
            .iter()
            .map(|list| (list.product_name.clone(), list.products.clone()))
            .collect()
    }
}

fn check_record(product: &Product) -> Result<(), CatalogError> {
    if product.id.trim().is_empty() {
        return Err(CatalogError::EmptyId(product.name.clone()));
    }
    if product.price < Decimal::ZERO {
        return Err(CatalogError::NegativePrice {
            id: product.id.clone(),
            price: product.price,
        });
    }
    if let Some(discount) = product.discount {
        if !(0..=100).contains(&discount) {
            return Err(CatalogError::DiscountOutOfRange {
                id: product.id.clone(),
                discount,
            });
        }
    }
    Ok(())
}
