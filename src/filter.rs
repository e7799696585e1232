use crate::catalog::Catalog;
use crate::domain::Product;

/// Browsable listing: primary products whose name contains `query`,
/// ignoring case, with alternate-only records left out.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    catalog
        .get_all()
        .iter()
        .filter(|product| !product.is_alternate())
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}
