//! The catalog query pipeline.

use crate::browse::FilterCriteria;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort criterion for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Stable catalog order, no reordering.
    #[default]
    Default,
    /// By price, low to high.
    PriceAsc,
    /// By price, high to low.
    PriceDesc,
    /// By sales, high to low.
    SalesDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::SalesDesc => "sales",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(SortKey::Default),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "sales" => Some(SortKey::SalesDesc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::SalesDesc => "Best Selling",
        }
    }
}

/// Derive the display list from the catalog.
///
/// Pure and deterministic: category filter, then price filter, then a stable
/// sort. Ties preserve relative catalog order, and `SortKey::Default` leaves
/// the filtered order untouched. The output is a fresh sequence; the catalog
/// is never mutated. Callers re-run the full pipeline whenever the catalog,
/// filter, or sort changes.
pub fn apply(catalog: &[Product], filter: &FilterCriteria, sort: SortKey) -> Vec<Product> {
    let mut result: Vec<Product> = catalog
        .iter()
        .filter(|p| filter.matches_category(p))
        .filter(|p| filter.matches_price(p))
        .cloned()
        .collect();

    match sort {
        SortKey::Default => {}
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::SalesDesc => result.sort_by(|a, b| b.sales.cmp(&a.sales)),
    }

    tracing::debug!(
        input = catalog.len(),
        output = result.len(),
        sort = sort.as_str(),
        "catalog query applied"
    );

    result
}
