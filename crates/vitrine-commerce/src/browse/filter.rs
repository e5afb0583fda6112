//! Filter criteria for catalog queries.

use crate::catalog::{Category, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A closed price interval, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Check if a price falls within the range, bounds included.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    /// The full slider range of the storefront, $0 to $1000.
    fn default() -> Self {
        Self::new(Money::zero(), Money::new(100_000))
    }
}

/// Live filter criteria for the product list.
///
/// An empty category selection means "all categories", not "no results".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub categories: Vec<Category>,
    pub price: PriceRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Restrict to the given price range.
    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Category predicate: empty selection admits every product.
    pub fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    /// Price predicate, bounds inclusive.
    pub fn matches_price(&self, product: &Product) -> bool {
        self.price.contains(product.price)
    }

    /// Combined predicate over both stages.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_price(product)
    }
}
