//! Catalog collection and supply interface.

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An immutable-per-session collection of products.
///
/// The catalog is the authoritative input to the query pipeline. Detail
/// lookups resolve strictly by id against this collection rather than
/// trusting state carried through navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product collection.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Resolve a product by id.
    ///
    /// Returns an explicit `ProductNotFound` for absent ids instead of
    /// relying on the caller to have passed a full product along.
    pub fn get(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

/// Catalog availability for the session.
///
/// `Loading` is the explicit pre-fetch state: it is observably distinct from
/// a catalog that resolved with zero products.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    /// The one-shot fetch has not resolved yet.
    #[default]
    Loading,
    /// The catalog is available.
    Ready(Catalog),
}

impl CatalogState {
    /// Check if the fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// Get the catalog, if resolved.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loading => None,
            CatalogState::Ready(catalog) => Some(catalog),
        }
    }
}

/// Supply interface for the catalog.
///
/// Resolves once per session; any provider satisfying the product schema is
/// interchangeable behind this trait, from fixed fixtures to a real backend.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Catalog, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new(vec![sample(1, 5000), sample(2, 20000)]);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().price.cents(), 20000);
        assert_eq!(
            catalog.get(ProductId::new(9)),
            Err(StoreError::ProductNotFound(ProductId::new(9)))
        );
    }

    #[test]
    fn test_loading_distinct_from_empty() {
        let loading = CatalogState::Loading;
        let empty = CatalogState::Ready(Catalog::default());

        assert!(loading.is_loading());
        assert!(loading.catalog().is_none());
        assert!(!empty.is_loading());
        assert!(empty.catalog().unwrap().is_empty());
        assert_ne!(loading, empty);
    }

    struct FixtureSource(Vec<Product>);

    #[async_trait]
    impl CatalogSource for FixtureSource {
        async fn fetch(&self) -> Result<Catalog, StoreError> {
            Ok(Catalog::new(self.0.clone()))
        }
    }

    #[tokio::test]
    async fn test_fixture_source_resolves() {
        let source = FixtureSource(vec![sample(1, 5000)]);
        let catalog = source.fetch().await.unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
