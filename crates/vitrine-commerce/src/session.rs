//! Session state wiring the pipeline, cart, and view together.

use crate::browse::{self, FilterCriteria, SortKey};
use crate::cart::CartEngine;
use crate::catalog::{Catalog, CatalogState, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::view::ViewCoordinator;

/// A storefront session: catalog state, live criteria, the derived display
/// list, and the cart.
///
/// There is no hidden dependency tracking: `supply`, `set_filter`, and
/// `set_sort` each re-run the full query pipeline, so the display list is
/// never a stale partial result. All state is in-memory and lives from
/// session start to session end.
#[derive(Debug)]
pub struct StoreSession {
    catalog: CatalogState,
    filter: FilterCriteria,
    sort: SortKey,
    display: Vec<Product>,
    cart: CartEngine,
    view: ViewCoordinator,
}

impl StoreSession {
    /// Create a session awaiting its catalog, with the given page size.
    pub fn new(per_page: usize) -> Self {
        Self {
            catalog: CatalogState::Loading,
            filter: FilterCriteria::default(),
            sort: SortKey::Default,
            display: Vec::new(),
            cart: CartEngine::new(),
            view: ViewCoordinator::new(per_page),
        }
    }

    /// Supply the resolved catalog.
    ///
    /// The collection becomes the authoritative pipeline input. Re-supplying
    /// replaces the previous catalog wholesale (last write wins) and
    /// recomputes the display list.
    pub fn supply(&mut self, catalog: Catalog) {
        tracing::info!(products = catalog.len(), "catalog supplied");
        self.catalog = CatalogState::Ready(catalog);
        self.recompute();
    }

    /// Whether the initial fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    /// Replace the filter criteria and recompute.
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.filter = filter;
        self.recompute();
    }

    /// Replace the sort criterion and recompute.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.recompute();
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// The derived display list.
    ///
    /// `None` while the catalog is loading; `Some` with an empty slice is a
    /// valid "no products matched" result.
    pub fn display(&self) -> Option<&[Product]> {
        match self.catalog {
            CatalogState::Loading => None,
            CatalogState::Ready(_) => Some(&self.display),
        }
    }

    /// The current page window of the display list, `None` while loading.
    pub fn page(&self) -> Option<&[Product]> {
        self.display().map(|items| self.view.page_window(items))
    }

    /// Resolve a product for a detail view by id against the catalog.
    ///
    /// Returns `ProductNotFound` both for absent ids and while the catalog
    /// has not loaded, so direct navigation never crashes.
    pub fn product(&self, id: ProductId) -> Result<&Product, StoreError> {
        match self.catalog.catalog() {
            Some(catalog) => catalog.get(id),
            None => Err(StoreError::ProductNotFound(id)),
        }
    }

    /// Validate the current draft and add the identified product to the cart.
    pub fn confirm_add(&mut self, id: ProductId) -> Result<(), StoreError> {
        let product = self.product(id)?.clone();
        self.view.confirm_add(&mut self.cart, &product)
    }

    pub fn cart(&self) -> &CartEngine {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartEngine {
        &mut self.cart
    }

    pub fn view(&self) -> &ViewCoordinator {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewCoordinator {
        &mut self.view
    }

    fn recompute(&mut self) {
        self.display = match self.catalog.catalog() {
            Some(catalog) => browse::apply(catalog.products(), &self.filter, self.sort),
            None => Vec::new(),
        };
    }
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::new(12)
    }
}
