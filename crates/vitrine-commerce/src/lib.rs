//! Storefront demo core.
//!
//! Two interacting stateful subsystems carry the logic here:
//!
//! - **Browse**: a pure query pipeline deriving a displayable product list
//!   from filter and sort criteria, paginated for display.
//! - **Cart**: a per-session engine merging variant-level selections into
//!   line items, at most one line per `(product, size, color)` key.
//!
//! Around them, the catalog module supplies the immutable product collection
//! through an async one-shot interface, and the view module holds the thin
//! scratch state (draft variant selection, pagination cursor) between the
//! display list and the cart.
//!
//! # Example
//!
//! ```
//! use vitrine_commerce::prelude::*;
//!
//! let product = Product {
//!     id: ProductId::new(1),
//!     title: "Wool Coat".to_string(),
//!     price: Money::from_decimal(200.0),
//!     sales: 320,
//!     category: Category::Menswear,
//!     tags: vec!["New".to_string()],
//!     image: "thumb.jpg".to_string(),
//!     images: vec!["detail.jpg".to_string()],
//!     sizes: vec!["S".to_string(), "M".to_string()],
//!     colors: vec!["Red".to_string(), "Blue".to_string()],
//!     stock: 5,
//! };
//!
//! let mut session = StoreSession::new(12);
//! session.supply(Catalog::new(vec![product]));
//!
//! session.view_mut().select_size("S");
//! session.view_mut().select_color("Red");
//! session.confirm_add(ProductId::new(1)).unwrap();
//!
//! assert_eq!(session.cart().total().unwrap(), Money::from_decimal(200.0));
//! ```

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    pub use crate::catalog::{Catalog, CatalogSource, CatalogState, Category, Product};

    pub use crate::browse::{apply, FilterCriteria, Pagination, PriceRange, SortKey};

    pub use crate::cart::{CartEngine, CartEvent, CartLine, VariantSelection};

    pub use crate::session::StoreSession;
    pub use crate::view::{DraftSelection, ViewCoordinator};
}
