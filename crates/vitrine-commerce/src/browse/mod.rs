//! Catalog browsing module.
//!
//! The query pipeline that derives a displayable product list from filter and
//! sort criteria, plus pagination over the result.

mod filter;
mod page;
mod query;

pub use filter::{FilterCriteria, PriceRange};
pub use page::Pagination;
pub use query::{apply, SortKey};
