//! Shopping cart module.
//!
//! The cart engine owns the line entries and the visibility flag, and merges
//! variant-level selections with an at-most-one-line-per-variant invariant.

mod engine;
mod line;

pub use engine::{CartEngine, CartEvent};
pub use line::{CartLine, VariantSelection};
