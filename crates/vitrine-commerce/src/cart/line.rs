//! Cart line and variant selection types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A fully specified variant choice for a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelection {
    /// Chosen size, drawn from the product's own size labels.
    pub size: String,
    /// Chosen color, drawn from the product's own color labels.
    pub color: String,
    /// Quantity, at least 1 and at most the product's stock.
    pub quantity: u32,
}

impl VariantSelection {
    pub fn new(size: impl Into<String>, color: impl Into<String>, quantity: u32) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            quantity,
        }
    }
}

/// A line in the cart: denormalized product fields plus the chosen variant.
///
/// Identity for merge purposes is `(product_id, size, color)`; two lines with
/// the same key never coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,
    pub size: String,
    pub color: String,
    /// Always at least 1; a removal deletes the line outright.
    pub count: u32,
}

impl CartLine {
    /// Build a new line from a product and a selection.
    pub fn new(product: &Product, selection: &VariantSelection) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            size: selection.size.clone(),
            color: selection.color.clone(),
            count: selection.quantity,
        }
    }

    /// Check if this line carries the given merge key.
    pub fn matches(&self, product_id: ProductId, size: &str, color: &str) -> bool {
        self.product_id == product_id && self.size == size && self.color == color
    }

    /// Line total, `price × count`. `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    #[test]
    fn test_line_from_selection() {
        let product = sample(1, 20000);
        let line = CartLine::new(&product, &VariantSelection::new("S", "Blue", 2));

        assert_eq!(line.product_id, product.id);
        assert_eq!(line.title, product.title);
        assert_eq!(line.count, 2);
        assert!(line.matches(product.id, "S", "Blue"));
        assert!(!line.matches(product.id, "S", "Black"));
    }

    #[test]
    fn test_line_total() {
        let product = sample(1, 20000);
        let line = CartLine::new(&product, &VariantSelection::new("S", "Blue", 3));
        assert_eq!(line.line_total(), Some(Money::new(60000)));
    }
}
