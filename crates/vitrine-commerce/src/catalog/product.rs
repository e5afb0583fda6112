//! Product and category types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category, a fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Menswear,
    Womenswear,
    Footwear,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Menswear,
        Category::Womenswear,
        Category::Footwear,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Menswear => "menswear",
            Category::Womenswear => "womenswear",
            Category::Footwear => "footwear",
            Category::Accessories => "accessories",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "menswear" => Some(Category::Menswear),
            "womenswear" => Some(Category::Womenswear),
            "footwear" => Some(Category::Footwear),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Menswear => "Menswear",
            Category::Womenswear => "Womenswear",
            Category::Footwear => "Footwear",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product in the catalog.
///
/// Immutable once generated; owned by the catalog. `sizes`, `colors`, `tags`
/// and `images` are non-empty by construction of the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, session-stable identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price (positive).
    pub price: Money,
    /// Units sold, used only for ranking.
    pub sales: u32,
    /// Category.
    pub category: Category,
    /// Ordered tags for display (non-empty).
    pub tags: Vec<String>,
    /// Primary thumbnail reference.
    pub image: String,
    /// Detail-view image references (non-empty).
    pub images: Vec<String>,
    /// Offered size labels (non-empty).
    pub sizes: Vec<String>,
    /// Offered color labels (non-empty).
    pub colors: Vec<String>,
    /// Upper bound on purchasable quantity.
    pub stock: u32,
}

impl Product {
    /// Check whether any quantity can be purchased.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check whether the product offers the given size label.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check whether the product offers the given color label.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    #[test]
    fn test_category_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::from_str("Footwear"), Some(Category::Footwear));
        assert_eq!(Category::from_str("gadgets"), None);
    }

    #[test]
    fn test_variant_membership() {
        let product = sample(1, 5000);
        assert!(product.has_size("M"));
        assert!(!product.has_size("XXL"));
        assert!(product.has_color("Blue"));
        assert!(!product.has_color("Green"));
    }

    #[test]
    fn test_stock() {
        let mut product = sample(1, 5000);
        assert!(product.in_stock());
        product.stock = 0;
        assert!(!product.in_stock());
    }
}
