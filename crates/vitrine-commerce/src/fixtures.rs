//! Shared test fixtures.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::money::Money;

/// A plain in-stock product for unit tests.
pub(crate) fn sample(id: u64, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: Money::new(price_cents),
        sales: 100,
        category: Category::Menswear,
        tags: vec!["New".to_string()],
        image: format!("https://img.example/{id}/thumb.jpg"),
        images: vec![
            format!("https://img.example/{id}/detail-1.jpg"),
            format!("https://img.example/{id}/detail-2.jpg"),
        ],
        sizes: vec!["S".to_string(), "M".to_string()],
        colors: vec!["Black".to_string(), "Blue".to_string()],
        stock: 10,
    }
}

/// Like [`sample`] but with the given category and sales count.
pub(crate) fn sample_in(id: u64, price_cents: i64, category: Category, sales: u32) -> Product {
    Product {
        category,
        sales,
        ..sample(id, price_cents)
    }
}
