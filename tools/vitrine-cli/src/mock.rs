//! Synthetic catalog provider.
//!
//! Generates a randomized but seed-deterministic catalog matching the product
//! schema, and simulates the one-shot fetch latency of a real backend. Any
//! other provider satisfying `CatalogSource` is interchangeable with this one.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use vitrine_commerce::prelude::*;

const ADJECTIVES: [&str; 8] = [
    "Classic", "Relaxed", "Tailored", "Heritage", "Everyday", "Washed", "Brushed", "Coastal",
];

const MENSWEAR: [&str; 5] = ["Wool Coat", "Blazer", "Oxford Shirt", "Chinos", "Hoodie"];
const WOMENSWEAR: [&str; 5] = ["Dress", "Cardigan", "Blouse", "Midi Skirt", "Trench Coat"];
const FOOTWEAR: [&str; 5] = ["Sneakers", "Loafers", "Chelsea Boots", "Sandals", "Runners"];
const ACCESSORIES: [&str; 5] = ["Belt", "Scarf", "Beanie", "Tote Bag", "Sunglasses"];

const TAGS: [&str; 3] = ["New", "Hot", "Sale"];
const SIZES: [&str; 4] = ["S", "M", "L", "XL"];
const COLORS: [&str; 3] = ["Black", "White", "Blue"];

/// A seeded randomized catalog with simulated fetch latency.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    count: usize,
    seed: u64,
    latency: Duration,
}

impl MockCatalog {
    pub fn new(count: usize, seed: u64, latency: Duration) -> Self {
        Self {
            count,
            seed,
            latency,
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch(&self) -> Result<Catalog, StoreError> {
        tracing::debug!(latency_ms = self.latency.as_millis() as u64, "simulating catalog fetch");
        tokio::time::sleep(self.latency).await;
        Ok(Catalog::new(generate(self.count, self.seed)))
    }
}

/// Generate `count` products; the same seed yields the same catalog.
pub fn generate(count: usize, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count as u64).map(|id| product(id, &mut rng)).collect()
}

fn product(id: u64, rng: &mut StdRng) -> Product {
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    let nouns: &[&str] = match category {
        Category::Menswear => &MENSWEAR,
        Category::Womenswear => &WOMENSWEAR,
        Category::Footwear => &FOOTWEAR,
        Category::Accessories => &ACCESSORIES,
    };
    let title = format!(
        "{} {}",
        ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())],
        nouns[rng.gen_range(0..nouns.len())],
    );

    let mut tags = vec![TAGS[rng.gen_range(0..TAGS.len())].to_string()];
    if rng.gen_bool(0.4) {
        let extra = TAGS[rng.gen_range(0..TAGS.len())].to_string();
        if !tags.contains(&extra) {
            tags.push(extra);
        }
    }

    Product {
        id: ProductId::new(id),
        title,
        price: Money::new(i64::from(rng.gen_range(50..=1000u32)) * 100),
        sales: rng.gen_range(10..=5000),
        category,
        tags,
        image: format!("https://picsum.photos/seed/vitrine-{id}/300/300"),
        images: (1..=4)
            .map(|n| format!("https://picsum.photos/seed/vitrine-{id}-d{n}/600/600"))
            .collect(),
        sizes: SIZES.iter().map(|s| s.to_string()).collect(),
        colors: COLORS.iter().map(|c| c.to_string()).collect(),
        stock: rng.gen_range(0..=100),
    }
}
