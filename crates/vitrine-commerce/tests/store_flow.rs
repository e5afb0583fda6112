//! End-to-end storefront session flows.

use vitrine_commerce::prelude::*;

fn coat() -> Product {
    Product {
        id: ProductId::new(1),
        title: "Wool Coat".to_string(),
        price: Money::from_decimal(200.0),
        sales: 320,
        category: Category::Menswear,
        tags: vec!["New".to_string(), "Hot".to_string()],
        image: "https://img.example/1/thumb.jpg".to_string(),
        images: vec![
            "https://img.example/1/detail-1.jpg".to_string(),
            "https://img.example/1/detail-2.jpg".to_string(),
        ],
        sizes: vec!["S".to_string(), "M".to_string()],
        colors: vec!["Red".to_string(), "Blue".to_string()],
        stock: 5,
    }
}

fn priced(id: u64, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Item {id}"),
        price: Money::from_decimal(price),
        sales: 50,
        category: Category::Accessories,
        tags: vec!["Sale".to_string()],
        image: format!("https://img.example/{id}/thumb.jpg"),
        images: vec![format!("https://img.example/{id}/detail.jpg")],
        sizes: vec!["M".to_string()],
        colors: vec!["Black".to_string()],
        stock: 20,
    }
}

struct FixtureSource(Vec<Product>);

#[async_trait::async_trait]
impl CatalogSource for FixtureSource {
    async fn fetch(&self) -> Result<Catalog, StoreError> {
        Ok(Catalog::new(self.0.clone()))
    }
}

#[tokio::test]
async fn merge_on_repeated_add() {
    let source = FixtureSource(vec![coat()]);

    let mut session = StoreSession::new(12);
    assert!(session.is_loading());
    assert_eq!(session.display(), None);

    session.supply(source.fetch().await.unwrap());

    // add (S, Red, 1), then (S, Red, 2)
    session.view_mut().select_size("S");
    session.view_mut().select_color("Red");
    session.view_mut().set_quantity(1, 5);
    session.confirm_add(ProductId::new(1)).unwrap();

    session.view_mut().select_size("S");
    session.view_mut().select_color("Red");
    session.view_mut().set_quantity(2, 5);
    session.confirm_add(ProductId::new(1)).unwrap();

    let cart = session.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].size, "S");
    assert_eq!(cart.lines()[0].color, "Red");
    assert_eq!(cart.lines()[0].count, 3);
    assert!(cart.is_open());
    assert_eq!(cart.total().unwrap(), Money::from_decimal(600.0));
}

#[tokio::test]
async fn filter_sort_and_paginate() {
    let source = FixtureSource(vec![
        priced(1, 50.0),
        priced(2, 500.0),
        priced(3, 1500.0),
    ]);

    let mut session = StoreSession::new(1);
    session.supply(source.fetch().await.unwrap());

    session.set_filter(
        FilterCriteria::new().with_price(PriceRange::new(Money::zero(), Money::from_decimal(1000.0))),
    );
    session.set_sort(SortKey::PriceDesc);

    let display = session.display().unwrap();
    let prices: Vec<Money> = display.iter().map(|p| p.price).collect();
    assert_eq!(
        prices,
        vec![Money::from_decimal(500.0), Money::from_decimal(50.0)]
    );

    // one item per page: page 2 holds the cheaper item, page 3 is empty
    assert_eq!(session.page().unwrap().len(), 1);
    session.view_mut().set_page(2);
    assert_eq!(session.page().unwrap()[0].price, Money::from_decimal(50.0));
    session.view_mut().set_page(3);
    assert!(session.page().unwrap().is_empty());
}

#[test]
fn incomplete_selection_blocks_add() {
    let mut session = StoreSession::new(12);
    session.supply(Catalog::new(vec![coat()]));

    session.view_mut().select_color("Red");
    let result = session.confirm_add(ProductId::new(1));
    assert_eq!(
        result,
        Err(StoreError::IncompleteSelection { missing: "size" })
    );
    assert!(session.cart().is_empty());
    assert!(!session.cart().is_open());
}

#[test]
fn removal_preserves_remaining_order() {
    let mut session = StoreSession::new(12);
    session.supply(Catalog::new(vec![coat(), priced(2, 80.0), priced(3, 90.0)]));

    for id in [1, 2, 3] {
        session.view_mut().select_size(if id == 1 { "S" } else { "M" });
        session.view_mut().select_color(if id == 1 { "Red" } else { "Black" });
        session.confirm_add(ProductId::new(id)).unwrap();
    }
    assert_eq!(session.cart().len(), 3);

    session.cart_mut().remove(1);
    let remaining: Vec<u64> = session
        .cart()
        .lines()
        .iter()
        .map(|l| l.product_id.get())
        .collect();
    assert_eq!(remaining, vec![1, 3]);
}

#[test]
fn cart_notifications_reach_the_presentation_layer() {
    use std::sync::{Arc, Mutex};

    let mut session = StoreSession::new(12);
    session.supply(Catalog::new(vec![coat()]));

    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&messages);
    session.cart_mut().subscribe(move |event| {
        if let CartEvent::Added { title, count } = event {
            sink.lock().unwrap().push(format!("{title} x{count}"));
        }
    });

    session.view_mut().select_size("M");
    session.view_mut().select_color("Blue");
    session.confirm_add(ProductId::new(1)).unwrap();

    assert_eq!(messages.lock().unwrap().as_slice(), ["Wool Coat x1"]);
}
