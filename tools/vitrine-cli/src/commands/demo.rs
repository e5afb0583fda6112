//! The `vitrine demo` command: a scripted storefront session.

use anyhow::{bail, Result};
use clap::Args;
use std::time::Duration;

use vitrine_commerce::prelude::*;

use crate::config::CliConfig;
use crate::mock::MockCatalog;
use crate::output::Output;

#[derive(Args)]
pub struct DemoArgs {
    /// Override the catalog seed
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn run(args: DemoArgs, config: &CliConfig, output: &Output) -> Result<()> {
    let source = MockCatalog::new(
        config.catalog.count,
        args.seed.unwrap_or(config.catalog.seed),
        Duration::from_millis(config.catalog.latency_ms),
    );

    let mut session = StoreSession::new(config.display.per_page);

    // notifications are the presentation layer's concern; the engine only
    // exposes the hook
    let toast = output.clone();
    session.cart_mut().subscribe(move |event| {
        if let CartEvent::Added { title, count } = event {
            toast.success(&format!("Added to cart: {title} (x{count})"));
        }
    });

    if session.is_loading() {
        output.info("Loading catalog…");
    }
    session.supply(source.fetch().await?);

    session.set_filter(
        FilterCriteria::new().with_price(PriceRange::new(Money::zero(), Money::from_decimal(600.0))),
    );
    session.set_sort(SortKey::SalesDesc);

    let display = session.display().unwrap_or_default();
    if display.is_empty() {
        bail!("the generated catalog has no products under $600");
    }

    output.heading(&format!("Products · {}", session.sort().display_name()));
    for product in session.view().page_window(display) {
        output.product_row(product);
    }
    output.pagination(&session.view().pagination(display.len()));

    let Some(chosen) = display.iter().find(|p| p.stock >= 3) else {
        bail!("no product with enough stock for the demo");
    };
    let id = chosen.id;
    let (size, color, other_color) = (
        chosen.sizes[0].clone(),
        chosen.colors[0].clone(),
        chosen.colors[1].clone(),
    );
    let stock = chosen.stock;

    // detail view resolves by id against the catalog, not from list state
    let product = session.product(id)?;
    output.product_detail(product);

    // an incomplete selection is blocked before it reaches the cart
    if let Err(err) = session.confirm_add(id) {
        output.warn(&format!("{err}"));
    }

    session.view_mut().select_size(size.clone());
    session.view_mut().select_color(color.clone());
    session.view_mut().set_quantity(1, stock);
    session.confirm_add(id)?;

    // same variant again: the line merges instead of duplicating
    session.view_mut().select_size(size.clone());
    session.view_mut().select_color(color.clone());
    session.view_mut().set_quantity(2, stock);
    session.confirm_add(id)?;

    // a different color is a distinct line
    session.view_mut().select_size(size.clone());
    session.view_mut().select_color(other_color.clone());
    session.confirm_add(id)?;

    output.cart(session.cart());
    output.info(&format!("Total: {}", session.cart().total()?));

    output.info("Removing the first line…");
    session.cart_mut().remove(0);
    output.cart(session.cart());
    output.info(&format!("Total: {}", session.cart().total()?));

    session.cart_mut().toggle_visibility(false);
    output.debug("cart drawer closed");

    // direct navigation to an unknown id surfaces an explicit error
    let missing = ProductId::new(u64::MAX);
    if let Err(err) = session.product(missing) {
        output.warn(&format!("{err}"));
    }

    Ok(())
}
