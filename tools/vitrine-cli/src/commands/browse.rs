//! The `vitrine browse` command.

use anyhow::{anyhow, Result};
use clap::Args;
use std::time::Duration;

use vitrine_commerce::prelude::*;

use crate::config::CliConfig;
use crate::mock::MockCatalog;
use crate::output::Output;

#[derive(Args)]
pub struct BrowseArgs {
    /// Restrict to a category (repeatable); none means all categories
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Minimum price in dollars, inclusive
    #[arg(long, default_value_t = 0.0)]
    pub min: f64,

    /// Maximum price in dollars, inclusive
    #[arg(long, default_value_t = 1000.0)]
    pub max: f64,

    /// Sort order: default, price-asc, price-desc, sales
    #[arg(long, default_value = "default")]
    pub sort: String,

    /// Page to display (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Products per page (defaults to the configured page size)
    #[arg(long)]
    pub per_page: Option<usize>,
}

pub async fn run(args: BrowseArgs, config: &CliConfig, output: &Output) -> Result<()> {
    let categories = args
        .categories
        .iter()
        .map(|name| {
            Category::from_str(name).ok_or_else(|| anyhow!("unknown category: {name}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let sort =
        SortKey::from_str(&args.sort).ok_or_else(|| anyhow!("unknown sort: {}", args.sort))?;

    let source = MockCatalog::new(
        config.catalog.count,
        config.catalog.seed,
        Duration::from_millis(config.catalog.latency_ms),
    );

    output.info("Fetching catalog…");
    let catalog = source.fetch().await?;
    output.debug(&format!("catalog resolved with {} products", catalog.len()));

    let mut session = StoreSession::new(args.per_page.unwrap_or(config.display.per_page));
    session.supply(catalog);
    session.set_filter(
        FilterCriteria::new()
            .with_categories(categories)
            .with_price(PriceRange::new(
                Money::from_decimal(args.min),
                Money::from_decimal(args.max),
            )),
    );
    session.set_sort(sort);
    session.view_mut().set_page(args.page);

    // supply() above moved the session out of the loading state
    let display = session.display().unwrap_or_default();

    if display.is_empty() {
        output.warn("No products matched the current filters");
        return Ok(());
    }

    output.heading(&format!(
        "Products · {}",
        session.sort().display_name()
    ));
    for product in session.view().page_window(display) {
        output.product_row(product);
    }
    output.pagination(&session.view().pagination(display.len()));

    Ok(())
}
