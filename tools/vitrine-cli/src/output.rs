//! Output formatting for the CLI.

use console::style;
use vitrine_commerce::prelude::*;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("{} {}", style("·").dim(), style(msg).dim());
        }
    }

    /// Print a section heading.
    pub fn heading(&self, msg: &str) {
        println!("\n{}", style(msg).bold());
    }

    /// Print one product row of the list view.
    pub fn product_row(&self, product: &Product) {
        println!(
            "  {:>4}  {:<36} {:>9}  {:<12} sales {:>5}  [{}]",
            style(product.id).dim(),
            product.title,
            style(product.price).red(),
            product.category.display_name(),
            product.sales,
            product.tags.join(", "),
        );
    }

    /// Print the product detail view.
    pub fn product_detail(&self, product: &Product) {
        self.heading(&product.title);
        println!("  price  {}", style(product.price).red().bold());
        println!("  sizes  {}", product.sizes.join(" / "));
        println!("  colors {}", product.colors.join(" / "));
        println!("  stock  {}", product.stock);
        if self.verbose {
            for image in &product.images {
                println!("  image  {}", style(image).dim());
            }
        }
    }

    /// Print the cart drawer.
    pub fn cart(&self, cart: &CartEngine) {
        self.heading(if cart.is_open() {
            "Cart (open)"
        } else {
            "Cart (closed)"
        });
        if cart.is_empty() {
            println!("  {}", style("empty").dim());
            return;
        }
        for (index, line) in cart.lines().iter().enumerate() {
            println!(
                "  [{}] {:<36} {} / {:<8} {:>9} x {}",
                index,
                line.title,
                line.color,
                line.size,
                style(line.price).red(),
                line.count,
            );
        }
    }

    /// Print the pagination summary line.
    pub fn pagination(&self, pagination: &Pagination) {
        println!(
            "  {} page {}/{} · items {}–{} of {}",
            style("»").dim(),
            pagination.page,
            pagination.total_pages,
            pagination.start_item(),
            pagination.end_item(),
            pagination.total,
        );
    }
}
