//! The cart aggregation engine.

use crate::cart::{CartLine, VariantSelection};
use crate::catalog::Product;
use crate::error::StoreError;
use crate::money::Money;
use std::fmt;

/// A fire-and-forget cart notification.
///
/// Consumed by the presentation layer to show transient confirmations; not
/// part of core correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A line was created or its count increased.
    Added {
        title: String,
        /// Resulting count of the affected line.
        count: u32,
    },
    /// A line was deleted.
    Removed { title: String },
    /// The cart drawer was opened or closed.
    Visibility { open: bool },
}

type CartListener = Box<dyn Fn(&CartEvent) + Send + Sync>;

/// The stateful cart: an ordered sequence of lines plus a visibility flag.
///
/// Constructed explicitly per session and passed by reference to whichever
/// components need it; there is no process-wide cart. All mutations run to
/// completion before the next is processed, so the merge-or-append decision
/// in [`add`](CartEngine::add) is atomic with its effect.
#[derive(Default)]
pub struct CartEngine {
    lines: Vec<CartLine>,
    is_open: bool,
    listeners: Vec<CartListener>,
}

impl CartEngine {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for cart notifications.
    pub fn subscribe(&mut self, listener: impl Fn(&CartEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.count)).sum()
    }

    /// Add a selection of a product to the cart.
    ///
    /// Validates the selection against the product: the quantity must be at
    /// least 1 and within stock, and the size and color must be drawn from
    /// the product's own label sets. If a line with the same
    /// `(product_id, size, color)` key exists its count increases by the
    /// selected quantity; otherwise a new line is appended. Adding always
    /// reveals the cart and emits an [`CartEvent::Added`] notification.
    pub fn add(
        &mut self,
        product: &Product,
        selection: VariantSelection,
    ) -> Result<(), StoreError> {
        if selection.quantity == 0 {
            return Err(StoreError::InvalidQuantity(0));
        }
        if selection.quantity > product.stock {
            return Err(StoreError::InsufficientStock {
                requested: selection.quantity,
                available: product.stock,
            });
        }
        if !product.has_size(&selection.size) {
            return Err(StoreError::VariantMismatch {
                field: "size",
                value: selection.size,
            });
        }
        if !product.has_color(&selection.color) {
            return Err(StoreError::VariantMismatch {
                field: "color",
                value: selection.color,
            });
        }

        let existing = self
            .lines
            .iter()
            .position(|l| l.matches(product.id, &selection.size, &selection.color));
        let count = match existing {
            Some(index) => {
                let line = &mut self.lines[index];
                line.count = line
                    .count
                    .checked_add(selection.quantity)
                    .ok_or(StoreError::Overflow)?;
                line.count
            }
            None => {
                self.lines.push(CartLine::new(product, &selection));
                selection.quantity
            }
        };

        self.is_open = true;
        tracing::info!(
            product = %product.id,
            size = %selection.size,
            color = %selection.color,
            count,
            "added to cart"
        );
        self.emit(&CartEvent::Added {
            title: product.title.clone(),
            count,
        });
        Ok(())
    }

    /// Delete the line at `index` and return it.
    ///
    /// Subsequent indices shift down by one; callers must not cache indices
    /// across mutations.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Index provenance is always the
    /// currently rendered list, so an out-of-range index signals corrupted
    /// assumptions between view and cart state rather than a recoverable
    /// condition.
    pub fn remove(&mut self, index: usize) -> CartLine {
        let line = self.lines.remove(index);
        tracing::info!(product = %line.product_id, size = %line.size, color = %line.color, "removed from cart");
        self.emit(&CartEvent::Removed {
            title: line.title.clone(),
        });
        line
    }

    /// Set the cart drawer visibility. Idempotent.
    pub fn toggle_visibility(&mut self, open: bool) {
        self.is_open = open;
        self.emit(&CartEvent::Visibility { open });
    }

    /// Cart total, `Σ price × count` over all lines.
    ///
    /// Derived on demand and never cached, so it cannot go stale.
    pub fn total(&self) -> Result<Money, StoreError> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| {
            let line_total = line.line_total().ok_or(StoreError::Overflow)?;
            acc.try_add(line_total).ok_or(StoreError::Overflow)
        })
    }

    fn emit(&self, event: &CartEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for CartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartEngine")
            .field("lines", &self.lines)
            .field("is_open", &self.is_open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
