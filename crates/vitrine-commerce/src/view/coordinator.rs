//! View coordination: draft selection and the pagination cursor.

use crate::browse::Pagination;
use crate::cart::{CartEngine, VariantSelection};
use crate::catalog::Product;
use crate::error::StoreError;

/// The in-progress selection for the product currently being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSelection {
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: u32,
}

impl Default for DraftSelection {
    fn default() -> Self {
        Self {
            size: None,
            color: None,
            quantity: 1,
        }
    }
}

impl DraftSelection {
    /// Check if both size and color have been chosen.
    pub fn is_complete(&self) -> bool {
        self.size.is_some() && self.color.is_some()
    }
}

/// Thin glue between the display list and the cart.
///
/// Owns the UI-selection scratch state fed into [`CartEngine::add`] and the
/// pagination cursor applied to the query pipeline's output.
#[derive(Debug, Clone)]
pub struct ViewCoordinator {
    draft: DraftSelection,
    page: usize,
    per_page: usize,
}

impl ViewCoordinator {
    /// Create a coordinator on the first page with the given page size.
    pub fn new(per_page: usize) -> Self {
        Self {
            draft: DraftSelection::default(),
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// The current draft selection.
    pub fn draft(&self) -> &DraftSelection {
        &self.draft
    }

    /// Record a size choice.
    pub fn select_size(&mut self, size: impl Into<String>) {
        self.draft.size = Some(size.into());
    }

    /// Record a color choice.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.draft.color = Some(color.into());
    }

    /// Set the draft quantity, clamped to `[1, stock]`.
    ///
    /// A zero-stock product still clamps to 1; the add itself is rejected by
    /// the cart engine's stock check.
    pub fn set_quantity(&mut self, quantity: u32, stock: u32) {
        self.draft.quantity = quantity.clamp(1, stock.max(1));
    }

    /// Clear the draft back to its initial state.
    pub fn reset_draft(&mut self) {
        self.draft = DraftSelection::default();
    }

    /// Validate the draft and delegate to the cart engine.
    ///
    /// Fails with `IncompleteSelection` when size or color is unset. On a
    /// successful add the draft is reset for the next purchase.
    pub fn confirm_add(
        &mut self,
        cart: &mut CartEngine,
        product: &Product,
    ) -> Result<(), StoreError> {
        let size = self
            .draft
            .size
            .clone()
            .ok_or(StoreError::IncompleteSelection { missing: "size" })?;
        let color = self
            .draft
            .color
            .clone()
            .ok_or(StoreError::IncompleteSelection { missing: "color" })?;

        cart.add(product, VariantSelection::new(size, color, self.draft.quantity))?;
        self.reset_draft();
        Ok(())
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Move the pagination cursor.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Pagination info for a display list of `total` items.
    pub fn pagination(&self, total: usize) -> Pagination {
        Pagination::new(self.page, self.per_page, total)
    }

    /// Slice the current page's window out of the display list.
    pub fn page_window<'a>(&self, items: &'a [Product]) -> &'a [Product] {
        self.pagination(items.len()).window(items)
    }
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::new(12)
    }
}
