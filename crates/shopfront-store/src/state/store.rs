//! # Store State
//!
//! The single state-owning unit: catalog mirror, cart, selection, totals.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                 │
//! │                                                                     │
//! │  Consumer Action           Operation              State Change      │
//! │  ───────────────           ─────────              ────────────      │
//! │                                                                     │
//! │  Click product card ─────► set_detail(id) ──────► detail_product    │
//! │                                                                     │
//! │  Click cart button ──────► add_to_cart(id) ─────► products + cart   │
//! │                                                                     │
//! │  Click +/- in cart ──────► increment(id) ───────► count, totals     │
//! │                            decrement(id)                            │
//! │                                                                     │
//! │  Click remove ───────────► remove_item(id) ─────► cart, products    │
//! │                                                                     │
//! │  Click clear ────────────► clear_cart() ────────► everything reset  │
//! │                                                                     │
//! │  Hover quick-view ───────► open_modal(id) ──────► modal state       │
//! │                                                                     │
//! │  NOTE: every cart-affecting operation ends by recomputing totals,  │
//! │        inside the same &mut borrow, so derived state always        │
//! │        observes the just-updated cart.                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::{
    CatalogItem, Product, ProductId, StoreError, StoreResult, MAX_ITEM_QUANTITY,
};

use crate::snapshot::StoreSnapshot;
use crate::state::cart::{CartEntry, Totals};

/// The storefront state container.
///
/// Constructed once at application start by copying the external catalog;
/// all mutation goes through the operations below. Failed operations leave
/// the state untouched.
///
/// ## Invariants
/// - A product has a cart entry if and only if `in_cart == true` and
///   `count >= 1`
/// - `entry.count == product.count` for every cart entry
/// - `totals` always reflects the current cart collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Working copy of the catalog, mutated in place by cart operations.
    products: Vec<Product>,

    /// Product shown in the detail view. Defaults to the first catalog
    /// entry; `None` only when the catalog is empty.
    detail_product: Option<Product>,

    /// The cart collection, in insertion order.
    cart: Vec<CartEntry>,

    /// Whether the quick-view modal is open.
    modal_open: bool,

    /// Product shown in the quick-view modal. Retained after the modal
    /// closes so a re-open without a new selection shows the same product.
    modal_product: Option<Product>,

    /// Derived totals, recomputed after every cart mutation.
    totals: Totals,
}

impl Store {
    /// Builds a store from the catalog source.
    ///
    /// Every record is copied into the working collection with default
    /// cart state; the catalog itself is never touched again.
    pub fn new(catalog: &[CatalogItem]) -> Self {
        let products: Vec<Product> = catalog.iter().map(Product::from_catalog).collect();
        let detail_product = products.first().cloned();

        Store {
            modal_product: detail_product.clone(),
            detail_product,
            products,
            cart: Vec::new(),
            modal_open: false,
            totals: Totals::default(),
        }
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// The working products collection.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The cart collection, in insertion order.
    pub fn cart(&self) -> &[CartEntry] {
        &self.cart
    }

    /// Current derived totals.
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// The product currently shown in the detail view.
    pub fn detail_product(&self) -> Option<&Product> {
        self.detail_product.as_ref()
    }

    /// Whether the quick-view modal is open.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// The product currently bound to the quick-view modal.
    pub fn modal_product(&self) -> Option<&Product> {
        self.modal_product.as_ref()
    }

    /// Looks up a product by id.
    ///
    /// ## Errors
    /// `ProductNotFound` when the id is not in the products collection.
    pub fn get_item(&self, id: ProductId) -> StoreResult<&Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }

    /// Full-state copy for consumers.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::from(self)
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Sets the detail view to the product with the given id.
    pub fn set_detail(&mut self, id: ProductId) -> StoreResult<()> {
        self.detail_product = Some(self.get_item(id)?.clone());
        Ok(())
    }

    /// Binds the quick-view modal to the given product and opens it.
    pub fn open_modal(&mut self, id: ProductId) -> StoreResult<()> {
        self.modal_product = Some(self.get_item(id)?.clone());
        self.modal_open = true;
        Ok(())
    }

    /// Closes the quick-view modal. The bound product is retained.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a product to the cart with quantity 1.
    ///
    /// ## Behavior
    /// - Marks the product record `in_cart = true, count = 1, total = price`
    /// - Appends a cart entry with the frozen title and unit price
    /// - Recomputes totals
    ///
    /// ## Errors
    /// - `ProductNotFound` for an unknown id
    /// - `AlreadyInCart` when the product already has a cart entry; the
    ///   operation is rejected rather than duplicating the line
    pub fn add_to_cart(&mut self, id: ProductId) -> StoreResult<()> {
        let product = self.product_mut(id)?;
        if product.in_cart {
            return Err(StoreError::AlreadyInCart(id));
        }

        product.enter_cart();
        let entry = CartEntry::from_product(product);
        self.cart.push(entry);
        self.recompute_totals();
        Ok(())
    }

    /// Increases a cart line's quantity by one.
    ///
    /// ## Errors
    /// - `NotInCart` when the product has no cart entry
    /// - `QuantityTooLarge` past `MAX_ITEM_QUANTITY`
    pub fn increment(&mut self, id: ProductId) -> StoreResult<()> {
        let requested = self.entry_mut(id)?.count + 1;
        if requested > MAX_ITEM_QUANTITY {
            return Err(StoreError::QuantityTooLarge {
                requested,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.set_cart_count(id, requested)?;
        self.recompute_totals();
        Ok(())
    }

    /// Decreases a cart line's quantity by one.
    ///
    /// ## Behavior
    /// At quantity zero the line is removed outright, exactly as
    /// [`Store::remove_item`] would.
    pub fn decrement(&mut self, id: ProductId) -> StoreResult<()> {
        let remaining = self.entry_mut(id)?.count - 1;
        if remaining == 0 {
            return self.remove_item(id);
        }

        self.set_cart_count(id, remaining)?;
        self.recompute_totals();
        Ok(())
    }

    /// Removes a product from the cart.
    ///
    /// ## Behavior
    /// - Drops the cart entry
    /// - Restores the product record to its not-in-cart defaults
    /// - Recomputes totals
    ///
    /// ## Errors
    /// `NotInCart` when the product has no cart entry.
    pub fn remove_item(&mut self, id: ProductId) -> StoreResult<()> {
        if !self.cart.iter().any(|entry| entry.product_id == id) {
            return Err(StoreError::NotInCart(id));
        }

        self.cart.retain(|entry| entry.product_id != id);
        self.product_mut(id)?.leave_cart();
        self.recompute_totals();
        Ok(())
    }

    /// Empties the cart and restores every product record to its defaults.
    ///
    /// Totals recompute to zero. Infallible.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        for product in &mut self.products {
            product.leave_cart();
        }
        self.recompute_totals();
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn product_mut(&mut self, id: ProductId) -> StoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }

    fn entry_mut(&mut self, id: ProductId) -> StoreResult<&mut CartEntry> {
        self.cart
            .iter_mut()
            .find(|entry| entry.product_id == id)
            .ok_or(StoreError::NotInCart(id))
    }

    /// Writes a new quantity to both sides of the consistency contract:
    /// the cart entry and the product record.
    fn set_cart_count(&mut self, id: ProductId, count: i64) -> StoreResult<()> {
        self.entry_mut(id)?.set_count(count);
        self.product_mut(id)?.set_count(count);
        Ok(())
    }

    /// The totals recomputation step, run after every cart mutation.
    fn recompute_totals(&mut self) {
        self.totals = Totals::compute(&self.cart);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
