//! # Store Handle
//!
//! The shared handle consumers hold instead of an ambient global.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`:
//! 1. Multiple consumers may hold clones of the handle
//! 2. Only one operation touches the store at a time
//! 3. An operation and its totals recomputation happen under one lock hold
//!
//! ## Handle Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Application start                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreHandle::new(&catalog::seed())                                 │
//! │       │                                                             │
//! │       ├── clone ──► product grid consumer                           │
//! │       ├── clone ──► cart list consumer                              │
//! │       └── clone ──► modal consumer                                  │
//! │                                                                     │
//! │  Every write returns the fresh StoreSnapshot, so each consumer     │
//! │  re-renders from the latest state without a second read.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use shopfront_core::{CatalogItem, Product, ProductId, StoreResult};
use tracing::debug;

use crate::snapshot::StoreSnapshot;
use crate::state::store::Store;

/// Shared, thread-safe handle to the Store.
///
/// Constructed once at application start and passed by clone to every
/// consumer. Cloning shares the same underlying store.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    store: Arc<Mutex<Store>>,
}

impl StoreHandle {
    /// Creates a handle over a store seeded from the given catalog.
    pub fn new(catalog: &[CatalogItem]) -> Self {
        StoreHandle {
            store: Arc::new(Mutex::new(Store::new(catalog))),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = handle.with_store(|store| store.cart().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_store_mut(|store| store.add_to_cart(1))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Current full-state snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        debug!("snapshot");
        self.with_store(Store::snapshot)
    }

    /// Looks up a product by id and returns a copy.
    pub fn get_product(&self, id: ProductId) -> StoreResult<Product> {
        debug!(product_id = id, "get_product");
        self.with_store(|store| store.get_item(id).cloned())
    }

    // =========================================================================
    // Write Operations
    // =========================================================================
    // Each wrapper runs the operation and snapshots under a single lock
    // hold, then returns the snapshot for the consumer to render.

    /// Sets the detail view product.
    pub fn set_detail(&self, id: ProductId) -> StoreResult<StoreSnapshot> {
        debug!(product_id = id, "set_detail");
        self.with_store_mut(|store| {
            store.set_detail(id)?;
            Ok(store.snapshot())
        })
    }

    /// Adds a product to the cart.
    pub fn add_to_cart(&self, id: ProductId) -> StoreResult<StoreSnapshot> {
        debug!(product_id = id, "add_to_cart");
        self.with_store_mut(|store| {
            store.add_to_cart(id)?;
            Ok(store.snapshot())
        })
    }

    /// Opens the quick-view modal on a product.
    pub fn open_modal(&self, id: ProductId) -> StoreResult<StoreSnapshot> {
        debug!(product_id = id, "open_modal");
        self.with_store_mut(|store| {
            store.open_modal(id)?;
            Ok(store.snapshot())
        })
    }

    /// Closes the quick-view modal.
    pub fn close_modal(&self) -> StoreSnapshot {
        debug!("close_modal");
        self.with_store_mut(|store| {
            store.close_modal();
            store.snapshot()
        })
    }

    /// Increases a cart line's quantity by one.
    pub fn increment(&self, id: ProductId) -> StoreResult<StoreSnapshot> {
        debug!(product_id = id, "increment");
        self.with_store_mut(|store| {
            store.increment(id)?;
            Ok(store.snapshot())
        })
    }

    /// Decreases a cart line's quantity by one, removing the line at zero.
    pub fn decrement(&self, id: ProductId) -> StoreResult<StoreSnapshot> {
        debug!(product_id = id, "decrement");
        self.with_store_mut(|store| {
            store.decrement(id)?;
            Ok(store.snapshot())
        })
    }

    /// Removes a product from the cart.
    pub fn remove_item(&self, id: ProductId) -> StoreResult<StoreSnapshot> {
        debug!(product_id = id, "remove_item");
        self.with_store_mut(|store| {
            store.remove_item(id)?;
            Ok(store.snapshot())
        })
    }

    /// Empties the cart and resets every product record.
    pub fn clear_cart(&self) -> StoreSnapshot {
        debug!("clear_cart");
        self.with_store_mut(|store| {
            store.clear_cart();
            store.snapshot()
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use shopfront_core::StoreError;

    #[test]
    fn test_operations_return_fresh_snapshots() {
        let handle = StoreHandle::new(&catalog::seed());

        let snapshot = handle.add_to_cart(1).unwrap();
        assert_eq!(snapshot.cart.len(), 1);
        assert_eq!(snapshot.totals.subtotal.cents(), 1000);

        let snapshot = handle.increment(1).unwrap();
        assert_eq!(snapshot.cart[0].count, 2);
        assert_eq!(snapshot.totals.total.cents(), 2200);

        let snapshot = handle.clear_cart();
        assert!(snapshot.cart_is_empty());
        assert!(snapshot.totals.total.is_zero());
    }

    #[test]
    fn test_clones_share_the_same_store() {
        let handle = StoreHandle::new(&catalog::seed());
        let other = handle.clone();

        handle.add_to_cart(2).unwrap();

        let snapshot = other.snapshot();
        assert_eq!(snapshot.cart.len(), 1);
        assert_eq!(snapshot.cart[0].product_id, 2);
    }

    #[test]
    fn test_errors_pass_through() {
        let handle = StoreHandle::new(&catalog::seed());
        assert_eq!(
            handle.add_to_cart(999).unwrap_err(),
            StoreError::ProductNotFound(999)
        );
        assert_eq!(handle.increment(1).unwrap_err(), StoreError::NotInCart(1));
    }

    #[test]
    fn test_concurrent_operations_serialize() {
        let handle = StoreHandle::new(&catalog::seed());
        let mut workers = Vec::new();

        for id in 1..=4 {
            let handle = handle.clone();
            workers.push(std::thread::spawn(move || {
                handle.add_to_cart(id).unwrap();
                handle.increment(id).unwrap();
            }));
        }
        for worker in workers {
            worker.join().unwrap();
        }

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.cart.len(), 4);
        assert_eq!(snapshot.cart_quantity(), 8);
        assert_eq!(
            snapshot.totals,
            crate::state::cart::Totals::compute(&snapshot.cart)
        );
    }
}
