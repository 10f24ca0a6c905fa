//! # Store Snapshot
//!
//! The consumer-facing read surface: a serializable copy of the full Store
//! state, handed out on every state change so a rendering layer can redraw
//! from the latest values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  StoreHandle operation                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Store mutates ──► totals recompute ──► StoreSnapshot::from(&store) │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Consumer renders grid / cart / modal from the snapshot             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::Product;

use crate::state::cart::{CartEntry, Totals};
use crate::state::Store;

/// A point-in-time copy of the full Store state.
///
/// Snapshots are plain data: cloning or holding one never blocks the Store,
/// and a snapshot's totals always agree with its cart because both were
/// copied under the same lock hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// The working products collection, in catalog order.
    pub products: Vec<Product>,

    /// Product currently shown in the detail view.
    pub detail_product: Option<Product>,

    /// The cart collection, in insertion order.
    pub cart: Vec<CartEntry>,

    /// Whether the quick-view modal is open.
    pub modal_open: bool,

    /// Product bound to the quick-view modal.
    pub modal_product: Option<Product>,

    /// Derived totals for the cart.
    pub totals: Totals,
}

impl StoreSnapshot {
    /// Total quantity across all cart lines (for a cart badge).
    pub fn cart_quantity(&self) -> i64 {
        self.cart.iter().map(|entry| entry.count).sum()
    }

    /// Whether the cart is empty.
    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

impl From<&Store> for StoreSnapshot {
    fn from(store: &Store) -> Self {
        StoreSnapshot {
            products: store.products().to_vec(),
            detail_product: store.detail_product().cloned(),
            cart: store.cart().to_vec(),
            modal_open: store.modal_open(),
            modal_product: store.modal_product().cloned(),
            totals: store.totals(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::CatalogItem;

    fn snapshot_with_one_line() -> StoreSnapshot {
        let catalog = vec![CatalogItem {
            id: 1,
            title: "Google Pixel - Black".to_string(),
            image: "img/product-1.png".to_string(),
            price_cents: 1000,
            company: "google".to_string(),
            description: String::new(),
            in_stock: true,
        }];
        let mut store = Store::new(&catalog);
        store.add_to_cart(1).unwrap();
        store.increment(1).unwrap();
        store.snapshot()
    }

    #[test]
    fn test_snapshot_copies_state() {
        let snapshot = snapshot_with_one_line();

        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.cart.len(), 1);
        assert_eq!(snapshot.cart_quantity(), 2);
        assert!(!snapshot.cart_is_empty());
        assert_eq!(snapshot.totals.subtotal.cents(), 2000);
        assert_eq!(snapshot.detail_product.as_ref().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_snapshot_totals_agree_with_cart() {
        let snapshot = snapshot_with_one_line();
        let recomputed = Totals::compute(&snapshot.cart);
        assert_eq!(snapshot.totals, recomputed);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = snapshot_with_one_line();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json.get("detailProduct").is_some());
        assert!(json.get("modalOpen").is_some());
        assert!(json["products"][0].get("inCart").is_some());
        assert!(json["cart"][0].get("unitPriceCents").is_some());
        assert_eq!(json["totals"]["subtotal"], 2000);
    }
}
