//! # Shopfront Store
//!
//! The storefront state engine: seed catalog, Store state container, and
//! the consumer surfaces (handle + snapshot).
//!
//! ## Module Organization
//! ```text
//! shopfront_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── catalog.rs      ◄─── Read-only seed catalog
//! ├── snapshot.rs     ◄─── StoreSnapshot (consumer read surface)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Store container + operations
//! │   ├── cart.rs     ◄─── CartEntry and Totals
//! │   └── handle.rs   ◄─── StoreHandle (consumer write surface)
//! └── bin/
//!     └── demo.rs     ◄─── Reference consumer walkthrough
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_store::{catalog, StoreHandle};
//!
//! // One handle per application, cloned into every consumer
//! let store = StoreHandle::new(&catalog::seed());
//!
//! let snapshot = store.add_to_cart(1)?;
//! assert_eq!(snapshot.cart.len(), 1);
//! assert_eq!(snapshot.totals.subtotal.cents(), 1000);
//!
//! let snapshot = store.clear_cart();
//! assert!(snapshot.cart_is_empty());
//! # Ok::<(), shopfront_store::StoreError>(())
//! ```

pub mod catalog;
pub mod snapshot;
pub mod state;

pub use snapshot::StoreSnapshot;
pub use state::{CartEntry, Store, StoreHandle, Totals};

// Re-export the core types consumers need alongside the store
pub use shopfront_core::{
    CatalogItem, Money, Product, ProductId, StoreError, StoreResult, TaxRate,
};
