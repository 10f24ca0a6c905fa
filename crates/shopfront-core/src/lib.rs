//! # shopfront-core: Pure Domain Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains the domain types
//! and money math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Shopfront Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering Layer (external)                 │   │
//! │  │    Product Grid ──► Detail Modal ──► Cart List              │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ snapshots + operations              │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                      shopfront-store                        │   │
//! │  │    Store, StoreHandle, StoreSnapshot, seed catalog          │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ shopfront-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐              │   │
//! │  │   │   types   │  │   money   │  │   error   │              │   │
//! │  │   │  Product  │  │   Money   │  │StoreError │              │   │
//! │  │   │  TaxRate  │  │  TaxCalc  │  │           │              │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘              │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CatalogItem, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::money::Money;
//! use shopfront_core::types::TaxRate;
//! use shopfront_core::CART_TAX_RATE_BPS;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(1000); // $10.00
//!
//! // Cart tax is a fixed 10%
//! let rate = TaxRate::from_bps(CART_TAX_RATE_BPS);
//! let tax = subtotal.calculate_tax(rate);
//!
//! assert_eq!(tax.cents(), 100); // $1.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use error::{StoreError, StoreResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cart tax rate in basis points (1000 = 10%).
///
/// Applied to the cart subtotal on every totals recomputation and rounded
/// to the nearest cent.
pub const CART_TAX_RATE_BPS: u32 = 1000;

/// Maximum quantity of a single item in the cart.
///
/// `increment` refuses to push a line past this bound.
pub const MAX_ITEM_QUANTITY: i64 = 999;
