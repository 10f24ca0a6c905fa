//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────┐      ┌──────────────────┐                    │
//! │  │   CatalogItem    │      │     Product      │                    │
//! │  │  ──────────────  │ copy │  ──────────────  │                    │
//! │  │  id (ProductId)  │─────►│  catalog fields  │                    │
//! │  │  title           │      │  + in_cart       │                    │
//! │  │  price_cents     │      │  + count         │                    │
//! │  │  read-only seed  │      │  + total_cents   │                    │
//! │  └──────────────────┘      └──────────────────┘                    │
//! │                                                                     │
//! │  ┌──────────────────┐                                              │
//! │  │     TaxRate      │                                              │
//! │  │  ──────────────  │                                              │
//! │  │  bps (u32)       │                                              │
//! │  │  1000 = 10%      │                                              │
//! │  └──────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is the read-only source; the Store copies every item into a
//! working `Product` at startup and mutates only the copies.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Stable, unique product identifier.
///
/// Catalog ids are small integers assigned by the catalog source; they never
/// change for the lifetime of a session.
pub type ProductId = u32;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A read-only record from the external catalog source.
///
/// Consumed once at Store construction; there is no write path back to the
/// catalog. `in_stock` is a display hint, not an inventory count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique identifier, stable across the session.
    pub id: ProductId,

    /// Display name shown in the grid and the detail modal.
    pub title: String,

    /// Image asset path or URL.
    pub image: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Manufacturer / brand.
    pub company: String,

    /// Long description for the detail view.
    pub description: String,

    /// Whether the item is currently purchasable.
    pub in_stock: bool,
}

impl CatalogItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A working product record inside the Store.
///
/// Carries every catalog field plus the cart mirror fields. The mirror
/// fields are the source of truth for cart membership:
///
/// - not in cart: `in_cart == false`, `count == 0`, `total_cents == 0`
/// - in cart:     `in_cart == true`,  `count >= 1`, `total_cents == count × price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price_cents: i64,
    pub company: String,
    pub description: String,
    pub in_stock: bool,

    /// Whether this product currently has a cart entry.
    pub in_cart: bool,

    /// Quantity in the cart (0 when not in cart).
    pub count: i64,

    /// Line total in cents (`count × price_cents`, 0 when not in cart).
    pub total_cents: i64,
}

impl Product {
    /// Copies a catalog record into a working product with default cart state.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Product {
            id: item.id,
            title: item.title.clone(),
            image: item.image.clone(),
            price_cents: item.price_cents,
            company: item.company.clone(),
            description: item.description.clone(),
            in_stock: item.in_stock,
            in_cart: false,
            count: 0,
            total_cents: 0,
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line total as a Money type.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Puts the record into its just-added cart state (count 1, total = price).
    pub fn enter_cart(&mut self) {
        self.in_cart = true;
        self.count = 1;
        self.total_cents = self.price_cents;
    }

    /// Sets the cart quantity and keeps the line total consistent.
    pub fn set_count(&mut self, count: i64) {
        self.count = count;
        self.total_cents = self.price_cents * count;
    }

    /// Restores the default not-in-cart state.
    pub fn leave_cart(&mut self) {
        self.in_cart = false;
        self.count = 0;
        self.total_cents = 0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_item() -> CatalogItem {
        CatalogItem {
            id: 1,
            title: "Google Pixel - Black".to_string(),
            image: "img/product-1.png".to_string(),
            price_cents: 1000,
            company: "Google".to_string(),
            description: "Compact flagship phone".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_product_from_catalog_defaults() {
        let product = Product::from_catalog(&catalog_item());
        assert_eq!(product.id, 1);
        assert_eq!(product.price().cents(), 1000);
        assert!(!product.in_cart);
        assert_eq!(product.count, 0);
        assert_eq!(product.total_cents, 0);
    }

    #[test]
    fn test_enter_and_leave_cart_round_trip() {
        let mut product = Product::from_catalog(&catalog_item());
        let pristine = product.clone();

        product.enter_cart();
        assert!(product.in_cart);
        assert_eq!(product.count, 1);
        assert_eq!(product.total_cents, product.price_cents);

        product.leave_cart();
        assert_eq!(product, pristine);
    }

    #[test]
    fn test_set_count_keeps_total_consistent() {
        let mut product = Product::from_catalog(&catalog_item());
        product.enter_cart();

        product.set_count(3);
        assert_eq!(product.total_cents, 3000);

        product.set_count(2);
        assert_eq!(product.total_cents, 2000);
    }
}
