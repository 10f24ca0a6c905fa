//! # Cart Entries and Totals
//!
//! The cart line type and the derived totals triple.
//!
//! ## Consistency Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  products[i]  (source of truth)      cart[j]  (same product)        │
//! │  ─────────────────────────────       ──────────────────────────     │
//! │  in_cart = true                 ◄──► entry exists                   │
//! │  count   = n                    ◄──► entry.count = n                │
//! │  total   = n × price            ◄──► entry.line_total() = n × price │
//! │                                                                     │
//! │  The Store updates both sides inside a single operation, so a      │
//! │  snapshot can never observe them disagreeing.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::{Money, Product, ProductId, TaxRate, CART_TAX_RATE_BPS};

/// A line in the shopping cart.
///
/// `title` and `unit_price_cents` are frozen copies taken when the product
/// enters the cart, so the line renders consistently for the rest of the
/// session. The line total is computed, never stored, which keeps
/// `line_total == count × unit_price` true by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product title at time of adding (frozen).
    pub title: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart, always >= 1.
    pub count: i64,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Creates a cart line from a product that just entered the cart.
    pub fn from_product(product: &Product) -> Self {
        CartEntry {
            product_id: product.id,
            title: product.title.clone(),
            unit_price_cents: product.price_cents,
            count: product.count,
            added_at: Utc::now(),
        }
    }

    /// Sets the quantity for this line.
    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    /// Line total in cents (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.count
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

/// Derived cart totals.
///
/// Never settable from outside; the Store recomputes this after every
/// cart-affecting operation via [`Totals::compute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of all line totals.
    pub subtotal: Money,

    /// 10% of the subtotal, rounded to the nearest cent.
    pub tax: Money,

    /// Subtotal plus tax.
    pub total: Money,
}

impl Totals {
    /// Computes totals from the current cart collection.
    ///
    /// Pure function of the entries plus the fixed tax rate; an empty cart
    /// yields all zeros.
    pub fn compute(entries: &[CartEntry]) -> Self {
        let subtotal: Money = entries.iter().map(CartEntry::line_total).sum();
        let tax = subtotal.calculate_tax(TaxRate::from_bps(CART_TAX_RATE_BPS));
        Totals {
            subtotal,
            tax,
            total: subtotal + tax,
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

    fn entry(id: ProductId, unit_price_cents: i64, count: i64) -> CartEntry {
        let item = CatalogItem {
            id,
            title: format!("Product {}", id),
            image: format!("img/product-{}.png", id),
            price_cents: unit_price_cents,
            company: "acme".to_string(),
            description: String::new(),
            in_stock: true,
        };
        let mut product = Product::from_catalog(&item);
        product.enter_cart();
        product.set_count(count);
        CartEntry::from_product(&product)
    }

    #[test]
    fn test_line_total_tracks_count() {
        let mut line = entry(1, 999, 2);
        assert_eq!(line.line_total_cents(), 1998);

        line.set_count(5);
        assert_eq!(line.line_total_cents(), 4995);
    }

    #[test]
    fn test_totals_empty_cart_is_zero() {
        let totals = Totals::compute(&[]);
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_totals_single_line() {
        // $10.00 × 1 → subtotal $10.00, tax $1.00, total $11.00
        let totals = Totals::compute(&[entry(1, 1000, 1)]);
        assert_eq!(totals.subtotal.cents(), 1000);
        assert_eq!(totals.tax.cents(), 100);
        assert_eq!(totals.total.cents(), 1100);
    }

    #[test]
    fn test_totals_sum_multiple_lines() {
        let totals = Totals::compute(&[entry(1, 1000, 2), entry(2, 350, 3)]);
        assert_eq!(totals.subtotal.cents(), 3050);
        assert_eq!(totals.tax.cents(), 305);
        assert_eq!(totals.total.cents(), 3355);
    }

    #[test]
    fn test_totals_tax_rounds_half_cent_up() {
        // subtotal $10.05 → 10% = $1.005 → $1.01
        let totals = Totals::compute(&[entry(1, 1005, 1)]);
        assert_eq!(totals.tax.cents(), 101);
        assert_eq!(totals.total.cents(), 1106);
    }
}
