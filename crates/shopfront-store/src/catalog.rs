//! # Seed Catalog
//!
//! The built-in read-only catalog the Store is loaded from.
//!
//! ## Catalog Contract
//! - Ids are unique, stable small integers
//! - The first entry is the designated default detail product
//! - The Store copies every record at construction; the seed itself is
//!   never mutated
//!
//! A deployment with a real catalog source would replace [`seed`] and keep
//! the same `CatalogItem` shape.

use shopfront_core::{CatalogItem, ProductId};

/// One seed row: (id, title, image, price_cents, company, description, in_stock)
type CatalogRow = (ProductId, &'static str, &'static str, i64, &'static str, &'static str, bool);

/// The built-in device catalog.
const CATALOG_ROWS: &[CatalogRow] = &[
    (
        1,
        "Google Pixel - Black",
        "img/product-1.png",
        1000,
        "google",
        "5.0\" AMOLED display, 32 GB, unlocked. The compact flagship.",
        true,
    ),
    (
        2,
        "Samsung Galaxy S7",
        "img/product-2.png",
        1600,
        "samsung",
        "5.1\" Quad HD display with water resistance and expandable storage.",
        true,
    ),
    (
        3,
        "HTC 10 - Black",
        "img/product-3.png",
        800,
        "htc",
        "Aluminum unibody with a 12 MP UltraPixel camera.",
        true,
    ),
    (
        4,
        "HTC 10 - White",
        "img/product-4.png",
        1800,
        "htc",
        "The white edition of the HTC 10, 64 GB.",
        true,
    ),
    (
        5,
        "Pixel XL - White",
        "img/product-5.png",
        2400,
        "google",
        "5.5\" Quad HD display, 128 GB, the large-format Pixel.",
        true,
    ),
    (
        6,
        "Nexus 6P",
        "img/product-6.png",
        1700,
        "google",
        "5.7\" WQHD AMOLED display in an all-metal body.",
        true,
    ),
    (
        7,
        "Apple iPhone 7",
        "img/product-7.png",
        3000,
        "apple",
        "4.7\" Retina HD display, 128 GB, jet black.",
        true,
    ),
    (
        8,
        "Samsung Galaxy S8",
        "img/product-8.png",
        200,
        "samsung",
        "Open-box unit, heavy cosmetic wear. Sold as-is.",
        false,
    ),
];

/// Returns the seed catalog as owned records.
///
/// ## Example
/// ```rust
/// let catalog = shopfront_store::catalog::seed();
/// assert_eq!(catalog.first().map(|item| item.id), Some(1));
/// ```
pub fn seed() -> Vec<CatalogItem> {
    CATALOG_ROWS
        .iter()
        .map(
            |&(id, title, image, price_cents, company, description, in_stock)| CatalogItem {
                id,
                title: title.to_string(),
                image: image.to_string(),
                price_cents,
                company: company.to_string(),
                description: description.to_string(),
                in_stock,
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = seed();
        let ids: HashSet<ProductId> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_first_entry_is_default_detail_product() {
        let catalog = seed();
        assert_eq!(catalog[0].id, 1);
        assert_eq!(catalog[0].title, "Google Pixel - Black");
    }

    #[test]
    fn test_seed_prices_are_positive() {
        for item in seed() {
            assert!(item.price_cents > 0, "item {} has no price", item.id);
        }
    }
}
