//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Store operation on a bad id                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError::ProductNotFound / NotInCart / AlreadyInCart            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Consumer surfaces the message; state is left untouched             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are enum variants with context (the offending id), never strings.
//! Every failed operation leaves the Store exactly as it was.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Store Error
// =============================================================================

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The id does not exist in the products collection.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A cart operation referenced a product with no cart entry.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// `add_to_cart` on a product whose `in_cart` flag is already set.
    ///
    /// Surfaced as an explicit error (rather than a silent no-op) so a
    /// consumer can disable its add control.
    #[error("product {0} is already in the cart")]
    AlreadyInCart(ProductId),

    /// `increment` would push a line past the per-item quantity bound.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
