//! Checkout failure surface.

use thiserror::Error;

use storefront_catalog::ProductCode;

/// Result type returned by the checkout service.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Failures raised while fulfilling a cart.
///
/// Raised failures propagate to the caller of `buy`; lines committed before
/// the failure stay committed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A cart line requested more units than the product has available.
    #[error("insufficient stock for product '{code}': requested {requested}, available {available}")]
    InsufficientStock {
        code: ProductCode,
        requested: i64,
        available: i64,
    },

    /// A cart line referenced a code the store does not know.
    #[error("unknown product '{code}'")]
    UnknownProduct { code: ProductCode },
}
