//! Checkout domain module.
//!
//! This crate contains the cart and the purchase workflow: a [`Cart`]
//! accumulates requested product quantities for one customer, and the
//! [`CheckoutService`] fulfills carts against an injected
//! [`storefront_inventory::ProductStore`], committing each fulfilled line
//! independently (no cart-wide transaction).

pub mod cart;
pub mod error;
pub mod service;

pub use cart::Cart;
pub use error::{CheckoutError, CheckoutResult};
pub use service::CheckoutService;
