//! Customers domain module.
//!
//! This crate contains the customer entity used to associate carts,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod customer;

pub use customer::{Customer, CustomerId};
