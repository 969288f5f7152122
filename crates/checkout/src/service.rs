use std::collections::HashMap;

use tracing::{debug, warn};

use storefront_catalog::{Product, ProductCode};
use storefront_customers::{Customer, CustomerId};
use storefront_inventory::ProductStore;

use crate::cart::Cart;
use crate::error::{CheckoutError, CheckoutResult};

/// Purchase workflow over an injected product store.
///
/// Owns one cart per customer and fulfills carts against the store's
/// authoritative product records. Single-threaded and synchronous; the
/// service issues at most one `save` per product per `buy` call and leaves
/// cross-caller consistency to the store.
pub struct CheckoutService<S: ProductStore> {
    store: S,
    carts: HashMap<CustomerId, Cart>,
}

impl<S: ProductStore> CheckoutService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            carts: HashMap::new(),
        }
    }

    /// The cart associated with `customer`, opening an empty one on first
    /// access.
    pub fn cart(&mut self, customer: &Customer) -> &mut Cart {
        self.carts
            .entry(customer.id())
            .or_insert_with(|| Cart::new(customer.clone()))
    }

    /// Read-only cart lookup; `None` for customers without a cart.
    pub fn find_cart(&self, customer_id: CustomerId) -> Option<&Cart> {
        self.carts.get(&customer_id)
    }

    /// Attempt to fulfill every line of the customer's cart.
    ///
    /// Lines are processed in code order and each one commits independently:
    /// the product's count is decremented, the record saved, and the line
    /// removed from the cart. A line requesting more than the available
    /// count raises [`CheckoutError::InsufficientStock`] and stops
    /// processing; lines fulfilled before it stay committed, the failed
    /// line stays in the cart, and a later `buy` for the same customer
    /// retries what is left. Negative-quantity lines are skipped and kept;
    /// they never abort the rest of the cart.
    ///
    /// Returns `Ok(true)` when the cart fully drained, `Ok(false)` when
    /// there was nothing to fulfill (no cart, empty cart) or when skipped
    /// lines remain.
    pub fn buy(&mut self, customer_id: CustomerId) -> CheckoutResult<bool> {
        let Some(cart) = self.carts.get_mut(&customer_id) else {
            return Ok(false);
        };
        if cart.is_empty() {
            return Ok(false);
        }

        let requested: Vec<(ProductCode, i64)> = cart
            .lines()
            .iter()
            .map(|(code, quantity)| (code.clone(), *quantity))
            .collect();

        let mut fulfilled_all = true;
        for (code, quantity) in requested {
            if quantity < 0 {
                warn!(%code, quantity, "rejecting negative requested quantity");
                fulfilled_all = false;
                continue;
            }

            let mut product = match self.store.get(&code) {
                Some(product) => product,
                None => return Err(CheckoutError::UnknownProduct { code }),
            };

            if !product.can_fulfill(quantity) {
                return Err(CheckoutError::InsufficientStock {
                    code,
                    requested: quantity,
                    available: product.count(),
                });
            }

            product.deduct(quantity);
            debug!(%code, quantity, remaining = product.count(), "cart line fulfilled");
            self.store.save(product);
            cart.remove(&code);
        }

        Ok(fulfilled_all)
    }

    /// All products known to the store.
    pub fn products(&self) -> Vec<Product> {
        self.store.list()
    }

    /// Display name for `code`, if the store knows it.
    pub fn product_name(&self, code: &ProductCode) -> Option<String> {
        self.store.get(code).map(|product| product.name().to_string())
    }
}
