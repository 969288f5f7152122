use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::ProductCode;
use storefront_customers::Customer;

/// Per-customer accumulator of requested product quantities.
///
/// A product appears at most once; adding the same code again accumulates
/// the requested quantity. The cart performs no validation: negative
/// quantities are stored as-is, and the checkout service is responsible for
/// rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    customer: Customer,
    lines: BTreeMap<ProductCode, i64>,
    opened_at: DateTime<Utc>,
}

impl Cart {
    /// Open an empty cart for `customer`.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            lines: BTreeMap::new(),
            opened_at: Utc::now(),
        }
    }

    /// Add `quantity` units of `code`, accumulating with any existing line.
    pub fn add(&mut self, code: ProductCode, quantity: i64) {
        *self.lines.entry(code).or_insert(0) += quantity;
    }

    /// Requested quantity per product code, in code order.
    pub fn lines(&self) -> &BTreeMap<ProductCode, i64> {
        &self.lines
    }

    /// The customer this cart belongs to.
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// When the cart was opened.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Drop the line for `code` once it has been fulfilled.
    pub(crate) fn remove(&mut self, code: &ProductCode) {
        self.lines.remove(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_customers::CustomerId;

    fn test_customer() -> Customer {
        Customer::new(CustomerId::new(1), "customer").unwrap()
    }

    fn test_code(raw: &str) -> ProductCode {
        ProductCode::new(raw).unwrap()
    }

    #[test]
    fn new_cart_is_empty_and_owned_by_the_customer() {
        let cart = Cart::new(test_customer());
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.customer().id(), CustomerId::new(1));
    }

    #[test]
    fn adding_the_same_code_accumulates_one_line() {
        let mut cart = Cart::new(test_customer());
        cart.add(test_code("123"), 2);
        cart.add(test_code("123"), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines().get(&test_code("123")), Some(&5));
    }

    #[test]
    fn negative_quantities_are_stored_as_is() {
        let mut cart = Cart::new(test_customer());
        cart.add(test_code("123"), -4);

        assert_eq!(cart.lines().get(&test_code("123")), Some(&-4));
    }

    #[test]
    fn lines_iterate_in_code_order() {
        let mut cart = Cart::new(test_customer());
        cart.add(test_code("345"), 1);
        cart.add(test_code("123"), 1);

        let codes: Vec<&str> = cart.lines().keys().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["123", "345"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: repeated adds for one code collapse into a single
            /// line holding the sum.
            #[test]
            fn adds_accumulate_to_the_sum(quantities in proptest::collection::vec(-100i64..100, 1..10)) {
                let mut cart = Cart::new(Customer::new(CustomerId::new(1), "customer").unwrap());
                for quantity in &quantities {
                    cart.add(ProductCode::new("123").unwrap(), *quantity);
                }

                prop_assert_eq!(cart.len(), 1);
                let total: i64 = quantities.iter().sum();
                prop_assert_eq!(cart.lines().get(&ProductCode::new("123").unwrap()), Some(&total));
            }
        }
    }
}
