use std::sync::Arc;

use storefront_catalog::{Product, ProductCode};

/// Persistence seam for product records.
///
/// The store owns the authoritative mutable record for every product; callers
/// look records up by code and hand updated records back through `save`.
/// Consistency across concurrent callers is the store's own business.
pub trait ProductStore: Send + Sync {
    /// Current record for `code`, if the store knows it.
    fn get(&self, code: &ProductCode) -> Option<Product>;

    /// Insert or replace the record for the product's code.
    fn save(&self, product: Product);

    /// All records, in unspecified order.
    fn list(&self) -> Vec<Product>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get(&self, code: &ProductCode) -> Option<Product> {
        (**self).get(code)
    }

    fn save(&self, product: Product) {
        (**self).save(product)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }
}
