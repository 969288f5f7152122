use std::collections::HashMap;
use std::sync::RwLock;

use storefront_catalog::{Product, ProductCode};

use crate::store::ProductStore;

/// In-memory product store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductCode, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `products`.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let store = Self::new();
        for product in products {
            store.save(product);
        }
        store
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, code: &ProductCode) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(code).cloned()
    }

    fn save(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.code().clone(), product);
        }
    }

    fn list(&self) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }
}
