use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Product identifier: the catalog-unique article code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Create a code from a raw string. Blank codes are rejected.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductCode: blank code"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Catalog record: a sellable product and its available inventory count.
///
/// The authoritative copy of a record lives in the product store; callers
/// work on looked-up clones and hand updates back through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    code: ProductCode,
    name: String,
    count: i64,
}

impl Product {
    /// Create a product with an initial available count.
    pub fn new(code: ProductCode, name: impl Into<String>, count: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if count < 0 {
            return Err(DomainError::invariant("count cannot be negative"));
        }
        Ok(Self { code, name, count })
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently available inventory count.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Whether `quantity` units can be taken from the available count.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.count
    }

    /// Take `quantity` units out of the available count.
    ///
    /// State evolution only; availability is the caller's decision (see
    /// [`Product::can_fulfill`]).
    pub fn deduct(&mut self, quantity: i64) {
        self.count -= quantity;
    }
}
