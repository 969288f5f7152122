use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Customer identifier (numeric account id).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for CustomerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("CustomerId: {e}")))?;
        Ok(Self(id))
    }
}

/// Customer entity: identity plus display name.
///
/// Immutable once created; it only serves to associate a cart with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_customer_keeps_identity_and_name() {
        let customer = Customer::new(CustomerId::new(1), "customer").unwrap();
        assert_eq!(customer.id(), CustomerId::new(1));
        assert_eq!(customer.name(), "customer");
    }

    #[test]
    fn create_customer_rejects_empty_name() {
        let err = Customer::new(CustomerId::new(1), "   ").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn customer_id_rejects_non_numeric_input() {
        let err = "not-a-number".parse::<CustomerId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for non-numeric id"),
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: Display and FromStr agree for every id.
            #[test]
            fn customer_id_display_parses_back(id in any::<u64>()) {
                let parsed: CustomerId = CustomerId::new(id).to_string().parse().unwrap();
                prop_assert_eq!(parsed, CustomerId::new(id));
            }
        }
    }
}
