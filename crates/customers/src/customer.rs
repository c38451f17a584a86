use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, Entity};

/// Entity: a registered customer.
///
/// Immutable after construction. Identity is the id: two customers with the
/// same name and age are still distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    age: u32,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_constructed_fields() {
        let id = CustomerId::new();
        let customer = Customer::new(id, "Alice", 32);
        assert_eq!(customer.id_typed(), id);
        assert_eq!(customer.name(), "Alice");
        assert_eq!(customer.age(), 32);
    }

    #[test]
    fn identity_is_the_id_not_the_fields() {
        let a = Customer::new(CustomerId::new(), "Alice", 32);
        let b = Customer::new(CustomerId::new(), "Alice", 32);
        assert_ne!(a.id_typed(), b.id_typed());
        assert_ne!(a, b);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: equal attributes never make two customers the same entity.
            #[test]
            fn same_attributes_distinct_entities(
                name in "[A-Za-z][A-Za-z ]{0,30}",
                age in 0u32..120
            ) {
                let a = Customer::new(CustomerId::new(), name.clone(), age);
                let b = Customer::new(CustomerId::new(), name, age);
                prop_assert_ne!(a.id_typed(), b.id_typed());
            }
        }
    }
}
