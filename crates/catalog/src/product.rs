use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, Money, ProductId};

/// Variant payload: what distinguishes a shippable good from a redeemable one.
///
/// Variant fields are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Shippable good with physical dimensions (arbitrary units).
    Physical { size: u32, weight: u32 },
    /// Redeemable good delivered as a code with an expiry date.
    Digital { code: String, expires_on: NaiveDate },
}

/// Entity: catalog product.
///
/// Identity is the id: two products with identical name, price, and variant
/// fields are distinct entities unless they share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    kind: ProductKind,
}

impl Product {
    /// Create a physical product.
    pub fn physical(id: ProductId, name: impl Into<String>, price: Money, size: u32, weight: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            kind: ProductKind::Physical { size, weight },
        }
    }

    /// Create a digital product.
    pub fn digital(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        code: impl Into<String>,
        expires_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            kind: ProductKind::Digital {
                code: code.into(),
                expires_on,
            },
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn is_physical(&self) -> bool {
        matches!(self.kind, ProductKind::Physical { .. })
    }

    /// Shipping weight for physical products; digital products have none.
    pub fn shipping_weight(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Physical { weight, .. } => Some(weight),
            ProductKind::Digital { .. } => None,
        }
    }

    /// Redemption code for digital products.
    pub fn redemption_code(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Digital { code, .. } => Some(code),
            ProductKind::Physical { .. } => None,
        }
    }

    /// Expiry date of the redemption code, for digital products.
    pub fn expires_on(&self) -> Option<NaiveDate> {
        match self.kind {
            ProductKind::Digital { expires_on, .. } => Some(expires_on),
            ProductKind::Physical { .. } => None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    #[test]
    fn physical_product_carries_shipping_weight() {
        let product = Product::physical(ProductId::new(), "Desk Lamp", Money::from_parts(20, 50), 10, 25);
        assert!(product.is_physical());
        assert_eq!(product.shipping_weight(), Some(25));
        assert_eq!(product.redemption_code(), None);
        assert_eq!(product.expires_on(), None);
    }

    #[test]
    fn digital_product_carries_code_and_expiry() {
        let product = Product::digital(ProductId::new(), "Pro License", Money::from_parts(100, 0), "xxx", expiry());
        assert!(!product.is_physical());
        assert_eq!(product.shipping_weight(), None);
        assert_eq!(product.redemption_code(), Some("xxx"));
        assert_eq!(product.expires_on(), Some(expiry()));
    }

    #[test]
    fn identity_is_the_id_not_the_fields() {
        let a = Product::physical(ProductId::new(), "Desk Lamp", Money::from_parts(20, 50), 10, 25);
        let b = Product::physical(ProductId::new(), "Desk Lamp", Money::from_parts(20, 50), 10, 25);
        assert_ne!(a.id_typed(), b.id_typed());
        assert_ne!(a, b);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: exactly one variant accessor answers, matching the kind.
            #[test]
            fn variant_accessors_are_exclusive(
                price in 0u64..1_000_000,
                size in 0u32..1_000,
                weight in 0u32..1_000,
                code in "[a-z0-9]{3,12}",
                physical in proptest::bool::ANY
            ) {
                let id = ProductId::new();
                let product = if physical {
                    Product::physical(id, "p", Money::from_minor(price), size, weight)
                } else {
                    Product::digital(id, "p", Money::from_minor(price), code, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                };

                prop_assert_eq!(product.is_physical(), physical);
                prop_assert_eq!(product.shipping_weight().is_some(), physical);
                prop_assert_eq!(product.redemption_code().is_some(), !physical);
            }
        }
    }
}
