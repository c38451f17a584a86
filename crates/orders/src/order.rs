use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, Entity, OrderId, ProductId};

/// Entity: an order placed by one customer for an ordered list of products.
///
/// Products are referenced by id, shared across orders; the list is positional
/// and may name the same product more than once. Once placed, an order never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    product_ids: Vec<ProductId>,
}

impl Order {
    /// Place an order.
    ///
    /// No field validation happens here; referential integrity against
    /// registered customers and products is checked where the order is
    /// recorded.
    pub fn place(id: OrderId, customer_id: CustomerId, product_ids: Vec<ProductId>) -> Self {
        Self {
            id,
            customer_id,
            product_ids,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    /// Whether the order names `product` at least once.
    pub fn contains(&self, product: ProductId) -> bool {
        self.product_ids.contains(&product)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
