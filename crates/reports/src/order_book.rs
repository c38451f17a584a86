use std::collections::HashMap;

use tracing::debug;

use orderdesk_catalog::Product;
use orderdesk_core::{CustomerId, DomainError, DomainResult, Entity, OrderId, ProductId};
use orderdesk_customers::Customer;
use orderdesk_orders::Order;

/// In-memory order book: registered customers and products, plus every
/// recorded order in recording sequence.
///
/// Registration keys entities by id, so lookups follow identity rather than
/// attribute values. Recorded orders are append-only.
#[derive(Debug, Default)]
pub struct OrderBook {
    customers: HashMap<CustomerId, Customer>,
    products: HashMap<ProductId, Product>,
    orders: Vec<Order>,
}

fn register<E: Entity>(map: &mut HashMap<E::Id, E>, entity: E) {
    map.insert(entity.id().clone(), entity);
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_customer(&mut self, customer: Customer) {
        register(&mut self.customers, customer);
    }

    pub fn register_product(&mut self, product: Product) {
        register(&mut self.products, product);
    }

    /// Record an order.
    ///
    /// Fails with [`DomainError::Validation`] if the order names a customer or
    /// product that was never registered; id indirection makes dangling
    /// references representable, so they are rejected at the door.
    pub fn record_order(&mut self, order: Order) -> DomainResult<()> {
        if !self.customers.contains_key(&order.customer_id()) {
            return Err(DomainError::validation(format!(
                "order {} references unregistered customer {}",
                order.id_typed(),
                order.customer_id()
            )));
        }
        if let Some(missing) = order
            .product_ids()
            .iter()
            .find(|id| !self.products.contains_key(*id))
        {
            return Err(DomainError::validation(format!(
                "order {} references unregistered product {missing}",
                order.id_typed()
            )));
        }

        debug!(order = %order.id_typed(), products = order.product_ids().len(), "order recorded");
        self.orders.push(order);
        Ok(())
    }

    /// Recorded orders, in recording sequence.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    fn ensure_orders(&self) -> DomainResult<()> {
        if self.orders.is_empty() {
            return Err(DomainError::empty_input("no orders recorded"));
        }
        Ok(())
    }

    fn product_ref(&self, id: ProductId) -> DomainResult<&Product> {
        self.products.get(&id).ok_or_else(DomainError::not_found)
    }

    fn customer_ref(&self, id: CustomerId) -> DomainResult<&Customer> {
        self.customers.get(&id).ok_or_else(DomainError::not_found)
    }

    /// Product with the strictly highest price across every recorded order.
    ///
    /// The scan follows recording sequence with a strict `>` comparison, so
    /// the first product encountered at the maximum price wins ties. Fails
    /// with [`DomainError::NotFound`] if no order names any product — an edge
    /// distinct from the empty-book check.
    pub fn most_expensive_product(&self) -> DomainResult<&Product> {
        self.ensure_orders()?;

        let mut best: Option<&Product> = None;
        for order in &self.orders {
            for product_id in order.product_ids() {
                let product = self.product_ref(*product_id)?;
                if best.is_none_or(|b| product.price() > b.price()) {
                    best = Some(product);
                }
            }
        }

        best.ok_or_else(DomainError::not_found)
    }

    /// Product referenced by the most (order, occurrence) pairs.
    ///
    /// A product listed twice in one order counts twice. The first product to
    /// strictly exceed the running maximum wins ties.
    pub fn most_popular_product(&self) -> DomainResult<&Product> {
        self.ensure_orders()?;

        let mut counts: HashMap<ProductId, usize> = HashMap::new();
        let mut best: Option<(ProductId, usize)> = None;
        for order in &self.orders {
            for product_id in order.product_ids() {
                let count = counts.entry(*product_id).or_insert(0);
                *count += 1;
                if best.is_none_or(|(_, max)| *count > max) {
                    best = Some((*product_id, *count));
                }
            }
        }

        match best {
            Some((product_id, _)) => self.product_ref(product_id),
            None => Err(DomainError::not_found()),
        }
    }

    /// Mean age of customers whose order contains `product_id`.
    ///
    /// Counted once per order: the same customer buying the product in two
    /// orders contributes their age twice. Fails with
    /// [`DomainError::NotFound`] if the product appears in no order.
    pub fn average_buyer_age(&self, product_id: ProductId) -> DomainResult<f64> {
        self.ensure_orders()?;

        let mut age_sum: u64 = 0;
        let mut buyers: u32 = 0;
        for order in &self.orders {
            if order.contains(product_id) {
                age_sum += u64::from(self.customer_ref(order.customer_id())?.age());
                buyers += 1;
            }
        }

        if buyers == 0 {
            return Err(DomainError::not_found());
        }
        Ok(age_sum as f64 / f64::from(buyers))
    }

    /// Map from product to the customers who bought it.
    ///
    /// One entry per (order, occurrence) pair, appended in recording sequence,
    /// so the per-product buyer list preserves insertion order. Key iteration
    /// order is unspecified.
    pub fn product_buyer_map(&self) -> DomainResult<HashMap<ProductId, Vec<CustomerId>>> {
        self.ensure_orders()?;

        let mut buyers: HashMap<ProductId, Vec<CustomerId>> = HashMap::new();
        for order in &self.orders {
            for product_id in order.product_ids() {
                buyers.entry(*product_id).or_default().push(order.customer_id());
            }
        }
        Ok(buyers)
    }

    /// Recorded orders stable-sorted by the owning customer's age, oldest
    /// first. Orders whose customers share an age keep their recording order.
    pub fn sort_orders_by_age_desc(&self) -> DomainResult<Vec<Order>> {
        self.ensure_orders()?;

        let mut keyed = Vec::with_capacity(self.orders.len());
        for order in &self.orders {
            keyed.push((self.customer_ref(order.customer_id())?.age(), order.clone()));
        }
        // sort_by_key is stable; Reverse flips to descending.
        keyed.sort_by_key(|(age, _)| core::cmp::Reverse(*age));
        Ok(keyed.into_iter().map(|(_, order)| order).collect())
    }

    /// Total shipping weight per order.
    ///
    /// Digital products contribute nothing; an order with no physical
    /// products maps to 0.
    pub fn weight_per_order(&self) -> DomainResult<HashMap<OrderId, u32>> {
        self.ensure_orders()?;

        let mut weights = HashMap::with_capacity(self.orders.len());
        for order in &self.orders {
            let mut total: u32 = 0;
            for product_id in order.product_ids() {
                if let Some(weight) = self.product_ref(*product_id)?.shipping_weight() {
                    total += weight;
                }
            }
            weights.insert(order.id_typed(), total);
        }
        Ok(weights)
    }
}

/// Products stable-sorted by price, cheapest first.
///
/// Equal prices keep their relative input order. The input is untouched; the
/// result is a new list.
pub fn sort_products_by_price(products: &[Product]) -> DomainResult<Vec<Product>> {
    if products.is_empty() {
        return Err(DomainError::empty_input("no products to sort"));
    }

    let mut sorted = products.to_vec();
    sorted.sort_by_key(Product::price);
    Ok(sorted)
}
