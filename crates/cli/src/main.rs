//! Demo binary: seed a fixed sample dataset, run every report, print labeled
//! results to stdout.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use orderdesk_catalog::{Product, RedemptionLedger};
use orderdesk_core::{CustomerId, Money, OrderId, ProductId};
use orderdesk_customers::Customer;
use orderdesk_orders::Order;
use orderdesk_reports::{OrderBook, sort_products_by_price};

struct SampleData {
    book: OrderBook,
    ledger: RedemptionLedger,
    catalog: Vec<Product>,
    stand_id: ProductId,
}

fn seed() -> Result<SampleData> {
    let mut book = OrderBook::new();

    let alice = Customer::new(CustomerId::new(), "Alice", 32);
    let bob = Customer::new(CustomerId::new(), "Bob", 19);
    let charlie = Customer::new(CustomerId::new(), "Charlie", 20);
    let john = Customer::new(CustomerId::new(), "John", 27);
    let (alice_id, bob_id, charlie_id, john_id) =
        (alice.id_typed(), bob.id_typed(), charlie.id_typed(), john.id_typed());
    for customer in [alice, bob, charlie, john] {
        book.register_customer(customer);
    }

    let lamp = Product::physical(ProductId::new(), "Desk Lamp", Money::from_parts(20, 50), 10, 25);
    let stand = Product::physical(ProductId::new(), "Monitor Stand", Money::from_parts(50, 0), 6, 17);
    let license = Product::digital(
        ProductId::new(),
        "Pro License",
        Money::from_parts(100, 0),
        "xxx",
        NaiveDate::from_ymd_opt(2023, 5, 12).context("license expiry")?,
    );
    let editor = Product::digital(
        ProductId::new(),
        "Photo Editor",
        Money::from_parts(81, 25),
        "yyy",
        NaiveDate::from_ymd_opt(2024, 6, 20).context("editor expiry")?,
    );
    let (lamp_id, stand_id, license_id, editor_id) = (
        lamp.id_typed(),
        stand.id_typed(),
        license.id_typed(),
        editor.id_typed(),
    );

    let catalog = vec![lamp, stand, license, editor];
    for product in &catalog {
        book.register_product(product.clone());
    }

    book.record_order(Order::place(OrderId::new(), alice_id, vec![lamp_id, license_id, editor_id]))?;
    book.record_order(Order::place(OrderId::new(), bob_id, vec![lamp_id, stand_id]))?;
    book.record_order(Order::place(OrderId::new(), charlie_id, vec![lamp_id, editor_id]))?;
    book.record_order(Order::place(
        OrderId::new(),
        john_id,
        vec![license_id, editor_id, lamp_id, stand_id],
    ))?;

    Ok(SampleData {
        book,
        ledger: RedemptionLedger::new(),
        catalog,
        stand_id,
    })
}

fn render_buyer_map(
    book: &OrderBook,
    buyers: &HashMap<ProductId, Vec<CustomerId>>,
) -> Result<serde_json::Value> {
    let mut rendered = serde_json::Map::new();
    for (product_id, customer_ids) in buyers {
        let product = book
            .product(*product_id)
            .context("buyer map references unknown product")?;
        let names: Vec<&str> = customer_ids
            .iter()
            .filter_map(|id| book.customer(*id).map(Customer::name))
            .collect();
        rendered.insert(product.name().to_string(), serde_json::json!(names));
    }
    Ok(serde_json::Value::Object(rendered))
}

fn main() -> Result<()> {
    orderdesk_observability::init();

    let sample = seed()?;
    let book = &sample.book;
    tracing::info!(orders = book.orders().len(), "sample data seeded");

    println!("1. Redemption code ledger");
    sample.ledger.mark_used("xxx");
    println!("   code xxx used: {}", sample.ledger.is_used("xxx"));
    println!("   code yyy used: {}", sample.ledger.is_used("yyy"));

    let most_expensive = book.most_expensive_product()?;
    println!(
        "2. Most expensive product: {} ({})",
        most_expensive.name(),
        most_expensive.price()
    );

    let most_popular = book.most_popular_product()?;
    println!("3. Most popular product: {}", most_popular.name());

    let stand = book.product(sample.stand_id).context("sample product missing")?;
    let average_age = book.average_buyer_age(sample.stand_id)?;
    println!("4. Average buyer age for {}: {average_age}", stand.name());

    println!("5. Buyers per product:");
    let buyer_map = book.product_buyer_map()?;
    println!("{}", serde_json::to_string_pretty(&render_buyer_map(book, &buyer_map)?)?);

    println!("6. Catalog sorted by price:");
    for product in sort_products_by_price(&sample.catalog)? {
        println!("   {} ({})", product.name(), product.price());
    }

    println!("7. Orders sorted by customer age, oldest first:");
    for order in book.sort_orders_by_age_desc()? {
        let customer = book
            .customer(order.customer_id())
            .context("order references unknown customer")?;
        println!(
            "   {} (age {}), {} products",
            customer.name(),
            customer.age(),
            order.product_ids().len()
        );
    }

    println!("8. Total shipping weight per order:");
    let weights = book.weight_per_order()?;
    for order in book.orders() {
        let customer = book
            .customer(order.customer_id())
            .context("order references unknown customer")?;
        let total = weights.get(&order.id_typed()).copied().unwrap_or(0);
        println!("   {}'s order: {total}", customer.name());
    }

    Ok(())
}
