//! Report engine over an in-memory order book.
//!
//! The order book is the queryable read model: registered customers and
//! products plus every recorded order, with report operations computing
//! derived facts over it. Queries never mutate the book and return newly
//! allocated results.

pub mod order_book;

pub use order_book::{OrderBook, sort_products_by_price};
