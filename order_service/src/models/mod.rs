// order_service/src/models/mod.rs

//! Records exchanged with the customer directory, product catalog and order ledger.

pub mod customer;
pub mod order;
pub mod order_product;
pub mod product;
pub mod request;

pub use customer::Customer;
pub use order::{CreateOrderData, Order};
pub use order_product::{NewLineItem, OrderProduct};
pub use product::{CatalogProduct, QuantityUpdate};
pub use request::{OrderRequest, RequestedProduct};
