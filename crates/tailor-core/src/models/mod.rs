//! Data models for orders, items and the people around them.
//!
//! This module contains the record types of the shop: the [`Order`] (a bill
//! tracked through production), its [`Item`]s and [`Financials`], the
//! [`Customer`] ledger derived from orders, and the [`Worker`] who acts on
//! orders from a department [`Department`] station. The models carry no
//! workflow behaviour; routing and transitions live in [`crate::workflow`].
//! Display implementations are located in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tailor_core::models::{Financials, Item};
//!
//! let items = vec![Item::new("Blouse", 2, Decimal::from(450))];
//! let money = Financials::compute(&items, Decimal::from(100), Decimal::from(300))?;
//! assert_eq!(money.total_amount, Decimal::from(1000));
//! assert_eq!(money.balance, Decimal::from(700));
//! # Ok::<(), tailor_core::ShopError>(())
//! ```

pub mod customer;
pub mod filters;
pub mod garment;
pub mod item;
pub mod order;
pub mod status;
pub mod worker;

#[cfg(test)]
mod tests;

pub use customer::Customer;
pub use filters::OrderFilter;
pub use garment::{GarmentCategory, GarmentType};
pub use item::{Financials, Item};
pub use order::{Assignment, CustomerRef, Order};
pub use status::{Department, OrderStatus};
pub use worker::Worker;
