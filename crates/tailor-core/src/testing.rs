//! Fixtures shared by the unit tests.

use jiff::{civil::date, Timestamp};
use rust_decimal::Decimal;

use crate::models::{CustomerRef, Financials, Item, Order, OrderStatus};

/// An order for "Meena" with one item per garment name at 100 each.
pub(crate) fn order_with(id: u64, status: OrderStatus, names: &[&str]) -> Order {
    let items: Vec<Item> = names
        .iter()
        .map(|name| Item::new(*name, 1, Decimal::from(100)))
        .collect();
    let financials =
        Financials::compute(&items, Decimal::ZERO, Decimal::ZERO).unwrap_or_default();
    let created = Timestamp::from_second(1705000000 + id as i64).unwrap_or(Timestamp::UNIX_EPOCH);

    Order {
        id,
        bill_no: format!("ST{id:06}"),
        customer: CustomerRef {
            name: "Meena".to_string(),
            mobile: "9876543210".to_string(),
        },
        items,
        financials,
        bill_date: date(2024, 1, 15),
        delivery_date: None,
        instructions: None,
        status,
        assignment: None,
        completed_at: None,
        created_at: created,
        updated_at: created,
    }
}
