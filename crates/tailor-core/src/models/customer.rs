//! Customer ledger derived from the order collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Order;

/// A customer keyed by mobile number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,

    /// Lookup key
    pub mobile: String,

    /// Balance of the most recent bill, carried onto the next one
    pub previous_balance: Decimal,

    /// IDs of the customer's orders, oldest first
    pub bills: Vec<u64>,
}

impl Customer {
    /// Groups orders by mobile number, preserving first-seen order.
    ///
    /// The latest bill (highest ID) supplies the name and the running
    /// balance.
    pub fn ledger(orders: &[Order]) -> Vec<Customer> {
        let mut customers: Vec<Customer> = Vec::new();
        let mut latest: Vec<u64> = Vec::new();

        for order in orders {
            let mobile = order.customer.mobile.trim();
            if mobile.is_empty() {
                continue;
            }

            match customers.iter().position(|c| c.mobile == mobile) {
                Some(index) => {
                    let customer = &mut customers[index];
                    customer.bills.push(order.id);
                    if order.id > latest[index] {
                        latest[index] = order.id;
                        customer.name = order.customer.name.clone();
                        customer.previous_balance = order.financials.balance;
                    }
                }
                None => {
                    customers.push(Customer {
                        name: order.customer.name.clone(),
                        mobile: mobile.to_string(),
                        previous_balance: order.financials.balance,
                        bills: vec![order.id],
                    });
                    latest.push(order.id);
                }
            }
        }

        for customer in &mut customers {
            customer.bills.sort_unstable();
        }
        customers
    }

    /// Looks up one customer by mobile number.
    pub fn find(orders: &[Order], mobile: &str) -> Option<Customer> {
        let mobile = mobile.trim();
        Self::ledger(orders)
            .into_iter()
            .find(|customer| customer.mobile == mobile)
    }
}
