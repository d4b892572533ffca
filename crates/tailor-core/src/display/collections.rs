//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::models::OrderSummary;
use crate::models::{Customer, Department, Order};

/// Newtype wrapper for displaying a list of orders.
///
/// # Examples
///
/// ```rust
/// use tailor_core::display::Orders;
///
/// let orders = Orders(vec![]);
/// assert_eq!(orders.to_string(), "No orders found.\n");
/// ```
pub struct Orders(pub Vec<Order>);

impl Orders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.0.iter()
    }
}

impl Index<usize> for Orders {
    type Output = Order;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Orders {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Orders {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Orders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No orders found.")
        } else {
            for order in &self.0 {
                write!(f, "{}", OrderSummary(order))?;
            }
            Ok(())
        }
    }
}

/// A department's work queue with its heading.
pub struct Queue {
    pub department: Department,
    pub orders: Vec<Order>,
}

impl Queue {
    pub fn new(department: Department, orders: Vec<Order>) -> Self {
        Self { department, orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let waiting = self.orders.iter().filter(|order| !order.is_claimed()).count();
        writeln!(
            f,
            "# {} ({} waiting, {} in progress)",
            self.department.title(),
            waiting,
            self.orders.len() - waiting
        )?;
        writeln!(f)?;

        if self.orders.is_empty() {
            writeln!(f, "No orders in this queue.")
        } else {
            for order in &self.orders {
                write!(f, "{}", OrderSummary(order))?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the customer ledger.
pub struct Customers(pub Vec<Customer>);

impl fmt::Display for Customers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No customers found.")
        } else {
            for customer in &self.0 {
                write!(f, "{customer}")?;
            }
            Ok(())
        }
    }
}
