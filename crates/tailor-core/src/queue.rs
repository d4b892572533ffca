//! Department work queue: the read model each station renders.
//!
//! Everything here is a pure function of the order collection. Callers may
//! run it on every refresh tick; the input slice is never mutated.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    models::{Department, Order, OrderStatus},
    workflow::department_queue_of,
};

/// Column a queue can be sorted by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    BillNo,
    CustomerName,
    Mobile,
    BillDate,
    DeliveryDate,
    TotalAmount,
    Balance,
    /// Name of the worker holding the order
    Assignee,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::BillNo => "bill-no",
            SortKey::CustomerName => "customer-name",
            SortKey::Mobile => "mobile",
            SortKey::BillDate => "bill-date",
            SortKey::DeliveryDate => "delivery-date",
            SortKey::TotalAmount => "total-amount",
            SortKey::Balance => "balance",
            SortKey::Assignee => "assignee",
        }
    }

    /// Compares two orders on this column. Strings compare case-insensitively.
    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            SortKey::BillNo => cmp_text(&a.bill_no, &b.bill_no),
            SortKey::CustomerName => cmp_text(&a.customer.name, &b.customer.name),
            SortKey::Mobile => cmp_text(&a.customer.mobile, &b.customer.mobile),
            SortKey::BillDate => a.bill_date.cmp(&b.bill_date),
            SortKey::DeliveryDate => a.delivery_date.cmp(&b.delivery_date),
            SortKey::TotalAmount => a.financials.total_amount.cmp(&b.financials.total_amount),
            SortKey::Balance => a.financials.balance.cmp(&b.financials.balance),
            SortKey::Assignee => cmp_text(
                a.holder_name().unwrap_or_default(),
                b.holder_name().unwrap_or_default(),
            ),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "bill-no" | "bill" | "order" => Ok(SortKey::BillNo),
            "customer-name" | "customer" | "name" => Ok(SortKey::CustomerName),
            "mobile" => Ok(SortKey::Mobile),
            "bill-date" | "date" => Ok(SortKey::BillDate),
            "delivery-date" | "delivery" => Ok(SortKey::DeliveryDate),
            "total-amount" | "total" => Ok(SortKey::TotalAmount),
            "balance" => Ok(SortKey::Balance),
            "assignee" | "worker" => Ok(SortKey::Assignee),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// What a station asks of the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueQuery {
    pub department: Department,

    /// Case-insensitive substring of the bill number or customer name
    pub search: Option<String>,

    /// Absent keeps collection order
    pub sort: Option<SortKey>,

    pub direction: SortDirection,
}

impl QueueQuery {
    /// Unsorted, unfiltered queue for one department.
    pub fn new(department: Department) -> Self {
        Self {
            department,
            search: None,
            sort: None,
            direction: SortDirection::Ascending,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some(key);
        self.direction = direction;
        self
    }

    fn matches_search(&self, order: &Order) -> bool {
        let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
        else {
            return true;
        };

        let term = term.to_lowercase();
        order.bill_no.to_lowercase().contains(&term)
            || order.customer.name.to_lowercase().contains(&term)
    }
}

/// Orders a worker at `query.department` should see, in display order.
///
/// # Examples
///
/// ```rust
/// use tailor_core::{models::Department, queue::{list_queue, QueueQuery}};
///
/// let queue = list_queue(&[], &QueueQuery::new(Department::Cutting));
/// assert!(queue.is_empty());
/// ```
pub fn list_queue(orders: &[Order], query: &QueueQuery) -> Vec<Order> {
    let mut queue: Vec<Order> = orders
        .iter()
        .filter(|order| department_queue_of(order) == Some(query.department))
        .filter(|order| query.matches_search(order))
        .cloned()
        .collect();

    if let Some(key) = query.sort {
        match query.direction {
            SortDirection::Ascending => queue.sort_by(|a, b| key.compare(a, b)),
            SortDirection::Descending => queue.sort_by(|a, b| key.compare(b, a)),
        }
    }

    queue
}

/// In-pipeline orders that no department queue will ever show.
///
/// These carry an empty item list, an unmapped garment type, or items with
/// no route for their current stage (a saree-only order in stitching), and
/// need a fix at the front desk.
pub fn unroutable_orders(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| !matches!(order.status, OrderStatus::Pending | OrderStatus::Completed))
        .filter(|order| department_queue_of(order).is_none())
        .cloned()
        .collect()
}
