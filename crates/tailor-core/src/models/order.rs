//! Order (bill) model.

use jiff::{civil::Date, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Financials, Item, OrderStatus};
use crate::error::Result;

/// Denormalized copy of the customer on the bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerRef {
    pub name: String,
    pub mobile: String,
}

/// A worker's claim on an order in their department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub worker_id: String,
    pub worker_name: String,
    pub claimed_at: Timestamp,
}

/// One customer transaction tracked through production.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique identifier, never reused
    pub id: u64,

    /// Human-readable bill number printed on the receipt
    pub bill_no: String,

    pub customer: CustomerRef,

    pub items: Vec<Item>,

    pub financials: Financials,

    pub bill_date: Date,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<Date>,

    /// Design notes for the workshop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// Where the order is in the pipeline
    #[serde(default)]
    pub status: OrderStatus,

    /// Present only while a worker holds the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Assignment>,

    /// Set once, on the transition to completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl Order {
    /// Re-derives total and balance after an item or money edit.
    ///
    /// On overflow the stored numbers are left unchanged.
    pub fn recompute_financials(&mut self) -> Result<()> {
        self.financials = Financials::compute(
            &self.items,
            self.financials.previous_balance,
            self.financials.advance,
        )?;
        Ok(())
    }

    /// Updates the advance paid and re-derives the balance.
    pub fn set_advance(&mut self, advance: Decimal) -> Result<()> {
        self.financials =
            Financials::compute(&self.items, self.financials.previous_balance, advance)?;
        Ok(())
    }

    pub fn is_claimed(&self) -> bool {
        self.assignment.is_some()
    }

    /// Whether the given worker currently holds this order.
    pub fn is_held_by(&self, worker_id: &str) -> bool {
        self.assignment
            .as_ref()
            .is_some_and(|assignment| assignment.worker_id == worker_id)
    }

    /// Display name of the current holder.
    pub fn holder_name(&self) -> Option<&str> {
        self.assignment
            .as_ref()
            .map(|assignment| assignment.worker_name.as_str())
    }
}
