//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::status::OperationStatus;
use crate::{
    models::Order,
    workshop::{CompletionOutcome, NotificationOutcome},
};

/// Wrapper type for displaying a newly billed order.
///
/// # Examples
///
/// ```rust
/// # use tailor_core::{display::CreateResult, models::Order};
/// # fn show(order: Order) {
/// let result = CreateResult::new(order);
/// println!("{result}");
/// # }
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Order> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created order {} (ID: {})",
            self.resource.bill_no, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying an order after a change, with the list of
/// what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Order> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated order {}", self.resource.bill_no)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CompletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = &self.order;
        let status = if order.status.is_terminal() {
            OperationStatus::success(format!(
                "Order {} is completed and ready for pickup",
                order.bill_no
            ))
        } else {
            OperationStatus::success(format!(
                "Order {} moved to {}",
                order.bill_no,
                order.status.label()
            ))
        };
        write!(f, "{status}")?;

        match &self.notification {
            NotificationOutcome::NotRequired => Ok(()),
            NotificationOutcome::Sent => writeln!(
                f,
                "Customer notified at {}",
                order.customer.mobile
            ),
            NotificationOutcome::Failed { reason } => write!(
                f,
                "{}",
                OperationStatus::warning(format!("Customer was not notified: {reason}"))
            ),
        }
    }
}
