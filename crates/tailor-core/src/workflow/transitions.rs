//! Single-order transitions.
//!
//! Each function takes the current order by reference and returns the
//! updated copy, or the error that forbids the move. Nothing here touches
//! storage; the caller decides whether the result gets written.

use jiff::Timestamp;

use super::{department_queue_of, next_status, validate_for_workflow};
use crate::{
    error::{Result, ShopError},
    models::{Assignment, Order, OrderStatus, Worker},
};

/// Result of marking an order done in its current department.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub order: Order,
    /// The order moved into the terminal status with this transition
    pub reached_terminal: bool,
}

/// Holder conflict for an order someone else has claimed.
fn conflict(order: &Order) -> ShopError {
    ShopError::Conflict {
        order_id: order.id,
        holder: order.holder_name().unwrap_or("another worker").to_string(),
    }
}

/// Takes ownership of an order sitting in the worker's queue.
///
/// Claiming an order the worker already holds returns it unchanged.
pub fn claim(order: &Order, worker: &Worker, now: Timestamp) -> Result<Order> {
    if order.status.is_terminal() {
        return Err(ShopError::TerminalState { order_id: order.id });
    }

    if let Some(assignment) = &order.assignment {
        if assignment.worker_id == worker.id {
            return Ok(order.clone());
        }
        return Err(conflict(order));
    }

    match department_queue_of(order) {
        Some(department) if department == worker.station => {}
        other => {
            return Err(ShopError::WrongDepartment {
                order_id: order.id,
                expected: worker.station,
                actual: other
                    .map(|department| department.to_string())
                    .unwrap_or_else(|| order.status.to_string()),
            })
        }
    }

    validate_for_workflow(order)?;

    let mut updated = order.clone();
    updated.assignment = Some(Assignment {
        worker_id: worker.id.clone(),
        worker_name: worker.name.clone(),
        claimed_at: now,
    });
    updated.updated_at = now;
    Ok(updated)
}

/// Marks the worker's stage done and hands the order on, unassigned.
pub fn complete(order: &Order, worker: &Worker, now: Timestamp) -> Result<Completion> {
    let Some(next) = next_status(order.status, &order.items) else {
        return Err(ShopError::TerminalState { order_id: order.id });
    };

    match &order.assignment {
        None => return Err(ShopError::NotAssigned { order_id: order.id }),
        Some(assignment) if assignment.worker_id != worker.id => return Err(conflict(order)),
        Some(_) => {}
    }

    validate_for_workflow(order)?;

    let mut updated = order.clone();
    updated.status = next;
    updated.assignment = None;
    updated.updated_at = now;

    let reached_terminal = next.is_terminal();
    if reached_terminal {
        updated.completed_at = Some(now);
    }

    Ok(Completion {
        order: updated,
        reached_terminal,
    })
}

/// Gives a claimed order back to its current queue without advancing it.
pub fn release(order: &Order, worker: &Worker, now: Timestamp) -> Result<Order> {
    match &order.assignment {
        None => Err(ShopError::NotAssigned { order_id: order.id }),
        Some(assignment) if assignment.worker_id != worker.id => Err(conflict(order)),
        Some(_) => {
            let mut updated = order.clone();
            updated.assignment = None;
            updated.updated_at = now;
            Ok(updated)
        }
    }
}

/// Sends a pending order to its first production stage.
pub fn dispatch(order: &Order, now: Timestamp) -> Result<Order> {
    if order.status != OrderStatus::Pending {
        return Err(ShopError::validation("status").with_reason(format!(
            "Order {} is already {}",
            order.bill_no, order.status
        )));
    }

    validate_for_workflow(order)?;

    let Some(next) = next_status(order.status, &order.items) else {
        return Err(ShopError::TerminalState { order_id: order.id });
    };

    let mut updated = order.clone();
    updated.status = next;
    updated.updated_at = now;
    Ok(updated)
}
