//! Department operations for the Workshop.

use std::sync::Arc;

use tokio::task;

use super::{Workshop, Write};
use crate::{
    error::{Result, ShopError},
    models::{Order, Worker},
    queue::{self, QueueQuery},
    workflow,
};

/// Whether the customer heard about a completed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The order moved to another department, not to completed
    NotRequired,
    Sent,
    /// The completed status stays written; only the message was lost
    Failed { reason: String },
}

/// Result of marking an order done in a department.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub order: Order,
    pub notification: NotificationOutcome,
}

impl Workshop {
    /// The orders a department should see right now.
    pub async fn list_queue(&self, query: &QueueQuery) -> Result<Vec<Order>> {
        let collection = self.load().await?;
        Ok(queue::list_queue(&collection.orders, query))
    }

    /// Takes ownership of an order for `worker`.
    ///
    /// Fails with `ShopError::Conflict` when another worker holds the order,
    /// including when that worker's claim landed between this call's read and
    /// its write.
    pub async fn claim_order(&self, order_id: u64, worker: &Worker) -> Result<Order> {
        let actor = worker.clone();
        let result = self
            .modify_order(order_id, move |current, now| {
                workflow::claim(current, &actor, now)
            })
            .await;

        match &result {
            Ok(order) => log::info!(
                "{} claimed order {} in {}",
                worker.name,
                order.bill_no,
                worker.station
            ),
            Err(ShopError::Conflict { holder, .. }) => log::info!(
                "{} could not claim order {order_id}: already taken by {holder}",
                worker.name
            ),
            Err(_) => {}
        }
        result
    }

    /// Marks `worker`'s stage done and hands the order to the next
    /// department unassigned.
    ///
    /// Reaching the terminal status notifies the customer once, after the
    /// write. A failed notification is logged and reported in the outcome;
    /// it never undoes the status change.
    pub async fn complete_order(
        &self,
        order_id: u64,
        worker: &Worker,
    ) -> Result<CompletionOutcome> {
        let actor = worker.clone();
        let completion = self
            .write_with_retry(move |collection, now| {
                let index = collection
                    .position(order_id)
                    .ok_or(ShopError::OrderNotFound { id: order_id })?;
                let completion = workflow::complete(&collection.orders[index], &actor, now)?;
                collection.orders[index] = completion.order.clone();
                Ok(Write::Save(completion))
            })
            .await?;

        log::info!(
            "{} completed {} on order {}, now {}",
            worker.name,
            worker.station,
            completion.order.bill_no,
            completion.order.status
        );

        let notification = if completion.reached_terminal {
            self.notify_customer(&completion.order).await
        } else {
            NotificationOutcome::NotRequired
        };

        Ok(CompletionOutcome {
            order: completion.order,
            notification,
        })
    }

    /// Gives a claimed order back to its queue without advancing it.
    pub async fn release_order(&self, order_id: u64, worker: &Worker) -> Result<Order> {
        let actor = worker.clone();
        let order = self
            .modify_order(order_id, move |current, now| {
                workflow::release(current, &actor, now)
            })
            .await?;
        log::info!("{} released order {}", worker.name, order.bill_no);
        Ok(order)
    }

    async fn notify_customer(&self, order: &Order) -> NotificationOutcome {
        let notifier = Arc::clone(&self.notifier);
        let completed = order.clone();
        let result = task::spawn_blocking(move || notifier.notify_customer(&completed)).await;

        let reason = match result {
            Ok(Ok(())) => {
                log::debug!("Notified customer of order {}", order.bill_no);
                return NotificationOutcome::Sent;
            }
            Ok(Err(e)) => e.to_string(),
            Err(e) => format!("Notifier task failed: {e}"),
        };

        log::warn!(
            "Order {} completed but the customer was not notified: {reason}",
            order.bill_no
        );
        NotificationOutcome::Failed { reason }
    }
}
