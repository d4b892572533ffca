//! Workshop operations that return formatted wrapper types.
//!
//! Interfaces call these to get output that is ready to render, keeping
//! wording and layout in one place.

use super::Workshop;
use crate::{
    display::{CreateResult, Customers, Orders, Queue, UpdateResult},
    error::Result,
    models::{Order, OrderFilter, Worker},
    params::{CreateOrder, RecordAdvance},
    queue::QueueQuery,
};

impl Workshop {
    /// Handle billing a new order.
    pub async fn create_order_result(&self, params: &CreateOrder) -> Result<CreateResult<Order>> {
        let order = self.create_order(params).await?;
        Ok(CreateResult::new(order))
    }

    /// Handle showing a department's queue.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tailor_core::{models::Department, queue::QueueQuery, WorkshopBuilder};
    /// # async {
    /// let workshop = WorkshopBuilder::new().build().await?;
    /// let queue = workshop
    ///     .queue_view(&QueueQuery::new(Department::Cutting).with_search("meena"))
    ///     .await?;
    /// println!("{queue}");
    /// # Result::<(), tailor_core::ShopError>::Ok(())
    /// # };
    /// ```
    pub async fn queue_view(&self, query: &QueueQuery) -> Result<Queue> {
        let orders = self.list_queue(query).await?;
        Ok(Queue::new(query.department, orders))
    }

    /// Handle listing orders across the pipeline.
    pub async fn orders_view(&self, filter: &OrderFilter) -> Result<Orders> {
        Ok(Orders(self.list_orders(filter).await?))
    }

    /// Handle the data-quality report of orders visible in no queue.
    pub async fn unroutable_view(&self) -> Result<Orders> {
        Ok(Orders(self.unroutable_orders().await?))
    }

    /// Handle listing the customer ledger.
    pub async fn customers_view(&self) -> Result<Customers> {
        Ok(Customers(self.customers().await?))
    }

    /// Handle dispatching a pending order.
    pub async fn dispatch_order_result(&self, order_id: u64) -> Result<UpdateResult<Order>> {
        let order = self.dispatch_order(order_id).await?;
        let change = format!("Sent to {}", order.status.label());
        Ok(UpdateResult::with_changes(order, vec![change]))
    }

    /// Handle recording an advance payment.
    pub async fn record_advance_result(
        &self,
        params: &RecordAdvance,
    ) -> Result<UpdateResult<Order>> {
        let order = self.record_advance(params).await?;
        let change = format!(
            "Advance set to {}, balance {}",
            order.financials.advance, order.financials.balance
        );
        Ok(UpdateResult::with_changes(order, vec![change]))
    }

    /// Handle a worker claiming an order.
    pub async fn claim_order_result(
        &self,
        order_id: u64,
        worker: &Worker,
    ) -> Result<UpdateResult<Order>> {
        let order = self.claim_order(order_id, worker).await?;
        let change = format!("Claimed by {} at {}", worker.name, worker.station.title());
        Ok(UpdateResult::with_changes(order, vec![change]))
    }

    /// Handle a worker releasing an order.
    pub async fn release_order_result(
        &self,
        order_id: u64,
        worker: &Worker,
    ) -> Result<UpdateResult<Order>> {
        let order = self.release_order(order_id, worker).await?;
        let change = format!("Released by {}", worker.name);
        Ok(UpdateResult::with_changes(order, vec![change]))
    }
}
