//! Front-desk operations for the Workshop.

use jiff::tz::TimeZone;
use rust_decimal::Decimal;

use super::{Workshop, Write};
use crate::{
    error::{Result, ShopError},
    models::{Customer, CustomerRef, Financials, Item, Order, OrderFilter, OrderStatus},
    params::{CreateOrder, RecordAdvance},
    queue,
    store::OrderCollection,
    workflow,
};

impl Workshop {
    /// Bills a new order and stores it as pending.
    ///
    /// When `previous_balance` is not given, the balance of the customer's
    /// latest bill (matched by mobile number) is carried over.
    pub async fn create_order(&self, params: &CreateOrder) -> Result<Order> {
        params.validate()?;
        let params = params.clone();

        let order = self
            .write_with_retry(move |collection, now| {
                let mobile = params.mobile.trim().to_string();
                let previous_balance = params.previous_balance.unwrap_or_else(|| {
                    Customer::find(&collection.orders, &mobile)
                        .map(|customer| customer.previous_balance)
                        .unwrap_or(Decimal::ZERO)
                });

                let items: Vec<Item> = params.items.iter().cloned().map(Item::from).collect();
                let financials = Financials::compute(&items, previous_balance, params.advance)?;
                let id = collection.next_id();

                let order = Order {
                    id,
                    bill_no: OrderCollection::bill_no_for(id),
                    customer: CustomerRef {
                        name: params.customer_name.trim().to_string(),
                        mobile,
                    },
                    items,
                    financials,
                    bill_date: params
                        .bill_date
                        .unwrap_or_else(|| now.to_zoned(TimeZone::system()).date()),
                    delivery_date: params.delivery_date,
                    instructions: params.instructions.clone(),
                    status: OrderStatus::Pending,
                    assignment: None,
                    completed_at: None,
                    created_at: now,
                    updated_at: now,
                };

                collection.orders.push(order.clone());
                Ok(Write::Save(order))
            })
            .await?;

        log::info!(
            "Created order {} for {} ({} items, balance {})",
            order.bill_no,
            order.customer.name,
            order.items.len(),
            order.financials.balance
        );
        Ok(order)
    }

    /// Retrieves an order by its ID.
    pub async fn get_order(&self, order_id: u64) -> Result<Option<Order>> {
        let collection = self.load().await?;
        Ok(collection.get(order_id).cloned())
    }

    /// Lists orders across the whole pipeline in collection order.
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let collection = self.load().await?;
        Ok(collection
            .orders
            .into_iter()
            .filter(|order| filter.matches(order))
            .collect())
    }

    /// Sends a pending order to its first production stage.
    pub async fn dispatch_order(&self, order_id: u64) -> Result<Order> {
        let order = self
            .modify_order(order_id, |current, now| workflow::dispatch(current, now))
            .await?;
        log::info!("Dispatched order {} to {}", order.bill_no, order.status);
        Ok(order)
    }

    /// Replaces the advance paid on an order and re-derives its balance.
    pub async fn record_advance(&self, params: &RecordAdvance) -> Result<Order> {
        if params.advance.is_sign_negative() {
            return Err(ShopError::validation("advance").with_reason("Advance cannot be negative"));
        }

        let advance = params.advance;
        let order = self
            .modify_order(params.order_id, move |current, now| {
                let mut updated = current.clone();
                updated.set_advance(advance)?;
                if updated != *current {
                    updated.updated_at = now;
                }
                Ok(updated)
            })
            .await?;

        log::info!(
            "Recorded advance {} on order {}, balance now {}",
            order.financials.advance,
            order.bill_no,
            order.financials.balance
        );
        Ok(order)
    }

    /// Customer ledger derived from every stored order.
    pub async fn customers(&self) -> Result<Vec<Customer>> {
        let collection = self.load().await?;
        Ok(Customer::ledger(&collection.orders))
    }

    /// Looks up a customer by mobile number.
    pub async fn find_customer(&self, mobile: &str) -> Result<Option<Customer>> {
        let collection = self.load().await?;
        Ok(Customer::find(&collection.orders, mobile))
    }

    /// In-pipeline orders that appear in no department queue.
    pub async fn unroutable_orders(&self) -> Result<Vec<Order>> {
        let collection = self.load().await?;
        let orders = queue::unroutable_orders(&collection.orders);
        if !orders.is_empty() {
            log::warn!("{} orders are in no department queue", orders.len());
        }
        Ok(orders)
    }
}
