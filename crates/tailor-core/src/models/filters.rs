//! Filter types for querying orders.

use jiff::civil::Date;

use super::{GarmentType, Order, OrderStatus};

/// Filter options for listing orders across the whole pipeline.
///
/// Every populated field narrows the result; an empty filter matches all
/// orders.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Filter by current pipeline status
    pub status: Option<OrderStatus>,

    /// Orders containing at least one item of this garment
    pub garment: Option<GarmentType>,

    /// Orders currently held by this worker
    pub worker_id: Option<String>,

    /// Orders for this customer mobile number
    pub mobile: Option<String>,

    /// Orders billed on this day
    pub bill_date: Option<Date>,
}

impl OrderFilter {
    /// Create a status-only filter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailor_core::models::{OrderFilter, OrderStatus};
    ///
    /// let filter = OrderFilter::with_status(OrderStatus::Ironing);
    /// assert_eq!(filter.status, Some(OrderStatus::Ironing));
    /// assert!(filter.garment.is_none());
    /// ```
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Whether the order passes every populated criterion.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        if let Some(garment) = self.garment {
            if !order.items.iter().any(|item| item.garment() == Some(garment)) {
                return false;
            }
        }

        if let Some(worker_id) = &self.worker_id {
            if !order.is_held_by(worker_id) {
                return false;
            }
        }

        if let Some(mobile) = &self.mobile {
            if order.customer.mobile.trim() != mobile.trim() {
                return false;
            }
        }

        if let Some(bill_date) = self.bill_date {
            if order.bill_date != bill_date {
                return false;
            }
        }

        true
    }
}
