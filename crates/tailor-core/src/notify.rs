//! Customer notification on order completion.

use thiserror::Error;

use crate::models::Order;

/// Failure to reach a customer.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Customer has no mobile number on order {bill_no}")]
    MissingContact { bill_no: String },

    #[error("Message delivery failed: {0}")]
    Delivery(String),
}

/// Tells a customer their order is ready for pickup.
///
/// Called exactly once per order, after the completed status has been
/// written. Implementations block; keep them short.
pub trait CompletionNotifier: Send + Sync {
    fn notify_customer(&self, order: &Order) -> Result<(), NotifyError>;
}

/// Pickup message sent to the customer.
pub fn completion_message(order: &Order) -> String {
    format!(
        "Dear {}, your order #{} is now completed and ready for pickup. \
         Please collect it at your convenience. Thank you!",
        order.customer.name.trim(),
        order.bill_no
    )
}

/// Writes the pickup message to the log instead of sending it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl CompletionNotifier for LogNotifier {
    fn notify_customer(&self, order: &Order) -> Result<(), NotifyError> {
        let mobile = order.customer.mobile.trim();
        if mobile.is_empty() {
            return Err(NotifyError::MissingContact {
                bill_no: order.bill_no.clone(),
            });
        }

        log::info!("Message to {mobile}: {}", completion_message(order));
        Ok(())
    }
}
