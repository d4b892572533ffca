//! Workflow rules engine.
//!
//! Pure functions over an order's status and item list: which department
//! queue an order belongs in, what status follows the current one, and the
//! single-order transitions (claim, complete, release, dispatch) the
//! [`crate::Workshop`] applies under its re-read-before-write discipline.
//!
//! ```text
//! pending ──▶ cutting ──▶ stitching ──▶ finishing ──▶ ironing ──▶ completed
//!    │                   (blouse|dress)    ▲
//!    └──────────── any Saree item ─────────┘
//! ```
//!
//! Routing and queue membership are the same function seen from two sides:
//! [`next_status`] decides where an order goes, [`department_queue_of`]
//! decides where it is, and an order advanced into a stage is always visible
//! in exactly one queue for that stage.

mod transitions;

pub use transitions::{claim, complete, dispatch, release, Completion};

use crate::{
    error::{Result, ShopError},
    models::{Department, GarmentCategory, Item, Order, OrderStatus},
};

/// Stitching queue for an order's items.
///
/// Any Blouse item routes the whole order to blouse stitching, dress items
/// notwithstanding; otherwise any dress-family item routes to dress
/// stitching. Orders with neither (Saree only, or unmapped garments) have no
/// stitching route.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use tailor_core::{models::{Department, Item}, workflow::route_department};
///
/// let items = vec![
///     Item::new("Kurti", 1, Decimal::ZERO),
///     Item::new("Blouse", 1, Decimal::ZERO),
/// ];
/// assert_eq!(route_department(&items), Some(Department::BlouseStitching));
/// ```
pub fn route_department(items: &[Item]) -> Option<Department> {
    let categories: Vec<GarmentCategory> = items
        .iter()
        .filter_map(Item::garment)
        .map(|garment| garment.category())
        .collect();

    if categories.contains(&GarmentCategory::Blouse) {
        Some(Department::BlouseStitching)
    } else if categories.contains(&GarmentCategory::Dress) {
        Some(Department::DressStitching)
    } else {
        None
    }
}

/// Whether any item is a Saree, which skips cutting and stitching.
pub fn has_saree(items: &[Item]) -> bool {
    items
        .iter()
        .filter_map(Item::garment)
        .any(|garment| garment.category() == GarmentCategory::Saree)
}

/// The status that follows `current`, `None` once completed.
///
/// This is the only authority on pipeline progression; callers must handle
/// `None` before writing anything.
pub fn next_status(current: OrderStatus, items: &[Item]) -> Option<OrderStatus> {
    match current {
        OrderStatus::Pending if has_saree(items) => Some(OrderStatus::Finishing),
        OrderStatus::Pending => Some(OrderStatus::Cutting),
        OrderStatus::Cutting => Some(OrderStatus::Stitching),
        OrderStatus::Stitching => Some(OrderStatus::Finishing),
        OrderStatus::Finishing => Some(OrderStatus::Ironing),
        OrderStatus::Ironing => Some(OrderStatus::Completed),
        OrderStatus::Completed => None,
    }
}

/// Whether every item names a catalog garment and there is at least one.
pub fn is_routable(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.garment().is_some())
}

/// The single work queue an order currently belongs in.
///
/// `None` for pending and completed orders, and for orders whose items are
/// empty or carry an unmapped garment type; those show up in no queue.
pub fn department_queue_of(order: &Order) -> Option<Department> {
    if !is_routable(&order.items) {
        return None;
    }

    match order.status {
        OrderStatus::Cutting => Some(Department::Cutting),
        OrderStatus::Stitching => route_department(&order.items),
        OrderStatus::Finishing => Some(Department::Finishing),
        OrderStatus::Ironing => Some(Department::Ironing),
        OrderStatus::Pending | OrderStatus::Completed => None,
    }
}

/// Ordered statuses an order with these items visits.
pub fn stage_path(items: &[Item]) -> Vec<OrderStatus> {
    let mut path = vec![OrderStatus::Pending];
    let mut current = OrderStatus::Pending;
    while let Some(next) = next_status(current, items) {
        path.push(next);
        current = next;
    }
    path
}

/// Position of an order along its own stage path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub stages: Vec<OrderStatus>,
    /// Index into `stages`, `None` if the status is off this order's path
    pub current: Option<usize>,
    /// Whole-number percentage of stages reached
    pub percent: u8,
}

/// Where an order stands on its stage path.
pub fn progress(order: &Order) -> Progress {
    let stages = stage_path(&order.items);
    let current = stages.iter().position(|status| *status == order.status);
    let percent = current
        .map(|index| ((index + 1) * 100 / stages.len()) as u8)
        .unwrap_or(0);
    Progress {
        stages,
        current,
        percent,
    }
}

/// Checks the minimum fields required before any state transition.
pub fn validate_for_workflow(order: &Order) -> Result<()> {
    if order.customer.name.trim().is_empty() {
        return Err(ShopError::validation("customer_name")
            .with_reason("Customer name is required"));
    }

    if !order
        .items
        .iter()
        .any(|item| !item.cloth_type.trim().is_empty())
    {
        return Err(ShopError::validation("items")
            .with_reason("At least one item with a garment type is required"));
    }

    if let Some(item) = order.items.iter().find(|item| item.garment().is_none()) {
        return Err(ShopError::validation("cloth_type")
            .with_reason(format!("Unknown garment type '{}'", item.cloth_type)));
    }

    Ok(())
}
