//! Display implementations for domain models.
//!
//! Markdown output for rich terminal display. Full order details come from
//! `Display for Order`; lists use the compact [`OrderSummary`] form.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Customer, Item, Order},
    store::OrderCollection,
    workflow::{department_queue_of, progress},
};

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.cloth_type.trim().is_empty() {
            "(no garment)"
        } else {
            self.cloth_type.as_str()
        };
        write!(f, "{name} ×{} @ {}", self.qty, self.rate)
    }
}

impl Order {
    fn fmt_items(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Items")?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "No items on this bill.")?;
            return writeln!(f);
        }

        writeln!(f, "| # | Garment | Qty | Rate | Amount |")?;
        writeln!(f, "|---|---------|-----|------|--------|")?;
        for (index, item) in self.items.iter().enumerate() {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                index + 1,
                item.cloth_type,
                item.qty,
                item.rate,
                item.line_total()
                    .map_or_else(|| "-".to_string(), |total| total.to_string())
            )?;
        }
        writeln!(f)?;

        for (index, item) in self.items.iter().enumerate() {
            if item.measurements.is_empty() && item.description.is_none() {
                continue;
            }

            writeln!(f, "### {}. {}", index + 1, item.cloth_type)?;
            writeln!(f)?;
            if let Some(description) = &item.description {
                writeln!(f, "{description}")?;
                writeln!(f)?;
            }
            for (field, value) in &item.measurements {
                writeln!(f, "- {field}: {value}")?;
            }
            if !item.measurements.is_empty() {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} {}", self.bill_no, self.customer.name)?;
        writeln!(f)?;

        let progress = progress(self);
        write!(f, "- Status: {}", self.status.label())?;
        match progress.current {
            Some(index) => writeln!(
                f,
                " (stage {} of {}, {}%)",
                index + 1,
                progress.stages.len(),
                progress.percent
            )?,
            None => writeln!(f)?,
        }

        if let Some(department) = department_queue_of(self) {
            writeln!(f, "- Queue: {}", department.title())?;
        }
        if let Some(assignment) = &self.assignment {
            writeln!(
                f,
                "- Assigned to: {} since {}",
                assignment.worker_name,
                LocalDateTime(&assignment.claimed_at)
            )?;
        }
        writeln!(f, "- Mobile: {}", self.customer.mobile)?;
        writeln!(f, "- Bill date: {}", self.bill_date)?;
        if let Some(delivery) = self.delivery_date {
            writeln!(f, "- Delivery: {delivery}")?;
        }
        if let Some(completed) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        self.fmt_items(f)?;

        let money = &self.financials;
        writeln!(f, "## Payment")?;
        writeln!(f)?;
        if !money.previous_balance.is_zero() {
            writeln!(f, "- Previous balance: {}", money.previous_balance)?;
        }
        writeln!(f, "- Total: {}", money.total_amount)?;
        writeln!(f, "- Advance: {}", money.advance)?;
        writeln!(f, "- **Balance**: {}", money.balance)?;

        if let Some(instructions) = &self.instructions {
            writeln!(f)?;
            writeln!(f, "## Instructions")?;
            writeln!(f)?;
            writeln!(f, "{instructions}")?;
        }

        Ok(())
    }
}

/// Compact order entry used in queues and lists.
pub struct OrderSummary<'a>(pub &'a Order);

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(
            f,
            "## {} {} ({})",
            order.bill_no,
            order.customer.name,
            order.status.as_str()
        )?;
        writeln!(f)?;

        let items: Vec<String> = order
            .items
            .iter()
            .map(|item| {
                if item.qty > 1 {
                    format!("{} ×{}", item.cloth_type, item.qty)
                } else {
                    item.cloth_type.clone()
                }
            })
            .collect();
        writeln!(f, "- **ID**: {}", order.id)?;
        writeln!(f, "- **Items**: {}", items.join(", "))?;
        if let Some(delivery) = order.delivery_date {
            writeln!(f, "- **Delivery**: {delivery}")?;
        }
        if let Some(holder) = order.holder_name() {
            writeln!(f, "- **Assigned to**: {holder}")?;
        }
        writeln!(f, "- **Balance**: {}", order.financials.balance)?;
        writeln!(f)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, self.mobile)?;
        writeln!(f)?;
        writeln!(f, "- **Previous balance**: {}", self.previous_balance)?;

        let bills: Vec<String> = self
            .bills
            .iter()
            .map(|id| OrderCollection::bill_no_for(*id))
            .collect();
        writeln!(f, "- **Bills**: {}", bills.join(", "))?;
        writeln!(f)
    }
}
