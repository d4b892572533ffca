//! Status and department enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed, ordered set of pipeline stages an order moves through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Billed, not yet sent to production
    #[default]
    Pending,
    Cutting,
    Stitching,
    Finishing,
    Ironing,
    /// Terminal: ready for pickup
    Completed,
}

impl OrderStatus {
    /// Every status in pipeline order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Cutting,
        OrderStatus::Stitching,
        OrderStatus::Finishing,
        OrderStatus::Ironing,
        OrderStatus::Completed,
    ];

    /// Stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Cutting => "cutting",
            OrderStatus::Stitching => "stitching",
            OrderStatus::Finishing => "finishing",
            OrderStatus::Ironing => "ironing",
            OrderStatus::Completed => "completed",
        }
    }

    /// Human-readable label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Cutting => "Cutting",
            OrderStatus::Stitching => "Stitching",
            OrderStatus::Finishing => "Finishing",
            OrderStatus::Ironing => "Ironing",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Whether no further transition exists.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "cutting" => Ok(OrderStatus::Cutting),
            "stitching" => Ok(OrderStatus::Stitching),
            "finishing" => Ok(OrderStatus::Finishing),
            "ironing" => Ok(OrderStatus::Ironing),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Invalid order status: {s}")),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work-queue surface. Stitching is split by garment family; every other
/// department serves exactly one status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Cutting,
    BlouseStitching,
    DressStitching,
    Finishing,
    Ironing,
}

impl Department {
    /// Every department, in pipeline order.
    pub const ALL: [Department; 5] = [
        Department::Cutting,
        Department::BlouseStitching,
        Department::DressStitching,
        Department::Finishing,
        Department::Ironing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Cutting => "cutting",
            Department::BlouseStitching => "blouse-stitching",
            Department::DressStitching => "dress-stitching",
            Department::Finishing => "finishing",
            Department::Ironing => "ironing",
        }
    }

    /// Display name of the department.
    pub fn title(&self) -> &'static str {
        match self {
            Department::Cutting => "Cutting Department",
            Department::BlouseStitching => "Blouse Stitching",
            Department::DressStitching => "Dress Stitching",
            Department::Finishing => "Finishing Department",
            Department::Ironing => "Ironing Department",
        }
    }

    /// The status an order carries while it sits in this department.
    pub fn stage(&self) -> OrderStatus {
        match self {
            Department::Cutting => OrderStatus::Cutting,
            Department::BlouseStitching | Department::DressStitching => OrderStatus::Stitching,
            Department::Finishing => OrderStatus::Finishing,
            Department::Ironing => OrderStatus::Ironing,
        }
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "cutting" => Ok(Department::Cutting),
            "blouse-stitching" | "blouse" => Ok(Department::BlouseStitching),
            "dress-stitching" | "dress" => Ok(Department::DressStitching),
            "finishing" => Ok(Department::Finishing),
            "ironing" => Ok(Department::Ironing),
            _ => Err(format!("Invalid department: {s}")),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
