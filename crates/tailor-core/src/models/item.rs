//! Billed items and the money they add up to.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::GarmentType;
use crate::error::{Result, ShopError};

/// One garment line on a bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Garment name as entered at the counter
    pub cloth_type: String,

    pub qty: u32,

    /// Unit rate
    pub rate: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Measurement field name → value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub measurements: BTreeMap<String, String>,
}

impl Item {
    /// Creates an item with no description or measurements.
    pub fn new(cloth_type: impl Into<String>, qty: u32, rate: Decimal) -> Self {
        Self {
            cloth_type: cloth_type.into(),
            qty,
            rate,
            description: None,
            measurements: BTreeMap::new(),
        }
    }

    /// Recognised garment, `None` for blank or unknown names.
    pub fn garment(&self) -> Option<GarmentType> {
        GarmentType::parse(&self.cloth_type)
    }

    /// `qty × rate`, `None` when the product does not fit a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        Decimal::from(self.qty).checked_mul(self.rate)
    }
}

/// The money side of a bill.
///
/// `total_amount` and `balance` are derived; construct through
/// [`Financials::compute`] so `balance == total_amount - advance` holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Financials {
    pub previous_balance: Decimal,
    pub total_amount: Decimal,
    pub advance: Decimal,
    pub balance: Decimal,
}

impl Financials {
    /// Derives totals from the items plus carried-over balance.
    ///
    /// # Errors
    ///
    /// * `ShopError::Validation` - When a line total, the bill total or the
    ///   balance overflows
    pub fn compute(items: &[Item], previous_balance: Decimal, advance: Decimal) -> Result<Self> {
        let mut total_amount = previous_balance;
        for (index, item) in items.iter().enumerate() {
            total_amount = item
                .line_total()
                .and_then(|line| total_amount.checked_add(line))
                .ok_or_else(|| {
                    ShopError::validation("items")
                        .with_reason(format!("Item {} amount is too large", index + 1))
                })?;
        }
        let balance = total_amount.checked_sub(advance).ok_or_else(|| {
            ShopError::validation("advance").with_reason("Balance is out of range")
        })?;

        Ok(Self {
            previous_balance,
            total_amount,
            advance,
            balance,
        })
    }

    /// Whether the stored numbers agree with the items.
    pub fn is_consistent_with(&self, items: &[Item]) -> bool {
        Self::compute(items, self.previous_balance, self.advance)
            .is_ok_and(|money| money == *self)
    }
}
