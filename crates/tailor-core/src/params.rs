//! Parameter structures for workshop operations.
//!
//! Plain data passed from an interface layer (the CLI today) into
//! [`crate::Workshop`]. Interface crates define their own argument types with
//! framework derives and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│    Workshop     │
//! │  (clap derives) │    │ (serde derives) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::collections::BTreeMap;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ShopError},
    models::{Financials, GarmentType, Item},
};

/// Parameters for operations requiring just an order ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: u64,
}

/// One billed line as entered at the counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemInput {
    pub cloth_type: String,
    pub qty: u32,
    pub rate: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub measurements: BTreeMap<String, String>,
}

impl From<ItemInput> for Item {
    fn from(input: ItemInput) -> Self {
        Item {
            cloth_type: input.cloth_type.trim().to_string(),
            qty: input.qty,
            rate: input.rate,
            description: input.description.filter(|text| !text.trim().is_empty()),
            measurements: input
                .measurements
                .into_iter()
                .filter(|(_, value)| !value.trim().is_empty())
                .collect(),
        }
    }
}

/// Parameters for billing a new order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrder {
    pub customer_name: String,
    pub mobile: String,
    pub items: Vec<ItemInput>,

    /// Paid at the counter
    #[serde(default)]
    pub advance: Decimal,

    /// Carried-over balance; `None` takes it from the customer's last bill
    #[serde(default)]
    pub previous_balance: Option<Decimal>,

    /// Defaults to today
    #[serde(default)]
    pub bill_date: Option<Date>,

    #[serde(default)]
    pub delivery_date: Option<Date>,

    #[serde(default)]
    pub instructions: Option<String>,
}

impl CreateOrder {
    /// Checks the fields required before an order may enter the pipeline.
    ///
    /// # Errors
    ///
    /// * `ShopError::Validation` - When the customer name is blank, there are
    ///   no items, an item names no known garment, a quantity is zero, an
    ///   amount is negative or the bill total overflows
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tailor_core::params::{CreateOrder, ItemInput};
    ///
    /// let mut params = CreateOrder::default();
    /// params.customer_name = "Meena".to_string();
    /// assert!(params.validate().is_err());
    ///
    /// params.items.push(ItemInput {
    ///     cloth_type: "Blouse".to_string(),
    ///     qty: 1,
    ///     rate: Decimal::from(450),
    ///     description: None,
    ///     measurements: Default::default(),
    /// });
    /// assert!(params.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            return Err(ShopError::validation("customer_name")
                .with_reason("Customer name is required"));
        }

        if self.items.is_empty() {
            return Err(ShopError::validation("items").with_reason("At least one item is required"));
        }

        for (index, item) in self.items.iter().enumerate() {
            let line = index + 1;
            if item.cloth_type.trim().is_empty() {
                return Err(ShopError::validation("cloth_type")
                    .with_reason(format!("Item {line} has no garment type")));
            }
            if GarmentType::parse(&item.cloth_type).is_none() {
                return Err(ShopError::validation("cloth_type").with_reason(format!(
                    "Item {line} has unknown garment type '{}'",
                    item.cloth_type
                )));
            }
            if item.qty == 0 {
                return Err(ShopError::validation("qty")
                    .with_reason(format!("Item {line} quantity must be at least 1")));
            }
            if item.rate.is_sign_negative() {
                return Err(ShopError::validation("rate")
                    .with_reason(format!("Item {line} rate cannot be negative")));
            }
        }

        if self.advance.is_sign_negative() {
            return Err(ShopError::validation("advance").with_reason("Advance cannot be negative"));
        }

        let items: Vec<Item> = self.items.iter().cloned().map(Item::from).collect();
        Financials::compute(
            &items,
            self.previous_balance.unwrap_or_default(),
            self.advance,
        )?;

        Ok(())
    }
}

/// Parameters for recording a new advance total on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAdvance {
    pub order_id: u64,
    /// Total advance paid so far, replacing the previous figure
    pub advance: Decimal,
}
