//! Front-desk bill drafting.
//!
//! A [`BillDraft`] is the editable form behind a new bill. Its
//! [`Financials`] are derived from the current items and money on every
//! read, so they always satisfy `balance == total_amount - advance`.

use std::collections::BTreeMap;

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::{
    error::{Result, ShopError},
    models::{Customer, Financials, GarmentType, Item},
    params::{CreateOrder, ItemInput},
};

/// Editable bill before it is saved as an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillDraft {
    customer_name: String,
    mobile: String,
    items: Vec<ItemInput>,
    previous_balance: Decimal,
    advance: Decimal,
    delivery_date: Option<Date>,
    instructions: Option<String>,
}

impl BillDraft {
    pub fn new(customer_name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            mobile: mobile.into(),
            ..Default::default()
        }
    }

    /// Fills the customer fields and carried balance from the ledger.
    pub fn select_customer(&mut self, customer: &Customer) {
        self.customer_name = customer.name.clone();
        self.mobile = customer.mobile.clone();
        self.previous_balance = customer.previous_balance;
    }

    /// Appends an item and returns its index.
    pub fn add_item(&mut self, cloth_type: impl Into<String>, qty: u32, rate: Decimal) -> usize {
        self.items.push(ItemInput {
            cloth_type: cloth_type.into(),
            qty,
            rate,
            description: None,
            measurements: BTreeMap::new(),
        });
        self.items.len() - 1
    }

    /// Changes an item's garment. Measurements taken for the old garment
    /// are dropped.
    pub fn set_garment(&mut self, index: usize, cloth_type: impl Into<String>) -> Result<()> {
        let item = self.item_mut(index)?;
        item.cloth_type = cloth_type.into();
        item.measurements.clear();
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, qty: u32) -> Result<()> {
        self.item_mut(index)?.qty = qty;
        Ok(())
    }

    pub fn set_rate(&mut self, index: usize, rate: Decimal) -> Result<()> {
        self.item_mut(index)?.rate = rate;
        Ok(())
    }

    pub fn set_description(&mut self, index: usize, description: impl Into<String>) -> Result<()> {
        self.item_mut(index)?.description = Some(description.into());
        Ok(())
    }

    pub fn set_measurement(
        &mut self,
        index: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.item_mut(index)?
            .measurements
            .insert(field.into(), value.into());
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<ItemInput> {
        if index >= self.items.len() {
            return Err(Self::no_item(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn set_previous_balance(&mut self, previous_balance: Decimal) {
        self.previous_balance = previous_balance;
    }

    pub fn set_advance(&mut self, advance: Decimal) {
        self.advance = advance;
    }

    pub fn set_delivery_date(&mut self, date: Option<Date>) {
        self.delivery_date = date;
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = Some(instructions.into());
    }

    /// Current totals.
    ///
    /// # Errors
    ///
    /// * `ShopError::Validation` - When the amounts overflow
    pub fn financials(&self) -> Result<Financials> {
        let items: Vec<Item> = self.items.iter().cloned().map(Item::from).collect();
        Financials::compute(&items, self.previous_balance, self.advance)
    }

    pub fn items(&self) -> &[ItemInput] {
        &self.items
    }

    /// Measurement fields the form should ask for on an item.
    pub fn measurement_fields(&self, index: usize) -> &'static [&'static str] {
        self.items
            .get(index)
            .and_then(|item| GarmentType::parse(&item.cloth_type))
            .map(|garment| garment.measurement_fields())
            .unwrap_or(&[])
    }

    /// Validates the draft and turns it into creation parameters.
    pub fn into_params(self) -> Result<CreateOrder> {
        let params = CreateOrder {
            customer_name: self.customer_name.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            items: self.items,
            advance: self.advance,
            previous_balance: Some(self.previous_balance),
            bill_date: None,
            delivery_date: self.delivery_date,
            instructions: self.instructions.filter(|text| !text.trim().is_empty()),
        };
        params.validate()?;
        Ok(params)
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut ItemInput> {
        self.items.get_mut(index).ok_or_else(|| Self::no_item(index))
    }

    fn no_item(index: usize) -> ShopError {
        ShopError::validation("items").with_reason(format!("No item at position {}", index + 1))
    }
}
