//! Ordered, immutable collection of loaded orders.

use crate::amount::Amount;
use crate::order::OrderRecord;
use rust_decimal::Decimal;

/// All orders from one input file, in file order.
///
/// # Invariants
///
/// - Records keep the order in which they appear in the file
/// - No uniqueness is enforced on `order_id`; duplicates are kept as-is
/// - The dataset is never mutated after loading
#[derive(Debug, Clone, Default)]
pub struct OrderDataset {
    columns: Vec<String>,
    records: Vec<OrderRecord>,
}

impl OrderDataset {
    /// Creates a dataset from the discovered header list and parsed records.
    pub fn new(columns: Vec<String>, records: Vec<OrderRecord>) -> Self {
        OrderDataset { columns, records }
    }

    /// Header names exactly as discovered in the file.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn order_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.order_id.as_str()).collect()
    }

    pub fn customer_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.customer_id.as_str()).collect()
    }

    pub fn restaurant_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.restaurant_id.as_str()).collect()
    }

    pub fn delivery_times(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.delivery_time.as_str()).collect()
    }

    pub fn total_amounts(&self) -> Vec<Amount> {
        self.records.iter().map(|r| r.total_amount).collect()
    }

    pub fn discounts(&self) -> Vec<Amount> {
        self.records.iter().map(|r| r.discount_applied).collect()
    }

    pub fn ratings(&self) -> Vec<Decimal> {
        self.records.iter().map(|r| r.feedback_rating).collect()
    }
}
