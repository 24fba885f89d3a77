//! Revenue statistics over a loaded [`OrderDataset`].
//!
//! All statistics are computed at full decimal precision from the net-amount
//! series. Rounding only happens when a value is displayed.

use crate::amount::Amount;
use crate::dataset::OrderDataset;
use crate::error::{AnalyticsError, Result};
use crate::order::OrderRecord;
use log::debug;
use rust_decimal::Decimal;

/// Net amount at or above which an order counts as high value.
pub const HIGH_VALUE_THRESHOLD: Amount = Amount::new(Decimal::from_parts(500, 0, 0, false, 0));

/// Rating strictly above which an order counts as well rated.
pub const WELL_RATED_THRESHOLD: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Cut-off values used by [`summarize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Inclusive lower bound on net amount for high-value orders.
    pub high_value: Amount,

    /// Exclusive lower bound on feedback rating for well-rated orders.
    pub well_rated: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            high_value: HIGH_VALUE_THRESHOLD,
            well_rated: WELL_RATED_THRESHOLD,
        }
    }
}

/// Summary statistics of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub order_count: usize,
    pub total_revenue: Amount,
    pub average_order_value: Amount,
    pub max_order_value: Amount,
    pub min_order_value: Amount,
    pub high_value_count: usize,
    pub well_rated_revenue: Amount,
    pub well_rated_count: usize,
}

/// Returns `total_amount - discount_applied` for every record, in order.
///
/// Fails with [`AnalyticsError::Overflow`] if a difference leaves the decimal
/// range.
pub fn net_amounts(dataset: &OrderDataset) -> Result<Vec<Amount>> {
    dataset.records().iter().map(|r| r.net_amount()).collect()
}

/// Computes the revenue summary of `dataset`.
///
/// Fails with [`AnalyticsError::EmptyDataset`] before computing anything if
/// the dataset has no records, since mean, max and min are undefined. Sums
/// that leave the decimal range fail with [`AnalyticsError::Overflow`].
pub fn summarize(dataset: &OrderDataset, thresholds: &Thresholds) -> Result<Summary> {
    if dataset.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    let net = net_amounts(dataset)?;

    let mut total_revenue = Amount::ZERO;
    let mut well_rated_revenue = Amount::ZERO;
    let mut well_rated_count = 0;
    for (record, &value) in dataset.records().iter().zip(&net) {
        total_revenue = add(total_revenue, value, "total revenue", record)?;

        if record.feedback_rating > thresholds.well_rated {
            well_rated_revenue = add(well_rated_revenue, value, "well-rated revenue", record)?;
            well_rated_count += 1;
        }
    }

    let average_order_value = total_revenue
        .checked_div_count(net.len())
        .ok_or(AnalyticsError::EmptyDataset)?;

    // Non-empty is checked above.
    let mut max_order_value = net[0];
    let mut min_order_value = net[0];
    for &value in &net[1..] {
        max_order_value = max_order_value.max(value);
        min_order_value = min_order_value.min(value);
    }

    let high_value_count = net.iter().filter(|&&v| v >= thresholds.high_value).count();

    let summary = Summary {
        order_count: net.len(),
        total_revenue,
        average_order_value,
        max_order_value,
        min_order_value,
        high_value_count,
        well_rated_revenue,
        well_rated_count,
    };
    debug!("Computed summary: {:?}", summary);

    Ok(summary)
}

fn add(
    acc: Amount,
    value: Amount,
    quantity: &'static str,
    record: &OrderRecord,
) -> Result<Amount> {
    acc.checked_add(value).ok_or_else(|| AnalyticsError::Overflow {
        quantity,
        order_id: record.order_id.clone(),
    })
}
