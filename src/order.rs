//! Order models for CSV parsing and internal representation.

use crate::amount::Amount;
use crate::error::{AnalyticsError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Header names every input file must declare.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "order_id",
    "customer_id",
    "restaurant_id",
    "delivery_time",
    "total_amount",
    "discount_applied",
    "feedback_rating",
];

/// Raw order row as read from CSV.
///
/// Every field is optional text so that a missing or malformed numeric value
/// can be reported with its row and field name instead of a generic serde
/// message. Columns not listed here are ignored. An empty identifier or
/// timestamp field becomes an empty string.
#[derive(Debug, Deserialize)]
pub struct OrderRow {
    pub order_id: Option<String>,
    pub customer_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub delivery_time: Option<String>,
    pub total_amount: Option<String>,
    pub discount_applied: Option<String>,
    pub feedback_rating: Option<String>,
}

impl OrderRow {
    /// Parses the raw CSV row into a typed record.
    ///
    /// `row` is the 1-based line number in the file, used for error messages.
    pub fn parse(self, row: usize) -> Result<OrderRecord> {
        let total_amount = parse_decimal(self.total_amount.as_deref(), row, "total_amount")?;
        let discount_applied =
            parse_decimal(self.discount_applied.as_deref(), row, "discount_applied")?;
        let feedback_rating =
            parse_decimal(self.feedback_rating.as_deref(), row, "feedback_rating")?;

        Ok(OrderRecord {
            order_id: self.order_id.unwrap_or_default(),
            customer_id: self.customer_id.unwrap_or_default(),
            restaurant_id: self.restaurant_id.unwrap_or_default(),
            delivery_time: self.delivery_time.unwrap_or_default(),
            total_amount: Amount::new(total_amount),
            discount_applied: Amount::new(discount_applied),
            feedback_rating,
        })
    }
}

fn parse_decimal(raw: Option<&str>, row: usize, field: &'static str) -> Result<Decimal> {
    let text = raw.map(str::trim).unwrap_or_default();
    Decimal::from_str(text).map_err(|_| AnalyticsError::Parse {
        row,
        field,
        value: text.to_string(),
    })
}

/// A single delivery order.
///
/// Identifier and timestamp fields are kept verbatim. Amounts are expected to
/// be non-negative with `discount_applied <= total_amount`, but neither is
/// enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_id: String,
    pub restaurant_id: String,
    pub delivery_time: String,
    pub total_amount: Amount,
    pub discount_applied: Amount,
    pub feedback_rating: Decimal,
}

impl OrderRecord {
    /// Total amount minus discount applied.
    pub fn net_amount(&self) -> Result<Amount> {
        self.total_amount
            .checked_sub(self.discount_applied)
            .ok_or_else(|| AnalyticsError::Overflow {
                quantity: "net amount",
                order_id: self.order_id.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(total: &str, discount: &str, rating: &str) -> OrderRow {
        OrderRow {
            order_id: Some("O1".to_string()),
            customer_id: Some("C1".to_string()),
            restaurant_id: Some("R1".to_string()),
            delivery_time: Some("2024-01-01 12:30".to_string()),
            total_amount: Some(total.to_string()),
            discount_applied: Some(discount.to_string()),
            feedback_rating: Some(rating.to_string()),
        }
    }

    #[test]
    fn test_parse_order() {
        let record = row("600", "50", "4.5").parse(2).unwrap();

        assert_eq!(record.order_id, "O1");
        assert_eq!(record.delivery_time, "2024-01-01 12:30");
        assert_eq!(record.total_amount, Amount::from_str("600").unwrap());
        assert_eq!(record.discount_applied, Amount::from_str("50").unwrap());
        assert_eq!(record.feedback_rating, Decimal::from_str("4.5").unwrap());
        assert_eq!(record.net_amount().unwrap(), Amount::from_str("550").unwrap());
    }

    #[test]
    fn test_parse_trims_numbers_only() {
        let mut raw = row("  10.0  ", " 2.5", "3 ");
        raw.order_id = Some(" O1 ".to_string());

        let record = raw.parse(2).unwrap();
        assert_eq!(record.net_amount().unwrap().to_string(), "7.50");
        assert_eq!(record.order_id, " O1 ");
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        let err = row("abc", "0", "4").parse(7).unwrap_err();
        match err {
            AnalyticsError::Parse { row, field, value } => {
                assert_eq!(row, 7);
                assert_eq!(field, "total_amount");
                assert_eq!(value, "abc");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_missing_rating() {
        let mut raw = row("10", "0", "4");
        raw.feedback_rating = None;

        let err = raw.parse(3).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Parse {
                field: "feedback_rating",
                row: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_discount_above_total_is_kept() {
        let record = row("20", "30", "5").parse(2).unwrap();
        assert!(record.net_amount().unwrap().is_negative());
    }

    #[test]
    fn test_net_amount_overflow_is_error() {
        let record = row("79228162514264337593543950335", "-1", "5").parse(2).unwrap();

        match record.net_amount().unwrap_err() {
            AnalyticsError::Overflow { quantity, order_id } => {
                assert_eq!(quantity, "net amount");
                assert_eq!(order_id, "O1");
            }
            other => panic!("Expected Overflow error, got {:?}", other),
        }
    }
}
