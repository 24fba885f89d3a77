//! Plain-text report rendering.

use crate::aggregator::{Summary, Thresholds};
use crate::dataset::OrderDataset;
use crate::error::Result;
use std::fmt::Display;
use std::io::Write;

/// Currency symbol printed in front of monetary values.
pub const CURRENCY: &str = "₹";

/// Writes the full report for `dataset`.
///
/// Sections, in order: discovered columns, financial summary, high-value
/// count, well-rated revenue and count, then the raw value of every field for
/// every order. Monetary summary values are rounded to 2 decimal places; raw
/// listings are printed unrounded.
pub fn write_report<W: Write>(
    mut writer: W,
    dataset: &OrderDataset,
    summary: &Summary,
    thresholds: &Thresholds,
) -> Result<()> {
    write_columns(&mut writer, dataset.columns())?;
    write_summary(writer, dataset, summary, thresholds)
}

/// Writes the `CSV Columns:` line and flushes, so the header is visible even
/// if loading fails afterwards.
pub fn write_columns<W: Write>(mut writer: W, columns: &[String]) -> Result<()> {
    writeln!(writer, "CSV Columns: {}", list(columns))?;
    writer.flush()?;
    Ok(())
}

/// Writes every report section after the column line.
pub fn write_summary<W: Write>(
    mut writer: W,
    dataset: &OrderDataset,
    summary: &Summary,
    thresholds: &Thresholds,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Financial Summary:")?;
    writeln!(writer, "Total Revenue:       {} {}", CURRENCY, summary.total_revenue)?;
    writeln!(
        writer,
        "Average Order Value: {} {}",
        CURRENCY, summary.average_order_value
    )?;
    writeln!(writer, "Max Order Value:     {} {}", CURRENCY, summary.max_order_value)?;
    writeln!(writer, "Min Order Value:     {} {}", CURRENCY, summary.min_order_value)?;

    writeln!(
        writer,
        "High value orders (≥ {}{}) count: {}",
        CURRENCY,
        thresholds.high_value.value(),
        summary.high_value_count
    )?;
    writeln!(
        writer,
        "Revenue from well-rated orders (> {}): {} {}",
        thresholds.well_rated, CURRENCY, summary.well_rated_revenue
    )?;
    writeln!(
        writer,
        "Number of well-rated orders:          {}",
        summary.well_rated_count
    )?;

    let totals: Vec<_> = dataset.total_amounts().iter().map(|a| a.value()).collect();
    let discounts: Vec<_> = dataset.discounts().iter().map(|a| a.value()).collect();

    writeln!(writer)?;
    writeln!(writer, "Order IDs: {}", list(&dataset.order_ids()))?;
    writeln!(writer, "Customers: {}", list(&dataset.customer_ids()))?;
    writeln!(writer, "Restaurants: {}", list(&dataset.restaurant_ids()))?;
    writeln!(writer, "Delivery Time: {}", list(&dataset.delivery_times()))?;
    writeln!(writer, "Total Amount: {}", list(&totals))?;
    writeln!(writer, "Discount Applied: {}", list(&discounts))?;
    writeln!(writer, "Ratings: {}", list(&dataset.ratings()))?;

    writer.flush()?;
    Ok(())
}

fn list<T: Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::summarize;
    use crate::loader::load_orders;
    use std::io::Cursor;

    fn render(csv: &str) -> String {
        let dataset = load_orders(Cursor::new(csv.to_string())).unwrap();
        let thresholds = Thresholds::default();
        let summary = summarize(&dataset, &thresholds).unwrap();

        let mut output = Vec::new();
        write_report(&mut output, &dataset, &summary, &thresholds).unwrap();
        String::from_utf8(output).unwrap()
    }

    const SAMPLE: &str = "order_id,customer_id,restaurant_id,delivery_time,total_amount,discount_applied,feedback_rating
O1,C1,R1,2024-01-01 12:00,600,50,4.5
O2,C2,R2,2024-01-01 13:00,200,0,3
";

    #[test]
    fn test_report_sections_in_order() {
        let output = render(SAMPLE);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("CSV Columns: [order_id, customer_id"));
        assert_eq!(lines[2], "Financial Summary:");
        assert_eq!(lines[3], "Total Revenue:       ₹ 750.00");
        assert_eq!(lines[4], "Average Order Value: ₹ 375.00");
        assert_eq!(lines[5], "Max Order Value:     ₹ 550.00");
        assert_eq!(lines[6], "Min Order Value:     ₹ 200.00");
        assert_eq!(lines[7], "High value orders (≥ ₹500) count: 1");
        assert_eq!(lines[8], "Revenue from well-rated orders (> 4): ₹ 550.00");
        assert_eq!(lines[9], "Number of well-rated orders:          1");
        assert_eq!(lines[11], "Order IDs: [O1, O2]");
        assert_eq!(lines[12], "Customers: [C1, C2]");
        assert_eq!(lines[13], "Restaurants: [R1, R2]");
        assert_eq!(lines[14], "Delivery Time: [2024-01-01 12:00, 2024-01-01 13:00]");
        assert_eq!(lines[15], "Total Amount: [600, 200]");
        assert_eq!(lines[16], "Discount Applied: [50, 0]");
        assert_eq!(lines[17], "Ratings: [4.5, 3]");
    }

    #[test]
    fn test_write_columns_alone() {
        let mut output = Vec::new();
        write_columns(&mut output, &[" order_id".to_string(), "notes".to_string()]).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "CSV Columns: [ order_id, notes]\n");
    }

    #[test]
    fn test_summary_values_rounded_to_two_places() {
        let csv = "order_id,customer_id,restaurant_id,delivery_time,total_amount,discount_applied,feedback_rating
O1,C1,R1,t,10.456,0.001,5
O2,C1,R1,t,3.1,0,1
";
        let output = render(csv);

        assert!(output.contains("Total Revenue:       ₹ 13.56\n"));
        assert!(output.contains("Max Order Value:     ₹ 10.46\n"));
        assert!(output.contains("Total Amount: [10.456, 3.1]"));
    }
}
