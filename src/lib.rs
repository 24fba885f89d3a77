//! # Order Analytics
//!
//! Loads a CSV of food-delivery orders and computes revenue statistics:
//! totals, average, extremes, high-value counts and rating-based filters.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Amounts use `rust_decimal`; rounding to 2 places
//!   happens only on display
//! - **Fail fast**: Missing columns, unparseable numbers and empty datasets
//!   are errors, never NaN or partial output
//! - **No shared state**: Loader output is passed by value to the aggregator
//!   and the report
//!
//! ## Example
//!
//! ```
//! use order_analytics::{load_orders, summarize, Thresholds};
//! use std::io::Cursor;
//!
//! let csv = "order_id,customer_id,restaurant_id,delivery_time,total_amount,discount_applied,feedback_rating\n\
//!            O1,C1,R1,2024-01-01 12:00,600,50,4.5\n";
//! let dataset = load_orders(Cursor::new(csv)).unwrap();
//! let summary = summarize(&dataset, &Thresholds::default()).unwrap();
//! assert_eq!(summary.total_revenue.to_string(), "550.00");
//! ```

pub mod aggregator;
pub mod amount;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod order;
pub mod report;

pub use aggregator::{
    net_amounts, summarize, Summary, Thresholds, HIGH_VALUE_THRESHOLD, WELL_RATED_THRESHOLD,
};
pub use amount::Amount;
pub use dataset::OrderDataset;
pub use error::{AnalyticsError, Result};
pub use loader::{default_input_path, load_orders, load_orders_with, load_path, load_path_with};
pub use order::{OrderRecord, OrderRow, REQUIRED_COLUMNS};
pub use report::{write_columns, write_report, write_summary};
