//! CSV loader producing an [`OrderDataset`].
//!
//! The whole file is read before any statistic is computed. Loading fails
//! fast: the first missing column, unparseable number or malformed CSV row
//! aborts the load.

use crate::dataset::OrderDataset;
use crate::error::{AnalyticsError, Result};
use crate::order::{OrderRow, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File name looked up next to the executable when no path is given.
pub const DEFAULT_INPUT_FILE: &str = "orders.csv";

/// Returns `orders.csv` in the directory holding the running executable.
///
/// Falls back to a path relative to the working directory if the executable
/// location cannot be determined.
pub fn default_input_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DEFAULT_INPUT_FILE)
}

/// Opens `path` and loads every order in it.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<OrderDataset> {
    load_path_with(path, |_| Ok(()))
}

/// Like [`load_path`], calling `on_columns` with the header row before the
/// schema is checked or any row is parsed.
pub fn load_path_with<P, F>(path: P, on_columns: F) -> Result<OrderDataset>
where
    P: AsRef<Path>,
    F: FnOnce(&[String]) -> Result<()>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalyticsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {}", path.display());

    load_orders_with(BufReader::new(file), on_columns)
}

/// Loads orders from any CSV reader.
///
/// Header names and text fields are kept verbatim, surrounding whitespace
/// included; only numeric fields are trimmed before parsing. Extra columns
/// are ignored.
pub fn load_orders<R: Read>(reader: R) -> Result<OrderDataset> {
    load_orders_with(reader, |_| Ok(()))
}

/// Like [`load_orders`], calling `on_columns` with the header row before the
/// schema is checked or any row is parsed.
pub fn load_orders_with<R, F>(reader: R, on_columns: F) -> Result<OrderDataset>
where
    R: Read,
    F: FnOnce(&[String]) -> Result<()>,
{
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::None)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    info!("CSV columns: {:?}", columns);
    on_columns(&columns)?;

    check_schema(&columns)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let raw = result?;
        let row_num = raw
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(records.len() + 2);

        let row: OrderRow = raw.deserialize(Some(&headers))?;
        let order = row.parse(row_num)?;

        if order.total_amount.is_negative() || order.discount_applied.is_negative() {
            warn!(
                "Row {}: order {} has a negative amount (total {}, discount {})",
                row_num,
                order.order_id,
                order.total_amount.value(),
                order.discount_applied.value()
            );
        }
        if order.discount_applied > order.total_amount {
            warn!(
                "Row {}: order {} discount {} exceeds total {}",
                row_num,
                order.order_id,
                order.discount_applied.value(),
                order.total_amount.value()
            );
        }

        debug!(
            "Row {}: order {} total {} discount {} rating {}",
            row_num,
            order.order_id,
            order.total_amount.value(),
            order.discount_applied.value(),
            order.feedback_rating
        );
        records.push(order);
    }

    info!("Loaded {} orders", records.len());
    Ok(OrderDataset::new(columns, records))
}

/// Verifies that every required column is present in the header row.
fn check_schema(columns: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnalyticsError::Schema {
            missing,
            found: columns.to_vec(),
        })
    }
}
