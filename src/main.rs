//! Order Analytics CLI
//!
//! Reads an orders CSV and prints a revenue report to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- orders.csv
//! ```
//!
//! Without an argument, `orders.csv` next to the executable is used.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info`, `debug` or `warn` to control logging verbosity

use order_analytics::{
    default_input_path, load_path_with, summarize, write_columns, write_summary, Result,
    Thresholds,
};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let input_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_input_path);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    // Columns go out as soon as the header is read, ahead of any load error.
    let dataset = load_path_with(&input_path, |columns| write_columns(&mut handle, columns))?;

    let thresholds = Thresholds::default();
    let summary = summarize(&dataset, &thresholds)?;

    write_summary(&mut handle, &dataset, &summary, &thresholds)?;

    Ok(())
}
