//! CSV-based benchmark loader
//!
//! Loads benchmark overrides from data/benchmarks.csv. Expected columns:
//! industry,data_efficiency,process_optimization,predictive_analytics,
//! employee_productivity,customer_retention,inventory_management
//!
//! An empty inventory_management cell means the category does not apply.

use super::{Benchmark, Industry};
use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the benchmark file
pub const DEFAULT_BENCHMARKS_PATH: &str = "data/benchmarks.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    industry: String,
    data_efficiency: f64,
    process_optimization: f64,
    predictive_analytics: f64,
    employee_productivity: f64,
    customer_retention: f64,
    #[serde(default)]
    inventory_management: Option<f64>,
}

impl CsvRow {
    fn into_entry(self) -> Result<(Industry, Benchmark)> {
        let industry = self.industry.parse::<Industry>()?;
        Ok((
            industry,
            Benchmark {
                data_efficiency: self.data_efficiency,
                process_optimization: self.process_optimization,
                predictive_analytics: self.predictive_analytics,
                employee_productivity: self.employee_productivity,
                customer_retention: self.customer_retention,
                inventory_management: self.inventory_management,
            },
        ))
    }
}

/// Load benchmark rows from a CSV file
pub fn load_benchmark_rows(path: &Path) -> Result<Vec<(Industry, Benchmark)>> {
    let file = File::open(path)?;
    let rows = load_benchmark_rows_from_reader(file)?;
    log::info!("Loaded {} benchmark rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load benchmark rows from any reader
pub fn load_benchmark_rows_from_reader<R: Read>(reader: R) -> Result<Vec<(Industry, Benchmark)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row.into_entry()?);
    }

    Ok(rows)
}
