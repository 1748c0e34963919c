//! Scenario runner for batch and comparative estimates
//!
//! Loads benchmarks once, then evaluates many forms or one input across
//! every industry without re-reading the benchmark file.

use rayon::prelude::*;
use std::io::Write;

use crate::benchmarks::{BenchmarkTable, Industry};
use crate::error::Result;
use crate::estimator::{Estimate, EstimatorConfig, SavingsCategory, SavingsEstimator, PROJECTION_YEARS};
use crate::input::{EstimatorInput, FormRecord};

/// Outcome of one batch row
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub id: String,
    pub estimate: Option<Estimate>,
    pub error: Option<String>,
}

/// Pre-loaded runner for batch and comparative estimates
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
/// for estimate in runner.compare_industries(&input) {
///     println!("{}: {}", estimate.industry, estimate.breakdown.total);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    estimator: SavingsEstimator,
    config: EstimatorConfig,
}

impl ScenarioRunner {
    /// Runner with built-in benchmarks
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with benchmarks loaded from data/benchmarks.csv
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_benchmarks(BenchmarkTable::from_csv()?))
    }

    /// Runner with benchmarks loaded from a specific file
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::with_benchmarks(BenchmarkTable::from_csv_path(path)?))
    }

    pub fn with_benchmarks(benchmarks: BenchmarkTable) -> Self {
        Self {
            estimator: SavingsEstimator::new(benchmarks),
            config: EstimatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EstimatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Estimate a single input, honouring the strict setting
    pub fn run(&self, input: &EstimatorInput) -> Result<Estimate> {
        if self.config.strict {
            self.estimator.estimate_checked(input)
        } else {
            Ok(self.estimator.estimate(input))
        }
    }

    /// Same metrics under every industry, in selector order
    pub fn compare_industries(&self, input: &EstimatorInput) -> Vec<Estimate> {
        Industry::ALL
            .iter()
            .map(|&industry| self.estimator.estimate(&input.with_industry(industry)))
            .collect()
    }

    /// Estimate every row in parallel; rows that fail keep their error text
    pub fn run_batch(&self, records: &[FormRecord]) -> Vec<BatchResult> {
        log::info!("Running batch of {} forms", records.len());

        let results: Vec<BatchResult> = records
            .par_iter()
            .map(|record| match self.estimator.estimate_form_with(&record.form, &self.config) {
                Ok(estimate) => BatchResult {
                    id: record.id.clone(),
                    estimate: Some(estimate),
                    error: None,
                },
                Err(err) => BatchResult {
                    id: record.id.clone(),
                    estimate: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();

        let failed = results.iter().filter(|r| r.error.is_some()).count();
        if failed > 0 {
            log::warn!("{} of {} forms produced no estimate", failed, results.len());
        }

        results
    }
}

/// Write batch results as one flat CSV row per form
///
/// Amount columns per category, the total, then the revenue at each
/// projected point. Rows without an estimate leave those columns empty
/// and fill `error`.
pub fn write_batch_csv<W: Write>(writer: W, results: &[BatchResult]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["id".to_string(), "industry".to_string()];
    header.extend(SavingsCategory::ALL.iter().map(|c| c.key().to_string()));
    header.push("total".to_string());
    header.push("current".to_string());
    header.extend((1..=PROJECTION_YEARS).map(|y| format!("year{}", y)));
    header.push("error".to_string());
    csv.write_record(&header)?;

    let value_columns = SavingsCategory::ALL.len() + 2 + PROJECTION_YEARS as usize;

    for result in results {
        let mut record = vec![result.id.clone()];
        match &result.estimate {
            Some(estimate) => {
                record.push(estimate.industry.to_string());
                record.extend(estimate.breakdown.iter().map(|(_, s)| s.amount.to_string()));
                record.push(estimate.breakdown.total.to_string());
                record.extend(estimate.projected_growth.iter().map(|p| p.revenue.to_string()));
            }
            None => {
                record.push(String::new());
                record.extend(std::iter::repeat(String::new()).take(value_columns));
            }
        }
        record.push(result.error.clone().unwrap_or_default());
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}
