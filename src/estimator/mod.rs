//! Savings estimator: category breakdown and revenue projection

mod breakdown;
mod engine;
mod growth;
mod report;

pub use breakdown::{CategorySavings, SavingsBreakdown, SavingsCategory};
pub use engine::{estimate, Estimate, EstimatorConfig, SavingsEstimator, StaleOutputPolicy};
pub use growth::{growth_rate, GrowthPoint, ProjectedGrowthSeries, PROJECTION_YEARS};
pub use report::{format_currency, EstimateReport, DISCLAIMER};
