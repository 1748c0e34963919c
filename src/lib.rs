//! Savings Estimator - ROI calculator engine for technology-consulting leads
//!
//! This library provides:
//! - Per-industry benchmark coefficients (built in or loaded from CSV)
//! - Form parsing with the calculator's lenient numeric semantics
//! - Category savings breakdown and 5-year revenue projection
//! - An interactive session with explicit stale-output handling
//! - Batch and cross-industry scenario runs

pub mod benchmarks;
pub mod error;
pub mod estimator;
pub mod input;
mod non_finite;
pub mod scenario;
pub mod session;

// Re-export commonly used types
pub use benchmarks::{Benchmark, BenchmarkTable, Industry};
pub use error::{EstimatorError, Result};
pub use estimator::{Estimate, EstimateReport, EstimatorConfig, SavingsBreakdown, SavingsEstimator};
pub use input::{EstimatorInput, Field, FormState};
pub use scenario::ScenarioRunner;
pub use session::CalculatorSession;
