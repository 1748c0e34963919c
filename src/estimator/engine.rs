//! Core savings estimator

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::breakdown::{CategorySavings, SavingsBreakdown};
use super::growth::ProjectedGrowthSeries;
use crate::benchmarks::{BenchmarkTable, Industry};
use crate::error::Result;
use crate::input::{EstimatorInput, FormState};

/// What a session shows when the form becomes incomplete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleOutputPolicy {
    /// Keep displaying the last complete estimate
    #[default]
    Retain,
    /// Drop the estimate until the form is complete again
    Clear,
}

/// Configuration for estimate runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub stale_output: StaleOutputPolicy,

    /// Reject degenerate inputs instead of letting NaN/infinity through
    pub strict: bool,
}

/// Breakdown and projection produced from one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub industry: Industry,
    pub breakdown: SavingsBreakdown,
    pub projected_growth: ProjectedGrowthSeries,
}

/// Maps business metrics to estimated savings using industry benchmarks
#[derive(Debug, Clone, Default)]
pub struct SavingsEstimator {
    benchmarks: BenchmarkTable,
}

impl SavingsEstimator {
    pub fn new(benchmarks: BenchmarkTable) -> Self {
        Self { benchmarks }
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    /// Compute the breakdown and projection
    ///
    /// Never fails: a zero customer acquisition cost or zero revenue yields
    /// non-finite amounts, and NaN inputs yield NaN outputs.
    pub fn estimate(&self, input: &EstimatorInput) -> Estimate {
        let breakdown = self.breakdown(input);
        let projected_growth = ProjectedGrowthSeries::project(input.annual_revenue, breakdown.total);

        debug!(
            "Estimated {} savings: total={:.2} final_revenue={:?}",
            input.industry,
            breakdown.total,
            projected_growth.final_revenue()
        );
        if !breakdown.is_finite() {
            warn!(
                "Non-finite {} estimate (revenue={}, acquisition cost={})",
                input.industry, input.annual_revenue, input.customer_acquisition_cost
            );
        }

        Estimate {
            industry: input.industry,
            breakdown,
            projected_growth,
        }
    }

    /// Validate first, then estimate
    pub fn estimate_checked(&self, input: &EstimatorInput) -> Result<Estimate> {
        input.validate()?;
        Ok(self.estimate(input))
    }

    /// Estimate straight from form text; `None` while the form is incomplete
    pub fn estimate_form(&self, form: &FormState) -> Option<Estimate> {
        form.parse().map(|input| self.estimate(&input))
    }

    /// Estimate from form text, reporting missing fields and, when `strict`,
    /// degenerate values
    pub fn estimate_form_with(&self, form: &FormState, config: &EstimatorConfig) -> Result<Estimate> {
        let input = form.try_parse()?;
        if config.strict {
            self.estimate_checked(&input)
        } else {
            Ok(self.estimate(&input))
        }
    }

    /// Per-category savings for the input's industry
    pub fn breakdown(&self, input: &EstimatorInput) -> SavingsBreakdown {
        let b = self.benchmarks.get(input.industry);

        let data_efficiency = input.it_spend * (b.data_efficiency / 100.0);
        let process_optimization = input.operating_costs * (b.process_optimization / 100.0);
        let predictive_analytics = input.annual_revenue * (b.predictive_analytics / 100.0);
        let employee_productivity =
            input.avg_employee_salary * input.employee_count * (b.employee_productivity / 100.0);
        let customer_retention = (input.customer_lifetime_value - input.customer_acquisition_cost)
            * (input.annual_revenue / input.customer_acquisition_cost)
            * (b.customer_retention / 100.0);
        let inventory_management = if input.industry.tracks_inventory() {
            input.operating_costs * (b.inventory_management_or_zero() / 100.0) * input.inventory_turnover
        } else {
            0.0
        };

        let total = data_efficiency
            + process_optimization
            + predictive_analytics
            + employee_productivity
            + customer_retention
            + inventory_management;

        SavingsBreakdown {
            data_efficiency: CategorySavings {
                amount: data_efficiency,
                percentage: b.data_efficiency,
            },
            process_optimization: CategorySavings {
                amount: process_optimization,
                percentage: b.process_optimization,
            },
            predictive_analytics: CategorySavings {
                amount: predictive_analytics,
                percentage: b.predictive_analytics,
            },
            employee_productivity: CategorySavings {
                amount: employee_productivity,
                percentage: b.employee_productivity,
            },
            customer_retention: CategorySavings {
                amount: customer_retention,
                percentage: b.customer_retention,
            },
            inventory_management: CategorySavings {
                amount: inventory_management,
                percentage: b.inventory_management_or_zero(),
            },
            total,
        }
    }
}

/// Estimate with the built-in benchmarks
pub fn estimate(input: &EstimatorInput) -> Estimate {
    SavingsEstimator::default().estimate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::Benchmark;
    use crate::error::EstimatorError;
    use crate::estimator::SavingsCategory;
    use approx::assert_relative_eq;

    fn retail_input() -> EstimatorInput {
        EstimatorInput {
            industry: Industry::Retail,
            annual_revenue: 1_000_000.0,
            operating_costs: 600_000.0,
            employee_count: 50.0,
            it_spend: 100_000.0,
            customer_acquisition_cost: 500.0,
            inventory_turnover: 4.0,
            avg_employee_salary: 60_000.0,
            customer_lifetime_value: 2_000.0,
            avg_project_duration: 6.0,
        }
    }

    #[test]
    fn test_retail_reference_breakdown() {
        let estimate = estimate(&retail_input());
        let b = &estimate.breakdown;

        assert_relative_eq!(b.data_efficiency.amount, 15_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.process_optimization.amount, 30_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.predictive_analytics.amount, 20_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.employee_productivity.amount, 300_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.customer_retention.amount, 600_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.inventory_management.amount, 48_000.0, max_relative = 1e-12);
        assert_relative_eq!(b.total, 1_013_000.0, max_relative = 1e-12);

        assert_eq!(b.inventory_management.percentage, 2.0);
        assert_eq!(b.customer_retention.percentage, 20.0);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let b = estimate(&retail_input()).breakdown;
        let sum: f64 = b.iter().map(|(_, s)| s.amount).sum();
        assert_relative_eq!(b.total, sum, max_relative = 1e-12);
    }

    #[test]
    fn test_growth_uses_total_over_revenue() {
        let estimate = estimate(&retail_input());
        let points = estimate.projected_growth.points();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].revenue, 1_000_000.0);
        assert_relative_eq!(points[1].revenue, 2_013_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            points[5].revenue,
            1_000_000.0 * 2.013_f64.powi(5),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let input = retail_input();
        let estimator = SavingsEstimator::default();
        assert_eq!(estimator.estimate(&input), estimator.estimate(&input));
    }

    #[test]
    fn test_non_retail_inventory_is_zero() {
        for industry in [Industry::Education, Industry::Finance, Industry::Service] {
            let input = EstimatorInput {
                inventory_turnover: 12.0,
                ..retail_input().with_industry(industry)
            };
            let b = estimate(&input).breakdown;
            assert_eq!(b.inventory_management.amount, 0.0);
            assert_eq!(b.inventory_management.percentage, 0.0);
        }
    }

    #[test]
    fn test_zero_acquisition_cost_is_non_finite() {
        let input = EstimatorInput {
            customer_acquisition_cost: 0.0,
            ..retail_input()
        };
        let estimate = estimate(&input);

        assert!(!estimate.breakdown.customer_retention.amount.is_finite());
        assert!(!estimate.breakdown.total.is_finite());
        assert!(!estimate.breakdown.is_finite());
    }

    #[test]
    fn test_checked_rejects_zero_acquisition_cost() {
        let input = EstimatorInput {
            customer_acquisition_cost: 0.0,
            ..retail_input()
        };
        let err = SavingsEstimator::default().estimate_checked(&input).unwrap_err();
        assert!(matches!(err, EstimatorError::ZeroDivisor("customerAcquisitionCost")));
    }

    #[test]
    fn test_switching_industry_replaces_coefficients() {
        let estimator = SavingsEstimator::default();
        let retail = estimator.estimate(&retail_input());
        let finance = estimator.estimate(&retail_input().with_industry(Industry::Finance));

        let finance_benchmark = estimator.benchmarks().get(Industry::Finance);
        for category in SavingsCategory::ALL {
            assert_eq!(
                finance.breakdown.get(category).percentage,
                category.coefficient(finance_benchmark),
                "{:?}",
                category
            );
        }
        assert_relative_eq!(finance.breakdown.data_efficiency.amount, 18_000.0, max_relative = 1e-12);
        assert!(retail.breakdown.total != finance.breakdown.total);
    }

    #[test]
    fn test_custom_benchmarks() {
        let flat = Benchmark {
            data_efficiency: 10.0,
            process_optimization: 10.0,
            predictive_analytics: 10.0,
            employee_productivity: 10.0,
            customer_retention: 0.0,
            inventory_management: None,
        };
        let table = BenchmarkTable::default_benchmarks().with_overrides([(Industry::Retail, flat)]);
        let b = SavingsEstimator::new(table).breakdown(&retail_input());

        // Retail without an inventory coefficient contributes nothing
        assert_eq!(b.inventory_management.amount, 0.0);
        assert_relative_eq!(b.data_efficiency.amount, 10_000.0, max_relative = 1e-12);
        assert_eq!(b.customer_retention.amount, 0.0);
    }

    #[test]
    fn test_estimate_form_requires_complete_form() {
        let estimator = SavingsEstimator::default();
        assert!(estimator.estimate_form(&FormState::new(Industry::Retail)).is_none());

        let config = EstimatorConfig::default();
        let err = estimator
            .estimate_form_with(&FormState::new(Industry::Retail), &config)
            .unwrap_err();
        assert!(matches!(err, EstimatorError::MissingField("annualRevenue")));
    }
}
