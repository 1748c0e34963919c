//! End-to-end checks through the public API

use approx::assert_relative_eq;
use savings_estimator::estimator::{SavingsCategory, StaleOutputPolicy};
use savings_estimator::input::load_forms;
use savings_estimator::{
    BenchmarkTable, CalculatorSession, EstimatorConfig, Field, FormState, Industry,
    SavingsEstimator, ScenarioRunner,
};
use std::path::Path;

fn reference_form() -> FormState {
    FormState::new(Industry::Retail)
        .with_field(Field::AnnualRevenue, "1000000")
        .with_field(Field::OperatingCosts, "600000")
        .with_field(Field::EmployeeCount, "50")
        .with_field(Field::ItSpend, "100000")
        .with_field(Field::CustomerAcquisitionCost, "500")
        .with_field(Field::InventoryTurnover, "4")
        .with_field(Field::AvgEmployeeSalary, "60000")
        .with_field(Field::CustomerLifetimeValue, "2000")
        .with_field(Field::AvgProjectDuration, "6")
}

#[test]
fn retail_reference_matches_closed_form() {
    let estimate = SavingsEstimator::default()
        .estimate_form(&reference_form())
        .expect("form is complete");

    let expected = [
        (SavingsCategory::DataEfficiency, 15_000.0),
        (SavingsCategory::ProcessOptimization, 30_000.0),
        (SavingsCategory::PredictiveAnalytics, 20_000.0),
        (SavingsCategory::EmployeeProductivity, 300_000.0),
        (SavingsCategory::CustomerRetention, 600_000.0),
        (SavingsCategory::InventoryManagement, 48_000.0),
    ];
    for (category, amount) in expected {
        assert_relative_eq!(estimate.breakdown.get(category).amount, amount, max_relative = 1e-12);
    }
    assert_relative_eq!(estimate.breakdown.total, 1_013_000.0, max_relative = 1e-12);
}

#[test]
fn project_duration_does_not_affect_result() {
    let estimator = SavingsEstimator::default();
    let a = estimator.estimate_form(&reference_form()).unwrap();
    let b = estimator
        .estimate_form(&reference_form().with_field(Field::AvgProjectDuration, "48"))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn growth_series_is_non_decreasing_for_positive_savings() {
    let runner = ScenarioRunner::new();
    let input = reference_form().parse().unwrap();

    for estimate in runner.compare_industries(&input) {
        let points = estimate.projected_growth.points();
        assert_eq!(points.len(), 6);
        assert!(estimate.breakdown.total > 0.0);
        for pair in points.windows(2) {
            assert!(pair[1].revenue >= pair[0].revenue, "{}", estimate.industry);
        }
    }
}

#[test]
fn non_retail_ignores_inventory_turnover() {
    let estimator = SavingsEstimator::default();
    for industry in [Industry::Education, Industry::Finance, Industry::Service] {
        let low = reference_form().with_industry(industry);
        let high = low.with_field(Field::InventoryTurnover, "1000");

        let low = estimator.estimate_form(&low).unwrap();
        let high = estimator.estimate_form(&high).unwrap();

        assert_eq!(low.breakdown.inventory_management.amount, 0.0);
        assert_eq!(low, high);
    }
}

#[test]
fn zero_acquisition_cost_propagates_without_error() {
    let form = reference_form().with_field(Field::CustomerAcquisitionCost, "0");
    let estimate = SavingsEstimator::default().estimate_form(&form).unwrap();

    assert!(!estimate.breakdown.customer_retention.amount.is_finite());
    assert!(estimate
        .projected_growth
        .points()
        .iter()
        .skip(1)
        .all(|p| !p.revenue.is_finite()));
}

#[test]
fn strict_config_rejects_degenerate_input() {
    let estimator = SavingsEstimator::default();
    let config = EstimatorConfig {
        strict: true,
        ..Default::default()
    };

    let zero_revenue = reference_form().with_field(Field::AnnualRevenue, "0");
    assert!(estimator.estimate_form_with(&zero_revenue, &config).is_err());

    let garbage = reference_form().with_field(Field::ItSpend, "lots");
    assert!(estimator.estimate_form_with(&garbage, &config).is_err());
    assert!(estimator
        .estimate_form_with(&garbage, &EstimatorConfig::default())
        .unwrap()
        .breakdown
        .total
        .is_nan());
}

#[test]
fn session_switching_industry_leaves_no_stale_coefficients() {
    let mut session = CalculatorSession::new();
    session.replace_form(reference_form());

    for industry in Industry::ALL {
        let estimate = session.set_industry(industry).cloned().unwrap();
        let benchmark = *SavingsEstimator::default().benchmarks().get(industry);
        for category in SavingsCategory::ALL {
            assert_eq!(
                estimate.breakdown.get(category).percentage,
                category.coefficient(&benchmark)
            );
        }
    }
}

#[test]
fn session_policies_on_incomplete_form() {
    let mut retain = CalculatorSession::new();
    retain.replace_form(reference_form());
    retain.update(Field::EmployeeCount, "");
    assert!(retain.estimate().is_some());

    let clear_config = EstimatorConfig {
        stale_output: StaleOutputPolicy::Clear,
        ..Default::default()
    };
    let mut clear = CalculatorSession::with_estimator(SavingsEstimator::default(), clear_config);
    clear.replace_form(reference_form());
    clear.update(Field::EmployeeCount, "");
    assert!(clear.estimate().is_none());
}

#[test]
fn bundled_data_files_load() {
    let table = BenchmarkTable::from_csv_path(Path::new("data/benchmarks.csv")).unwrap();
    assert_eq!(table, BenchmarkTable::default_benchmarks());

    let records = load_forms("data/sample_forms.csv").unwrap();
    assert_eq!(records.len(), 4);

    let results = ScenarioRunner::with_benchmarks(table).run_batch(&records);
    assert!(results[0].estimate.is_some());
    // The agency row leaves project duration blank
    assert!(results[3].estimate.is_none());
}
