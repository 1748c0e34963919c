//! Per-category savings output

use serde::{Deserialize, Serialize};

use crate::benchmarks::{Benchmark, Industry};

/// Area in which the consulting engagement is expected to save money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SavingsCategory {
    DataEfficiency,
    ProcessOptimization,
    PredictiveAnalytics,
    EmployeeProductivity,
    CustomerRetention,
    InventoryManagement,
}

impl SavingsCategory {
    /// Display order
    pub const ALL: [SavingsCategory; 6] = [
        SavingsCategory::DataEfficiency,
        SavingsCategory::ProcessOptimization,
        SavingsCategory::PredictiveAnalytics,
        SavingsCategory::EmployeeProductivity,
        SavingsCategory::CustomerRetention,
        SavingsCategory::InventoryManagement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SavingsCategory::DataEfficiency => "dataEfficiency",
            SavingsCategory::ProcessOptimization => "processOptimization",
            SavingsCategory::PredictiveAnalytics => "predictiveAnalytics",
            SavingsCategory::EmployeeProductivity => "employeeProductivity",
            SavingsCategory::CustomerRetention => "customerRetention",
            SavingsCategory::InventoryManagement => "inventoryManagement",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SavingsCategory::DataEfficiency => "Data Efficiency",
            SavingsCategory::ProcessOptimization => "Process Optimization",
            SavingsCategory::PredictiveAnalytics => "Predictive Analytics",
            SavingsCategory::EmployeeProductivity => "Employee Productivity",
            SavingsCategory::CustomerRetention => "Customer Retention",
            SavingsCategory::InventoryManagement => "Inventory Management",
        }
    }

    /// Recommendation shown alongside the category's estimate
    pub fn suggestion(self) -> &'static str {
        match self {
            SavingsCategory::DataEfficiency => {
                "Implement advanced data analytics tools to streamline data processing and improve decision-making speed."
            }
            SavingsCategory::ProcessOptimization => {
                "Automate repetitive tasks and redesign workflows to eliminate bottlenecks and reduce operational costs."
            }
            SavingsCategory::PredictiveAnalytics => {
                "Utilize AI-driven predictive models to forecast market trends and optimize pricing strategies."
            }
            SavingsCategory::EmployeeProductivity => {
                "Invest in employee training programs and implement productivity-enhancing technologies."
            }
            SavingsCategory::CustomerRetention => {
                "Develop a data-driven customer engagement strategy to improve satisfaction and reduce churn."
            }
            SavingsCategory::InventoryManagement => {
                "Implement an AI-powered inventory management system to optimize stock levels and reduce carrying costs."
            }
        }
    }

    /// Coefficient for this category, 0 when the industry has none
    pub fn coefficient(self, benchmark: &Benchmark) -> f64 {
        match self {
            SavingsCategory::DataEfficiency => benchmark.data_efficiency,
            SavingsCategory::ProcessOptimization => benchmark.process_optimization,
            SavingsCategory::PredictiveAnalytics => benchmark.predictive_analytics,
            SavingsCategory::EmployeeProductivity => benchmark.employee_productivity,
            SavingsCategory::CustomerRetention => benchmark.customer_retention,
            SavingsCategory::InventoryManagement => benchmark.inventory_management_or_zero(),
        }
    }

    /// Inventory is only shown for retail; it still counts toward the total
    pub fn is_displayed_for(self, industry: Industry) -> bool {
        self != SavingsCategory::InventoryManagement || industry.tracks_inventory()
    }
}

/// Estimated savings for one category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategorySavings {
    /// Dollar amount
    #[serde(serialize_with = "crate::non_finite::serialize")]
    pub amount: f64,
    /// Benchmark coefficient that produced it (percent)
    pub percentage: f64,
}

/// Savings for every category plus their sum
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsBreakdown {
    pub data_efficiency: CategorySavings,
    pub process_optimization: CategorySavings,
    pub predictive_analytics: CategorySavings,
    pub employee_productivity: CategorySavings,
    pub customer_retention: CategorySavings,
    pub inventory_management: CategorySavings,
    #[serde(serialize_with = "crate::non_finite::serialize")]
    pub total: f64,
}

impl SavingsBreakdown {
    pub fn get(&self, category: SavingsCategory) -> &CategorySavings {
        match category {
            SavingsCategory::DataEfficiency => &self.data_efficiency,
            SavingsCategory::ProcessOptimization => &self.process_optimization,
            SavingsCategory::PredictiveAnalytics => &self.predictive_analytics,
            SavingsCategory::EmployeeProductivity => &self.employee_productivity,
            SavingsCategory::CustomerRetention => &self.customer_retention,
            SavingsCategory::InventoryManagement => &self.inventory_management,
        }
    }

    /// All six categories in display order
    pub fn iter(&self) -> impl Iterator<Item = (SavingsCategory, &CategorySavings)> {
        SavingsCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Categories the calculator shows for an industry
    pub fn displayed(
        &self,
        industry: Industry,
    ) -> impl Iterator<Item = (SavingsCategory, &CategorySavings)> {
        self.iter().filter(move |(c, _)| c.is_displayed_for(industry))
    }

    /// Whether every amount and the total are finite
    pub fn is_finite(&self) -> bool {
        self.total.is_finite() && self.iter().all(|(_, s)| s.amount.is_finite())
    }
}
