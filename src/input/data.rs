//! Numeric estimator input

use serde::{Deserialize, Serialize};

use super::form::Field;
use crate::benchmarks::Industry;
use crate::error::{EstimatorError, Result};

/// Business metrics driving one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorInput {
    pub industry: Industry,

    /// Total annual revenue ($)
    #[serde(with = "crate::non_finite")]
    pub annual_revenue: f64,

    /// Annual operating costs ($)
    #[serde(with = "crate::non_finite")]
    pub operating_costs: f64,

    /// Full-time employees
    #[serde(with = "crate::non_finite")]
    pub employee_count: f64,

    /// Annual IT spend ($)
    #[serde(with = "crate::non_finite")]
    pub it_spend: f64,

    /// Average cost to acquire one customer ($), used as a divisor
    #[serde(with = "crate::non_finite")]
    pub customer_acquisition_cost: f64,

    /// Inventory turns per year, retail only
    #[serde(default, with = "crate::non_finite")]
    pub inventory_turnover: f64,

    /// Average annual salary per employee ($)
    #[serde(with = "crate::non_finite")]
    pub avg_employee_salary: f64,

    /// Average revenue from a single customer over its lifetime ($)
    #[serde(with = "crate::non_finite")]
    pub customer_lifetime_value: f64,

    /// Average project or sales cycle length (months). Collected with the
    /// other metrics but no formula reads it.
    #[serde(with = "crate::non_finite")]
    pub avg_project_duration: f64,
}

impl EstimatorInput {
    /// Same metrics under a different industry
    pub fn with_industry(self, industry: Industry) -> Self {
        Self { industry, ..self }
    }

    /// Numeric value of one form field
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::AnnualRevenue => self.annual_revenue,
            Field::OperatingCosts => self.operating_costs,
            Field::EmployeeCount => self.employee_count,
            Field::ItSpend => self.it_spend,
            Field::CustomerAcquisitionCost => self.customer_acquisition_cost,
            Field::InventoryTurnover => self.inventory_turnover,
            Field::AvgEmployeeSalary => self.avg_employee_salary,
            Field::CustomerLifetimeValue => self.customer_lifetime_value,
            Field::AvgProjectDuration => self.avg_project_duration,
        }
    }

    /// Reject inputs that would make the estimate non-finite
    ///
    /// Checks every metric is finite and that neither divisor is zero.
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            let value = self.value(field);
            if !value.is_finite() {
                return Err(EstimatorError::NonFinite {
                    field: field.name(),
                    value,
                });
            }
        }

        if self.customer_acquisition_cost == 0.0 {
            return Err(EstimatorError::ZeroDivisor("customerAcquisitionCost"));
        }
        if self.annual_revenue == 0.0 {
            return Err(EstimatorError::ZeroDivisor("annualRevenue"));
        }

        Ok(())
    }
}
