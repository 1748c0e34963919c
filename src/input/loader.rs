//! Load calculator forms from CSV for batch runs
//!
//! Columns follow the form field names: industry, annualRevenue,
//! operatingCosts, employeeCount, itSpend, customerAcquisitionCost,
//! inventoryTurnover, avgEmployeeSalary, customerLifetimeValue,
//! avgProjectDuration. An optional leading `id` column labels each row.

use super::FormState;
use crate::benchmarks::Industry;
use crate::error::Result;
use csv::Reader;
use std::io::Read;
use std::path::Path;

/// One batch row: a label plus the form it describes
#[derive(Debug, Clone, PartialEq)]
pub struct FormRecord {
    pub id: String,
    pub form: FormState,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    industry: String,
    #[serde(default)]
    annual_revenue: String,
    #[serde(default)]
    operating_costs: String,
    #[serde(default)]
    employee_count: String,
    #[serde(default)]
    it_spend: String,
    #[serde(default)]
    customer_acquisition_cost: String,
    #[serde(default)]
    inventory_turnover: String,
    #[serde(default)]
    avg_employee_salary: String,
    #[serde(default)]
    customer_lifetime_value: String,
    #[serde(default)]
    avg_project_duration: String,
}

impl CsvRow {
    fn into_record(self, row_number: usize) -> Result<FormRecord> {
        let industry = self.industry.parse::<Industry>()?;

        Ok(FormRecord {
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| row_number.to_string()),
            form: FormState {
                industry,
                annual_revenue: self.annual_revenue,
                operating_costs: self.operating_costs,
                employee_count: self.employee_count,
                it_spend: self.it_spend,
                customer_acquisition_cost: self.customer_acquisition_cost,
                inventory_turnover: self.inventory_turnover,
                avg_employee_salary: self.avg_employee_salary,
                customer_lifetime_value: self.customer_lifetime_value,
                avg_project_duration: self.avg_project_duration,
            },
        })
    }
}

/// Load all form rows from a CSV file
pub fn load_forms<P: AsRef<Path>>(path: P) -> Result<Vec<FormRecord>> {
    let mut reader = Reader::from_path(path)?;
    read_rows(&mut reader)
}

/// Load form rows from any reader (e.g., string buffer, request body)
pub fn load_forms_from_reader<R: Read>(reader: R) -> Result<Vec<FormRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: Read>(reader: &mut Reader<R>) -> Result<Vec<FormRecord>> {
    let mut records = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        records.push(row.into_record(i + 1)?);
    }

    Ok(records)
}
