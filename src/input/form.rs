//! Raw form state as typed by the user
//!
//! Every field is held as text. The record is immutable from the caller's
//! point of view: an edit produces a new `FormState` rather than patching
//! one cell, so the estimator always sees a consistent snapshot.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::data::EstimatorInput;
use crate::benchmarks::Industry;
use crate::error::{EstimatorError, Result};

/// One editable numeric field of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AnnualRevenue,
    OperatingCosts,
    EmployeeCount,
    ItSpend,
    CustomerAcquisitionCost,
    InventoryTurnover,
    AvgEmployeeSalary,
    CustomerLifetimeValue,
    AvgProjectDuration,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 9] = [
        Field::AnnualRevenue,
        Field::OperatingCosts,
        Field::EmployeeCount,
        Field::ItSpend,
        Field::CustomerAcquisitionCost,
        Field::InventoryTurnover,
        Field::AvgEmployeeSalary,
        Field::CustomerLifetimeValue,
        Field::AvgProjectDuration,
    ];

    /// camelCase name used in JSON bodies and error messages
    pub fn name(self) -> &'static str {
        match self {
            Field::AnnualRevenue => "annualRevenue",
            Field::OperatingCosts => "operatingCosts",
            Field::EmployeeCount => "employeeCount",
            Field::ItSpend => "itSpend",
            Field::CustomerAcquisitionCost => "customerAcquisitionCost",
            Field::InventoryTurnover => "inventoryTurnover",
            Field::AvgEmployeeSalary => "avgEmployeeSalary",
            Field::CustomerLifetimeValue => "customerLifetimeValue",
            Field::AvgProjectDuration => "avgProjectDuration",
        }
    }

    /// Caption shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::AnnualRevenue => "Annual Revenue",
            Field::OperatingCosts => "Annual Operating Costs",
            Field::EmployeeCount => "Number of Employees",
            Field::ItSpend => "Annual IT Spend",
            Field::CustomerAcquisitionCost => "Customer Acquisition Cost",
            Field::InventoryTurnover => "Inventory Turnover Rate",
            Field::AvgEmployeeSalary => "Average Employee Salary",
            Field::CustomerLifetimeValue => "Customer Lifetime Value",
            Field::AvgProjectDuration => "Average Project Duration (months)",
        }
    }

    /// Whether the field must be non-empty before anything is computed
    pub fn is_required(self) -> bool {
        self != Field::InventoryTurnover
    }

    /// Whether the form shows this field for the selected industry
    pub fn is_displayed_for(self, industry: Industry) -> bool {
        self != Field::InventoryTurnover || industry.tracks_inventory()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = EstimatorError;

    /// Accepts the camelCase name or its snake_case / kebab-case spelling
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| EstimatorError::UnknownField(s.to_string()))
    }
}

/// Calculator form contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub industry: Industry,
    #[serde(deserialize_with = "lenient_text")]
    pub annual_revenue: String,
    #[serde(deserialize_with = "lenient_text")]
    pub operating_costs: String,
    #[serde(deserialize_with = "lenient_text")]
    pub employee_count: String,
    #[serde(deserialize_with = "lenient_text")]
    pub it_spend: String,
    #[serde(deserialize_with = "lenient_text")]
    pub customer_acquisition_cost: String,
    #[serde(deserialize_with = "lenient_text")]
    pub inventory_turnover: String,
    #[serde(deserialize_with = "lenient_text")]
    pub avg_employee_salary: String,
    #[serde(deserialize_with = "lenient_text")]
    pub customer_lifetime_value: String,
    #[serde(deserialize_with = "lenient_text")]
    pub avg_project_duration: String,
}

impl FormState {
    /// Empty form with the given industry selected
    pub fn new(industry: Industry) -> Self {
        Self {
            industry,
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::AnnualRevenue => &self.annual_revenue,
            Field::OperatingCosts => &self.operating_costs,
            Field::EmployeeCount => &self.employee_count,
            Field::ItSpend => &self.it_spend,
            Field::CustomerAcquisitionCost => &self.customer_acquisition_cost,
            Field::InventoryTurnover => &self.inventory_turnover,
            Field::AvgEmployeeSalary => &self.avg_employee_salary,
            Field::CustomerLifetimeValue => &self.customer_lifetime_value,
            Field::AvgProjectDuration => &self.avg_project_duration,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::AnnualRevenue => &mut self.annual_revenue,
            Field::OperatingCosts => &mut self.operating_costs,
            Field::EmployeeCount => &mut self.employee_count,
            Field::ItSpend => &mut self.it_spend,
            Field::CustomerAcquisitionCost => &mut self.customer_acquisition_cost,
            Field::InventoryTurnover => &mut self.inventory_turnover,
            Field::AvgEmployeeSalary => &mut self.avg_employee_salary,
            Field::CustomerLifetimeValue => &mut self.customer_lifetime_value,
            Field::AvgProjectDuration => &mut self.avg_project_duration,
        }
    }

    /// New form with one field replaced
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// New form with a different industry selected
    pub fn with_industry(&self, industry: Industry) -> Self {
        Self {
            industry,
            ..self.clone()
        }
    }

    /// Required fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| field.is_required() && self.get(field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| !field.is_required() || !self.get(field).is_empty())
    }

    /// Parse into numeric input, or `None` while any required field is empty
    ///
    /// Unparsable text becomes NaN; an unparsable inventory turnover
    /// becomes 0.
    pub fn parse(&self) -> Option<EstimatorInput> {
        self.try_parse().ok()
    }

    /// Like [`FormState::parse`], naming the first empty required field
    pub fn try_parse(&self) -> Result<EstimatorInput> {
        if let Some(field) = self.missing_fields().first() {
            return Err(EstimatorError::MissingField(field.name()));
        }

        let inventory = parse_float(&self.inventory_turnover);

        Ok(EstimatorInput {
            industry: self.industry,
            annual_revenue: parse_float(&self.annual_revenue),
            operating_costs: parse_float(&self.operating_costs),
            employee_count: parse_float(&self.employee_count),
            it_spend: parse_float(&self.it_spend),
            customer_acquisition_cost: parse_float(&self.customer_acquisition_cost),
            inventory_turnover: if inventory.is_nan() { 0.0 } else { inventory },
            avg_employee_salary: parse_float(&self.avg_employee_salary),
            customer_lifetime_value: parse_float(&self.customer_lifetime_value),
            avg_project_duration: parse_float(&self.avg_project_duration),
        })
    }
}

/// Parse the longest leading decimal number in `text`
///
/// Leading whitespace is skipped and trailing garbage ignored ("12abc" is
/// 12). Text without a leading number, including the empty string, is NaN.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - digits_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - end - 1;
        if int_digits + frac_digits > 0 {
            end = j;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Accept a JSON string, number, or null for a text field
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> FormState {
        FormState::new(Industry::Retail)
            .with_field(Field::AnnualRevenue, "1000000")
            .with_field(Field::OperatingCosts, "600000")
            .with_field(Field::EmployeeCount, "50")
            .with_field(Field::ItSpend, "100000")
            .with_field(Field::CustomerAcquisitionCost, "500")
            .with_field(Field::AvgEmployeeSalary, "60000")
            .with_field(Field::CustomerLifetimeValue, "2000")
            .with_field(Field::AvgProjectDuration, "6")
    }

    #[test]
    fn test_parse_float_prefix_semantics() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  3.5"), 3.5);
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("-7"), -7.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2.5E-1x"), 0.25);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let form = FormState::new(Industry::Retail);
        let edited = form.with_field(Field::ItSpend, "100");

        assert_eq!(form.it_spend, "");
        assert_eq!(edited.get(Field::ItSpend), "100");
    }

    #[test]
    fn test_incomplete_form_does_not_parse() {
        let form = complete_form().with_field(Field::AvgProjectDuration, "");
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), vec![Field::AvgProjectDuration]);
        assert!(form.parse().is_none());

        let err = form.try_parse().unwrap_err();
        assert!(matches!(err, EstimatorError::MissingField("avgProjectDuration")));
    }

    #[test]
    fn test_empty_form_misses_every_required_field() {
        let missing = FormState::new(Industry::Retail).missing_fields();

        assert_eq!(missing.len(), 8);
        assert!(!missing.contains(&Field::InventoryTurnover));
        assert!(missing.iter().all(|f| f.is_required()));
        assert!(complete_form().is_complete());
    }

    #[test]
    fn test_zero_text_counts_as_present() {
        let form = complete_form().with_field(Field::CustomerAcquisitionCost, "0");
        let input = form.parse().unwrap();
        assert_eq!(input.customer_acquisition_cost, 0.0);
    }

    #[test]
    fn test_inventory_turnover_defaults_to_zero() {
        let input = complete_form().parse().unwrap();
        assert_eq!(input.inventory_turnover, 0.0);

        let input = complete_form()
            .with_field(Field::InventoryTurnover, "lots")
            .parse()
            .unwrap();
        assert_eq!(input.inventory_turnover, 0.0);
    }

    #[test]
    fn test_non_numeric_required_field_is_nan() {
        let input = complete_form()
            .with_field(Field::ItSpend, "n/a")
            .parse()
            .unwrap();
        assert!(input.it_spend.is_nan());
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("annualRevenue".parse::<Field>().unwrap(), Field::AnnualRevenue);
        assert_eq!("it_spend".parse::<Field>().unwrap(), Field::ItSpend);
        assert_eq!(
            "customer-lifetime-value".parse::<Field>().unwrap(),
            Field::CustomerLifetimeValue
        );
        assert!("revenue".parse::<Field>().is_err());
    }

    #[test]
    fn test_inventory_only_displayed_for_retail() {
        assert!(Field::InventoryTurnover.is_displayed_for(Industry::Retail));
        assert!(!Field::InventoryTurnover.is_displayed_for(Industry::Service));
        assert!(Field::ItSpend.is_displayed_for(Industry::Service));
    }

    #[test]
    fn test_deserialize_mixed_json() {
        let json = r#"{
            "industry": "finance",
            "annualRevenue": 250000,
            "operatingCosts": "90000",
            "inventoryTurnover": null
        }"#;
        let form: FormState = serde_json::from_str(json).unwrap();

        assert_eq!(form.industry, Industry::Finance);
        assert_eq!(form.annual_revenue, "250000");
        assert_eq!(form.operating_costs, "90000");
        assert_eq!(form.inventory_turnover, "");
        assert_eq!(form.it_spend, "");
    }
}
