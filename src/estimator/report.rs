//! Serializable estimate reports and text rendering

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::engine::Estimate;
use crate::input::{EstimatorInput, Field};

/// Shown under every rendered estimate
pub const DISCLAIMER: &str = "This calculator provides estimates based on industry benchmarks and typical results. \
Actual savings and growth may vary depending on various factors specific to your business.";

/// An estimate together with the input it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub generated_at: DateTime<Utc>,
    pub input: EstimatorInput,
    #[serde(flatten)]
    pub estimate: Estimate,
}

impl EstimateReport {
    pub fn new(input: EstimatorInput, estimate: Estimate) -> Self {
        Self {
            generated_at: Utc::now(),
            input,
            estimate,
        }
    }
}

/// Plain-text rendering for terminals
impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let industry = self.estimate.industry;
        let breakdown = &self.estimate.breakdown;
        let rule = "-".repeat(60);

        writeln!(f, "Business Metrics ({})", industry.label())?;
        writeln!(f, "{}", rule)?;
        for field in Field::ALL.into_iter().filter(|field| field.is_displayed_for(industry)) {
            writeln!(
                f,
                "{:<36} {:>20}",
                field.label(),
                format_currency(self.input.value(field))
            )?;
        }

        writeln!(f, "\nEstimated Annual Savings")?;
        writeln!(f, "{}", rule)?;
        for (category, savings) in breakdown.displayed(industry) {
            writeln!(
                f,
                "{:<36} {:>20}   up to {}%",
                category.title(),
                format!("${}", format_currency(savings.amount)),
                savings.percentage
            )?;
            writeln!(f, "  Suggestion: {}", category.suggestion())?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "{:<36} {:>20}",
            "Total",
            format!("${}", format_currency(breakdown.total))
        )?;

        writeln!(f, "\nProjected Revenue Growth")?;
        for point in &self.estimate.projected_growth {
            writeln!(
                f,
                "{:<36} {:>20}",
                point.label,
                format!("${}", format_currency(point.revenue))
            )?;
        }

        writeln!(f, "\n{}", DISCLAIMER)
    }
}

/// Format an amount with thousands separators and at most three decimals
///
/// `1013000.0` renders as `1,013,000`, `1234.5678` as `1,234.568`.
/// Non-finite values render as `NaN`, `∞` or `-∞`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
