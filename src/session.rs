//! Interactive calculator session
//!
//! Holds the current form and the last estimate. Every edit replaces the
//! form record wholesale and recomputes immediately; there is no deferred
//! or partial update.

use crate::benchmarks::Industry;
use crate::error::EstimatorError;
use crate::estimator::{Estimate, EstimatorConfig, SavingsEstimator, StaleOutputPolicy};
use crate::input::{Field, FormState};

#[derive(Debug)]
pub struct CalculatorSession {
    estimator: SavingsEstimator,
    config: EstimatorConfig,
    form: FormState,
    current: Option<Estimate>,
    last_error: Option<EstimatorError>,
}

impl CalculatorSession {
    /// Empty retail form with default benchmarks and config
    pub fn new() -> Self {
        Self::with_estimator(SavingsEstimator::default(), EstimatorConfig::default())
    }

    pub fn with_estimator(estimator: SavingsEstimator, config: EstimatorConfig) -> Self {
        Self {
            estimator,
            config,
            form: FormState::default(),
            current: None,
            last_error: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Estimate currently on display
    pub fn estimate(&self) -> Option<&Estimate> {
        self.current.as_ref()
    }

    /// Why the last recompute produced nothing, if it did
    pub fn last_error(&self) -> Option<&EstimatorError> {
        self.last_error.as_ref()
    }

    /// Edit one field and recompute
    pub fn update(&mut self, field: Field, value: impl Into<String>) -> Option<&Estimate> {
        let next = self.form.with_field(field, value);
        self.replace_form(next)
    }

    /// Select an industry and recompute
    pub fn set_industry(&mut self, industry: Industry) -> Option<&Estimate> {
        let next = self.form.with_industry(industry);
        self.replace_form(next)
    }

    /// Swap in a whole new form and recompute
    pub fn replace_form(&mut self, form: FormState) -> Option<&Estimate> {
        self.form = form;
        self.recompute();
        self.current.as_ref()
    }

    fn recompute(&mut self) {
        match self.estimator.estimate_form_with(&self.form, &self.config) {
            Ok(estimate) => {
                self.current = Some(estimate);
                self.last_error = None;
            }
            Err(err) => {
                log::debug!("Estimate not refreshed: {}", err);
                if self.config.stale_output == StaleOutputPolicy::Clear {
                    self.current = None;
                }
                self.last_error = Some(err);
            }
        }
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}
