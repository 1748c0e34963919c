//! AWS Lambda handler for the savings calculator
//!
//! Accepts the calculator form as a JSON request body and returns the
//! savings breakdown and revenue projection.
//!
//! Supports Lambda Function URLs and API Gateway HTTP events; base64-encoded
//! bodies are decoded by the runtime before they reach the handler.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use savings_estimator::estimator::{Estimate, EstimateReport};
use savings_estimator::{EstimatorConfig, EstimatorError, FormState, ScenarioRunner};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Request body: the form fields plus run options
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    #[serde(flatten)]
    pub form: FormState,

    /// Reject zero divisors and non-numeric values instead of returning NaN
    #[serde(default)]
    pub strict: bool,

    /// Also return the same metrics evaluated under every industry
    #[serde(default)]
    pub compare_industries: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub report: EstimateReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<Estimate>>,
    pub execution_time_ms: u64,
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(body))?)
}

fn error_response(status: u16, message: &str, missing_fields: &[&str]) -> Result<Response<Body>, Error> {
    let body = json!({ "error": message, "missingFields": missing_fields });
    json_response(status, body.to_string())
}

fn handle(event: &Request, runner: &ScenarioRunner) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.as_str(),
        Body::Binary(b) => match std::str::from_utf8(b) {
            Ok(s) => s,
            Err(e) => return error_response(400, &format!("Body is not UTF-8: {}", e), &[]),
        },
        Body::Empty => "",
    };
    let body_str = if body_str.trim().is_empty() { "{}" } else { body_str };

    let request: CalculatorRequest = match serde_json::from_str(body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e), &[]),
    };

    let input = match request.form.try_parse() {
        Ok(input) => input,
        Err(e) => {
            let missing: Vec<&str> = request.form.missing_fields().iter().map(|f| f.name()).collect();
            return error_response(422, &e.to_string(), &missing);
        }
    };

    let runner = runner.clone().with_config(EstimatorConfig {
        strict: request.strict,
        ..Default::default()
    });

    let estimate = match runner.run(&input) {
        Ok(estimate) => estimate,
        Err(e @ (EstimatorError::ZeroDivisor(_) | EstimatorError::NonFinite { .. })) => {
            return error_response(422, &e.to_string(), &[]);
        }
        Err(e) => return error_response(500, &e.to_string(), &[]),
    };

    let comparison = request
        .compare_industries
        .then(|| runner.compare_industries(&input));

    let body = CalculatorResponse {
        report: EstimateReport::new(input, estimate),
        comparison,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    match serde_json::to_string(&body) {
        Ok(text) => json_response(200, text),
        Err(e) => error_response(500, &format!("Failed to serialize response: {}", e), &[]),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let runner = match std::env::var("BENCHMARKS_PATH") {
        Ok(path) => ScenarioRunner::from_csv_path(std::path::Path::new(&path))?,
        Err(_) => ScenarioRunner::new(),
    };
    let runner = Arc::new(runner);

    run(service_fn(move |event: Request| {
        let runner = Arc::clone(&runner);
        async move { handle(&event, &runner) }
    }))
    .await
}
