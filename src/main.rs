//! Savings Estimator CLI
//!
//! Command-line interface for running savings estimates

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use savings_estimator::estimator::{format_currency, EstimateReport};
use savings_estimator::input::{load_forms, Field};
use savings_estimator::scenario::write_batch_csv;
use savings_estimator::{BenchmarkTable, EstimatorConfig, FormState, Industry, ScenarioRunner};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "savings-estimator", version, about = "Estimate savings and revenue growth from business metrics")]
struct Cli {
    /// Benchmark CSV overriding the built-in coefficients
    #[arg(long, global = true)]
    benchmarks: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate savings for one business
    Estimate {
        #[command(flatten)]
        form: FormArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Reject zero divisors and non-numeric values
        #[arg(long)]
        strict: bool,
    },
    /// Run the same metrics under every industry
    Compare {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Estimate every row of a CSV file
    Batch {
        /// Input CSV with one form per row
        input: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report zero divisors and non-numeric values as row errors
        #[arg(long)]
        strict: bool,
    },
}

/// Form fields, taken as text exactly like the calculator's inputs
#[derive(Args)]
struct FormArgs {
    /// Industry whose benchmarks apply (retail, education, finance, service)
    #[arg(long, default_value = "retail", value_parser = parse_industry)]
    industry: Industry,
    #[arg(long, help = Field::AnnualRevenue.label())]
    annual_revenue: Option<String>,
    #[arg(long, help = Field::OperatingCosts.label())]
    operating_costs: Option<String>,
    #[arg(long, help = Field::EmployeeCount.label())]
    employee_count: Option<String>,
    #[arg(long, help = Field::ItSpend.label())]
    it_spend: Option<String>,
    #[arg(long, help = Field::CustomerAcquisitionCost.label())]
    customer_acquisition_cost: Option<String>,
    #[arg(long, help = Field::InventoryTurnover.label())]
    inventory_turnover: Option<String>,
    #[arg(long, help = Field::AvgEmployeeSalary.label())]
    avg_employee_salary: Option<String>,
    #[arg(long, help = Field::CustomerLifetimeValue.label())]
    customer_lifetime_value: Option<String>,
    #[arg(long, help = Field::AvgProjectDuration.label())]
    avg_project_duration: Option<String>,
}

impl FormArgs {
    fn into_form(self) -> FormState {
        let values = [
            (Field::AnnualRevenue, self.annual_revenue),
            (Field::OperatingCosts, self.operating_costs),
            (Field::EmployeeCount, self.employee_count),
            (Field::ItSpend, self.it_spend),
            (Field::CustomerAcquisitionCost, self.customer_acquisition_cost),
            (Field::InventoryTurnover, self.inventory_turnover),
            (Field::AvgEmployeeSalary, self.avg_employee_salary),
            (Field::CustomerLifetimeValue, self.customer_lifetime_value),
            (Field::AvgProjectDuration, self.avg_project_duration),
        ];

        values
            .into_iter()
            .fold(FormState::new(self.industry), |form, (field, value)| match value {
                Some(v) => form.with_field(field, v),
                None => form,
            })
    }
}

fn parse_industry(s: &str) -> std::result::Result<Industry, String> {
    s.parse::<Industry>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let benchmarks = match &cli.benchmarks {
        Some(path) => BenchmarkTable::from_csv_path(path)
            .with_context(|| format!("failed to load benchmarks from {}", path.display()))?,
        None => BenchmarkTable::default_benchmarks(),
    };

    match cli.command {
        Command::Estimate { form, json, strict } => run_estimate(benchmarks, form, json, strict),
        Command::Compare { form } => run_compare(benchmarks, form),
        Command::Batch { input, output, strict } => run_batch(benchmarks, input, output, strict),
    }
}

fn run_estimate(benchmarks: BenchmarkTable, args: FormArgs, json: bool, strict: bool) -> Result<()> {
    let form = args.into_form();
    let config = EstimatorConfig {
        strict,
        ..Default::default()
    };
    let runner = ScenarioRunner::with_benchmarks(benchmarks).with_config(config);

    let input = form.try_parse().context("form is incomplete")?;
    let estimate = runner.run(&input).context("input rejected")?;
    let report = EstimateReport::new(input, estimate);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn run_compare(benchmarks: BenchmarkTable, args: FormArgs) -> Result<()> {
    let form = args.into_form();
    let input = form.try_parse().context("form is incomplete")?;
    let runner = ScenarioRunner::with_benchmarks(benchmarks);

    println!("{:<12} {:>20} {:>20}", "Industry", "Total Savings", "Year 5 Revenue");
    println!("{}", "-".repeat(54));
    for estimate in runner.compare_industries(&input) {
        let year5 = estimate.projected_growth.final_revenue().unwrap_or(f64::NAN);
        println!(
            "{:<12} {:>20} {:>20}",
            estimate.industry.label(),
            format!("${}", format_currency(estimate.breakdown.total)),
            format!("${}", format_currency(year5)),
        );
    }
    Ok(())
}

fn run_batch(benchmarks: BenchmarkTable, input: PathBuf, output: Option<PathBuf>, strict: bool) -> Result<()> {
    let records = load_forms(&input).with_context(|| format!("failed to read {}", input.display()))?;
    if records.is_empty() {
        bail!("{} contains no forms", input.display());
    }

    let runner = ScenarioRunner::with_benchmarks(benchmarks).with_config(EstimatorConfig {
        strict,
        ..Default::default()
    });
    let results = runner.run_batch(&records);

    match output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
            write_batch_csv(file, &results)?;
            eprintln!("Wrote {} rows to {}", results.len(), path.display());
        }
        None => write_batch_csv(io::stdout().lock(), &results)?,
    }
    Ok(())
}
