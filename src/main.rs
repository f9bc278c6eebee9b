//! Savings Projection CLI
//!
//! Command-line interface for running a single projection
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use anyhow::{Context, Result};
use clap::Parser;
use savings_projection::{
    AxisScale, ChartData, ContributionPeriod, InterestPeriod, MoneyFormat, ProjectionConfig,
    ProjectionEngine, ProjectionInput, SummaryDisplay, TimePeriod,
};
use savings_projection::projection::MAX_DISPLAY_PRECISION;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "savings_projection", version, about = "Project savings under compound interest")]
struct Args {
    /// Initial principal
    #[arg(long, default_value_t = 0.0)]
    present_value: f64,

    /// Interest rate in percent (1 = 1%)
    #[arg(long)]
    rate_pct: f64,

    /// Period the rate is quoted in: monthly | yearly
    #[arg(long, default_value = "monthly")]
    interest_period: InterestPeriod,

    /// Periodic contribution
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    /// Period the contribution is quoted in: monthly | yearly
    #[arg(long, default_value = "monthly")]
    contribution_period: ContributionPeriod,

    /// Horizon length
    #[arg(long)]
    time: Option<u32>,

    /// Unit of the horizon: months | years
    #[arg(long, default_value = "months")]
    time_period: TimePeriod,

    /// Decimal places for each recorded month
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(0..=MAX_DISPLAY_PRECISION as i64)
    )]
    precision: u32,

    /// Refuse horizons longer than this many months
    #[arg(long, default_value_t = 12_000)]
    max_months: u32,

    /// Number of months to print
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Write the full series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the projection as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let input = ProjectionInput {
        present_value: args.present_value,
        interest_rate: args.rate_pct / 100.0,
        contribution: args.contribution,
        interest_period: args.interest_period,
        contribution_period: args.contribution_period,
        total_time: args.time,
        time_period: args.time_period,
    };

    let engine = ProjectionEngine::new(ProjectionConfig {
        display_precision: args.precision,
    });
    input.check_horizon(args.max_months)?;
    let projection = engine.run(&input)?;
    let display = SummaryDisplay::new(&projection.summary, &MoneyFormat::default());

    if args.json {
        let chart = ChartData::from_series(&projection.series, AxisScale::from(input.time_period));
        let body = serde_json::json!({
            "input": input,
            "summary": projection.summary,
            "display": display,
            "chart": chart,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("Projection Results ({} months):", projection.series.len() - 1);
        println!("{:>6} {:>16} {:>16}", "Month", "Accumulated", "Invested");
        println!("{}", "-".repeat(40));

        for point in projection.series.iter().take(args.rows) {
            println!(
                "{:>6} {:>16.2} {:>16.2}",
                point.month, point.accumulated, point.invested
            );
        }

        if projection.series.len() > args.rows {
            println!("... ({} more months)", projection.series.len() - args.rows);
        }

        println!("\nSummary:");
        print!("{}", display);
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create CSV file {}", path.display()))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "Month,Accumulated,Invested")?;
        for point in &projection.series {
            writeln!(out, "{},{},{}", point.month, point.accumulated, point.invested)?;
        }
        out.flush()?;

        log::info!("Full series written to {}", path.display());
    }

    Ok(())
}
