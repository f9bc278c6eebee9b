//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario; invalid scenarios carry their error message

use anyhow::{Context, Result};
use clap::Parser;
use savings_projection::input::load_scenarios;
use savings_projection::projection::MAX_DISPLAY_PRECISION;
use savings_projection::{ProjectionConfig, ScenarioRunner};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario file (ScenarioID,PresentValue,InterestRate,InterestPeriod,...)
    scenarios: PathBuf,

    /// Output file
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Decimal places for each recorded month
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(0..=MAX_DISPLAY_PRECISION as i64)
    )]
    precision: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        display_precision: args.precision,
    });

    let proj_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output file {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "ScenarioID,Months,FinalValue,TotalInvested,TotalInterest,Error")?;

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(projection) => {
                let s = &projection.summary;
                writeln!(
                    out,
                    "{},{},{:.2},{:.2},{:.2},",
                    outcome.scenario_id,
                    projection.series.len() - 1,
                    s.final_value,
                    s.total_invested,
                    s.total_interest,
                )?;
            }
            Err(e) => {
                failed += 1;
                writeln!(out, "{},,,,,\"{}\"", outcome.scenario_id, e)?;
            }
        }
    }
    out.flush()?;

    println!("Output written to {}", args.output.display());
    if failed > 0 {
        println!("{} scenarios rejected (see Error column)", failed);
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
