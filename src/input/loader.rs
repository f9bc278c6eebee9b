//! Load projection scenarios from CSV

use super::{ContributionPeriod, InterestPeriod, ProjectionInput, TimePeriod};
use crate::error::{Error, Result};
use csv::Reader;
use std::path::Path;

/// A projection input tagged with an identifier for batch runs
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub scenario_id: u32,
    pub input: ProjectionInput,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "PresentValue")]
    present_value: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "InterestPeriod")]
    interest_period: String,
    #[serde(rename = "Contribution")]
    contribution: f64,
    #[serde(rename = "ContributionPeriod")]
    contribution_period: String,
    // Blank or non-numeric loads as None; validation rejects it per scenario
    #[serde(rename = "TotalTime", deserialize_with = "csv::invalid_option")]
    total_time: Option<u32>,
    #[serde(rename = "TimePeriod")]
    time_period: String,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario> {
        let scenario_id = self.scenario_id;
        let unknown = |source| Error::UnknownPeriod { scenario_id, source };

        let interest_period: InterestPeriod = self.interest_period.parse().map_err(unknown)?;
        let contribution_period: ContributionPeriod = self.contribution_period.parse().map_err(unknown)?;
        let time_period: TimePeriod = self.time_period.parse().map_err(unknown)?;

        Ok(Scenario {
            scenario_id,
            input: ProjectionInput {
                present_value: self.present_value,
                interest_rate: self.interest_rate,
                contribution: self.contribution,
                interest_period,
                contribution_period,
                total_time: self.total_time,
                time_period,
            },
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
