//! AWS Lambda handler for running a savings projection
//!
//! Accepts the projection input as JSON and returns chart series plus the
//! formatted summary totals. Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use savings_projection::{
    AxisScale, ChartData, ContributionPeriod, InterestPeriod, MoneyFormat, ProjectionConfig,
    ProjectionEngine, ProjectionInput, ProjectionSummary, SummaryDisplay, TimePeriod,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Longest horizon accepted over HTTP (1000 years)
const MAX_REQUEST_MONTHS: u32 = 12_000;

/// Input for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// Initial principal (default: 0)
    #[serde(default)]
    pub present_value: f64,

    /// Interest rate in percent, e.g. 1.0 for 1%
    #[serde(default)]
    pub interest_rate_pct: f64,

    #[serde(default)]
    pub interest_period: InterestPeriod,

    /// Periodic contribution (default: 0)
    #[serde(default)]
    pub contribution: f64,

    #[serde(default)]
    pub contribution_period: ContributionPeriod,

    /// Horizon length; missing is reported as invalid input
    #[serde(default)]
    pub total_time: Option<u32>,

    #[serde(default)]
    pub time_period: TimePeriod,

    /// Decimal places for each recorded month (default: 2)
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Currency rendering for the summary (default: R$ with pt-BR separators)
    #[serde(default)]
    pub money_format: MoneyFormat,
}

fn default_precision() -> u32 { 2 }

impl ProjectionRequest {
    fn to_input(&self) -> ProjectionInput {
        ProjectionInput {
            present_value: self.present_value,
            interest_rate: self.interest_rate_pct / 100.0,
            contribution: self.contribution,
            interest_period: self.interest_period,
            contribution_period: self.contribution_period,
            total_time: self.total_time,
            time_period: self.time_period,
        }
    }
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub total_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<SummaryDisplay>,
    pub chart: ChartData,
    pub tick_labels: Vec<Option<String>>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

/// Parse a request body; the error is the message returned with HTTP 400
fn parse_request(body: &str) -> Result<ProjectionRequest, String> {
    serde_json::from_str(body).map_err(|e| format!("Invalid JSON: {}", e))
}

/// Run the projection for a parsed request and pick the HTTP status
fn project_request(request: &ProjectionRequest, start: Instant) -> (u16, ProjectionResponse) {
    let input = request.to_input();
    let axis = AxisScale::from(input.time_period);
    let engine = ProjectionEngine::new(ProjectionConfig {
        display_precision: request.precision,
    });

    let result = input
        .check_horizon(MAX_REQUEST_MONTHS)
        .and_then(|()| engine.run(&input));

    match result {
        Ok(projection) => {
            let chart = ChartData::from_series(&projection.series, axis);
            let response = ProjectionResponse {
                total_months: projection.series.len() as u32 - 1,
                summary: Some(projection.summary),
                display: Some(SummaryDisplay::new(&projection.summary, &request.money_format)),
                tick_labels: chart.tick_labels(),
                chart,
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: None,
            };
            (200, response)
        }
        Err(e) => {
            // Previous series and totals are cleared on the client
            let response = ProjectionResponse {
                total_months: 0,
                summary: None,
                display: None,
                chart: ChartData::empty(axis),
                tick_labels: Vec::new(),
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
            };
            (422, response)
        }
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request = match parse_request(&body_str) {
        Ok(r) => r,
        Err(message) => {
            log::warn!("Rejected malformed request: {}", message);
            return json_response(400, &serde_json::json!({ "error": message }));
        }
    };

    let (status, response) = project_request(&request, start);
    json_response(status, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
