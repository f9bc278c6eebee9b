//! Scenario runner for batch projections
//!
//! Every scenario is independent: one invalid input fails only its own
//! outcome, and results come back in input order.

use crate::error::InvalidInputError;
use crate::input::{ProjectionInput, Scenario};
use crate::projection::{Projection, ProjectionConfig, ProjectionEngine};
use rayon::prelude::*;

/// Result of projecting one scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario_id: u32,
    pub result: Result<Projection, InvalidInputError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs many projections with a shared engine configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<Projection, InvalidInputError> {
        self.engine.run(input)
    }

    /// Run all scenarios in parallel
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                scenario_id: scenario.scenario_id,
                result: self.engine.run(&scenario.input),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            log::warn!("{} of {} scenarios had invalid input", failed, outcomes.len());
        }

        outcomes
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidField;

    fn scenario(scenario_id: u32, rate: f64, months: u32) -> Scenario {
        Scenario {
            scenario_id,
            input: ProjectionInput::monthly(1000.0, rate, 100.0, months),
        }
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let scenarios: Vec<_> = (1..=50).map(|id| scenario(id, 0.001 * id as f64, id)).collect();
        let outcomes = ScenarioRunner::new().run_batch(&scenarios);

        assert_eq!(outcomes.len(), 50);
        for (outcome, id) in outcomes.iter().zip(1..=50u32) {
            assert_eq!(outcome.scenario_id, id);
            let projection = outcome.result.as_ref().unwrap();
            assert_eq!(projection.series.len(), id as usize + 1);
        }
    }

    #[test]
    fn test_invalid_scenario_is_isolated() {
        let scenarios = vec![scenario(1, 0.01, 12), scenario(2, 0.0, 12), scenario(3, 0.02, 12)];
        let outcomes = ScenarioRunner::new().run_batch(&scenarios);

        assert!(outcomes[0].is_ok());
        assert_eq!(
            outcomes[1].result.as_ref().unwrap_err().fields,
            vec![InvalidField::InterestRate]
        );
        assert!(outcomes[2].is_ok());

        // Higher rate gives a higher final value
        let final_value = |o: &ScenarioOutcome| o.result.as_ref().unwrap().summary.final_value;
        assert!(final_value(&outcomes[2]) > final_value(&outcomes[0]));
    }

    #[test]
    fn test_batch_matches_single_run() {
        let runner = ScenarioRunner::new();
        let s = scenario(9, 0.007, 36);
        let single = runner.run(&s.input).unwrap();
        let batch = runner.run_batch(std::slice::from_ref(&s));
        assert_eq!(batch[0].result.as_ref().unwrap(), &single);
    }
}
