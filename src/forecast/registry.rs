use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::{ForecastError, Result};
use crate::models::ScenarioParameters;

/// A registered scenario: its display name, the one-line rationale the
/// comparison view shows, and the adjustment parameters.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub rationale: String,
    pub params: ScenarioParameters,
}

// ============================================================================
// STATIC SCENARIO REGISTRY (Lazy initialization, O(1) lookup)
// ============================================================================

static SCENARIOS: Lazy<Vec<ScenarioDefinition>> = Lazy::new(|| {
    let def = |name: &str,
               rationale: &str,
               income_growth_pct: f64,
               cost_growth_pct: f64,
               capital_injection: f64,
               injection_month: u32| ScenarioDefinition {
        name: name.to_string(),
        rationale: rationale.to_string(),
        params: ScenarioParameters {
            income_growth_pct,
            cost_growth_pct,
            capital_injection,
            injection_month,
        },
    };
    vec![
        def(
            "Best",
            "Contract gains, cost discipline, one-off £5m PDC injection in April",
            4.0,
            1.0,
            5_000.0,
            1,
        ),
        def(
            "Base",
            "Moderate growth with cost pressure; the planning assumption",
            2.0,
            3.0,
            0.0,
            1,
        ),
        def(
            "Worst",
            "Demand and contract risk; pay and price inflation above income",
            -1.0,
            5.0,
            0.0,
            1,
        ),
        def(
            "Do nothing",
            "No mitigation; costs drift while income stays flat",
            0.0,
            5.0,
            0.0,
            1,
        ),
    ]
});

/// HashMap for O(1) name -> index lookup
static SCENARIO_MAP: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    SCENARIOS
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.name.clone(), idx))
        .collect()
});

/// The only enumerable source of truth for which scenarios exist.
pub struct Registry;

impl Registry {
    /// All registered scenarios, in declaration order (for comparison views).
    pub fn all() -> &'static [ScenarioDefinition] {
        &SCENARIOS
    }

    /// Registered scenario names, in declaration order (for a selector).
    pub fn names() -> Vec<String> {
        SCENARIOS.iter().map(|s| s.name.clone()).collect()
    }

    /// Lookup by name. An unrecognized name is an error; no fallback
    /// scenario is substituted.
    pub fn get(name: &str) -> Result<&'static ScenarioDefinition> {
        SCENARIO_MAP
            .get(name)
            .map(|&idx| &SCENARIOS[idx])
            .ok_or_else(|| ForecastError::UnknownScenario(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_scenarios_in_declaration_order() {
        assert_eq!(Registry::names(), vec!["Best", "Base", "Worst", "Do nothing"]);
    }

    #[test]
    fn lookup_by_name() {
        let best = Registry::get("Best").unwrap();
        assert_eq!(best.params.income_growth_pct, 4.0);
        assert_eq!(best.params.capital_injection, 5_000.0);
        assert_eq!(best.params.injection_month, 1);
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        let err = Registry::get("Catastrophic").unwrap_err();
        assert_eq!(err, ForecastError::UnknownScenario("Catastrophic".to_string()));
    }

    #[test]
    fn only_the_best_case_injects_capital() {
        for s in Registry::all() {
            if s.name == "Best" {
                assert!(s.params.capital_injection > 0.0);
            } else {
                assert_eq!(s.params.capital_injection, 0.0);
            }
        }
    }
}
