use serde::Serialize;

use crate::error::Result;
use crate::forecast::projector;
use crate::forecast::registry::Registry;
use crate::models::{ForecastRow, MonthlyBaseline, OpeningPosition};

/// One scenario reduced to the figures the comparison view plots: the
/// year's operating cashflow, the closing position, and where the cash
/// pinch point falls.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub scenario: String,
    pub operating_cashflow_total: f64,
    /// Closing cash at month 12.
    pub closing_cash: f64,
    /// The lowest month-end balance of the year and the month it occurs
    /// in - the pinch point treasury plans drawdowns around.
    pub lowest_cash: f64,
    pub lowest_cash_month: u32,
    /// Month-end balances for the scenario chart, in month order.
    pub monthly_closing_cash: Vec<f64>,
}

/// Reduce a projected forecast to its summary. Assumes `rows` came from
/// the projector and is therefore non-empty and month-ordered.
pub fn summarize(scenario: &str, rows: &[ForecastRow]) -> ScenarioSummary {
    let operating_cashflow_total = rows.iter().map(|r| r.operating_cashflow).sum();
    let closing_cash = rows.last().map(|r| r.closing_cash).unwrap_or(0.0);

    let (lowest_cash, lowest_cash_month) = rows
        .iter()
        .map(|r| (r.closing_cash, r.month))
        .fold((f64::INFINITY, 0), |best, candidate| {
            if candidate.0 < best.0 {
                candidate
            } else {
                best
            }
        });

    ScenarioSummary {
        scenario: scenario.to_string(),
        operating_cashflow_total,
        closing_cash,
        lowest_cash,
        lowest_cash_month,
        monthly_closing_cash: rows.iter().map(|r| r.closing_cash).collect(),
    }
}

/// Project every registered scenario over the same baseline and opening
/// position. Scenarios are independent; output preserves registry order.
pub fn compare_scenarios(
    baseline: &[MonthlyBaseline],
    opening: &OpeningPosition,
) -> Result<Vec<ScenarioSummary>> {
    Registry::all()
        .iter()
        .map(|scenario| {
            let rows = projector::project(baseline, opening, &scenario.params)?;
            Ok(summarize(&scenario.name, &rows))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: u32, operating_cashflow: f64, closing_cash: f64) -> ForecastRow {
        ForecastRow {
            month,
            income: 0.0,
            expenses: 0.0,
            operating_cashflow,
            capex: 0.0,
            financing: 0.0,
            net_cashflow: 0.0,
            closing_cash,
        }
    }

    #[test]
    fn pinch_point_is_the_lowest_month_end_balance() {
        let rows = vec![
            row(1, 10.0, 500.0),
            row(2, -30.0, 120.0),
            row(3, 5.0, 340.0),
        ];
        let summary = summarize("Base", &rows);
        assert_eq!(summary.lowest_cash, 120.0);
        assert_eq!(summary.lowest_cash_month, 2);
        assert_eq!(summary.closing_cash, 340.0);
        assert!((summary.operating_cashflow_total - (-15.0)).abs() < 1e-9);
    }

    #[test]
    fn monthly_series_preserves_month_order() {
        let rows = vec![row(1, 0.0, 3.0), row(2, 0.0, 1.0), row(3, 0.0, 2.0)];
        let summary = summarize("Base", &rows);
        assert_eq!(summary.monthly_closing_cash, vec![3.0, 1.0, 2.0]);
    }
}
