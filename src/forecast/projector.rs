use crate::error::{ForecastError, Result};
use crate::models::{ForecastRow, MonthlyBaseline, OpeningPosition, ScenarioParameters};

/// Length of the forecast horizon. The projector rejects anything else.
pub const FORECAST_MONTHS: usize = 12;

/// Check the baseline series invariant: exactly 12 entries, months
/// ordinally contiguous from 1. Surfaced before any computation.
pub fn validate_baseline(baseline: &[MonthlyBaseline]) -> Result<()> {
    if baseline.len() != FORECAST_MONTHS {
        return Err(ForecastError::InvalidBaseline(format!(
            "expected {} monthly entries, got {}",
            FORECAST_MONTHS,
            baseline.len()
        )));
    }
    for (idx, entry) in baseline.iter().enumerate() {
        let expected = idx as u32 + 1;
        if entry.month != expected {
            return Err(ForecastError::InvalidBaseline(format!(
                "months must be contiguous: position {} holds month {}",
                expected, entry.month
            )));
        }
    }
    Ok(())
}

/// Project one scenario over the baseline: a pure function of its inputs,
/// byte-identical output for identical inputs.
///
/// Rows are computed strictly in month order because each closing balance
/// feeds the next month. Different scenarios are independent of each
/// other and can be projected in any order.
pub fn project(
    baseline: &[MonthlyBaseline],
    opening: &OpeningPosition,
    params: &ScenarioParameters,
) -> Result<Vec<ForecastRow>> {
    validate_baseline(baseline)?;

    let income_mult = 1.0 + params.income_growth_pct / 100.0;
    let cost_mult = 1.0 + params.cost_growth_pct / 100.0;
    // A multiplier below zero is a severe-contraction modelling signal.
    // It is deliberately not clamped; the caller interprets the output.
    if income_mult < 0.0 || cost_mult < 0.0 {
        log::debug!(
            "growth multiplier below zero (income {:.4}, cost {:.4}); projecting unclamped",
            income_mult,
            cost_mult
        );
    }

    let mut rows = Vec::with_capacity(FORECAST_MONTHS);
    let mut cash = opening.opening_cash;

    for entry in baseline {
        let income = entry.income * income_mult;
        let expenses = (entry.staff_cost + entry.non_staff_cost) * cost_mult;
        let operating_cashflow = income - expenses;
        let capex = entry.capex; // unmodified by scenario
        let mut financing = entry.financing;
        if entry.month == params.injection_month {
            financing += params.capital_injection;
        }
        let net_cashflow = operating_cashflow - capex + financing;
        cash += net_cashflow;

        rows.push(ForecastRow {
            month: entry.month,
            income,
            expenses,
            operating_cashflow,
            capex,
            financing,
            net_cashflow,
            closing_cash: cash,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn month_entry(
        month: u32,
        income: f64,
        staff_cost: f64,
        non_staff_cost: f64,
        capex: f64,
        financing: f64,
    ) -> MonthlyBaseline {
        MonthlyBaseline {
            month,
            income,
            staff_cost,
            non_staff_cost,
            capex,
            financing,
        }
    }

    fn flat_baseline() -> Vec<MonthlyBaseline> {
        (1..=12)
            .map(|m| month_entry(m, 1000.0, 600.0, 300.0, 50.0, 0.0))
            .collect()
    }

    fn opening(cash: f64) -> OpeningPosition {
        OpeningPosition {
            as_of: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            opening_cash: cash,
            receivables: 0.0,
            payables: 0.0,
            current_assets: 0.0,
            current_liabilities: 1.0,
        }
    }

    fn params(income_pct: f64, cost_pct: f64, injection: f64, month: u32) -> ScenarioParameters {
        ScenarioParameters {
            income_growth_pct: income_pct,
            cost_growth_pct: cost_pct,
            capital_injection: injection,
            injection_month: month,
        }
    }

    #[test]
    fn worked_example_month_one() {
        // income 1000 * 1.04 = 1040; expenses 900 * 0.98 = 882;
        // operating 158; net 158 - 50 = 108; closing 200 + 108 = 308
        let rows = project(&flat_baseline(), &opening(200.0), &params(4.0, -2.0, 0.0, 1)).unwrap();
        let first = &rows[0];
        assert!((first.income - 1040.0).abs() < 1e-9);
        assert!((first.expenses - 882.0).abs() < 1e-9);
        assert!((first.operating_cashflow - 158.0).abs() < 1e-9);
        assert!((first.net_cashflow - 108.0).abs() < 1e-9);
        assert!((first.closing_cash - 308.0).abs() < 1e-9);
    }

    #[test]
    fn closing_balance_is_a_running_sum() {
        let rows = project(&flat_baseline(), &opening(200.0), &params(4.0, -2.0, 0.0, 1)).unwrap();
        assert!((rows[0].closing_cash - (200.0 + rows[0].net_cashflow)).abs() < 1e-9);
        for m in 1..rows.len() {
            let expected = rows[m - 1].closing_cash + rows[m].net_cashflow;
            assert!((rows[m].closing_cash - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_growth_reproduces_the_baseline() {
        let baseline = flat_baseline();
        let rows = project(&baseline, &opening(0.0), &params(0.0, 0.0, 0.0, 1)).unwrap();
        for (entry, row) in baseline.iter().zip(&rows) {
            assert_eq!(row.income, entry.income);
            assert_eq!(row.expenses, entry.staff_cost + entry.non_staff_cost);
            assert_eq!(row.financing, entry.financing);
        }
    }

    #[test]
    fn injection_lands_only_in_the_designated_month() {
        let rows = project(&flat_baseline(), &opening(0.0), &params(0.0, 0.0, 5000.0, 4)).unwrap();
        for row in &rows {
            let expected = if row.month == 4 { 5000.0 } else { 0.0 };
            assert_eq!(row.financing, expected);
        }
    }

    #[test]
    fn severe_contraction_is_not_clamped() {
        // -150% drives the multiplier to -0.5: negative income is a
        // modelling signal, not an error.
        let rows = project(&flat_baseline(), &opening(0.0), &params(-150.0, 0.0, 0.0, 1)).unwrap();
        assert!((rows[0].income - (-500.0)).abs() < 1e-9);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let baseline = flat_baseline();
        let pos = opening(200.0);
        let p = params(4.0, -2.0, 0.0, 1);
        assert_eq!(
            project(&baseline, &pos, &p).unwrap(),
            project(&baseline, &pos, &p).unwrap()
        );
    }

    #[test]
    fn short_series_is_rejected() {
        let mut baseline = flat_baseline();
        baseline.pop();
        let err = project(&baseline, &opening(0.0), &params(0.0, 0.0, 0.0, 1)).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidBaseline(_)));
    }

    #[test]
    fn non_contiguous_months_are_rejected() {
        let mut baseline = flat_baseline();
        baseline[5].month = 9;
        let err = validate_baseline(&baseline).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidBaseline(_)));
    }
}
