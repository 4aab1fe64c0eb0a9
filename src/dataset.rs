//! Static published dataset, anonymised from an NHS Foundation Trust's
//! 2024/25 financial statements. Loaded once, never mutated; everything
//! downstream is recomputed on demand from these constants.

use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;

use crate::models::{AssumptionNote, HistoricalResult, MonthlyBaseline, OpeningPosition};

/// Generic trust name; the real provider is masked.
pub const TRUST_NAME: &str = "Metropolitan NHS Foundation Trust";

// --- 2024/25 annual figures (£000) used as the forecast run-rate ---
const ANNUAL_INCOME: f64 = 530_705.0; // patient care 498,706 + other 31,999
const ANNUAL_STAFF_COST: f64 = 386_011.0;
const ANNUAL_NON_STAFF_COST: f64 = 149_955.0; // total expenses 535,966 - staff
const ANNUAL_CAPEX: f64 = 7_595.0; // 2024/25 investing outflow, programme maintained
const ANNUAL_PRINCIPAL_REPAYMENTS: f64 = 4_147.0 + 5_289.0; // DHSC loans + leases
const ANNUAL_PDC_DIVIDEND: f64 = 3_954.0;
const ANNUAL_INTEREST_RECEIVED: f64 = 1_567.0;

/// Monthly seasonality index, Apr..Mar. 1.0 = average month; winter
/// pressure Dec-Feb, year-end catch-up and accruals in March.
const SEASONALITY: [f64; 12] = [
    0.98, 0.99, 0.97, 0.96, 0.95, 1.00, 1.02, 1.03, 1.05, 1.06, 1.04, 1.10,
];

/// Capex phasing weights, Apr..Mar, skewed to Q3/Q4 (estate and
/// equipment spend lands late in the year). Weights sum to 1.0.
const CAPEX_PHASING: [f64; 12] = [
    0.06, 0.06, 0.08, 0.08, 0.08, 0.08, 0.09, 0.09, 0.10, 0.10, 0.09, 0.09,
];

static BASELINE: Lazy<Vec<MonthlyBaseline>> = Lazy::new(|| {
    // Contractual financing flows are spread evenly; there is no
    // seasonality in loan repayments or the PDC dividend.
    let monthly_financing =
        (ANNUAL_INTEREST_RECEIVED - ANNUAL_PRINCIPAL_REPAYMENTS - ANNUAL_PDC_DIVIDEND) / 12.0;

    (1..=12u32)
        .map(|month| {
            let s = SEASONALITY[month as usize - 1];
            MonthlyBaseline {
                month,
                income: ANNUAL_INCOME / 12.0 * s,
                staff_cost: ANNUAL_STAFF_COST / 12.0 * s,
                non_staff_cost: ANNUAL_NON_STAFF_COST / 12.0 * s,
                capex: ANNUAL_CAPEX * CAPEX_PHASING[month as usize - 1],
                financing: monthly_financing,
            }
        })
        .collect()
});

static OPENING_POSITION: Lazy<OpeningPosition> = Lazy::new(|| OpeningPosition {
    as_of: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    opening_cash: 10_646.0, // group cash per the statement of cash flows
    receivables: 22_873.0,
    payables: 50_814.0,
    current_assets: 36_537.0,
    current_liabilities: 62_295.0,
});

static PRIOR_YEAR_POSITION: Lazy<OpeningPosition> = Lazy::new(|| OpeningPosition {
    as_of: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    opening_cash: 11_921.0,
    receivables: 14_652.0,
    payables: 42_184.0,
    current_assets: 32_471.0,
    current_liabilities: 56_718.0,
});

static HISTORICAL_PL: Lazy<Vec<HistoricalResult>> = Lazy::new(|| {
    let year = |year: &str,
                patient_care_income: f64,
                other_operating_income: f64,
                operating_expenses: f64,
                operating_surplus_deficit: f64| HistoricalResult {
        year: year.to_string(),
        patient_care_income,
        other_operating_income,
        total_income: patient_care_income + other_operating_income,
        operating_expenses,
        operating_surplus_deficit,
    };
    vec![
        year("2020/21", 356_990.0, 53_163.0, -417_415.0, -7_262.0),
        year("2021/22", 410_365.0, 29_126.0, -439_547.0, -56.0),
        year("2022/23", 447_757.0, 30_582.0, -475_701.0, 2_638.0),
        year("2023/24", 450_871.0, 33_355.0, -502_251.0, -18_025.0),
        year("2024/25", 498_706.0, 31_999.0, -535_966.0, -5_261.0),
    ]
});

static ASSUMPTION_NOTES: Lazy<Vec<AssumptionNote>> = Lazy::new(|| {
    let note = |line_item: &str, note: &str| AssumptionNote {
        line_item: line_item.to_string(),
        note: note.to_string(),
    };
    vec![
        note(
            "Operating income - patient care",
            "Contract income from ICBs/NHS England (activity-based and block), \
             high-cost drugs, other clinical. 2024/25 run-rate with the seasonal \
             pattern applied; scenario growth on top.",
        ),
        note(
            "Operating income - other",
            "Education & training, R&D, non-patient care, leases. Same run-rate \
             treatment and seasonality as patient care income.",
        ),
        note(
            "Staff costs",
            "Agenda for Change, medical, agency/locum. Seasonality applied; \
             scenario cost growth reflects pay settlement and agency pressure.",
        ),
        note(
            "Non-staff costs",
            "Drugs, clinical supplies, general supplies, premises, clinical \
             negligence, other operating. Grown with staff costs under each \
             scenario.",
        ),
        note(
            "Capital programme",
            "2024/25 investing cash flow maintained, phased to Q3/Q4 to match \
             the timing of estate and equipment spend. Unchanged by scenario.",
        ),
        note(
            "Financing flows",
            "DHSC loan and lease principal repayments plus the PDC dividend, \
             net of interest received, spread evenly. Contractual and \
             policy-driven; no new borrowing assumed in the baseline.",
        ),
    ]
});

/// First month of the forecast year (FY 2025/26 runs Apr 25 - Mar 26).
pub fn forecast_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

/// Calendar label for a forecast month ordinal, e.g. 1 -> "Apr 25".
pub fn period_label(month: u32) -> String {
    let date = forecast_start() + Months::new(month.saturating_sub(1));
    date.format("%b %y").to_string()
}

/// The unadjusted 12-month baseline series (scenario growth not applied).
pub fn baseline() -> &'static [MonthlyBaseline] {
    &BASELINE
}

/// Balance-sheet position at 31 Mar 25, the forecast opening.
pub fn opening_position() -> &'static OpeningPosition {
    &OPENING_POSITION
}

/// Prior-year comparator position at 31 Mar 24.
pub fn prior_year_position() -> &'static OpeningPosition {
    &PRIOR_YEAR_POSITION
}

/// Five years of published P&L results.
pub fn historical_pl() -> &'static [HistoricalResult] {
    &HISTORICAL_PL
}

/// Assumption text behind each forecast line item.
pub fn assumption_notes() -> &'static [AssumptionNote] {
    &ASSUMPTION_NOTES
}
