use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of the published baseline series. All monetary values are
/// £000, as in the source accounts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonthlyBaseline {
    /// Ordinal position within the forecast year, 1..=12 (1 = April).
    pub month: u32,
    pub income: f64,
    pub staff_cost: f64,
    pub non_staff_cost: f64,
    /// Cash outflow on the capital programme.
    pub capex: f64,
    /// Signed: positive = inflow (e.g. capital injection), negative = repayment.
    pub financing: f64,
}

/// Balance-sheet position at a statement date. Not time-varying; the
/// engine does not forecast balance-sheet evolution.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OpeningPosition {
    pub as_of: NaiveDate,
    /// Signed: a negative balance represents an overdraft.
    pub opening_cash: f64,
    pub receivables: f64,
    pub payables: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
}

/// Hand-authored adjustments for one named scenario. Applied uniformly
/// across the forecast horizon.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ScenarioParameters {
    pub income_growth_pct: f64,
    /// Applied to staff and non-staff costs alike.
    pub cost_growth_pct: f64,
    /// Non-negative; 0 means no injection.
    pub capital_injection: f64,
    /// Month (1..=12) the injection lands in. Ignored when the injection is 0.
    pub injection_month: u32,
}

/// One month of projector output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastRow {
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    /// income - expenses
    pub operating_cashflow: f64,
    pub capex: f64,
    pub financing: f64,
    /// operating_cashflow - capex + financing
    pub net_cashflow: f64,
    /// Running balance: previous month's closing cash (month 1: opening
    /// cash) plus this month's net cashflow.
    pub closing_cash: f64,
}

/// Point-in-time liquidity metrics derived from an [`OpeningPosition`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkingCapitalSnapshot {
    pub as_of: NaiveDate,
    pub receivables: f64,
    pub payables: f64,
    /// current_assets / current_liabilities
    pub current_ratio: f64,
}

/// One year of the published P&L history (£000). Sign convention follows
/// the accounts: expenses and deficits are negative.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoricalResult {
    pub year: String,
    pub patient_care_income: f64,
    pub other_operating_income: f64,
    pub total_income: f64,
    pub operating_expenses: f64,
    pub operating_surplus_deficit: f64,
}

/// A forecast line item paired with the assumption text behind it, for
/// the dashboard's methodology panel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AssumptionNote {
    pub line_item: String,
    pub note: String,
}
