use crate::error::{ForecastError, Result};
use crate::models::{OpeningPosition, WorkingCapitalSnapshot};

/// Derive point-in-time working-capital metrics from a balance-sheet
/// position. Receivables and payables pass through unchanged: this
/// system forecasts the cash statement, not balance-sheet evolution.
pub fn working_capital(position: &OpeningPosition) -> Result<WorkingCapitalSnapshot> {
    if position.current_liabilities == 0.0 {
        // "Not meaningful", never infinity or zero.
        return Err(ForecastError::UndefinedRatio);
    }
    Ok(WorkingCapitalSnapshot {
        as_of: position.as_of,
        receivables: position.receivables,
        payables: position.payables,
        current_ratio: position.current_assets / position.current_liabilities,
    })
}
