use serde::{Deserialize, Serialize};

use crate::analysis::summary;
use crate::dataset;
use crate::error::Result;
use crate::forecast::working_capital;
use crate::models::{MonthlyBaseline, OpeningPosition};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Critical, // Red: immediate treasury action
    High,     // Orange: significant risk
    Medium,   // Yellow: watch
    Low,      // Blue: context
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Liquidity,
    WorkingCapital,
    Mitigation,
}

/// A narrative finding for the dashboard's summary panel.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: InsightSeverity,
    pub category: InsightCategory,
    pub score: u32, // For sorting (higher = top)
    /// Scenario the finding relates to, if any (for linking to charts).
    pub scenario: Option<String>,
    /// Statement date of the underlying position. No clock reads: output
    /// is a pure function of the inputs.
    pub date: String,
}

fn millions(value_000: f64) -> String {
    format!("£{:.1}m", value_000 / 1000.0)
}

/// Derive the dashboard's liquidity findings from the forecast outputs
/// and the two dated balance-sheet positions. Sorted by score descending.
pub fn generate_liquidity_insights(
    baseline: &[MonthlyBaseline],
    opening: &OpeningPosition,
    prior: &OpeningPosition,
) -> Result<Vec<Insight>> {
    let mut insights = Vec::new();
    let date = opening.as_of.format("%Y-%m-%d").to_string();
    let summaries = summary::compare_scenarios(baseline, opening)?;

    // 1. Cash exhaustion: any scenario whose balance goes overdrawn is an
    // immediate treasury escalation - the base case more so than a tail case.
    for s in &summaries {
        if s.lowest_cash < 0.0 {
            let score = if s.scenario == "Base" { 100 } else { 90 };
            insights.push(Insight {
                id: format!("cash_exhausted_{}", s.scenario.to_lowercase().replace(' ', "_")),
                title: format!("Cash exhausted under {}", s.scenario),
                description: format!(
                    "Forecast cash reaches {} in {} under the {} scenario. Agree a \
                     drawdown or support plan before the pinch point.",
                    millions(s.lowest_cash),
                    dataset::period_label(s.lowest_cash_month),
                    s.scenario
                ),
                severity: InsightSeverity::Critical,
                category: InsightCategory::Liquidity,
                score,
                scenario: Some(s.scenario.clone()),
                date: date.clone(),
            });
        }
    }

    // 2. Do-nothing gap vs the planning assumption.
    if let (Some(base), Some(do_nothing)) = (
        summaries.iter().find(|s| s.scenario == "Base"),
        summaries.iter().find(|s| s.scenario == "Do nothing"),
    ) {
        let gap = base.closing_cash - do_nothing.closing_cash;
        if gap > 0.0 {
            insights.push(Insight {
                id: "do_nothing_gap".to_string(),
                title: "Inaction carries a cash cost".to_string(),
                description: format!(
                    "Taking no mitigating action ends the year {} below the base \
                     case ({} vs {}). At least base-case mitigations are needed.",
                    millions(gap),
                    millions(do_nothing.closing_cash),
                    millions(base.closing_cash)
                ),
                severity: InsightSeverity::High,
                category: InsightCategory::Mitigation,
                score: 70,
                scenario: Some("Do nothing".to_string()),
                date: date.clone(),
            });
        }
    }

    // 3. Working capital strain at the statement date.
    let snapshot = working_capital::working_capital(opening)?;
    if snapshot.current_ratio < 1.0 {
        insights.push(Insight {
            id: "current_ratio".to_string(),
            title: "Current liabilities exceed current assets".to_string(),
            description: format!(
                "Current ratio is {:.2} at {}. Short-term obligations outweigh \
                 short-term assets; liquidity headroom is limited.",
                snapshot.current_ratio, date
            ),
            severity: InsightSeverity::High,
            category: InsightCategory::WorkingCapital,
            score: 80,
            scenario: None,
            date: date.clone(),
        });
    }

    // 4. Period-on-period receivables and payables drift.
    let receivables_growth = opening.receivables - prior.receivables;
    if receivables_growth > 0.0 {
        insights.push(Insight {
            id: "receivables_growth".to_string(),
            title: "Receivables building up".to_string(),
            description: format!(
                "Receivables are up {} year-on-year (to {}). Accelerating \
                 collection from ICBs and other bodies would release cash.",
                millions(receivables_growth),
                millions(opening.receivables)
            ),
            severity: InsightSeverity::Medium,
            category: InsightCategory::WorkingCapital,
            score: 50,
            scenario: None,
            date: date.clone(),
        });
    }
    let payables_growth = opening.payables - prior.payables;
    if payables_growth > 0.0 {
        insights.push(Insight {
            id: "payables_growth".to_string(),
            title: "Payables stretching".to_string(),
            description: format!(
                "Trade payables are up {} year-on-year (to {}). Supplier payment \
                 terms are already absorbing strain.",
                millions(payables_growth),
                millions(opening.payables)
            ),
            severity: InsightSeverity::Medium,
            category: InsightCategory::WorkingCapital,
            score: 45,
            scenario: None,
            date: date.clone(),
        });
    }

    // Sort by score descending
    insights.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn position(
        year: i32,
        receivables: f64,
        payables: f64,
        current_assets: f64,
        current_liabilities: f64,
    ) -> OpeningPosition {
        OpeningPosition {
            as_of: NaiveDate::from_ymd_opt(year, 3, 31).unwrap(),
            opening_cash: 10_000.0,
            receivables,
            payables,
            current_assets,
            current_liabilities,
        }
    }

    #[test]
    fn strained_position_yields_working_capital_findings() {
        let opening = position(2025, 22_873.0, 50_814.0, 36_537.0, 62_295.0);
        let prior = position(2024, 14_652.0, 42_184.0, 32_471.0, 56_718.0);

        let insights =
            generate_liquidity_insights(crate::dataset::baseline(), &opening, &prior).unwrap();

        assert!(insights.iter().any(|i| i.id == "current_ratio"));
        assert!(insights.iter().any(|i| i.id == "receivables_growth"));
        assert!(insights.iter().any(|i| i.id == "payables_growth"));
    }

    #[test]
    fn healthy_position_is_quiet_on_working_capital() {
        let opening = position(2025, 10_000.0, 20_000.0, 80_000.0, 40_000.0);
        let prior = position(2024, 12_000.0, 25_000.0, 78_000.0, 41_000.0);

        let insights =
            generate_liquidity_insights(crate::dataset::baseline(), &opening, &prior).unwrap();

        assert!(insights.iter().all(|i| i.category != InsightCategory::WorkingCapital));
    }

    #[test]
    fn insights_are_sorted_by_score() {
        let opening = position(2025, 22_873.0, 50_814.0, 36_537.0, 62_295.0);
        let prior = position(2024, 14_652.0, 42_184.0, 32_471.0, 56_718.0);

        let insights =
            generate_liquidity_insights(crate::dataset::baseline(), &opening, &prior).unwrap();
        assert!(insights.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
