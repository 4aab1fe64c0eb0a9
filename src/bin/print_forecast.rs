use anyhow::Result;

use cashflow_analyzer::analysis::{insight, summary};
use cashflow_analyzer::dataset;
use cashflow_analyzer::forecast::projector;
use cashflow_analyzer::forecast::registry::Registry;
use cashflow_analyzer::forecast::working_capital;

/// Console stand-in for the dashboard. Usage:
///   print_forecast [scenario] [--json]
/// Scenario defaults to "Base"; --json emits the payload the UI consumes.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let scenario_name = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("Base");

    let scenario = Registry::get(scenario_name)?;
    let baseline = dataset::baseline();
    let opening = dataset::opening_position();
    let prior = dataset::prior_year_position();

    let rows = projector::project(baseline, opening, &scenario.params)?;
    let snapshot = working_capital::working_capital(opening)?;
    let prior_snapshot = working_capital::working_capital(prior)?;
    let summaries = summary::compare_scenarios(baseline, opening)?;
    let insights = insight::generate_liquidity_insights(baseline, opening, prior)?;

    if as_json {
        let payload = serde_json::json!({
            "trust": dataset::TRUST_NAME,
            "scenario": scenario,
            "forecast": rows,
            "working_capital": snapshot,
            "summaries": summaries,
            "insights": insights,
            "assumptions": dataset::assumption_notes(),
            "historical_pl": dataset::historical_pl(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "{} - FY 2025/26 forecast, {} scenario (£000)",
        dataset::TRUST_NAME,
        scenario.name
    );
    println!("{}\n", scenario.rationale);

    println!(
        "{:<8} | {:>9} | {:>9} | {:>9} | {:>7} | {:>9} | {:>9} | {:>9}",
        "Period", "Income", "Expenses", "Op CF", "Capex", "Financing", "Net CF", "Closing"
    );
    println!("{}", "-".repeat(90));
    for row in &rows {
        println!(
            "{:<8} | {:>9.0} | {:>9.0} | {:>9.0} | {:>7.0} | {:>9.0} | {:>9.0} | {:>9.0}",
            dataset::period_label(row.month),
            row.income,
            row.expenses,
            row.operating_cashflow,
            row.capex,
            row.financing,
            row.net_cashflow,
            row.closing_cash
        );
    }

    println!("\nWorking capital (£000)");
    println!("{}", "-".repeat(54));
    println!(
        "{:<22} | {:>12} | {:>12}",
        "Metric",
        prior_snapshot.as_of.to_string(),
        snapshot.as_of.to_string()
    );
    println!(
        "{:<22} | {:>12.0} | {:>12.0}",
        "Receivables", prior_snapshot.receivables, snapshot.receivables
    );
    println!(
        "{:<22} | {:>12.0} | {:>12.0}",
        "Payables", prior_snapshot.payables, snapshot.payables
    );
    println!(
        "{:<22} | {:>12.2} | {:>12.2}",
        "Current ratio", prior_snapshot.current_ratio, snapshot.current_ratio
    );

    println!("\nScenario comparison (£000)");
    println!("{}", "-".repeat(70));
    println!(
        "{:<12} | {:>12} | {:>12} | {:>10} | {:>10}",
        "Scenario", "Operating CF", "Closing", "Lowest", "Pinch"
    );
    for s in &summaries {
        println!(
            "{:<12} | {:>12.0} | {:>12.0} | {:>10.0} | {:>10}",
            s.scenario,
            s.operating_cashflow_total,
            s.closing_cash,
            s.lowest_cash,
            dataset::period_label(s.lowest_cash_month)
        );
    }

    println!("\nInsights");
    println!("{}", "-".repeat(70));
    for i in &insights {
        println!("[{:?}] {}", i.severity, i.title);
        println!("        {}", i.description);
    }

    Ok(())
}
