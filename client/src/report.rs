use anyhow::Result;
use solciety_rewards::{DashboardReport, Estimate};

const NEVER_STAKED: &str = "Never staked before.";
const UNAVAILABLE: &str = "Unavailable.";

pub fn format_estimate(estimate: &Estimate, unit: &str) -> String {
    match estimate {
        Estimate::Value(value) => format!("{} {}", value, unit),
        Estimate::NotParticipating => NEVER_STAKED.to_string(),
        Estimate::Unavailable => UNAVAILABLE.to_string(),
    }
}

pub fn render_report(report: &DashboardReport) -> String {
    let claimable_base_units = report
        .claimable_base_units
        .map_or_else(|| "-".to_string(), |units| units.to_string());
    let rows = [
        ("evaluated at", report.evaluated_at.to_string()),
        (
            "days since deployed",
            format_estimate(&report.days_since_deployed, "day(s)"),
        ),
        (
            "days since last update",
            format_estimate(&report.days_since_participant_updated, "day(s)"),
        ),
        (
            "your balance",
            format_estimate(&report.estimated_participant_balance, "veNFT"),
        ),
        (
            "total supply",
            format_estimate(&report.estimated_total_supply, "veNFT"),
        ),
        (
            "rewards claimable",
            format_estimate(&report.rewards_claimable, "$CIETY"),
        ),
        ("claimable base units", claimable_base_units),
        (
            "today's total rewards",
            format_estimate(&report.todays_total_rewards, "$CIETY"),
        ),
        (
            "today's rewards for you",
            format_estimate(&report.todays_participant_rewards, "$CIETY"),
        ),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<24}{}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_report(report: &DashboardReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}
