use anyhow::{format_err, Context, Result};
use clap::Parser;
use log::{info, warn};
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solciety_rewards::{DashboardReport, EscrowCalculator, RewardSchedule};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod accounts;
mod config;
mod report;

use accounts::rpc::{fetch_snapshots, SnapshotPair};
use config::{load_cfg, load_schedule, ClientConfig};
use report::print_report;

#[derive(Debug, Parser)]
pub struct Opts {
    #[arg(long, default_value = "client_config.ini")]
    pub config: String,
    #[clap(subcommand)]
    pub command: DashboardCommands,
}

#[derive(Debug, Parser)]
pub enum DashboardCommands {
    /// Evaluate the dashboard once.
    Show {
        #[arg(long)]
        staker: Option<Pubkey>,
        #[arg(long)]
        json: bool,
    },
    /// Re-fetch and re-evaluate on a fixed interval.
    Watch {
        #[arg(long)]
        staker: Option<Pubkey>,
        #[arg(long)]
        interval_secs: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Print the base units a claim would currently transfer.
    Claimable {
        #[arg(long)]
        staker: Option<Pubkey>,
    },
    /// Print one day of the reward schedule, or its total.
    Schedule {
        #[arg(long)]
        day: Option<u64>,
    },
}

fn sample_clock() -> Result<i64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?;
    i64::try_from(elapsed.as_secs()).context("system clock out of range")
}

fn fetch(
    rpc_client: &RpcClient,
    pool_config: &ClientConfig,
    staker: Option<&Pubkey>,
) -> Result<SnapshotPair> {
    fetch_snapshots(
        rpc_client,
        &pool_config.program_id,
        &pool_config.state_account,
        staker,
    )
}

/// Samples the clock once, after the snapshots were captured.
fn evaluate(calculator: &EscrowCalculator, snapshots: &SnapshotPair) -> Result<DashboardReport> {
    let now = sample_clock()?;
    Ok(calculator.evaluate(
        snapshots.global.by_ref(),
        snapshots.participant.by_ref(),
        now,
    ))
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let pool_config = load_cfg(&opts.config)?;
    let schedule = load_schedule(&pool_config)?;
    let calculator = EscrowCalculator::new(&schedule);
    // solana rpc client
    let rpc_client = RpcClient::new(pool_config.http_url.to_string());

    match opts.command {
        DashboardCommands::Show { staker, json } => {
            let staker = staker.or(pool_config.staker_account);
            let snapshots = fetch(&rpc_client, &pool_config, staker.as_ref())?;
            let report = evaluate(&calculator, &snapshots)?;
            print_report(&report, json)?;
        }
        DashboardCommands::Watch {
            staker,
            interval_secs,
            json,
        } => {
            let staker = staker.or(pool_config.staker_account);
            let interval =
                Duration::from_secs(interval_secs.unwrap_or(pool_config.refresh_interval_secs));
            loop {
                let snapshots = match fetch(&rpc_client, &pool_config, staker.as_ref()) {
                    Ok(snapshots) => snapshots,
                    Err(err) => {
                        warn!("failed to fetch accounts: {:#}", err);
                        SnapshotPair::unavailable()
                    }
                };
                let report = evaluate(&calculator, &snapshots)?;
                info!("refreshed dashboard at {}", report.evaluated_at);
                print_report(&report, json)?;
                std::thread::sleep(interval);
            }
        }
        DashboardCommands::Claimable { staker } => {
            let staker = staker
                .or(pool_config.staker_account)
                .ok_or_else(|| format_err!("a staker address is required"))?;
            let snapshots = fetch(&rpc_client, &pool_config, Some(&staker))?;
            let report = evaluate(&calculator, &snapshots)?;
            let units = report
                .claimable_base_units
                .ok_or_else(|| format_err!("no claimable estimate for {}", staker))?;
            println!("{}", units);
        }
        DashboardCommands::Schedule { day } => print_schedule(&schedule, day),
    }
    Ok(())
}

fn print_schedule(schedule: &RewardSchedule, day: Option<u64>) {
    match day {
        Some(day) => println!("{}", schedule.at(day)),
        None => println!("{} over {} day(s)", schedule.total(), schedule.len()),
    }
}
