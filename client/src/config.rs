use anyhow::{format_err, Context, Result};
use configparser::ini::Ini;
use solana_sdk::pubkey::Pubkey;
use solciety_rewards::RewardSchedule;
use std::str::FromStr;

const SECTION: &str = "Global";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub http_url: String,
    /// Staking program expected to own both ledger accounts.
    pub program_id: Pubkey,
    pub state_account: Pubkey,
    pub staker_account: Option<Pubkey>,
    pub schedule_path: Option<String>,
    pub refresh_interval_secs: u64,
}

fn required(config: &Ini, key: &str) -> Result<String> {
    match config.get(SECTION, key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format_err!("{} must not be empty", key)),
    }
}

fn optional(config: &Ini, key: &str) -> Option<String> {
    config.get(SECTION, key).filter(|value| !value.is_empty())
}

fn parse_pubkey(key: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|err| format_err!("{} is not a valid address: {}", key, err))
}

pub fn load_cfg(client_config: &str) -> Result<ClientConfig> {
    let mut config = Ini::new();
    config
        .load(client_config)
        .map_err(|err| format_err!("cannot load {}: {}", client_config, err))?;
    parse_cfg(&config)
}

fn parse_cfg(config: &Ini) -> Result<ClientConfig> {
    let http_url = required(config, "http_url")?;
    let program_id = parse_pubkey("program_id", &required(config, "program_id")?)?;
    let state_account = parse_pubkey("state_account", &required(config, "state_account")?)?;
    let staker_account = optional(config, "staker_account")
        .map(|value| parse_pubkey("staker_account", &value))
        .transpose()?;
    let schedule_path = optional(config, "schedule_path");
    let refresh_interval_secs = config
        .getuint(SECTION, "refresh_interval_secs")
        .map_err(|err| format_err!("refresh_interval_secs: {}", err))?
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS);

    Ok(ClientConfig {
        http_url,
        program_id,
        state_account,
        staker_account,
        schedule_path,
        refresh_interval_secs,
    })
}

/// The shipped schedule, unless the config points at a JSON replacement.
pub fn load_schedule(client_config: &ClientConfig) -> Result<RewardSchedule> {
    match &client_config.schedule_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read schedule {}", path))?;
            RewardSchedule::from_json(&json).with_context(|| format!("invalid schedule {}", path))
        }
        None => Ok(RewardSchedule::default()),
    }
}
