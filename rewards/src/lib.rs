//! Client-side veNFT escrow balance and reward accrual for the Solciety
//! staking pool.
//!
//! Everything here is a pure function of already-decoded account snapshots,
//! the reward schedule and one sampled clock value. Reward figures produced by
//! [`curve::AccrualAccumulator`] and [`curve::TodayEstimator`] are estimates:
//! the ledger settles the authoritative amount when a claim executes, see
//! [`settlement`].

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

pub const MIN_LOCK_DURATION_DAYS: u64 = 1; // 1 day
pub const MAX_LOCK_DURATION_DAYS: u64 = 365 / 2; // 6 months

pub const MAX_DURATION_TO_EMIT_REWARDS_DAYS: u64 = 4 * 365 + 1; // 4 years

/// Length of a participant's balance series: one entry per day of the longest
/// possible lock plus the day the lock started on.
pub const BALANCE_HORIZON_DAYS: u64 = MAX_LOCK_DURATION_DAYS + 1;

/// Number of days over which one unit of locked weight decays to zero.
pub const VENFT_DECAY_DAYS: u64 = 365 / 2;

pub const REWARD_TOKEN_DECIMALS: u8 = 9;
pub const SUBUNITS_PER_REWARD_TOKEN: u64 = 1_000_000_000;

/// Weight minted per locked NFT per remaining lock day.
pub const VENFT_PER_DAY: u64 = 1_000_000_000;

pub mod curve;
pub mod error;
pub mod schedule;
pub mod settlement;
pub mod states;
pub mod utils;

pub use curve::*;
pub use error::{ErrorCode, Result};
pub use schedule::RewardSchedule;
pub use states::*;
pub use utils::Fixed;
