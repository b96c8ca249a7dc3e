use crate::{error::ErrorCode, Result, MAX_DURATION_TO_EMIT_REWARDS_DAYS};

//
// ──────────────────────────────────────────────────────────────────────────────
// Global State Snapshot
// ──────────────────────────────────────────────────────────────────────────────
//

/// Number of days tracked by the global supply series (4 years).
pub const SUPPLY_HORIZON_DAYS: usize = MAX_DURATION_TO_EMIT_REWARDS_DAYS as usize;

/// Decoded copy of the pool's global state account at one point in time.
///
/// A snapshot never changes after it is captured. Settlement rules that model
/// a ledger transaction return a new snapshot instead of editing this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalStateSnapshot {
    /// UNIX timestamp (seconds) the program was deployed at. Day 0 of the
    /// supply series and of the reward schedule starts here.
    deployed_at: i64,

    /// UNIX timestamp (seconds) of the last instruction that touched the state.
    last_updated_at: i64,

    /// Number of NFTs currently escrowed across all participants.
    total_locked_count: u64,

    /// Aggregate veNFT weight per day since `deployed_at`.
    supply_series: Vec<u64>,
}

impl GlobalStateSnapshot {
    /// Builds a snapshot, padding `supply_series` with zeros up to the 4-year
    /// horizon. A series longer than the horizon is rejected.
    pub fn new(
        deployed_at: i64,
        last_updated_at: i64,
        total_locked_count: u64,
        mut supply_series: Vec<u64>,
    ) -> Result<Self> {
        if supply_series.len() > SUPPLY_HORIZON_DAYS {
            return Err(ErrorCode::SeriesTooLong {
                len: supply_series.len(),
                max: SUPPLY_HORIZON_DAYS,
            });
        }
        supply_series.resize(SUPPLY_HORIZON_DAYS, 0);
        Ok(Self {
            deployed_at,
            last_updated_at,
            total_locked_count,
            supply_series,
        })
    }

    /// State of a freshly deployed program: no weight recorded on any day.
    pub fn deployed(deployed_at: i64) -> Self {
        Self {
            deployed_at,
            last_updated_at: deployed_at,
            total_locked_count: 0,
            supply_series: vec![0; SUPPLY_HORIZON_DAYS],
        }
    }

    pub fn deployed_at(&self) -> i64 {
        self.deployed_at
    }

    pub fn last_updated_at(&self) -> i64 {
        self.last_updated_at
    }

    pub fn total_locked_count(&self) -> u64 {
        self.total_locked_count
    }

    pub fn supply_series(&self) -> &[u64] {
        &self.supply_series
    }

    /// Supply recorded for `day`, or 0 past the horizon.
    pub fn supply_at(&self, day: u64) -> u64 {
        usize::try_from(day)
            .ok()
            .and_then(|day| self.supply_series.get(day))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn with_last_updated_at(&self, now: i64) -> Self {
        Self {
            last_updated_at: now,
            ..self.clone()
        }
    }

    pub(crate) fn with_total_locked_count(&self, total_locked_count: u64) -> Self {
        Self {
            total_locked_count,
            ..self.clone()
        }
    }

    pub(crate) fn with_supply_series(&self, supply_series: Vec<u64>) -> Self {
        debug_assert_eq!(supply_series.len(), SUPPLY_HORIZON_DAYS);
        Self {
            supply_series,
            ..self.clone()
        }
    }
}
