use crate::{error::ErrorCode, Result, BALANCE_HORIZON_DAYS};

//
// ──────────────────────────────────────────────────────────────────────────────
// Participant State Snapshot
// ──────────────────────────────────────────────────────────────────────────────
//

/// Number of days tracked by a participant's balance series (6 months).
pub const BALANCE_SERIES_DAYS: usize = BALANCE_HORIZON_DAYS as usize;

/// Decoded copy of one staker account at one point in time.
///
/// The balance series is anchored at `last_updated_at`, not at program
/// deployment: index 0 is the day the participant was last settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantStateSnapshot {
    /// Raw 32-byte id of the wallet owning the stake.
    participant_id: [u8; 32],

    /// veNFT weight owned per day since `last_updated_at`.
    balance_series: Vec<u64>,

    /// Number of NFTs this participant has in escrow.
    locked_count: u64,

    /// Reward already settled on-chain and not yet claimed, in whole reward
    /// tokens.
    carried_reward: u64,

    /// UNIX timestamp (seconds) of the last settlement.
    last_updated_at: i64,

    /// UNIX timestamp (seconds) of the last claim, 0 if never claimed.
    last_claimed_at: i64,
}

impl ParticipantStateSnapshot {
    pub fn new(
        participant_id: [u8; 32],
        mut balance_series: Vec<u64>,
        locked_count: u64,
        carried_reward: u64,
        last_updated_at: i64,
        last_claimed_at: i64,
    ) -> Result<Self> {
        if balance_series.len() > BALANCE_SERIES_DAYS {
            return Err(ErrorCode::SeriesTooLong {
                len: balance_series.len(),
                max: BALANCE_SERIES_DAYS,
            });
        }
        balance_series.resize(BALANCE_SERIES_DAYS, 0);
        Ok(Self {
            participant_id,
            balance_series,
            locked_count,
            carried_reward,
            last_updated_at,
            last_claimed_at,
        })
    }

    /// Staker account as initialised by the first `stake` of a wallet.
    pub fn empty(participant_id: [u8; 32], now: i64) -> Self {
        Self {
            participant_id,
            balance_series: vec![0; BALANCE_SERIES_DAYS],
            locked_count: 0,
            carried_reward: 0,
            last_updated_at: now,
            last_claimed_at: 0,
        }
    }

    pub fn participant_id(&self) -> &[u8; 32] {
        &self.participant_id
    }

    pub fn balance_series(&self) -> &[u64] {
        &self.balance_series
    }

    pub fn locked_count(&self) -> u64 {
        self.locked_count
    }

    pub fn carried_reward(&self) -> u64 {
        self.carried_reward
    }

    pub fn last_updated_at(&self) -> i64 {
        self.last_updated_at
    }

    pub fn last_claimed_at(&self) -> i64 {
        self.last_claimed_at
    }

    /// Balance owned `day` days after `last_updated_at`, or 0 past the horizon.
    pub fn balance_at(&self, day: u64) -> u64 {
        usize::try_from(day)
            .ok()
            .and_then(|day| self.balance_series.get(day))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn with_settlement(
        &self,
        balance_series: Vec<u64>,
        carried_reward: u64,
        last_updated_at: i64,
    ) -> Self {
        debug_assert_eq!(balance_series.len(), BALANCE_SERIES_DAYS);
        Self {
            balance_series,
            carried_reward,
            last_updated_at,
            ..self.clone()
        }
    }

    pub(crate) fn with_balance_series(&self, balance_series: Vec<u64>) -> Self {
        debug_assert_eq!(balance_series.len(), BALANCE_SERIES_DAYS);
        Self {
            balance_series,
            ..self.clone()
        }
    }

    pub(crate) fn with_locked_count(&self, locked_count: u64) -> Self {
        Self {
            locked_count,
            ..self.clone()
        }
    }

    pub(crate) fn with_claim(&self, now: i64) -> Self {
        Self {
            carried_reward: 0,
            last_claimed_at: now,
            ..self.clone()
        }
    }
}
