use crate::{curve::DayIndexer, MAX_LOCK_DURATION_DAYS, SECONDS_PER_DAY};

/// Escrow record of a single locked NFT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockedNftSnapshot {
    /// Participant that locked the NFT and alone may release it.
    pub staker_id: [u8; 32],
    /// UNIX timestamp (seconds) the current lock period started at.
    pub locked_at: i64,
    /// Length of the current lock period in days, counted from `locked_at`.
    pub lock_duration_in_days: u64,
}

impl LockedNftSnapshot {
    pub fn new(staker_id: [u8; 32], locked_at: i64, lock_duration_in_days: u64) -> Self {
        Self {
            staker_id,
            locked_at,
            lock_duration_in_days,
        }
    }

    fn days_left_before_unlocked(&self, now: i64) -> u64 {
        let days_elapsed_since_locked = DayIndexer::elapsed_days(self.locked_at, now).day_offset;
        self.lock_duration_in_days
            .saturating_sub(days_elapsed_since_locked)
    }

    /// Upper bound for an `extend`: the remaining lock may never exceed six
    /// months.
    pub fn max_num_days_may_be_extended(&self, now: i64) -> u64 {
        MAX_LOCK_DURATION_DAYS.saturating_sub(self.days_left_before_unlocked(now))
    }

    /// Restarts the lock at `now` with the remaining days plus `days`.
    pub fn extend_lock_duration(&self, now: i64, days: u64) -> Self {
        Self {
            staker_id: self.staker_id,
            locked_at: now,
            lock_duration_in_days: self.days_left_before_unlocked(now).saturating_add(days),
        }
    }

    pub fn unlocks_at(&self) -> i64 {
        let lock_seconds = self
            .lock_duration_in_days
            .saturating_mul(SECONDS_PER_DAY)
            .try_into()
            .unwrap_or(i64::MAX);
        self.locked_at.saturating_add(lock_seconds)
    }

    pub fn may_be_unlocked(&self, staker_id: &[u8; 32], now: i64) -> bool {
        &self.staker_id == staker_id && now > self.unlocks_at()
    }
}
