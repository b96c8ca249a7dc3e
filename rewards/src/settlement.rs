//! The settlement rules the staking program applies on-chain, as pure
//! functions over snapshots.
//!
//! Every instruction of the program first stamps the global state and rolls
//! the participant forward to the current day (see [`settle`]). The
//! transitions below reproduce the effect of `stake`, `extend`, `unstake` and
//! `claim_rewards` on captured snapshots without touching the inputs, so a
//! caller can predict the post-transaction state or compare the estimates of
//! [`crate::curve::AccrualAccumulator`] against the authoritative rule.

use log::debug;

use crate::{
    curve::DayIndexer,
    error::ErrorCode,
    schedule::RewardSchedule,
    states::{GlobalStateSnapshot, LockedNftSnapshot, ParticipantStateSnapshot},
    Result, MAX_DURATION_TO_EMIT_REWARDS_DAYS, MAX_LOCK_DURATION_DAYS, MIN_LOCK_DURATION_DAYS,
    SECONDS_PER_DAY, SUBUNITS_PER_REWARD_TOKEN, VENFT_PER_DAY,
};

/// Snapshots after a `stake` or `extend`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeOutcome {
    pub global: GlobalStateSnapshot,
    pub participant: ParticipantStateSnapshot,
    pub locked_nft: LockedNftSnapshot,
}

/// Snapshots after an `unstake`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnstakeOutcome {
    pub global: GlobalStateSnapshot,
    pub participant: ParticipantStateSnapshot,
}

/// Snapshots after a `claim_rewards`, and the whole reward tokens paid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub global: GlobalStateSnapshot,
    pub participant: ParticipantStateSnapshot,
    pub tokens_claimed: u64,
}

impl ClaimOutcome {
    /// Amount moved out of the reward treasury, in base units.
    pub fn transfer_amount(&self) -> u64 {
        self.tokens_claimed
            .saturating_mul(SUBUNITS_PER_REWARD_TOKEN)
    }
}

/// Rolls the participant forward to `now`, crediting every elapsed day's
/// share to the carried reward.
///
/// Shares are floored to whole reward tokens per day and days without supply
/// are skipped. At most six months are rolled over at once, and nothing past
/// the end of the emission window. Nothing happens until a whole day has
/// elapsed since the previous settlement.
pub fn settle(
    global: &GlobalStateSnapshot,
    participant: &ParticipantStateSnapshot,
    schedule: &RewardSchedule,
    now: i64,
) -> ParticipantStateSnapshot {
    let days_elapsed_since_last_updated =
        DayIndexer::elapsed_days(participant.last_updated_at(), now).day_offset;
    if days_elapsed_since_last_updated < 1 {
        return participant.clone();
    }

    let day_offset =
        DayIndexer::elapsed_days(global.deployed_at(), participant.last_updated_at()).day_offset;
    let days_left_before_reward_emissions_end =
        MAX_DURATION_TO_EMIT_REWARDS_DAYS.saturating_sub(day_offset);
    let rollover_count = days_elapsed_since_last_updated
        .min(MAX_LOCK_DURATION_DAYS)
        .min(days_left_before_reward_emissions_end);

    let mut carried_reward = participant.carried_reward();
    for day in 0..rollover_count {
        let global_day = day_offset + day;
        let total_venft_supply = match global.supply_at(global_day) {
            0 => {
                debug!("no supply recorded on day {}, skipping", global_day);
                continue;
            }
            total_venft_supply => total_venft_supply,
        };
        let reward_emitted = schedule.at(global_day);
        carried_reward = carried_reward.saturating_add(
            reward_emitted.saturating_mul(participant.balance_at(day)) / total_venft_supply,
        );
    }

    // rollover_count never exceeds MAX_LOCK_DURATION_DAYS, one less than the series length
    let rollover_count = rollover_count as usize;
    let mut balance_series = participant.balance_series().to_vec();
    balance_series[..rollover_count].fill(0);
    balance_series.rotate_left(rollover_count);

    participant.with_settlement(balance_series, carried_reward, now)
}

/// Mints linearly decaying veNFT weight for `lock_duration_in_days` into both
/// the participant's balance and the global supply, starting today.
///
/// The weight only counts fully from the next day: the first day is reduced
/// by the share of the day already gone.
fn mint_venfts(
    global: &GlobalStateSnapshot,
    participant: &ParticipantStateSnapshot,
    now: i64,
    lock_duration_in_days: u64,
) -> Result<(GlobalStateSnapshot, ParticipantStateSnapshot)> {
    let days_elapsed_since_program_deployed =
        DayIndexer::elapsed_days(global.deployed_at(), now).day_offset;
    let days_left_before_reward_emissions_end =
        MAX_DURATION_TO_EMIT_REWARDS_DAYS.saturating_sub(days_elapsed_since_program_deployed);
    let max_lock_duration_allowed =
        MAX_LOCK_DURATION_DAYS.min(days_left_before_reward_emissions_end);

    if !(MIN_LOCK_DURATION_DAYS..=max_lock_duration_allowed).contains(&lock_duration_in_days) {
        return Err(ErrorCode::MaxPossibleLockDurationExceeded);
    }

    let day_offset = usize::try_from(days_elapsed_since_program_deployed).unwrap_or(usize::MAX);

    let mut balance_series = participant.balance_series().to_vec();
    let mut supply_series = global.supply_series().to_vec();
    let mut balance = balance_series.iter_mut();
    let mut supply = supply_series.iter_mut().skip(day_offset);
    let mut credit = |amount: u64| {
        if let Some(balance) = balance.next() {
            *balance = (*balance).saturating_add(amount);
        }
        if let Some(supply) = supply.next() {
            *supply = (*supply).saturating_add(amount);
        }
    };

    let mut mint_amount = lock_duration_in_days.saturating_mul(VENFT_PER_DAY);

    let seconds_into_day = now.rem_euclid(SECONDS_PER_DAY as i64) as u64;
    let seconds_left_before_next_day = SECONDS_PER_DAY - seconds_into_day;
    let first_day_decay_rate =
        VENFT_PER_DAY.saturating_mul(seconds_left_before_next_day) / SECONDS_PER_DAY;

    if first_day_decay_rate > 0 {
        credit(mint_amount);
        mint_amount = mint_amount.saturating_sub(first_day_decay_rate);
    }

    for _ in 0..lock_duration_in_days {
        credit(mint_amount);
        mint_amount = mint_amount.saturating_sub(VENFT_PER_DAY);
    }

    if mint_amount > 0 {
        credit(mint_amount);
    }

    Ok((
        global.with_supply_series(supply_series),
        participant.with_balance_series(balance_series),
    ))
}

/// Escrows one NFT for `lock_duration_in_days`. A wallet without a staker
/// account starts from an empty one anchored at `now`.
pub fn stake(
    global: &GlobalStateSnapshot,
    participant: Option<&ParticipantStateSnapshot>,
    participant_id: [u8; 32],
    schedule: &RewardSchedule,
    now: i64,
    lock_duration_in_days: u64,
) -> Result<StakeOutcome> {
    let participant = match participant {
        Some(participant) if participant.participant_id() != &participant_id => {
            return Err(ErrorCode::StakerIdMismatch);
        }
        Some(participant) => participant.clone(),
        None => ParticipantStateSnapshot::empty(participant_id, now),
    };

    let global = global.with_last_updated_at(now);
    let participant = settle(&global, &participant, schedule, now);

    let global = global.with_total_locked_count(global.total_locked_count().saturating_add(1));
    let participant = participant.with_locked_count(participant.locked_count().saturating_add(1));

    let (global, participant) = mint_venfts(&global, &participant, now, lock_duration_in_days)?;

    Ok(StakeOutcome {
        global,
        participant,
        locked_nft: LockedNftSnapshot::new(participant_id, now, lock_duration_in_days),
    })
}

/// Extends the lock of an escrowed NFT by `lock_duration_in_days`, minting
/// weight for the extra days.
pub fn extend(
    global: &GlobalStateSnapshot,
    participant: &ParticipantStateSnapshot,
    locked_nft: &LockedNftSnapshot,
    schedule: &RewardSchedule,
    now: i64,
    lock_duration_in_days: u64,
) -> Result<StakeOutcome> {
    if lock_duration_in_days < MIN_LOCK_DURATION_DAYS {
        return Err(ErrorCode::LockDurationTooSmall);
    }
    if lock_duration_in_days > locked_nft.max_num_days_may_be_extended(now) {
        return Err(ErrorCode::MaxPossibleLockDurationExceeded);
    }

    let global = global.with_last_updated_at(now);
    let participant = settle(&global, participant, schedule, now);
    let (global, participant) = mint_venfts(&global, &participant, now, lock_duration_in_days)?;

    Ok(StakeOutcome {
        global,
        participant,
        locked_nft: locked_nft.extend_lock_duration(now, lock_duration_in_days),
    })
}

/// Releases an NFT whose lock has run out, only to the participant who
/// locked it. Weight already minted for it is
/// left in place; it has decayed to zero by the time the lock ends.
pub fn unstake(
    global: &GlobalStateSnapshot,
    participant: &ParticipantStateSnapshot,
    locked_nft: &LockedNftSnapshot,
    schedule: &RewardSchedule,
    now: i64,
) -> Result<UnstakeOutcome> {
    if !locked_nft.may_be_unlocked(participant.participant_id(), now) {
        return Err(ErrorCode::NotYetUnlockable);
    }

    let global = global.with_last_updated_at(now);
    let participant = settle(&global, participant, schedule, now);

    Ok(UnstakeOutcome {
        global: global.with_total_locked_count(global.total_locked_count().saturating_sub(1)),
        participant: participant.with_locked_count(participant.locked_count().saturating_sub(1)),
    })
}

/// Settles the participant and empties the carried reward.
pub fn claim(
    global: &GlobalStateSnapshot,
    participant: &ParticipantStateSnapshot,
    schedule: &RewardSchedule,
    now: i64,
) -> ClaimOutcome {
    let global = global.with_last_updated_at(now);
    let participant = settle(&global, participant, schedule, now);
    let tokens_claimed = participant.carried_reward();

    ClaimOutcome {
        global,
        participant: participant.with_claim(now),
        tokens_claimed,
    }
}
