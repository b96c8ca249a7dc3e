//! Reward accrual since a participant's last on-chain settlement.
//!
//! The ledger settles rewards day by day whenever a participant interacts
//! with the pool: for every elapsed day it credits
//! `schedule[day] * balance[day] / supply[day]` to the participant's carried
//! reward. Between interactions the carried reward goes stale, so the
//! dashboard replays the same rule locally over the days that have not been
//! settled yet.
//!
//! The replayed figure is an estimate, never a guaranteed payout:
//! - Other participants staking or extending after the snapshot was captured
//!   raise the supply a day's emission is divided by.
//! - The ledger floors each day's share to whole reward tokens, while the
//!   estimate keeps the fractional part, so for an unchanged supply the
//!   estimate is an upper bound of the settled amount.
//!
//! Refresh the snapshots and evaluate again after any stake, unstake, extend
//! or claim is observed to settle.

use log::trace;

use crate::{
    curve::DayIndexer,
    schedule::RewardSchedule,
    states::{GlobalStateSnapshot, ParticipantStateSnapshot},
    Fixed, SUBUNITS_PER_REWARD_TOKEN,
};

/// Where a participant's unsettled days sit in both coordinate spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettlementOffsets {
    /// Day of the global schedule the participant was last settled on.
    pub state_offset: u64,
    /// Whole days elapsed since that settlement.
    pub staker_offset: u64,
}

impl SettlementOffsets {
    pub fn new(
        global: &GlobalStateSnapshot,
        participant: &ParticipantStateSnapshot,
        now: i64,
    ) -> Self {
        Self {
            state_offset: DayIndexer::elapsed_days(
                global.deployed_at(),
                participant.last_updated_at(),
            )
            .day_offset,
            staker_offset: DayIndexer::elapsed_days(participant.last_updated_at(), now).day_offset,
        }
    }

    /// Global day matching day `i` of the participant's balance series.
    pub fn global_day(&self, i: u64) -> u64 {
        self.state_offset.saturating_add(i)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccrualAccumulator;

impl AccrualAccumulator {
    /// Share of day `i` (counted from the last settlement) owed to the
    /// participant. Days with no supply or past either horizon yield zero.
    pub fn daily_share(
        global: &GlobalStateSnapshot,
        participant: &ParticipantStateSnapshot,
        schedule: &RewardSchedule,
        offsets: &SettlementOffsets,
        i: u64,
    ) -> Fixed {
        let day = offsets.global_day(i);
        Fixed::mul_div(
            schedule.at(day),
            participant.balance_at(i),
            global.supply_at(day),
        )
    }

    /// Estimated reward claimable at `now`, in reward tokens: the carried
    /// reward plus every whole day elapsed since the last settlement.
    ///
    /// This is an estimate. See the module documentation for why it can
    /// differ from what a claim pays out.
    pub fn rewards_accumulated(
        global: &GlobalStateSnapshot,
        participant: &ParticipantStateSnapshot,
        schedule: &RewardSchedule,
        now: i64,
    ) -> Fixed {
        let offsets = SettlementOffsets::new(global, participant, now);
        let days = offsets
            .staker_offset
            .min(participant.balance_series().len() as u64);

        (0..days).fold(
            Fixed::from_u64(participant.carried_reward()),
            |accumulated, i| {
                let share = Self::daily_share(global, participant, schedule, &offsets, i);
                trace!(
                    "day {} (global day {}): share {}",
                    i,
                    offsets.global_day(i),
                    share
                );
                accumulated.saturating_add(share)
            },
        )
    }

    /// Whole reward tokens of the estimate; the fractional remainder is never
    /// paid out.
    pub fn claimable_tokens(
        global: &GlobalStateSnapshot,
        participant: &ParticipantStateSnapshot,
        schedule: &RewardSchedule,
        now: i64,
    ) -> u64 {
        Self::rewards_accumulated(global, participant, schedule, now).floor_u64()
    }

    /// Estimated claim size in reward-token base units, for sizing a claim
    /// instruction.
    pub fn claimable_base_units(
        global: &GlobalStateSnapshot,
        participant: &ParticipantStateSnapshot,
        schedule: &RewardSchedule,
        now: i64,
    ) -> u64 {
        Self::claimable_tokens(global, participant, schedule, now)
            .saturating_mul(SUBUNITS_PER_REWARD_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_DURATION_TO_EMIT_REWARDS_DAYS, SECONDS_PER_DAY};

    const DAY: i64 = SECONDS_PER_DAY as i64;

    fn schedule_of(first_days: &[u64]) -> RewardSchedule {
        let mut days = first_days.to_vec();
        days.resize(MAX_DURATION_TO_EMIT_REWARDS_DAYS as usize, 0);
        RewardSchedule::new(days).unwrap()
    }

    #[test]
    fn test_single_day_share() {
        let global = GlobalStateSnapshot::new(0, 0, 1, vec![1000, 2000]).unwrap();
        let participant =
            ParticipantStateSnapshot::new([0; 32], vec![100, 100], 1, 7, 0, 0).unwrap();
        let schedule = schedule_of(&[500, 500]);

        let accumulated =
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, DAY);
        assert_eq!(accumulated, Fixed::from_u64(7 + 50));

        let accumulated =
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, 2 * DAY);
        assert_eq!(accumulated, Fixed::from_u64(7 + 50 + 25));
    }

    #[test]
    fn test_no_whole_day_elapsed_returns_carried_reward() {
        let global = GlobalStateSnapshot::new(0, 0, 1, vec![1000]).unwrap();
        let participant =
            ParticipantStateSnapshot::new([0; 32], vec![100], 1, 12, 5, 0).unwrap();
        let schedule = schedule_of(&[500]);
        let almost_a_day = 5 + DAY - 1;
        assert_eq!(
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, almost_a_day),
            Fixed::from_u64(12)
        );
        // clock behind the settlement
        assert_eq!(
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, 0),
            Fixed::from_u64(12)
        );
    }

    #[test]
    fn test_offsets_map_into_global_schedule() {
        let mut supply = vec![0; 12];
        supply[10] = 1000;
        let mut rewards = vec![0; 12];
        rewards[10] = 300;
        let global = GlobalStateSnapshot::new(0, 0, 1, supply).unwrap();
        let participant =
            ParticipantStateSnapshot::new([0; 32], vec![500], 1, 0, 10 * DAY + 3600, 0).unwrap();
        let schedule = schedule_of(&rewards);

        let now = 11 * DAY + 3600;
        let offsets = SettlementOffsets::new(&global, &participant, now);
        assert_eq!(
            offsets,
            SettlementOffsets {
                state_offset: 10,
                staker_offset: 1
            }
        );
        assert_eq!(
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, now),
            Fixed::from_u64(150)
        );
    }

    #[test]
    fn test_settlement_before_deployment_starts_at_day_zero() {
        let global =
            GlobalStateSnapshot::new(10 * DAY, 10 * DAY, 1, vec![1000, 2000, 4000]).unwrap();
        let participant =
            ParticipantStateSnapshot::new([0; 32], vec![100, 100, 100], 1, 0, 3 * DAY, 0).unwrap();
        let schedule = schedule_of(&[500, 400, 800]);

        let offsets = SettlementOffsets::new(&global, &participant, 5 * DAY);
        assert_eq!(
            offsets,
            SettlementOffsets {
                state_offset: 0,
                staker_offset: 2
            }
        );
        assert_eq!(offsets.global_day(1), 1);
        // 500 * 100 / 1000 + 400 * 100 / 2000
        assert_eq!(
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, 5 * DAY),
            Fixed::from_u64(70)
        );
    }

    #[test]
    fn test_fractional_shares_and_whole_token_claims() {
        let global = GlobalStateSnapshot::new(0, 0, 1, vec![3, 3]).unwrap();
        let participant =
            ParticipantStateSnapshot::new([0; 32], vec![1, 1], 1, 0, 0, 0).unwrap();
        let schedule = schedule_of(&[2, 2]);

        let accumulated =
            AccrualAccumulator::rewards_accumulated(&global, &participant, &schedule, 2 * DAY);
        assert_eq!(accumulated.to_string(), "1.333333333");
        assert_eq!(
            AccrualAccumulator::claimable_tokens(&global, &participant, &schedule, 2 * DAY),
            1
        );
        assert_eq!(
            AccrualAccumulator::claimable_base_units(&global, &participant, &schedule, 2 * DAY),
            SUBUNITS_PER_REWARD_TOKEN
        );
    }
}
