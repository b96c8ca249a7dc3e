use crate::{
    curve::{DayIndexer, SettlementOffsets},
    schedule::RewardSchedule,
    states::{GlobalStateSnapshot, ParticipantStateSnapshot},
    Fixed,
};

/// Rewards emitted on the current day. Point values only; nothing here feeds
/// back into the carried reward, so they can be recomputed on every refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodayEstimator;

impl TodayEstimator {
    /// Total emission of the day `now` falls on.
    pub fn todays_total_reward(
        global: &GlobalStateSnapshot,
        schedule: &RewardSchedule,
        now: i64,
    ) -> Fixed {
        let today = DayIndexer::elapsed_days(global.deployed_at(), now).day_offset;
        Fixed::from_u64(schedule.at(today))
    }

    /// The participant's share of today's emission, given the balance they
    /// hold today and today's recorded supply.
    pub fn todays_participant_reward(
        global: &GlobalStateSnapshot,
        participant: &ParticipantStateSnapshot,
        schedule: &RewardSchedule,
        now: i64,
    ) -> Fixed {
        let offsets = SettlementOffsets::new(global, participant, now);
        let today = offsets.global_day(offsets.staker_offset);
        if today >= schedule.len() as u64
            || today >= global.supply_series().len() as u64
            || offsets.staker_offset >= participant.balance_series().len() as u64
        {
            return Fixed::zero();
        }
        Fixed::mul_div(
            schedule.at(today),
            participant.balance_at(offsets.staker_offset),
            global.supply_at(today),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        states::{BALANCE_SERIES_DAYS, SUPPLY_HORIZON_DAYS},
        SECONDS_PER_DAY,
    };

    const DAY: i64 = SECONDS_PER_DAY as i64;

    #[test]
    fn test_todays_total_reward_follows_schedule() {
        let schedule = RewardSchedule::default();
        let global = GlobalStateSnapshot::deployed(1_000);
        assert_eq!(
            TodayEstimator::todays_total_reward(&global, &schedule, 1_000 + 3 * DAY + 5),
            Fixed::from_u64(schedule.at(3))
        );
        assert_eq!(
            TodayEstimator::todays_total_reward(&global, &schedule, 0),
            Fixed::from_u64(schedule.at(0))
        );
        assert_eq!(
            TodayEstimator::todays_total_reward(&global, &schedule, 1_000 + 5000 * DAY),
            Fixed::zero()
        );
    }

    #[test]
    fn test_todays_participant_reward() {
        let schedule = RewardSchedule::default();
        let global = GlobalStateSnapshot::new(0, 0, 2, vec![4_000, 4_000, 4_000]).unwrap();
        let participant =
            ParticipantStateSnapshot::new([0; 32], vec![1_000, 1_000, 0], 1, 0, DAY, 0).unwrap();

        assert_eq!(
            TodayEstimator::todays_participant_reward(&global, &participant, &schedule, DAY + 10),
            Fixed::mul_div(schedule.at(1), 1_000, 4_000)
        );
        assert_eq!(
            TodayEstimator::todays_participant_reward(&global, &participant, &schedule, 3 * DAY),
            Fixed::zero()
        );
    }

    #[test]
    fn test_todays_participant_reward_past_horizons() {
        let schedule = RewardSchedule::default();
        let global = GlobalStateSnapshot::new(0, 0, 1, vec![1; SUPPLY_HORIZON_DAYS]).unwrap();
        let balance = vec![1; BALANCE_SERIES_DAYS];
        let participant = ParticipantStateSnapshot::new([0; 32], balance, 1, 0, 0, 0).unwrap();
        let past_balance = BALANCE_SERIES_DAYS as i64 * DAY;
        assert_eq!(
            TodayEstimator::todays_participant_reward(
                &global,
                &participant,
                &schedule,
                past_balance,
            ),
            Fixed::zero()
        );

        let late = ParticipantStateSnapshot::new(
            [0; 32],
            vec![1; BALANCE_SERIES_DAYS],
            1,
            0,
            (SUPPLY_HORIZON_DAYS as i64 - 1) * DAY,
            0,
        )
        .unwrap();
        let past_supply = SUPPLY_HORIZON_DAYS as i64 * DAY;
        assert_eq!(
            TodayEstimator::todays_participant_reward(&global, &late, &schedule, past_supply),
            Fixed::zero()
        );
    }
}
