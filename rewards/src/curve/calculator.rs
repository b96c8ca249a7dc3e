//! Dashboard evaluation for one captured snapshot pair and one clock reading.

use serde::Serialize;

use crate::{
    curve::{AccrualAccumulator, DayIndexer, Interpolator, TodayEstimator},
    schedule::RewardSchedule,
    states::{Estimate, GlobalStateSnapshot, Observation, ParticipantStateSnapshot},
};

/// Every figure the dashboard shows, evaluated at a single instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardReport {
    /// The clock reading every figure below was computed with.
    pub evaluated_at: i64,
    pub days_since_deployed: Estimate,
    pub days_since_participant_updated: Estimate,
    /// veNFT owned by the participant right now.
    pub estimated_participant_balance: Estimate,
    /// veNFT in circulation right now.
    pub estimated_total_supply: Estimate,
    /// Estimated reward tokens claimable, fractional part included.
    pub rewards_claimable: Estimate,
    /// Base units a claim is expected to transfer, `None` when there is no
    /// estimate to size it from.
    pub claimable_base_units: Option<u64>,
    pub todays_total_rewards: Estimate,
    pub todays_participant_rewards: Estimate,
}

/// Evaluates the dashboard against a reward schedule.
///
/// Holds no state besides the schedule reference; the caller decides when to
/// capture new snapshots and sample the clock, and the same snapshot and clock
/// always produce the same report.
#[derive(Clone, Copy, Debug)]
pub struct EscrowCalculator<'a> {
    schedule: &'a RewardSchedule,
}

impl<'a> EscrowCalculator<'a> {
    pub fn new(schedule: &'a RewardSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &'a RewardSchedule {
        self.schedule
    }

    pub fn evaluate(
        &self,
        global: Observation<&GlobalStateSnapshot>,
        participant: Observation<&ParticipantStateSnapshot>,
        now: i64,
    ) -> DashboardReport {
        let schedule = self.schedule;

        let rewards_claimable = Estimate::from_pair(global, participant, |global, participant| {
            AccrualAccumulator::rewards_accumulated(global, participant, schedule, now)
        });
        let claimable_base_units = match (global, participant) {
            (Observation::Available(global), Observation::Available(participant)) => Some(
                AccrualAccumulator::claimable_base_units(global, participant, schedule, now),
            ),
            _ => None,
        };

        DashboardReport {
            evaluated_at: now,
            days_since_deployed: Estimate::from_single(global, |global| {
                DayIndexer::elapsed_days(global.deployed_at(), now).as_fixed()
            }),
            days_since_participant_updated: Estimate::from_single(participant, |participant| {
                DayIndexer::elapsed_days(participant.last_updated_at(), now).as_fixed()
            }),
            estimated_participant_balance: Estimate::from_single(participant, |participant| {
                Interpolator::estimated_participant_balance(participant, now)
            }),
            estimated_total_supply: Estimate::from_single(global, |global| {
                Interpolator::estimated_total_supply(global, now)
            }),
            rewards_claimable,
            claimable_base_units,
            todays_total_rewards: Estimate::from_single(global, |global| {
                TodayEstimator::todays_total_reward(global, schedule, now)
            }),
            todays_participant_rewards: Estimate::from_pair(
                global,
                participant,
                |global, participant| {
                    TodayEstimator::todays_participant_reward(global, participant, schedule, now)
                },
            ),
        }
    }
}
