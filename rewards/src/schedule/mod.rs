//! Per-day reward emission schedule.

mod table;
pub use table::REWARD_SCHEDULE_IN_DAYS;

use crate::{error::ErrorCode, Result, MAX_DURATION_TO_EMIT_REWARDS_DAYS};

/// Reward tokens emitted per day, indexed by day offset since deployment.
///
/// Always covers at least the 4-year emission window; days past the end emit
/// nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardSchedule {
    daily_emissions: Vec<u64>,
}

impl Default for RewardSchedule {
    /// The schedule the pool was deployed with.
    fn default() -> Self {
        Self {
            daily_emissions: REWARD_SCHEDULE_IN_DAYS.to_vec(),
        }
    }
}

impl RewardSchedule {
    pub fn new(daily_emissions: Vec<u64>) -> Result<Self> {
        let min = MAX_DURATION_TO_EMIT_REWARDS_DAYS as usize;
        if daily_emissions.len() < min {
            return Err(ErrorCode::ScheduleTooShort {
                len: daily_emissions.len(),
                min,
            });
        }
        Ok(Self { daily_emissions })
    }

    /// Parses a JSON array of per-day emissions, the format the dashboard
    /// ships its schedule in.
    pub fn from_json(json: &str) -> Result<Self> {
        let daily_emissions: Vec<u64> = serde_json::from_str(json)
            .map_err(|err| ErrorCode::InvalidSchedule(err.to_string()))?;
        Self::new(daily_emissions)
    }

    /// Emission for `day`, or 0 once the schedule has run out.
    pub fn at(&self, day: u64) -> u64 {
        usize::try_from(day)
            .ok()
            .and_then(|day| self.daily_emissions.get(day))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.daily_emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily_emissions.is_empty()
    }

    pub fn total(&self) -> u128 {
        self.daily_emissions.iter().map(|&day| day as u128).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_schedule_sane() {
        let schedule = RewardSchedule::default();
        assert_eq!(schedule.len(), MAX_DURATION_TO_EMIT_REWARDS_DAYS as usize);
        assert_eq!(schedule.total(), 700_000_000);
        assert!(REWARD_SCHEDULE_IN_DAYS.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_days_past_the_end_emit_nothing() {
        let schedule = RewardSchedule::default();
        assert_eq!(schedule.at(0), 958575);
        assert_eq!(schedule.at(MAX_DURATION_TO_EMIT_REWARDS_DAYS), 0);
        assert_eq!(schedule.at(u64::MAX), 0);
    }

    #[test]
    fn test_short_schedule_is_rejected() {
        assert_eq!(
            RewardSchedule::new(vec![1, 2, 3]).unwrap_err(),
            ErrorCode::ScheduleTooShort {
                len: 3,
                min: MAX_DURATION_TO_EMIT_REWARDS_DAYS as usize
            }
        );
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(&vec![5u64; 1500]).unwrap();
        let schedule = RewardSchedule::from_json(&json).unwrap();
        assert_eq!(schedule.len(), 1500);
        assert_eq!(schedule.at(1499), 5);

        assert!(matches!(
            RewardSchedule::from_json("[1, -2]"),
            Err(ErrorCode::InvalidSchedule(_))
        ));
    }
}
