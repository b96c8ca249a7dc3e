//! Timestamp to day-offset conversion.

use log::debug;

use crate::{Fixed, SECONDS_PER_DAY};

/// Progress through the current day, held exactly as whole seconds.
///
/// Accepts `0..=SECONDS_PER_DAY` so that both interpolation boundaries can be
/// expressed; [`DayIndexer`] itself only produces values below one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayFraction {
    seconds: u64,
}

impl DayFraction {
    pub const ZERO: DayFraction = DayFraction { seconds: 0 };
    pub const ONE: DayFraction = DayFraction {
        seconds: SECONDS_PER_DAY,
    };

    /// Clamps to one full day.
    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            seconds: seconds.min(SECONDS_PER_DAY),
        }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn as_fixed(&self) -> Fixed {
        Fixed::from_ratio(self.seconds, SECONDS_PER_DAY)
    }
}

/// Whole days plus the progress into the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElapsedDays {
    pub day_offset: u64,
    pub fraction: DayFraction,
}

impl ElapsedDays {
    /// Elapsed time in fractional days, e.g. for "3.5 day(s)".
    pub fn as_fixed(&self) -> Fixed {
        Fixed::from_u64(self.day_offset).saturating_add(self.fraction.as_fixed())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayIndexer;

impl DayIndexer {
    /// Days elapsed from `from_ts` to `to_ts`. A `to_ts` at or before
    /// `from_ts` (a stale or skewed clock) yields zero elapsed time.
    pub fn elapsed_days(from_ts: i64, to_ts: i64) -> ElapsedDays {
        if to_ts <= from_ts {
            if to_ts < from_ts {
                debug!("clock {} behind anchor {}, clamped", to_ts, from_ts);
            }
            return ElapsedDays::default();
        }
        let elapsed = to_ts.abs_diff(from_ts);
        ElapsedDays {
            day_offset: elapsed / SECONDS_PER_DAY,
            fraction: DayFraction::from_seconds(elapsed % SECONDS_PER_DAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_DURATION_TO_EMIT_REWARDS_DAYS;
    use quickcheck::quickcheck;

    #[test]
    fn test_days_between_timestamps() {
        for days in 1..MAX_DURATION_TO_EMIT_REWARDS_DAYS as i64 {
            let elapsed = DayIndexer::elapsed_days(0, days * SECONDS_PER_DAY as i64);
            assert_eq!(elapsed.day_offset, days as u64);
            assert_eq!(elapsed.fraction, DayFraction::ZERO);
        }
    }

    #[test]
    fn test_fraction_is_remainder_of_day() {
        let elapsed = DayIndexer::elapsed_days(100, 100 + 2 * SECONDS_PER_DAY as i64 + 43_200);
        assert_eq!(elapsed.day_offset, 2);
        assert_eq!(elapsed.fraction.seconds(), 43_200);
        assert_eq!(elapsed.as_fixed().to_string(), "2.500000000");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let elapsed = DayIndexer::elapsed_days(i64::MIN, i64::MAX);
        assert_eq!(elapsed.day_offset, u64::MAX / SECONDS_PER_DAY);
        assert_eq!(
            DayIndexer::elapsed_days(i64::MAX, i64::MIN),
            ElapsedDays::default()
        );
    }

    #[test]
    fn test_fraction_clamps_to_one_day() {
        assert_eq!(
            DayFraction::from_seconds(10 * SECONDS_PER_DAY),
            DayFraction::ONE
        );
        assert_eq!(DayFraction::ONE.as_fixed(), Fixed::from_u64(1));
    }

    quickcheck! {
        fn prop_backwards_clock_is_zero(start: i64, end: i64) -> bool {
            if end <= start {
                DayIndexer::elapsed_days(start, end) == ElapsedDays::default()
            } else {
                DayIndexer::elapsed_days(start, end).fraction.seconds() < SECONDS_PER_DAY
            }
        }

        fn prop_day_offset_is_monotonic(start: i64, end: i64, step: u32) -> bool {
            let later = end.saturating_add(step as i64);
            DayIndexer::elapsed_days(start, end) <= DayIndexer::elapsed_days(start, later)
        }
    }
}
