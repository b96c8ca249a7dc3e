//! Point estimates of veNFT weight between two daily samples.

use crate::{
    curve::{DayFraction, DayIndexer},
    states::{GlobalStateSnapshot, ParticipantStateSnapshot},
    Fixed, SECONDS_PER_DAY, VENFT_DECAY_DAYS, VENFT_PER_DAY,
};

/// Sample of a daily series, with days outside the series reading as 0.
pub fn sample(series: &[u64], day: u64) -> u64 {
    usize::try_from(day)
        .ok()
        .and_then(|day| series.get(day))
        .copied()
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interpolator;

impl Interpolator {
    /// Linear interpolation between `series[day_offset]` and
    /// `series[day_offset + 1]`, weighted by `fraction`.
    ///
    /// Works for rising and falling neighbours alike and never reads past the
    /// end of `series`.
    pub fn interpolate(series: &[u64], day_offset: u64, fraction: DayFraction) -> Fixed {
        let current = sample(series, day_offset);
        let next = sample(series, day_offset.saturating_add(1));
        let base = Fixed::from_u64(current);
        if next >= current {
            base.saturating_add(Fixed::mul_div(
                next - current,
                fraction.seconds(),
                SECONDS_PER_DAY,
            ))
        } else {
            base.saturating_sub(Fixed::mul_div(
                current - next,
                fraction.seconds(),
                SECONDS_PER_DAY,
            ))
        }
    }

    /// Converts raw weight into veNFT: one locked NFT mints `VENFT_PER_DAY`
    /// per remaining lock day, decaying linearly over half a year.
    ///
    /// Both series are normalised with the same half-year constant even
    /// though the supply series spans four years.
    pub fn normalized(raw: Fixed) -> Fixed {
        raw.div_u64(VENFT_PER_DAY * VENFT_DECAY_DAYS)
    }

    /// veNFT currently owned by the participant.
    pub fn estimated_participant_balance(
        participant: &ParticipantStateSnapshot,
        now: i64,
    ) -> Fixed {
        let elapsed = DayIndexer::elapsed_days(participant.last_updated_at(), now);
        Self::normalized(Self::interpolate(
            participant.balance_series(),
            elapsed.day_offset,
            elapsed.fraction,
        ))
    }

    /// veNFT currently in circulation across all participants.
    pub fn estimated_total_supply(global: &GlobalStateSnapshot, now: i64) -> Fixed {
        let elapsed = DayIndexer::elapsed_days(global.deployed_at(), now);
        Self::normalized(Self::interpolate(
            global.supply_series(),
            elapsed.day_offset,
            elapsed.fraction,
        ))
    }
}
