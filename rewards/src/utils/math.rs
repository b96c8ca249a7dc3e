//! Fixed-point arithmetic backing every balance and reward estimate.

use serde::{Serialize, Serializer};
use std::fmt;
use uint::construct_uint;

use crate::REWARD_TOKEN_DECIMALS;

construct_uint! {
    pub struct U256(4);
}

/// Number of decimal places carried by [`Fixed`].
pub const FIXED_DECIMALS: usize = 18;

fn one() -> U256 {
    U256::exp10(FIXED_DECIMALS)
}

/// Unsigned decimal with 18 fractional digits, stored as a scaled `U256`.
///
/// Every operation saturates instead of overflowing, and division by zero
/// yields zero: an empty day or an unobserved sample contributes nothing.
/// All products of two `u64` operands fit without loss, so per-day shares are
/// exact up to the last fractional digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(U256);

impl Fixed {
    pub fn zero() -> Self {
        Fixed(U256::zero())
    }

    pub fn from_u64(value: u64) -> Self {
        Fixed(U256::from(value).saturating_mul(one()))
    }

    /// `numerator / denominator`, or zero when the denominator is zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        Self::mul_div(numerator, 1, denominator)
    }

    /// `a * b / c` without intermediate rounding, or zero when `c` is zero.
    pub fn mul_div(a: u64, b: u64, c: u64) -> Self {
        if c == 0 {
            return Self::zero();
        }
        let numerator = U256::from(a)
            .saturating_mul(U256::from(b))
            .saturating_mul(one());
        Fixed(numerator / U256::from(c))
    }

    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn saturating_add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }

    /// Clamps at zero.
    pub fn saturating_sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }

    /// Divides by an integer, yielding zero for a zero divisor.
    pub fn div_u64(self, divisor: u64) -> Fixed {
        match self.0.checked_div(U256::from(divisor)) {
            Some(value) => Fixed(value),
            None => Self::zero(),
        }
    }

    /// Integer part, saturating at `u64::MAX`.
    pub fn floor_u64(&self) -> u64 {
        let whole = self.0 / one();
        if whole > U256::from(u64::MAX) {
            u64::MAX
        } else {
            whole.low_u64()
        }
    }

    /// Renders the value with `decimals` fractional digits, rounding half up.
    pub fn to_decimal_string(&self, decimals: usize) -> String {
        let decimals = decimals.min(FIXED_DECIMALS);
        let unit = U256::exp10(FIXED_DECIMALS - decimals);
        let rounded = self.0.saturating_add(unit / 2) / unit;
        if decimals == 0 {
            return rounded.to_string();
        }
        let (whole, fraction) = rounded.div_mod(U256::exp10(decimals));
        let fraction = fraction.to_string();
        format!("{}.{:0>width$}", whole, fraction, width = decimals)
    }
}

impl From<u64> for Fixed {
    fn from(value: u64) -> Self {
        Fixed::from_u64(value)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string(REWARD_TOKEN_DECIMALS as usize))
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
