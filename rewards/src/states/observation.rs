use serde::Serialize;

use crate::Fixed;

/// What the caller managed to observe for one ledger account.
///
/// `NotParticipating` and `Unavailable` are kept apart from any numeric value:
/// a wallet that never staked owns nothing yet, which is not the same as
/// owning zero after a computation, and an account that failed to decode says
/// nothing about its balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation<T> {
    /// The account could not be fetched or decoded.
    Unavailable,
    /// The account does not exist (the wallet has never staked).
    NotParticipating,
    Available(T),
}

impl<T> Observation<T> {
    pub fn by_ref(&self) -> Observation<&T> {
        match self {
            Observation::Unavailable => Observation::Unavailable,
            Observation::NotParticipating => Observation::NotParticipating,
            Observation::Available(value) => Observation::Available(value),
        }
    }

    pub fn available(self) -> Option<T> {
        match self {
            Observation::Available(value) => Some(value),
            _ => None,
        }
    }

    /// Maps an account lookup: a missing account means the wallet never
    /// participated.
    pub fn from_lookup(value: Option<T>) -> Self {
        value.map_or(Observation::NotParticipating, Observation::Available)
    }
}

/// A displayable figure derived from one or more observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    Unavailable,
    NotParticipating,
    Value(Fixed),
}

impl Estimate {
    pub fn value(&self) -> Option<Fixed> {
        match self {
            Estimate::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// Combines two observations, the worse state winning: any unavailable
    /// input makes the figure unavailable.
    pub(crate) fn from_pair<A, B>(
        first: Observation<A>,
        second: Observation<B>,
        compute: impl FnOnce(A, B) -> Fixed,
    ) -> Self {
        match (first, second) {
            (Observation::Available(a), Observation::Available(b)) => {
                Estimate::Value(compute(a, b))
            }
            (Observation::Unavailable, _) | (_, Observation::Unavailable) => {
                Estimate::Unavailable
            }
            _ => Estimate::NotParticipating,
        }
    }

    pub(crate) fn from_single<A>(
        observation: Observation<A>,
        compute: impl FnOnce(A) -> Fixed,
    ) -> Self {
        match observation {
            Observation::Available(a) => Estimate::Value(compute(a)),
            Observation::Unavailable => Estimate::Unavailable,
            Observation::NotParticipating => Estimate::NotParticipating,
        }
    }
}
