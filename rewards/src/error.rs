use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrorCode>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("Series holds {len} days but its horizon is {max} days")]
    SeriesTooLong { len: usize, max: usize },

    #[error("Reward schedule covers {len} days but at least {min} are required")]
    ScheduleTooShort { len: usize, min: usize },

    #[error("Reward schedule could not be parsed: {0}")]
    InvalidSchedule(String),

    #[error("Staker ID mismatches user ID")]
    StakerIdMismatch,

    #[error("Lock duration specified by user is too small")]
    LockDurationTooSmall,

    #[error("Lock duration specified by user exceeds max possible lock duration")]
    MaxPossibleLockDurationExceeded,

    #[error("The period which the asset has been specified to be lock for has not yet elapsed")]
    NotYetUnlockable,
}
