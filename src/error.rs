use crate::store::StoreError;
use thiserror::Error;

/// Failures surfaced by the availability and booking operations.
///
/// Validation problems are rejected before any storage call; storage
/// failures bubble up from the [`SlotStore`](crate::store::SlotStore)
/// and are safe to retry (reconciliation is idempotent per hour).
#[derive(Debug, Error)]
pub enum Error {
    #[error("hour {hour} is outside the working hours {min}..={max}")]
    HourOutOfRange { hour: u32, min: u32, max: u32 },

    #[error("time {0:?} is not in HH:00 form")]
    InvalidTime(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Validation errors are the caller's fault and must never be
    /// retried automatically.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::HourOutOfRange { .. } | Error::InvalidTime(_))
    }
}
