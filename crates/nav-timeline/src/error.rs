use thiserror::Error;

/// Timeline construction failures.  `TooShort` is the "agent is already
/// there (or one tile away)" case — callers treat it as nothing to do, not
/// as a fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("path too short to animate ({remaining} steps after trimming)")]
    TooShort { remaining: usize },
}

pub type TimelineResult<T> = Result<T, TimelineError>;
