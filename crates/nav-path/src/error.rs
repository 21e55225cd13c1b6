use thiserror::Error;

use nav_core::GridCell;

/// Path search failures.  All are routine — an enclosed target or an
/// off-grid request is expected traffic, not a bug — so callers usually
/// collapse them to "no path" and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(GridCell),

    #[error("no path from {start} to {target}")]
    NoPath { start: GridCell, target: GridCell },
}

pub type PathResult<T> = Result<T, PathError>;
