//! The integer-scaled octile distance metric.
//!
//! Orthogonal steps cost 10, diagonal steps 14 (≈ 10·√2).  Scaling by ten
//! keeps every cost an integer, so comparisons are exact and the heuristic
//! can equal the true optimal cost on an open grid.

use nav_core::GridCell;

/// Cost of one orthogonal step.
pub const ORTHOGONAL_COST: u32 = 10;

/// Cost of one diagonal step (orthogonal × √2, rounded).
pub const DIAGONAL_COST: u32 = 14;

/// Octile distance between two cells: diagonal moves cover the shorter axis,
/// orthogonal moves cover the remainder.
///
/// This is both the heuristic and the per-step cost (for unit offsets it
/// reduces to 10 or 14), so the heuristic is exact on an obstacle-free grid.
#[inline]
pub fn octile(a: GridCell, b: GridCell) -> u32 {
    let dx = (a.x - b.x).unsigned_abs();
    let dy = (a.y - b.y).unsigned_abs();
    if dx > dy {
        DIAGONAL_COST * dy + ORTHOGONAL_COST * (dx - dy)
    } else {
        DIAGONAL_COST * dx + ORTHOGONAL_COST * (dy - dx)
    }
}

/// Cost of a single neighbor step `(dx, dy)` with `dx, dy ∈ {-1, 0, 1}`.
#[inline]
pub fn step_cost(dx: i32, dy: i32) -> u32 {
    if dx != 0 && dy != 0 {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}
