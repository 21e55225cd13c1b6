//! Path-finding trait and default A* implementation.
//!
//! # Pluggability
//!
//! The engine calls path search via the [`PathFinder`] trait, so
//! applications can swap in custom implementations (jump-point search,
//! hierarchical abstraction) without touching the framework core.  The
//! default [`AStarPathFinder`] is sufficient for scene-sized grids.
//!
//! # Comparator contract
//!
//! Node selection is by minimum `f_cost`, ties broken by minimum `h_cost`,
//! then by arena index.  The first two keys are the algorithm's contract;
//! the index key only pins down full determinism when both costs tie.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nav_core::GridCell;
use nav_grid::GridStore;

use crate::cost::{octile, step_cost};
use crate::error::{PathError, PathResult};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search algorithm.
///
/// `grid` is exclusively borrowed because search state (costs, parents, set
/// flags) lives inside the nodes themselves; one store serves one search at
/// a time.
pub trait PathFinder {
    /// Compute a path between two **scene-local** cells.
    ///
    /// Returns the cells in target→start order (see crate docs).
    /// `start == target` is an immediate one-cell success.
    /// With `observe_penalties`, entering a cell also pays its
    /// `movement_penalty`.
    fn find_path(
        &self,
        grid: &mut GridStore,
        start: GridCell,
        target: GridCell,
        observe_penalties: bool,
    ) -> PathResult<Vec<GridCell>>;
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// Standard A* with the 10/14 octile metric over all 8 neighbors.
///
/// The open set is a binary heap with lazy deletion: improving an open
/// node's cost pushes a fresh heap entry, and outdated entries are skipped
/// on pop via the node's `closed` flag.  Open-set membership itself is a
/// flag on the node, which keeps the update rule exact: a neighbor already
/// open is only rewritten when the new route is strictly cheaper.
pub struct AStarPathFinder;

impl PathFinder for AStarPathFinder {
    fn find_path(
        &self,
        grid: &mut GridStore,
        start: GridCell,
        target: GridCell,
        observe_penalties: bool,
    ) -> PathResult<Vec<GridCell>> {
        astar(grid, start, target, observe_penalties)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(
    grid: &mut GridStore,
    start: GridCell,
    target: GridCell,
    observe_penalties: bool,
) -> PathResult<Vec<GridCell>> {
    // Off-grid requests fail fast, before any node is touched.
    let start_idx = grid
        .index_of(start)
        .ok_or(PathError::OutOfBounds(start))?;
    let target_idx = grid
        .index_of(target)
        .ok_or(PathError::OutOfBounds(target))?;

    // Min-heap keyed (f_cost, h_cost, index).  Reverse makes BinaryHeap
    // (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, u32, u32)>> = BinaryHeap::new();

    {
        let s = grid.node_mut(start_idx);
        s.g_cost = 0;
        s.h_cost = octile(start, target);
        s.in_open = true;
        heap.push(Reverse((s.f_cost(), s.h_cost, start_idx)));
    }

    while let Some(Reverse((_, _, idx))) = heap.pop() {
        // Skip stale heap entries left behind by cost improvements.
        if grid.node(idx).closed {
            continue;
        }

        {
            let n = grid.node_mut(idx);
            n.in_open = false;
            n.closed = true;
        }

        if idx == target_idx {
            return Ok(reconstruct(grid, target_idx));
        }

        let current = grid.node(idx).cell;
        let current_g = grid.node(idx).g_cost;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(neighbor_idx) = grid.index_of(current.offset(dx, dy)) else {
                    continue;
                };

                let neighbor = grid.node(neighbor_idx);
                if neighbor.is_obstacle || neighbor.closed {
                    continue;
                }

                let mut new_g = current_g + step_cost(dx, dy);
                if observe_penalties {
                    new_g += neighbor.movement_penalty;
                }

                // Already open and not strictly cheaper: the existing route
                // to it is at least as good.
                if neighbor.in_open && new_g >= neighbor.g_cost {
                    continue;
                }

                let h = octile(neighbor.cell, target);
                let neighbor = grid.node_mut(neighbor_idx);
                neighbor.g_cost = new_g;
                neighbor.h_cost = h;
                neighbor.parent = Some(idx);
                neighbor.in_open = true;
                heap.push(Reverse((new_g + h, h, neighbor_idx)));
            }
        }
    }

    // Open set exhausted: the target is unreachable from the start.
    Err(PathError::NoPath { start, target })
}

/// Follow parent indices from the target back to the start.
///
/// The start node has no parent, so the walk terminates there; the returned
/// cells are in target→start order.
fn reconstruct(grid: &GridStore, target_idx: u32) -> Vec<GridCell> {
    let mut cells = Vec::new();
    let mut cur = target_idx;
    loop {
        let node = grid.node(cur);
        cells.push(node.cell);
        match node.parent {
            Some(p) => cur = p,
            None => break,
        }
    }
    cells
}
