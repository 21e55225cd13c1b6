//! Per-cell search state.

use nav_core::GridCell;

/// One cell's mutable state during an A* episode.
///
/// Nodes live in the `GridStore` arena and point at each other by arena
/// index (`parent`), never by reference — a node can be the expansion
/// "current" and a rewritten "neighbor" in the same loop iteration without
/// borrow conflicts.
///
/// `g_cost` and `h_cost` are only meaningful while a search is running, and
/// `parent` is only valid once the node has been taken off the open set.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Scene-local coordinate of this node.
    pub cell: GridCell,

    /// Accumulated cost from the start cell (10/14 octile units).
    pub g_cost: u32,

    /// Heuristic estimate of the remaining cost to the target.
    pub h_cost: u32,

    /// `true` blocks traversal entirely.
    pub is_obstacle: bool,

    /// Additive cost applied when a search enters this cell.
    pub movement_penalty: u32,

    /// Arena index of the node this one was reached from, or `None` for the
    /// start node.  Reset by `GridStore::reset_search_state`.
    pub parent: Option<u32>,

    /// Open-set membership flag (the heap holds lazy duplicates, so the heap
    /// itself cannot answer "is this node open?").
    pub in_open: bool,

    /// `true` once the node's cost is finalized.
    pub closed: bool,
}

impl SearchNode {
    pub fn new(cell: GridCell) -> Self {
        Self {
            cell,
            g_cost: 0,
            h_cost: 0,
            is_obstacle: false,
            movement_penalty: 0,
            parent: None,
            in_open: false,
            closed: false,
        }
    }

    /// The priority A* expands by.  Derived, never stored.
    #[inline]
    pub fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}
