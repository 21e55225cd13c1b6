//! The `GridStore` node arena.

use nav_core::{GridCell, SceneId};

use crate::node::SearchNode;
use crate::props::GridProperties;

// ── TerrainPenalties ──────────────────────────────────────────────────────────

/// Additive entry costs by terrain classification.
///
/// Defaults follow the usual convention of making worn paths attractive:
/// walking off-path costs extra, so routes hug roads when one exists.
#[derive(Copy, Clone, Debug)]
pub struct TerrainPenalties {
    /// Penalty for cells classified as "path" terrain.
    pub path_penalty: u32,
    /// Penalty for every other walkable cell.
    pub default_penalty: u32,
}

impl Default for TerrainPenalties {
    fn default() -> Self {
        Self { path_penalty: 0, default_penalty: 5 }
    }
}

// ── GridStore ─────────────────────────────────────────────────────────────────

/// A dense `width × height` arena of [`SearchNode`]s for one scene.
///
/// Row-major: node `(x, y)` lives at index `y * width + x`.  Coordinates are
/// scene-local; `origin` maps them back to world space.
///
/// The store is built fresh per path request and discarded afterwards, so
/// obstacle and penalty state can never go stale between requests.
pub struct GridStore {
    nodes: Vec<SearchNode>,
    width: u32,
    height: u32,
    /// World coordinate of local `(0, 0)`.
    pub origin: GridCell,
}

impl GridStore {
    /// Allocate `width × height` nodes, each knowing its own local cell,
    /// with zero costs and no obstacles.
    pub fn new(width: u32, height: u32, origin: GridCell) -> Self {
        let mut nodes = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                nodes.push(SearchNode::new(GridCell::new(x as i32, y as i32)));
            }
        }
        Self { nodes, width, height, origin }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if the local cell lies inside `[0,width) × [0,height)`.
    #[inline]
    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height
    }

    /// Arena index of a local cell, or `None` when out of bounds.
    ///
    /// Out-of-bounds lookups are routine during neighbor expansion at the
    /// grid edge, so this is an `Option`, never a panic.
    #[inline]
    pub fn index_of(&self, cell: GridCell) -> Option<u32> {
        if self.in_bounds(cell) {
            Some(cell.y as u32 * self.width + cell.x as u32)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, cell: GridCell) -> Option<&SearchNode> {
        self.index_of(cell).map(|i| &self.nodes[i as usize])
    }

    #[inline]
    pub fn get_mut(&mut self, cell: GridCell) -> Option<&mut SearchNode> {
        self.index_of(cell)
            .map(|i| &mut self.nodes[i as usize])
    }

    /// Direct arena access for callers that already hold an index.
    #[inline]
    pub fn node(&self, index: u32) -> &SearchNode {
        &self.nodes[index as usize]
    }

    #[inline]
    pub fn node_mut(&mut self, index: u32) -> &mut SearchNode {
        &mut self.nodes[index as usize]
    }

    /// Snapshot obstacle and penalty state from the application's property
    /// source.  One O(width × height) pass; flag reads are keyed by world
    /// coordinate (`local + origin`).
    pub fn populate<P: GridProperties>(
        &mut self,
        scene: SceneId,
        props: &P,
        penalties: TerrainPenalties,
    ) {
        let origin = self.origin;
        for node in &mut self.nodes {
            let flags = props.cell_flags(scene, node.cell.to_world(origin));
            if flags.is_npc_obstacle {
                node.is_obstacle = true;
            } else if flags.is_path {
                node.movement_penalty = penalties.path_penalty;
            } else {
                node.movement_penalty = penalties.default_penalty;
            }
        }
    }

    /// Clear per-episode search state (costs, parents, set membership) while
    /// keeping obstacles and penalties.  Call before reusing a store for a
    /// second search in the same request.
    pub fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.g_cost = 0;
            node.h_cost = 0;
            node.parent = None;
            node.in_open = false;
            node.closed = false;
        }
    }
}
