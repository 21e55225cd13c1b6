//! The grid-property boundary: what the application knows about its tiles.
//!
//! The framework never reads tile maps directly.  It asks a
//! [`GridProperties`] implementation for per-cell flags and per-scene
//! geometry, keyed by **world** coordinates.  Flag reads must be stable for
//! the duration of one path build (the populate pass snapshots them into the
//! `GridStore`).

use rustc_hash::FxHashMap;

use nav_core::{GridCell, SceneId};

// ── CellFlags ─────────────────────────────────────────────────────────────────

/// Per-cell classification reported by the application.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct CellFlags {
    /// Cell blocks NPC traversal.
    pub is_npc_obstacle: bool,
    /// Cell is "path" terrain — cheaper to walk than default terrain.
    pub is_path: bool,
}

// ── SceneGeometry ─────────────────────────────────────────────────────────────

/// Grid dimensions and world-space origin for one scene.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SceneGeometry {
    pub width: u32,
    pub height: u32,
    /// World coordinate of the scene's local `(0, 0)` cell.
    pub origin: GridCell,
}

impl SceneGeometry {
    pub fn new(width: u32, height: u32, origin: GridCell) -> Self {
        Self { width, height, origin }
    }
}

// ── GridProperties ────────────────────────────────────────────────────────────

/// Pluggable tile-property source.
///
/// Implement this for whatever owns the application's tile data.  Both
/// methods must be cheap — `cell_flags` is called once per cell per path
/// build.
pub trait GridProperties {
    /// Flags for the cell at `world` in `scene`.
    ///
    /// Unknown cells return the default (walkable, non-path): the grid's
    /// bounds, not the flag source, decide what is in range.
    fn cell_flags(&self, scene: SceneId, world: GridCell) -> CellFlags;

    /// Dimensions and origin for `scene`, or `None` if the scene is unknown.
    fn scene_geometry(&self, scene: SceneId) -> Option<SceneGeometry>;
}

// ── MapGridProperties ─────────────────────────────────────────────────────────

/// Hash-map-backed [`GridProperties`] for tests and small applications.
///
/// Only non-default flags are stored; lookups for unlisted cells fall back
/// to `CellFlags::default()`.
#[derive(Default)]
pub struct MapGridProperties {
    geometry: FxHashMap<SceneId, SceneGeometry>,
    flags: FxHashMap<(SceneId, GridCell), CellFlags>,
}

impl MapGridProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene's dimensions and origin.
    pub fn add_scene(&mut self, scene: SceneId, geometry: SceneGeometry) {
        self.geometry.insert(scene, geometry);
    }

    /// Mark a world cell as an NPC obstacle.
    pub fn set_obstacle(&mut self, scene: SceneId, world: GridCell) {
        self.flags
            .entry((scene, world))
            .or_default()
            .is_npc_obstacle = true;
    }

    /// Mark a world cell as "path" terrain.
    pub fn set_path(&mut self, scene: SceneId, world: GridCell) {
        self.flags.entry((scene, world)).or_default().is_path = true;
    }
}

impl GridProperties for MapGridProperties {
    fn cell_flags(&self, scene: SceneId, world: GridCell) -> CellFlags {
        self.flags
            .get(&(scene, world))
            .copied()
            .unwrap_or_default()
    }

    fn scene_geometry(&self, scene: SceneId) -> Option<SceneGeometry> {
        self.geometry.get(&scene).copied()
    }
}
