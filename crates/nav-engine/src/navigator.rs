//! The path-build entry point: fresh grid, search, timeline.

use nav_core::{GameTime, GridCell, SceneId};
use nav_grid::{GridProperties, GridStore, TerrainPenalties};
use nav_path::{AStarPathFinder, PathFinder};
use nav_timeline::{build_timeline, StepStack, TravelSpeed};

use crate::error::{EngineError, EngineResult};

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Engine-wide tuning, constructed once by the application.
#[derive(Copy, Clone, Debug, Default)]
pub struct NavConfig {
    /// Terrain entry costs applied during the populate pass.
    pub penalties: TerrainPenalties,

    /// Whether searches pay `movement_penalty` when entering cells.
    /// Off = shortest geometric route regardless of terrain.
    pub observe_penalties: bool,

    /// Per-step durations for timeline stamping.
    pub speed: TravelSpeed,
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Wraps a [`GridProperties`] source and a [`PathFinder`] to answer path
/// requests.
///
/// # Type parameters
///
/// `P` is the application's tile-property source.  `F` is the search
/// algorithm — swap it at compile time with no runtime overhead; the
/// default [`AStarPathFinder`] suits scene-sized grids.
pub struct Navigator<P: GridProperties, F: PathFinder = AStarPathFinder> {
    /// The application's tile-property source.
    pub props: P,

    /// The search algorithm.
    pub finder: F,

    pub config: NavConfig,
}

impl<P: GridProperties> Navigator<P, AStarPathFinder> {
    pub fn new(props: P, config: NavConfig) -> Self {
        Self { props, finder: AStarPathFinder, config }
    }
}

impl<P: GridProperties, F: PathFinder> Navigator<P, F> {
    pub fn with_finder(props: P, finder: F, config: NavConfig) -> Self {
        Self { props, finder, config }
    }

    /// Build a time-stamped step stack from `start` to `target` (both world
    /// coordinates) in `scene`, departing at `now`.
    ///
    /// `None` covers every failure mode — unknown scene, off-grid cells, no
    /// route, path too short to animate — because all of them mean the same
    /// thing to the caller: the agent stays put this tick.
    pub fn build_path(
        &self,
        scene: SceneId,
        start: GridCell,
        target: GridCell,
        now: GameTime,
    ) -> Option<StepStack> {
        self.try_build_path(scene, start, target, now).ok()
    }

    /// Like [`build_path`](Self::build_path) but preserves the failure
    /// reason.
    pub fn try_build_path(
        &self,
        scene: SceneId,
        start: GridCell,
        target: GridCell,
        now: GameTime,
    ) -> EngineResult<StepStack> {
        // Geometry check comes first: no grid is allocated for a scene the
        // property source has never heard of.
        let geometry = self
            .props
            .scene_geometry(scene)
            .ok_or(EngineError::MissingGridData(scene))?;

        let mut grid = GridStore::new(geometry.width, geometry.height, geometry.origin);
        grid.populate(scene, &self.props, self.config.penalties);

        let path = self.finder.find_path(
            &mut grid,
            start.to_local(geometry.origin),
            target.to_local(geometry.origin),
            self.config.observe_penalties,
        )?;

        let stack = build_timeline(&path, scene, geometry.origin, now, self.config.speed)?;
        Ok(stack)
    }
}
