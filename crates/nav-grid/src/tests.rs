//! Unit tests for nav-grid.

#[cfg(test)]
mod store {
    use nav_core::GridCell;

    use crate::GridStore;

    #[test]
    fn nodes_know_their_cells() {
        let grid = GridStore::new(4, 3, GridCell::new(0, 0));
        assert_eq!(grid.get(GridCell::new(0, 0)).unwrap().cell, GridCell::new(0, 0));
        assert_eq!(grid.get(GridCell::new(3, 2)).unwrap().cell, GridCell::new(3, 2));
        assert_eq!(grid.get(GridCell::new(1, 2)).unwrap().cell, GridCell::new(1, 2));
    }

    #[test]
    fn fresh_nodes_are_clear() {
        let grid = GridStore::new(2, 2, GridCell::new(0, 0));
        let n = grid.get(GridCell::new(1, 1)).unwrap();
        assert_eq!(n.g_cost, 0);
        assert_eq!(n.h_cost, 0);
        assert!(!n.is_obstacle);
        assert!(n.parent.is_none());
    }

    #[test]
    fn out_of_bounds_is_none_not_panic() {
        let grid = GridStore::new(5, 5, GridCell::new(0, 0));
        assert!(grid.get(GridCell::new(-1, 0)).is_none());
        assert!(grid.get(GridCell::new(0, -1)).is_none());
        assert!(grid.get(GridCell::new(5, 0)).is_none());
        assert!(grid.get(GridCell::new(0, 5)).is_none());
        assert!(grid.get(GridCell::new(4, 4)).is_some());
    }

    #[test]
    fn reset_keeps_terrain_but_clears_search_state() {
        let mut grid = GridStore::new(3, 3, GridCell::new(0, 0));
        {
            let n = grid.get_mut(GridCell::new(1, 1)).unwrap();
            n.g_cost = 40;
            n.parent = Some(0);
            n.closed = true;
            n.is_obstacle = true;
            n.movement_penalty = 5;
        }
        grid.reset_search_state();
        let n = grid.get(GridCell::new(1, 1)).unwrap();
        assert_eq!(n.g_cost, 0);
        assert!(n.parent.is_none());
        assert!(!n.closed);
        assert!(n.is_obstacle);
        assert_eq!(n.movement_penalty, 5);
    }
}

#[cfg(test)]
mod populate {
    use nav_core::{GridCell, SceneId};

    use crate::{GridStore, MapGridProperties, SceneGeometry, TerrainPenalties};

    const SCENE: SceneId = SceneId(0);

    /// 3×3 scene at world origin (10, 10) with one obstacle and one path
    /// cell, both addressed in world coordinates.
    fn props() -> MapGridProperties {
        let mut p = MapGridProperties::new();
        p.add_scene(SCENE, SceneGeometry::new(3, 3, GridCell::new(10, 10)));
        p.set_obstacle(SCENE, GridCell::new(11, 10)); // local (1, 0)
        p.set_path(SCENE, GridCell::new(12, 12));     // local (2, 2)
        p
    }

    #[test]
    fn world_keyed_flags_land_on_local_cells() {
        let penalties = TerrainPenalties { path_penalty: 0, default_penalty: 5 };
        let mut grid = GridStore::new(3, 3, GridCell::new(10, 10));
        grid.populate(SCENE, &props(), penalties);

        assert!(grid.get(GridCell::new(1, 0)).unwrap().is_obstacle);
        assert_eq!(grid.get(GridCell::new(2, 2)).unwrap().movement_penalty, 0);
        assert_eq!(grid.get(GridCell::new(0, 0)).unwrap().movement_penalty, 5);
    }

    #[test]
    fn unknown_scene_has_no_geometry() {
        let p = props();
        use crate::GridProperties;
        assert!(p.scene_geometry(SceneId(9)).is_none());
        assert!(p.scene_geometry(SCENE).is_some());
    }

    #[test]
    fn obstacle_cells_skip_penalty_assignment() {
        let penalties = TerrainPenalties { path_penalty: 1, default_penalty: 9 };
        let mut grid = GridStore::new(3, 3, GridCell::new(10, 10));
        grid.populate(SCENE, &props(), penalties);
        let n = grid.get(GridCell::new(1, 0)).unwrap();
        assert!(n.is_obstacle);
        assert_eq!(n.movement_penalty, 0);
    }
}
