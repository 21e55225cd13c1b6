//! Unit tests for nav-path.
//!
//! All tests build small hand-crafted grids; no property source is needed
//! because obstacles and penalties are set directly on the nodes.

#[cfg(test)]
mod helpers {
    use nav_core::GridCell;
    use nav_grid::GridStore;

    use crate::{AStarPathFinder, PathFinder, PathResult};

    pub fn cell(x: i32, y: i32) -> GridCell {
        GridCell::new(x, y)
    }

    /// An empty `size × size` grid at world origin (0, 0).
    pub fn open_grid(size: u32) -> GridStore {
        GridStore::new(size, size, cell(0, 0))
    }

    pub fn block(grid: &mut GridStore, x: i32, y: i32) {
        grid.get_mut(cell(x, y)).unwrap().is_obstacle = true;
    }

    /// Run the default finder and return the path in start→target order.
    pub fn find(
        grid: &mut GridStore,
        start: GridCell,
        target: GridCell,
    ) -> PathResult<Vec<GridCell>> {
        let mut path = AStarPathFinder.find_path(grid, start, target, false)?;
        path.reverse();
        Ok(path)
    }
}

// ── Distance metric ───────────────────────────────────────────────────────────

#[cfg(test)]
mod metric {
    use super::helpers::cell;
    use crate::{octile, step_cost, DIAGONAL_COST, ORTHOGONAL_COST};

    #[test]
    fn unit_steps() {
        assert_eq!(step_cost(1, 0), ORTHOGONAL_COST);
        assert_eq!(step_cost(0, -1), ORTHOGONAL_COST);
        assert_eq!(step_cost(1, 1), DIAGONAL_COST);
        assert_eq!(step_cost(-1, 1), DIAGONAL_COST);
    }

    #[test]
    fn octile_mixed_axes() {
        // 3 across, 1 down: one diagonal + two orthogonal.
        assert_eq!(octile(cell(0, 0), cell(3, 1)), 14 + 2 * 10);
        // Symmetric in both arguments and axes.
        assert_eq!(octile(cell(3, 1), cell(0, 0)), 34);
        assert_eq!(octile(cell(0, 0), cell(1, 3)), 34);
    }

    #[test]
    fn octile_pure_lines() {
        assert_eq!(octile(cell(0, 0), cell(4, 0)), 40);
        assert_eq!(octile(cell(0, 0), cell(4, 4)), 56);
        assert_eq!(octile(cell(2, 2), cell(2, 2)), 0);
    }

    #[test]
    fn heuristic_is_exact_on_open_grid() {
        // On an obstacle-free grid the optimal cost between any two cells is
        // the octile distance itself, so h never overestimates.
        use super::helpers::{find, open_grid};
        let mut grid = open_grid(7);
        for (sx, sy, tx, ty) in [(0, 0, 6, 2), (5, 5, 0, 3), (1, 6, 6, 6), (3, 3, 3, 3)] {
            let start = cell(sx, sy);
            let target = cell(tx, ty);
            find(&mut grid, start, target).unwrap();
            let g = grid.get(target).unwrap().g_cost;
            assert_eq!(g, octile(start, target), "{start} → {target}");
            grid.reset_search_state();
        }
    }
}

// ── Search behavior ───────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::helpers::{block, cell, find, open_grid};
    use crate::{AStarPathFinder, PathError, PathFinder};

    #[test]
    fn empty_5x5_diagonal() {
        // Pure diagonal: 5 cells, total cost 4 × 14 = 56.
        let mut grid = open_grid(5);
        let path = find(&mut grid, cell(0, 0), cell(4, 4)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], cell(0, 0));
        assert_eq!(path[4], cell(4, 4));
        assert_eq!(grid.get(cell(4, 4)).unwrap().g_cost, 56);
    }

    #[test]
    fn start_equals_target_is_one_cell() {
        let mut grid = open_grid(5);
        let path = find(&mut grid, cell(2, 2), cell(2, 2)).unwrap();
        assert_eq!(path, vec![cell(2, 2)]);
    }

    #[test]
    fn out_of_bounds_fails_fast() {
        let mut grid = open_grid(5);
        assert_eq!(
            AStarPathFinder.find_path(&mut grid, cell(-1, 0), cell(4, 4), false),
            Err(PathError::OutOfBounds(cell(-1, 0)))
        );
        assert_eq!(
            AStarPathFinder.find_path(&mut grid, cell(0, 0), cell(5, 5), false),
            Err(PathError::OutOfBounds(cell(5, 5)))
        );
    }

    #[test]
    fn wall_forces_detour() {
        // Wall at x=2 for y ∈ {0..3}, gap at y=4: the only way past is the gap.
        let mut grid = open_grid(5);
        for y in 0..4 {
            block(&mut grid, 2, y);
        }
        let path = find(&mut grid, cell(0, 0), cell(4, 0)).unwrap();
        assert!(path.contains(&cell(2, 4)), "path must use the gap: {path:?}");
        for y in 0..4 {
            assert!(!path.contains(&cell(2, y)));
        }
    }

    #[test]
    fn obstacles_never_appear_in_paths() {
        let mut grid = open_grid(6);
        let blocked = [(1, 1), (2, 3), (4, 4), (3, 0)];
        for (x, y) in blocked {
            block(&mut grid, x, y);
        }
        let path = find(&mut grid, cell(0, 0), cell(5, 5)).unwrap();
        for (x, y) in blocked {
            assert!(!path.contains(&cell(x, y)));
        }
    }

    #[test]
    fn enclosed_target_is_no_path() {
        // Ring of obstacles around (3, 3) with no gap.
        let mut grid = open_grid(6);
        for x in 2..=4 {
            for y in 2..=4 {
                if (x, y) != (3, 3) {
                    block(&mut grid, x, y);
                }
            }
        }
        assert_eq!(
            AStarPathFinder.find_path(&mut grid, cell(0, 0), cell(3, 3), false),
            Err(PathError::NoPath { start: cell(0, 0), target: cell(3, 3) })
        );
    }

    #[test]
    fn adjacent_path_steps_are_neighbors() {
        let mut grid = open_grid(8);
        block(&mut grid, 4, 3);
        block(&mut grid, 4, 4);
        let path = find(&mut grid, cell(0, 4), cell(7, 4)).unwrap();
        for pair in path.windows(2) {
            let (dx, dy) = (pair[1].x - pair[0].x, pair[1].y - pair[0].y);
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0));
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let run = || {
            let mut grid = open_grid(9);
            for (x, y) in [(3, 1), (3, 2), (3, 3), (5, 5), (5, 6), (1, 7)] {
                block(&mut grid, x, y);
            }
            find(&mut grid, cell(0, 0), cell(8, 8)).unwrap()
        };
        let first = run();
        for _ in 0..10 {
            assert_eq!(run(), first);
        }
    }
}

// ── Penalties ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod penalties {
    use super::helpers::{cell, open_grid};
    use crate::{AStarPathFinder, PathFinder};

    #[test]
    fn penalties_steer_the_route() {
        // 3-wide corridor: the straight row y=1 is heavily penalized, rows
        // 0 and 2 are free.  Observing penalties must leave y=1.
        let mut grid = open_grid(7);
        for x in 1..6 {
            grid.get_mut(cell(x, 1)).unwrap().movement_penalty = 100;
        }
        let mut path = AStarPathFinder
            .find_path(&mut grid, cell(0, 1), cell(6, 1), true)
            .unwrap();
        path.reverse();
        assert!(path.iter().any(|c| c.y != 1), "route should dodge the penalty row");
    }

    #[test]
    fn penalties_ignored_when_disabled() {
        let mut grid = open_grid(7);
        for x in 1..6 {
            grid.get_mut(cell(x, 1)).unwrap().movement_penalty = 100;
        }
        let mut path = AStarPathFinder
            .find_path(&mut grid, cell(0, 1), cell(6, 1), false)
            .unwrap();
        path.reverse();
        // Straight line is optimal when penalties are off.
        assert_eq!(path.len(), 7);
        assert!(path.iter().all(|c| c.y == 1));
        assert_eq!(grid.get(cell(6, 1)).unwrap().g_cost, 60);
    }
}
