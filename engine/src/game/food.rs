use std::collections::HashSet;

use super::grid::Grid;
use super::session_rng::SessionRng;
use super::types::Cell;

/// Picks a uniformly random in-bounds cell not in `occupied`. Sampling is
/// memoryless, so the same cell can come up again on later calls.
///
/// Caller invariant: `occupied` must not cover the whole grid. Settings
/// validation guarantees free capacity at session construction; a grid the
/// snake could fill entirely is a configuration error, not a retry condition.
pub fn place_food(occupied: &HashSet<Cell>, grid: &Grid, rng: &mut SessionRng) -> Cell {
    loop {
        let col = rng.random_range(0..grid.width_cells());
        let row = rng.random_range(0..grid.height_cells());
        let cell = Cell::new(col, row);

        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_is_in_bounds_and_free() {
        let grid = Grid::from_surface(100, 100, 20).unwrap();
        let mut rng = SessionRng::new(42);

        let mut occupied = HashSet::new();
        for col in 0..5 {
            for row in 0..4 {
                occupied.insert(Cell::new(col, row));
            }
        }

        // 20 of 25 cells taken; every sample must land in the bottom row.
        for _ in 0..50 {
            let food = place_food(&occupied, &grid, &mut rng);
            assert!(grid.contains(food));
            assert!(!occupied.contains(&food));
            assert_eq!(food.row, 4);
        }
    }

    #[test]
    fn test_single_free_cell_is_always_found() {
        let grid = Grid::from_surface(100, 100, 20).unwrap();
        let mut rng = SessionRng::new(7);

        let mut occupied = HashSet::new();
        for col in 0..5 {
            for row in 0..5 {
                occupied.insert(Cell::new(col, row));
            }
        }
        occupied.remove(&Cell::new(2, 3));

        assert_eq!(place_food(&occupied, &grid, &mut rng), Cell::new(2, 3));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let grid = Grid::from_surface(200, 200, 20).unwrap();
        let occupied = HashSet::new();

        let mut first = SessionRng::new(1234);
        let mut second = SessionRng::new(1234);
        for _ in 0..10 {
            assert_eq!(
                place_food(&occupied, &grid, &mut first),
                place_food(&occupied, &grid, &mut second)
            );
        }
    }
}
