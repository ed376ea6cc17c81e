use super::types::Cell;

/// Discrete cell grid derived from a pixel surface. Dimensions are fixed for
/// the lifetime of a session; resizing requires a restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width_cells: i32,
    height_cells: i32,
}

impl Grid {
    pub fn from_surface(
        surface_width: u32,
        surface_height: u32,
        cell_size: u32,
    ) -> Result<Grid, String> {
        if cell_size == 0 {
            return Err("Cell size must be positive".to_string());
        }

        let width_cells = (surface_width / cell_size) as i32;
        let height_cells = (surface_height / cell_size) as i32;

        if width_cells == 0 || height_cells == 0 {
            return Err(format!(
                "Surface {}x{} is smaller than one {}px cell",
                surface_width, surface_height, cell_size
            ));
        }

        Ok(Grid {
            width_cells,
            height_cells,
        })
    }

    pub fn width_cells(&self) -> i32 {
        self.width_cells
    }

    pub fn height_cells(&self) -> i32 {
        self.height_cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.width_cells && cell.row >= 0 && cell.row < self.height_cells
    }

    pub fn capacity(&self) -> usize {
        (self.width_cells as usize) * (self.height_cells as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_surface_floors_partial_cells() {
        let grid = Grid::from_surface(610, 415, 20).unwrap();
        assert_eq!(grid.width_cells(), 30);
        assert_eq!(grid.height_cells(), 20);
        assert_eq!(grid.capacity(), 600);
    }

    #[test]
    fn test_zero_cell_size_is_rejected() {
        assert!(Grid::from_surface(600, 400, 0).is_err());
    }

    #[test]
    fn test_surface_smaller_than_one_cell_is_rejected() {
        assert!(Grid::from_surface(19, 400, 20).is_err());
        assert!(Grid::from_surface(600, 19, 20).is_err());
    }

    #[test]
    fn test_contains_bounds() {
        let grid = Grid::from_surface(100, 100, 20).unwrap();
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(4, 4)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
        assert!(!grid.contains(Cell::new(5, 0)));
        assert!(!grid.contains(Cell::new(0, 5)));
    }
}
