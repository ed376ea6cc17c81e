use super::grid::Grid;
use super::snake::Snake;
use super::types::Cell;

pub fn is_wall_collision(candidate: Cell, grid: &Grid) -> bool {
    !grid.contains(candidate)
}

/// True iff `candidate` lands on the body. The current tail cell is exempt:
/// on a non-growing tick the tail vacates it, and a growing move onto the
/// tail cannot happen because food never overlaps the body.
pub fn is_self_collision(candidate: Cell, snake: &Snake) -> bool {
    snake.contains(candidate) && candidate != snake.tail()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Direction;

    fn grid_5x5() -> Grid {
        Grid::from_surface(100, 100, 20).unwrap()
    }

    #[test]
    fn test_wall_collision_outside_every_edge() {
        let grid = grid_5x5();
        assert!(is_wall_collision(Cell::new(-1, 2), &grid));
        assert!(is_wall_collision(Cell::new(5, 2), &grid));
        assert!(is_wall_collision(Cell::new(2, -1), &grid));
        assert!(is_wall_collision(Cell::new(2, 5), &grid));
    }

    #[test]
    fn test_no_wall_collision_inside() {
        let grid = grid_5x5();
        assert!(!is_wall_collision(Cell::new(0, 0), &grid));
        assert!(!is_wall_collision(Cell::new(4, 4), &grid));
    }

    #[test]
    fn test_self_collision_on_trailing_segment() {
        // Body (5,5) (4,5) (3,5); (4,5) is a trailing segment.
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(is_self_collision(Cell::new(4, 5), &snake));
    }

    #[test]
    fn test_tail_cell_is_not_a_collision() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(!is_self_collision(Cell::new(3, 5), &snake));
    }

    #[test]
    fn test_free_cell_is_not_a_collision() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(!is_self_collision(Cell::new(5, 4), &snake));
    }
}
