use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub size: u32,
    pub wrap: bool,
}

impl GridConfig {
    pub fn new(size: u32, wrap: bool) -> Self {
        Self { size, wrap }
    }

    pub fn normalize(&self, cell: Cell) -> Cell {
        if !self.wrap {
            return cell;
        }
        let size = self.size as i32;
        Cell::new(cell.x.rem_euclid(size), cell.y.rem_euclid(size))
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        let size = self.size as i32;
        (0..size).contains(&cell.x) && (0..size).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        let mid = (self.size / 2) as i32;
        Cell::new(mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_without_wrap_is_identity() {
        let grid = GridConfig::new(20, false);

        assert_eq!(grid.normalize(Cell::new(20, -1)), Cell::new(20, -1));
    }

    #[test]
    fn test_normalize_with_wrap_reenters_opposite_edge() {
        let grid = GridConfig::new(20, true);

        assert_eq!(grid.normalize(Cell::new(20, 5)), Cell::new(0, 5));
        assert_eq!(grid.normalize(Cell::new(-1, 5)), Cell::new(19, 5));
        assert_eq!(grid.normalize(Cell::new(3, -1)), Cell::new(3, 19));
        assert_eq!(grid.normalize(Cell::new(3, 20)), Cell::new(3, 0));
    }

    #[test]
    fn test_in_bounds_edges() {
        let grid = GridConfig::new(20, false);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(19, 19)));
        assert!(!grid.in_bounds(Cell::new(20, 0)));
        assert!(!grid.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn test_center_uses_integer_division() {
        assert_eq!(GridConfig::new(20, false).center(), Cell::new(10, 10));
        assert_eq!(GridConfig::new(15, false).center(), Cell::new(7, 7));
    }
}
