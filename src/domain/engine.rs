use super::{Cell, Grid};

/// Engine advances the grid one full generation at a time.
///
/// It keeps the next generation in its own buffer while scanning, so every
/// neighbor count reads the untouched pre-advance snapshot regardless of
/// scan order. Once the scan is complete the buffer is swapped into the
/// grid in one step; the displaced cells become the scratch buffer for the
/// following generation, so steady-state advancing allocates nothing.
#[derive(Default)]
pub struct Engine {
    next: Vec<Cell>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and commit the next generation of `grid`.
    pub fn advance(&mut self, grid: &mut Grid) {
        let (width, height) = grid.dimensions();
        self.next.clear();
        self.next.extend(
            (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .map(|(x, y)| {
                    let current = grid.get(x, y).unwrap();
                    current.evolve(grid.live_neighbors(x, y))
                }),
        );
        grid.commit(&mut self.next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(grid: &mut Grid) {
        Engine::new().advance(grid);
    }

    #[test]
    fn empty_grid_is_a_fixed_point() {
        let mut grid = Grid::new(6, 6);
        let before = grid.clone();
        advance(&mut grid);
        advance(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn a_lone_cell_dies() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, Cell::Alive);
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = Grid::new(5, 5);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set(x, y, Cell::Alive);
        }
        let before = grid.clone();
        advance(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut grid = Grid::new(5, 5);
        for x in 1..=3 {
            grid.set(x, 2, Cell::Alive);
        }
        let horizontal = grid.clone();

        advance(&mut grid);
        for y in 1..=3 {
            assert_eq!(grid.get(2, y), Some(Cell::Alive));
        }
        assert_eq!(grid.population(), 3);

        advance(&mut grid);
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn reusing_one_engine_across_generations() {
        let mut engine = Engine::new();
        let mut grid = Grid::new(5, 5);
        for x in 1..=3 {
            grid.set(x, 2, Cell::Alive);
        }
        let start = grid.clone();
        for _ in 0..4 {
            engine.advance(&mut grid);
        }
        assert_eq!(grid, start);
    }

    #[test]
    fn blinker_clipped_by_the_edge_decays() {
        // A blinker lying along the top edge loses its wrapped neighbors on
        // a bounded board: it collapses to a pair and then to nothing.
        let mut grid = Grid::new(5, 5);
        for x in 1..=3 {
            grid.set(x, 0, Cell::Alive);
        }
        advance(&mut grid);
        assert_eq!(grid.get(2, 0), Some(Cell::Alive));
        assert_eq!(grid.get(2, 1), Some(Cell::Alive));
        assert_eq!(grid.population(), 2);
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
    }
}
