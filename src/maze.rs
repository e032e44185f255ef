use log::info;
use rand::Rng;

use crate::adjacency::AdjacencyMatrix;
use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::generators::{self, GenerationStats};
use crate::grid::Grid;
use crate::units::{Height, Width};

/// A grid of walled cells plus the record of which cells are connected.
///
/// Walls and adjacency can only change together, through `carve`.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    adjacency: AdjacencyMatrix,
}

impl Maze {
    /// A closed maze: every wall standing, nothing visited, nothing adjacent.
    pub fn new(width: Width, height: Height) -> Maze {
        Maze {
            grid: Grid::new(width, height),
            adjacency: AdjacencyMatrix::new(width, height),
        }
    }

    /// Build and generate a perfect maze in one go.
    pub fn generate<R: Rng>(width: Width, height: Height, rng: &mut R) -> (Maze, GenerationStats) {
        let mut maze = Maze::new(width, height);
        let stats = generators::recursive_backtracker(&mut maze, rng);
        info!("generated {}x{} maze with {} passages",
              width.0,
              height.0,
              maze.grid.links_count());
        (maze, stats)
    }

    /// Close every wall again and generate a new maze in the same storage.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) -> GenerationStats {
        self.grid.reset();
        self.adjacency.clear();
        let stats = generators::recursive_backtracker(self, rng);
        info!("regenerated maze with {} passages", self.grid.links_count());
        stats
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Open a passage between two orthogonally adjacent cells.
    ///
    /// Panics if the cells are not orthogonal neighbours inside the grid.
    pub fn carve(&mut self, from: Cartesian2DCoordinate, to: Cartesian2DCoordinate) {
        let direction = CompassPrimary::between(from, to).unwrap_or_else(|| {
            panic!("cannot carve between non adjacent cells {:?} and {:?}", from, to)
        });
        self.grid.remove_wall(from, direction);
        self.adjacency.mark_grid_cells_adjacent(from, to);
    }

    /// Is there a passage directly between two cells.
    pub fn are_connected(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        self.grid.is_valid_coordinate(a) && self.grid.is_valid_coordinate(b) &&
        self.adjacency.are_grid_cells_adjacent(a, b)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::constants::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
    use crate::renderers::{self, tests::RecordingTarget};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn carve_keeps_walls_and_adjacency_in_step() {
        let mut maze = Maze::new(Width(3), Height(3));
        maze.carve(gc(1, 1), gc(1, 2));

        assert!(maze.grid().is_linked(gc(1, 1), gc(1, 2)));
        assert!(maze.are_connected(gc(1, 1), gc(1, 2)));
        assert!(maze.are_connected(gc(1, 2), gc(1, 1)));
        assert!(!maze.are_connected(gc(1, 1), gc(0, 1)));
        assert!(!maze.are_connected(gc(1, 1), gc(7, 7)));
    }

    #[test]
    #[should_panic(expected = "non adjacent")]
    fn carving_across_the_grid_is_fatal() {
        let mut maze = Maze::new(Width(3), Height(3));
        maze.carve(gc(0, 0), gc(2, 0));
    }

    #[test]
    fn regenerating_starts_from_a_closed_maze() {
        let mut rng = XorShiftRng::seed_from_u64(99);
        let (mut maze, _) = Maze::generate(Width(6), Height(4), &mut rng);
        let before = maze.grid().clone();

        let stats = maze.regenerate(&mut rng);
        assert_eq!(stats.carved, 23);
        assert_eq!(maze.grid().links_count(), 23);
        assert_eq!(maze.adjacency().count(), 23);
        assert!(maze.grid().is_fully_visited());
        assert_ne!(&before, maze.grid());
    }

    #[test]
    fn default_maze_end_to_end() {
        let mut rng = XorShiftRng::seed_from_u64(20_240_601);
        let (maze, stats) = Maze::generate(GRID_WIDTH, GRID_HEIGHT, &mut rng);
        let grid = maze.grid();

        let visited = grid.iter().filter(|c| grid.is_visited(*c)).count();
        assert_eq!(visited, 300);
        assert_eq!(grid.links_count(), 299);
        assert_eq!(stats.carved, 299);

        let mut target = RecordingTarget::default();
        let segments = renderers::draw_maze(grid, CELL_SIZE, &mut target).unwrap();
        assert_eq!(segments, 300 * 4 - 2 * 299);
        assert_eq!(target.lines.len(), 602);
    }
}
