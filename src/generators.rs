use log::debug;
use rand::Rng;

use crate::cells::Cartesian2DCoordinate;
use crate::maze::Maze;
use crate::neighbours::unvisited_neighbours;
use crate::stack::BacktrackStack;

/// What a generation run did with its backtracking stack and the walls.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub pushes: usize,
    pub pops: usize,
    pub carved: usize,
    pub max_stack_depth: usize,
}

/// Apply the recursive backtracker maze generation algorithm to a freshly reset maze.
/// Panics if the maze has already been generated.
///
/// A randomized depth first search starting in the top left cell: carve a passage to a random
/// unvisited neighbour and move there, remembering where we came from on an explicit stack.
/// When a cell has no unvisited neighbours pop back along the path until one does.
/// Finishes when the stack is empty, by then every cell has been visited exactly once and the
/// passages form a spanning tree of the grid - a perfect maze.
pub fn recursive_backtracker<R: Rng>(maze: &mut Maze, rng: &mut R) -> GenerationStats {

    let cells_count = maze.grid().size();
    let mut stack = BacktrackStack::with_capacity(cells_count);
    let mut stats = GenerationStats::default();

    let mut current = Cartesian2DCoordinate::new(0, 0);
    assert!(!maze.grid().is_visited(current),
            "recursive backtracker needs a freshly reset maze, reset it or use Maze::regenerate");
    maze.grid_mut().visit(current);
    stack.push(current);

    while !stack.is_empty() {
        let neighbours = unvisited_neighbours(maze.grid(), current);

        if !neighbours.is_empty() {
            let next = neighbours[rng.gen_range(0..neighbours.len())];

            maze.carve(current, next);
            maze.grid_mut().visit(next);
            stats.carved += 1;

            stack.push(current);
            current = next;
        } else {
            current = stack.pop();
            stats.pops += 1;
        }
    }

    stats.pushes = stack.push_count();
    stats.max_stack_depth = stack.max_depth();

    debug!("recursive backtracker finished {}x{}: {:?}",
           maze.grid().width().0,
           maze.grid().height().0,
           stats);
    stats
}

#[cfg(test)]
mod tests {
    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::CompassPrimary;
    use crate::units::{Height, Width};

    fn generated(w: usize, h: usize, seed: u64) -> (Maze, GenerationStats) {
        let mut maze = Maze::new(Width(w), Height(h));
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let stats = recursive_backtracker(&mut maze, &mut rng);
        (maze, stats)
    }

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn single_cell_maze() {
        let (maze, stats) = generated(1, 1, 7);
        assert!(maze.grid().is_visited(gc(0, 0)));
        assert_eq!(maze.grid().links_count(), 0);
        assert_eq!(stats,
                   GenerationStats {
                       pushes: 1,
                       pops: 1,
                       carved: 0,
                       max_stack_depth: 1,
                   });
    }

    #[test]
    #[should_panic(expected = "freshly reset maze")]
    fn generating_twice_without_reset_is_fatal() {
        let (mut maze, _) = generated(4, 4, 8);
        let mut rng = XorShiftRng::seed_from_u64(9);
        let _ = recursive_backtracker(&mut maze, &mut rng);
    }

    #[test]
    fn corridor_maze_has_one_shape() {
        let (maze, stats) = generated(5, 1, 3);
        assert_eq!(maze.grid().links_count(), 4);
        for x in 0..4 {
            assert!(maze.grid().is_linked(gc(x, 0), gc(x + 1, 0)));
        }
        // Every step pushes the cell it leaves, then the walk back pops all of them
        assert_eq!(stats.pushes, 5);
        assert_eq!(stats.pops, 5);
        assert_eq!(stats.max_stack_depth, 5);
    }

    #[test]
    fn perfect_maze_on_default_grid() {
        let (maze, stats) = generated(25, 12, 0xdead_beef);
        let grid = maze.grid();

        assert!(grid.is_fully_visited());
        assert_eq!(grid.links_count(), 299);
        assert_eq!(stats.carved, 299);
        assert_eq!(stats.pushes, 300);
        assert_eq!(stats.pops, stats.pushes);
        assert!(stats.max_stack_depth <= 300);
        assert_eq!(grid.reachable_from(gc(24, 11)).len(), 300);

        let graph = grid.passage_graph();
        assert_eq!(connected_components(&graph), 1);
        assert!(!is_cyclic_undirected(&graph));
    }

    #[test]
    fn walls_agree_on_both_sides() {
        let (maze, _) = generated(9, 7, 42);
        let grid = maze.grid();
        for coord in grid.iter() {
            for dir in CompassPrimary::ALL.iter() {
                if let Some(neighbour) = grid.neighbour_at_direction(coord, *dir) {
                    assert_eq!(grid.cell(coord).walls.is_standing(*dir),
                               grid.cell(neighbour).walls.is_standing(dir.opposite()));
                } else {
                    assert!(grid.cell(coord).walls.is_standing(*dir),
                            "outer wall of {:?} was opened",
                            coord);
                }
            }
        }
    }

    #[test]
    fn adjacency_tracks_every_carve() {
        let (maze, _) = generated(8, 6, 11);
        let grid = maze.grid();
        assert_eq!(maze.adjacency().count(), grid.links_count());
        for a in grid.iter() {
            for b in grid.neighbours(a).iter() {
                assert_eq!(maze.are_connected(a, *b), grid.is_linked(a, *b));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let (first, first_stats) = generated(25, 12, 1234);
        let (second, second_stats) = generated(25, 12, 1234);
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.grid().iter_links().collect::<Vec<_>>(),
                   second.grid().iter_links().collect::<Vec<_>>());
        assert_eq!(first_stats, second_stats);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let (first, _) = generated(25, 12, 1);
        let (second, _) = generated(25, 12, 2);
        assert_ne!(first.grid(), second.grid());
    }

    #[test]
    fn any_size_makes_a_spanning_tree() {
        fn prop(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (w as usize % 20, h as usize % 20);
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let (maze, stats) = generated(w, h, seed);
            let grid = maze.grid();
            let cells = w * h;

            TestResult::from_bool(grid.is_fully_visited() &&
                                  grid.links_count() == cells - 1 &&
                                  stats.carved == cells - 1 &&
                                  stats.pushes == cells &&
                                  stats.pops == cells &&
                                  grid.reachable_from(gc(0, 0)).len() == cells &&
                                  grid.standing_walls_count() == cells * 4 - 2 * (cells - 1))
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}
