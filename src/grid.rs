use petgraph::graph::{self, NodeIndex};
use petgraph::{Graph, Undirected};
use std::fmt;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, Cell, CompassPrimary,
                   CoordinateOptionSmallVec, CoordinateSmallVec};
use crate::units::{EdgesCount, Height, NodesCount, Width};
use crate::utils;
use crate::utils::FnvHashSet;

/// The passages of a maze as a graph: one node per cell (row major index), one edge per
/// removed wall pair.
pub type PassageGraph = Graph<Cartesian2DCoordinate, (), Undirected, u32>;

// Each link is owned by its west or north cell.
static LINK_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::East, CompassPrimary::South];

/// A fixed size rectangular grid of cells, stored row major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, links: {:?}",
               self.width,
               self.height,
               self.links_count())
    }
}

impl Grid {
    /// Allocates a `width` * `height` grid with every wall standing and no cell visited.
    ///
    /// Panics on an empty dimension.
    pub fn new(width: Width, height: Height) -> Grid {
        assert!(width.0 > 0 && height.0 > 0,
                "grid dimensions must be non zero: {:?} x {:?}",
                width,
                height);
        assert!(width.0 <= u32::MAX as usize && height.0 <= u32::MAX as usize,
                "grid dimensions must fit a u32 coordinate");

        Grid {
            width,
            height,
            cells: vec![Cell::new(); width.0 * height.0],
        }
    }

    /// Put every cell back to the all walls standing, unvisited state.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::new();
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        // A perfect maze is a spanning tree
        (NodesCount(cells_count), EdgesCount(cells_count - 1))
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0..grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_grid_coordinate(&self, index: usize) -> Cartesian2DCoordinate {
        let x = index % self.width.0;
        let y = index / self.width.0;
        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    /// Panics if the coordinate is outside the grid.
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> &Cell {
        let index = self.checked_index(coord);
        &self.cells[index]
    }

    #[inline]
    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord).visited
    }

    /// Mark a cell as reached by a traversal. Panics if the coordinate is outside the grid.
    pub fn visit(&mut self, coord: Cartesian2DCoordinate) {
        let index = self.checked_index(coord);
        self.cells[index].visited = true;
    }

    pub fn is_fully_visited(&self) -> bool {
        self.cells.iter().all(|cell| cell.visited)
    }

    /// Knock down the wall on the `direction` side of `coord` and the facing wall of the
    /// neighbour. This is the only way wall state changes, so both sides always agree.
    ///
    /// Panics if there is no neighbour in that direction.
    pub fn remove_wall(&mut self, coord: Cartesian2DCoordinate, direction: CompassPrimary) {
        let current = self.checked_index(coord);
        let neighbour_coord = self.neighbour_at_direction(coord, direction)
            .unwrap_or_else(|| {
                panic!("no cell {:?} of {:?} to open a passage to", direction, coord)
            });
        let next = self.checked_index(neighbour_coord);

        self.cells[current].walls.knock_down(direction);
        self.cells[next].walls.knock_down(direction.opposite());
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        offset_coordinate(coord, direction).filter(|c| self.is_valid_coordinate(*c))
    }

    pub fn neighbours_at_directions(&self,
                                    coord: Cartesian2DCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// Cells to the North, East, South or West of a cell, but not necessarily linked by a passage.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Cells that are linked to a particular cell by a passage.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter(|dir| self.is_neighbour_linked(coord, **dir))
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn is_neighbour_linked(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.is_valid_coordinate(coord) &&
        self.neighbour_at_direction(coord, direction).is_some() &&
        !self.cell(coord).walls.is_standing(direction)
    }

    /// Are two cells in the grid linked? Order of the arguments does not matter.
    pub fn is_linked(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        CompassPrimary::between(a, b).map_or(false, |dir| self.is_neighbour_linked(a, dir))
    }

    /// Number of removed wall pairs.
    pub fn links_count(&self) -> usize {
        self.iter_links().count()
    }

    /// Sum of the standing wall flags of every cell. Interior walls are owned by both cells.
    pub fn standing_walls_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.walls.standing_count()).sum()
    }

    /// Row major iteration over the coordinates of the grid.
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: self.size(),
            row_length: self.width.0,
        }
    }

    /// Each removed wall pair once, as (west or north cell, east or south cell).
    pub fn iter_links(&self) -> impl Iterator<Item = (Cartesian2DCoordinate, Cartesian2DCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            LINK_DIRECTIONS
                .iter()
                .filter(move |dir| self.is_neighbour_linked(coord, **dir))
                .filter_map(move |dir| self.neighbour_at_direction(coord, *dir))
                .map(move |neighbour| (coord, neighbour))
        })
    }

    /// Flood fill along passages from `start`. Panics if `start` is outside the grid.
    pub fn reachable_from(&self, start: Cartesian2DCoordinate) -> FnvHashSet<Cartesian2DCoordinate> {
        let _ = self.checked_index(start);

        let mut reached = utils::fnv_hashset(self.size());
        reached.insert(start);
        let mut frontier = vec![start];
        while let Some(coord) = frontier.pop() {
            for link in self.links(coord).iter() {
                if reached.insert(*link) {
                    frontier.push(*link);
                }
            }
        }
        reached
    }

    /// Build a petgraph view of the passages, node weights are the cell coordinates.
    pub fn passage_graph(&self) -> PassageGraph {
        let (NodesCount(nodes), EdgesCount(edges)) = self.graph_size();
        let mut graph = PassageGraph::with_capacity(nodes, edges);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_links() {
            let a_index = self.graph_index(a);
            let b_index = self.graph_index(b);
            let _ = graph.add_edge(a_index, b_index, ());
        }
        graph
    }

    fn graph_index(&self, coord: Cartesian2DCoordinate) -> NodeIndex<u32> {
        graph::NodeIndex::new(self.checked_index(coord))
    }

    fn checked_index(&self, coord: Cartesian2DCoordinate) -> usize {
        self.grid_coordinate_to_index(coord).unwrap_or_else(|| {
            panic!("coordinate {:?} is outside the {} x {} grid",
                   coord,
                   self.width.0,
                   self.height.0)
        })
    }
}

#[derive(Clone, Debug)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    row_length: usize,
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let x = self.current_cell_number % self.row_length;
            let y = self.current_cell_number / self.row_length;
            self.current_cell_number += 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
