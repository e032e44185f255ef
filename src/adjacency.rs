//! Explicit record of which cell pairs are directly connected.
//!
//! Cells are addressed here with 1 based coordinates, `(1, 1)` being the top left cell, and
//! are flattened column major: `(x - 1) * height + (y - 1)`.
//! The maze keeps this in step with the grid walls, see `Maze::carve`.

use bit_set::BitSet;

use crate::cells::Cartesian2DCoordinate;
use crate::units::{Height, Width};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    width: Width,
    height: Height,
    cells_count: usize,
    // cells_count * cells_count bits, row i holds the cells adjacent to cell i
    matrix: BitSet,
}

impl AdjacencyMatrix {
    pub fn new(width: Width, height: Height) -> AdjacencyMatrix {
        let cells_count = width.0 * height.0;
        AdjacencyMatrix {
            width,
            height,
            cells_count,
            matrix: BitSet::with_capacity(cells_count * cells_count),
        }
    }

    /// Record that `current` and `neighbour` (1 based) are directly connected, in both directions.
    ///
    /// Panics if either coordinate is outside `[1, width] x [1, height]`.
    pub fn mark_adjacent(&mut self, current: Cartesian2DCoordinate, neighbour: Cartesian2DCoordinate) {
        let a = self.linear_index(current);
        let b = self.linear_index(neighbour);
        let _ = self.matrix.insert(a * self.cells_count + b);
        let _ = self.matrix.insert(b * self.cells_count + a);
    }

    /// Panics if either coordinate is outside `[1, width] x [1, height]`.
    pub fn is_adjacent(&self, current: Cartesian2DCoordinate, neighbour: Cartesian2DCoordinate) -> bool {
        let a = self.linear_index(current);
        let b = self.linear_index(neighbour);
        self.matrix.contains(a * self.cells_count + b)
    }

    /// `mark_adjacent` for 0 based grid coordinates.
    pub fn mark_grid_cells_adjacent(&mut self,
                                    a: Cartesian2DCoordinate,
                                    b: Cartesian2DCoordinate) {
        self.mark_adjacent(one_based(a), one_based(b));
    }

    /// `is_adjacent` for 0 based grid coordinates.
    pub fn are_grid_cells_adjacent(&self,
                                   a: Cartesian2DCoordinate,
                                   b: Cartesian2DCoordinate)
                                   -> bool {
        self.is_adjacent(one_based(a), one_based(b))
    }

    /// Number of unordered adjacent pairs.
    pub fn count(&self) -> usize {
        let diagonal = (0..self.cells_count)
            .filter(|&i| self.matrix.contains(i * self.cells_count + i))
            .count();
        (self.matrix.len() - diagonal) / 2 + diagonal
    }

    pub fn clear(&mut self) {
        self.matrix.clear();
    }

    fn linear_index(&self, coord: Cartesian2DCoordinate) -> usize {
        let (x, y) = (coord.x as usize, coord.y as usize);
        assert!(x >= 1 && x <= self.width.0 && y >= 1 && y <= self.height.0,
                "adjacency coordinate {:?} is outside [1, {}] x [1, {}]",
                coord,
                self.width.0,
                self.height.0);
        (x - 1) * self.height.0 + (y - 1)
    }
}

#[inline]
fn one_based(coord: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new(coord.x + 1, coord.y + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn matrix() -> AdjacencyMatrix {
        AdjacencyMatrix::new(Width(25), Height(12))
    }

    #[test]
    fn nothing_adjacent_by_default() {
        let m = matrix();
        assert!(!m.is_adjacent(gc(1, 1), gc(2, 1)));
        assert!(!m.is_adjacent(gc(25, 12), gc(25, 11)));
        assert_eq!(m.count(), 0);
    }

    #[test]
    fn marking_is_symmetric() {
        let mut m = matrix();
        m.mark_adjacent(gc(3, 4), gc(3, 5));
        assert!(m.is_adjacent(gc(3, 4), gc(3, 5)));
        assert!(m.is_adjacent(gc(3, 5), gc(3, 4)));
        assert!(!m.is_adjacent(gc(3, 4), gc(4, 4)));
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn marking_is_idempotent() {
        let mut m = matrix();
        m.mark_adjacent(gc(1, 1), gc(2, 1));
        m.mark_adjacent(gc(2, 1), gc(1, 1));
        m.mark_adjacent(gc(1, 1), gc(2, 1));
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn column_major_indices_do_not_collide() {
        // (1, 2) and (2, 1) would share an index if x and y were swapped
        let mut m = AdjacencyMatrix::new(Width(3), Height(2));
        m.mark_adjacent(gc(1, 2), gc(1, 1));
        assert!(!m.is_adjacent(gc(2, 1), gc(1, 1)));
        assert!(m.is_adjacent(gc(1, 1), gc(1, 2)));
    }

    #[test]
    fn grid_coordinates_are_shifted() {
        let mut m = matrix();
        m.mark_grid_cells_adjacent(gc(0, 0), gc(1, 0));
        assert!(m.is_adjacent(gc(1, 1), gc(2, 1)));
        assert!(m.are_grid_cells_adjacent(gc(1, 0), gc(0, 0)));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut m = matrix();
        m.mark_adjacent(gc(1, 1), gc(1, 2));
        m.clear();
        assert_eq!(m, matrix());
        assert!(!m.is_adjacent(gc(1, 1), gc(1, 2)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn zero_is_not_a_one_based_coordinate() {
        let m = matrix();
        let _ = m.is_adjacent(gc(0, 1), gc(1, 1));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn past_the_far_edge_is_fatal() {
        let mut m = matrix();
        m.mark_adjacent(gc(25, 12), gc(26, 12));
    }
}
