use smallvec::SmallVec;
use std::convert::From;

use crate::units::CellPixels;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<Cartesian2DCoordinate>; 4]>;

/// The four sides of a square cell.
///
/// The declaration order is the order neighbours are enumerated in, and the discriminant is the
/// wall direction code: 0 north, 1 east, 2 south, 3 west.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    #[inline]
    pub fn code(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// The direction of `to` as seen from `from`, if the two are orthogonally adjacent.
    pub fn between(from: Cartesian2DCoordinate,
                   to: Cartesian2DCoordinate)
                   -> Option<CompassPrimary> {
        if from.x == to.x {
            if to.y.checked_add(1) == Some(from.y) {
                Some(CompassPrimary::North)
            } else if from.y.checked_add(1) == Some(to.y) {
                Some(CompassPrimary::South)
            } else {
                None
            }
        } else if from.y == to.y {
            if from.x.checked_add(1) == Some(to.x) {
                Some(CompassPrimary::East)
            } else if to.x.checked_add(1) == Some(from.x) {
                Some(CompassPrimary::West)
            } else {
                None
            }
        } else {
            None
        }
    }
}

/// Creates a new coordinate offset 1 cell away in the given direction.
/// Returns None if the coordinate is not representable, the grid bounds are not considered.
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
        CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate::new(x, y)),
        CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate::new(x, y)),
        CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Walls {
    pub fn all_standing() -> Walls {
        Walls {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }

    pub fn is_standing(&self, dir: CompassPrimary) -> bool {
        match dir {
            CompassPrimary::North => self.north,
            CompassPrimary::East => self.east,
            CompassPrimary::South => self.south,
            CompassPrimary::West => self.west,
        }
    }

    pub fn standing_count(&self) -> usize {
        CompassPrimary::ALL.iter().filter(|&&dir| self.is_standing(dir)).count()
    }

    // Only the grid may knock walls down, it has to do both sides at once.
    pub(crate) fn knock_down(&mut self, dir: CompassPrimary) {
        match dir {
            CompassPrimary::North => self.north = false,
            CompassPrimary::East => self.east = false,
            CompassPrimary::South => self.south = false,
            CompassPrimary::West => self.west = false,
        }
    }
}

impl Default for Walls {
    fn default() -> Walls {
        Walls::all_standing()
    }
}

/// Screen space rectangle, the same shape as an SDL rect.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl CellRect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> CellRect {
        CellRect { x, y, w, h }
    }

    /// The bounding box of the cell at `coord`.
    pub fn of_cell(coord: Cartesian2DCoordinate, cell_size: CellPixels) -> CellRect {
        let CellPixels(size) = cell_size;
        CellRect::new((coord.x * size) as i32, (coord.y * size) as i32, size, size)
    }

    /// A half cell square centred in the cell at `coord`, used for the overlay markers.
    pub fn marker_in_cell(coord: Cartesian2DCoordinate, cell_size: CellPixels) -> CellRect {
        let CellPixels(size) = cell_size;
        let inset = (size / 4) as i32;
        let cell = CellRect::of_cell(coord, cell_size);
        CellRect::new(cell.x + inset, cell.y + inset, size / 2, size / 2)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            walls: Walls::all_standing(),
            visited: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn direction_codes_follow_enumeration_order() {
        let codes = CompassPrimary::ALL.iter().map(|d| d.code()).collect::<Vec<_>>();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn opposites() {
        for dir in CompassPrimary::ALL.iter() {
            assert_ne!(*dir, dir.opposite());
            assert_eq!(*dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn direction_between_cells() {
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(1, 0)), Some(CompassPrimary::North));
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(2, 1)), Some(CompassPrimary::East));
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(1, 2)), Some(CompassPrimary::South));
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(0, 1)), Some(CompassPrimary::West));
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(1, 1)), None);
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(2, 2)), None);
        assert_eq!(CompassPrimary::between(gc(0, 0), gc(0, 2)), None);
    }

    #[test]
    fn offsets_do_not_wrap() {
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::North), None);
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::West), None);
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::East), Some(gc(1, 0)));
        assert_eq!(offset_coordinate(gc(0, 0), CompassPrimary::South), Some(gc(0, 1)));
        assert_eq!(offset_coordinate(gc(u32::MAX, 0), CompassPrimary::East), None);
    }

    #[test]
    fn new_cell_is_closed_and_unvisited() {
        let cell = Cell::new();
        assert!(!cell.visited);
        assert_eq!(cell.walls.standing_count(), 4);
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn cell_boxes() {
        let size = CellPixels(40);
        assert_eq!(CellRect::of_cell(gc(2, 1), size), CellRect::new(80, 40, 40, 40));
        assert_eq!(CellRect::marker_in_cell(gc(0, 0), size), CellRect::new(10, 10, 20, 20));
        assert_eq!(CellRect::marker_in_cell(gc(3, 2), size), CellRect::new(130, 90, 20, 20));
    }
}
