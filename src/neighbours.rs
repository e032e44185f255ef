use crate::cells::{Cartesian2DCoordinate, CompassPrimary, CoordinateSmallVec};
use crate::grid::Grid;

/// The in bounds, not yet visited cells orthogonally next to `coord`.
///
/// Always checked in the order north, east, south, west so a seeded generator picks the same
/// cells on every run.
pub fn unvisited_neighbours(grid: &Grid, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
    CompassPrimary::ALL
        .iter()
        .filter_map(|dir| grid.neighbour_at_direction(coord, *dir))
        .filter(|neighbour| !grid.is_visited(*neighbour))
        .collect()
}
