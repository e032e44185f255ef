use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::game::GameState;
use crate::grid::Grid;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> String {
        String::from("   ")
    }
}

/// Shows the hider, buildings and seekers as H, B and S. The hider wins when they share a cell.
impl GridDisplay for GameState {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if self.hider().position == coord {
            String::from(" H ")
        } else if self.seekers().iter().any(|s| s.position == coord) {
            String::from(" S ")
        } else if self.buildings().iter().any(|b| b.position == coord) {
            String::from(" B ")
        } else {
            String::from("   ")
        }
    }
}

struct EmptyCells;
impl GridDisplay for EmptyCells {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, &EmptyCells))
    }
}

/// Draw the maze with box drawing characters, three glyphs per cell body.
pub fn render_text(grid: &Grid, displayer: &dyn GridDisplay) -> String {
    const WALL_L: &str = "╴";
    const WALL_R: &str = "╶";
    const WALL_U: &str = "╵";
    const WALL_D: &str = "╷";
    const WALL_LR_3: &str = "───";
    const WALL_LR: &str = "─";
    const WALL_UD: &str = "│";
    const WALL_LD: &str = "┐";
    const WALL_RU: &str = "└";
    const WALL_LU: &str = "┘";
    const WALL_RD: &str = "┌";
    const WALL_LRU: &str = "┴";
    const WALL_LRD: &str = "┬";
    const WALL_LRUD: &str = "┼";
    const WALL_RUD: &str = "├";
    const WALL_LUD: &str = "┤";

    let columns_count = grid.width().0;
    let rows_count = grid.height().0;

    // Start by special case rendering the text for the north most boundary
    let mut output = String::from(WALL_RD);
    for x in 0..columns_count {
        let coord = Cartesian2DCoordinate::new(x as u32, 0);
        output.push_str(WALL_LR_3);
        let is_east_open = grid.is_neighbour_linked(coord, CompassPrimary::East);
        if is_east_open {
            output.push_str(WALL_LR);
        } else if x == columns_count - 1 {
            output.push_str(WALL_LD);
        } else {
            output.push_str(WALL_LRD);
        }
    }
    output.push('\n');

    for y in 0..rows_count {

        let is_last_row = y == rows_count - 1;

        // The west most boundary of the row, the top of each cell is done by the previous row.
        let mut row_middle_section_render = String::from(WALL_UD);
        let mut row_bottom_section_render = String::new();

        for x in 0..columns_count {
            let cell_coord = Cartesian2DCoordinate::new(x as u32, y as u32);
            let is_first_column = x == 0;
            let is_last_column = x == columns_count - 1;
            let east_open = grid.is_neighbour_linked(cell_coord, CompassPrimary::East);
            let south_open = grid.is_neighbour_linked(cell_coord, CompassPrimary::South);

            row_middle_section_render.push_str(&displayer.render_cell_body(cell_coord));
            row_middle_section_render.push_str(if east_open { " " } else { WALL_UD });

            if is_first_column {
                row_bottom_section_render = if is_last_row {
                    String::from(WALL_RU)
                } else if south_open {
                    String::from(WALL_UD)
                } else {
                    String::from(WALL_RUD)
                };
            }
            row_bottom_section_render.push_str(if south_open { "   " } else { WALL_LR_3 });

            let corner = match (is_last_row, is_last_column) {
                (true, true) => WALL_LU,
                (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                (false, false) => {
                    let access_se_from_east =
                        grid.neighbour_at_direction(cell_coord, CompassPrimary::East)
                            .map_or(false,
                                    |c| grid.is_neighbour_linked(c, CompassPrimary::South));
                    let access_se_from_south =
                        grid.neighbour_at_direction(cell_coord, CompassPrimary::South)
                            .map_or(false,
                                    |c| grid.is_neighbour_linked(c, CompassPrimary::East));
                    let show_right_section = !access_se_from_east;
                    let show_down_section = !access_se_from_south;
                    let show_up_section = !east_open;
                    let show_left_section = !south_open;

                    match (show_left_section,
                           show_right_section,
                           show_up_section,
                           show_down_section) {
                        (true, true, true, true) => WALL_LRUD,
                        (true, true, true, false) => WALL_LRU,
                        (true, true, false, true) => WALL_LRD,
                        (true, false, true, true) => WALL_LUD,
                        (false, true, true, true) => WALL_RUD,
                        (true, true, false, false) => WALL_LR,
                        (false, false, true, true) => WALL_UD,
                        (false, true, true, false) => WALL_RU,
                        (true, false, false, true) => WALL_LD,
                        (true, false, true, false) => WALL_LU,
                        (false, true, false, true) => WALL_RD,
                        (true, false, false, false) => WALL_L,
                        (false, true, false, false) => WALL_R,
                        (false, false, true, false) => WALL_U,
                        (false, false, false, true) => WALL_D,
                        _ => " ",
                    }
                }
            };
            row_bottom_section_render.push_str(corner);
        }

        output.push_str(&row_middle_section_render);
        output.push('\n');
        output.push_str(&row_bottom_section_render);
        output.push('\n');
    }

    output
}
