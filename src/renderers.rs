use std::iter;

use crate::cells::{Cartesian2DCoordinate, CellRect, CompassPrimary};
use crate::constants::{BACKDROP_COLOUR, BACKGROUND_COLOUR, BUILDING_COLOUR, HIDER_COLOUR,
                       SEEKER_COLOUR, WALL_COLOUR};
use crate::errors::*;
use crate::game::GameState;
use crate::grid::Grid;
use crate::units::CellPixels;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }
}

/// Something the maze can be drawn on. The SDL canvas is one, tests record the calls.
pub trait RenderTarget {
    fn set_draw_color(&mut self, colour: Colour);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()>;
    fn draw_rect(&mut self, rect: CellRect) -> Result<()>;
    fn clear(&mut self);
    fn present(&mut self);
}

/// Draw one line per standing wall flag, row by row.
///
/// Every cell draws its own walls, so a standing interior wall is drawn twice at the same
/// place, once by each cell sharing it. Returns the number of line segments drawn.
pub fn draw_maze<T: RenderTarget>(grid: &Grid,
                                  cell_size: CellPixels,
                                  target: &mut T)
                                  -> Result<usize> {
    target.set_draw_color(WALL_COLOUR);

    let mut segments = 0;
    for coord in grid.iter() {
        let walls = grid.cell(coord).walls;
        let b = CellRect::of_cell(coord, cell_size);
        let (x1, y1) = (b.x, b.y);
        let (x2, y2) = (b.x + b.w as i32, b.y + b.h as i32);

        for dir in CompassPrimary::ALL.iter() {
            if !walls.is_standing(*dir) {
                continue;
            }
            match *dir {
                CompassPrimary::North => target.draw_line(x1, y1, x2, y1)?,
                CompassPrimary::East => target.draw_line(x2, y1, x2, y2)?,
                CompassPrimary::South => target.draw_line(x1, y2, x2, y2)?,
                CompassPrimary::West => target.draw_line(x1, y1, x1, y2)?,
            }
            segments += 1;
        }
    }

    Ok(segments)
}

/// Faint lines along every cell boundary so carved passages still show the cells.
pub fn draw_backdrop<T: RenderTarget>(grid: &Grid,
                                      cell_size: CellPixels,
                                      target: &mut T)
                                      -> Result<()> {
    let CellPixels(size) = cell_size;
    let window_width = (grid.width().0 as u32 * size + 1) as i32;
    let window_height = (grid.height().0 as u32 * size + 1) as i32;

    target.set_draw_color(BACKDROP_COLOUR);
    for x in (0..window_width).step_by(size as usize) {
        target.draw_line(x, 0, x, window_height)?;
    }
    for y in (0..window_height).step_by(size as usize) {
        target.draw_line(0, y, window_width, y)?;
    }
    Ok(())
}

/// Filled squares for the hider, the buildings and the seekers.
pub fn draw_markers<T: RenderTarget>(game: &GameState,
                                     cell_size: CellPixels,
                                     target: &mut T)
                                     -> Result<()> {
    draw_marker_set(target,
                    HIDER_COLOUR,
                    iter::once(game.hider().position),
                    cell_size)?;
    draw_marker_set(target,
                    BUILDING_COLOUR,
                    game.buildings().iter().map(|b| b.position),
                    cell_size)?;
    draw_marker_set(target,
                    SEEKER_COLOUR,
                    game.seekers().iter().map(|s| s.position),
                    cell_size)
}

fn draw_marker_set<T, I>(target: &mut T,
                         colour: Colour,
                         coords: I,
                         cell_size: CellPixels)
                         -> Result<()>
    where T: RenderTarget,
          I: Iterator<Item = Cartesian2DCoordinate>
{
    target.set_draw_color(colour);
    for coord in coords {
        target.draw_rect(CellRect::marker_in_cell(coord, cell_size))?;
    }
    Ok(())
}

/// A whole frame: clear, backdrop, markers, walls, present.
pub fn render_frame<T: RenderTarget>(game: &GameState,
                                     cell_size: CellPixels,
                                     target: &mut T)
                                     -> Result<()> {
    target.set_draw_color(BACKGROUND_COLOUR);
    target.clear();

    draw_backdrop(game.maze().grid(), cell_size, target)?;
    draw_markers(game, cell_size, target)?;
    let _ = draw_maze(game.maze().grid(), cell_size, target)?;

    target.present();
    Ok(())
}
