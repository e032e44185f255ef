//! Build time configuration of the demo.

use crate::renderers::Colour;
use crate::units::{CellPixels, Height, Seconds, Width};

pub const GRID_WIDTH: Width = Width(25);
pub const GRID_HEIGHT: Height = Height(12);
pub const CELL_SIZE: CellPixels = CellPixels(40);

/// The extra pixel leaves room for the east and south outer walls.
pub const WINDOW_WIDTH: u32 = (GRID_WIDTH.0 as u32 * CELL_SIZE.0) + 1;
pub const WINDOW_HEIGHT: u32 = (GRID_HEIGHT.0 as u32 * CELL_SIZE.0) + 1;

pub const NUM_BUILDINGS: usize = 2;

pub const MAX_SEEKERS: usize = 50;
pub const NEW_SEEKER_INTERVAL: Seconds = Seconds(30.0);

pub const BACKGROUND_COLOUR: Colour = Colour::rgb(0xff, 0xff, 0xff);
pub const BACKDROP_COLOUR: Colour = Colour::rgb(230, 230, 230);
pub const WALL_COLOUR: Colour = Colour::rgb(0, 0, 0);
pub const HIDER_COLOUR: Colour = Colour::rgb(50, 129, 110);
pub const BUILDING_COLOUR: Colour = Colour::rgb(241, 108, 45);
pub const SEEKER_COLOUR: Colour = Colour::rgb(25, 229, 51);
