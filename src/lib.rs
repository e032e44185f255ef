//! **maze_chase** is a small hide and seek game played on a generated perfect maze.
//!
//! The maze is carved with a recursive backtracker over a grid of walled cells, then drawn
//! every frame through a `RenderTarget` while the hider moves around on top of it.

pub mod adjacency;
pub mod cells;
pub mod constants;
pub mod entities;
pub mod errors;
pub mod game;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod input;
pub mod maze;
pub mod neighbours;
pub mod renderers;
#[cfg(feature = "sdl")]
pub mod sdl;
pub mod stack;
pub mod units;
mod utils;
