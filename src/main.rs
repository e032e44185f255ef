use docopt::Docopt;
use error_chain::{bail, quick_main};
use log::info;
use serde_derive::Deserialize;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use maze_chase::{
    constants::{GRID_HEIGHT, GRID_WIDTH},
    errors::*,
    game::GameState,
    grid_displays,
    units::{Height, Width},
};

const USAGE: &str = "Maze Chase

Usage:
    maze_chase -h | --help
    maze_chase [play] [--seed=<n>]
    maze_chase text [--seed=<n>] [--grid-width=<w> --grid-height=<h>]

Options:
    -h --help              Show this screen.
    --seed=<n>             Seed for the maze and building placement. Taken from the clock if not given.
    --grid-width=<w>       The grid width of a text rendered maze [default: 25].
    --grid-height=<h>      The grid height of a text rendered maze [default: 12].

The game window always uses the built in 25 x 12 grid.
Arrow keys move the hider, R generates a new maze, Q or Escape quits.
Set RUST_LOG (e.g. RUST_LOG=debug) to change the logging level.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_play: bool,
    cmd_text: bool,
    flag_seed: Option<u64>,
    flag_grid_width: usize,
    flag_grid_height: usize,
}

quick_main!(run);

fn parse_args<I, S>(argv: I) -> ::std::result::Result<MazeArgs, docopt::Error>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())
}

fn run() -> Result<()> {

    // Help and usage mistakes print the usage text and exit here.
    let args = parse_args(env::args()).unwrap_or_else(|e| e.exit());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = args.flag_seed.unwrap_or_else(clock_seed);
    info!("using seed {}", seed);

    if args.cmd_text {
        if args.flag_grid_width == 0 || args.flag_grid_height == 0 {
            bail!("grid dimensions must be at least 1 x 1");
        }
        let game = GameState::new(Width(args.flag_grid_width), Height(args.flag_grid_height), seed);
        print!("{}", grid_displays::render_text(game.maze().grid(), &game));
        return Ok(());
    }

    if !args.cmd_play {
        info!("no command given, starting the game");
    }
    let mut game = GameState::new(GRID_WIDTH, GRID_HEIGHT, seed);
    play(&mut game)
}

#[cfg(feature = "sdl")]
fn play(game: &mut GameState) -> Result<()> {
    maze_chase::sdl::run(game)
}

#[cfg(not(feature = "sdl"))]
fn play(_: &mut GameState) -> Result<()> {
    Err(ErrorKind::SdlUnavailable.into())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
        .unwrap_or(0)
}
