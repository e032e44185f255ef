use log::{debug, info};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::constants::{CELL_SIZE, MAX_SEEKERS, NEW_SEEKER_INTERVAL, NUM_BUILDINGS};
use crate::entities::{Building, Hider, Seeker, SeekerPack};
use crate::errors::*;
use crate::input::{Key, KeyEvent, KeyEventType};
use crate::maze::Maze;
use crate::renderers::{self, RenderTarget};
use crate::units::{Height, Seconds, Width};

/// Everything one running game owns: the maze and the entities on it.
///
/// The host calls `on_key` for each key event and `on_frame` once per frame, both on the
/// same thread.
pub struct GameState {
    maze: Maze,
    hider: Hider,
    buildings: Vec<Building>,
    seekers: SeekerPack,
    rng: XorShiftRng,
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "GameState :: maze: {:?}, hider: {:?}, buildings: {:?}, seekers: {}",
               self.maze.grid(),
               self.hider,
               self.buildings,
               self.seekers().len())
    }
}

impl GameState {
    /// Generate the maze and place everything on it, all randomness comes from `seed`.
    pub fn new(width: Width, height: Height, seed: u64) -> GameState {
        let mut rng = XorShiftRng::seed_from_u64(seed);

        let buildings = Building::random_placements(NUM_BUILDINGS, width, height, &mut rng);
        let (maze, stats) = Maze::generate(width, height, &mut rng);
        debug!("maze generation stats: {:?}", stats);

        let seekers = SeekerPack::new(SeekerPack::default_spawn_point(width, height),
                                      NEW_SEEKER_INTERVAL,
                                      MAX_SEEKERS);
        info!("game ready with seed {}, buildings at {:?}",
              seed,
              buildings.iter().map(|b| b.position).collect::<Vec<_>>());

        GameState {
            maze,
            hider: Hider::new(Cartesian2DCoordinate::new(0, 0)),
            buildings,
            seekers,
            rng,
        }
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn hider(&self) -> &Hider {
        &self.hider
    }

    #[inline]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    #[inline]
    pub fn seekers(&self) -> &[Seeker] {
        self.seekers.seekers()
    }

    /// React to a key event. Only presses count, releases are ignored whatever the hold time.
    /// Returns whether anything changed.
    pub fn on_key(&mut self, event: KeyEvent) -> bool {
        if event.kind != KeyEventType::Pressed {
            return false;
        }

        let direction = match event.key {
            Key::Up => CompassPrimary::North,
            Key::Down => CompassPrimary::South,
            Key::Left => CompassPrimary::West,
            Key::Right => CompassPrimary::East,
            Key::Regenerate => {
                let stats = self.maze.regenerate(&mut self.rng);
                debug!("maze regeneration stats: {:?}", stats);
                return true;
            }
        };

        let grid = self.maze.grid();
        let moved = self.hider.step(direction, grid.width(), grid.height());
        if moved {
            debug!("hider moved {:?} to {:?}", direction, self.hider.position);
        }
        moved
    }

    /// Advance the clock by `dt` and draw the frame. Returns false to keep running.
    pub fn on_frame<T: RenderTarget>(&mut self, dt: Seconds, target: &mut T) -> Result<bool> {
        let _ = self.seekers.introduce_seekers(dt);
        renderers::render_frame(self, CELL_SIZE, target)
            .chain_err(|| "failed to draw the game frame")?;
        Ok(false)
    }
}
