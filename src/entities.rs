//! The things moving around on top of the maze. None of them are part of the maze graph.

use log::{debug, info};
use rand::Rng;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, CompassPrimary};
use crate::units::{Height, Seconds, Width};

/// The player controlled token.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Hider {
    pub position: Cartesian2DCoordinate,
}

impl Hider {
    pub fn new(position: Cartesian2DCoordinate) -> Hider {
        Hider { position }
    }

    /// Move one cell in `direction` unless that would leave the `width` x `height` play area.
    /// Walls do not block the hider. Returns whether it moved.
    pub fn step(&mut self, direction: CompassPrimary, width: Width, height: Height) -> bool {
        let target = offset_coordinate(self.position, direction)
            .filter(|c| (c.x as usize) < width.0 && (c.y as usize) < height.0);
        match target {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Building {
    pub position: Cartesian2DCoordinate,
}

impl Building {
    /// Buildings are dropped on random cells, possibly on top of each other.
    pub fn random_placements<R: Rng>(count: usize,
                                     width: Width,
                                     height: Height,
                                     rng: &mut R)
                                     -> Vec<Building> {
        (0..count)
            .map(|_| {
                let x = width.0 - rng.gen_range(1..=width.0);
                let y = height.0 - rng.gen_range(1..=height.0);
                Building { position: Cartesian2DCoordinate::new(x as u32, y as u32) }
            })
            .collect()
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Seeker {
    pub position: Cartesian2DCoordinate,
}

/// Every seeker in play and the clock deciding when the next one shows up.
#[derive(Debug, Clone)]
pub struct SeekerPack {
    seekers: Vec<Seeker>,
    since_last_seeker: Seconds,
    interval: Seconds,
    max_seekers: usize,
    spawn_point: Cartesian2DCoordinate,
}

impl SeekerPack {
    /// Starts with one seeker already at `spawn_point`.
    pub fn new(spawn_point: Cartesian2DCoordinate, interval: Seconds, max_seekers: usize) -> SeekerPack {
        let mut pack = SeekerPack {
            seekers: Vec::with_capacity(max_seekers),
            since_last_seeker: Seconds(0.0),
            interval,
            max_seekers,
            spawn_point,
        };
        pack.add_seeker();
        pack
    }

    /// The cell the first seeker appears in on a `width` x `height` grid: left of the centre
    /// and a little above it.
    pub fn default_spawn_point(width: Width, height: Height) -> Cartesian2DCoordinate {
        let x = width.0.saturating_sub(2) / 2;
        let y = height.0.saturating_sub(3) / 2;
        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    /// Advance the clock by `dt`, bringing in a new seeker each time a full interval passes.
    /// Returns how many seekers were introduced.
    pub fn introduce_seekers(&mut self, dt: Seconds) -> usize {
        self.since_last_seeker.0 += dt.0;

        let mut introduced = 0;
        while self.since_last_seeker >= self.interval && self.seekers.len() < self.max_seekers {
            self.since_last_seeker.0 -= self.interval.0;
            self.add_seeker();
            introduced += 1;
        }
        if self.seekers.len() >= self.max_seekers {
            self.since_last_seeker = Seconds(0.0);
        }
        introduced
    }

    #[inline]
    pub fn seekers(&self) -> &[Seeker] {
        &self.seekers
    }

    fn add_seeker(&mut self) {
        if self.seekers.len() < self.max_seekers {
            self.seekers.push(Seeker { position: self.spawn_point });
            info!("seeker {} introduced at {:?}", self.seekers.len(), self.spawn_point);
        } else {
            debug!("seeker limit of {} reached", self.max_seekers);
        }
    }
}
