use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Instant;

use crate::cells::CellRect;
use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::errors::*;
use crate::game::GameState;
use crate::input::{Key, KeyEvent, KeyEventType};
use crate::renderers::{Colour, RenderTarget};
use crate::units::Seconds;
use crate::utils;

pub struct SdlSetup {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
}

pub fn init() -> Result<SdlSetup> {
    let sdl_context: sdl2::Sdl = sdl2::init()?;
    let video_subsystem: sdl2::VideoSubsystem = sdl_context.video()?;

    Ok(SdlSetup {
        sdl_context,
        video_subsystem,
    })
}

/// The window canvas as a `RenderTarget`.
pub struct SdlTarget {
    canvas: Canvas<Window>,
}

impl SdlTarget {
    pub fn new(canvas: Canvas<Window>) -> SdlTarget {
        SdlTarget { canvas }
    }
}

impl RenderTarget for SdlTarget {
    fn set_draw_color(&mut self, colour: Colour) {
        self.canvas.set_draw_color(Color::RGB(colour.r, colour.g, colour.b));
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        self.canvas
            .draw_line(Point::new(x0, y0), Point::new(x1, y1))
            .map_err(|e| ErrorKind::Render(e).into())
    }

    fn draw_rect(&mut self, rect: CellRect) -> Result<()> {
        self.canvas
            .fill_rect(Rect::new(rect.x, rect.y, rect.w, rect.h))
            .map_err(|e| ErrorKind::Render(e).into())
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

fn translate_keycode(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::R => Some(Key::Regenerate),
        _ => None,
    }
}

/// Open the game window and drive `game` until the window is closed or Q / Escape is pressed.
pub fn run(game: &mut GameState) -> Result<()> {
    let sdl_setup = init().chain_err(|| "could not initialise SDL")?;

    let window = sdl_setup.video_subsystem
        .window("Maze Chase", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let canvas = window.into_canvas()
        .present_vsync()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;
    let mut target = SdlTarget::new(canvas);
    info!("window open at {}x{}", WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut held_since = utils::fnv_hashmap::<Key, Instant>(5);
    let mut last_frame = Instant::now();
    let mut events = sdl_setup.sdl_context.event_pump()?;

    'event: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } |
                Event::KeyDown { keycode: Some(Keycode::Q), .. } |
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'event,

                Event::KeyDown { keycode: Some(keycode), .. } => {
                    if let Some(key) = translate_keycode(keycode) {
                        let pressed_at = *held_since.entry(key).or_insert_with(Instant::now);
                        let _ = game.on_key(KeyEvent {
                            key,
                            kind: KeyEventType::Pressed,
                            held_time: Seconds(pressed_at.elapsed().as_secs_f64()),
                        });
                    }
                }
                Event::KeyUp { keycode: Some(keycode), .. } => {
                    if let Some(key) = translate_keycode(keycode) {
                        let held = held_since.remove(&key)
                            .map_or(0.0, |pressed_at| pressed_at.elapsed().as_secs_f64());
                        let _ = game.on_key(KeyEvent::released(key, Seconds(held)));
                    }
                }
                _ => continue,
            }
        }

        let now = Instant::now();
        let dt = Seconds(now.duration_since(last_frame).as_secs_f64());
        last_frame = now;

        let stop = game.on_frame(dt, &mut target)?;
        if stop {
            break 'event;
        }
    }

    debug!("event loop finished");
    Ok(())
}
