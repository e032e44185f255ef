use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maze_chase::{
    cells::CellRect,
    constants::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH},
    errors::*,
    game::GameState,
    grid_displays,
    renderers::{self, Colour, RenderTarget},
};

/// Counts draw calls without touching a window.
#[derive(Default)]
struct CountingTarget {
    lines: usize,
    rects: usize,
}

impl RenderTarget for CountingTarget {
    fn set_draw_color(&mut self, colour: Colour) {
        black_box(colour);
    }
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        black_box((x0, y0, x1, y1));
        self.lines += 1;
        Ok(())
    }
    fn draw_rect(&mut self, rect: CellRect) -> Result<()> {
        black_box(rect);
        self.rects += 1;
        Ok(())
    }
    fn clear(&mut self) {}
    fn present(&mut self) {}
}

fn bench_render_frame(c: &mut Criterion) {
    let game = GameState::new(GRID_WIDTH, GRID_HEIGHT, 99);
    let mut target = CountingTarget::default();

    c.bench_function("render_frame_25_12", move |b| {
        b.iter(|| renderers::render_frame(&game, CELL_SIZE, &mut target))
    });
}

fn bench_render_text(c: &mut Criterion) {
    let game = GameState::new(GRID_WIDTH, GRID_HEIGHT, 99);

    c.bench_function("render_text_25_12", move |b| {
        b.iter(|| grid_displays::render_text(game.maze().grid(), &game))
    });
}

criterion_group!(benches, bench_render_frame, bench_render_text);
criterion_main!(benches);
