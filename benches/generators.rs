use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use maze_chase::{
    generators,
    maze::Maze,
    units::{Height, Width},
};

fn bench_recursive_backtracker_25_12(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(7);
    let mut maze = Maze::new(Width(25), Height(12));

    c.bench_function("recursive_backtracker_25_12", move |b| {
        b.iter(|| maze.regenerate(&mut rng))
    });
}

fn bench_recursive_backtracker_64_64(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(7);

    c.bench_function("recursive_backtracker_64_64", move |b| {
        b.iter(|| {
            let mut maze = Maze::new(Width(64), Height(64));
            generators::recursive_backtracker(&mut maze, &mut rng)
        })
    });
}

criterion_group!(benches,
                 bench_recursive_backtracker_25_12,
                 bench_recursive_backtracker_64_64);
criterion_main!(benches);
