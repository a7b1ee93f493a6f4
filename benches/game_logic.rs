use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_starflight::core::collision::{hits_any_obstacle, player_bounds};
use tui_starflight::core::{Obstacle, Session, Spawner, World};
use tui_starflight::term::{views, Viewport};
use tui_starflight::types::{Difficulty, FieldSize, Intent};

fn bench_world_tick(c: &mut Criterion) {
    let mut world = World::new(Difficulty::Hard, 12345);

    c.bench_function("world_tick", |b| {
        b.iter(|| {
            black_box(world.tick());
        })
    });
}

fn bench_collision_scan(c: &mut Criterion) {
    // A field far denser than the spawner ever produces.
    let obstacles: Vec<Obstacle> = (0..128)
        .map(|i| Obstacle::new(10 + i * 2, 1 + (i % 16), '#'))
        .collect();
    let player = player_bounds(5, 10);

    c.bench_function("collision_scan_128", |b| {
        b.iter(|| {
            black_box(hits_any_obstacle(black_box(player), &obstacles));
        })
    });
}

fn bench_spawner_bootstrap(c: &mut Criterion) {
    let field = FieldSize::new(80, 20);

    c.bench_function("spawner_bootstrap", |b| {
        b.iter(|| {
            let mut spawner = Spawner::new(black_box(12345));
            black_box(spawner.bootstrap(field, 1));
        })
    });
}

fn bench_render_playing(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.handle(Intent::Confirm);
    let viewport = Viewport::new(80, 24);

    c.bench_function("render_playing_80x24", |b| {
        b.iter(|| {
            black_box(views::render(&session, viewport, black_box(1_000)));
        })
    });
}

criterion_group!(
    benches,
    bench_world_tick,
    bench_collision_scan,
    bench_spawner_bootstrap,
    bench_render_playing
);
criterion_main!(benches);
