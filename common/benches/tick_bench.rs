use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use snake_common::SessionRng;
use snake_common::snake::{Direction, GameSettings, RunState, SnakeSession};

const FRAME: Duration = Duration::from_millis(16);

/// Steers a clockwise square so the snake survives long runs on a wrapped grid.
fn play_frames(frames: u32) -> u32 {
    let settings = GameSettings {
        grid_size: 40,
        speed: 60.0,
        wrap: true,
    };
    let mut session = SnakeSession::new(settings, 0, SessionRng::new(2024)).unwrap();
    session.set_player("bench").unwrap();
    session.start(Duration::ZERO);

    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
    let mut now = Duration::ZERO;
    let mut ticks = 0;
    for frame in 0..frames {
        now += FRAME;
        if frame % 50 == 0 {
            session.set_direction(turns[(frame / 50) as usize % turns.len()]);
        }
        if session.frame(now).tick.is_some() {
            ticks += 1;
        }
        if session.state() == RunState::GameOver {
            session.start(now);
        }
    }
    ticks
}

fn bench_frames(c: &mut Criterion) {
    c.bench_function("frame_loop_10k", |b| b.iter(|| play_frames(black_box(10_000))));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = SnakeSession::new(GameSettings::default(), 0, SessionRng::new(7)).unwrap();
    session.set_player("bench").unwrap();
    session.start(Duration::ZERO);

    c.bench_function("snapshot", |b| b.iter(|| session.snapshot(black_box(FRAME))));
}

criterion_group!(benches, bench_frames, bench_snapshot);
criterion_main!(benches);
