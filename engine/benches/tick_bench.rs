use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use snake_engine::game::{Direction, GameSession, GameSettings, SessionRng};

// Clockwise perimeter lap: keeps the session alive for any number of ticks.
fn steer(session: &GameSession) -> Direction {
    let head = session.snake().head();
    let max_col = session.grid().width_cells() - 1;
    let max_row = session.grid().height_cells() - 1;

    if head.row == 0 && head.col < max_col {
        Direction::Right
    } else if head.col == max_col && head.row < max_row {
        Direction::Down
    } else if head.row == max_row && head.col > 0 {
        Direction::Left
    } else {
        Direction::Up
    }
}

fn run_ticks(ticks: u32) {
    let settings = GameSettings {
        surface_width: 200,
        surface_height: 200,
        ..GameSettings::default()
    };
    let mut session = GameSession::new(&settings, SessionRng::new(99)).unwrap();
    session.start();

    for _ in 0..ticks {
        session.set_direction(steer(&session));
        let _ = session.tick();
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");
    group.sampling_mode(SamplingMode::Flat);

    group.bench_function("100_ticks", |b| b.iter(|| run_ticks(100)));
    group.bench_function("1000_ticks", |b| b.iter(|| run_ticks(1000)));

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
