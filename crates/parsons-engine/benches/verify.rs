use criterion::{Criterion, criterion_group, criterion_main};
use parsons_engine::{PuzzleOptions, build_puzzle, scramble};
mod common;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    let source = common::generate_puzzle_source(250);
    let options = PuzzleOptions::default();
    group.bench_function("build_1000_lines", |b| {
        b.iter(|| {
            let built = build_puzzle(std::hint::black_box(&source), &options);
            std::hint::black_box(built)
        });
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    let source = common::generate_puzzle_source(250);
    let Ok(built) = build_puzzle(&source, &PuzzleOptions::default()) else {
        return;
    };
    let definition = built.definition();
    let solution = definition.solution();

    group.bench_function("canonical", |b| {
        b.iter(|| definition.verify(std::hint::black_box(&solution)));
    });

    // Everything but the locked first line scrambled
    let mut scrambled = solution.clone();
    let tail = scramble(&definition.statements()[1..], 7);
    for (slot, statement) in tail.iter().enumerate() {
        if let Some(p) = scrambled.placement_mut(slot + 1) {
            p.line_number = statement.line_number;
            p.indent_level = statement.indent_level;
        }
    }
    group.bench_function("scrambled", |b| {
        b.iter(|| definition.verify(std::hint::black_box(&scrambled)));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_verify);
criterion_main!(benches);
