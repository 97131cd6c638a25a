use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spaceless::{RuleSet, SpacelessOptions, TransformOptions};

mod fixtures;
use fixtures::FIXTURES;

fn transform_benchmark(c: &mut Criterion) {
    for (name, source) in FIXTURES {
        c.bench_with_input(
            BenchmarkId::new("transform_sync", name),
            &source,
            |b, source| {
                let options = TransformOptions::default();
                b.iter(|| {
                    let _ = spaceless::transform_sync(black_box(source), &options);
                })
            },
        );
    }
}

fn rule_set_benchmark(c: &mut Criterion) {
    let options = SpacelessOptions::default();

    for (name, source) in FIXTURES {
        c.bench_with_input(
            BenchmarkId::new("rule set: defaults", name),
            &source,
            |b, source| {
                b.iter(|| RuleSet::from_options(&options).transform(black_box(source)))
            },
        );
    }
}

criterion_group!(benches, transform_benchmark, rule_set_benchmark);
criterion_main!(benches);
