//! Benchmarks for argument index construction and lookup

use control_args::{ArgIndex, FlagSpec, LaunchOptions};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn argv(len: usize) -> Vec<String> {
    let mut args = vec!["better-control".to_string()];
    for i in 0..len {
        let arg = match i % 4 {
            0 => format!("--opt{}", i),
            1 => format!("value{}", i),
            2 => "-abc".to_string(),
            _ => format!("-o=value{}", i),
        };
        args.push(arg);
    }
    args
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for len in [8, 64, 512] {
        let args = argv(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &args, |b, args| {
            b.iter(|| ArgIndex::from_args(black_box(args.iter().cloned())))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let index = ArgIndex::from_args(argv(512));
    let present = FlagSpec::new('o', "output");
    let absent = FlagSpec::new('z', "zzz");

    c.bench_function("find_arg_absent", |b| {
        b.iter(|| index.find_arg(black_box(&absent)))
    });
    c.bench_function("option_arg_present", |b| {
        b.iter(|| index.option_arg(black_box(&present)))
    });
    c.bench_function("launch_options", |b| {
        b.iter(|| LaunchOptions::from_index(black_box(&index)))
    });
}

criterion_group!(benches, bench_construction, bench_lookup);
criterion_main!(benches);
