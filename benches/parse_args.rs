//! Benchmark: schema compilation alone vs. full parse (compile + scan) for a typical
//! command line and a long one with many grouped flags.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flagschema::{compile, Args};

const SCHEMA: &str = "l, v, q, p#, t##, d*, o*, r##, n#";

fn long_command_line() -> Vec<String> {
    let mut tokens = Vec::new();
    for i in 0..200 {
        tokens.push("-lvq".to_string());
        tokens.push("-pn".to_string());
        tokens.push(i.to_string());
        tokens.push((i * 2).to_string());
        tokens.push("-d".to_string());
        tokens.push(format!("/tmp/dir{}", i));
        tokens.push("input.txt".to_string());
    }
    tokens
}

fn bench_parse_args(c: &mut Criterion) {
    let short = ["-l", "-p", "3002", "-d", "/var/tmp", "-t", "-0.25"];
    let long = long_command_line();

    c.bench_function("compile_schema", |b| {
        b.iter(|| compile(black_box(SCHEMA)))
    });
    c.bench_function("parse_short", |b| {
        b.iter(|| Args::new(black_box(SCHEMA), black_box(&short)))
    });
    c.bench_function("parse_long", |b| {
        b.iter(|| Args::new(black_box(SCHEMA), black_box(long.as_slice())))
    });
    c.bench_function("parse_unexpected", |b| {
        b.iter(|| Args::new(black_box("l"), black_box(&["-zyxwvu", "-l", "-abc"])))
    });
}

criterion_group!(benches, bench_parse_args);
criterion_main!(benches);
